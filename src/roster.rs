//! Employee list state.
//!
//! [`Roster`] owns the in-memory employee sequence, the active search and the
//! page cursor. It never talks to the directory itself: the UI issues the
//! remote call and hands the confirmed result back here. Every mutation
//! rebuilds the [`Projection`] from scratch.

use crate::entities::{Address, Employee, EmployeePatch};
use crate::pagination::{PageRequest, Projection};
use crate::search::SearchQuery;

/// Lifecycle of the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one load request. Only the latest ticket may replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    status: ViewStatus,
    search: SearchQuery,
    page: PageRequest,
    projection: Projection,
    generation: u64,
}

impl Roster {
    pub fn new(search: SearchQuery, page: PageRequest) -> Self {
        let mut roster = Self {
            search,
            page,
            ..Default::default()
        };
        roster.rebuild_projection();
        roster
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    pub fn employee(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Start a load for `search`. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self, search: SearchQuery) -> LoadTicket {
        self.generation += 1;
        self.search = search;
        self.status = ViewStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Replace the whole sequence with a load response.
    ///
    /// Returns `false` and leaves the list untouched when `ticket` is not the
    /// most recent one.
    pub fn apply_loaded(&mut self, ticket: LoadTicket, employees: Vec<Employee>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Dropping stale load response (ticket {}, latest {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.employees = employees;
        self.status = ViewStatus::Ready;
        self.rebuild_projection();
        true
    }

    /// Record a failed load. Stale failures are ignored like stale successes.
    pub fn apply_load_failed(&mut self, ticket: LoadTicket, message: String) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.status = ViewStatus::Failed(message);
        true
    }

    /// Append employees confirmed by the directory, in order.
    pub fn append_created(&mut self, created: Vec<Employee>) {
        if created.is_empty() {
            return;
        }
        self.employees.extend(created);
        self.rebuild_projection();
    }

    /// Apply a confirmed name change. Returns `false` if the employee is gone.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) -> bool {
        match self.employees.iter_mut().find(|e| e.employee_id == patch.employee_id) {
            Some(employee) => {
                employee.apply_patch(patch);
                self.rebuild_projection();
                true
            }
            None => false,
        }
    }

    /// Replace one employee's addresses after a confirmed update.
    pub fn apply_addresses(&mut self, employee_id: &str, addresses: Vec<Address>) -> bool {
        match self.employees.iter_mut().find(|e| e.employee_id == employee_id) {
            Some(employee) => {
                employee.set_addresses(addresses);
                self.rebuild_projection();
                true
            }
            None => false,
        }
    }

    /// Remove the row for a confirmed delete.
    ///
    /// The row at `index` is removed when it still holds `employee_id`;
    /// otherwise the row is looked up by id. Returns the removed employee.
    pub fn remove_deleted(&mut self, employee_id: &str, index: usize) -> Option<Employee> {
        let position = match self.employees.get(index) {
            Some(employee) if employee.employee_id == employee_id => Some(index),
            _ => self.employees.iter().position(|e| e.employee_id == employee_id),
        }?;

        let removed = self.employees.remove(position);
        self.rebuild_projection();
        Some(removed)
    }

    pub fn set_page(&mut self, page: PageRequest) {
        self.page = page;
        self.rebuild_projection();
    }

    pub fn next_page(&mut self) {
        if self.projection.has_next() {
            self.set_page(PageRequest::new(self.page.page_index + 1, self.page.page_size));
        }
    }

    pub fn previous_page(&mut self) {
        if self.projection.has_previous() {
            self.set_page(PageRequest::new(self.page.page_index - 1, self.page.page_size));
        }
    }

    pub fn first_page(&mut self) {
        self.set_page(PageRequest::new(0, self.page.page_size));
    }

    pub fn last_page(&mut self) {
        self.set_page(PageRequest::new(usize::MAX, self.page.page_size));
    }

    pub fn cycle_page_size(&mut self) {
        self.set_page(self.page.cycle_page_size());
    }

    /// Rebuild the projection, then re-apply the clamped cursor.
    fn rebuild_projection(&mut self) {
        self.projection = Projection::build(&self.employees, self.page);
        self.page = self.projection.request();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Test".to_string(),
            addresses: vec![Address::placeholder()],
        }
    }

    #[test]
    fn test_last_page_clamps() {
        let mut roster = Roster::new(SearchQuery::default(), PageRequest::new(0, 5));
        let ticket = roster.begin_load(SearchQuery::default());
        roster.apply_loaded(ticket, (0..12).map(|i| employee(&i.to_string())).collect());

        roster.last_page();
        assert_eq!(roster.page().page_index, 2);
        roster.next_page();
        assert_eq!(roster.page().page_index, 2);
        roster.first_page();
        roster.previous_page();
        assert_eq!(roster.page().page_index, 0);
    }

    #[test]
    fn test_delete_on_last_row_of_page_moves_cursor_back() {
        let mut roster = Roster::new(SearchQuery::default(), PageRequest::new(1, 5));
        let ticket = roster.begin_load(SearchQuery::default());
        roster.apply_loaded(ticket, (0..6).map(|i| employee(&i.to_string())).collect());
        assert_eq!(roster.page().page_index, 1);

        roster.remove_deleted("5", 5);
        assert_eq!(roster.page().page_index, 0);
        assert_eq!(roster.projection().total, 5);
    }
}
