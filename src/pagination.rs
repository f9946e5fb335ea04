//! Paginated projection of the employee sequence.
//!
//! The projection is never edited; it is rebuilt from the full sequence every
//! time the sequence or the page request changes.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::entities::Employee;

/// Requested page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self { page_index, page_size }
    }

    /// Next entry of [`PAGE_SIZE_OPTIONS`], wrapping. Resets to the first page.
    pub fn cycle_page_size(self) -> Self {
        let index = PAGE_SIZE_OPTIONS.iter().position(|s| *s == self.page_size);
        let page_size = match index {
            Some(i) => PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()],
            None => DEFAULT_PAGE_SIZE,
        };
        Self { page_index: 0, page_size }
    }
}

/// One page of rows plus the numbers a paginator needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    pub rows: Vec<ProjectedRow>,
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
}

/// A row on the current page, remembering its position in the full sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub index: usize,
    pub employee: Employee,
}

impl Projection {
    /// Build the page for `request`, clamping the page index into range.
    pub fn build(employees: &[Employee], request: PageRequest) -> Self {
        let page_size = request.page_size.max(1);
        let total = employees.len();
        let page_count = total.div_ceil(page_size).max(1);
        let page_index = request.page_index.min(page_count - 1);

        let start = page_index * page_size;
        let rows = employees
            .iter()
            .enumerate()
            .skip(start)
            .take(page_size)
            .map(|(index, employee)| ProjectedRow {
                index,
                employee: employee.clone(),
            })
            .collect();

        Self {
            rows,
            page_index,
            page_size,
            page_count,
            total,
        }
    }

    /// Cursor actually used after clamping.
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page_index, self.page_size)
    }

    /// "11-20 of 42" style range label.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let first = self.page_index * self.page_size + 1;
        let last = first + self.rows.len() - 1;
        format!("{}-{} of {}", first, last, self.total)
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees(count: usize) -> Vec<Employee> {
        (0..count)
            .map(|i| Employee {
                employee_id: i.to_string(),
                first_name: format!("First{}", i),
                last_name: format!("Last{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_has_one_empty_page() {
        let projection = Projection::build(&[], PageRequest::default());
        assert!(projection.rows.is_empty());
        assert_eq!(projection.page_count, 1);
        assert_eq!(projection.page_index, 0);
        assert_eq!(projection.range_label(), "0 of 0");
    }

    #[test]
    fn test_last_partial_page() {
        let list = employees(23);
        let projection = Projection::build(&list, PageRequest::new(2, 10));
        assert_eq!(projection.rows.len(), 3);
        assert_eq!(projection.rows[0].index, 20);
        assert_eq!(projection.page_count, 3);
        assert_eq!(projection.range_label(), "21-23 of 23");
        assert!(!projection.has_next());
        assert!(projection.has_previous());
    }

    #[test]
    fn test_page_index_clamped_after_shrink() {
        let list = employees(11);
        let projection = Projection::build(&list, PageRequest::new(5, 5));
        assert_eq!(projection.page_index, 2);
        assert_eq!(projection.rows.len(), 1);
    }

    #[test]
    fn test_page_size_cycles_and_resets_page() {
        let request = PageRequest::new(3, 50).cycle_page_size();
        assert_eq!(request, PageRequest::new(0, 5));
        assert_eq!(PageRequest::new(1, 7).cycle_page_size().page_size, DEFAULT_PAGE_SIZE);
    }
}
