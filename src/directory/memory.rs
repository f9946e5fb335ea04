//! In-process directory used for demo mode and tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use super::{DirectoryError, DirectoryService};
use crate::entities::{Address, Employee, NewEmployee};

/// Directory held in memory. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl MemoryDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(Mutex::new(employees)),
        }
    }

    /// Directory pre-filled with a handful of sample employees.
    pub fn with_sample_data() -> Self {
        let sample = [
            ("Ada", "Lovelace", "12 Analytical Way", None, "Birmingham", "Alabama", "35203"),
            ("Grace", "Hopper", "1 Navy Yard", Some("4B"), "Arlington", "Virginia", "22202"),
            ("Alan", "Turing", "7 Bletchley Rd", None, "Austin", "Texas", "73301"),
            ("Edsger", "Dijkstra", "3 Shortest Path", None, "Austin", "Texas", "78701"),
            ("Barbara", "Liskov", "55 Substitution St", Some("12"), "Boston", "Massachusetts", "02108"),
            ("Donald", "Knuth", "42 Art Ave", None, "Palo Alto", "California", "94301"),
            ("Margaret", "Hamilton", "11 Apollo Ct", None, "Boston", "Massachusetts", "02109"),
            ("Dennis", "Ritchie", "8 Unix Blvd", None, "Summit", "New Jersey", "07901"),
            ("Ken", "Thompson", "9 Plan Nine Ln", None, "Summit", "New Jersey", "07902"),
            ("Frances", "Allen", "2 Optimizer Dr", None, "Peru", "New York", "12972"),
            ("John", "Backus", "6 Fortran Pl", Some("1A"), "Tucson", "Arizona", "85701"),
            ("Leslie", "Lamport", "14 Paxos Path", None, "Mountain View", "California", "94040"),
        ];

        let employees = sample
            .iter()
            .map(|(first, last, street, apt, city, state, zip)| Employee {
                employee_id: Uuid::new_v4().to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                addresses: vec![Address {
                    street_address: street.to_string(),
                    apt_number: apt.map(str::to_string),
                    city: city.to_string(),
                    state: state.to_string(),
                    zip_code: zip.to_string(),
                }],
            })
            .collect();

        Self::new(employees)
    }

    /// Snapshot of every stored record.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.lock().map(|employees| employees.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Employee>>, DirectoryError> {
        self.employees
            .lock()
            .map_err(|_| DirectoryError::Other("memory directory lock poisoned".to_string()))
    }

    fn filter<F>(&self, predicate: F) -> Result<Vec<Employee>, DirectoryError>
    where
        F: Fn(&Employee) -> bool,
    {
        Ok(self.lock()?.iter().filter(|e| predicate(e)).cloned().collect())
    }

    fn any_address<F>(employee: &Employee, predicate: F) -> bool
    where
        F: Fn(&Address) -> bool,
    {
        employee.addresses.iter().any(predicate)
    }
}

fn same(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[async_trait]
impl DirectoryService for MemoryDirectory {
    fn kind(&self) -> &str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|_| true)
    }

    async fn fetch_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|e| same(&e.first_name, first_name))
    }

    async fn fetch_by_last_name(&self, last_name: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|e| same(&e.last_name, last_name))
    }

    async fn fetch_by_city(&self, city: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|e| Self::any_address(e, |a| same(&a.city, city)))
    }

    async fn fetch_by_state(&self, state: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|e| Self::any_address(e, |a| same(&a.state, state)))
    }

    async fn fetch_by_zip_code(&self, zip_code: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|e| Self::any_address(e, |a| a.zip_code.trim() == zip_code.trim()))
    }

    async fn create_employee(&self, draft: NewEmployee) -> Result<Employee, DirectoryError> {
        if draft.first_name.trim().is_empty() || draft.last_name.trim().is_empty() {
            return Err(DirectoryError::InvalidData("first and last name are required".to_string()));
        }

        let employee = draft.into_employee(Uuid::new_v4().to_string());
        self.lock()?.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<Employee, DirectoryError> {
        let mut employees = self.lock()?;
        let stored = employees
            .iter_mut()
            .find(|e| e.employee_id == employee.employee_id)
            .ok_or_else(|| DirectoryError::NotFound(employee.employee_id.clone()))?;
        *stored = employee.clone();
        Ok(stored.clone())
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), DirectoryError> {
        let mut employees = self.lock()?;
        let position = employees
            .iter()
            .position(|e| e.employee_id == employee_id)
            .ok_or_else(|| DirectoryError::NotFound(employee_id.to_string()))?;
        employees.remove(position);
        Ok(())
    }
}
