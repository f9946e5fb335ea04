//! Directory service abstraction.
//!
//! The console never owns employee data; every read and write goes through a
//! [`DirectoryService`]. This module defines that interface, the error type
//! shared by all implementations, and [`DirectoryQuery`], the value the list
//! view uses to describe which read it wants.

use async_trait::async_trait;

use crate::entities::{Employee, NewEmployee};

pub mod factory;
pub mod http;
pub mod memory;

pub use factory::create_directory;
pub use http::HttpDirectory;
pub use memory::MemoryDirectory;

/// Common error types for directory operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Directory returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Directory error: {0}")]
    Other(String),
}

/// Remote system of record for employees and their addresses.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Short identifier shown in the status bar ("http", "memory").
    fn kind(&self) -> &str;

    // Reads
    async fn fetch_all(&self) -> Result<Vec<Employee>, DirectoryError>;
    async fn fetch_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, DirectoryError>;
    async fn fetch_by_last_name(&self, last_name: &str) -> Result<Vec<Employee>, DirectoryError>;
    async fn fetch_by_city(&self, city: &str) -> Result<Vec<Employee>, DirectoryError>;
    async fn fetch_by_state(&self, state: &str) -> Result<Vec<Employee>, DirectoryError>;
    async fn fetch_by_zip_code(&self, zip_code: &str) -> Result<Vec<Employee>, DirectoryError>;

    // Writes
    async fn create_employee(&self, draft: NewEmployee) -> Result<Employee, DirectoryError>;
    async fn update_employee(&self, employee: &Employee) -> Result<Employee, DirectoryError>;
    async fn delete_employee(&self, employee_id: &str) -> Result<(), DirectoryError>;
}

/// One remote read, keyed by its parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryQuery {
    All,
    FirstName(String),
    LastName(String),
    City(String),
    State(String),
    ZipCode(String),
}

impl DirectoryQuery {
    /// Issue exactly one read against the service.
    pub async fn execute(&self, service: &dyn DirectoryService) -> Result<Vec<Employee>, DirectoryError> {
        match self {
            DirectoryQuery::All => service.fetch_all().await,
            DirectoryQuery::FirstName(value) => service.fetch_by_first_name(value).await,
            DirectoryQuery::LastName(value) => service.fetch_by_last_name(value).await,
            DirectoryQuery::City(value) => service.fetch_by_city(value).await,
            DirectoryQuery::State(value) => service.fetch_by_state(value).await,
            DirectoryQuery::ZipCode(value) => service.fetch_by_zip_code(value).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DirectoryQuery::All => "everyone".to_string(),
            DirectoryQuery::FirstName(value) => format!("first name '{}'", value),
            DirectoryQuery::LastName(value) => format!("last name '{}'", value),
            DirectoryQuery::City(value) => format!("city '{}'", value),
            DirectoryQuery::State(value) => format!("state '{}'", value),
            DirectoryQuery::ZipCode(value) => format!("zip code '{}'", value),
        }
    }
}
