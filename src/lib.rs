//! rosterm - a terminal administration console for an employee directory
//!
//! Lists, paginates and searches employees held by a remote directory
//! service, and edits employees and their addresses through modal dialogs.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`directory`] - Directory service trait, HTTP client and in-memory directory
//! * [`entities`] - Employee and address records
//! * [`forms`] - Form state and field validation for the edit dialogs
//! * [`pagination`] - Paginated projection of the employee list
//! * [`roster`] - Employee list state
//! * [`search`] - Search criteria
//! * [`ui`] - Terminal user interface components and rendering

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Remote directory service access
pub mod directory;

/// Employee and address records as exchanged with the directory
pub mod entities;

/// Form state and validation
pub mod forms;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Paginated projection of the employee list
pub mod pagination;

/// Employee list state and load tickets
pub mod roster;

/// Search criteria and their mapping to directory queries
pub mod search;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{Address, Employee, EmployeePatch, NewEmployee};
