//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_EMPLOYEE_CREATED: &str = "✅ Employee created";
pub const SUCCESS_EMPLOYEES_CREATED: &str = "✅ Employees created";
pub const SUCCESS_EMPLOYEE_UPDATED: &str = "✅ Employee updated";
pub const SUCCESS_EMPLOYEE_DELETED: &str = "✅ Employee deleted";
pub const SUCCESS_ADDRESSES_UPDATED: &str = "✅ Addresses updated";

// Error Messages
pub const ERROR_LOAD_FAILED: &str = "❌ Failed to load employees";
pub const ERROR_CREATE_FAILED: &str = "❌ Failed to create employee";
pub const ERROR_UPDATE_FAILED: &str = "❌ Failed to update employee";
pub const ERROR_DELETE_FAILED: &str = "❌ Failed to delete employee";
pub const ERROR_ADDRESSES_FAILED: &str = "❌ Failed to update addresses";
pub const ERROR_NO_EMPLOYEE_SELECTED: &str = "No employee selected";
pub const ERROR_LAST_ADDRESS: &str = "An employee must keep at least one address";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const APP_TITLE: &str = "Employee Directory";

// Validation Messages
pub const VALIDATION_REQUIRED: &str = "This field is required";
pub const VALIDATION_ZIP_CHARACTERS: &str = "Only digits and dashes are allowed";

// Search defaults
pub const DEFAULT_SEARCH_STATE: &str = "Alabama";

// Pagination
/// Page sizes offered by the page size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Validation
/// Minimum zip code length
pub const ZIP_CODE_MIN_LENGTH: usize = 5;

// Logging
/// Entries kept in the in-memory log buffer; older ones are dropped
pub const MAX_LOG_ENTRIES: usize = 1000;

// Directory
pub const DEFAULT_DIRECTORY_URL: &str = "http://localhost:8080/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// States offered by the state search selector
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];
