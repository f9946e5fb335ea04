//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod employee_list_component;
pub mod search_bar;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use employee_list_component::EmployeeListComponent;
pub use search_bar::SearchBarComponent;
pub use status_bar::StatusBar;
