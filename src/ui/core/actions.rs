use crate::directory::DirectoryError;
use crate::entities::{Address, Employee, EmployeePatch, NewEmployee};
use crate::roster::LoadTicket;
use crate::search::SearchQuery;

#[derive(Debug, Clone)]
pub enum Action {
    // Pagination
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    CyclePageSize,

    // Search
    Search(SearchQuery),
    Refresh,

    // Requests produced by dialogs
    CreateEmployees(Vec<NewEmployee>),
    EditEmployee(EmployeePatch),
    SaveAddresses {
        employee_id: String,
        addresses: Vec<Address>,
    },
    DeleteEmployee {
        employee_id: String,
        index: usize,
    },

    // Directory completions, sent by background tasks
    EmployeesLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Employee>, DirectoryError>,
    },
    EmployeesCreated {
        created: Vec<Employee>,
        failures: Vec<String>,
    },
    EmployeeUpdated(EmployeePatch),
    AddressesSaved {
        employee_id: String,
        addresses: Vec<Address>,
    },
    EmployeeDeleted {
        employee_id: String,
        index: usize,
    },
    OperationFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    EmployeeCreation,
    EmployeeEdit { employee: Employee },
    AddressList { employee: Employee },
    DeleteConfirmation { employee: Employee, index: usize },
    Error(String),
    Info(String),
    Help,
    Logs,
}
