use serde::{Deserialize, Deserializer, Serialize};

use super::address::Address;
use super::null_as_empty;

/// An employee record as held by the directory service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the directory service, never by the console.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default = "default_addresses", deserialize_with = "addresses_or_placeholder")]
    pub addresses: Vec<Address>,
}

fn default_addresses() -> Vec<Address> {
    vec![Address::placeholder()]
}

fn addresses_or_placeholder<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Address>>::deserialize(deserializer)?
        .filter(|addresses| !addresses.is_empty())
        .unwrap_or_else(default_addresses))
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Apply a confirmed name patch.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) {
        self.first_name = patch.first_name.clone();
        self.last_name = patch.last_name.clone();
    }

    /// Replace the address list, keeping at least one placeholder entry.
    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = if addresses.is_empty() {
            default_addresses()
        } else {
            addresses
        };
    }
}

/// Draft sent to the directory when creating an employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub addresses: Vec<Address>,
}

impl NewEmployee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            addresses: default_addresses(),
        }
    }

    /// Materialize the draft once the service has assigned an identifier.
    pub fn into_employee(self, employee_id: String) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            addresses: if self.addresses.is_empty() {
                default_addresses()
            } else {
                self.addresses
            },
        }
    }
}

/// Name change returned by the edit dialog and applied after the remote update succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeePatch {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
}
