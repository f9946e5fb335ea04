use serde::{Deserialize, Deserializer};

pub mod address;
pub mod employee;

pub use address::Address;
pub use employee::{Employee, EmployeePatch, NewEmployee};

/// Read a string that the directory may send as `null`; `null` becomes empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
