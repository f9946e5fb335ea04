use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A postal address owned by exactly one employee.
///
/// Fields missing from the wire, or sent as `null`, deserialize to empty
/// strings so a freshly created placeholder record round-trips cleanly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_empty")]
    pub street_address: String,
    pub apt_number: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub zip_code: String,
}

impl Address {
    /// Blank address used as the placeholder on new employees.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// True when no field carries any data.
    pub fn is_blank(&self) -> bool {
        self.street_address.is_empty()
            && self.apt_number.as_deref().map_or(true, str::is_empty)
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip_code.is_empty()
    }

    /// Single-line summary used by list rows.
    pub fn one_line(&self) -> String {
        if self.is_blank() {
            return "(empty address)".to_string();
        }

        let street = match self.apt_number.as_deref() {
            Some(apt) if !apt.is_empty() => format!("{} #{}", self.street_address, apt),
            _ => self.street_address.clone(),
        };
        format!("{}, {}, {} {}", street, self.city, self.state, self.zip_code)
    }
}
