//! Search criteria for the employee list.

use crate::constants::{DEFAULT_SEARCH_STATE, US_STATES};
use crate::directory::DirectoryQuery;

/// Which remote query the list view issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCriterion {
    #[default]
    Everyone,
    FirstName,
    LastName,
    City,
    State,
    ZipCode,
}

impl SearchCriterion {
    pub const ALL: [SearchCriterion; 6] = [
        SearchCriterion::Everyone,
        SearchCriterion::FirstName,
        SearchCriterion::LastName,
        SearchCriterion::City,
        SearchCriterion::State,
        SearchCriterion::ZipCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchCriterion::Everyone => "Everyone",
            SearchCriterion::FirstName => "First Name",
            SearchCriterion::LastName => "Last Name",
            SearchCriterion::City => "City",
            SearchCriterion::State => "State",
            SearchCriterion::ZipCode => "Zip Code",
        }
    }

    /// Exact label lookup (case-insensitive).
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Label lookup that falls back to [`SearchCriterion::Everyone`].
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the criterion reads the free-text parameter.
    pub fn uses_text(self) -> bool {
        matches!(
            self,
            SearchCriterion::FirstName | SearchCriterion::LastName | SearchCriterion::City | SearchCriterion::ZipCode
        )
    }
}

/// Active search: criterion plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub criterion: SearchCriterion,
    pub text: String,
    pub state: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            criterion: SearchCriterion::Everyone,
            text: String::new(),
            state: DEFAULT_SEARCH_STATE.to_string(),
        }
    }
}

impl SearchQuery {
    pub fn new(criterion: SearchCriterion, text: impl Into<String>) -> Self {
        Self {
            criterion,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn by_state(state: impl Into<String>) -> Self {
        Self {
            criterion: SearchCriterion::State,
            state: state.into(),
            ..Default::default()
        }
    }

    /// Route to the remote read for the active criterion.
    pub fn to_directory_query(&self) -> DirectoryQuery {
        let text = self.text.trim().to_string();
        match self.criterion {
            SearchCriterion::Everyone => DirectoryQuery::All,
            SearchCriterion::FirstName => DirectoryQuery::FirstName(text),
            SearchCriterion::LastName => DirectoryQuery::LastName(text),
            SearchCriterion::City => DirectoryQuery::City(text),
            SearchCriterion::State => DirectoryQuery::State(self.state.clone()),
            SearchCriterion::ZipCode => DirectoryQuery::ZipCode(text),
        }
    }

    pub fn next_state(&mut self) {
        self.state = step_state(&self.state, 1);
    }

    pub fn previous_state(&mut self) {
        self.state = step_state(&self.state, US_STATES.len() - 1);
    }
}

fn step_state(current: &str, step: usize) -> String {
    let index = US_STATES.iter().position(|s| *s == current).unwrap_or(0);
    US_STATES[(index + step) % US_STATES.len()].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for criterion in SearchCriterion::ALL {
            assert_eq!(SearchCriterion::from_label(criterion.label()), criterion);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_everyone() {
        assert_eq!(SearchCriterion::from_label("Department"), SearchCriterion::Everyone);
        assert_eq!(SearchCriterion::from_label(""), SearchCriterion::Everyone);
        assert!(SearchCriterion::parse("Department").is_none());
    }

    #[test]
    fn test_criterion_cycles() {
        assert_eq!(SearchCriterion::ZipCode.next(), SearchCriterion::Everyone);
        assert_eq!(SearchCriterion::Everyone.previous(), SearchCriterion::ZipCode);
    }

    #[test]
    fn test_state_selector_wraps() {
        let mut query = SearchQuery::by_state("Wyoming");
        query.next_state();
        assert_eq!(query.state, "Alabama");
        query.previous_state();
        assert_eq!(query.state, "Wyoming");
    }

    #[test]
    fn test_state_criterion_ignores_text() {
        let mut query = SearchQuery::by_state("Texas");
        query.text = "Austin".to_string();
        assert_eq!(query.to_directory_query(), DirectoryQuery::State("Texas".to_string()));
    }
}
