//! Frontend Models
//!
//! UI-only state types. Ledger and service payloads live in `ingredient_ledger`.

/// How the user describes the dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Image,
    Text,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Image, SearchMode::Text];

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Image => "Search by Image",
            SearchMode::Text => "Search by Text",
        }
    }
}

/// Lifecycle of one outstanding service request.
///
/// Requests are not sequenced: a later response overwrites an earlier one.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Default for RequestStatus<T> {
    fn default() -> Self {
        RequestStatus::Idle
    }
}
