//! Dashboard task-status filter.

use serde::Serialize;

/// Which slice of a user's tasks the dashboard shows.
///
/// Parsed leniently from the `filter` query parameter: anything that is not a
/// recognized selector (including an absent parameter) behaves as [`All`].
///
/// [`All`]: TaskFilter::All
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
    Overdue,
}

impl TaskFilter {
    /// Parse a filter selector. Unrecognized values fall back to `All`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("completed") => Self::Completed,
            Some("pending") => Self::Pending,
            Some("overdue") => Self::Overdue,
            _ => Self::All,
        }
    }

    /// The wire name echoed back to clients as the active filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}
