pub mod app_errors;
pub mod pagination;

/// Result of applying an update to a stored entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome<T> {
    /// The submitted values matched what was stored; nothing was written.
    Unchanged,
    Updated(T),
}
