use thiserror::Error;

/// Errors raised by toggle reducers.
///
/// These are programmer errors: a reducer was handed an action kind it does
/// not know how to reduce. They are never produced by the built-in `Toggle`
/// and `Reset` actions when the default reducer is in use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Unsupported type: {0}")]
    UnsupportedAction(String),
}
