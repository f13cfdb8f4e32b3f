use std::fmt;

/// Failure of a list accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// `first` or `second` was asked of the empty marker.
    EmptyList {
        /// Name of the accessor that was called
        accessor: &'static str,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::EmptyList { accessor } => {
                write!(f, "cannot take `{accessor}` of the empty list")
            }
        }
    }
}

impl std::error::Error for AccessError {}
