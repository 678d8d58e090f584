use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors reported by the fallible [`List`](crate::List) operations.
///
/// Every variant is detected before any link is rewired, so a failed
/// operation leaves the ring untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one element and the list has none.
    Empty,
    /// The index, after counting negative values from the back, falls
    /// outside the bounds of the list.
    OutOfRange {
        /// The index as the caller passed it, before normalization.
        index: isize,
        /// The length of the list at the time of the call.
        len: usize,
    },
    /// The node handle refers to a removed node, or to a slot this list
    /// never issued.
    InvalidNode,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "list is empty"),
            ListError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            ListError::InvalidNode => write!(f, "node handle is stale or foreign"),
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn display_messages() {
        assert_eq!(ListError::Empty.to_string(), "list is empty");
        assert_eq!(
            ListError::OutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 out of range for list of length 3"
        );
        assert_eq!(
            ListError::InvalidNode.to_string(),
            "node handle is stale or foreign"
        );
    }
}
