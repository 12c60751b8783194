#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// Raised by `Item::new` when the weight is not positive (density undefined) or the
    /// value is negative.
    InvalidItem {
        index: usize,
        value: i64,
        weight: i64,
    },
    InvalidCapacity {
        capacity: i64,
    },
    InvalidToken {
        line: usize,
        token: String,
    },
    MissingHeader,
    MissingItems {
        expected: usize,
        found: usize,
    },
    MisplacedItem {
        position: usize,
        index: usize,
    },
    Overflow,
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeError::InvalidItem {
                index,
                value,
                weight,
            } => write!(
                f,
                "Item {} is invalid (value: {}, weight: {}). Weight must be positive and value non-negative",
                index, value, weight
            ),
            ChallengeError::InvalidCapacity { capacity } => {
                write!(f, "Capacity ({}) must be non-negative", capacity)
            }
            ChallengeError::InvalidToken { line, token } => {
                write!(f, "Line {}: '{}' is not an integer", line, token)
            }
            ChallengeError::MissingHeader => {
                write!(f, "Input is empty. Expecting '<items_count> <capacity>'")
            }
            ChallengeError::MissingItems { expected, found } => write!(
                f,
                "Expecting {} item lines, but only {} were found",
                expected, found
            ),
            ChallengeError::MisplacedItem { position, index } => write!(
                f,
                "Item with index {} is stored at position {}",
                index, position
            ),
            ChallengeError::Overflow => {
                write!(f, "Total value or total weight of the items overflows u64")
            }
            ChallengeError::WrongTokenCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {}: expecting {} tokens, but found {}",
                line, expected, found
            ),
        }
    }
}

impl std::error::Error for ChallengeError {}
