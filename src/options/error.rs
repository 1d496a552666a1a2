use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The token is not a member of the named vocabulary.
    UnrecognizedToken {
        vocabulary: &'static str,
        token: String,
    },
}

impl Display for OptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::UnrecognizedToken { vocabulary, token } => {
                write!(f, "`{token}` is not a recognized {vocabulary} token")
            }
        }
    }
}

impl Error for OptionError {}
