use thiserror::Error;

/// Errors raised by the buffer accessors around the formatter.
///
/// Formatting itself never fails: overflow truncates and mismatched
/// arguments render nothing. These variants only cover the edges where a
/// caller asks for something the content or destination cannot provide.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The destination slice has no room for the NUL terminator.
    #[error("destination buffer has zero capacity")]
    ZeroCapacity,
    /// The rendered bytes are not valid UTF-8.
    #[error("buffer content is not valid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl From<core::str::Utf8Error> for FormatError {
    fn from(err: core::str::Utf8Error) -> Self {
        FormatError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
