use thiserror::Error;

/// Errors that can occur while parsing oto records
///
/// Oto text is line oriented; each line registers one sample segment under an
/// alias. Errors generally fall into two categories:
///
/// - Syntax errors: a line that does not follow the `file=alias,numbers...`
///   shape at all
/// - Value errors: a line with the right shape but a timing field that is not
///   a number
///
/// # Common oto problems
///
/// When working with voicebank oto text, common issues include:
///
/// - A missing `=` separator between the sample file name and the alias part
/// - Timing fields containing stray characters (often from hand editing)
/// - Locale decimal commas inside a comma-separated record
#[derive(Error, Debug)]
pub enum Error {
    /// General syntax error for a malformed line
    ///
    /// The line could not be split into a sample file part and a record part.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message describing the problem
        message: String,
    },

    /// A timing field that could not be read as a number
    ///
    /// The five timing fields (offset, consonant, cutoff, preutterance,
    /// overlap) must be decimal numbers of milliseconds. Empty fields are
    /// allowed and default to zero; anything else must parse.
    #[error("invalid value '{value}' for field {field} at line {line}")]
    InvalidField {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Name of the timing field
        field: &'static str,
        /// The offending value
        value: String,
    },
}
