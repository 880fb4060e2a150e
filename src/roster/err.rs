/// Errors surfaced by a roster run
#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    /// input unreadable or output unwritable
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    /// a line that does not match the record format
    #[error("line {line}: malformed record `{text}`, expected: <fname> <lname> <Mon-dd-yyyy> <gpa> <D|I [toefl]>")]
    MalformedRecord { line: usize, text: String },
    /// the roster contained no records
    #[error("input file is empty")]
    EmptyInput,
    /// report mode outside the valid set
    #[error("invalid report mode `{0}`, expected 1|domestic, 2|international or 3|all")]
    InvalidMode(String),
    /// regex related errors
    #[error("failed to parse or compile a regular expression: {0}")]
    Regex(#[from] regex::Error),
}
