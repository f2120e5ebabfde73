use thiserror::Error;

/// Failures of UI actions. None of these are fatal; handlers log them and
/// abandon only the action that failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Typing animation needs at least one phrase")]
    NoPhrases,
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Document is not available")]
    NoDocument,
    #[error("No section with id '{0}'")]
    MissingSection(String),
    #[error("Couldn't copy to clipboard: {0}")]
    Clipboard(String),
    #[error("Couldn't open '{0}'")]
    Open(String),
    #[error("Couldn't schedule timer: {0}")]
    Timer(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name")]
    Name,
    #[error("Please enter a valid email")]
    Email,
    #[error("Please enter a message")]
    Message,
}
