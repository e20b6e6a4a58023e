use thiserror::Error;

/// The only failure the subscription submitter reports.
///
/// Transport errors and non-success responses are deliberately folded into
/// this one kind; the underlying cause is logged where it happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Something went wrong: Error sending API Call")]
pub struct SubmissionError;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NotifyError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            NotifyError::Submission(_) => {
                "Could not register for notifications, the subscription request failed".to_string()
            }
            NotifyError::IoError(e) => format!("Could not read input: {}", e),
            NotifyError::ConfigError { message } => format!("Configuration problem: {}", message),
            NotifyError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            NotifyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotifyError::Submission(_) => {
                "Check that the backend is reachable at the configured base URL and try again"
            }
            NotifyError::IoError(_) => "Check that the input file exists and is readable",
            NotifyError::ConfigError { .. } => "Check the syntax of the configuration file",
            NotifyError::MissingConfigError { .. } => {
                "Add the setting to the [provider] section of the configuration file"
            }
            NotifyError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or on the command line"
            }
        }
    }

    /// Process exit status for the CLI: 1 for configuration problems,
    /// 2 for a failed submission, 3 for I/O failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            NotifyError::ConfigError { .. }
            | NotifyError::MissingConfigError { .. }
            | NotifyError::InvalidConfigValueError { .. } => 1,
            NotifyError::Submission(_) => 2,
            NotifyError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
