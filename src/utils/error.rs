use thiserror::Error;

/// Banner text used when a failed call carries no usable detail.
pub const GENERIC_FAILURE: &str =
    "Could not obtain the analysis. Check your connection or try again later.";

const FAILURE_PREFIX: &str = "Could not obtain the analysis";

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("{message}")]
    Validation { message: String },

    #[error("The {var} environment variable is not configured.")]
    MissingCredential { var: String },

    #[error("The API did not return a text response.")]
    EmptyResponse,

    #[error("{}", .message.as_deref().unwrap_or("check your connection or try again later"))]
    RequestFailed { message: Option<String> },

    #[error("Malformed comparison payload: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised by a remote generative model before any payload is parsed.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("The {var} environment variable is not configured.")]
    MissingCredential { var: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Other(String),
}

impl From<ProviderError> for ComparisonError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential { var } => ComparisonError::MissingCredential { var },
            other => {
                let message = other.to_string();
                ComparisonError::RequestFailed {
                    message: (!message.trim().is_empty()).then_some(message),
                }
            }
        }
    }
}

impl ComparisonError {
    /// Text shown in the view's error banner.
    pub fn banner_message(&self) -> String {
        match self {
            ComparisonError::Validation { message } => message.clone(),
            ComparisonError::RequestFailed { message: None } => GENERIC_FAILURE.to_string(),
            other => format!("{}: {}", FAILURE_PREFIX, other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ComparisonError::Validation { .. } => "Fill in both options and submit again.",
            ComparisonError::MissingCredential { .. } => {
                "Export the API key in the configured environment variable and try again."
            }
            ComparisonError::EmptyResponse | ComparisonError::MalformedResponse(_) => {
                "The model answered in an unexpected format. Submitting again usually helps."
            }
            ComparisonError::RequestFailed { .. } => {
                "Check your network connection and API key, then try again."
            }
            ComparisonError::Config { .. } => "Review the command-line flags and config file.",
            ComparisonError::Io(_) => "Check that the terminal is still readable and writable.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ComparisonError>;
