use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream {endpoint} returned {status}: {message}")]
    UpstreamError {
        endpoint: String,
        status: String,
        message: String,
    },

    #[error("Invalid upstream response from {endpoint}: {message}")]
    InvalidResponseError { endpoint: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Session store error: {message}")]
    SessionError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Session,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ApiError(_) => ErrorCategory::Network,
            DashboardError::UpstreamError { .. } | DashboardError::InvalidResponseError { .. } => {
                ErrorCategory::Upstream
            }
            DashboardError::SessionError { .. } => ErrorCategory::Session,
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DashboardError::IoError(_) | DashboardError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Session | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 上游 (電信商 API) 造成的失敗，頁面回應 502
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Upstream
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::ApiError(_) => "Could not reach the carrier API".to_string(),
            DashboardError::UpstreamError { endpoint, .. } => {
                format!("The carrier API rejected the {} request", endpoint)
            }
            DashboardError::InvalidResponseError { endpoint, .. } => {
                format!("The carrier API sent an unexpected {} response", endpoint)
            }
            DashboardError::SessionError { .. } => {
                "The saved account session could not be read".to_string()
            }
            DashboardError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            DashboardError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            DashboardError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            DashboardError::IoError(e) => format!("File system error: {}", e),
            DashboardError::ServerError { message } => format!("Server error: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and carrier.base_url",
            ErrorCategory::Upstream => "Log in again to refresh the saved tokens, then reload",
            ErrorCategory::Session => "Check the session store file or log in again",
            ErrorCategory::Configuration => "Fix the configuration file and restart",
            ErrorCategory::System => "Check file permissions and the bind address",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
