use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Content source unavailable: {path} ({reason})")]
    SourceUnavailable { path: String, reason: String },

    #[error("Malformed content in {path}: {message}")]
    MalformedContent { path: String, message: String },

    #[error("Failed to render post '{slug}': {message}")]
    RenderFailure { slug: String, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Content,
    Rendering,
    Transport,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::SourceUnavailable { .. } | PortfolioError::MalformedContent { .. } => {
                ErrorCategory::Content
            }
            PortfolioError::RenderFailure { .. } => ErrorCategory::Rendering,
            PortfolioError::HttpError(_)
            | PortfolioError::IoError(_)
            | PortfolioError::SerializationError(_) => ErrorCategory::Transport,
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 內容錯誤只會讓單一區塊退回預設值，因此嚴重度最低
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Content | ErrorCategory::Rendering => ErrorSeverity::Low,
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::SourceUnavailable { .. } => {
                "Check that the content file exists next to index.json and is readable"
            }
            PortfolioError::MalformedContent { .. } => {
                "Validate the JSON or front matter block of the reported file"
            }
            PortfolioError::RenderFailure { .. } => "Simplify the Markdown of the reported post",
            PortfolioError::HttpError(_) => "Verify the content base URL and network connectivity",
            PortfolioError::IoError(_) => "Verify the content directory path and permissions",
            PortfolioError::SerializationError(_) => "Validate the JSON syntax of the content files",
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => {
                "Review the configuration file and command line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::SourceUnavailable { path, .. } => {
                format!("Could not load '{}', that section will be empty", path)
            }
            PortfolioError::MalformedContent { path, .. } => {
                format!("'{}' could not be understood, that section will be empty", path)
            }
            PortfolioError::RenderFailure { slug, .. } => {
                format!("The post '{}' could not be displayed", slug)
            }
            PortfolioError::HttpError(_) => "The content server could not be reached".to_string(),
            PortfolioError::IoError(_) => "A content file could not be read".to_string(),
            PortfolioError::SerializationError(_) => "A content file is not valid JSON".to_string(),
            other => format!("Invalid configuration: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
