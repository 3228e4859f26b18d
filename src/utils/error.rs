use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned non-success status: {status}")]
    StatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Favicon error: {message}")]
    FaviconError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PortfolioError {
    /// Whether the error belongs to the project-loading failure domain
    /// (network, status or body parsing).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            PortfolioError::ApiError(_)
                | PortfolioError::StatusError { .. }
                | PortfolioError::SerializationError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::ApiError(_)
            | PortfolioError::StatusError { .. }
            | PortfolioError::SerializationError(_) => {
                "Could not load projects. Please try again later.".to_string()
            }
            PortfolioError::IoError(e) => format!("Could not write the page: {}", e),
            PortfolioError::TemplateError(_) => "Could not render the page.".to_string(),
            PortfolioError::ImageError(_) | PortfolioError::FaviconError { .. } => {
                "Could not round the favicon.".to_string()
            }
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
