use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl From<handlebars::TemplateError> for RentalError {
    fn from(err: handlebars::TemplateError) -> Self {
        RentalError::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for RentalError {
    fn from(err: handlebars::RenderError) -> Self {
        RentalError::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
