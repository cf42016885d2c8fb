use thiserror::Error;

pub type Result<T> = std::result::Result<T, DockError>;

#[derive(Debug, Error)]
pub enum DockError {
    #[error("Window {0} is not known to the display server")]
    WindowNotFound(String),
    #[error("Unknown dock position: {0}")]
    InvalidPosition(String),
}
