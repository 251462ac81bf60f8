use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EdgeError {
    #[error("Location does not exist: {0}")]
    MissingNode(String),
    #[error("Path distance must not be negative: {0}")]
    InvalidWeight(i32),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("Unknown location: {0}")]
    UnknownNode(String),
}
