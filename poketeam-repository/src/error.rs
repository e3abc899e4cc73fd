use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RepositoryError {
    #[error("pokemon {0} does not exist")]
    NotFound(String),
    #[error("pokemon lookup failed: {0}")]
    Transport(String),
}
