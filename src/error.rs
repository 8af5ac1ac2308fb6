use crate::{dataset::DatasetError, estimator::EstimatorError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LangcovError>;

#[derive(Debug, Error)]
pub enum LangcovError {
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
