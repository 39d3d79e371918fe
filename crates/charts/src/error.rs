//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The drawing backend rejected an operation
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

// Backend errors are generic over the backend type; flatten them to text so
// callers don't have to name the backend.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
