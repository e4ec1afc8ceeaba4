use crate::color::ColorError;
use crate::shape::ShapeError;
use thiserror::Error;

pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
