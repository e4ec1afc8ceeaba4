mod circle;
mod rectangle;
mod triangle;

use thiserror::Error;

pub use crate::color::{Color, ColorError};
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("invalid circle radius: {radius}")]
    InvalidRadius { radius: f64 },
    #[error("invalid rectangle dimensions: {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("invalid triangle sides: {a}, {b}, {c}")]
    InvalidSides { a: f64, b: f64, c: f64 },
}

/// Decimal digits used by [`Shape::describe_default`].
pub const DEFAULT_PRECISION: usize = 2;

/// Capability set every shape variant supplies.
///
/// Variants are immutable after construction: geometry and outline color are
/// validated up front and never change, so every method here is a pure
/// function of the value it was built with.
pub trait Shape {
    /// Exact area, non-negative.
    fn area(&self) -> f64;

    /// Exact perimeter, non-negative.
    fn perimeter(&self) -> f64;

    /// Human-readable description with floating-point fields rendered to
    /// `precision` decimal digits, ending with the shared outline color line.
    fn describe(&self, precision: usize) -> String;

    /// The owned outline color, by value.
    fn outline_color(&self) -> Color;

    fn describe_default(&self) -> String {
        self.describe(DEFAULT_PRECISION)
    }
}

/// Shared suffix of every variant's description, so the color always renders
/// the same way regardless of variant.
pub fn outline_color_line(color: Color) -> String {
    format!("Outline color: {color}")
}

pub(crate) fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
