pub mod color;
pub mod error;
pub mod logging;
pub mod shape;

pub use color::{Color, ColorError, ColorResult};
pub use error::{ModelError, ModelResult};
pub use shape::{Circle, Rectangle, Shape, ShapeError, ShapeResult, Triangle, DEFAULT_PRECISION};
