use super::{outline_color_line, positive_finite, Color, Shape, ShapeError, ShapeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    outline_color: Color,
}

impl Rectangle {
    pub fn new(outline_color: Color, width: f64, height: f64) -> ShapeResult<Self> {
        if !positive_finite(width) || !positive_finite(height) {
            tracing::debug!(width, height, "rejected rectangle dimensions");
            return Err(ShapeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            outline_color,
        })
    }

    /// Build from a color string; a parse failure propagates unchanged.
    pub fn from_color_str(outline_color: &str, width: f64, height: f64) -> ShapeResult<Self> {
        Self::new(Color::parse(outline_color)?, width, height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn describe(&self, precision: usize) -> String {
        format!(
            "Rectangle: width = {:.prec$}, height = {:.prec$}, area = {:.prec$}, perimeter = {:.prec$}, {}",
            self.width,
            self.height,
            self.area(),
            self.perimeter(),
            outline_color_line(self.outline_color),
            prec = precision,
        )
    }

    fn outline_color(&self) -> Color {
        self.outline_color
    }
}
