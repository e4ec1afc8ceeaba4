use std::f64::consts::PI;

use super::{outline_color_line, positive_finite, Color, Shape, ShapeError, ShapeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    outline_color: Color,
}

impl Circle {
    pub fn new(outline_color: Color, radius: f64) -> ShapeResult<Self> {
        if !positive_finite(radius) {
            tracing::debug!(radius, "rejected circle radius");
            return Err(ShapeError::InvalidRadius { radius });
        }
        Ok(Self {
            radius,
            outline_color,
        })
    }

    /// Build from a color string; a parse failure propagates unchanged.
    pub fn from_color_str(outline_color: &str, radius: f64) -> ShapeResult<Self> {
        Self::new(Color::parse(outline_color)?, radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn describe(&self, precision: usize) -> String {
        format!(
            "Circle: radius = {:.prec$}, area = {:.prec$}, perimeter = {:.prec$}, {}",
            self.radius,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorError;

    #[test]
    fn area_and_perimeter_use_exact_formulas() {
        let circle = Circle::new(Color::new(0, 0, 0), 2.5).unwrap();
        assert_eq!(circle.area(), PI * 2.5 * 2.5);
        assert_eq!(circle.perimeter(), 2.0 * PI * 2.5);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Circle::new(Color::new(0, 0, 0), radius);
            assert!(
                matches!(result, Err(ShapeError::InvalidRadius { .. })),
                "{radius}"
            );
        }
    }

    #[test]
    fn builds_from_color_string() {
        let circle = Circle::from_color_str("#00FF00", 10.0).unwrap();
        assert_eq!(circle.outline_color().to_hex_string(), "#00FF00");
        assert_eq!(circle.radius(), 10.0);
    }

    #[test]
    fn color_parse_failure_propagates_unchanged() {
        let err = Circle::from_color_str("#ZZZZZZ", 10.0).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Color(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn describe_renders_requested_precision() {
        let circle = Circle::from_color_str("#00FF00", 1.0).unwrap();
        let description = circle.describe(4);
        assert!(description.starts_with("Circle: radius = 1.0000"));
        assert!(description.contains("area = 3.1416"));
        assert!(description.contains("perimeter = 6.2832"));
        assert!(description.ends_with("Outline color: #00FF00"));

        let coarse = circle.describe(0);
        assert!(coarse.contains("area = 3,"));
    }
}
