use super::{outline_color_line, positive_finite, Color, Shape, ShapeError, ShapeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
    outline_color: Color,
}

impl Triangle {
    /// Sides must be positive, finite, and satisfy the triangle inequality.
    pub fn new(outline_color: Color, a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        let sides_positive = positive_finite(a) && positive_finite(b) && positive_finite(c);
        let inequality_holds = a + b > c && a + c > b && b + c > a;
        if !sides_positive || !inequality_holds {
            tracing::debug!(a, b, c, "rejected triangle sides");
            return Err(ShapeError::InvalidSides { a, b, c });
        }
        Ok(Self {
            a,
            b,
            c,
            outline_color,
        })
    }

    /// Build from a color string; a parse failure propagates unchanged.
    pub fn from_color_str(outline_color: &str, a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        Self::new(Color::parse(outline_color)?, a, b, c)
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Shape for Triangle {
    /// Heron's formula.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    fn describe(&self, precision: usize) -> String {
        format!(
            "Triangle: sides = {:.prec$} x {:.prec$} x {:.prec$}, area = {:.prec$}, \
             perimeter = {:.prec$}, {}",
            self.a,
            self.b,
            self.c,
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
    fn right_triangle_has_exact_area_and_perimeter() {
        let triangle = Triangle::new(Color::new(0, 0, 0), 3.0, 4.0, 5.0).unwrap();
        assert_eq!(triangle.perimeter(), 12.0);
        assert!((triangle.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_sides() {
        let color = Color::new(0, 0, 0);
        for (a, b, c) in [(0.0, 4.0, 5.0), (3.0, -4.0, 5.0), (3.0, 4.0, f64::NAN)] {
            let result = Triangle::new(color, a, b, c);
            assert!(
                matches!(result, Err(ShapeError::InvalidSides { .. })),
                "{a}, {b}, {c}"
            );
        }
    }

    #[test]
    fn rejects_sides_violating_triangle_inequality() {
        let color = Color::new(0, 0, 0);
        for (a, b, c) in [(1.0, 2.0, 10.0), (10.0, 2.0, 1.0), (1.0, 2.0, 3.0)] {
            let result = Triangle::new(color, a, b, c);
            assert!(
                matches!(result, Err(ShapeError::InvalidSides { .. })),
                "{a}, {b}, {c}"
            );
        }
    }

    #[test]
    fn color_parse_failure_propagates_unchanged() {
        let err = Triangle::from_color_str("oops", 3.0, 4.0, 5.0).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Color(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn describe_includes_geometry_and_color() {
        let triangle = Triangle::from_color_str("#00FF00", 3.0, 4.0, 5.0).unwrap();
        let description = triangle.describe(2);
        assert!(description.starts_with("Triangle: sides = 3.00 x 4.00 x 5.00"));
        assert!(description.contains("area = 6.00"));
        assert!(description.contains("perimeter = 12.00"));
        assert!(description.ends_with("Outline color: #00FF00"));
    }
}
