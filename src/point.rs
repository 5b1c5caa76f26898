use serde_derive::*;

/// A point in the plane. Its identity is its index in the input sequence.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let a = Point::new(1e200, 0.0);
        let b = Point::new(0.0, 1e200);
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!((d / 1e200 - std::f64::consts::SQRT_2).abs() < 1e-12);

        let far = Point::new(1e308, 0.0).distance_to(&Point::new(-1e308, 0.0));
        assert!(far.is_infinite());
    }
}
