//! Exact rational coordinates.
//!
//! Every structural decision in the slab partition — is an edge vertical,
//! is it horizontal, which hit point lies lower on a cut line — is an
//! equality or ordering test on coordinates. Intersection points produced
//! by the cut passes are generally non-integer, so coordinates are
//! arbitrary-precision rationals throughout; floating point would silently
//! misclassify near-axis-aligned edges.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// An exact coordinate value.
pub type Coord = BigRational;

/// Build a [`Coord`] from an integer. Convenient for literals in tests
/// and benchmarks.
pub fn coord(n: i64) -> Coord {
    BigRational::from_integer(BigInt::from(n))
}

/// A point in the plane with exact rational coordinates.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// The x coordinate.
    pub x: Coord,
    /// The y coordinate.
    pub y: Coord,
}

impl Point {
    /// Create a point from exact coordinates.
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Create a point from integer coordinates.
    pub fn from_integers(x: i64, y: i64) -> Self {
        Self::new(coord(x), coord(y))
    }

    /// Create a point from two ratios `xn/xd` and `yn/yd`.
    ///
    /// # Panics
    /// Panics if a denominator is zero.
    pub fn from_ratios(xn: i64, xd: i64, yn: i64, yd: i64) -> Self {
        Self::new(
            BigRational::new(BigInt::from(xn), BigInt::from(xd)),
            BigRational::new(BigInt::from(yn), BigInt::from(yd)),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Intersect segment `a`–`b` with the vertical line `x = x0`.
///
/// The intersection is computed by exact parametric interpolation:
/// `y = a.y + (x0 − a.x) / (b.x − a.x) · (b.y − a.y)`.
///
/// The caller guarantees `a.x != b.x` and `x0` strictly between them.
pub fn intersect_vertical_line(a: &Point, b: &Point, x0: &Coord) -> Point {
    let t = (x0 - &a.x) / (&b.x - &a.x);
    let y = &a.y + t * (&b.y - &a.y);
    Point::new(x0.clone(), y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_literals() {
        assert_eq!(coord(2) + coord(3), coord(5));
        assert!(coord(-1) < coord(0));
    }

    #[test]
    fn test_point_display() {
        let p = Point::from_ratios(1, 2, -3, 4);
        assert_eq!(p.to_string(), "(1/2, -3/4)");
    }

    #[test]
    fn test_intersection_is_exact() {
        // Segment from (0, 3) to (3, 5) crossed at x = 1: y = 3 + 1/3 * 2.
        let a = Point::from_integers(0, 3);
        let b = Point::from_integers(3, 5);
        let m = intersect_vertical_line(&a, &b, &coord(1));
        assert_eq!(m, Point::from_ratios(1, 1, 11, 3));
    }

    #[test]
    fn test_intersection_direction_independent() {
        let a = Point::from_integers(0, 0);
        let b = Point::from_integers(4, 2);
        let x0 = coord(3);
        assert_eq!(
            intersect_vertical_line(&a, &b, &x0),
            intersect_vertical_line(&b, &a, &x0)
        );
    }
}
