use crate::math::{Point, Real};

/// An implicit 2D line `a·x + b·y + c = 0`.
///
/// Only the `x` and `y` coordinates of the points it is built from or evaluated
/// at are taken into account: the line lives in the plane orthogonal to the
/// `z` axis of whatever frame the points are expressed in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Line {
    /// Coefficient of `x`.
    pub a: Real,
    /// Coefficient of `y`.
    pub b: Real,
    /// Constant term.
    pub c: Real,
}

impl Line {
    /// Builds a line from its coefficients.
    pub fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    /// The line passing through the projections of `p` and `q` on the `xy` plane.
    ///
    /// The line evaluates to exactly zero at `p`.
    pub fn through(p: &Point<Real>, q: &Point<Real>) -> Self {
        let a = p.y - q.y;
        let b = q.x - p.x;
        let c = -(a * p.x + b * p.y);
        Self { a, b, c }
    }

    /// Evaluates the line equation at the projection of `pt` on the `xy` plane.
    ///
    /// The sign tells on which side of the line `pt` lies.
    #[inline]
    pub fn eval(&self, pt: &Point<Real>) -> Real {
        self.a * pt.x + self.b * pt.y + self.c
    }

    /// The same line with all its coefficients negated (sides swapped).
    pub fn negated(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c)
    }
}
