use math::Vec2D;

use crate::StrokeError;

/// An ordered sequence of points connected by straight segments
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<Vec2D>,
}

impl Polyline {
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<Vec2D>) -> Result<Self, StrokeError> {
        if points.len() < Self::MIN_POINTS {
            return Err(StrokeError::InvalidPath {
                points: points.len(),
                required: Self::MIN_POINTS,
            });
        }

        Ok(Self { points })
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec2D] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }
}

/// One quarter of the plane around an arc's center.
///
/// Names assume a y-down coordinate system, like a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    UpperRight,
    LowerRight,
    LowerLeft,
    UpperLeft,
}

impl Quadrant {
    /// Quadrants in the order that [Vec2D::perpendicular] rotates through them
    pub const ALL: [Self; 4] = [
        Self::UpperRight,
        Self::LowerRight,
        Self::LowerLeft,
        Self::UpperLeft,
    ];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::UpperRight => Self::LowerRight,
            Self::LowerRight => Self::LowerLeft,
            Self::LowerLeft => Self::UpperLeft,
            Self::UpperLeft => Self::UpperRight,
        }
    }

    /// The two perpendicular vectors of the given length that span this quadrant.
    ///
    /// For the upper right quadrant these are `(length, 0)` and `(0, -length)`,
    /// every following quadrant rotates both by a quarter turn.
    #[must_use]
    pub fn span(self, length: f32) -> (Vec2D, Vec2D) {
        let mut horizontal = Vec2D::new(length, 0.);
        let mut vertical = Vec2D::new(0., -length);

        for quadrant in Self::ALL {
            if quadrant == self {
                break;
            }
            horizontal = horizontal.perpendicular();
            vertical = vertical.perpendicular();
        }

        (horizontal, vertical)
    }
}

/// A circular arc made up of whole quadrants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Vec2D,
    pub radius: f32,
    start: Quadrant,
    quadrants: usize,
}

impl Arc {
    pub fn new(
        center: Vec2D,
        radius: f32,
        start: Quadrant,
        quadrants: usize,
    ) -> Result<Self, StrokeError> {
        if !(1..=4).contains(&quadrants) {
            return Err(StrokeError::InvalidArcSpan { quadrants });
        }

        Ok(Self {
            center,
            radius,
            start,
            quadrants,
        })
    }

    #[must_use]
    pub fn circle(center: Vec2D, radius: f32) -> Self {
        Self {
            center,
            radius,
            start: Quadrant::UpperRight,
            quadrants: 4,
        }
    }

    #[must_use]
    pub fn quadrants(&self) -> impl Iterator<Item = Quadrant> {
        let mut quadrant = self.start;
        (0..self.quadrants).map(move |_| {
            let current = quadrant;
            quadrant = quadrant.next();
            current
        })
    }
}
