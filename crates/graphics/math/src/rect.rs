use super::Vec2D;

use std::ops;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle<T = f32> {
    top_left: Vec2D<T>,
    bottom_right: Vec2D<T>,
}

impl<T> Rectangle<T> {
    pub const fn from_corners(top_left: Vec2D<T>, bottom_right: Vec2D<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl<T> Rectangle<T>
where
    T: Copy,
{
    pub const fn top_left(&self) -> Vec2D<T> {
        self.top_left
    }

    pub const fn bottom_right(&self) -> Vec2D<T> {
        self.bottom_right
    }
}

impl<T> Rectangle<T>
where
    T: ops::Sub<Output = T> + Copy,
{
    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }
}

impl<T> Rectangle<T>
where
    T: PartialOrd + Copy,
{
    pub fn grow_to_contain_point(&mut self, point: Vec2D<T>) {
        // Like Ord::min/Ord::max except they only require T to implement
        // PartialOrd, not Ord
        if point.x < self.top_left.x {
            self.top_left.x = point.x;
        }
        if point.y < self.top_left.y {
            self.top_left.y = point.y;
        }
        if self.bottom_right.x < point.x {
            self.bottom_right.x = point.x;
        }
        if self.bottom_right.y < point.y {
            self.bottom_right.y = point.y;
        }
    }

    /// Compute the smallest rectangle containing all the given points
    ///
    /// Returns `None` if there are no points.
    #[must_use]
    pub fn bounding_box<I: IntoIterator<Item = Vec2D<T>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut extent = Self::from_corners(first, first);
        for point in points {
            extent.grow_to_contain_point(point);
        }
        Some(extent)
    }
}

impl Rectangle<f32> {
    /// Create a pixel-aligned rectangle containing `self`, clipped to
    /// the area `[0, width) x [0, height)`.
    ///
    /// Returns `None` if `self` lies entirely outside of that area.
    #[must_use]
    pub fn snap_to_grid(&self, width: usize, height: usize) -> Option<Rectangle<usize>> {
        if width == 0
            || height == 0
            || self.bottom_right.x < 0.
            || self.bottom_right.y < 0.
            || (width as f32) <= self.top_left.x
            || (height as f32) <= self.top_left.y
        {
            return None;
        }

        let top_left = self.top_left.map(|value| value.max(0.).floor() as usize);
        let bottom_right = Vec2D::new(
            (self.bottom_right.x.ceil() as usize).min(width - 1),
            (self.bottom_right.y.ceil() as usize).min(height - 1),
        );

        Some(Rectangle {
            top_left,
            bottom_right,
        })
    }
}
