/// Zero cost wrapper type for an `f32`.
///
/// Coordinates are `f32`'s too, so this keeps a turn angle from being
/// mixed up with a length.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle(f32);

impl Angle {
    /// Angles with a difference below this value (in radians) are considered equal
    const MAX_ERROR: f32 = 0.01;

    #[inline]
    #[must_use]
    pub fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    #[inline]
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    #[inline]
    #[must_use]
    pub fn radians(&self) -> f32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    #[inline]
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        let mut difference_in_radians = (self.0 - other.0).abs();

        if std::f32::consts::PI < difference_in_radians {
            difference_in_radians = std::f32::consts::TAU - difference_in_radians;
        }

        Self(difference_in_radians)
    }

    #[inline]
    #[must_use]
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }

    #[inline]
    #[must_use]
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
}

impl PartialEq for Angle {
    #[must_use]
    fn eq(&self, other: &Self) -> bool {
        self.diff(other).0 < Self::MAX_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::Angle;

    #[test]
    fn diff_wraps_around() {
        let a = Angle::from_degrees(350.);
        let b = Angle::from_degrees(10.);
        assert!((a.diff(&b).degrees() - 20.).abs() < 1e-3);
    }

    #[test]
    fn degrees_roundtrip() {
        assert_eq!(
            Angle::from_degrees(90.),
            Angle::from_radians(std::f32::consts::FRAC_PI_2)
        );
    }
}
