use math::Angle;

use crate::StrokeError;

/// What to do when a miter join becomes too long.
///
/// The miter length is measured relative to half the stroke width, so a
/// straight continuation has a ratio of `1` and the ratio grows without bound
/// as the turn angle approaches 180 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JoinPolicy {
    /// Refuse to tessellate the path
    FailFast { miter_limit: f32 },

    /// Replace joins whose miter exceeds the limit with a bevel.
    ///
    /// Both segments end square at the join point and an extra triangle fills
    /// the notch on the outer side of the turn.
    Clamp { miter_limit: f32 },
}

impl JoinPolicy {
    /// Allows turns of up to roughly 178.85 degrees
    pub const DEFAULT_MITER_LIMIT: f32 = 100.;

    #[must_use]
    pub fn miter_limit(&self) -> f32 {
        match self {
            Self::FailFast { miter_limit } | Self::Clamp { miter_limit } => *miter_limit,
        }
    }

    /// The sharpest turn whose miter still fits within the limit.
    ///
    /// The miter length ratio of a turn by `angle` is `1 / cos(angle / 2)`.
    /// Limits below `1` are rejected by [StrokeStyle::validate] and produce `NaN` here.
    #[must_use]
    pub fn max_turn_angle(&self) -> Angle {
        Angle::from_radians(2. * self.miter_limit().recip().acos())
    }
}

impl Default for JoinPolicy {
    fn default() -> Self {
        Self::FailFast {
            miter_limit: Self::DEFAULT_MITER_LIMIT,
        }
    }
}

/// Where the stroke outline gets offset from the centerline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrusion {
    /// Corner positions are offset by half the stroke width during tessellation
    #[default]
    Geometric,

    /// Corner positions stay on the centerline and the vertex stage offsets them
    /// along their normal.
    ///
    /// Only straight segments support this, joins are always extruded geometrically.
    Deferred,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in world units
    pub width: f32,
    pub join_policy: JoinPolicy,
    pub extrusion: Extrusion,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            join_policy: JoinPolicy::default(),
            extrusion: Extrusion::default(),
        }
    }

    #[must_use]
    pub fn with_join_policy(mut self, join_policy: JoinPolicy) -> Self {
        self.join_policy = join_policy;
        self
    }

    #[must_use]
    pub fn with_extrusion(mut self, extrusion: Extrusion) -> Self {
        self.extrusion = extrusion;
        self
    }

    #[inline]
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.width / 2.
    }

    /// Fails unless the width is a positive number and the miter limit
    /// admits at least a straight continuation
    pub fn validate(&self) -> Result<(), StrokeError> {
        // Written this way so that NaN is rejected too
        if !(self.width > 0.) {
            return Err(StrokeError::InvalidStrokeWidth { width: self.width });
        }

        let miter_limit = self.join_policy.miter_limit();
        if !(miter_limit >= 1.) {
            return Err(StrokeError::InvalidMiterLimit { miter_limit });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use math::Angle;

    use super::{JoinPolicy, StrokeStyle};
    use crate::StrokeError;

    #[test]
    fn width_must_be_positive() {
        assert!(StrokeStyle::new(4.).validate().is_ok());
        assert_eq!(
            StrokeStyle::new(0.).validate(),
            Err(StrokeError::InvalidStrokeWidth { width: 0. })
        );
        assert!(StrokeStyle::new(-1.).validate().is_err());
        assert!(StrokeStyle::new(f32::NAN).validate().is_err());
    }

    #[test]
    fn miter_limit_must_admit_straight_lines() {
        for miter_limit in [0.5, 0., f32::NAN] {
            let style =
                StrokeStyle::new(2.).with_join_policy(JoinPolicy::FailFast { miter_limit });
            assert!(matches!(
                style.validate(),
                Err(StrokeError::InvalidMiterLimit { .. })
            ));
        }

        let style = StrokeStyle::new(2.).with_join_policy(JoinPolicy::Clamp { miter_limit: 1. });
        assert!(style.validate().is_ok());
    }

    #[test]
    fn default_policy_fails_fast() {
        let style = StrokeStyle::new(1.);
        assert_eq!(
            style.join_policy,
            JoinPolicy::FailFast {
                miter_limit: JoinPolicy::DEFAULT_MITER_LIMIT
            }
        );
        assert_eq!(
            JoinPolicy::Clamp { miter_limit: 4. }.miter_limit(),
            4.
        );
    }

    #[test]
    fn max_turn_angle() {
        let default_turn = JoinPolicy::default().max_turn_angle().degrees();
        assert!((default_turn - 178.85).abs() < 0.01);

        assert_eq!(
            JoinPolicy::Clamp { miter_limit: 2. }.max_turn_angle(),
            Angle::from_degrees(120.)
        );
    }
}
