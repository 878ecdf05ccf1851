use std::fmt;

/// A color with floating point channels in the range `[0, 1]`.
///
/// Channels are stored straight (not premultiplied).
#[derive(Clone, Copy, PartialEq)]
pub struct Color([f32; 4]);

impl Color {
    pub const BLACK: Self = Self::rgb(0., 0., 0.);
    pub const WHITE: Self = Self::rgb(1., 1., 1.);
    pub const TRANSPARENT: Self = Self::rgba(0., 0., 0., 0.);

    #[inline]
    #[must_use]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self([red, green, blue, 1.])
    }

    #[inline]
    #[must_use]
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self([red, green, blue, alpha])
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.0[3] = alpha;
        self
    }

    /// Blend `source` (the foreground) over `self` (the background).
    ///
    /// Color and alpha use separate blend functions:
    /// * `rgb = source.rgb * source.a + self.rgb * (1 - source.a)`
    /// * `a   = source.a   * 1        + self.a   * (1 - source.a)`
    #[must_use]
    pub fn blend_over(&self, source: Self) -> Self {
        let source_alpha = source.alpha().clamp(0., 1.);
        let inverse_alpha = 1. - source_alpha;

        Self([
            source.red().mul_add(source_alpha, self.red() * inverse_alpha),
            source.green().mul_add(source_alpha, self.green() * inverse_alpha),
            source.blue().mul_add(source_alpha, self.blue() * inverse_alpha),
            source_alpha + self.alpha() * inverse_alpha,
        ])
    }

    /// Quantize the color channels to bytes, dropping alpha
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |channel: f32| (channel.clamp(0., 1.) * 255.).round() as u8;
        [
            quantize(self.red()),
            quantize(self.green()),
            quantize(self.blue()),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}
