use std::io;

use math::Color;

/// The target surface that content should be drawn to
///
/// Rows are stored top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Default + Copy> Texture<T> {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T> Texture<T> {
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Set the pixel at the given coordinates to the specified value.
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: T) {
        let index = self.index_of_pixel(x, y);
        self.data[index] = pixel;
    }

    /// Calculate the index of the pixel data for a given set of coordinates
    #[must_use]
    fn index_of_pixel(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));

        y * self.width + x
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Return `true` if the coordinates are inside the bounds of the texture
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }
}

impl<T: Copy> Texture<T> {
    pub fn clear(&mut self, clear_color: T) {
        self.data.fill(clear_color);
    }

    /// Get the pixel value at the given coordinates
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    #[must_use]
    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.data[self.index_of_pixel(x, y)]
    }
}

impl Texture<Color> {
    /// Composite `color` over the pixel at the given coordinates
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index_of_pixel(x, y);
        self.data[index] = self.data[index].blend_over(color);
    }

    /// Encode the texture as a binary PPM (`P6`) image, ignoring alpha
    pub fn write_ppm<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;

        let bytes: Vec<u8> = self.data.iter().flat_map(Color::to_rgb8).collect();
        writer.write_all(&bytes)?;
        writer.flush()
    }
}
