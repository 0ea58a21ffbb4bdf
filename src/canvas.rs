use crate::color::Color;
use crate::error::Result;
use crate::ppm::PpmEncoder;
use log::trace;

/// A fixed-size grid of colors, black until written
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// # Panics
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("{width}x{height} canvas has too many pixels"));
        Canvas {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes outside the canvas are dropped.
    pub fn write_pixel(&mut self, x: isize, y: isize, color: Color) {
        match self.offset(x, y) {
            Some(i) => self.pixels[i] = color,
            None => trace!(
                "dropped write at ({x}, {y}) outside {}x{} canvas",
                self.width,
                self.height
            ),
        }
    }

    /// Black outside the canvas
    pub fn pixel_at(&self, x: isize, y: isize) -> Color {
        self.offset(x, y).map_or(Color::BLACK, |i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.fill(color);
    }

    /// Row-major, top row first
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().copied()
    }

    #[track_caller]
    pub fn row(&self, y: usize) -> &[Color] {
        assert!(y < self.height, "row {y} out of bounds for canvas of height {}", self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn to_ppm(&self) -> String {
        PpmEncoder::default().encode(self)
    }

    pub fn write_ppm<W: std::io::Write>(&self, writer: W) -> Result<()> {
        PpmEncoder::default().write(self, writer)
    }

    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }
}
