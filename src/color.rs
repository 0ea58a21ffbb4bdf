use crate::tuple::{vector, Tuple};
use geo_traits::Hadamard;
use std::ops::{Add, Mul, Sub};

/// Linear RGB with unbounded channels, stored as a vector tuple
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Color(Tuple);

unsafe impl bytemuck::Zeroable for Color {}
unsafe impl bytemuck::Pod for Color {}

impl Color {
    pub const BLACK: Color = Color::new(0., 0., 0.);
    pub const WHITE: Color = Color::new(1., 1., 1.);

    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Color(vector(red, green, blue))
    }

    #[inline]
    pub fn red(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn green(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn blue(self) -> f64 {
        self.0.z
    }

    /// Clamps each channel to `[0, 1]` and scales it to `0..=255`, rounding half away from zero
    pub fn to_rgb8(self) -> [u8; 3] {
        let scale = |c: f64| (c.clamp(0., 1.) * 255.).round().clamp(0., 255.) as u8;
        [scale(self.red()), scale(self.green()), scale(self.blue())]
    }
}

impl From<Tuple> for Color {
    #[inline]
    fn from(t: Tuple) -> Self {
        Color::new(t.x, t.y, t.z)
    }
}

impl From<Color> for Tuple {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}

impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color(self.0.zip_with(rhs.0, |a, b| a + b))
    }
}

impl Sub for Color {
    type Output = Color;
    #[inline]
    fn sub(self, rhs: Color) -> Color {
        Color(self.0.zip_with(rhs.0, |a, b| a - b))
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f64) -> Color {
        Color(self.0 * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl Mul for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color(self.0.hadamard(rhs.0))
    }
}
