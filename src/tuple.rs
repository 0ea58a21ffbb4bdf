use crate::error::{Error, Result};
use geo_traits::*;
use std::ops::{Div, Mul};

/// Tolerance on `w` when classifying a tuple as a point
pub const EPSILON: f64 = 1e-5;

/// A homogeneous coordinate: a point when `w == 1`, a vector when `w == 0`
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TupleKind {
    Point,
    Vector,
}

unsafe impl bytemuck::Zeroable for Tuple {}
unsafe impl bytemuck::Pod for Tuple {}

pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.)
}

pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.)
}

impl Tuple {
    pub const ZERO: Tuple = vector(0., 0., 0.);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Tuple { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn kind(self) -> TupleKind {
        if (self.w - 1.).abs() < EPSILON {
            TupleKind::Point
        } else {
            TupleKind::Vector
        }
    }

    #[inline]
    pub fn is_point(self) -> bool {
        self.kind() == TupleKind::Point
    }

    #[inline]
    pub fn is_vector(self) -> bool {
        self.kind() == TupleKind::Vector
    }

    /// Point + vector, vector + point and vector + vector.
    ///
    /// Adding two points pushes `w` past 1 and fails with [`Error::InvalidAddition`].
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let sum = self.zip_with(rhs, |a, b| a + b);
        if sum.w > 1. {
            return Err(Error::InvalidAddition { w: sum.w });
        }
        Ok(sum)
    }

    /// Point - point, point - vector and vector - vector.
    ///
    /// Subtracting a point from a vector drives `w` negative and fails with
    /// [`Error::InvalidSubtraction`].
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let difference = self.zip_with(rhs, |a, b| a - b);
        if difference.w < 0. {
            return Err(Error::InvalidSubtraction { w: difference.w });
        }
        Ok(difference)
    }

    /// `ZERO - self`, so only vectors can be negated
    #[inline]
    pub fn negate(self) -> Result<Self> {
        Self::ZERO.checked_sub(self)
    }

    /// `None` when the magnitude is zero
    #[inline]
    pub fn try_unit(self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0. {
            None
        } else {
            Some(self / norm)
        }
    }

    #[inline]
    pub(crate) fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Tuple::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    #[inline]
    pub(crate) fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Tuple::new(
            f(self.x, rhs.x),
            f(self.y, rhs.y),
            f(self.z, rhs.z),
            f(self.w, rhs.w),
        )
    }

    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f64; 4]> for Tuple {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Tuple::new(x, y, z, w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;
    #[inline]
    fn mul(self, rhs: f64) -> Tuple {
        self.map(|c| c * rhs)
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;
    #[inline]
    fn mul(self, rhs: Tuple) -> Tuple {
        rhs * self
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;
    #[inline]
    fn div(self, rhs: f64) -> Tuple {
        self.map(|c| c / rhs)
    }
}

macro_rules! impl_op_assign {
    ($type_:ident { $($field:ident),* }) => {
        impl_op_assign!($type_ { $($field),*} MulAssign :: mul_assign);
        impl_op_assign!($type_ { $($field),*} DivAssign :: div_assign);
    };
    ($type_:ident { $($field:ident),* }  $trait_:ident :: $fn_:ident) => {
        impl std::ops::$trait_<f64> for $type_ {
            fn $fn_(&mut self, rhs: f64) {
                $( std::ops::$trait_::$fn_(&mut self.$field, rhs); )*
            }
        }
    };
}

impl_op_assign!(Tuple { x, y, z, w });

impl Hadamard<Tuple> for Tuple {
    type Output = Tuple;
    #[inline]
    fn hadamard(self, rhs: Tuple) -> Tuple {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Dot<Tuple> for Tuple {
    type Output = f64;
    #[inline]
    fn dot(self, rhs: Tuple) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

/// Ignores `w`; the result is always a vector
impl Cross<Tuple> for Tuple {
    type Output = Tuple;
    #[inline]
    fn cross(self, rhs: Tuple) -> Tuple {
        vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Norm2 for Tuple {
    type Output = f64;
    #[inline]
    fn norm2(self) -> f64 {
        self.dot(self)
    }
}

/// Divides every component, `w` included, by the magnitude
impl Unitize for Tuple {
    type Output = Tuple;
    #[inline]
    fn unit(self) -> Tuple {
        self / self.norm()
    }
}

impl rand::distributions::Distribution<Tuple> for rand::distributions::Standard {
    /// A non-zero vector with `x`, `y` and `z` in `[-1, 1)`
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Tuple {
        loop {
            let v = vector(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.norm2() > EPSILON {
                return v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w_of_one_is_a_point() {
        let t = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(4.3, t.x);
        assert_eq!(-4.2, t.y);
        assert_eq!(3.1, t.z);
        assert_eq!(TupleKind::Point, t.kind());
    }

    #[test]
    fn w_of_zero_is_a_vector() {
        let t = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert_eq!(TupleKind::Vector, t.kind());
        assert!(!t.is_point());
    }

    #[test]
    fn point_classification_tolerates_small_error() {
        assert!(Tuple::new(0., 0., 0., 1. + 1e-6).is_point());
        assert!(Tuple::new(0., 0., 0., 1. + 1e-4).is_vector());
    }

    #[test]
    fn constructors_set_w() {
        assert_eq!(Tuple::new(4., -4., 3., 1.), point(4., -4., 3.));
        assert_eq!(Tuple::new(4., -4., 3., 0.), vector(4., -4., 3.));
        assert_eq!(Tuple::new(0., 0., 0., 0.), Tuple::zero());
    }

    #[test]
    fn adding_two_points_fails() {
        let err = point(1., 2., 3.).checked_add(point(1., 1., 1.)).unwrap_err();
        assert!(matches!(err, Error::InvalidAddition { w } if w == 2.));
    }

    #[test]
    fn subtracting_point_from_vector_fails() {
        let err = vector(1., 2., 3.).checked_sub(point(1., 1., 1.)).unwrap_err();
        assert!(matches!(err, Error::InvalidSubtraction { w } if w == -1.));
    }

    #[test]
    fn negating_a_point_fails() {
        assert!(point(1., 2., 3.).negate().is_err());
    }

    #[test]
    fn op_assign() {
        let mut t = Tuple::new(1., -2., 3., -4.);
        t *= 2.;
        assert_eq!(Tuple::new(2., -4., 6., -8.), t);
        t /= 4.;
        assert_eq!(Tuple::new(0.5, -1., 1.5, -2.), t);
    }

    #[test]
    fn try_unit_of_zero_is_none() {
        assert_eq!(None, Tuple::ZERO.try_unit());
        assert_eq!(Some(vector(1., 0., 0.)), vector(4., 0., 0.).try_unit());
    }

    #[test]
    fn pod_cast() {
        let t = [point(1., 2., 3.)];
        let floats: &[f64] = bytemuck::cast_slice(&t);
        assert_eq!(&[1., 2., 3., 1.], floats);
    }
}
