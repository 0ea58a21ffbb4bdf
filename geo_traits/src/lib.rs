//! Operation traits shared by the geometric value types.

use num_traits::Float;

pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

pub trait Cross<Rhs> {
    type Output;
    fn cross(self, rhs: Rhs) -> Self::Output;
}

/// Component-wise product
pub trait Hadamard<Rhs> {
    type Output;
    fn hadamard(self, rhs: Rhs) -> Self::Output;
}

pub trait Norm2 {
    type Output;
    fn norm2(self) -> Self::Output;
}

pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

impl<T> Norm for T
where
    T: Norm2,
    T::Output: Float,
{
    type Output = T::Output;

    #[inline]
    fn norm(self) -> Self::Output {
        self.norm2().sqrt()
    }
}

pub trait Unitize {
    type Output;
    fn unit(self) -> Self::Output;
}
