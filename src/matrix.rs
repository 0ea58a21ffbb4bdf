//! Dense row-major matrices over a statically resolved numeric element type.
//!
//! Determinants are computed by recursive cofactor expansion along the first
//! row. That is O(n!) and only meant for the small (n <= 4) matrices used by
//! homogeneous transforms.

use crate::error::{Error, Result};
use crate::tuple::{Tuple, EPSILON};
use log::trace;
use num_traits::{Float, NumCast, One, Zero};
use std::ops::{Index, IndexMut, Mul, Neg, Sub};

/// Numeric types a [`Matrix`] can hold
pub trait Element:
    Copy
    + PartialEq
    + Zero
    + One
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + NumCast
{
}

impl<T> Element for T where
    T: Copy
        + PartialEq
        + Zero
        + One
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
        + NumCast
{
}

/// Equality is shape-aware: matrices of different shapes are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from an iterator of rows, which must all have the same non-zero length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;

        for (row, elements) in rows.into_iter().enumerate() {
            let start = data.len();
            data.extend(elements);
            let found = data.len() - start;

            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedRows {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            n_rows += 1;
        }

        match cols {
            Some(cols) if cols > 0 => Ok(Matrix {
                rows: n_rows,
                cols,
                data,
            }),
            _ => Err(Error::EmptyMatrix),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row {row} out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[inline]
    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T: Copy> Matrix<T> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| self[(row, col)]))
            .collect();

        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Deletes `row` and `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        if self.rows < 2 || self.cols < 2 {
            return Err(Error::EmptyMatrix);
        }

        let data = self
            .data
            .chunks(self.cols)
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, elements)| {
                elements
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, e)| *e)
            })
            .collect();

        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }
}

impl<T: Element> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMatrix);
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut identity = Self::zeros(n, n)?;
        for i in 0..n {
            identity[(i, i)] = T::one();
        }
        Ok(identity)
    }

    /// Fails with [`Error::DimensionMismatch`] unless `self.cols() == rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            for k in 0..rhs.cols {
                let sum = (0..self.cols)
                    .fold(T::zero(), |sum, j| sum + self[(i, j)] * rhs[(j, k)]);
                data.push(sum);
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Treats `tuple` as a 4x1 column, so `self` must have four columns.
    ///
    /// Each component is converted into `T` first and fails with
    /// [`Error::LossyConversion`] when it cannot be represented, e.g. `1.5` in
    /// an integer matrix.
    pub fn multiply_tuple(&self, tuple: Tuple) -> Result<Matrix<T>> {
        let data = tuple
            .to_array()
            .into_iter()
            .map(to_element)
            .collect::<Result<Vec<T>>>()?;

        self.multiply(&Matrix {
            rows: 4,
            cols: 1,
            data,
        })
    }

    /// Reads the first column as `x`, `y`, `z`, `w`; missing rows are zero.
    ///
    /// Fails with [`Error::ElementOutOfRange`] when an element has no `f64` value.
    pub fn to_tuple(&self) -> Result<Tuple> {
        let mut components = [0.; 4];
        for (row, c) in components.iter_mut().enumerate().take(self.rows) {
            *c = self[(row, 0)]
                .to_f64()
                .ok_or(Error::ElementOutOfRange { row, col: 0 })?;
        }
        Ok(Tuple::from(components))
    }

    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                shape: self.shape(),
            });
        }

        match self.rows {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            n => {
                trace!("expanding {n}x{n} determinant along row 0");
                (0..n).try_fold(T::zero(), |det, col| -> Result<T> {
                    Ok(det + self[(0, col)] * self.cofactor(0, col)?)
                })
            }
        }
    }

    /// Determinant of the submatrix without `row` and `col`
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        self.submatrix(row, col)?.determinant()
    }

    /// The minor, negated when `row + col` is odd
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let minor = self.minor(row, col)?;
        if (row + col) % 2 == 0 {
            Ok(minor)
        } else {
            Ok(-minor)
        }
    }
}

impl<T: Element + Float> Matrix<T> {
    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(det) if det != T::zero())
    }

    /// Adjugate divided by the determinant
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(Error::Singular);
        }
        if self.rows == 1 {
            return Ok(Matrix {
                rows: 1,
                cols: 1,
                data: vec![T::one() / det],
            });
        }

        let mut inverse = Self::zeros(self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                inverse[(col, row)] = self.cofactor(row, col)? / det;
            }
        }
        Ok(inverse)
    }
}

/// Integer types must hold `value` exactly; float types may round it by a
/// relative `EPSILON`.
fn to_element<T: Element>(value: f64) -> Result<T> {
    let element = <T as NumCast>::from(value).ok_or(Error::LossyConversion { value })?;
    let back = element.to_f64().ok_or(Error::LossyConversion { value })?;

    let fits = if is_integral::<T>() {
        back == value
    } else {
        back == value || (back - value).abs() <= EPSILON * value.abs().max(1.)
    };

    if fits {
        Ok(element)
    } else {
        Err(Error::LossyConversion { value })
    }
}

fn is_integral<T: Element>() -> bool {
    <T as NumCast>::from(0.5).and_then(|half| half.to_f64()) != Some(0.5)
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    /// # Panics
    /// Panics if the literal has no rows or no columns.
    fn from(rows: [[T; C]; R]) -> Self {
        assert!(
            R > 0 && C > 0,
            "matrix literal must have at least one row and one column"
        );
        Matrix {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}
