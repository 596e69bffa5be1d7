//! Simple math utilities.

use crate::error::{Error, Result};


/// Simple three-dimensional vector of any numerical type.
/// Used for color triples, both in the RGB and the YUV domain.
/// Supports only few mathematical operations
/// as this is used mainly as data struct.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> (pub T, pub T, pub T);

impl<T> Vec3<T> {

    /// Maps all components of this vector to a new type, yielding a vector of that new type.
    pub fn map<B>(self, map: impl Fn(T) -> B) -> Vec3<B> {
        Vec3(map(self.0), map(self.1), map(self.2))
    }
}

impl Vec3<f64> {

    /// Restrict every component to the closed range `[min, max]`.
    /// Saturates instead of wrapping around.
    pub fn clamp(self, min: f64, max: f64) -> Self {
        self.map(|component| component.max(min).min(max))
    }

    /// The largest absolute difference of any component.
    pub fn max_difference(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
            .max((self.1 - other.1).abs())
            .max((self.2 - other.2).abs())
    }
}

impl<T: std::ops::Add<T>> std::ops::Add<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T::Output>;
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

impl<T: std::ops::Sub<T>> std::ops::Sub<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T::Output>;
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3(self.0 - other.0, self.1 - other.1, self.2 - other.2)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self { Vec3(x, y, z) }
}

impl<T> From<Vec3<T>> for (T, T, T) {
    fn from(vec3: Vec3<T>) -> Self { (vec3.0, vec3.1, vec3.2) }
}


/// A linear map of three dimensions, stored row by row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {

    /// The coefficients, `rows[output][input]`.
    pub rows: [[f64; 3]; 3],
}

impl Matrix3 {

    /// The matrix that maps every vector to itself.
    pub const IDENTITY: Matrix3 = Matrix3::new([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Create a matrix from its rows.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Matrix3 { rows }
    }

    /// Multiply this matrix with a column vector.
    #[inline]
    pub fn apply(&self, vector: Vec3<f64>) -> Vec3<f64> {
        let row = |[a, b, c]: [f64; 3]| a * vector.0 + b * vector.1 + c * vector.2;
        Vec3(row(self.rows[0]), row(self.rows[1]), row(self.rows[2]))
    }

    /// Multiply this matrix with another matrix, `self * other`.
    pub fn multiply(&self, other: &Matrix3) -> Matrix3 {
        let mut rows = [[0.0; 3]; 3];

        for (row_index, row) in rows.iter_mut().enumerate() {
            for (column_index, value) in row.iter_mut().enumerate() {
                *value = (0..3)
                    .map(|index| self.rows[row_index][index] * other.rows[index][column_index])
                    .sum();
            }
        }

        Matrix3 { rows }
    }

    /// Expands along the first row.
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.rows;

        a[0] * (b[1] * c[2] - b[2] * c[1])
            - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// Computes the inverse using the adjugate matrix.
    /// Returns an error if this matrix is singular.
    pub fn inverse(&self) -> Result<Matrix3> {
        let determinant = self.determinant();

        if !determinant.is_finite() || determinant.abs() <= f64::EPSILON {
            return Err(Error::invalid("singular color matrix"));
        }

        let [a, b, c] = self.rows;
        let adjugate = [
            [b[1] * c[2] - b[2] * c[1], a[2] * c[1] - a[1] * c[2], a[1] * b[2] - a[2] * b[1]],
            [b[2] * c[0] - b[0] * c[2], a[0] * c[2] - a[2] * c[0], a[2] * b[0] - a[0] * b[2]],
            [b[0] * c[1] - b[1] * c[0], a[1] * c[0] - a[0] * c[1], a[0] * b[1] - a[1] * b[0]],
        ];

        let mut rows = adjugate;
        for value in rows.iter_mut().flatten() {
            *value /= determinant;
        }

        Ok(Matrix3 { rows })
    }
}
