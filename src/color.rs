//! Color Space Conversion between R'G'B' and Y'UV.
//!
//! The default matrix is the analog BT.601 Y'UV transform.
//! Black maps to zero chroma, and so does every gray.

use crate::error::{Error, Result, UnitResult};
use crate::math::{Matrix3, Vec3};


/// Forward transform coefficients (R'G'B' to Y'UV).
pub const RGB_TO_YUV: Matrix3 = Matrix3::new([
    [ 0.299,  0.587,  0.114],
    [-0.147, -0.289,  0.436],
    [ 0.615, -0.515, -0.100],
]);

/// Inverse transform coefficients (Y'UV to R'G'B'), the inverse of `RGB_TO_YUV`.
pub const YUV_TO_RGB: Matrix3 = Matrix3::new([
    [1.0, -3.9457070707082786e-05,  1.139827967171717],
    [1.0, -0.39461016414141414,    -0.5805003156565657],
    [1.0,  2.0319996843434343,     -0.00048137626262625125],
]);


/// Converts color triples between R'G'B' and Y'UV using a fixed linear map.
/// The inverse matrix is fixed on construction and never changes,
/// so a single instance can be shared between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTransform {
    forward: Matrix3,
    inverse: Matrix3,
}

impl Default for ColorTransform {
    fn default() -> Self { Self::new() }
}

impl ColorTransform {

    /// The Y'UV transform with the coefficients of `RGB_TO_YUV`.
    pub fn new() -> Self {
        ColorTransform { forward: RGB_TO_YUV, inverse: YUV_TO_RGB }
    }

    /// Use a custom forward matrix.
    /// Returns an error if the matrix cannot be inverted.
    pub fn from_matrix(forward: Matrix3) -> Result<Self> {
        let inverse = forward.inverse()?;
        Ok(ColorTransform { forward, inverse })
    }

    /// The matrix used by `forward`.
    pub fn forward_matrix(&self) -> &Matrix3 { &self.forward }

    /// The matrix used by `inverse`, before clamping.
    pub fn inverse_matrix(&self) -> &Matrix3 { &self.inverse }

    /// Convert R'G'B' to Y'UV. The input is not clamped.
    #[inline]
    pub fn forward(&self, r: f64, g: f64, b: f64) -> Vec3<f64> {
        self.forward.apply(Vec3(r, g, b))
    }

    /// Convert Y'UV to R'G'B', clamping every channel to `[0, 1]`.
    #[inline]
    pub fn inverse(&self, y: f64, u: f64, v: f64) -> Vec3<f64> {
        self.inverse.apply(Vec3(y, u, v)).clamp(0.0, 1.0)
    }

    /// Convert an R'G'B' triple to Y'UV.
    #[inline]
    pub fn rgb_to_yuv(&self, rgb: Vec3<f64>) -> Vec3<f64> {
        self.forward(rgb.0, rgb.1, rgb.2)
    }

    /// Convert a Y'UV triple to R'G'B', clamping every channel to `[0, 1]`.
    #[inline]
    pub fn yuv_to_rgb(&self, yuv: Vec3<f64>) -> Vec3<f64> {
        self.inverse(yuv.0, yuv.1, yuv.2)
    }

    /// Forward transform of three planar channels, in place.
    /// After this call, `a` contains Y', `b` contains U and `c` contains V.
    pub fn forward_block(&self, a: &mut [f64], b: &mut [f64], c: &mut [f64]) -> UnitResult {
        check_planar_lengths(a, b, c)?;

        for ((a, b), c) in a.iter_mut().zip(b).zip(c) {
            let Vec3(y, u, v) = self.forward(*a, *b, *c);
            *a = y; *b = u; *c = v;
        }

        Ok(())
    }

    /// Inverse transform of three planar channels, in place.
    /// After this call, `a` contains R', `b` contains G' and `c` contains B', all clamped.
    pub fn inverse_block(&self, a: &mut [f64], b: &mut [f64], c: &mut [f64]) -> UnitResult {
        check_planar_lengths(a, b, c)?;

        for ((a, b), c) in a.iter_mut().zip(b).zip(c) {
            let Vec3(red, green, blue) = self.inverse(*a, *b, *c);
            *a = red; *b = green; *c = blue;
        }

        Ok(())
    }
}

fn check_planar_lengths(a: &[f64], b: &[f64], c: &[f64]) -> UnitResult {
    if a.len() != b.len() || a.len() != c.len() {
        return Err(Error::invalid("color channels differ in length"));
    }

    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;

    const TEST_COLORS: [(f64, f64, f64); 9] = [
        (0.0, 0.0, 0.0), // Black
        (1.0, 1.0, 1.0), // White
        (1.0, 0.0, 0.0), // Red
        (0.0, 1.0, 0.0), // Green
        (0.0, 0.0, 1.0), // Blue
        (0.5, 0.5, 0.5), // Gray
        (1.0, 1.0, 0.0), // Yellow
        (1.0, 0.0, 1.0), // Magenta
        (0.0, 1.0, 1.0), // Cyan
    ];

    #[test]
    fn black_has_zero_chroma() {
        let transform = ColorTransform::new();
        assert_eq!(transform.forward(0.0, 0.0, 0.0), Vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn white_has_max_luminance() {
        let Vec3(y, u, v) = ColorTransform::new().forward(1.0, 1.0, 1.0);

        assert!((y - 1.0).abs() < 1e-12, "White should have Y≈1");
        assert!(u.abs() < 1e-12, "White should have U≈0");
        assert!(v.abs() < 1e-12, "White should have V≈0");
    }

    #[test]
    fn csc_roundtrip() {
        let transform = ColorTransform::new();

        for &(r, g, b) in &TEST_COLORS {
            let yuv = transform.forward(r, g, b);
            let rgb = transform.yuv_to_rgb(yuv);

            assert!(
                rgb.max_difference(Vec3(r, g, b)) < 1e-9,
                "roundtrip failed: {:?} -> {:?} -> {:?}", (r, g, b), yuv, rgb
            );
        }
    }

    #[test]
    fn forward_does_not_clamp() {
        let Vec3(y, _, _) = ColorTransform::new().forward(2.0, 2.0, 2.0);
        assert!((y - 2.0).abs() < 1e-12);

        let Vec3(y, _, _) = ColorTransform::new().forward(-1.0, -1.0, -1.0);
        assert!((y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_clamps_each_channel() {
        let transform = ColorTransform::new();

        let bright = transform.forward(3.0, 0.5, -2.0);
        assert_eq!(transform.yuv_to_rgb(bright).0, 1.0);
        assert!((transform.yuv_to_rgb(bright).1 - 0.5).abs() < 1e-9);
        assert_eq!(transform.yuv_to_rgb(bright).2, 0.0);
    }

    #[test]
    fn inverse_coefficients_match_computed_inverse() {
        let computed = RGB_TO_YUV.inverse().unwrap();

        for (computed_row, row) in computed.rows.iter().zip(YUV_TO_RGB.rows.iter()) {
            for (&computed, &value) in computed_row.iter().zip(row) {
                assert!((computed - value).abs() < 1e-15, "{:?}", computed_row);
            }
        }

        let identity = RGB_TO_YUV.multiply(&YUV_TO_RGB);
        for (row_index, row) in identity.rows.iter().enumerate() {
            for (column_index, &value) in row.iter().enumerate() {
                let expected = if row_index == column_index { 1.0 } else { 0.0 };
                assert!((value - expected).abs() < 1e-12, "{:?}", identity);
            }
        }

        assert_eq!(ColorTransform::new().inverse_matrix(), &YUV_TO_RGB);
    }

    #[test]
    fn inverse_is_stable_across_calls() {
        let transform = ColorTransform::new();
        let first = transform.inverse(0.4, 0.1, -0.05);

        for _ in 0..100 {
            assert_eq!(transform.inverse(0.4, 0.1, -0.05), first);
        }
    }

    #[test]
    fn planar_block_conversion() {
        let transform = ColorTransform::new();

        let mut y_block = [0.0_f64; 64];
        let mut u_block = [0.0_f64; 64];
        let mut v_block = [0.0_f64; 64];

        for (index, y) in y_block.iter_mut().enumerate() {
            *y = index as f64 / 63.0;
        }

        let luma = y_block;
        transform.inverse_block(&mut y_block, &mut u_block, &mut v_block).unwrap();

        // for U=V=0, RGB should equal Y
        for index in 0..64 {
            assert!((y_block[index] - luma[index]).abs() < 1e-9);
            assert!((u_block[index] - luma[index]).abs() < 1e-9);
            assert!((v_block[index] - luma[index]).abs() < 1e-9);
        }

        transform.forward_block(&mut y_block, &mut u_block, &mut v_block).unwrap();
        for index in 0..64 {
            assert!((y_block[index] - luma[index]).abs() < 1e-9);
            assert!(u_block[index].abs() < 1e-9);
            assert!(v_block[index].abs() < 1e-9);
        }
    }

    #[test]
    fn planar_lengths_must_match() {
        let transform = ColorTransform::new();
        let (mut a, mut b, mut c) = ([0.0; 4], [0.0; 4], [0.0; 3]);
        assert!(transform.forward_block(&mut a, &mut b, &mut c).is_err());
    }

    #[test]
    fn luma_coefficients_sum_to_one() {
        let [y_row, u_row, v_row] = RGB_TO_YUV.rows;
        assert!((y_row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(u_row.iter().sum::<f64>().abs() < 1e-12);
        assert!(v_row.iter().sum::<f64>().abs() < 1e-12);
    }

    #[test]
    fn custom_matrix() {
        let transform = ColorTransform::from_matrix(Matrix3::IDENTITY).unwrap();
        assert_eq!(transform.forward(0.25, 2.0, -1.0), Vec3(0.25, 2.0, -1.0));
        assert_eq!(transform.inverse(0.25, 2.0, -1.0), Vec3(0.25, 1.0, 0.0));

        let singular = Matrix3::new([[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(ColorTransform::from_matrix(singular).is_err());
    }
}
