//! DCT (Discrete Cosine Transform) of square blocks.
//!
//! Uses an orthonormal DCT-II for the forward transform
//! and the matching DCT-III for the inverse transform,
//! both applied with a two-pass algorithm: first on rows, then on columns.

use std::fmt;
use std::sync::Arc;
use rustdct::{DctPlanner, TransformType2And3};
use smallvec::SmallVec;
use crate::block::{checked_area, SquareBlock};
use crate::error::{Error, Result, UnitResult};


/// A separable 2-D DCT for blocks of one fixed size.
/// The 1-D transforms are planned once on construction and never change,
/// so a single instance can be shared between threads.
#[derive(Clone)]
pub struct BlockTransform {
    size: usize,
    dct: Arc<dyn TransformType2And3<f64>>,

    /// Makes the forward transform orthonormal, indexed by frequency.
    forward_scale: SmallVec<[f64; 8]>,

    /// Turns orthonormal coefficients into input for the unnormalized DCT-III.
    inverse_scale: SmallVec<[f64; 8]>,
}

impl BlockTransform {

    /// Plan the transform for blocks with `size` rows and `size` columns.
    /// Returns an error for size zero.
    pub fn new(size: usize) -> Result<Self> {
        checked_area(size)?;

        let mut planner = DctPlanner::new();
        let dct = planner.plan_dct2(size);

        let dc_scale = (1.0 / size as f64).sqrt();
        let ac_scale = (2.0 / size as f64).sqrt();

        // the unnormalized DCT-III halves the dc coefficient
        let forward_scale = (0..size).map(|frequency| if frequency == 0 { dc_scale } else { ac_scale }).collect();
        let inverse_scale = (0..size).map(|frequency| if frequency == 0 { 2.0 * dc_scale } else { ac_scale }).collect();

        Ok(BlockTransform { size, dct, forward_scale, inverse_scale })
    }

    /// The side length of the blocks this transform accepts.
    pub fn size(&self) -> usize { self.size }

    /// Convert spatial samples to frequency coefficients.
    /// Returns an error if the block size differs from the planned size.
    pub fn forward(&self, block: &SquareBlock<f64>) -> Result<SquareBlock<f64>> {
        self.check_size(block)?;

        let forward_line = |line: &mut [f64]| {
            self.dct.process_dct2(line);
            for (value, scale) in line.iter_mut().zip(&self.forward_scale) { *value *= scale; }
        };

        self.transform_2d(block, forward_line)
    }

    /// Convert frequency coefficients back to spatial samples.
    /// The DCT coefficients are in normal order (not zigzag).
    /// Returns an error if the block size differs from the planned size.
    pub fn inverse(&self, block: &SquareBlock<f64>) -> Result<SquareBlock<f64>> {
        self.check_size(block)?;

        let inverse_line = |line: &mut [f64]| {
            for (value, scale) in line.iter_mut().zip(&self.inverse_scale) { *value *= scale; }
            self.dct.process_dct3(line);
        };

        self.transform_2d(block, inverse_line)
    }

    fn check_size(&self, block: &SquareBlock<f64>) -> UnitResult {
        if block.size() != self.size {
            return Err(Error::invalid(format!(
                "block size mismatch: transform expects {0}x{0}, but block is {1}x{1}",
                self.size, block.size()
            )));
        }

        Ok(())
    }

    fn transform_2d(&self, block: &SquareBlock<f64>, transform_line: impl Fn(&mut [f64])) -> Result<SquareBlock<f64>> {
        let size = self.size;
        let mut temp = vec![0.0_f64; size * size];

        // first pass on rows
        transform_transposed(block.samples(), &mut temp, size, &transform_line);

        // second pass on columns (which are now rows in temp due to transpose)
        let mut result = vec![0.0_f64; size * size];
        transform_transposed(&temp, &mut result, size, &transform_line);

        SquareBlock::from_samples(size, result)
    }
}

/// Transform every row of `source` and store it as a column of `destination`.
fn transform_transposed(source: &[f64], destination: &mut [f64], size: usize, transform_line: &impl Fn(&mut [f64])) {
    for (row, line) in source.chunks_exact(size).enumerate() {
        let mut line_buffer: SmallVec<[f64; 8]> = line.iter().copied().collect();
        transform_line(line_buffer.as_mut_slice());

        for (column, &value) in line_buffer.iter().enumerate() {
            destination[column * size + row] = value;
        }
    }
}

impl fmt::Debug for BlockTransform {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("BlockTransform").field("size", &self.size).finish()
    }
}
