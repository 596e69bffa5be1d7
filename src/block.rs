//! A square grid of samples, stored row by row.

use crate::error::{Error, Result};


/// The side length of the blocks that the zigzag scan and the analysis operate on.
pub const BLOCK_SIZE: usize = 8;

/// The number of samples in a block of `BLOCK_SIZE`.
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;


/// A square grid of `size * size` samples in row-major order.
/// A block is always fully populated, there are no partial blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareBlock<T> {
    size: usize,
    samples: Vec<T>,
}

impl<T> SquareBlock<T> {

    /// Create a block from samples in row-major order.
    /// Returns `InsufficientData` if there are fewer than `size * size` samples,
    /// and `InvalidArgument` if there are more, or if the size is zero.
    pub fn from_samples(size: usize, samples: Vec<T>) -> Result<Self> {
        let area = checked_area(size)?;

        if samples.len() < area { return Err(Error::insufficient(area, samples.len())); }
        if samples.len() > area { return Err(Error::invalid("too many samples for block size")); }

        Ok(SquareBlock { size, samples })
    }

    /// Create a block from a list of rows.
    /// Each row must have as many samples as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        checked_area(size)?;

        if rows.iter().any(|row| row.len() != size) {
            return Err(Error::invalid("block is not square"));
        }

        let samples = rows.into_iter().flatten().collect();
        Ok(SquareBlock { size, samples })
    }

    /// The number of rows, which equals the number of columns.
    pub fn size(&self) -> usize { self.size }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[T] { &self.samples }

    /// Mutable access to all samples in row-major order.
    pub fn samples_mut(&mut self) -> &mut [T] { &mut self.samples }

    /// Take the samples, consuming this block.
    pub fn into_samples(self) -> Vec<T> { self.samples }

    /// The sample at the specified position, or `None` if outside of this block.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.size && column < self.size { self.samples.get(row * self.size + column) }
        else { None }
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.samples.chunks_exact(self.size)
    }
}

impl<T: Clone> SquareBlock<T> {

    /// Create a block where every sample has the same value.
    /// Returns `InvalidArgument` if the samples cannot be allocated.
    pub fn filled(size: usize, value: T) -> Result<Self> {
        let area = checked_area(size)?;

        let mut samples = Vec::new();
        samples.try_reserve_exact(area).map_err(|_| Error::invalid("block size too large"))?;
        samples.resize(area, value);

        Ok(SquareBlock { size, samples })
    }
}

/// The number of samples in a block of the specified size.
/// Zero and overflowing sizes are rejected.
pub(crate) fn checked_area(size: usize) -> Result<usize> {
    if size == 0 { return Err(Error::invalid("block size must not be zero")); }
    size.checked_mul(size).ok_or_else(|| Error::invalid("block size too large"))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn too_few_samples(){
        let block = SquareBlock::from_samples(8, vec![0_u8; 63]);
        assert_eq!(block, Err(Error::InsufficientData { required: 64, available: 63 }));
    }

    #[test]
    fn too_many_samples(){
        assert!(matches!(SquareBlock::from_samples(2, vec![0_u8; 5]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn zero_size(){
        assert!(SquareBlock::<u8>::from_samples(0, Vec::new()).is_err());
        assert!(SquareBlock::<u8>::from_rows(Vec::new()).is_err());
        assert!(SquareBlock::filled(0, 1.0).is_err());
    }

    #[test]
    fn huge_size(){
        assert!(matches!(SquareBlock::filled(usize::MAX >> 1, 0.0_f64), Err(Error::InvalidArgument(_))));
        assert!(matches!(SquareBlock::from_samples(usize::MAX >> 1, vec![0_u8; 3]), Err(Error::InvalidArgument(_))));

        // the area fits into usize, but not into memory
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(SquareBlock::filled(1 << 31, 0.0_f64), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn ragged_rows(){
        let rows = vec![vec![1, 2], vec![3]];
        assert!(matches!(SquareBlock::from_rows(rows), Err(Error::InvalidArgument(_))));

        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert!(matches!(SquareBlock::from_rows(rows), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn row_major_access(){
        let block = SquareBlock::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(block.size(), 2);
        assert_eq!(block.samples(), &[1, 2, 3, 4]);
        assert_eq!(block.get(1, 0), Some(&3));
        assert_eq!(block.get(0, 2), None);
        assert_eq!(block.rows().map(|row| row.to_vec()).collect::<Vec<_>>(), vec![vec![1, 2], vec![3, 4]]);
    }
}
