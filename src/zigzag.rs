//! Diagonal (zigzag) reordering of square blocks.
//!
//! Cells are grouped into diagonals of constant `row + column`.
//! Diagonals with an odd index run from the top right to the bottom left,
//! diagonals with an even index run from the bottom left to the top right.
//! For 8x8 blocks this is the coefficient order known from JPEG.

use std::convert::TryInto;
use std::io::{ErrorKind, Read};
use crate::block::{checked_area, SquareBlock, BLOCK_AREA, BLOCK_SIZE};
use crate::error::{Error, Result};


/// Zigzag order for 8x8 blocks.
/// Maps zigzag index -> row-major index.
pub const ZIGZAG_8X8: [usize; BLOCK_AREA] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse zigzag order for 8x8 blocks.
/// Maps row-major index -> zigzag index.
pub const INVERSE_ZIGZAG_8X8: [usize; BLOCK_AREA] = {
    let mut inverse = [0; BLOCK_AREA];
    let mut index = 0;

    while index < BLOCK_AREA {
        inverse[ZIGZAG_8X8[index]] = index;
        index += 1;
    }

    inverse
};


/// Compute the zigzag order of a square block with the specified side length.
/// Maps zigzag index -> row-major index.
/// Returns `InvalidArgument` for size zero and for sizes whose order cannot be allocated.
pub fn diagonal_order(size: usize) -> Result<Vec<usize>> {
    let area = checked_area(size)?;

    let mut order = Vec::new();
    order.try_reserve_exact(area).map_err(|_| Error::invalid("block size too large"))?;
    push_diagonals(&mut order, size);

    Ok(order)
}

/// The order of a block whose area is already known to fit into memory.
fn order_of_area(size: usize, area: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(area);
    push_diagonals(&mut order, size);
    order
}

// size must be at least one, and size * size must not overflow
fn push_diagonals(order: &mut Vec<usize>, size: usize) {
    for diagonal in 0 .. 2 * size - 1 {
        let first_row = diagonal.saturating_sub(size - 1);
        let last_row = diagonal.min(size - 1);
        let cell = |row: usize| row * size + (diagonal - row);

        if diagonal % 2 == 1 { order.extend((first_row ..= last_row).map(cell)); }
        else { order.extend((first_row ..= last_row).rev().map(cell)); }
    }
}


/// Reorder the first 64 bytes, interpreted as an 8x8 row-major block, into zigzag order.
/// Returns `InsufficientData` if fewer than 64 bytes are available.
pub fn scan(bytes: &[u8]) -> Result<[u8; BLOCK_AREA]> {
    let block = first_block(bytes)?;

    let mut destination = [0_u8; BLOCK_AREA];
    to_zig_zag(&mut destination, block);
    Ok(destination)
}

/// Scan the 8x8 block that starts at the specified byte offset.
pub fn scan_at(bytes: &[u8], offset: usize) -> Result<[u8; BLOCK_AREA]> {
    match bytes.get(offset ..) {
        Some(remaining) => scan(remaining),
        None => Err(Error::insufficient(BLOCK_AREA, 0)),
    }
}

/// Read one 8x8 block from a source and reorder it into zigzag order.
/// A source that ends early or fails to read reports how many bytes it produced.
pub fn read_and_scan(mut read: impl Read) -> Result<[u8; BLOCK_AREA]> {
    let mut buffer = [0_u8; BLOCK_AREA];
    let mut filled = 0;

    while filled < BLOCK_AREA {
        match read.read(&mut buffer[filled ..]) {
            Ok(0) => break,
            Ok(count) => filled += count,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    scan(&buffer[.. filled])
}

/// Reorder an 8x8 block into zigzag order.
pub fn to_zig_zag<T>(destination: &mut [T; BLOCK_AREA], source: &[T; BLOCK_AREA]) where T: Copy {
    for (slot, index_in_source) in destination.iter_mut().zip(ZIGZAG_8X8) {
        *slot = source[index_in_source];
    }
}

/// Restore the row-major order of an 8x8 block that was reordered by `scan`.
pub fn unscan_8x8<T>(sequence: &[T; BLOCK_AREA]) -> [T; BLOCK_AREA] where T: Copy {
    let mut block = *sequence;

    for (slot, index_in_sequence) in block.iter_mut().zip(INVERSE_ZIGZAG_8X8) {
        *slot = sequence[index_in_sequence];
    }

    block
}

/// Reorder a square block of any size into zigzag order.
pub fn scan_block<T: Clone>(block: &SquareBlock<T>) -> Vec<T> {
    let samples = block.samples();

    if block.size() == BLOCK_SIZE {
        ZIGZAG_8X8.iter().map(|&index| samples[index].clone()).collect()
    }
    else {
        order_of_area(block.size(), samples.len()).into_iter().map(|index| samples[index].clone()).collect()
    }
}

/// Restore a square block from a sequence in zigzag order.
/// The sequence must contain exactly `size * size` samples.
pub fn unscan<T: Clone>(sequence: &[T], size: usize) -> Result<SquareBlock<T>> {
    let area = checked_area(size)?;

    if sequence.len() < area { return Err(Error::insufficient(area, sequence.len())); }
    if sequence.len() > area { return Err(Error::invalid("too many samples for block size")); }

    let mut inverse = vec![0; area];
    for (index_in_sequence, index_in_block) in order_of_area(size, area).into_iter().enumerate() {
        inverse[index_in_block] = index_in_sequence;
    }

    let samples = inverse.into_iter().map(|index| sequence[index].clone()).collect();
    SquareBlock::from_samples(size, samples)
}

fn first_block(bytes: &[u8]) -> Result<&[u8; BLOCK_AREA]> {
    match bytes.get(.. BLOCK_AREA) {
        Some(block) => block.try_into().map_err(|_| Error::insufficient(BLOCK_AREA, bytes.len())),
        None => Err(Error::insufficient(BLOCK_AREA, bytes.len())),
    }
}
