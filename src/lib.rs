//! Building blocks of block-based image compression:
//! color space conversion, zigzag scanning, run-length encoding
//! and the separable discrete cosine transform.
//!
//! Every operation is a pure function of its input.
//! Failures are returned as `error::Error`, nothing in this crate panics on bad input.

#![forbid(unsafe_code)]
#![warn(missing_docs)]


pub mod error;
pub mod math;
pub mod block;
pub mod color;
pub mod zigzag;
pub mod rle;
pub mod dct;
pub mod analysis;


/// Export the most important items.
pub mod prelude {

    // core operations
    pub use crate::color::ColorTransform;
    pub use crate::dct::BlockTransform;
    pub use crate::zigzag::{scan, scan_at, read_and_scan, scan_block, unscan, unscan_8x8};
    pub use crate::rle::{encode, decode, decode_pairs, Run};
    pub use crate::analysis::{analyze_block, analyze_blocks, AnalyzeOptions, BlockAnalysis};

    // core data types
    pub use crate::block::{SquareBlock, BLOCK_SIZE, BLOCK_AREA};
    pub use crate::math::{Vec3, Matrix3};

    // secondary data types
    pub use crate::error::{self, Error, Result, UnitResult};
}
