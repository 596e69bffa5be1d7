//! Analyze raw byte blocks by scanning them in zigzag order
//! and run-length encoding the scanned sequence.

use crate::block::BLOCK_AREA;
use crate::error::{Error, Result};
use crate::rle::{self, Run};
use crate::zigzag;


/// The zigzag scan of one 8x8 block and its run-length encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockAnalysis {

    /// The 64 samples of the block in zigzag order.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_scan"))]
    pub scan: [u8; BLOCK_AREA],

    /// The scanned samples grouped into maximal runs.
    pub runs: Vec<Run<u8>>,
}

/// Controls how a buffer of many blocks is analyzed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzeOptions {

    /// Reject buffers whose length is not a multiple of the block size.
    /// Otherwise, trailing bytes are ignored.
    pub pedantic: bool,

    /// Analyze blocks on multiple threads. Has no effect without the `rayon` feature.
    pub parallel: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions { pedantic: false, parallel: cfg!(feature = "rayon") }
    }
}

impl AnalyzeOptions {

    /// Reject trailing bytes that do not fill a whole block.
    pub fn pedantic() -> Self {
        AnalyzeOptions { pedantic: true, .. Self::default() }
    }

    /// Analyze all blocks on the current thread.
    pub fn non_parallel(self) -> Self {
        AnalyzeOptions { parallel: false, .. self }
    }
}


/// Scan the first 64 bytes in zigzag order and encode the result.
/// Returns `InsufficientData` if fewer than 64 bytes are available.
pub fn analyze_block(bytes: &[u8]) -> Result<BlockAnalysis> {
    let scan = zigzag::scan(bytes)?;
    let runs = rle::encode(&scan);
    Ok(BlockAnalysis { scan, runs })
}

/// Analyze every complete 8x8 block in the buffer, in order.
pub fn analyze_blocks(bytes: &[u8], options: AnalyzeOptions) -> Result<Vec<BlockAnalysis>> {
    if bytes.len() < BLOCK_AREA {
        return Err(Error::insufficient(BLOCK_AREA, bytes.len()));
    }

    if options.pedantic && bytes.len() % BLOCK_AREA != 0 {
        return Err(Error::invalid("trailing bytes after last block"));
    }

    analyze_chunks(bytes, options.parallel)
}

#[cfg(feature = "rayon")]
fn analyze_chunks(bytes: &[u8], parallel: bool) -> Result<Vec<BlockAnalysis>> {
    use rayon::prelude::*;

    if parallel { bytes.par_chunks_exact(BLOCK_AREA).map(analyze_block).collect() }
    else { bytes.chunks_exact(BLOCK_AREA).map(analyze_block).collect() }
}

#[cfg(not(feature = "rayon"))]
fn analyze_chunks(bytes: &[u8], _parallel: bool) -> Result<Vec<BlockAnalysis>> {
    bytes.chunks_exact(BLOCK_AREA).map(analyze_block).collect()
}

#[cfg(feature = "serde")]
fn serialize_scan<S: serde::Serializer>(scan: &[u8; BLOCK_AREA], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(scan.iter())
}
