//! Run-Length Encoding of symbol sequences,
//! typically the output of a zigzag scan.

use crate::error::{i64_to_usize, Error, Result};


/// A maximal group of consecutive equal symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run<T> {

    /// How many times the value repeats. Never zero in an encoded list.
    pub count: usize,

    /// The repeated symbol.
    pub value: T,
}

impl<T> Run<T> {

    /// A run of `count` repetitions of `value`.
    pub fn new(count: usize, value: T) -> Self {
        Run { count, value }
    }

    /// The `(count, value)` tuple of this run.
    pub fn into_pair(self) -> (usize, T) {
        (self.count, self.value)
    }
}

impl<T> From<(usize, T)> for Run<T> {
    fn from((count, value): (usize, T)) -> Self { Run { count, value } }
}


/// Group the sequence into maximal runs of equal values, in the order they occur.
/// Values are compared exactly. An empty sequence has no runs.
pub fn encode<T: PartialEq + Clone>(sequence: &[T]) -> Vec<Run<T>> {
    let mut runs: Vec<Run<T>> = Vec::new();
    let mut run_start = 0;

    while run_start < sequence.len() {
        let value = &sequence[run_start];
        let mut run_end = run_start + 1;

        while run_end < sequence.len() && sequence[run_end] == *value {
            run_end += 1;
        }

        runs.push(Run::new(run_end - run_start, value.clone()));
        run_start = run_end;
    }

    runs
}

/// Expand every run into `count` repetitions of its value.
/// Returns an error if any run has a count of zero.
pub fn decode<T: Clone>(runs: &[Run<T>]) -> Result<Vec<T>> {
    let mut decoded = Vec::new();
    decoded.try_reserve_exact(decoded_len(runs)?)
        .map_err(|_| Error::invalid("decoded sequence too long"))?;

    for run in runs {
        decoded.resize(decoded.len() + run.count, run.value.clone());
    }

    Ok(decoded)
}

/// Expand externally supplied `(count, value)` pairs.
/// Returns an error if any count is zero or negative.
pub fn decode_pairs<T: Clone>(pairs: &[(i64, T)]) -> Result<Vec<T>> {
    let runs = pairs.iter()
        .map(|(count, value)| Ok(Run::new(i64_to_usize(*count, "negative run length")?, value.clone())))
        .collect::<Result<Vec<Run<T>>>>()?;

    decode(&runs)
}

/// The runs as `(count, value)` tuples.
pub fn to_pairs<T: Clone>(runs: &[Run<T>]) -> Vec<(usize, T)> {
    runs.iter().cloned().map(Run::into_pair).collect()
}

fn decoded_len<T>(runs: &[Run<T>]) -> Result<usize> {
    runs.iter().try_fold(0_usize, |length, run| {
        if run.count == 0 { return Err(Error::invalid("run length must be positive")); }
        length.checked_add(run.count).ok_or_else(|| Error::invalid("decoded sequence too long"))
    })
}
