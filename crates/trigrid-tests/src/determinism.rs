//! Determinism checks: run a renderer several times and compare bytes.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First differing byte offset and run, if any.
    pub first_difference: Option<(usize, usize)>,
}

impl fmt::Display for DeterminismResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_difference {
            None => write!(f, "deterministic over {} runs ({})", self.runs, self.hash),
            Some((offset, run)) => write!(f, "run {} differs at byte {}", run, offset),
        }
    }
}

/// Calls `produce` `runs` times and compares every output with the first.
pub fn verify_determinism<F>(produce: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Vec<u8>,
{
    let first = produce();
    let hash = blake3::hash(&first).to_hex().to_string();
    let mut first_difference = None;

    for run in 1..runs {
        let output = produce();
        let offset = first
            .iter()
            .zip(&output)
            .position(|(a, b)| a != b)
            .or_else(|| (first.len() != output.len()).then(|| first.len().min(output.len())));
        if let Some(offset) = offset {
            first_difference = Some((offset, run));
            break;
        }
    }

    DeterminismResult {
        is_deterministic: first_difference.is_none(),
        runs,
        hash,
        first_difference,
    }
}
