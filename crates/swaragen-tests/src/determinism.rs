//! Determinism checks.
//!
//! Runs a generation closure several times and compares the bytes produced.

/// Result of a determinism check.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run.
    pub hash: String,
    /// First differing byte offset and run index, if any.
    pub first_difference: Option<(usize, usize)>,
}

/// BLAKE3 hex hash of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate` `runs` times and compares every output with the first.
pub fn verify_determinism<F, T>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> T,
    T: AsRef<[u8]>,
{
    let first = generate();
    let first = first.as_ref().to_vec();
    let hash = compute_hash(&first);

    for run in 1..runs {
        let output = generate();
        let output = output.as_ref();
        if output != first.as_slice() {
            let offset = first
                .iter()
                .zip(output)
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| first.len().min(output.len()));
            return DeterminismResult {
                is_deterministic: false,
                runs: run + 1,
                hash,
                first_difference: Some((offset, run)),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        first_difference: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_output_is_deterministic() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 3);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
    }

    #[test]
    fn test_changing_output_is_detected() {
        let mut counter = 0u8;
        let result = verify_determinism(
            || {
                counter += 1;
                vec![0u8, counter]
            },
            3,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.first_difference, Some((1, 1)));
    }
}
