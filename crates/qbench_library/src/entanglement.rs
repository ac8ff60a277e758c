//! Entanglement strategies for n-local templates
//!
//! Gantree: L2_Library → Entanglement
//!
//! Maps a strategy name to the list of qubit blocks coupled by one
//! entanglement layer.

use qbench_core::{QbenchError, QbenchResult, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entanglement strategy
/// Gantree: Entanglement // 얽힘 전략
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Entanglement {
    /// Every block of qubits (all combinations)
    #[default]
    Full,
    /// Neighbouring blocks `(i, i+1, ...)`
    Linear,
    /// Linear blocks in reverse order
    ReverseLinear,
    /// Linear blocks plus the wrap-around block
    Circular,
    /// Shifted circular alternating
    Sca,
    /// Even pairs, then odd pairs (block size 2 only)
    Pairwise,
    /// Explicit blocks
    Custom(Vec<Vec<QubitId>>),
}

impl Entanglement {
    /// Qubit blocks for one entanglement layer
    ///
    /// `offset` is the repetition index; only `Sca` depends on it.
    /// Gantree: entangler_map(n, b, offset) -> Result<Vec<Vec>> // 얽힘 맵
    pub fn entangler_map(
        &self,
        num_qubits: usize,
        block_size: usize,
        offset: usize,
    ) -> QbenchResult<Vec<Vec<QubitId>>> {
        if block_size == 0 {
            return Err(QbenchError::InvalidEntanglement(
                "block size must be at least 1".into(),
            ));
        }
        if block_size > num_qubits {
            return Err(QbenchError::InvalidEntanglement(format!(
                "block size {} cannot be larger than number of qubits {}",
                block_size, num_qubits
            )));
        }

        let map = match self {
            Entanglement::Full => combinations(num_qubits, block_size),
            Entanglement::Linear => linear(num_qubits, block_size),
            Entanglement::ReverseLinear => {
                let mut map = linear(num_qubits, block_size);
                map.reverse();
                map
            }
            Entanglement::Circular => circular(num_qubits, block_size),
            Entanglement::Sca => shift_circular_alternating(num_qubits, block_size, offset),
            Entanglement::Pairwise => {
                if block_size != 2 {
                    return Err(QbenchError::InvalidEntanglement(format!(
                        "pairwise entanglement requires block size 2, got {}",
                        block_size
                    )));
                }
                pairwise(num_qubits)
            }
            Entanglement::Custom(blocks) => {
                validate_custom(blocks, num_qubits, block_size)?;
                blocks.clone()
            }
        };

        Ok(map)
    }

    /// Strategy name
    pub fn name(&self) -> &'static str {
        match self {
            Entanglement::Full => "full",
            Entanglement::Linear => "linear",
            Entanglement::ReverseLinear => "reverse_linear",
            Entanglement::Circular => "circular",
            Entanglement::Sca => "sca",
            Entanglement::Pairwise => "pairwise",
            Entanglement::Custom(_) => "custom",
        }
    }
}

impl FromStr for Entanglement {
    type Err = QbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Entanglement::Full),
            "linear" => Ok(Entanglement::Linear),
            "reverse_linear" => Ok(Entanglement::ReverseLinear),
            "circular" => Ok(Entanglement::Circular),
            "sca" => Ok(Entanglement::Sca),
            "pairwise" => Ok(Entanglement::Pairwise),
            other => Err(QbenchError::InvalidEntanglement(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Entanglement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// All `k`-combinations of `0..n` in lexicographic order
fn combinations(n: usize, k: usize) -> Vec<Vec<QubitId>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }

    let mut current: Vec<QubitId> = (0..k).collect();
    loop {
        out.push(current.clone());

        // rightmost position that has not reached its maximum
        let mut i = k;
        while i > 0 && current[i - 1] == i - 1 + n - k {
            i -= 1;
        }
        if i == 0 {
            return out;
        }

        current[i - 1] += 1;
        for j in i..k {
            current[j] = current[j - 1] + 1;
        }
    }
}

fn linear(n: usize, b: usize) -> Vec<Vec<QubitId>> {
    (0..=n - b).map(|i| (i..i + b).collect()).collect()
}

fn circular(n: usize, b: usize) -> Vec<Vec<QubitId>> {
    if b == 1 || b == n {
        return linear(n, b);
    }
    let wrap: Vec<QubitId> = (n - b + 1..n).chain(0..1).collect();
    std::iter::once(wrap).chain(linear(n, b)).collect()
}

/// Circular blocks rotated right by `offset`, reversed on odd offsets
fn shift_circular_alternating(n: usize, b: usize, offset: usize) -> Vec<Vec<QubitId>> {
    let circ = circular(n, b);
    let split = (n - offset % n) % n;

    let shifted = circ.iter().skip(split).chain(circ.iter().take(split)).cloned();
    if offset % 2 == 0 {
        shifted.collect()
    } else {
        shifted
            .map(|block| block.into_iter().rev().collect())
            .collect()
    }
}

fn pairwise(n: usize) -> Vec<Vec<QubitId>> {
    let even = (0..n / 2).map(|i| vec![2 * i, 2 * i + 1]);
    let odd = (0..n.saturating_sub(1) / 2).map(|i| vec![2 * i + 1, 2 * i + 2]);
    even.chain(odd).collect()
}

fn validate_custom(blocks: &[Vec<QubitId>], n: usize, b: usize) -> QbenchResult<()> {
    for block in blocks {
        if block.len() != b {
            return Err(QbenchError::InvalidEntanglement(format!(
                "block {:?} has {} qubits, expected {}",
                block,
                block.len(),
                b
            )));
        }
        if let Some(&q) = block.iter().find(|&&q| q >= n) {
            return Err(QbenchError::InvalidEntanglement(format!(
                "block {:?} references qubit {} but only {} qubits exist",
                block, q, n
            )));
        }
        for (i, q) in block.iter().enumerate() {
            if block[i + 1..].contains(q) {
                return Err(QbenchError::InvalidEntanglement(format!(
                    "block {:?} repeats qubit {}",
                    block, q
                )));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        let map = Entanglement::Full.entangler_map(4, 2, 0).unwrap();
        assert_eq!(
            map,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_full_block_three() {
        let map = Entanglement::Full.entangler_map(4, 3, 0).unwrap();
        assert_eq!(
            map,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_full_pair_count() {
        for n in 2..10 {
            let map = Entanglement::Full.entangler_map(n, 2, 0).unwrap();
            assert_eq!(map.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_linear_and_reverse() {
        assert_eq!(
            Entanglement::Linear.entangler_map(4, 2, 0).unwrap(),
            vec![vec![0, 1], vec![1, 2], vec![2, 3]]
        );
        assert_eq!(
            Entanglement::ReverseLinear.entangler_map(4, 2, 0).unwrap(),
            vec![vec![2, 3], vec![1, 2], vec![0, 1]]
        );
    }

    #[test]
    fn test_circular() {
        assert_eq!(
            Entanglement::Circular.entangler_map(4, 2, 0).unwrap(),
            vec![vec![3, 0], vec![0, 1], vec![1, 2], vec![2, 3]]
        );
        // block covers every qubit: no wrap-around
        assert_eq!(
            Entanglement::Circular.entangler_map(2, 2, 0).unwrap(),
            vec![vec![0, 1]]
        );
    }

    #[test]
    fn test_sca() {
        assert_eq!(
            Entanglement::Sca.entangler_map(4, 2, 0).unwrap(),
            Entanglement::Circular.entangler_map(4, 2, 0).unwrap()
        );
        assert_eq!(
            Entanglement::Sca.entangler_map(4, 2, 1).unwrap(),
            vec![vec![3, 2], vec![0, 3], vec![1, 0], vec![2, 1]]
        );
        assert_eq!(
            Entanglement::Sca.entangler_map(4, 2, 2).unwrap(),
            vec![vec![1, 2], vec![2, 3], vec![3, 0], vec![0, 1]]
        );
    }

    #[test]
    fn test_pairwise() {
        assert_eq!(
            Entanglement::Pairwise.entangler_map(5, 2, 0).unwrap(),
            vec![vec![0, 1], vec![2, 3], vec![1, 2], vec![3, 4]]
        );
        assert!(Entanglement::Pairwise.entangler_map(5, 3, 0).is_err());
    }

    #[test]
    fn test_custom() {
        let custom = Entanglement::Custom(vec![vec![0, 2], vec![1, 3]]);
        assert_eq!(
            custom.entangler_map(4, 2, 0).unwrap(),
            vec![vec![0, 2], vec![1, 3]]
        );

        assert!(Entanglement::Custom(vec![vec![0, 4]]).entangler_map(4, 2, 0).is_err());
        assert!(Entanglement::Custom(vec![vec![1, 1]]).entangler_map(4, 2, 0).is_err());
        assert!(Entanglement::Custom(vec![vec![0]]).entangler_map(4, 2, 0).is_err());
    }

    #[test]
    fn test_block_size_validation() {
        assert!(matches!(
            Entanglement::Full.entangler_map(1, 2, 0),
            Err(QbenchError::InvalidEntanglement(_))
        ));
        assert!(Entanglement::Linear.entangler_map(3, 0, 0).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        for name in ["full", "linear", "reverse_linear", "circular", "sca", "pairwise"] {
            let e: Entanglement = name.parse().unwrap();
            assert_eq!(e.to_string(), name);
        }
        assert!("diagonal".parse::<Entanglement>().is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Entanglement::ReverseLinear).unwrap();
        assert_eq!(json, "\"reverse_linear\"");
        let back: Entanglement = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(back, Entanglement::Full);
    }
}
