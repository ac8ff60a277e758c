//! Benchmark registry
//!
//! Gantree: L3_Bench → Registry
//!
//! Resolves benchmark names to generators and produces algorithm-level
//! circuits, optionally mirrored.

use crate::benchmarks::{vqerealamprandom, vqesu2random};
use crate::mirror::create_mirror_circuit;
use qbench_core::{bench, Circuit, QbenchError, QbenchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registered benchmark
/// Gantree: Benchmark // 벤치마크 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Benchmark {
    /// RealAmplitudes with random parameters
    VqeRealAmpRandom,
    /// EfficientSU2 with random parameters
    VqeSu2Random,
}

impl Benchmark {
    /// Every registered benchmark
    pub const ALL: [Benchmark; 2] = [Benchmark::VqeRealAmpRandom, Benchmark::VqeSu2Random];

    /// Benchmark name (also the circuit name)
    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::VqeRealAmpRandom => bench::VQE_REAL_AMP_RANDOM,
            Benchmark::VqeSu2Random => bench::VQE_SU2_RANDOM,
        }
    }

    /// Build the benchmark circuit
    pub fn create_circuit(&self, num_qubits: usize) -> QbenchResult<Circuit> {
        match self {
            Benchmark::VqeRealAmpRandom => vqerealamprandom::create_circuit(num_qubits),
            Benchmark::VqeSu2Random => vqesu2random::create_circuit(num_qubits),
        }
    }
}

impl FromStr for Benchmark {
    type Err = QbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Benchmark::ALL
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| QbenchError::UnknownBenchmark {
                name: s.to_string(),
                supported: supported_benchmarks(),
            })
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Names of every registered benchmark
pub fn supported_benchmarks() -> Vec<String> {
    Benchmark::ALL.iter().map(|b| b.name().to_string()).collect()
}

// ============================================================================
// Benchmark Input
// ============================================================================

/// Benchmark request: a registered name with a size, or a ready circuit
/// Gantree: BenchmarkInput // 입력
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkInput {
    /// Registered benchmark
    Named {
        /// Benchmark name
        name: String,
        /// Circuit size (qubit count)
        circuit_size: usize,
    },
    /// Pre-built circuit, used as is
    Circuit(Circuit),
}

impl BenchmarkInput {
    /// Named request
    pub fn named(name: impl Into<String>, circuit_size: usize) -> Self {
        BenchmarkInput::Named {
            name: name.into(),
            circuit_size,
        }
    }

    /// Resolve to a circuit
    fn resolve(self) -> QbenchResult<Circuit> {
        match self {
            BenchmarkInput::Circuit(circuit) => Ok(circuit),
            BenchmarkInput::Named { name, circuit_size } => {
                if circuit_size == 0 {
                    return Err(QbenchError::InvalidCircuitSize(circuit_size));
                }
                let benchmark: Benchmark = name.parse()?;
                benchmark.create_circuit(circuit_size)
            }
        }
    }
}

impl From<Circuit> for BenchmarkInput {
    fn from(circuit: Circuit) -> Self {
        BenchmarkInput::Circuit(circuit)
    }
}

/// Algorithm-level benchmark circuit
///
/// With `generate_mirror_circuit` the result is `U · U†` with measurements
/// preserved.
/// Gantree: get_benchmark_alg(input, mirror) -> Result<Circuit> // 알고리즘 레벨
pub fn get_benchmark_alg(
    input: impl Into<BenchmarkInput>,
    generate_mirror_circuit: bool,
) -> QbenchResult<Circuit> {
    let circuit = input.into().resolve()?;
    if generate_mirror_circuit {
        create_mirror_circuit(&circuit)
    } else {
        Ok(circuit)
    }
}

// ============================================================================
// Tests
// ============================================================================
