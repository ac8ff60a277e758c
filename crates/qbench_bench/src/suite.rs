//! Benchmark suite
//!
//! Gantree: L3_Bench → BenchSuite
//!
//! Generates registered benchmarks over qubit ranges, records circuit
//! metrics and exports OpenQASM files.

use crate::registry::{get_benchmark_alg, Benchmark, BenchmarkInput};
use qbench_core::{Circuit, QbenchError, QbenchResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Metrics of one generated benchmark circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Circuit name
    pub name: String,

    /// Number of qubits
    pub qubits: usize,

    /// Number of bound rotation angles
    pub parameters: usize,

    /// Circuit depth
    pub depth: usize,

    /// Number of operations (barriers excluded)
    pub size: usize,

    /// Single-qubit gate count
    pub gates_1q: usize,

    /// Two-qubit gate count
    pub gates_2q: usize,

    /// Measurement count
    pub measurements: usize,

    /// Mirror circuit
    pub mirror: bool,

    /// Generation time (microseconds)
    pub time_us: u64,
}

impl BenchmarkRecord {
    /// Collect metrics from a generated circuit
    pub fn from_circuit(circuit: &Circuit, mirror: bool, time_us: u64) -> Self {
        Self {
            name: circuit.name().unwrap_or_default().to_string(),
            qubits: circuit.num_qubits(),
            parameters: circuit.gates().iter().map(|g| g.angles().len()).sum(),
            depth: circuit.depth(),
            size: circuit.size(),
            gates_1q: circuit.count_1q(),
            gates_2q: circuit.count_2q(),
            measurements: circuit.count_measurements(),
            mirror,
            time_us,
        }
    }

    /// OpenQASM file name, `{name}_alg_{qubits}.qasm`
    pub fn file_name(&self) -> String {
        format!("{}_alg_{}.qasm", self.name, self.qubits)
    }
}

/// Benchmark suite
/// Gantree: BenchSuite // 벤치마크 스위트
#[derive(Debug, Default)]
pub struct BenchSuite {
    /// Generate mirror circuits
    mirror: bool,

    /// Records, in generation order
    results: Vec<BenchmarkRecord>,

    /// Generated circuits, parallel to `results`
    circuits: Vec<Circuit>,
}

impl BenchSuite {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create new benchmark suite
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate mirror circuits instead of plain ones
    pub fn mirror(mut self) -> Self {
        self.mirror = true;
        self
    }

    // ========================================================================
    // Individual Benchmarks
    // ========================================================================

    /// Generate one benchmark circuit and record its metrics
    /// Gantree: bench(b, n) -> Result<BenchmarkRecord> // 단일 벤치마크
    pub fn bench(&mut self, benchmark: Benchmark, qubits: usize) -> QbenchResult<BenchmarkRecord> {
        let start = Instant::now();
        let circuit = get_benchmark_alg(BenchmarkInput::named(benchmark.name(), qubits), self.mirror)?;
        let time_us = start.elapsed().as_micros() as u64;

        let record = BenchmarkRecord::from_circuit(&circuit, self.mirror, time_us);
        log::info!(
            "Generated {} ({}Q): depth {}, {} two-qubit gates, {}us",
            record.name,
            record.qubits,
            record.depth,
            record.gates_2q,
            record.time_us
        );

        self.results.push(record.clone());
        self.circuits.push(circuit);
        Ok(record)
    }

    // ========================================================================
    // Benchmark Suites
    // ========================================================================

    /// Generate `benchmark` for every qubit count in `qubits`
    pub fn run_qubit_scaling(
        &mut self,
        benchmark: Benchmark,
        qubits: RangeInclusive<usize>,
    ) -> QbenchResult<Vec<BenchmarkRecord>> {
        log::info!("=== Qubit Scaling: {} {:?} ===", benchmark, qubits);
        qubits.map(|n| self.bench(benchmark, n)).collect()
    }

    /// Generate every registered benchmark for `qubits`
    pub fn run_all(&mut self, qubits: RangeInclusive<usize>) -> QbenchResult<Vec<BenchmarkRecord>> {
        let mut all_results = Vec::new();
        for benchmark in Benchmark::ALL {
            all_results.extend(self.run_qubit_scaling(benchmark, qubits.clone())?);
        }
        Ok(all_results)
    }

    /// Every registered benchmark at 4 qubits
    pub fn run_quick(&mut self) -> QbenchResult<Vec<BenchmarkRecord>> {
        self.run_all(4..=4)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Get all results
    pub fn results(&self) -> &[BenchmarkRecord] {
        &self.results
    }

    /// Generated circuits
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Clear results
    pub fn clear(&mut self) {
        self.results.clear();
        self.circuits.clear();
    }

    /// Get statistics
    pub fn statistics(&self) -> BenchmarkStatistics {
        BenchmarkStatistics::from_results(&self.results)
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Write every generated circuit to `dir` as OpenQASM 2.0
    /// Gantree: export_qasm(dir) -> Result<Vec<PathBuf>> // QASM 내보내기
    pub fn export_qasm(&self, dir: impl AsRef<Path>) -> QbenchResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| QbenchError::FileError(format!("{}: {}", dir.display(), e)))?;

        let mut paths = Vec::with_capacity(self.circuits.len());
        for (record, circuit) in self.results.iter().zip(&self.circuits) {
            let path = dir.join(record.file_name());
            std::fs::write(&path, circuit.to_qasm()?)
                .map_err(|e| QbenchError::FileError(format!("{}: {}", path.display(), e)))?;
            paths.push(path);
        }

        log::info!("Exported {} circuits to {}", paths.len(), dir.display());
        Ok(paths)
    }
}

/// Aggregate metrics over benchmark records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStatistics {
    /// Number of benchmarks
    pub count: usize,

    /// Average depth
    pub avg_depth: f64,

    /// Maximum depth
    pub max_depth: usize,

    /// Average two-qubit gate count
    pub avg_gates_2q: f64,

    /// Total number of bound parameters
    pub total_parameters: usize,

    /// Average generation time (microseconds)
    pub avg_time_us: f64,

    /// Total generation time (microseconds)
    pub total_time_us: u64,
}

impl BenchmarkStatistics {
    /// Compute statistics from results
    pub fn from_results(results: &[BenchmarkRecord]) -> Self {
        if results.is_empty() {
            return Self {
                count: 0,
                avg_depth: 0.0,
                max_depth: 0,
                avg_gates_2q: 0.0,
                total_parameters: 0,
                avg_time_us: 0.0,
                total_time_us: 0,
            };
        }

        let count = results.len();
        let total_time_us: u64 = results.iter().map(|r| r.time_us).sum();

        Self {
            count,
            avg_depth: results.iter().map(|r| r.depth).sum::<usize>() as f64 / count as f64,
            max_depth: results.iter().map(|r| r.depth).max().unwrap_or(0),
            avg_gates_2q: results.iter().map(|r| r.gates_2q).sum::<usize>() as f64 / count as f64,
            total_parameters: results.iter().map(|r| r.parameters).sum(),
            avg_time_us: total_time_us as f64 / count as f64,
            total_time_us,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bench_suite_new() {
        let suite = BenchSuite::new();
        assert!(suite.results().is_empty());
        assert!(suite.circuits().is_empty());
    }

    #[test]
    fn test_bench_record() {
        let mut suite = BenchSuite::new();
        let record = suite.bench(Benchmark::VqeRealAmpRandom, 4).unwrap();

        assert_eq!(record.name, "vqerealamprandom");
        assert_eq!(record.qubits, 4);
        assert_eq!(record.parameters, 16);
        assert_eq!(record.gates_1q, 16);
        assert_eq!(record.gates_2q, 18);
        assert_eq!(record.measurements, 4);
        assert!(!record.mirror);
        assert_eq!(record.file_name(), "vqerealamprandom_alg_4.qasm");
    }

    #[test]
    fn test_mirror_suite() {
        let mut suite = BenchSuite::new().mirror();
        let record = suite.bench(Benchmark::VqeSu2Random, 3).unwrap();

        assert!(record.mirror);
        assert_eq!(record.name, "vqesu2random_mirror");
        assert_eq!(record.parameters, 48);
        assert_eq!(record.measurements, 3);
    }

    #[test]
    fn test_qubit_scaling() {
        let mut suite = BenchSuite::new();
        let results = suite
            .run_qubit_scaling(Benchmark::VqeSu2Random, 2..=5)
            .unwrap();

        assert_eq!(results.len(), 4);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.qubits, i + 2);
            assert_eq!(r.parameters, 8 * (i + 2));
        }
    }

    #[test]
    fn test_scaling_error_propagates() {
        let mut suite = BenchSuite::new();
        let result = suite.run_qubit_scaling(Benchmark::VqeRealAmpRandom, 0..=2);
        assert!(matches!(result, Err(QbenchError::InvalidCircuitSize(0))));
    }

    #[test]
    fn test_run_quick() {
        let mut suite = BenchSuite::new();
        let results = suite.run_quick().unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(suite.circuits().len(), 2);
    }

    #[test]
    fn test_statistics() {
        let mut suite = BenchSuite::new();
        suite.run_quick().unwrap();

        let stats = suite.statistics();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_parameters, 16 + 32);
        assert_relative_eq!(stats.avg_gates_2q, 18.0);
        assert!(stats.max_depth as f64 >= stats.avg_depth);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = BenchSuite::new().statistics();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_time_us, 0);
    }

    #[test]
    fn test_clear() {
        let mut suite = BenchSuite::new();
        suite.run_quick().unwrap();
        suite.clear();
        assert!(suite.results().is_empty());
        assert!(suite.circuits().is_empty());
    }

    #[test]
    fn test_export_qasm() {
        let dir = std::env::temp_dir().join(format!("qbench_export_{}", std::process::id()));
        let mut suite = BenchSuite::new();
        suite.bench(Benchmark::VqeRealAmpRandom, 3).unwrap();

        let paths = suite.export_qasm(&dir).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("vqerealamprandom_alg_3.qasm"));

        let text = std::fs::read_to_string(&paths[0]).unwrap();
        assert!(text.starts_with("OPENQASM 2.0;"));
        assert!(text.contains("creg meas[3];"));
        assert!(text.contains("measure q[2] -> meas[2];"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
