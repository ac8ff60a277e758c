//! # QBench Bench
//!
//! Seeded VQE benchmark generators.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qbench_bench // L3: Benchmarks (완료)
//!     Rng // SeedSequence + PCG64 (완료)
//!     GeneratorConfig // 시드/깊이/얽힘 설정 (완료)
//!     Generators // 랜덤 파라미터 안사츠 (완료)
//!         vqerealamprandom // RealAmplitudes (완료)
//!         vqesu2random // EfficientSU2 (완료)
//!     Registry // 이름 → 생성기 (완료)
//!     Mirror // U · U† (완료)
//!     BenchSuite // 메트릭 수집, QASM 내보내기 (완료)
//!     Reporter // 결과 리포팅 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qbench_bench::prelude::*;
//!
//! let circuit = vqerealamprandom::create_circuit(4).unwrap();
//! assert_eq!(circuit.name(), Some("vqerealamprandom"));
//! assert_eq!(circuit.count_measurements(), 4);
//!
//! let mirror = get_benchmark_alg(BenchmarkInput::named("vqesu2random", 3), true).unwrap();
//! assert_eq!(mirror.name(), Some("vqesu2random_mirror"));
//! ```
//!
//! ## Benchmark Suite
//!
//! ```rust
//! use qbench_bench::prelude::*;
//!
//! let mut suite = BenchSuite::new();
//! let results = suite.run_all(2..=4).unwrap();
//!
//! let report = Reporter::to_markdown(&results);
//! println!("{}", report);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Seeded random source (Gantree: L3_Bench → Rng)
pub mod rng;

/// Generator configuration (Gantree: L3_Bench → GeneratorConfig)
pub mod config;

/// Circuit generators (Gantree: L3_Bench → Generators)
pub mod generators;

/// Benchmark entry points (Gantree: L3_Bench → Benchmarks)
pub mod benchmarks;

/// Mirror circuits (Gantree: L3_Bench → Mirror)
pub mod mirror;

/// Benchmark registry (Gantree: L3_Bench → Registry)
pub mod registry;

/// Benchmark suite (Gantree: L3_Bench → BenchSuite)
pub mod suite;

/// Reporting (Gantree: L3_Bench → Reporter)
pub mod reporter;

// ============================================================================
// Re-exports
// ============================================================================

pub use benchmarks::{vqerealamprandom, vqesu2random};
pub use config::GeneratorConfig;
pub use generators::CircuitGenerator;
pub use mirror::create_mirror_circuit;
pub use registry::{get_benchmark_alg, supported_benchmarks, Benchmark, BenchmarkInput};
pub use reporter::{ReportFormat, Reporter};
pub use rng::{uniform_angles, Pcg64, SeedSequence};
pub use suite::{BenchSuite, BenchmarkRecord, BenchmarkStatistics};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qbench_bench::prelude::*;
    //! ```

    pub use crate::benchmarks::{vqerealamprandom, vqesu2random};
    pub use crate::config::GeneratorConfig;
    pub use crate::generators::CircuitGenerator;
    pub use crate::mirror::create_mirror_circuit;
    pub use crate::registry::{get_benchmark_alg, supported_benchmarks, Benchmark, BenchmarkInput};
    pub use crate::reporter::{ReportFormat, Reporter};
    pub use crate::rng::{uniform_angles, Pcg64, SeedSequence};
    pub use crate::suite::{BenchSuite, BenchmarkRecord, BenchmarkStatistics};
    pub use qbench_library::prelude::*;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_relative_eq;

    fn angles(circuit: &Circuit) -> Vec<f64> {
        circuit.gates().iter().flat_map(|g| g.angles()).collect()
    }

    #[test]
    fn test_parameter_count_matches_template() {
        for n in 1..9 {
            let template = real_amplitudes(n, &Entanglement::Full, bench::DEFAULT_REPS).unwrap();
            let circuit = vqerealamprandom::create_circuit(n).unwrap();
            assert_eq!(angles(&circuit).len(), template.num_parameters());

            let template = efficient_su2(n, &Entanglement::Full, bench::DEFAULT_REPS).unwrap();
            let circuit = vqesu2random::create_circuit(n).unwrap();
            assert_eq!(angles(&circuit).len(), template.num_parameters());
        }
    }

    #[test]
    fn test_manual_pipeline_matches_generator() {
        use rand::SeedableRng;

        let template = real_amplitudes(5, &Entanglement::Full, 3).unwrap();
        let mut rng = Pcg64::seed_from_u64(bench::DEFAULT_SEED);
        let values = uniform_angles(&mut rng, template.num_parameters());

        let mut expected = template.assign_parameters(&values).unwrap();
        expected.measure_all().unwrap();
        expected.set_name("vqerealamprandom");

        assert_eq!(vqerealamprandom::create_circuit(5).unwrap(), expected);
    }

    #[test]
    fn test_both_benchmarks_share_draw_prefix() {
        let real = vqerealamprandom::create_circuit(4).unwrap();
        let su2 = vqesu2random::create_circuit(4).unwrap();

        // both bind θ[0..4] from the first four draws of the same stream
        for (a, b) in angles(&real).iter().zip(angles(&su2)).take(4) {
            assert_relative_eq!(*a, b);
        }
    }

    #[test]
    fn test_qasm_export_text() {
        let circuit = vqesu2random::create_circuit(2).unwrap();
        let qasm = circuit.to_qasm().unwrap();

        assert!(qasm.starts_with("OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[2];\ncreg meas[2];"));
        assert!(qasm.contains("cx q[0],q[1];"));
        assert!(qasm.ends_with("measure q[1] -> meas[1];\n"));
    }

    #[test]
    fn test_registry_and_suite_agree() {
        let mut suite = BenchSuite::new();
        suite.bench(Benchmark::VqeSu2Random, 3).unwrap();

        let direct = get_benchmark_alg(BenchmarkInput::named("vqesu2random", 3), false).unwrap();
        assert_eq!(suite.circuits()[0], direct);
    }

    #[test]
    fn test_full_workflow() {
        let mut suite = BenchSuite::new();
        let results = suite.run_all(2..=3).unwrap();
        assert_eq!(results.len(), 4);

        let stats = suite.statistics();
        assert_eq!(stats.count, 4);

        let csv = Reporter::report(&results, ReportFormat::Csv);
        assert!(csv.contains("vqesu2random,3,24"));
    }
}
