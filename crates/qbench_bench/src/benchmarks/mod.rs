//! Benchmark entry points
//!
//! Gantree: L3_Bench → Benchmarks
//!
//! One module per benchmark, each exposing `create_circuit(num_qubits)`
//! with the reference configuration.

/// RealAmplitudes with random parameters
pub mod vqerealamprandom;

/// EfficientSU2 with random parameters
pub mod vqesu2random;
