//! `vqerealamprandom`: RealAmplitudes ansatz (full entanglement, 3 reps)
//! with angles drawn from a generator seeded with 10.

use crate::generators::CircuitGenerator;
use qbench_core::{Circuit, QbenchResult};

/// Build the benchmark circuit for `num_qubits` qubits
/// Gantree: create_circuit(n) -> Result<Circuit> // 벤치마크 회로
pub fn create_circuit(num_qubits: usize) -> QbenchResult<Circuit> {
    CircuitGenerator::new().vqe_real_amp_random(num_qubits)
}
