//! `vqesu2random`: EfficientSU2 ansatz (full entanglement, 3 reps) with
//! angles drawn from a generator seeded with 10.

use crate::generators::CircuitGenerator;
use qbench_core::{Circuit, QbenchResult};

/// Build the benchmark circuit for `num_qubits` qubits
/// Gantree: create_circuit(n) -> Result<Circuit> // 벤치마크 회로
pub fn create_circuit(num_qubits: usize) -> QbenchResult<Circuit> {
    CircuitGenerator::new().vqe_su2_random(num_qubits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_circuit() {
        let circuit = create_circuit(4).unwrap();
        assert_eq!(circuit.name(), Some("vqesu2random"));
        assert_eq!(circuit.count_parameterized(), 32);
        assert!(circuit.is_bound());
    }

    #[test]
    fn test_single_qubit() {
        let circuit = create_circuit(1).unwrap();
        assert_eq!(circuit.count_2q(), 0);
        assert_eq!(circuit.count_parameterized(), 8);
    }
}
