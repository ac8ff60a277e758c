//! Circuit builder for QBench
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Fluent builder for constructing circuits. The first rejected gate is
//! kept and returned by [`CircuitBuilder::build`].

use crate::circuit::Circuit;
use crate::error::{QbenchError, QbenchResult};
use crate::gate::Gate;
use crate::parameter::ParamValue;
use crate::types::{ClbitId, QubitId};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    /// Internal circuit being built
    /// Gantree: circuit: Circuit // 내부 회로
    circuit: Circuit,

    /// First error encountered
    error: Option<QbenchError>,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
            error: None,
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
            error: None,
        }
    }

    /// Add an arbitrary gate
    pub fn gate(mut self, gate: Gate) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.add_gate(gate) {
                self.error = Some(e);
            }
        }
        self
    }

    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================

    /// Add Hadamard gate
    /// Gantree: h(self, q) -> Self // H 추가
    pub fn h(self, qubit: QubitId) -> Self {
        self.gate(Gate::H(qubit))
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId) -> Self {
        self.gate(Gate::X(qubit))
    }

    /// Add Pauli-Y gate
    pub fn y(self, qubit: QubitId) -> Self {
        self.gate(Gate::Y(qubit))
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId) -> Self {
        self.gate(Gate::Z(qubit))
    }

    /// Add S gate
    pub fn s(self, qubit: QubitId) -> Self {
        self.gate(Gate::S(qubit))
    }

    /// Add S-dagger gate
    pub fn sdg(self, qubit: QubitId) -> Self {
        self.gate(Gate::Sdg(qubit))
    }

    /// Add SX gate
    pub fn sx(self, qubit: QubitId) -> Self {
        self.gate(Gate::Sx(qubit))
    }

    // ========================================================================
    // Single-Qubit Parameterized Gates
    // ========================================================================

    /// Add Rx rotation
    /// Gantree: rx(self, q, a) -> Self // Rx 추가
    pub fn rx(self, qubit: QubitId, angle: impl Into<ParamValue>) -> Self {
        self.gate(Gate::Rx(qubit, angle.into()))
    }

    /// Add Ry rotation
    /// Gantree: ry(self, q, a) -> Self // Ry 추가
    pub fn ry(self, qubit: QubitId, angle: impl Into<ParamValue>) -> Self {
        self.gate(Gate::Ry(qubit, angle.into()))
    }

    /// Add Rz rotation
    /// Gantree: rz(self, q, a) -> Self // Rz 추가
    pub fn rz(self, qubit: QubitId, angle: impl Into<ParamValue>) -> Self {
        self.gate(Gate::Rz(qubit, angle.into()))
    }

    /// Add phase gate
    pub fn p(self, qubit: QubitId, lambda: impl Into<ParamValue>) -> Self {
        self.gate(Gate::P(qubit, lambda.into()))
    }

    /// Add U gate (general single-qubit)
    pub fn u(
        self,
        qubit: QubitId,
        theta: impl Into<ParamValue>,
        phi: impl Into<ParamValue>,
        lambda: impl Into<ParamValue>,
    ) -> Self {
        self.gate(Gate::U(qubit, theta.into(), phi.into(), lambda.into()))
    }

    // ========================================================================
    // Multi-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    /// Gantree: cnot(self, c, t) -> Self // CNOT 추가
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.gate(Gate::Cnot(control, target))
    }

    /// Alias for cnot
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    /// Add CZ gate
    pub fn cz(self, control: QubitId, target: QubitId) -> Self {
        self.gate(Gate::Cz(control, target))
    }

    /// Add SWAP gate
    pub fn swap(self, qubit1: QubitId, qubit2: QubitId) -> Self {
        self.gate(Gate::Swap(qubit1, qubit2))
    }

    /// Add Toffoli (CCX) gate
    pub fn ccx(self, c1: QubitId, c2: QubitId, target: QubitId) -> Self {
        self.gate(Gate::Ccx(c1, c2, target))
    }

    // ========================================================================
    // Measurement and Control
    // ========================================================================

    /// Add barrier on all qubits
    /// Gantree: barrier(self) -> Self // 배리어
    pub fn barrier(self) -> Self {
        let qubits: Vec<QubitId> = (0..self.circuit.num_qubits()).collect();
        self.gate(Gate::Barrier(qubits))
    }

    /// Measure `qubit` into an existing classical bit
    pub fn measure(self, qubit: QubitId, clbit: ClbitId) -> Self {
        self.gate(Gate::Measure(qubit, clbit))
    }

    /// Measure every qubit into a new `meas` register
    /// Gantree: measure_all(self) -> Self // 전체 측정
    pub fn measure_all(mut self) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.measure_all() {
                self.error = Some(e);
            }
        }
        self
    }

    // ========================================================================
    // Layer Operations
    // ========================================================================

    /// Apply `make(qubit, value)` to every qubit, one value per qubit
    ///
    /// `values` must hold exactly one entry per qubit, otherwise the builder
    /// records `ParameterCountMismatch` and adds nothing.
    /// Gantree: rotation_layer(self, f, values) -> Self // 회전 레이어
    pub fn rotation_layer<F, V>(mut self, make: F, values: impl IntoIterator<Item = V>) -> Self
    where
        F: Fn(QubitId, ParamValue) -> Gate,
        V: Into<ParamValue>,
    {
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        let n = self.circuit.num_qubits();
        if values.len() != n {
            self.error.get_or_insert(QbenchError::ParameterCountMismatch {
                expected: n,
                got: values.len(),
            });
            return self;
        }
        for (q, value) in values.into_iter().enumerate() {
            self = self.gate(make(q, value));
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the circuit, returning the first gate error if any
    /// Gantree: build(self) -> Result<Circuit> // 빌드
    pub fn build(self) -> QbenchResult<Circuit> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.circuit),
        }
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================
