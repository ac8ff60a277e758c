//! Quantum circuit structure for QBench
//!
//! Gantree: L1_Circuit → Circuit
//!
//! The circuit owns its qubit count, classical registers, and gate list.
//! The same struct serves as ansatz template (free parameters) and as the
//! finalized benchmark circuit (bound, measured, named).

use crate::constants::bench::{INVERSE_SUFFIX, MEASURE_REGISTER};
use crate::error::{QbenchError, QbenchResult};
use crate::gate::Gate;
use crate::parameter::Parameter;
use crate::types::{Angle, ClassicalRegister, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Classical registers in declaration order
    registers: Vec<ClassicalRegister>,

    /// Gate sequence
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            registers: Vec::new(),
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        let mut circuit = Self::new(num_qubits);
        circuit.name = Some(name.into());
        circuit
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> QbenchResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> QbenchResult<()> {
        let mut seen = BTreeSet::new();
        for qubit in gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(QbenchError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if !seen.insert(qubit) {
                return Err(QbenchError::DuplicateQubit {
                    gate: gate.name().to_string(),
                    qubit,
                });
            }
        }
        let num_clbits = self.num_clbits();
        for clbit in gate.clbits() {
            if clbit >= num_clbits {
                return Err(QbenchError::GateClbitMismatch { clbit, num_clbits });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> QbenchResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Append a classical register, returning the global index of its first bit
    pub fn add_register(&mut self, name: impl Into<String>, size: usize) -> QbenchResult<ClbitId> {
        let name = name.into();
        if self.registers.iter().any(|r| r.name() == name) {
            return Err(QbenchError::DuplicateRegister(name));
        }
        let offset = self.num_clbits();
        self.registers.push(ClassicalRegister::new(name, size));
        Ok(offset)
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get number of classical bits across all registers
    pub fn num_clbits(&self) -> usize {
        self.registers.iter().map(ClassicalRegister::size).sum()
    }

    /// Get classical registers
    pub fn registers(&self) -> &[ClassicalRegister] {
        &self.registers
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path over qubit and clbit wires)
    ///
    /// Barriers do not contribute.
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];
        let mut clbit_depths = vec![0usize; self.num_clbits()];

        for gate in self.gates.iter().filter(|g| !g.is_barrier()) {
            let qubits = gate.qubits();
            let clbits = gate.clbits();

            let level = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .chain(clbits.iter().filter_map(|&c| clbit_depths.get(c)))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;

            for q in qubits {
                if let Some(d) = qubit_depths.get_mut(q) {
                    *d = level;
                }
            }
            for c in clbits {
                if let Some(d) = clbit_depths.get_mut(c) {
                    *d = level;
                }
            }
        }

        qubit_depths
            .into_iter()
            .chain(clbit_depths)
            .max()
            .unwrap_or(0)
    }

    /// Get total gate count (barriers included)
    /// Gantree: gate_count(&self) -> usize // 게이트 수
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of operations excluding barriers
    pub fn size(&self) -> usize {
        self.gates.iter().filter(|g| !g.is_barrier()).count()
    }

    /// Count single-qubit gates
    /// Gantree: count_1q(&self) -> usize // 1Q 수
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    /// Gantree: count_2q(&self) -> usize // 2Q 수
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count three-qubit gates
    pub fn count_3q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_three_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.gates.iter().filter(|g| g.is_measurement()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates.iter().filter(|g| g.is_parameterized()).count()
    }

    /// Operation counts keyed by gate name
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Qubits targeted by measurements, in gate order
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        self.gates
            .iter()
            .filter_map(|g| match g {
                Gate::Measure(q, _) => Some(*q),
                _ => None,
            })
            .collect()
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Free parameters in native (sorted) order
    /// Gantree: parameters(&self) -> Vec<Parameter> // 프리 파라미터
    pub fn parameters(&self) -> Vec<Parameter> {
        let set: BTreeSet<&Parameter> = self.gates.iter().flat_map(|g| g.parameters()).collect();
        set.into_iter().cloned().collect()
    }

    /// Number of distinct free parameters
    pub fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Check if no free parameters remain
    pub fn is_bound(&self) -> bool {
        self.gates.iter().all(|g| g.parameters().is_empty())
    }

    /// Bind `values` to the free parameters in native order
    ///
    /// Returns a new circuit; the template is left untouched.
    /// Gantree: assign_parameters(&self, values) -> Result<Circuit> // 바인딩
    pub fn assign_parameters(&self, values: &[Angle]) -> QbenchResult<Circuit> {
        let params = self.parameters();
        if params.len() != values.len() {
            return Err(QbenchError::ParameterCountMismatch {
                expected: params.len(),
                got: values.len(),
            });
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(QbenchError::InvalidAngle(bad));
        }

        let lookup: HashMap<Parameter, Angle> =
            params.into_iter().zip(values.iter().copied()).collect();

        log::debug!(
            "Binding {} parameters on circuit {:?}",
            lookup.len(),
            self.name
        );

        Ok(Circuit {
            num_qubits: self.num_qubits,
            registers: self.registers.clone(),
            gates: self.gates.iter().map(|g| g.bind(&lookup)).collect(),
            name: self.name.clone(),
        })
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Measure every qubit into a new `meas` register
    ///
    /// A barrier over all qubits precedes the measurements and qubit `i`
    /// is measured into bit `i` of the new register.
    ///
    /// Calling it on a circuit that already has a `meas` register fails with
    /// `DuplicateRegister` and leaves the circuit unchanged. No second,
    /// renamed register is created.
    /// Gantree: measure_all(&mut) -> Result // 전체 측정
    pub fn measure_all(&mut self) -> QbenchResult<()> {
        let offset = self.add_register(MEASURE_REGISTER, self.num_qubits)?;
        self.add_gate(Gate::Barrier((0..self.num_qubits).collect()))?;
        for q in 0..self.num_qubits {
            self.add_gate(Gate::Measure(q, offset + q))?;
        }
        Ok(())
    }

    /// Separate measurements from the rest of the circuit
    ///
    /// The returned circuit keeps every register and every non-measurement
    /// gate in order.
    pub fn split_measurements(&self) -> (Circuit, Vec<Gate>) {
        let (measurements, rest): (Vec<Gate>, Vec<Gate>) =
            self.gates.iter().cloned().partition(Gate::is_measurement);

        let circuit = Circuit {
            num_qubits: self.num_qubits,
            registers: self.registers.clone(),
            gates: rest,
            name: self.name.clone(),
        };
        (circuit, measurements)
    }

    // ========================================================================
    // Composition
    // ========================================================================

    /// Inverse circuit (reversed gate order, each gate inverted)
    /// Gantree: inverse(&self) -> Result<Circuit> // 역회로
    pub fn inverse(&self) -> QbenchResult<Circuit> {
        let gates = self
            .gates
            .iter()
            .rev()
            .map(Gate::inverse)
            .collect::<QbenchResult<Vec<_>>>()?;

        Ok(Circuit {
            num_qubits: self.num_qubits,
            registers: self.registers.clone(),
            gates,
            name: self.name.as_ref().map(|n| format!("{}{}", n, INVERSE_SUFFIX)),
        })
    }

    /// Append the gates of `other` to this circuit
    pub fn compose(&mut self, other: &Circuit) -> QbenchResult<()> {
        if other.num_qubits > self.num_qubits {
            return Err(QbenchError::ComposeMismatch {
                this: self.num_qubits,
                other: other.num_qubits,
            });
        }
        self.add_gates(other.gates.iter().cloned())
    }

    /// Add a barrier over all qubits
    pub fn barrier(&mut self) -> QbenchResult<()> {
        self.add_gate(Gate::Barrier((0..self.num_qubits).collect()))
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Register name and local index of a global clbit
    fn clbit_label(&self, clbit: ClbitId) -> String {
        let mut offset = 0;
        for reg in &self.registers {
            if clbit < offset + reg.size() {
                return format!("{}[{}]", reg.name(), clbit - offset);
            }
            offset += reg.size();
        }
        format!("c[{}]", clbit)
    }

    /// Convert to OpenQASM 2.0 string
    ///
    /// Fails with `UnboundParameter` on templates.
    /// Gantree: to_qasm(&self) -> Result<String> // QASM2 출력
    pub fn to_qasm(&self) -> QbenchResult<String> {
        let mut lines = vec![
            "OPENQASM 2.0;".to_string(),
            "include \"qelib1.inc\";".to_string(),
            format!("qreg q[{}];", self.num_qubits),
        ];

        for reg in &self.registers {
            lines.push(format!("creg {}[{}];", reg.name(), reg.size()));
        }

        for gate in &self.gates {
            lines.push(gate.to_qasm_with(|c| self.clbit_label(c))?);
        }

        let mut qasm = lines.join("\n");
        qasm.push('\n');
        Ok(qasm)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit '{}' ({} qubits, {} clbits, {} gates)",
            self.name.as_deref().unwrap_or("circuit"),
            self.num_qubits,
            self.num_clbits(),
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        writeln!(f, "  Free parameters: {}", self.num_parameters())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParamValue;

    fn theta(i: usize) -> ParamValue {
        ParamValue::Free(Parameter::new("θ", i))
    }

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::new(5);
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 0);
        assert!(circuit.is_empty());
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = Circuit::new(3);
        assert!(circuit.add_gate(Gate::H(0)).is_ok());
        assert!(matches!(
            circuit.add_gate(Gate::H(5)),
            Err(QbenchError::GateQubitMismatch { qubit: 5, num_qubits: 3 })
        ));
        assert!(matches!(
            circuit.add_gate(Gate::Measure(0, 0)),
            Err(QbenchError::GateClbitMismatch { clbit: 0, num_clbits: 0 })
        ));
    }

    #[test]
    fn test_add_gate_duplicate_qubits() {
        for gate in [
            Gate::Cnot(1, 1),
            Gate::Swap(0, 0),
            Gate::Ccx(0, 0, 1),
            Gate::Barrier(vec![0, 1, 0]),
        ] {
            let mut circuit = Circuit::new(2);
            assert!(matches!(
                circuit.add_gate(gate),
                Err(QbenchError::DuplicateQubit { .. })
            ));
            assert!(circuit.is_empty());
        }

        let err = Circuit::from_gates(2, vec![Gate::H(0), Gate::Cnot(1, 1)]).unwrap_err();
        assert_eq!(
            err,
            QbenchError::DuplicateQubit {
                gate: "cx".into(),
                qubit: 1
            }
        );
        assert!(err.is_circuit_error());

        let built = crate::builder::CircuitBuilder::new(2).h(0).cx(1, 1).build();
        assert!(matches!(built, Err(QbenchError::DuplicateQubit { qubit: 1, .. })));
    }

    #[test]
    fn test_circuit_depth_ignores_barriers() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::H(1)).unwrap();
        circuit.barrier().unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();
        circuit.add_gate(Gate::H(2)).unwrap();

        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.size(), 4);
        assert_eq!(circuit.gate_count(), 5);
    }

    #[test]
    fn test_parameters_sorted_and_deduplicated() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::Ry(0, theta(11))).unwrap();
        circuit.add_gate(Gate::Ry(1, theta(2))).unwrap();
        circuit.add_gate(Gate::Rz(1, theta(2))).unwrap();

        let params = circuit.parameters();
        assert_eq!(params, vec![Parameter::new("θ", 2), Parameter::new("θ", 11)]);
        assert_eq!(circuit.num_parameters(), 2);
        assert!(!circuit.is_bound());
    }

    #[test]
    fn test_assign_parameters() {
        let mut template = Circuit::with_name(2, "t");
        template.add_gate(Gate::Ry(0, theta(0))).unwrap();
        template.add_gate(Gate::Ry(1, theta(1))).unwrap();
        template.add_gate(Gate::Cnot(0, 1)).unwrap();

        let bound = template.assign_parameters(&[0.25, 0.75]).unwrap();
        assert!(bound.is_bound());
        assert_eq!(bound.gates()[0], Gate::Ry(0, 0.25.into()));
        assert_eq!(bound.gates()[1], Gate::Ry(1, 0.75.into()));
        assert_eq!(bound.name(), Some("t"));

        // template untouched
        assert_eq!(template.num_parameters(), 2);
    }

    #[test]
    fn test_assign_parameters_count_mismatch() {
        let mut template = Circuit::new(1);
        template.add_gate(Gate::Ry(0, theta(0))).unwrap();

        assert_eq!(
            template.assign_parameters(&[]).unwrap_err(),
            QbenchError::ParameterCountMismatch { expected: 1, got: 0 }
        );
        assert!(matches!(
            template.assign_parameters(&[f64::NAN]),
            Err(QbenchError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_measure_all() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.measure_all().unwrap();

        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.registers()[0].name(), "meas");
        assert_eq!(circuit.count_measurements(), 3);
        assert_eq!(circuit.measured_qubits(), vec![0, 1, 2]);
        assert!(circuit.gates()[1].is_barrier());
        assert_eq!(circuit.gates()[4], Gate::Measure(2, 2));

        // A second `meas` register is rejected
        let before = circuit.clone();
        assert_eq!(
            circuit.measure_all().unwrap_err(),
            QbenchError::DuplicateRegister("meas".into())
        );
        assert_eq!(circuit, before);
        assert_eq!(circuit.registers().len(), 1);
    }

    #[test]
    fn test_measure_all_after_existing_register() {
        let mut circuit = Circuit::new(2);
        circuit.add_register("c", 2).unwrap();
        circuit.measure_all().unwrap();

        assert_eq!(circuit.num_clbits(), 4);
        assert_eq!(circuit.gates()[1], Gate::Measure(0, 2));
        assert!(circuit.to_qasm().unwrap().contains("measure q[1] -> meas[1];"));
    }

    #[test]
    fn test_inverse_and_compose() {
        let mut circuit = Circuit::with_name(2, "bell");
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::S(1)).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();

        let inv = circuit.inverse().unwrap();
        assert_eq!(inv.name(), Some("bell_dg"));
        assert_eq!(
            inv.gates(),
            &[Gate::Cnot(0, 1), Gate::Sdg(1), Gate::H(0)]
        );

        circuit.compose(&inv).unwrap();
        assert_eq!(circuit.gate_count(), 6);

        let wide = Circuit::new(3);
        assert!(matches!(
            circuit.compose(&wide),
            Err(QbenchError::ComposeMismatch { this: 2, other: 3 })
        ));
    }

    #[test]
    fn test_inverse_negates_rotations() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::Ry(0, 0.3.into())).unwrap();
        circuit.add_gate(Gate::Rz(1, 1.7.into())).unwrap();

        let inv = circuit.inverse().unwrap();
        let angles: Vec<f64> = inv.gates().iter().flat_map(|g| g.angles()).collect();
        approx::assert_relative_eq!(angles[0], -1.7);
        approx::assert_relative_eq!(angles[1], -0.3);
    }

    #[test]
    fn test_split_measurements() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.measure_all().unwrap();

        let (unitary, measurements) = circuit.split_measurements();
        assert_eq!(measurements.len(), 2);
        assert_eq!(unitary.count_measurements(), 0);
        assert_eq!(unitary.num_clbits(), 2);
        assert!(unitary.inverse().is_ok());
    }

    #[test]
    fn test_to_qasm() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();
        circuit.measure_all().unwrap();

        let qasm = circuit.to_qasm().unwrap();
        assert!(qasm.starts_with("OPENQASM 2.0;"));
        assert!(qasm.contains("qreg q[2];"));
        assert!(qasm.contains("creg meas[2];"));
        assert!(qasm.contains("cx q[0],q[1];"));
        assert!(qasm.contains("barrier q[0],q[1];"));
        assert!(qasm.contains("measure q[0] -> meas[0];"));
    }

    #[test]
    fn test_to_qasm_rejects_templates() {
        let mut circuit = Circuit::new(1);
        circuit.add_gate(Gate::Rx(0, theta(0))).unwrap();
        assert_eq!(
            circuit.to_qasm().unwrap_err(),
            QbenchError::UnboundParameter("θ[0]".into())
        );
    }

    #[test]
    fn test_count_ops() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::Ry(0, 0.1.into())).unwrap();
        circuit.add_gate(Gate::Ry(1, 0.2.into())).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();

        let ops = circuit.count_ops();
        assert_eq!(ops.get("ry"), Some(&2));
        assert_eq!(ops.get("cx"), Some(&1));
        assert_eq!(circuit.count_parameterized(), 2);
    }
}
