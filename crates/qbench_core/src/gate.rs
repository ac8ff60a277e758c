//! Quantum gate definitions for QBench
//!
//! Gantree: L1_Circuit → Gate
//!
//! Standard gate enum. Rotation gates carry a [`ParamValue`] so the same
//! type describes both ansatz templates and bound circuits.

use crate::error::{QbenchError, QbenchResult};
use crate::parameter::{ParamValue, Parameter};
use crate::types::{Angle, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Quantum gate enumeration
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    /// Gantree: H(QubitId) // 하다마드
    H(QubitId),

    /// Pauli-X gate (NOT)
    X(QubitId),

    /// Pauli-Y gate
    Y(QubitId),

    /// Pauli-Z gate
    Z(QubitId),

    /// S gate (sqrt(Z))
    S(QubitId),

    /// S-dagger gate
    Sdg(QubitId),

    /// T gate (fourth root of Z)
    T(QubitId),

    /// T-dagger gate
    Tdg(QubitId),

    /// SX gate (sqrt(X))
    Sx(QubitId),

    /// SX-dagger gate
    Sxdg(QubitId),

    /// Identity gate
    Id(QubitId),

    // ========================================================================
    // Single-Qubit Parameterized Rotation Gates
    // ========================================================================
    /// Rotation around X-axis
    /// Gantree: Rx(QubitId, ParamValue) // X 회전
    Rx(QubitId, ParamValue),

    /// Rotation around Y-axis
    /// Gantree: Ry(QubitId, ParamValue) // Y 회전
    Ry(QubitId, ParamValue),

    /// Rotation around Z-axis
    /// Gantree: Rz(QubitId, ParamValue) // Z 회전
    Rz(QubitId, ParamValue),

    /// Phase gate P(λ) = diag(1, e^{iλ})
    P(QubitId, ParamValue),

    /// General single-qubit rotation U(θ, φ, λ)
    U(QubitId, ParamValue, ParamValue, ParamValue),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (CX)
    /// Gantree: CNOT(QubitId, QubitId) // ctrl, tgt
    Cnot(QubitId, QubitId),

    /// Controlled-Z
    Cz(QubitId, QubitId),

    /// Controlled-Y
    Cy(QubitId, QubitId),

    /// SWAP gate
    Swap(QubitId, QubitId),

    /// Controlled-Rx
    Crx(QubitId, QubitId, ParamValue),

    /// Controlled-Ry
    Cry(QubitId, QubitId, ParamValue),

    /// Controlled-Rz
    Crz(QubitId, QubitId, ParamValue),

    // ========================================================================
    // Three-Qubit Gates
    // ========================================================================
    /// Toffoli (CCX)
    Ccx(QubitId, QubitId, QubitId),

    /// Controlled-SWAP (Fredkin)
    Cswap(QubitId, QubitId, QubitId),

    // ========================================================================
    // Measurement and Control
    // ========================================================================
    /// Measure a qubit into a classical bit
    /// Gantree: Measure(QubitId, ClbitId) // 측정
    Measure(QubitId, ClbitId),

    /// Barrier
    Barrier(Vec<QubitId>),

    /// Reset qubit to |0⟩
    Reset(QubitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::S(q)
            | Gate::Sdg(q)
            | Gate::T(q)
            | Gate::Tdg(q)
            | Gate::Sx(q)
            | Gate::Sxdg(q)
            | Gate::Id(q)
            | Gate::Rx(q, _)
            | Gate::Ry(q, _)
            | Gate::Rz(q, _)
            | Gate::P(q, _)
            | Gate::U(q, _, _, _)
            | Gate::Measure(q, _)
            | Gate::Reset(q) => vec![*q],

            Gate::Cnot(c, t)
            | Gate::Cz(c, t)
            | Gate::Cy(c, t)
            | Gate::Swap(c, t)
            | Gate::Crx(c, t, _)
            | Gate::Cry(c, t, _)
            | Gate::Crz(c, t, _) => vec![*c, *t],

            Gate::Ccx(c1, c2, t) | Gate::Cswap(c1, c2, t) => vec![*c1, *c2, *t],

            Gate::Barrier(qs) => qs.clone(),
        }
    }

    /// Classical bits written by this gate
    pub fn clbits(&self) -> Vec<ClbitId> {
        match self {
            Gate::Measure(_, c) => vec![*c],
            _ => vec![],
        }
    }

    /// Check if gate is single-qubit unitary
    /// Gantree: is_single_qubit(&self) -> bool // 1Q 판별
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H(_)
                | Gate::X(_)
                | Gate::Y(_)
                | Gate::Z(_)
                | Gate::S(_)
                | Gate::Sdg(_)
                | Gate::T(_)
                | Gate::Tdg(_)
                | Gate::Sx(_)
                | Gate::Sxdg(_)
                | Gate::Id(_)
                | Gate::Rx(_, _)
                | Gate::Ry(_, _)
                | Gate::Rz(_, _)
                | Gate::P(_, _)
                | Gate::U(_, _, _, _)
        )
    }

    /// Check if gate is two-qubit
    /// Gantree: is_two_qubit(&self) -> bool // 2Q 판별
    pub fn is_two_qubit(&self) -> bool {
        matches!(
            self,
            Gate::Cnot(_, _)
                | Gate::Cz(_, _)
                | Gate::Cy(_, _)
                | Gate::Swap(_, _)
                | Gate::Crx(_, _, _)
                | Gate::Cry(_, _, _)
                | Gate::Crz(_, _, _)
        )
    }

    /// Check if gate is three-qubit
    pub fn is_three_qubit(&self) -> bool {
        matches!(self, Gate::Ccx(_, _, _) | Gate::Cswap(_, _, _))
    }

    /// Check if gate takes angle arguments
    /// Gantree: is_parameterized(&self) -> bool // 파라미터 여부
    pub fn is_parameterized(&self) -> bool {
        !self.params().is_empty()
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_, _))
    }

    /// Check if gate is a barrier
    pub fn is_barrier(&self) -> bool {
        matches!(self, Gate::Barrier(_))
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::X(_) => "x",
            Gate::Y(_) => "y",
            Gate::Z(_) => "z",
            Gate::S(_) => "s",
            Gate::Sdg(_) => "sdg",
            Gate::T(_) => "t",
            Gate::Tdg(_) => "tdg",
            Gate::Sx(_) => "sx",
            Gate::Sxdg(_) => "sxdg",
            Gate::Id(_) => "id",
            Gate::Rx(_, _) => "rx",
            Gate::Ry(_, _) => "ry",
            Gate::Rz(_, _) => "rz",
            Gate::P(_, _) => "p",
            Gate::U(_, _, _, _) => "u",
            Gate::Cnot(_, _) => "cx",
            Gate::Cz(_, _) => "cz",
            Gate::Cy(_, _) => "cy",
            Gate::Swap(_, _) => "swap",
            Gate::Crx(_, _, _) => "crx",
            Gate::Cry(_, _, _) => "cry",
            Gate::Crz(_, _, _) => "crz",
            Gate::Ccx(_, _, _) => "ccx",
            Gate::Cswap(_, _, _) => "cswap",
            Gate::Measure(_, _) => "measure",
            Gate::Barrier(_) => "barrier",
            Gate::Reset(_) => "reset",
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Angle arguments in declaration order
    pub fn params(&self) -> Vec<&ParamValue> {
        match self {
            Gate::Rx(_, a)
            | Gate::Ry(_, a)
            | Gate::Rz(_, a)
            | Gate::P(_, a)
            | Gate::Crx(_, _, a)
            | Gate::Cry(_, _, a)
            | Gate::Crz(_, _, a) => vec![a],
            Gate::U(_, theta, phi, lambda) => vec![theta, phi, lambda],
            _ => vec![],
        }
    }

    /// Free parameters referenced by this gate
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.params()
            .into_iter()
            .filter_map(ParamValue::parameter)
            .collect()
    }

    /// Bound angle values of this gate
    pub fn angles(&self) -> Vec<Angle> {
        self.params()
            .into_iter()
            .filter_map(ParamValue::value)
            .collect()
    }

    /// Rebuild the gate with every angle argument passed through `f`
    fn map_params<F>(&self, mut f: F) -> Gate
    where
        F: FnMut(&ParamValue) -> ParamValue,
    {
        match self {
            Gate::Rx(q, a) => Gate::Rx(*q, f(a)),
            Gate::Ry(q, a) => Gate::Ry(*q, f(a)),
            Gate::Rz(q, a) => Gate::Rz(*q, f(a)),
            Gate::P(q, a) => Gate::P(*q, f(a)),
            Gate::U(q, theta, phi, lambda) => Gate::U(*q, f(theta), f(phi), f(lambda)),
            Gate::Crx(c, t, a) => Gate::Crx(*c, *t, f(a)),
            Gate::Cry(c, t, a) => Gate::Cry(*c, *t, f(a)),
            Gate::Crz(c, t, a) => Gate::Crz(*c, *t, f(a)),
            other => other.clone(),
        }
    }

    /// Fallible `map_params`; the first error from `f` is returned
    fn try_map_params<F>(&self, mut f: F) -> QbenchResult<Gate>
    where
        F: FnMut(&ParamValue) -> QbenchResult<ParamValue>,
    {
        let mut first_err = None;
        let gate = self.map_params(|p| match f(p) {
            Ok(value) => value,
            Err(e) => {
                first_err.get_or_insert(e);
                p.clone()
            }
        });
        match first_err {
            Some(e) => Err(e),
            None => Ok(gate),
        }
    }

    /// Substitute literal values for free parameters found in `values`
    ///
    /// Parameters missing from `values` stay free.
    /// Gantree: bind(&self, values) -> Gate // 파라미터 바인딩
    pub fn bind(&self, values: &HashMap<Parameter, Angle>) -> Gate {
        self.map_params(|p| p.bind(values))
    }

    // ========================================================================
    // Inversion
    // ========================================================================

    /// Get the inverse gate
    ///
    /// Rotations require bound angles. Measurement and reset have no inverse.
    /// Gantree: inverse(&self) -> Result<Gate> // 역게이트
    pub fn inverse(&self) -> QbenchResult<Gate> {
        match self {
            Gate::S(q) => Ok(Gate::Sdg(*q)),
            Gate::Sdg(q) => Ok(Gate::S(*q)),
            Gate::T(q) => Ok(Gate::Tdg(*q)),
            Gate::Tdg(q) => Ok(Gate::T(*q)),
            Gate::Sx(q) => Ok(Gate::Sxdg(*q)),
            Gate::Sxdg(q) => Ok(Gate::Sx(*q)),
            // U(θ, φ, λ)† = U(-θ, -λ, -φ)
            Gate::U(q, theta, phi, lambda) => {
                Ok(Gate::U(*q, theta.negate()?, lambda.negate()?, phi.negate()?))
            }
            Gate::Measure(_, _) | Gate::Reset(_) => {
                Err(QbenchError::NonInvertibleGate(self.name().to_string()))
            }
            g if g.is_parameterized() => g.try_map_params(ParamValue::negate),
            g => Ok(g.clone()),
        }
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to an OpenQASM 2.0 statement, labelling clbits with `clbit`
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm_with<F>(&self, clbit: F) -> QbenchResult<String>
    where
        F: Fn(ClbitId) -> String,
    {
        let args = self
            .params()
            .into_iter()
            .map(|p| p.require().map(|v| v.to_string()))
            .collect::<QbenchResult<Vec<_>>>()?;

        let line = match self {
            Gate::Measure(q, c) => format!("measure q[{}] -> {};", q, clbit(*c)),
            Gate::Barrier(qs) if qs.is_empty() => "barrier q;".to_string(),
            _ => {
                let qubits: Vec<String> = self.qubits().iter().map(|q| format!("q[{}]", q)).collect();
                if args.is_empty() {
                    format!("{} {};", self.name(), qubits.join(","))
                } else {
                    format!("{}({}) {};", self.name(), args.join(","), qubits.join(","))
                }
            }
        };

        Ok(line)
    }

    /// Convert to an OpenQASM 2.0 statement with a single `c` register
    pub fn to_qasm(&self) -> QbenchResult<String> {
        self.to_qasm_with(|c| format!("c[{}]", c))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params();
        write!(f, "{}", self.name())?;
        if !params.is_empty() {
            let args: Vec<String> = params.iter().map(|p| p.to_string()).collect();
            write!(f, "({})", args.join(","))?;
        }
        let qubits: Vec<String> = self.qubits().iter().map(|q| format!("q[{}]", q)).collect();
        write!(f, " {}", qubits.join(","))?;
        if let Gate::Measure(_, c) = self {
            write!(f, " -> c[{}]", c)?;
        }
        Ok(())
    }
}

// ============================================================================
// Entangler Type
// ============================================================================

/// Two-qubit entangling gate used by ansatz templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntanglerType {
    /// CNOT (CX) gates
    #[default]
    Cx,
    /// CZ gates
    Cz,
}

impl EntanglerType {
    /// Create gate for given qubit pair
    pub fn gate(&self, control: QubitId, target: QubitId) -> Gate {
        match self {
            EntanglerType::Cx => Gate::Cnot(control, target),
            EntanglerType::Cz => Gate::Cz(control, target),
        }
    }

    /// Number of qubits the entangler acts on
    pub fn block_size(&self) -> usize {
        2
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cx" | "cnot" => Some(EntanglerType::Cx),
            "cz" => Some(EntanglerType::Cz),
            _ => None,
        }
    }
}

impl fmt::Display for EntanglerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntanglerType::Cx => write!(f, "cx"),
            EntanglerType::Cz => write!(f, "cz"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
