//! Hardware-efficient VQE ansätze
//!
//! Gantree: L2_Library → Ansatz
//!
//! Two fixed n-local families with CX entanglers:
//!
//! - `RealAmplitudes`: Ry rotations, real-valued amplitudes only
//! - `EfficientSU2`: Ry then Rz rotations on every qubit

use crate::entanglement::Entanglement;
use crate::n_local::{NLocal, RotationGate};
use qbench_core::{Circuit, EntanglerType, QbenchError, QbenchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ansatz family
/// Gantree: AnsatzKind // 안사츠 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsatzKind {
    /// Ry layers + CX entanglement
    RealAmplitudes,
    /// Ry/Rz layers + CX entanglement
    EfficientSu2,
}

impl AnsatzKind {
    /// Every supported family
    pub const ALL: [AnsatzKind; 2] = [AnsatzKind::RealAmplitudes, AnsatzKind::EfficientSu2];

    /// Template name given to built circuits
    pub fn template_name(&self) -> &'static str {
        match self {
            AnsatzKind::RealAmplitudes => "RealAmplitudes",
            AnsatzKind::EfficientSu2 => "EfficientSU2",
        }
    }

    /// Rotation blocks of one rotation layer
    pub fn rotation_blocks(&self) -> Vec<RotationGate> {
        match self {
            AnsatzKind::RealAmplitudes => vec![RotationGate::Ry],
            AnsatzKind::EfficientSu2 => vec![RotationGate::Ry, RotationGate::Rz],
        }
    }

    /// Entangling gate
    pub fn entangler(&self) -> EntanglerType {
        EntanglerType::Cx
    }

    /// N-local description with default settings
    /// Gantree: n_local(n) -> NLocal // 템플릿 설명
    pub fn n_local(&self, num_qubits: usize) -> NLocal {
        NLocal::new(num_qubits, self.rotation_blocks(), self.entangler())
            .with_name(self.template_name())
    }

    /// Build the parameterized template
    /// Gantree: template(n, ent, reps) -> Result<Circuit> // 템플릿 생성
    pub fn template(
        &self,
        num_qubits: usize,
        entanglement: &Entanglement,
        reps: usize,
    ) -> QbenchResult<Circuit> {
        self.n_local(num_qubits)
            .with_entanglement(entanglement.clone())
            .with_reps(reps)
            .build()
    }

    /// Parameter count of the template
    pub fn num_parameters(&self, num_qubits: usize, reps: usize) -> usize {
        self.n_local(num_qubits).with_reps(reps).num_parameters()
    }
}

impl FromStr for AnsatzKind {
    type Err = QbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real_amplitudes" | "realamplitudes" => Ok(AnsatzKind::RealAmplitudes),
            "efficient_su2" | "efficientsu2" => Ok(AnsatzKind::EfficientSu2),
            other => Err(QbenchError::InvalidConfig(format!(
                "unknown ansatz '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AnsatzKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template_name())
    }
}

/// RealAmplitudes template
pub fn real_amplitudes(
    num_qubits: usize,
    entanglement: &Entanglement,
    reps: usize,
) -> QbenchResult<Circuit> {
    AnsatzKind::RealAmplitudes.template(num_qubits, entanglement, reps)
}

/// EfficientSU2 template
pub fn efficient_su2(
    num_qubits: usize,
    entanglement: &Entanglement,
    reps: usize,
) -> QbenchResult<Circuit> {
    AnsatzKind::EfficientSu2.template(num_qubits, entanglement, reps)
}
