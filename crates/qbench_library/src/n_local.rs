//! N-local circuit templates
//!
//! Gantree: L2_Library → NLocal
//!
//! Alternates rotation layers and entanglement layers:
//!
//! ```text
//! [rot]─[ent(0)]─[rot]─[ent(1)]─ ... ─[ent(reps-1)]─[rot]
//! ```
//!
//! Each rotation layer applies every rotation block to every qubit, block
//! by block. Parameters are numbered in that order, so the template for
//! `n` qubits and `b` blocks carries `n * b * (reps + 1)` parameters.

use crate::entanglement::Entanglement;
use qbench_core::{
    bench, CircuitBuilder, Circuit, EntanglerType, Gate, ParamValue, Parameter, ParameterVector,
    QbenchError, QbenchResult, QubitId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Rotation Blocks
// ============================================================================

/// Single-qubit rotation used in rotation layers
/// Gantree: RotationGate // 회전 게이트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationGate {
    /// X-axis rotation
    Rx,
    /// Y-axis rotation
    Ry,
    /// Z-axis rotation
    Rz,
    /// Phase gate
    P,
}

impl RotationGate {
    /// Create the gate on `qubit`
    pub fn gate(&self, qubit: QubitId, value: ParamValue) -> Gate {
        match self {
            RotationGate::Rx => Gate::Rx(qubit, value),
            RotationGate::Ry => Gate::Ry(qubit, value),
            RotationGate::Rz => Gate::Rz(qubit, value),
            RotationGate::P => Gate::P(qubit, value),
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rx" => Some(RotationGate::Rx),
            "ry" => Some(RotationGate::Ry),
            "rz" => Some(RotationGate::Rz),
            "p" => Some(RotationGate::P),
            _ => None,
        }
    }
}

impl fmt::Display for RotationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationGate::Rx => write!(f, "rx"),
            RotationGate::Ry => write!(f, "ry"),
            RotationGate::Rz => write!(f, "rz"),
            RotationGate::P => write!(f, "p"),
        }
    }
}

// ============================================================================
// NLocal
// ============================================================================

/// N-local template description
/// Gantree: NLocal // n-local 템플릿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NLocal {
    num_qubits: usize,
    rotation_blocks: Vec<RotationGate>,
    entangler: EntanglerType,
    entanglement: Entanglement,
    reps: usize,
    skip_final_rotation_layer: bool,
    insert_barriers: bool,
    parameter_prefix: String,
    name: String,
}

impl NLocal {
    /// Create a template with full entanglement and the default depth
    /// Gantree: new(n, blocks, ent) -> Self // 생성자
    pub fn new(num_qubits: usize, rotation_blocks: Vec<RotationGate>, entangler: EntanglerType) -> Self {
        Self {
            num_qubits,
            rotation_blocks,
            entangler,
            entanglement: Entanglement::Full,
            reps: bench::DEFAULT_REPS,
            skip_final_rotation_layer: false,
            insert_barriers: false,
            parameter_prefix: bench::PARAMETER_PREFIX.to_string(),
            name: "NLocal".to_string(),
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set entanglement strategy
    pub fn with_entanglement(mut self, entanglement: Entanglement) -> Self {
        self.entanglement = entanglement;
        self
    }

    /// Set number of repetitions
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Drop the trailing rotation layer
    pub fn with_skip_final_rotation_layer(mut self, skip: bool) -> Self {
        self.skip_final_rotation_layer = skip;
        self
    }

    /// Insert barriers between layers
    pub fn with_insert_barriers(mut self, insert: bool) -> Self {
        self.insert_barriers = insert;
        self
    }

    /// Set parameter vector name
    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }

    /// Set template name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Rotation blocks
    pub fn rotation_blocks(&self) -> &[RotationGate] {
        &self.rotation_blocks
    }

    /// Entangling gate
    pub fn entangler(&self) -> EntanglerType {
        self.entangler
    }

    /// Entanglement strategy
    pub fn entanglement(&self) -> &Entanglement {
        &self.entanglement
    }

    /// Number of repetitions
    pub fn reps(&self) -> usize {
        self.reps
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rotation layers
    pub fn num_rotation_layers(&self) -> usize {
        self.reps + usize::from(!self.skip_final_rotation_layer)
    }

    /// Number of free parameters in the built template
    /// Gantree: num_parameters() -> usize // 파라미터 수
    pub fn num_parameters(&self) -> usize {
        self.num_qubits * self.rotation_blocks.len() * self.num_rotation_layers()
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the parameterized template
    /// Gantree: build() -> Result<Circuit> // 템플릿 생성
    pub fn build(&self) -> QbenchResult<Circuit> {
        if self.num_qubits == 0 {
            return Err(QbenchError::InvalidQubitCount(0));
        }

        let theta = ParameterVector::new(self.parameter_prefix.clone(), self.num_parameters());
        let params: Vec<Parameter> = theta.iter().collect();
        let mut chunks = params.chunks(self.num_qubits);

        let block_size = self.entangler.block_size();
        let entangles = self.num_qubits >= block_size;

        let mut builder = CircuitBuilder::with_name(self.num_qubits, self.name.clone());
        let mut layers = 0usize;

        for rep in 0..self.reps {
            builder = self.separate(builder, layers);
            builder = self.rotation_layer(builder, &mut chunks);
            layers += 1;

            if entangles {
                let map = self.entanglement.entangler_map(self.num_qubits, block_size, rep)?;
                builder = self.separate(builder, layers);
                for block in map {
                    builder = builder.gate(self.entangler.gate(block[0], block[1]));
                }
                layers += 1;
            }
        }

        if !self.skip_final_rotation_layer {
            builder = self.separate(builder, layers);
            builder = self.rotation_layer(builder, &mut chunks);
        }

        let circuit = builder.build()?;
        debug_assert_eq!(circuit.num_parameters(), self.num_parameters());

        log::debug!(
            "Built {} template: {} qubits, {} reps, {} entanglement, {} parameters",
            self.name,
            self.num_qubits,
            self.reps,
            self.entanglement,
            self.num_parameters()
        );

        Ok(circuit)
    }

    /// One rotation layer: every block over every qubit
    fn rotation_layer<'a>(
        &self,
        mut builder: CircuitBuilder,
        chunks: &mut impl Iterator<Item = &'a [Parameter]>,
    ) -> CircuitBuilder {
        for block in &self.rotation_blocks {
            if let Some(chunk) = chunks.next() {
                builder = builder.rotation_layer(|q, v| block.gate(q, v), chunk);
            }
        }
        builder
    }

    fn separate(&self, builder: CircuitBuilder, layers: usize) -> CircuitBuilder {
        if self.insert_barriers && layers > 0 {
            builder.barrier()
        } else {
            builder
        }
    }
}

impl fmt::Display for NLocal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self.rotation_blocks.iter().map(|b| b.to_string()).collect();
        write!(
            f,
            "{}(n={}, rotation=[{}], entangler={}, entanglement={}, reps={})",
            self.name,
            self.num_qubits,
            blocks.join(", "),
            self.entangler,
            self.entanglement,
            self.reps
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
