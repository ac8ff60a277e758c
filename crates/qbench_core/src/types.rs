//! Core types for QBench
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Fundamental type aliases and the classical register descriptor
//! shared by circuits and ansatz templates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Classical bit identifier (0-indexed, global across registers)
pub type ClbitId = usize;

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Parameter vector for variational circuits
/// Gantree: ParamVec // pub type ParamVec = Vec<f64>
pub type ParamVec = Vec<Angle>;

// ============================================================================
// Classical Register
// ============================================================================

/// Named classical register
/// Gantree: ClassicalRegister // 고전 레지스터
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalRegister {
    name: String,
    size: usize,
}

impl ClassicalRegister {
    /// Create a register
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Register name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bits
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for ClassicalRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.size)
    }
}
