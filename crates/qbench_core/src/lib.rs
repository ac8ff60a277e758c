//! # QBench Core
//!
//! Circuit IR for the QBench benchmark generators: gates, symbolic
//! parameters, classical registers, and a fluent builder.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qbench_core // L0+L1: Foundation + Circuit (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Constants // 재현성 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Circuit // 회로 구조 (완료)
//!         Parameter // 심볼릭 파라미터 (완료)
//!         Gate // 게이트 enum (완료)
//!         Circuit // 회로 구조체 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qbench_core::prelude::*;
//!
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .cnot(1, 2)
//!     .measure_all()
//!     .build()
//!     .unwrap();
//!
//! println!("{}", circuit);
//! println!("{}", circuit.to_qasm().unwrap());
//! ```
//!
//! ## Templates and Binding
//!
//! ```rust
//! use qbench_core::prelude::*;
//!
//! let theta = ParameterVector::new("θ", 2);
//! let template = CircuitBuilder::new(2)
//!     .rotation_layer(Gate::Ry, theta.iter())
//!     .cx(0, 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(template.num_parameters(), 2);
//!
//! let bound = template.assign_parameters(&[0.5, 1.5]).unwrap();
//! assert!(bound.is_bound());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Symbolic parameters (Gantree: L1_Circuit → Parameter)
pub mod parameter;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{bench, math};
pub use error::{QbenchError, QbenchResult};
pub use gate::{EntanglerType, Gate};
pub use parameter::{ParamValue, Parameter, ParameterVector};
pub use types::{Angle, ClassicalRegister, ClbitId, ParamVec, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qbench_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{bench, math};
    pub use crate::error::{QbenchError, QbenchResult};
    pub use crate::gate::{EntanglerType, Gate};
    pub use crate::parameter::{ParamValue, Parameter, ParameterVector};
    pub use crate::types::{Angle, ClassicalRegister, ClbitId, ParamVec, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
