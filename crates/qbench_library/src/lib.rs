//! # QBench Library
//!
//! Parameterized circuit templates built on `qbench_core`.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qbench_library // L2: Template Library (완료)
//!     Entanglement // 얽힘 전략 (완료)
//!     NLocal // 회전/얽힘 교대 레이어 (완료)
//!     Ansatz // RealAmplitudes, EfficientSU2 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qbench_library::prelude::*;
//!
//! let template = real_amplitudes(4, &Entanglement::Full, 3).unwrap();
//! assert_eq!(template.num_parameters(), 16);
//!
//! let values = vec![0.5; template.num_parameters()];
//! let circuit = template.assign_parameters(&values).unwrap();
//! assert!(circuit.is_bound());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Entanglement strategies (Gantree: L2_Library → Entanglement)
pub mod entanglement;

/// N-local templates (Gantree: L2_Library → NLocal)
pub mod n_local;

/// VQE ansätze (Gantree: L2_Library → Ansatz)
pub mod ansatz;

// ============================================================================
// Re-exports
// ============================================================================

pub use ansatz::{efficient_su2, real_amplitudes, AnsatzKind};
pub use entanglement::Entanglement;
pub use n_local::{NLocal, RotationGate};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::ansatz::{efficient_su2, real_amplitudes, AnsatzKind};
    pub use crate::entanglement::Entanglement;
    pub use crate::n_local::{NLocal, RotationGate};
    pub use qbench_core::prelude::*;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_template_binds_in_parameter_order() {
        let template = real_amplitudes(2, &Entanglement::Linear, 1).unwrap();
        let circuit = template.assign_parameters(&[0.1, 0.2, 0.3, 0.4]).unwrap();

        let angles: Vec<f64> = circuit.gates().iter().flat_map(|g| g.angles()).collect();
        assert_eq!(angles, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_every_strategy_builds() {
        for ent in [
            Entanglement::Full,
            Entanglement::Linear,
            Entanglement::ReverseLinear,
            Entanglement::Circular,
            Entanglement::Sca,
            Entanglement::Pairwise,
        ] {
            for kind in AnsatzKind::ALL {
                let circuit = kind.template(5, &ent, 2).unwrap();
                assert_eq!(circuit.num_parameters(), kind.num_parameters(5, 2));
            }
        }
    }

    #[test]
    fn test_bound_template_inverse() {
        let template = efficient_su2(3, &Entanglement::Circular, 1).unwrap();
        let bound = template.assign_parameters(&vec![0.25; 12]).unwrap();
        let inverse = bound.inverse().unwrap();

        assert_eq!(inverse.gate_count(), bound.gate_count());
        assert_eq!(inverse.name(), Some("EfficientSU2_dg"));
    }
}
