//! Constants for QBench
//!
//! Gantree: L0_Foundation → Constants
//!
//! Reproducibility constants for the benchmark generators and
//! naming conventions shared with the reference benchmark files.

// ============================================================================
// Benchmark Constants
// Gantree: bench // 벤치마크 상수
// ============================================================================

pub mod bench {
    //! Benchmark generation constants
    //!
    //! The seed and repetition depth must stay fixed for output parity
    //! with the published benchmark circuits.

    /// Seed used by every benchmark generator call
    /// Gantree: DEFAULT_SEED: u64 = 10
    pub const DEFAULT_SEED: u64 = 10;

    /// Repetition depth of the VQE ansätze
    /// Gantree: DEFAULT_REPS: usize = 3
    pub const DEFAULT_REPS: usize = 3;

    /// Name of the register added by `measure_all`
    pub const MEASURE_REGISTER: &str = "meas";

    /// Name of the parameter vector created by ansatz templates
    pub const PARAMETER_PREFIX: &str = "θ";

    /// Name of the real-amplitudes benchmark
    pub const VQE_REAL_AMP_RANDOM: &str = "vqerealamprandom";

    /// Name of the efficient SU(2) benchmark
    pub const VQE_SU2_RANDOM: &str = "vqesu2random";

    /// Suffix appended to mirrored circuits
    pub const MIRROR_SUFFIX: &str = "_mirror";

    /// Suffix appended to inverted circuits
    pub const INVERSE_SUFFIX: &str = "_dg";
}

// ============================================================================
// Math Constants
// ============================================================================

pub mod math {
    //! Angle helpers

    /// Full turn (2π)
    pub const TWO_PI: f64 = std::f64::consts::TAU;

    /// Check that an angle lies in `[0, 2π)`
    #[inline]
    pub fn is_unit_turn(angle: f64) -> bool {
        (0.0..TWO_PI).contains(&angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility_constants() {
        assert_eq!(bench::DEFAULT_SEED, 10);
        assert_eq!(bench::DEFAULT_REPS, 3);
    }

    #[test]
    fn test_unit_turn() {
        assert!(math::is_unit_turn(0.0));
        assert!(math::is_unit_turn(6.28));
        assert!(!math::is_unit_turn(math::TWO_PI));
        assert!(!math::is_unit_turn(-0.1));
    }
}
