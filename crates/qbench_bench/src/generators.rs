//! Random-parameter ansatz generators
//!
//! Gantree: L3_Bench → Generators
//!
//! Every generator call follows the same pipeline:
//!
//! ```text
//! seed rng → template → draw P angles in [0, 2π) → bind → measure → name
//! ```
//!
//! The RNG is re-seeded on every call, so repeated calls are identical.

use crate::config::GeneratorConfig;
use crate::rng::{uniform_angles, Pcg64};
use qbench_core::{bench, Circuit, QbenchResult};
use qbench_library::AnsatzKind;
use rand::SeedableRng;

/// Circuit generator for benchmarks
/// Gantree: CircuitGenerator // 회로 생성기
#[derive(Debug, Clone, Default)]
pub struct CircuitGenerator {
    config: GeneratorConfig,
}

impl CircuitGenerator {
    /// Generator with the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generator with the reference configuration and another seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::new().with_seed(seed))
    }

    /// Current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ========================================================================
    // VQE Benchmarks
    // ========================================================================

    /// RealAmplitudes ansatz with random parameters, named `vqerealamprandom`
    /// Gantree: vqe_real_amp_random(n) -> Result<Circuit> // 실수 진폭 VQE
    pub fn vqe_real_amp_random(&self, num_qubits: usize) -> QbenchResult<Circuit> {
        self.random_ansatz(AnsatzKind::RealAmplitudes, bench::VQE_REAL_AMP_RANDOM, num_qubits)
    }

    /// EfficientSU2 ansatz with random parameters, named `vqesu2random`
    /// Gantree: vqe_su2_random(n) -> Result<Circuit> // SU(2) VQE
    pub fn vqe_su2_random(&self, num_qubits: usize) -> QbenchResult<Circuit> {
        self.random_ansatz(AnsatzKind::EfficientSu2, bench::VQE_SU2_RANDOM, num_qubits)
    }

    /// Bind `kind`'s template to seeded random angles, measure and name it
    /// Gantree: random_ansatz(kind, name, n) -> Result<Circuit> // 공통 파이프라인
    pub fn random_ansatz(
        &self,
        kind: AnsatzKind,
        name: &str,
        num_qubits: usize,
    ) -> QbenchResult<Circuit> {
        self.config.validate()?;
        let mut rng = self.get_rng();

        let template = kind
            .n_local(num_qubits)
            .with_entanglement(self.config.entanglement.clone())
            .with_reps(self.config.reps)
            .with_insert_barriers(self.config.insert_barriers)
            .build()?;

        let angles = uniform_angles(&mut rng, template.num_parameters());
        let mut circuit = template.assign_parameters(&angles)?;

        if self.config.measure {
            circuit.measure_all()?;
        }
        circuit.set_name(name);

        log::debug!(
            "Generated {} for {} qubits ({} parameters, seed {})",
            name,
            num_qubits,
            angles.len(),
            self.config.seed
        );

        Ok(circuit)
    }

    /// Fresh RNG seeded from the configuration
    fn get_rng(&self) -> Pcg64 {
        Pcg64::seed_from_u64(self.config.seed)
    }
}

// ============================================================================
// Tests
// ============================================================================
