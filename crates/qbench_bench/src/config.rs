//! Generator configuration
//!
//! Gantree: L3_Bench → GeneratorConfig
//!
//! The defaults reproduce the published benchmark circuits. Other values
//! are available for experiments but change the output.

use qbench_core::{bench, QbenchError, QbenchResult};
use qbench_library::Entanglement;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Benchmark generator configuration
/// Gantree: GeneratorConfig // 생성기 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed, re-applied on every call
    pub seed: u64,

    /// Ansatz repetition depth
    pub reps: usize,

    /// Entanglement strategy
    pub entanglement: Entanglement,

    /// Barriers between ansatz layers
    pub insert_barriers: bool,

    /// Append full-width measurement
    pub measure: bool,
}

impl GeneratorConfig {
    /// Reference configuration (seed 10, reps 3, full entanglement)
    pub fn new() -> Self {
        Self {
            seed: bench::DEFAULT_SEED,
            reps: bench::DEFAULT_REPS,
            entanglement: Entanglement::Full,
            insert_barriers: false,
            measure: true,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set repetition depth
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Set entanglement strategy
    pub fn with_entanglement(mut self, entanglement: Entanglement) -> Self {
        self.entanglement = entanglement;
        self
    }

    /// Insert barriers between layers
    pub fn with_insert_barriers(mut self, enabled: bool) -> Self {
        self.insert_barriers = enabled;
        self
    }

    /// Enable or disable final measurement
    pub fn with_measure(mut self, enabled: bool) -> Self {
        self.measure = enabled;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> QbenchResult<()> {
        if let Entanglement::Custom(blocks) = &self.entanglement {
            if blocks.is_empty() {
                return Err(QbenchError::InvalidConfig(
                    "custom entanglement needs at least one block".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Check if this is the reference configuration
    pub fn is_reference(&self) -> bool {
        *self == Self::new()
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Parse from JSON
    pub fn from_json(json: &str) -> QbenchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QbenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> QbenchResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| QbenchError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeneratorConfig(seed={}, reps={}, entanglement={}, barriers={}, measure={})",
            self.seed, self.reps, self.entanglement, self.insert_barriers, self.measure
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, 10);
        assert_eq!(config.reps, 3);
        assert_eq!(config.entanglement, Entanglement::Full);
        assert!(config.measure);
        assert!(config.is_reference());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_seed(7)
            .with_reps(1)
            .with_entanglement(Entanglement::Linear)
            .with_insert_barriers(true)
            .with_measure(false);

        assert_eq!(config.seed, 7);
        assert_eq!(config.reps, 1);
        assert!(config.insert_barriers);
        assert!(!config.is_reference());
    }

    #[test]
    fn test_validation() {
        let config = GeneratorConfig::new().with_entanglement(Entanglement::Custom(vec![]));
        assert!(matches!(
            config.validate(),
            Err(QbenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_partial_fields() {
        let config = GeneratorConfig::from_json(r#"{"reps": 1, "entanglement": "circular"}"#).unwrap();
        assert_eq!(config.seed, 10);
        assert_eq!(config.reps, 1);
        assert_eq!(config.entanglement, Entanglement::Circular);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GeneratorConfig::new()
            .with_entanglement(Entanglement::Custom(vec![vec![0, 1], vec![1, 2]]));
        let json = config.to_json().unwrap();
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            GeneratorConfig::from_json("{ not json"),
            Err(QbenchError::JsonError(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_json_file("/nonexistent/qbench.json"),
            Err(QbenchError::FileError(_))
        ));
    }

    #[test]
    fn test_display() {
        let text = GeneratorConfig::new().to_string();
        assert!(text.contains("seed=10"));
        assert!(text.contains("entanglement=full"));
    }
}
