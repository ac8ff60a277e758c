//! Error types for QBench
//!
//! Gantree: L0_Foundation → Errors
//!
//! Error handling for circuits, templates, and benchmark generation.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QBench
/// Gantree: QbenchError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QbenchError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Qubit count rejected by a template constructor
    /// Gantree: InvalidQubitCount(usize) // 큐비트 수
    #[error("Invalid qubit count {0}: must be a positive integer")]
    InvalidQubitCount(usize),

    /// Benchmark size rejected by the registry
    #[error("Invalid circuit size {0}: `circuit_size` must be a positive integer")]
    InvalidCircuitSize(usize),

    /// Non-finite angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    /// Invalid entanglement specification
    #[error("Invalid entanglement: {0}")]
    InvalidEntanglement(String),

    /// Invalid generator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Gate on non-existent qubit
    /// Gantree: GateQubitMismatch{{q,n}} // 큐비트 범위
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    /// Measurement into non-existent clbit
    #[error("Gate references clbit {clbit} but circuit has only {num_clbits} clbits")]
    GateClbitMismatch { clbit: usize, num_clbits: usize },

    /// Same qubit used twice by one gate
    #[error("Gate '{gate}' uses qubit {qubit} more than once")]
    DuplicateQubit { gate: String, qubit: usize },

    /// Register name collision
    #[error("Register name '{0}' already exists")]
    DuplicateRegister(String),

    /// Gate without an inverse
    #[error("Gate '{0}' has no inverse")]
    NonInvertibleGate(String),

    /// Compose width mismatch
    #[error("Cannot compose circuit over {other} qubits onto circuit over {this} qubits")]
    ComposeMismatch { this: usize, other: usize },

    // ========================================================================
    // Parameter Errors
    // ========================================================================
    /// Wrong number of values for a template
    /// Gantree: ParameterCountMismatch{{e,g}} // 파라미터 수
    #[error("Expected {expected} parameter values, got {got}")]
    ParameterCountMismatch { expected: usize, got: usize },

    /// Operation needs bound parameters
    #[error("Parameter '{0}' is unbound")]
    UnboundParameter(String),

    // ========================================================================
    // Benchmark Errors
    // ========================================================================
    /// Unknown benchmark name
    #[error("'{name}' is not a supported benchmark. Valid names: {supported:?}")]
    UnknownBenchmark {
        name: String,
        supported: Vec<String>,
    },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for QBench operations
/// Gantree: QbenchResult<T> // type alias
pub type QbenchResult<T> = Result<T, QbenchError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QbenchError {
    fn from(err: serde_json::Error) -> Self {
        QbenchError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QbenchError {
    fn from(err: std::io::Error) -> Self {
        QbenchError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QbenchError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QbenchError::InvalidQubitCount(_)
                | QbenchError::InvalidCircuitSize(_)
                | QbenchError::InvalidAngle(_)
                | QbenchError::InvalidEntanglement(_)
                | QbenchError::InvalidConfig(_)
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            QbenchError::GateQubitMismatch { .. }
                | QbenchError::GateClbitMismatch { .. }
                | QbenchError::DuplicateQubit { .. }
                | QbenchError::DuplicateRegister(_)
                | QbenchError::NonInvertibleGate(_)
                | QbenchError::ComposeMismatch { .. }
        )
    }

    /// Check if error is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            QbenchError::ParameterCountMismatch { .. } | QbenchError::UnboundParameter(_)
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
    fn test_error_display() {
        let err = QbenchError::InvalidQubitCount(0);
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_parameter_count_mismatch() {
        let err = QbenchError::ParameterCountMismatch {
            expected: 16,
            got: 15,
        };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("15"));
        assert!(err.is_parameter_error());
    }

    #[test]
    fn test_unknown_benchmark_lists_names() {
        let err = QbenchError::UnknownBenchmark {
            name: "foo".into(),
            supported: vec!["vqesu2random".into()],
        };
        assert!(err.to_string().contains("'foo'"));
        assert!(err.to_string().contains("vqesu2random"));
    }

    #[test]
    fn test_classification() {
        assert!(QbenchError::InvalidCircuitSize(0).is_validation_error());
        assert!(!QbenchError::InvalidCircuitSize(0).is_circuit_error());
        assert!(QbenchError::DuplicateRegister("meas".into()).is_circuit_error());
        assert!(QbenchError::DuplicateQubit {
            gate: "cx".into(),
            qubit: 1
        }
        .is_circuit_error());
    }

    #[test]
    fn test_json_conversion() {
        let err: QbenchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, QbenchError::JsonError(_)));
    }
}
