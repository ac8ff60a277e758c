//! Symbolic circuit parameters
//!
//! Gantree: L1_Circuit → Parameter
//!
//! Ansatz templates are built with free parameters drawn from a named
//! vector (`θ[0]`, `θ[1]`, ...). Binding replaces them by literal angles.

use crate::error::{QbenchError, QbenchResult};
use crate::types::Angle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Parameter
// ============================================================================

/// Element of a parameter vector
///
/// Ordering is by vector name, then element index. This is the native
/// ordering used when binding a list of values to a template.
/// Gantree: Parameter // 파라미터
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Parameter {
    vector: String,
    index: usize,
}

impl Parameter {
    /// Create a parameter
    pub fn new(vector: impl Into<String>, index: usize) -> Self {
        Self {
            vector: vector.into(),
            index,
        }
    }

    /// Name of the owning vector
    pub fn vector(&self) -> &str {
        &self.vector
    }

    /// Index within the owning vector
    pub fn index(&self) -> usize {
        self.index
    }

    /// Full name (`θ[3]`)
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.vector, self.index)
    }
}

// ============================================================================
// ParameterVector
// ============================================================================

/// Named, fixed-length sequence of parameters
/// Gantree: ParameterVector // 파라미터 벡터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterVector {
    name: String,
    len: usize,
}

impl ParameterVector {
    /// Create a vector of `len` parameters
    pub fn new(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            len,
        }
    }

    /// Vector name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get element `index`
    pub fn get(&self, index: usize) -> Option<Parameter> {
        (index < self.len).then(|| Parameter::new(self.name.clone(), index))
    }

    /// Iterate over all elements in order
    pub fn iter(&self) -> impl Iterator<Item = Parameter> + '_ {
        (0..self.len).map(move |i| Parameter::new(self.name.clone(), i))
    }
}

// ============================================================================
// ParamValue
// ============================================================================

/// Gate argument: literal angle or free parameter
/// Gantree: ParamValue // 바운드/프리
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Literal angle (radians)
    Bound(Angle),
    /// Placeholder awaiting a value
    Free(Parameter),
}

impl ParamValue {
    /// Literal value, if bound
    pub fn value(&self) -> Option<Angle> {
        match self {
            ParamValue::Bound(v) => Some(*v),
            ParamValue::Free(_) => None,
        }
    }

    /// Free parameter, if any
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            ParamValue::Bound(_) => None,
            ParamValue::Free(p) => Some(p),
        }
    }

    /// Check if bound
    pub fn is_bound(&self) -> bool {
        matches!(self, ParamValue::Bound(_))
    }

    /// Substitute a value from `values` if this is a free parameter present there
    pub fn bind(&self, values: &HashMap<Parameter, Angle>) -> ParamValue {
        match self {
            ParamValue::Free(p) => match values.get(p) {
                Some(&v) => ParamValue::Bound(v),
                None => self.clone(),
            },
            ParamValue::Bound(_) => self.clone(),
        }
    }

    /// Negated value (used by gate inversion)
    pub fn negate(&self) -> QbenchResult<ParamValue> {
        match self {
            ParamValue::Bound(v) => Ok(ParamValue::Bound(-v)),
            ParamValue::Free(p) => Err(QbenchError::UnboundParameter(p.name())),
        }
    }

    /// Literal value or `UnboundParameter`
    pub fn require(&self) -> QbenchResult<Angle> {
        match self {
            ParamValue::Bound(v) => Ok(*v),
            ParamValue::Free(p) => Err(QbenchError::UnboundParameter(p.name())),
        }
    }
}

impl From<Angle> for ParamValue {
    fn from(value: Angle) -> Self {
        ParamValue::Bound(value)
    }
}

impl From<Parameter> for ParamValue {
    fn from(param: Parameter) -> Self {
        ParamValue::Free(param)
    }
}

impl From<&Parameter> for ParamValue {
    fn from(param: &Parameter) -> Self {
        ParamValue::Free(param.clone())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bound(v) => write!(f, "{}", v),
            ParamValue::Free(p) => write!(f, "{}", p),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
