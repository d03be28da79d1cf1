//! Error types for geometry mutation and observer notification.
//!
//! Absence is not an error anywhere in Tessel: unknown ids, unset cache
//! entries and unknown property names are all `Option::None`.

use crate::id::ShapeKind;
use std::error::Error;
use std::fmt;

/// Errors raised by shape constructors and geometry mutators.
///
/// [`NonFinite`](Self::NonFinite) and [`NonPositive`](Self::NonPositive)
/// are the invalid-data family: the parameter is rejected and the shape
/// is left unchanged. They are surfaced to the immediate caller and never
/// swallowed inside the core.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A coordinate or scalar parameter is NaN or infinite.
    NonFinite {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value (first non-finite component for points).
        value: f64,
    },
    /// A cone radius or height is zero or negative.
    NonPositive {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A variant-specific mutator was called on a shape of another kind.
    KindMismatch {
        /// Kind the mutator applies to.
        expected: ShapeKind,
        /// Kind of the shape it was called on.
        actual: ShapeKind,
    },
}

impl ShapeError {
    /// `true` for errors caused by an invalid parameter value.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::NonFinite { .. } | Self::NonPositive { .. })
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { parameter, value } => {
                write!(f, "invalid data: {parameter} must be finite, got {value}")
            }
            Self::NonPositive { parameter, value } => {
                write!(f, "invalid data: {parameter} must be positive, got {value}")
            }
            Self::KindMismatch { expected, actual } => {
                write!(f, "operation applies to a {expected}, shape is a {actual}")
            }
        }
    }
}

impl Error for ShapeError {}

/// Failure reported by a shape observer while handling a change.
///
/// Observer failures are isolated: the notifying shape logs them and
/// keeps notifying the remaining observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObserverError {
    /// Name of the failing observer.
    pub observer: String,
    /// Human-readable description of the failure.
    pub reason: String,
}

impl ObserverError {
    /// Build an observer error.
    pub fn new(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer '{}' failed: {}", self.observer, self.reason)
    }
}

impl Error for ObserverError {}
