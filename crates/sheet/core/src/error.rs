//! Common error infrastructure for sheet-core.
//!
//! Concern-specific errors (e.g. [`ArmourError`](crate::stats::ArmourError))
//! live next to the computation that raises them. None of them ever escapes a
//! recompute pass: the sheet replaces the failed field with its documented
//! fallback and records the error as a warning.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error: a fallback value was substituted and the pass continued.
    Recoverable,

    /// Validation error: the host supplied malformed base data.
    ///
    /// Examples: negative armour rating, rating keyed by an unknown location
    Validation,

    /// Internal error: unexpected arithmetic or state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all sheet-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by the origin of the problem, not by its impact
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
