//! Error types for v1 → v3 conversion.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors that can occur while converting a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A k8s workload id without the `<namespace>.<pod-name>` separator.
    #[error(
        "malformed k8s workload ID '{workload_id}': workload was not added through the Calico CNI plugin and cannot be converted"
    )]
    MalformedWorkloadId {
        /// The rejected workload id, verbatim.
        workload_id: String,
    },

    /// An identity component required for the v3 name is empty.
    #[error("insufficient identifiers: {field} must not be empty")]
    InsufficientIdentifiers {
        /// The empty component.
        field: &'static str,
    },

    /// An identity component that cannot be encoded into a decodable name.
    #[error("invalid {field} '{value}': must not start with '-'")]
    InvalidIdentifier {
        /// The offending component.
        field: &'static str,
        /// Its value, verbatim.
        value: String,
    },

    /// A v3 endpoint name that does not decode into its identity.
    #[error("malformed workload endpoint name '{name}': {reason}")]
    MalformedName {
        /// The rejected name.
        name: String,
        /// Why decoding failed.
        reason: String,
    },
}
