//! Conversion of workload endpoints from the legacy v1 data model to v3.
//!
//! A conversion runs in two steps: the legacy client resource is first mapped
//! onto its v1 backend key/value form, and the backend form is then mapped onto
//! the v3 client resource. Both steps are pure functions of their input.

pub mod error;
pub mod family;
pub mod labels;
pub mod names;
pub mod profiles;
pub mod workloadendpoint;

pub use error::{ConversionError, ConversionResult};
pub use workloadendpoint::WorkloadEndpointConverter;

/// A resource type that can be migrated from the v1 data model to v3.
pub trait Converter {
    /// Legacy client-facing resource.
    type ApiV1;
    /// v1 backend key/value pair.
    type BackendV1;
    /// v3 client-facing resource.
    type ApiV3;

    /// Maps a legacy client resource onto its backend key/value form.
    fn api_v1_to_backend_v1(&self, resource: &Self::ApiV1) -> ConversionResult<Self::BackendV1>;

    /// Maps a backend key/value pair onto the v3 client resource.
    fn backend_v1_to_api_v3(&self, kvp: &Self::BackendV1) -> ConversionResult<Self::ApiV3>;

    /// Runs both steps.
    fn api_v1_to_api_v3(&self, resource: &Self::ApiV1) -> ConversionResult<Self::ApiV3> {
        let kvp = self.api_v1_to_backend_v1(resource)?;
        self.backend_v1_to_api_v3(&kvp)
    }
}
