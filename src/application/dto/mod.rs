/// Data Transfer Objects for application layer
///
/// The request carries the build and listing options into the use case;
/// the response carries the assembled component forest back out.
mod sbom_request;
mod sbom_response;

pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
