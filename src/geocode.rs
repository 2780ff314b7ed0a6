use thiserror::Error;

use crate::shared::Coordinate;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("No location found for address: {0}")]
    NotFound(String),
    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed address query: {0}")]
    Malformed(String),
}

/// An address resolved to a coordinate by an external service.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub address: String,
    pub coordinate: Coordinate,
}

/// Contract for the address resolution collaborator: an eircode or free
/// text query in, a coordinate out. The engine only ever consumes resolved
/// coordinates; resolution itself happens outside this crate and is always
/// allowed to fail.
pub trait Geocoder {
    fn resolve(&self, query: &str) -> Result<ResolvedAddress, ResolutionError>;
}
