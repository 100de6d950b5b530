//! Wire types for the HTTP surface.

mod requests;
mod responses;

pub use requests::InvokeRequest;
pub use responses::{HealthResponse, InvokeResponse};
