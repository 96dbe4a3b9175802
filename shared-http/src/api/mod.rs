pub mod error;
pub mod responses;

pub use error::ApiError;
pub use responses::{AppInfoResponse, HealthResponse, STATUS_DOWN, STATUS_UP};
