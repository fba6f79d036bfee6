//! HTTP collaborators: the position loader and the stage-update service.

pub mod client;
mod error;
pub mod position;
pub mod stage_update;

pub use error::ApiError;
