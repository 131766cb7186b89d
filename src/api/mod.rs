pub mod client;
pub mod service;

pub use client::{ApiError, HttpStudioClient, StudioApi};
pub use service::{CreateClientOutcome, StudioService};
