//! Client for the remote sentiment prediction service.

pub mod api;

pub use api::{PredictError, PredictionResponse, TokenAttribution, predict};
