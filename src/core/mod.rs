//! Core utilities shared across the generation pipeline

pub mod error;
pub mod logging;
pub mod rng;

pub use error::{Error, Result};
pub use rng::Pcg32;
