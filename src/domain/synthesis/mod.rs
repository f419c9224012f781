pub mod dto;
pub mod error;
pub mod service;

pub use dto::{HealthResponse, SpeakersResponse, SynthesizeRequest};
pub use error::SynthesisServiceError;
pub use service::{SynthesisService, SynthesisServiceApi};
