pub mod envelope;
pub mod runner;

pub use envelope::{write_envelope, ResultEnvelope, Status};
pub use runner::{build_prompt, InferenceRunner, Paraphraser};
