pub mod health;
pub mod synthesis;

pub use synthesis::SynthesisController;
