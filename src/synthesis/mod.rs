pub mod signals;
pub mod synthesizer;

pub use signals::{signals_for_hypothesis, Confidence, Signal, SIGNAL_RULES};
pub use synthesizer::synthesize;
