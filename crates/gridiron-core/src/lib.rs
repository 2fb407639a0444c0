// Library root: the mock-draft simulation engine.
//
// `draft::simulator::run` is the entry point; everything else is either a
// leaf it depends on (rng, order, roster, strategy) or the post-processing
// step that grades its output.

pub mod config;
pub mod draft;
pub mod error;
pub mod grading;
pub mod player;
pub mod pool;
pub mod rng;
pub mod settings;
pub mod strategy;

pub use draft::pick::{DraftResult, Pick};
pub use draft::simulator::{run, run_with_config};
pub use error::DraftError;
pub use settings::{MockDraftSettings, ScoringFormat, Seed, Strategy};
