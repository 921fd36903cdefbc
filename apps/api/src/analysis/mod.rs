//! Resume analysis - detectors, scoring and the orchestrator that runs them.

pub mod formatting;
pub mod gaps;
pub mod handlers;
pub mod improvements;
pub mod keywords;
pub mod line_critic;
pub mod orchestrator;
pub mod readability;
pub mod recommendations;
pub mod rules;
pub mod scoring;
pub mod sections;

pub use orchestrator::Analyzer;
