//! Analyzer module - keyword scoring engine and the two analyzers built on it

pub mod category;
pub mod email;
pub mod engine;
pub mod message;
pub mod scoring;

pub use category::{Detector, KeywordCategory};
pub use email::EmailAnalyzer;
pub use engine::ScoringEngine;
pub use message::MessageAnalyzer;
pub use scoring::{RiskPolicy, Threshold};
