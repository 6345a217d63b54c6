mod analysis_engine;
mod calendar;
mod products;
mod spike;

pub use analysis_engine::{analyze, AnalysisEngine};
