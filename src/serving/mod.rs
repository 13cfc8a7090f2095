//! Collaborator surface for a remote classification service: the
//! `PredictionService` trait, prediction types, and the class-label table.
//! Transport to an actual service lives behind the trait, outside this crate.
pub mod labels;
pub use labels::LabelMap;

pub mod predict;
pub use predict::{ImagePredictions, LabeledPrediction, Prediction, PredictionService};
