pub mod multipart_form;
mod predict_server_classifier;

pub use predict_server_classifier::PredictServerClassifier;
