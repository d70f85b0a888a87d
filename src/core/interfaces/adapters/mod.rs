mod intersection_classifier;

pub use intersection_classifier::IntersectionClassifier;
