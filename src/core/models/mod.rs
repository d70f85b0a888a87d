mod classify_error;
mod image_payload;
mod prediction;
mod snapshot_buffer;

pub use classify_error::ClassifyError;
pub use image_payload::ImagePayload;
pub use prediction::Prediction;
pub use snapshot_buffer::SnapshotBuffer;
