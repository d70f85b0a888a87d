use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::core::models::{ClassifyError, SnapshotBuffer};
use crate::global_constants;

/// JPEG bytes ready to go on the wire, with the fixed content type and
/// filename the predict server expects. Built once per classification
/// attempt and discarded with it.
#[derive(Clone)]
pub struct ImagePayload {
    jpeg_data: Vec<u8>,
}

impl ImagePayload {
    /// Encodes a snapshot to JPEG at maximum quality. Fails without any
    /// network activity if the pixel buffer does not match its declared
    /// dimensions.
    pub fn encode_from_snapshot(snapshot: &SnapshotBuffer) -> Result<Self, ClassifyError> {
        let rgba_image = RgbaImage::from_raw(
            snapshot.width,
            snapshot.height,
            snapshot.raw_data().to_vec(),
        )
        .ok_or_else(|| {
            ClassifyError::Encoding(format!(
                "raw buffer of {} bytes does not match {}x{} RGBA dimensions",
                snapshot.raw_data().len(),
                snapshot.width,
                snapshot.height
            ))
        })?;

        // JPEG has no alpha channel.
        let rgb_image = DynamicImage::ImageRgba8(rgba_image).to_rgb8();

        let mut jpeg_data = Vec::new();
        let encoder =
            JpegEncoder::new_with_quality(&mut jpeg_data, global_constants::JPEG_ENCODE_QUALITY);
        rgb_image
            .write_with_encoder(encoder)
            .map_err(|e| ClassifyError::Encoding(e.to_string()))?;

        log::debug!(
            "[SNAPSHOT] encoded {}x{} snapshot into {} JPEG bytes",
            snapshot.width,
            snapshot.height,
            jpeg_data.len()
        );

        Ok(Self { jpeg_data })
    }

    #[allow(dead_code)]
    pub fn from_jpeg_data(jpeg_data: Vec<u8>) -> Self {
        Self { jpeg_data }
    }

    pub fn data(&self) -> &[u8] {
        &self.jpeg_data
    }

    pub fn content_type(&self) -> &'static str {
        global_constants::MULTIPART_PART_CONTENT_TYPE
    }

    pub fn file_name(&self) -> &'static str {
        global_constants::MULTIPART_FILE_NAME
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("bytes", &self.jpeg_data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_snapshot(width: u32, height: u32) -> SnapshotBuffer {
        SnapshotBuffer::build_from_raw_data(
            width,
            height,
            vec![128u8; (width * height * 4) as usize],
        )
    }

    #[test]
    fn test_encode_produces_decodable_jpeg_with_same_dimensions() {
        let snapshot = solid_snapshot(12, 8);

        let payload = ImagePayload::encode_from_snapshot(&snapshot).unwrap();

        let decoded = image::load_from_memory(payload.data()).unwrap();
        assert_eq!(decoded.width(), 12);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_encode_fails_on_buffer_dimension_mismatch() {
        let snapshot = SnapshotBuffer::build_from_raw_data(10, 10, vec![0u8; 7]);

        let result = ImagePayload::encode_from_snapshot(&snapshot);

        match result {
            Err(ClassifyError::Encoding(detail)) => {
                assert!(detail.contains("7 bytes"));
            }
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_carries_fixed_wire_identity() {
        let payload = ImagePayload::from_jpeg_data(vec![0xFF, 0xD8, 0xFF]);

        assert_eq!(payload.content_type(), "image/jpeg");
        assert_eq!(payload.file_name(), "image.jpeg");
        assert_eq!(payload.data(), &[0xFF, 0xD8, 0xFF]);
    }
}
