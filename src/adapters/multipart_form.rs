use uuid::Uuid;

use crate::core::models::ImagePayload;
use crate::global_constants;

/// A multipart/form-data request body assembled by hand. The predict server
/// is picky about its framing, so the byte layout is built explicitly here
/// instead of going through a form-encoding helper:
///
/// ```text
/// --{boundary}\r\n
/// Content-Disposition: form-data; name="file"; filename="image.jpeg"\r\n
/// Content-Type: image/jpeg\r\n
/// \r\n
/// {jpeg bytes}
/// \r\n--{boundary}--\r\n
/// ```
///
/// The boundary is a fresh UUID per request, so it never collides with the
/// image bytes in practice. A body is built, sent, and dropped; never
/// reused.
pub struct MultipartFormBody {
    boundary: String,
    data: Vec<u8>,
}

impl MultipartFormBody {
    pub fn build_for_image(payload: &ImagePayload) -> Self {
        let boundary = Uuid::new_v4().to_string();

        let mut data = Vec::with_capacity(payload.data().len() + 256);

        data.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        data.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                global_constants::MULTIPART_FIELD_NAME,
                payload.file_name()
            )
            .as_bytes(),
        );
        data.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", payload.content_type()).as_bytes(),
        );
        data.extend_from_slice(payload.data());
        data.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Self { boundary, data }
    }

    /// Value for the request's Content-Type header; carries the same
    /// boundary token used in the body markers.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
