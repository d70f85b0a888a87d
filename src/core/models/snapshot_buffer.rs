/// Raw RGBA pixels handed over by whatever captured them (map snapshot,
/// street-level preview, camera frame). Immutable once built.
#[derive(Clone)]
pub struct SnapshotBuffer {
    pub width: u32,
    pub height: u32,
    raw_rgba_data: Vec<u8>,
}

impl std::fmt::Debug for SnapshotBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.raw_rgba_data.len())
            .finish()
    }
}

impl SnapshotBuffer {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[SNAPSHOT] building buffer: {}x{}, {} bytes",
            width_pixels,
            height_pixels,
            raw_rgba_data.len()
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_rgba_data,
        }
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.raw_rgba_data
    }
}
