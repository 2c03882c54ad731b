//! Decoded container header fields.

/// Maximum stored length of each metadata text field, in bytes.
/// Longer fields are truncated on a character boundary, never an error.
pub const METADATA_MAX: usize = 256;

/// Header fields decoded from a WAV container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WavInfo {
    /// Byte offset of the first sample frame within the file.
    pub data_offset: usize,
    /// Channel count from the `fmt ` chunk.
    pub channels: u16,
    /// Total frame count declared by the `data` chunk.
    pub num_samples: usize,
    /// Frames per second.
    pub sample_rate: u32,
    /// Bytes per sample per channel (2 for the supported 16-bit PCM).
    pub bytes_per_sample: u16,
    /// `IART` metadata, bounded.
    pub artist: String,
    /// `INAM` metadata, bounded.
    pub name: String,
    /// `ICMT` metadata, bounded. May carry capture directives.
    pub comment: String,
    /// `ICRD` metadata, bounded.
    pub date: String,
}

impl WavInfo {
    /// Bytes per interleaved frame.
    pub fn frame_bytes(&self) -> usize {
        self.channels as usize * self.bytes_per_sample as usize
    }
}

/// Copies raw metadata bytes into a bounded string: stops at the first
/// NUL, decodes lossily, truncates to [`METADATA_MAX`].
pub(super) fn bounded_text(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let mut text = String::from_utf8_lossy(&raw[..end]).into_owned();
    if text.len() > METADATA_MAX {
        let mut cut = METADATA_MAX;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}
