//! WAV writing for capture tooling and test fixtures.

use std::io::{self, Write};

/// Format parameters for a written file.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16 everywhere in this crate).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit PCM format with the given channel count.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

/// Metadata text written into a `LIST INFO` chunk.
#[derive(Debug, Clone, Default)]
pub struct WavMetadata {
    /// `IART` field.
    pub artist: String,
    /// `INAM` field.
    pub name: String,
    /// `ICMT` field. Capture directives go here, one per line.
    pub comment: String,
    /// `ICRD` field.
    pub date: String,
}

impl WavMetadata {
    fn is_empty(&self) -> bool {
        self.artist.is_empty()
            && self.name.is_empty()
            && self.comment.is_empty()
            && self.date.is_empty()
    }

    fn fields(&self) -> [(&[u8; 4], &str); 4] {
        [
            (b"IART", &self.artist),
            (b"INAM", &self.name),
            (b"ICMT", &self.comment),
            (b"ICRD", &self.date),
        ]
    }

    // Chunk body size: "INFO" plus one NUL-terminated, word-padded
    // sub-chunk per non-empty field
    fn chunk_body_size(&self) -> u32 {
        let mut size = 4u32;
        for (_, text) in self.fields() {
            if !text.is_empty() {
                let padded = (text.len() as u32 + 1 + 1) & !1;
                size += 8 + padded;
            }
        }
        size
    }
}

/// Writes a complete WAV file: RIFF header, `fmt ` chunk, optional
/// `LIST INFO` metadata, then the `data` chunk.
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    metadata: &WavMetadata,
    pcm_data: &[u8],
) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let list_size = if metadata.is_empty() {
        0
    } else {
        8 + metadata.chunk_body_size()
    };
    let file_size = 36 + list_size + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // LIST INFO chunk
    if !metadata.is_empty() {
        writer.write_all(b"LIST")?;
        writer.write_all(&metadata.chunk_body_size().to_le_bytes())?;
        writer.write_all(b"INFO")?;
        for (id, text) in metadata.fields() {
            if text.is_empty() {
                continue;
            }
            let stored = text.len() as u32 + 1; // trailing NUL
            writer.write_all(id)?;
            writer.write_all(&stored.to_le_bytes())?;
            writer.write_all(text.as_bytes())?;
            writer.write_all(&[0])?;
            if !stored.is_multiple_of(2) {
                writer.write_all(&[0])?;
            }
        }
    }

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, metadata: &WavMetadata, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, metadata, pcm_data).expect("writing to Vec should not fail");
    buffer
}
