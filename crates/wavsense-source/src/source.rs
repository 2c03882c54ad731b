//! The validated, randomly-addressable sample source.

use std::fs::File;
use std::path::Path;

use log::{info, warn};

use crate::buffer::{SampleBuffer, Strategy};
use crate::error::{SourceError, SourceResult};
use crate::header;
use crate::wav;
use crate::MAX_CHANNELS;

/// A validated 16-bit multichannel capture, open for random access.
///
/// Created whole by [`SampleSource::open`] and immutable for reading until
/// [`SampleSource::close`] releases the buffer. Shared `&self` reads from
/// multiple threads are safe once open returns; close takes `&mut self`,
/// so the borrow checker enforces that no read is in flight.
#[derive(Debug)]
pub struct SampleSource {
    buffer: Option<SampleBuffer>,
    data_start_offset: usize,
    num_channels: usize,
    num_samples: usize,
    sample_rate: u32,
    start_time: f64,
    scale: [f32; MAX_CHANNELS],
    info_artist: String,
    info_name: String,
    info_comment: String,
    info_date: String,
}

impl SampleSource {
    /// Opens a capture file with the default load-into-memory strategy.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        Self::open_with(path, Strategy::default())
    }

    /// Opens a capture file with an explicit buffer acquisition strategy.
    ///
    /// All-or-nothing: container decoding, format validation, directive
    /// parsing and buffer acquisition either all succeed or the error
    /// propagates with nothing retained.
    pub fn open_with(path: impl AsRef<Path>, strategy: Strategy) -> SourceResult<Self> {
        let path = path.as_ref();
        info!("loading header: {}", path.display());

        let mut file = File::open(path).map_err(|source| SourceError::CannotOpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        let expected = file
            .metadata()
            .map_err(|source| SourceError::CannotOpenInput {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        info!("acquiring {expected} bytes ({strategy:?})");
        let buffer = SampleBuffer::acquire(&mut file, expected, strategy)?;

        let info = wav::read_info(buffer.as_bytes())
            .ok_or_else(|| SourceError::unsupported("problem reading WAV file format"))?;
        if info.bytes_per_sample != 2 {
            return Err(SourceError::unsupported(format!(
                "{} bytes per sample, expected 2 (16-bit)",
                info.bytes_per_sample
            )));
        }
        let num_channels = info.channels as usize;
        if !(1..=MAX_CHANNELS).contains(&num_channels) {
            return Err(SourceError::unsupported(format!(
                "{} channels, expected at least 1 and no more than {}",
                info.channels, MAX_CHANNELS
            )));
        }
        if info.sample_rate < 1 {
            return Err(SourceError::unsupported(format!(
                "{} Hz sample rate",
                info.sample_rate
            )));
        }

        let parsed = header::parse_comment(&info.comment, num_channels);

        // The data chunk may declare more frames than the file holds
        // (power loss mid-write); clamp to what is addressable.
        let stride = num_channels * 2;
        let available = buffer.len().saturating_sub(info.data_offset) / stride;
        let num_samples = if info.num_samples > available {
            warn!(
                "data chunk declares {} frames but only {} are present; clamping",
                info.num_samples, available
            );
            available
        } else {
            info.num_samples
        };

        Ok(Self {
            buffer: Some(buffer),
            data_start_offset: info.data_offset,
            num_channels,
            num_samples,
            sample_rate: info.sample_rate,
            start_time: parsed.start_time,
            scale: parsed.scale,
            info_artist: info.artist,
            info_name: info.name,
            info_comment: info.comment,
            info_date: info.date,
        })
    }

    /// Returns a raw byte view starting at frame `index`, plus the byte
    /// stride between successive frames (`2 * num_channels`).
    ///
    /// `min_count` documents the run length the caller requires; the view
    /// itself always extends to the end of the buffer. The caller must
    /// ensure `index + min_count <= num_samples()` - the contract is
    /// debug-asserted, not validated per read.
    pub fn read(&self, index: usize, min_count: usize) -> (&[u8], usize) {
        let stride = self.num_channels * 2;
        debug_assert!(
            index + min_count <= self.num_samples,
            "read of {min_count} frames at {index} exceeds {} frames",
            self.num_samples
        );
        let bytes = self.buffer.as_ref().map_or(&[][..], SampleBuffer::as_bytes);
        let start = self.data_start_offset + index * stride;
        (&bytes[start.min(bytes.len())..], stride)
    }

    /// Decodes one raw sample value.
    pub fn sample(&self, frame: usize, channel: usize) -> i16 {
        debug_assert!(channel < self.num_channels);
        let (bytes, _) = self.read(frame, 1);
        let at = channel * 2;
        i16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    /// Decodes one sample value scaled to its channel's physical unit.
    pub fn scaled(&self, frame: usize, channel: usize) -> f32 {
        f32::from(self.sample(frame, channel)) * self.scale[channel]
    }

    /// Releases the sample buffer. Idempotent; after the first call
    /// [`buffer_len`](SampleSource::buffer_len) is zero and reads return
    /// empty views.
    pub fn close(&mut self) {
        self.buffer = None;
    }

    /// Length of the acquired buffer in bytes; zero after close.
    pub fn buffer_len(&self) -> usize {
        self.buffer.as_ref().map_or(0, SampleBuffer::len)
    }

    /// Byte offset of the first sample frame.
    pub fn data_start_offset(&self) -> usize {
        self.data_start_offset
    }

    /// Channel count, 1..=[`MAX_CHANNELS`].
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Total frame count.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Frames per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Capture start, seconds since the Unix epoch; `0.0` when no `Time:`
    /// directive resolved.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Per-channel scale factors, one entry per channel.
    pub fn scale(&self) -> &[f32] {
        &self.scale[..self.num_channels]
    }

    /// `IART` metadata.
    pub fn info_artist(&self) -> &str {
        &self.info_artist
    }

    /// `INAM` metadata.
    pub fn info_name(&self) -> &str {
        &self.info_name
    }

    /// `ICMT` metadata, directives included.
    pub fn info_comment(&self) -> &str {
        &self.info_comment
    }

    /// `ICRD` metadata.
    pub fn info_date(&self) -> &str {
        &self.info_date
    }
}
