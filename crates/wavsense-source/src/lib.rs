//! wavsense-source
//!
//! This crate turns a 16-bit multichannel PCM WAV capture into a validated,
//! randomly-addressable sample source:
//!
//! - **WAV container decoding** - RIFF chunk walking for `fmt `, `LIST INFO`
//!   metadata and `data`, 16-bit PCM only
//! - **Capture directives** - a `Time:` start timestamp and per-channel
//!   `Scale-<N>:` physical-unit scale factors embedded as lines inside the
//!   container's free-text comment field
//! - **Auxiliary channel words** - a bit-packed 16-bit side-channel encoding
//!   multiplexing sensor readings and metadata bytes into spare channels
//! - **Random access** - constant-time indexed access to interleaved sample
//!   frames over a buffer that is either memory-mapped or loaded whole
//!
//! # Overview
//!
//! Capture devices write long multichannel recordings as plain WAV files and
//! smuggle acquisition metadata into the standard `ICMT` comment field. A
//! missing or unparseable directive is never fatal: files predating the
//! directive convention still open, with a zero start time and unit scale
//! factors, and a warning is logged per unresolved directive.
//!
//! # Example
//!
//! ```ignore
//! use wavsense_source::SampleSource;
//!
//! let mut source = SampleSource::open("capture.wav")?;
//! println!("{} channels at {} Hz, starting {}", source.num_channels(),
//!     source.sample_rate(), source.start_time());
//! let (frames, stride) = source.read(0, 1);
//! let first = i16::from_le_bytes([frames[0], frames[1]]);
//! source.close();
//! ```
//!
//! Reads are raw byte views plus a frame stride; the [`SampleSource::sample`]
//! and [`SampleSource::scaled`] accessors decode single values. The crate
//! performs no audio decompression, no resampling, and no streaming I/O.

pub mod aux_channel;
mod buffer;
mod error;
pub mod header;
mod source;
pub mod timestamp;
pub mod wav;

pub use buffer::{SampleBuffer, Strategy};
pub use error::{SourceError, SourceResult};
pub use source::SampleSource;

/// Maximum number of channels a sample source supports.
pub const MAX_CHANNELS: usize = 16;
