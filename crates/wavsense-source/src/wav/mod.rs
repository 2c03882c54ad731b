//! RIFF/WAVE container decoding and writing.
//!
//! This module is the container collaborator for [`crate::SampleSource`]:
//! it walks RIFF chunks to decode the `fmt ` header, the `LIST INFO`
//! metadata strings and the `data` chunk location of a 16-bit PCM capture,
//! and can write the same shape of file back out (the writer exists for
//! capture tooling and doubles as the test fixture generator).
//!
//! Directive extraction from the comment text is deliberately not done
//! here; see [`crate::header`].

mod info;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use info::{WavInfo, METADATA_MAX};
pub use reader::read_info;
pub use writer::{write_wav, write_wav_to_vec, WavFormat, WavMetadata};
