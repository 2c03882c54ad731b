//! Whole-file sample buffer acquisition.
//!
//! A capture file is acquired either as a read-only memory mapping or as
//! one heap allocation read in full. Both yield byte-identical addressable
//! content; the strategy is invisible past acquisition because release is
//! just dropping the handle.

use std::fs::File;
use std::io::Read;

use memmap2::Mmap;

use crate::error::{SourceError, SourceResult};

/// How the sample buffer is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Allocate and read the whole file into memory.
    #[default]
    Load,
    /// Map the file read-only.
    Map,
}

#[derive(Debug)]
enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// An immutable whole-file buffer, owned exclusively by its holder.
#[derive(Debug)]
pub struct SampleBuffer {
    backing: Backing,
}

impl SampleBuffer {
    /// Acquires the buffer with the given strategy. `expected` is the
    /// file length per its metadata.
    pub fn acquire(file: &mut File, expected: u64, strategy: Strategy) -> SourceResult<Self> {
        match strategy {
            Strategy::Load => Self::load(file, expected),
            Strategy::Map => Self::map(file, expected),
        }
    }

    fn map(file: &File, expected: u64) -> SourceResult<Self> {
        // Safety: the mapping is read-only and the source holds it for
        // its whole open lifetime. Callers must not truncate the file
        // while the source is open.
        let mmap = unsafe { Mmap::map(file) }
            .map_err(|_| SourceError::AllocationFailure { bytes: expected })?;
        if (mmap.len() as u64) < expected {
            return Err(SourceError::ShortRead {
                expected,
                actual: mmap.len() as u64,
            });
        }
        Ok(Self {
            backing: Backing::Mapped(mmap),
        })
    }

    fn load(file: &mut File, expected: u64) -> SourceResult<Self> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(expected as usize)
            .map_err(|_| SourceError::AllocationFailure { bytes: expected })?;
        match file.read_to_end(&mut buffer) {
            Ok(_) => {}
            Err(_) => {
                return Err(SourceError::ShortRead {
                    expected,
                    actual: buffer.len() as u64,
                })
            }
        }
        if (buffer.len() as u64) < expected {
            return Err(SourceError::ShortRead {
                expected,
                actual: buffer.len() as u64,
            });
        }
        Ok(Self {
            backing: Backing::Owned(buffer),
        })
    }

    /// Read-only view of the whole file.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => mmap,
            Backing::Owned(vec) => vec,
        }
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, SeekFrom, Write};

    use super::*;

    fn scratch_file(content: &[u8]) -> File {
        let mut file = tempfile::tempfile().expect("create scratch file");
        file.write_all(content).expect("write scratch content");
        file.seek(SeekFrom::Start(0)).expect("rewind");
        file
    }

    #[test]
    fn test_load_reads_whole_file() {
        let content: Vec<u8> = (0..=255).collect();
        let mut file = scratch_file(&content);
        let buffer = SampleBuffer::acquire(&mut file, 256, Strategy::Load).expect("load");
        assert_eq!(buffer.len(), 256);
        assert_eq!(buffer.as_bytes(), content.as_slice());
    }

    #[test]
    fn test_map_and_load_are_byte_identical() {
        let content: Vec<u8> = (0..1024u32).flat_map(|v| v.to_le_bytes()).collect();
        let mut file = scratch_file(&content);
        let loaded =
            SampleBuffer::acquire(&mut file, content.len() as u64, Strategy::Load).expect("load");

        let mut file = scratch_file(&content);
        let mapped =
            SampleBuffer::acquire(&mut file, content.len() as u64, Strategy::Map).expect("map");

        assert_eq!(loaded.as_bytes(), mapped.as_bytes());
    }

    #[test]
    fn test_load_short_file_is_a_short_read() {
        let mut file = scratch_file(&[1, 2, 3]);
        let err = SampleBuffer::acquire(&mut file, 100, Strategy::Load).unwrap_err();
        match err {
            SourceError::ShortRead { expected, actual } => {
                assert_eq!(expected, 100);
                assert_eq!(actual, 3);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }
}
