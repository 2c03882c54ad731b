//! Tests for the WAV container module.

use pretty_assertions::assert_eq;

use super::info::{bounded_text, METADATA_MAX};
use super::reader::read_info;
use super::writer::{write_wav_to_vec, WavFormat, WavMetadata};

fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

// =========================================================================
// Header decoding
// =========================================================================

#[test]
fn test_read_info_mono() {
    let wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0, 1, 2, 3]),
    );
    let info = read_info(&wav).expect("valid container");

    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_rate, 100);
    assert_eq!(info.bytes_per_sample, 2);
    assert_eq!(info.num_samples, 4);
    assert_eq!(info.data_offset, 44);
}

#[test]
fn test_read_info_multichannel_frame_count() {
    // 12 i16 values across 3 channels = 4 frames
    let wav = write_wav_to_vec(
        &WavFormat::pcm16(3, 800),
        &WavMetadata::default(),
        &pcm_bytes(&[0; 12]),
    );
    let info = read_info(&wav).expect("valid container");

    assert_eq!(info.channels, 3);
    assert_eq!(info.num_samples, 4);
    assert_eq!(info.frame_bytes(), 6);
}

#[test]
fn test_read_info_metadata_fields() {
    let metadata = WavMetadata {
        artist: "AX-7".to_string(),
        name: "capture-0001".to_string(),
        comment: "Time:2020-01-01 00:00:00\nScale-1:16384\n".to_string(),
        date: "2020-01-01".to_string(),
    };
    let wav = write_wav_to_vec(&WavFormat::pcm16(1, 100), &metadata, &pcm_bytes(&[0]));
    let info = read_info(&wav).expect("valid container");

    assert_eq!(info.artist, "AX-7");
    assert_eq!(info.name, "capture-0001");
    assert_eq!(info.comment, "Time:2020-01-01 00:00:00\nScale-1:16384\n");
    assert_eq!(info.date, "2020-01-01");
    // data chunk still found after the LIST chunk
    assert_eq!(info.num_samples, 1);
    assert_eq!(&wav[info.data_offset - 8..info.data_offset - 4], b"data");
}

#[test]
fn test_read_info_no_metadata_leaves_empty_strings() {
    let wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[7]),
    );
    let info = read_info(&wav).expect("valid container");
    assert_eq!(info.artist, "");
    assert_eq!(info.comment, "");
}

#[test]
fn test_read_info_odd_length_metadata_is_word_aligned() {
    // Even-length text + NUL = odd stored size, forcing a pad byte before
    // the next sub-chunk
    let metadata = WavMetadata {
        artist: "ab".to_string(),
        name: "capture".to_string(),
        ..Default::default()
    };
    let wav = write_wav_to_vec(&WavFormat::pcm16(1, 100), &metadata, &pcm_bytes(&[7]));
    let info = read_info(&wav).expect("valid container");
    assert_eq!(info.artist, "ab");
    assert_eq!(info.name, "capture");
}

// =========================================================================
// Format failures
// =========================================================================

#[test]
fn test_read_info_rejects_short_buffer() {
    assert_eq!(read_info(&[]), None);
    assert_eq!(read_info(b"RIFF"), None);
}

#[test]
fn test_read_info_rejects_bad_magic() {
    let mut wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0]),
    );
    wav[0..4].copy_from_slice(b"JUNK");
    assert_eq!(read_info(&wav), None);

    let mut wav2 = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0]),
    );
    wav2[8..12].copy_from_slice(b"AVI ");
    assert_eq!(read_info(&wav2), None);
}

#[test]
fn test_read_info_rejects_non_pcm_format_code() {
    let mut wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0]),
    );
    // format code lives at offset 20 (fmt body start)
    wav[20..22].copy_from_slice(&3u16.to_le_bytes()); // IEEE float
    assert_eq!(read_info(&wav), None);
}

#[test]
fn test_read_info_rejects_missing_data_chunk() {
    let wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0]),
    );
    // Keep RIFF header + fmt chunk only
    assert_eq!(read_info(&wav[..36]), None);
}

#[test]
fn test_read_info_keeps_declared_frames_on_truncated_data() {
    // Truncating the data chunk body does not change the declared count;
    // clamping is the sample source's decision
    let wav = write_wav_to_vec(
        &WavFormat::pcm16(1, 100),
        &WavMetadata::default(),
        &pcm_bytes(&[0, 1, 2, 3]),
    );
    let info = read_info(&wav[..wav.len() - 4]).expect("header still decodes");
    assert_eq!(info.num_samples, 4);
}

#[test]
fn test_read_info_skips_unknown_chunks() {
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes()); // size patched below
    wav.extend_from_slice(b"WAVE");
    // Unknown chunk before fmt
    wav.extend_from_slice(b"junk");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[1, 2, 3, 0]); // odd size + pad
    let tail = write_wav_to_vec(
        &WavFormat::pcm16(2, 50),
        &WavMetadata::default(),
        &pcm_bytes(&[5, 6]),
    );
    wav.extend_from_slice(&tail[12..]);
    let total = wav.len() as u32 - 8;
    wav[4..8].copy_from_slice(&total.to_le_bytes());

    let info = read_info(&wav).expect("valid container");
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 50);
    assert_eq!(info.num_samples, 1);
}

// =========================================================================
// Bounded metadata text
// =========================================================================

#[test]
fn test_bounded_text_stops_at_nul() {
    assert_eq!(bounded_text(b"hello\0garbage"), "hello");
}

#[test]
fn test_bounded_text_truncates_long_fields() {
    let long = vec![b'x'; METADATA_MAX + 100];
    let text = bounded_text(&long);
    assert_eq!(text.len(), METADATA_MAX);
}

#[test]
fn test_bounded_text_truncates_on_char_boundary() {
    // Fill right up to the limit, then place a multi-byte char across it
    let mut raw = vec![b'x'; METADATA_MAX - 1];
    raw.extend_from_slice("é".as_bytes()); // 2 bytes, straddles the cut
    let text = bounded_text(&raw);
    assert!(text.len() <= METADATA_MAX);
    assert!(text.is_char_boundary(text.len()));
    assert_eq!(&text[..METADATA_MAX - 1], "x".repeat(METADATA_MAX - 1));
}

#[test]
fn test_bounded_text_lossy_decodes_invalid_utf8() {
    let text = bounded_text(&[b'o', b'k', 0xff, b'!']);
    assert!(text.starts_with("ok"));
    assert!(text.ends_with('!'));
}

// =========================================================================
// Writer round trip
// =========================================================================

#[test]
fn test_writer_reader_round_trip() {
    let metadata = WavMetadata {
        artist: "unit".to_string(),
        name: "rt".to_string(),
        comment: "line one\nline two".to_string(),
        date: "2021-06-15".to_string(),
    };
    let samples: Vec<i16> = (0..64).map(|i| i * 3 - 96).collect();
    let wav = write_wav_to_vec(&WavFormat::pcm16(4, 1600), &metadata, &pcm_bytes(&samples));

    let info = read_info(&wav).expect("valid container");
    assert_eq!(info.channels, 4);
    assert_eq!(info.sample_rate, 1600);
    assert_eq!(info.num_samples, 16);
    assert_eq!(info.artist, "unit");
    assert_eq!(info.name, "rt");
    assert_eq!(info.comment, "line one\nline two");
    assert_eq!(info.date, "2021-06-15");

    // Sample bytes land exactly at data_offset
    let data = &wav[info.data_offset..info.data_offset + 128];
    assert_eq!(data, pcm_bytes(&samples).as_slice());
}

#[test]
fn test_declared_riff_size_matches_file() {
    let metadata = WavMetadata {
        comment: "odd".to_string(),
        ..Default::default()
    };
    let wav = write_wav_to_vec(&WavFormat::pcm16(1, 100), &metadata, &pcm_bytes(&[1, 2]));
    let declared = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]) as usize;
    assert_eq!(declared + 8, wav.len());
}
