//! RIFF chunk walking and header decoding.

use super::info::{bounded_text, WavInfo};

/// Decodes the container header from a complete WAV file buffer.
///
/// Walks top-level RIFF chunks for `fmt `, `LIST INFO` and `data`,
/// word-aligning between chunks. Only uncompressed integer PCM is
/// accepted; any structural problem (bad magic, truncated or missing
/// `fmt `, non-PCM format code, missing `data`) is a format failure
/// reported as `None`. I/O failure is the caller's concern: by the time
/// this runs the file is fully in memory.
///
/// The `data` chunk is allowed to declare more bytes than the buffer
/// holds (capture devices that lose power mid-write leave such files);
/// the declared frame count is returned as-is and the caller decides how
/// to clamp it.
pub fn read_info(bytes: &[u8]) -> Option<WavInfo> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return None;
    }

    let mut info = WavInfo::default();
    let mut have_fmt = false;
    let mut data_bytes: Option<usize> = None;

    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let chunk_id = &bytes[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            bytes[pos + 4],
            bytes[pos + 5],
            bytes[pos + 6],
            bytes[pos + 7],
        ]) as usize;
        let body = pos + 8;

        match chunk_id {
            b"fmt " => {
                if chunk_size < 16 || body + 16 > bytes.len() {
                    return None;
                }
                let format_code = u16::from_le_bytes([bytes[body], bytes[body + 1]]);
                if format_code != 1 {
                    // Compressed or float formats are out of scope
                    return None;
                }
                info.channels = u16::from_le_bytes([bytes[body + 2], bytes[body + 3]]);
                info.sample_rate = u32::from_le_bytes([
                    bytes[body + 4],
                    bytes[body + 5],
                    bytes[body + 6],
                    bytes[body + 7],
                ]);
                let bits = u16::from_le_bytes([bytes[body + 14], bytes[body + 15]]);
                if bits == 0 || bits % 8 != 0 {
                    return None;
                }
                info.bytes_per_sample = bits / 8;
                have_fmt = true;
            }
            b"LIST" => {
                if chunk_size >= 4 && body + 4 <= bytes.len() && &bytes[body..body + 4] == b"INFO"
                {
                    let end = (body + chunk_size).min(bytes.len());
                    read_list_info(&bytes[body + 4..end], &mut info);
                }
            }
            b"data" => {
                info.data_offset = body;
                data_bytes = Some(chunk_size);
            }
            _ => {}
        }

        pos = body + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    let data_bytes = data_bytes?;
    if !have_fmt {
        return None;
    }
    let frame_bytes = info.frame_bytes();
    info.num_samples = if frame_bytes == 0 {
        0
    } else {
        data_bytes / frame_bytes
    };
    Some(info)
}

/// Walks `INFO` sub-chunks, storing the four recognized text fields.
fn read_list_info(body: &[u8], info: &mut WavInfo) {
    let mut pos = 0;
    while pos + 8 <= body.len() {
        let sub_id = &body[pos..pos + 4];
        let sub_size = u32::from_le_bytes([
            body[pos + 4],
            body[pos + 5],
            body[pos + 6],
            body[pos + 7],
        ]) as usize;
        let text_start = pos + 8;
        let text_end = (text_start + sub_size).min(body.len());
        let text = bounded_text(&body[text_start..text_end]);

        match sub_id {
            b"IART" => info.artist = text,
            b"INAM" => info.name = text,
            b"ICMT" => info.comment = text,
            b"ICRD" => info.date = text,
            _ => {}
        }

        pos = text_start + sub_size;
        if !sub_size.is_multiple_of(2) {
            pos += 1;
        }
    }
}
