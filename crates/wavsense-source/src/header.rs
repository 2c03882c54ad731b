//! Capture directive parsing over the WAV comment metadata field.
//!
//! Capture devices embed acquisition parameters as newline-separated
//! `Key:value` lines inside the container's otherwise free-text comment
//! field. Two directives are recognized:
//!
//! - `Time:<timestamp>` - capture start time, handed verbatim to
//!   [`crate::timestamp::parse`]
//! - `Scale-<N>:<number>` - physical-unit scale factor for channel `N`
//!   (1-based, digits `1`-`9` only), stored as `<number> / 32768.0`
//!
//! Unrecognized lines are ignored; unresolved directives downgrade to
//! defaults with a logged warning so that captures predating the directive
//! convention still load.

use log::{info, warn};

use crate::{timestamp, MAX_CHANNELS};

/// Maximum number of comment lines processed; additional lines are
/// silently ignored.
pub const MAX_COMMENT_LINES: usize = 32;

/// Directives resolved from a comment field.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentHeader {
    /// Capture start, seconds since the Unix epoch; `0.0` when unresolved.
    pub start_time: f64,
    /// Whether a `Time:` directive parsed to a positive instant.
    pub parsed_time: bool,
    /// Per-channel scale factors; `1.0` where unresolved.
    pub scale: [f32; MAX_CHANNELS],
    /// Which channels resolved a positive `Scale-<N>:` directive.
    pub parsed_scale: [bool; MAX_CHANNELS],
}

impl Default for CommentHeader {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            parsed_time: false,
            scale: [1.0; MAX_CHANNELS],
            parsed_scale: [false; MAX_CHANNELS],
        }
    }
}

/// Parses capture directives out of a comment field.
///
/// `num_channels` is the channel count of the file being opened; it bounds
/// which `Scale-<N>:` directives may be stored and which unresolved-scale
/// warnings are emitted. Missing or malformed directives are never errors.
pub fn parse_comment(comment: &str, num_channels: usize) -> CommentHeader {
    let mut header = CommentHeader::default();

    for line in comment.split('\n').take(MAX_COMMENT_LINES) {
        if let Some(rest) = line.strip_prefix("Time:") {
            let time = timestamp::parse(rest);
            info!("Time: {}", timestamp::format(time));
            if time > 0.0 {
                header.start_time = time;
                header.parsed_time = true;
            }
        } else if let Some((channel, rest)) = scale_directive(line) {
            let value: f64 = rest.trim().parse().unwrap_or(0.0);
            if channel >= num_channels {
                warn!(
                    "'Scale-{}' names a channel beyond the file's {} channels; ignoring",
                    channel + 1,
                    num_channels
                );
                continue;
            }
            let scale = (value / 32768.0) as f32;
            info!(
                "Scale-{}: {} (scale[{}] = {})",
                channel + 1,
                value,
                channel,
                scale
            );
            if scale > 0.0 {
                header.scale[channel] = scale;
                header.parsed_scale[channel] = true;
            }
        }
    }

    if !header.parsed_time {
        warn!("didn't successfully parse a 'Time' header (using zero)");
    }
    for channel in 0..num_channels.min(MAX_CHANNELS) {
        if !header.parsed_scale[channel] {
            warn!(
                "didn't successfully parse a 'Scale-{}' header (using default)",
                channel + 1
            );
        }
    }

    header
}

/// Matches `Scale-<digit 1-9>:<rest>`, returning the zero-based channel
/// index and the value text. Anything else (`Scale-0:`, `Scale-:`,
/// `Scale-10:`) does not match.
fn scale_directive(line: &str) -> Option<(usize, &str)> {
    let rest = line.strip_prefix("Scale-")?;
    let digit = *rest.as_bytes().first()?;
    if !(b'1'..=b'9').contains(&digit) {
        return None;
    }
    let value = rest[1..].strip_prefix(':')?;
    Some(((digit - b'1') as usize, value))
}
