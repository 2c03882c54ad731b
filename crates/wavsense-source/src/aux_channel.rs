//! Auxiliary channel word codec.
//!
//! A designated auxiliary channel carries 16-bit words that multiplex
//! sensor readings and file metadata instead of raw audio. The layout,
//! MSB first:
//!
//! ```text
//! ncttttuu vvvvvvvv
//! n    = data not available on one or more channels
//! c    = clipping on one or more channels
//! tttt = type tag
//! uu   = metadata sub-type, or the two high bits of a 10-bit reading
//! v..v = metadata payload byte, or the low bits of a 10-bit reading
//! ```
//!
//! Tag `0000` selects metadata (sub-type picks the text field, the payload
//! byte carries one character of it across successive words); tags
//! `0001`-`0011` select a 10-bit sensor reading. Tags `0100`-`1111` are
//! reserved: they decode to [`AuxPayload::Unrecognized`] carrying the raw
//! tag and low bits, and re-encode bit-exactly, so unrecognized words
//! round-trip opaquely instead of being misread as sensor values.
//!
//! Encode and decode are pure bit packing with no I/O and no dependency
//! on the sample source lifecycle.

/// Data-not-available flag bit.
pub const AUX_UNAVAILABLE: u16 = 0x8000;
/// Clipping flag bit.
pub const AUX_CLIPPING: u16 = 0x4000;

const TAG_SHIFT: u16 = 10;
const TAG_MASK: u16 = 0x0f;
const SUBTYPE_SHIFT: u16 = 8;
const SUBTYPE_MASK: u16 = 0x03;
const VALUE_MASK: u16 = 0x03ff;

/// Which metadata text field a metadata word contributes a byte to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// Other comment text.
    OtherComment = 0,
    /// 'artist' file metadata.
    Artist = 1,
    /// 'title' file metadata.
    Title = 2,
    /// 'comment' file metadata.
    Comment = 3,
}

/// Which sensor a 10-bit reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// Battery level.
    Battery = 1,
    /// Light level.
    Light = 2,
    /// Temperature.
    Temperature = 3,
}

/// Decoded payload of an auxiliary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxPayload {
    /// One byte of a metadata text field.
    Metadata {
        /// Target text field.
        kind: MetadataKind,
        /// Encoded text byte.
        byte: u8,
    },
    /// A 10-bit sensor reading.
    Sensor {
        /// Source sensor.
        kind: SensorKind,
        /// Reading, 0..=1023.
        value: u16,
    },
    /// A reserved tag, preserved opaquely for forward compatibility.
    Unrecognized {
        /// Raw type tag, 4..=15.
        tag: u8,
        /// Raw low 10 bits, never reinterpreted as a sensor value.
        bits: u16,
    },
}

/// One decoded auxiliary channel word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxWord {
    /// Data not available on one or more channels this frame.
    pub unavailable: bool,
    /// Clipping on one or more channels this frame.
    pub clipping: bool,
    /// Tagged payload.
    pub payload: AuxPayload,
}

impl AuxWord {
    /// Creates a metadata word with both flags clear.
    pub fn metadata(kind: MetadataKind, byte: u8) -> Self {
        Self {
            unavailable: false,
            clipping: false,
            payload: AuxPayload::Metadata { kind, byte },
        }
    }

    /// Creates a sensor word with both flags clear. `value` is masked to
    /// 10 bits.
    pub fn sensor(kind: SensorKind, value: u16) -> Self {
        Self {
            unavailable: false,
            clipping: false,
            payload: AuxPayload::Sensor {
                kind,
                value: value & VALUE_MASK,
            },
        }
    }

    /// Unpacks a raw 16-bit auxiliary word. Total: every input decodes,
    /// with reserved tags landing in [`AuxPayload::Unrecognized`].
    pub fn decode(word: u16) -> Self {
        let tag = ((word >> TAG_SHIFT) & TAG_MASK) as u8;
        let payload = match tag {
            0 => {
                let kind = match (word >> SUBTYPE_SHIFT) & SUBTYPE_MASK {
                    0 => MetadataKind::OtherComment,
                    1 => MetadataKind::Artist,
                    2 => MetadataKind::Title,
                    _ => MetadataKind::Comment,
                };
                AuxPayload::Metadata {
                    kind,
                    byte: (word & 0xff) as u8,
                }
            }
            1 => AuxPayload::Sensor {
                kind: SensorKind::Battery,
                value: word & VALUE_MASK,
            },
            2 => AuxPayload::Sensor {
                kind: SensorKind::Light,
                value: word & VALUE_MASK,
            },
            3 => AuxPayload::Sensor {
                kind: SensorKind::Temperature,
                value: word & VALUE_MASK,
            },
            _ => AuxPayload::Unrecognized {
                tag,
                bits: word & VALUE_MASK,
            },
        };

        Self {
            unavailable: word & AUX_UNAVAILABLE != 0,
            clipping: word & AUX_CLIPPING != 0,
            payload,
        }
    }

    /// Packs back to the raw 16-bit word. Exact inverse of [`decode`],
    /// including unrecognized-tag words.
    ///
    /// [`decode`]: AuxWord::decode
    pub fn encode(&self) -> u16 {
        let mut word = 0u16;
        if self.unavailable {
            word |= AUX_UNAVAILABLE;
        }
        if self.clipping {
            word |= AUX_CLIPPING;
        }
        word | match self.payload {
            AuxPayload::Metadata { kind, byte } => {
                ((kind as u16) << SUBTYPE_SHIFT) | u16::from(byte)
            }
            AuxPayload::Sensor { kind, value } => {
                ((kind as u16) << TAG_SHIFT) | (value & VALUE_MASK)
            }
            AuxPayload::Unrecognized { tag, bits } => {
                ((u16::from(tag) & TAG_MASK) << TAG_SHIFT) | (bits & VALUE_MASK)
            }
        }
    }
}
