//! Text codec for the bridge datagram.
//!
//! Wire format (one UDP datagram, ASCII, no header or length prefix):
//! ```text
//! x,y,pressed              (basic)
//! x,y,pressed,wheelDelta   (with wheel)
//! ```
//! All fields are decimal integers; `pressed` is `0` or `1`.  There is no
//! trailing delimiter and no escaping since every field is numeric.

use std::fmt::Write as _;

use thiserror::Error;

use crate::domain::state::LogicalFrame;

/// UDP port the peer firmware listens on.
pub const PEER_PORT: u16 = 4210;

/// Errors that can occur while decoding a datagram payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacketError {
    /// The payload is not ASCII text.
    #[error("payload is not ASCII text")]
    NotAscii,

    /// The payload does not have three or four comma-separated fields.
    #[error("expected 3 or 4 comma-separated fields, got {0}")]
    FieldCount(usize),

    /// A field could not be parsed as the expected integer.
    #[error("field {index} is not a valid value: '{value}'")]
    InvalidField { index: usize, value: String },
}

/// Which of the two payload layouts to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketFormat {
    /// `x,y,pressed` – the wheel is not tracked.
    Basic,
    /// `x,y,pressed,wheelDelta`.
    WithWheel,
}

impl PacketFormat {
    /// Number of comma-separated fields in this layout.
    pub fn field_count(self) -> usize {
        match self {
            PacketFormat::Basic => 3,
            PacketFormat::WithWheel => 4,
        }
    }

    /// `true` when the payload includes the wheel delta.
    pub fn carries_wheel(self) -> bool {
        self == PacketFormat::WithWheel
    }
}

/// Renders a frame as the ASCII payload for one datagram.
///
/// # Examples
///
/// ```rust
/// use mouse_bridge_core::{encode_frame, LogicalFrame, PacketFormat};
///
/// let frame = LogicalFrame { x: 25, y: 22, pressed: true, wheel_delta: -2 };
/// assert_eq!(encode_frame(&frame, PacketFormat::WithWheel), "25,22,1,-2");
/// assert_eq!(encode_frame(&frame, PacketFormat::Basic), "25,22,1");
/// ```
pub fn encode_frame(frame: &LogicalFrame, format: PacketFormat) -> String {
    let mut out = String::with_capacity(24);
    // Writing into a String cannot fail.
    let _ = write!(out, "{},{},{}", frame.x, frame.y, u8::from(frame.pressed));
    if format.carries_wheel() {
        let _ = write!(out, ",{}", frame.wheel_delta);
    }
    out
}

/// Parses a datagram payload back into a frame.
///
/// A basic (3-field) payload decodes with `wheel_delta = 0`.  The returned
/// [`PacketFormat`] reports which layout was seen.
///
/// # Errors
///
/// Returns [`PacketError`] if the payload is not ASCII, has the wrong number
/// of fields, or contains a field that is not a valid integer.
pub fn decode_packet(bytes: &[u8]) -> Result<(LogicalFrame, PacketFormat), PacketError> {
    if !bytes.is_ascii() {
        return Err(PacketError::NotAscii);
    }
    // ASCII is valid UTF-8.
    let text = std::str::from_utf8(bytes).map_err(|_| PacketError::NotAscii)?;
    let fields: Vec<&str> = text.split(',').collect();

    let format = [PacketFormat::Basic, PacketFormat::WithWheel]
        .into_iter()
        .find(|format| format.field_count() == fields.len())
        .ok_or(PacketError::FieldCount(fields.len()))?;

    let x = parse_field::<u16>(&fields, 0)?;
    let y = parse_field::<u16>(&fields, 1)?;
    let pressed = match fields[2] {
        "0" => false,
        "1" => true,
        other => {
            return Err(PacketError::InvalidField {
                index: 2,
                value: other.to_string(),
            })
        }
    };
    let wheel_delta = if format.carries_wheel() {
        parse_field::<i32>(&fields, 3)?
    } else {
        0
    };

    Ok((
        LogicalFrame {
            x,
            y,
            pressed,
            wheel_delta,
        },
        format,
    ))
}

fn parse_field<T: std::str::FromStr>(fields: &[&str], index: usize) -> Result<T, PacketError> {
    fields[index]
        .parse()
        .map_err(|_| PacketError::InvalidField {
            index,
            value: fields[index].to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
