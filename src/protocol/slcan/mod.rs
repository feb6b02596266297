//! Text codec for the slcan extended data frame command.
//!
//! ```text
//! T IIIIIIII N DD DD ... DD
//! ```
//!
//! `T` is the leader, `IIIIIIII` the 29-bit identifier as 8 hex digits, `N` the
//! data length code (0 to 8) and each `DD` one payload byte. Input hex is
//! accepted in either case, output is always uppercase. Any deviation from the
//! grammar rejects the whole command with [`FrameCodecError::FormatInvalid`].
use core::str::FromStr;

use crate::core::{
    FrameFields, WireCommand, BYTE_WIDTH, EXTENDED_FRAME_LEADER, IDENTIFIER_WIDTH, MAX_DLC,
    MAX_EXTENDED_ID, MIN_COMMAND_LEN,
};
use crate::error::FrameCodecError;
use crate::infra::codec::ascii::{
    decimal_value, hex_value, is_decimal_field, is_hex_field, upper_into,
};

//==================================================================================ENCODE
/// Build the adapter command for a frame given as text fields.
///
/// Every field is validated before anything is written:
/// - `identifier`: exactly 8 hex digits, value at most `0x1FFFFFFF`
/// - `length`: exactly one decimal digit `n` in `0..=8`
/// - `payload`: exactly `n` items of 2 hex digits each
///
/// ```
/// use canable_codec::protocol::slcan::encode;
///
/// let command = encode("00000001", "2", ["de", "ad"]).unwrap();
/// assert_eq!(command.as_str(), "T000000012DEAD");
/// ```
pub fn encode<I>(identifier: &str, length: &str, payload: I) -> Result<WireCommand, FrameCodecError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let identifier = parse_identifier(identifier.as_bytes())?;
    let (length_digit, dlc) = parse_length(length.as_bytes())?;

    let mut bytes = [[0u8; BYTE_WIDTH]; MAX_DLC];
    let mut count = 0;
    for item in payload {
        if count == dlc {
            return Err(reject("payload count"));
        }
        bytes[count] = parse_byte(item.as_ref().as_bytes())?;
        count += 1;
    }
    if count != dlc {
        return Err(reject("payload count"));
    }

    let mut command = WireCommand::empty();
    command.push(&[EXTENDED_FRAME_LEADER]);
    command.push(&identifier);
    command.push(&[length_digit]);
    for byte in &bytes[..dlc] {
        command.push(byte);
    }
    Ok(command)
}

//==================================================================================DECODE
/// Parse an adapter command into its normalized text fields, requiring the `T` leader.
///
/// Shorthand for `Decoder::new().decode(command)`.
///
/// ```
/// use canable_codec::protocol::slcan::decode;
///
/// let fields = decode("T000000012dead").unwrap();
/// assert_eq!(fields.identifier(), "00000001");
/// assert_eq!(fields.length(), "2");
/// assert!(fields.payload().eq(["DE", "AD"]));
/// ```
pub fn decode(command: &str) -> Result<FrameFields, FrameCodecError> {
    Decoder::new().decode(command)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Configurable command parser.
///
/// By default only the literal `T` leader is accepted. Some adapters' host
/// software never looked at the leader; `accept_any_leader(true)` reproduces
/// that and consumes whatever single character comes first.
pub struct Decoder {
    any_leader: bool,
}

impl Decoder {
    /// Strict decoder: the leader must be `T`.
    pub const fn new() -> Self {
        Self { any_leader: false }
    }

    /// Skip the leader check and consume any single leading character.
    pub const fn accept_any_leader(mut self, accept: bool) -> Self {
        self.any_leader = accept;
        self
    }

    /// Run the five extraction stages in order: leader, identifier, length,
    /// payload count, payload bytes. The first failing stage ends the call.
    pub fn decode(&self, command: &str) -> Result<FrameFields, FrameCodecError> {
        let bytes = command.as_bytes();
        if bytes.len() < MIN_COMMAND_LEN {
            return Err(reject("command length"));
        }

        let leader_len = match command.chars().next() {
            Some(c) if c == char::from(EXTENDED_FRAME_LEADER) => 1,
            Some(c) if self.any_leader => c.len_utf8(),
            _ => return Err(reject("leader")),
        };
        let rest = &bytes[leader_len..];
        if rest.len() < IDENTIFIER_WIDTH + 1 {
            return Err(reject("command length"));
        }

        let (id_field, rest) = rest.split_at(IDENTIFIER_WIDTH);
        let identifier = parse_identifier(id_field)?;

        let (length_field, rest) = rest.split_at(1);
        let (length_digit, dlc) = parse_length(length_field)?;

        if rest.len() != dlc * BYTE_WIDTH {
            return Err(reject("payload count"));
        }

        let mut payload = [[0u8; BYTE_WIDTH]; MAX_DLC];
        for (slot, chunk) in payload.iter_mut().zip(rest.chunks_exact(BYTE_WIDTH)) {
            *slot = parse_byte(chunk)?;
        }

        Ok(FrameFields::from_validated(identifier, length_digit, payload))
    }
}

impl FromStr for FrameFields {
    type Err = FrameCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

//==================================================================================FIELDS
fn parse_identifier(field: &[u8]) -> Result<[u8; IDENTIFIER_WIDTH], FrameCodecError> {
    if field.len() != IDENTIFIER_WIDTH {
        return Err(reject("identifier width"));
    }
    match hex_value(field) {
        Some(value) if value <= MAX_EXTENDED_ID => {
            let mut out = [0u8; IDENTIFIER_WIDTH];
            upper_into(&mut out, field);
            Ok(out)
        }
        _ => Err(reject("identifier value")),
    }
}

/// Returns the validated digit and its value.
fn parse_length(field: &[u8]) -> Result<(u8, usize), FrameCodecError> {
    if field.len() != 1 || !is_decimal_field(field) {
        return Err(reject("length width"));
    }
    let digit = field[0];
    match decimal_value(digit).map(usize::from) {
        Some(dlc) if dlc <= MAX_DLC => Ok((digit, dlc)),
        _ => Err(reject("length value")),
    }
}

fn parse_byte(field: &[u8]) -> Result<[u8; BYTE_WIDTH], FrameCodecError> {
    if field.len() != BYTE_WIDTH || !is_hex_field(field) {
        return Err(reject("payload byte"));
    }
    let mut out = [0u8; BYTE_WIDTH];
    upper_into(&mut out, field);
    Ok(out)
}

#[inline]
fn reject(_stage: &str) -> FrameCodecError {
    #[cfg(feature = "defmt")]
    defmt::trace!("slcan frame rejected at {=str}", _stage);
    FrameCodecError::FormatInvalid
}
