//! Value types shared by the text codec and the typed frame layer.
//!
//! Both the wire command and the decoded text fields live in fixed-capacity
//! inline buffers: the grammar bounds every field width, so nothing here ever
//! allocates.

use core::fmt;

/// Leader byte of the extended data frame command (`T`).
pub const EXTENDED_FRAME_LEADER: u8 = b'T';
/// Width of the identifier field, in hex digits.
pub const IDENTIFIER_WIDTH: usize = 8;
/// Width of one payload byte, in hex digits.
pub const BYTE_WIDTH: usize = 2;
/// Largest identifier that fits in 29 bits.
pub const MAX_EXTENDED_ID: u32 = 0x1FFF_FFFF;
/// Largest data length code of a classic CAN frame.
pub const MAX_DLC: usize = 8;
/// Leader + identifier + length digit.
pub const MIN_COMMAND_LEN: usize = 1 + IDENTIFIER_WIDTH + 1;
/// A command carrying eight data bytes.
pub const MAX_COMMAND_LEN: usize = MIN_COMMAND_LEN + MAX_DLC * BYTE_WIDTH;

//==================================================================================WIRE_COMMAND
/// An extended-frame command exactly as the adapter expects it, e.g. `T000000012DEAD`.
///
/// Only the codec builds these, so the content is always valid uppercase ASCII.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WireCommand {
    len: usize,
    data: [u8; MAX_COMMAND_LEN],
}

impl WireCommand {
    pub(crate) const fn empty() -> Self {
        Self {
            len: 0,
            data: [0; MAX_COMMAND_LEN],
        }
    }

    /// Append ASCII bytes. Callers stay within `MAX_COMMAND_LEN`.
    #[inline]
    pub(crate) fn push(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        debug_assert!(end <= MAX_COMMAND_LEN, "command exceeds {MAX_COMMAND_LEN} bytes");
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    /// Number of characters in the command.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a command produced by the codec.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw ASCII bytes of the command.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The command as text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Debug for WireCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WireCommand").field(&self.as_str()).finish()
    }
}

impl fmt::Display for WireCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for WireCommand {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for WireCommand {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for WireCommand {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

//==================================================================================FRAME_FIELDS
/// The three text fields of an extended frame, normalized to uppercase.
///
/// Produced by [`decode`](crate::protocol::slcan::decode). Its fields can be
/// handed straight back to [`encode`](crate::protocol::slcan::encode).
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameFields {
    identifier: [u8; IDENTIFIER_WIDTH],
    length: u8,
    payload: [[u8; BYTE_WIDTH]; MAX_DLC],
}

impl FrameFields {
    /// Caller guarantees uppercase hex digits, a decimal `length` digit and
    /// `length` populated payload entries.
    pub(crate) const fn from_validated(
        identifier: [u8; IDENTIFIER_WIDTH],
        length: u8,
        payload: [[u8; BYTE_WIDTH]; MAX_DLC],
    ) -> Self {
        Self {
            identifier,
            length,
            payload,
        }
    }

    /// Identifier text, 8 uppercase hex digits.
    pub fn identifier(&self) -> &str {
        core::str::from_utf8(&self.identifier).unwrap_or_default()
    }

    /// Data length code as its single decimal digit.
    pub fn length(&self) -> &str {
        core::str::from_utf8(core::slice::from_ref(&self.length)).unwrap_or_default()
    }

    /// Number of payload bytes (0 to 8).
    pub fn dlc(&self) -> usize {
        usize::from(self.length.wrapping_sub(b'0')).min(MAX_DLC)
    }

    /// The `index`-th payload byte as 2 uppercase hex digits.
    pub fn byte(&self, index: usize) -> Option<&str> {
        if index >= self.dlc() {
            return None;
        }
        core::str::from_utf8(&self.payload[index]).ok()
    }

    /// Payload bytes in order, each as 2 uppercase hex digits.
    pub fn payload(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.payload[..self.dlc()]
            .iter()
            .map(|chunk| core::str::from_utf8(chunk).unwrap_or_default())
    }
}

struct PayloadText<'a>(&'a FrameFields);

impl fmt::Debug for PayloadText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.payload()).finish()
    }
}

impl fmt::Debug for FrameFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameFields")
            .field("identifier", &self.identifier())
            .field("length", &self.length())
            .field("payload", &PayloadText(self))
            .finish()
    }
}

//==================================================================================TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// A command filled to capacity keeps every byte.
    fn test_push_to_capacity() {
        let mut command = WireCommand::empty();
        command.push(b"T1FFFFFFF8");
        command.push(&[b'A'; MAX_DLC * BYTE_WIDTH]);
        assert_eq!(command.len(), MAX_COMMAND_LEN);
        assert_eq!(command.as_str(), "T1FFFFFFF8AAAAAAAAAAAAAAAA");
    }

    #[test]
    #[should_panic]
    /// Overflowing the buffer is a bug, never a silent truncation.
    fn test_push_past_capacity_panics() {
        let mut command = WireCommand::empty();
        command.push(&[b'0'; MAX_COMMAND_LEN]);
        command.push(b"0");
    }
}
