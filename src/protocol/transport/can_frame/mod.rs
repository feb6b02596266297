//! Typed extended data frame and its conversion to and from the wire command.
use crate::core::{FrameFields, WireCommand, BYTE_WIDTH, EXTENDED_FRAME_LEADER, MAX_DLC};
use crate::error::FrameCodecError;
use crate::infra::codec::ascii::{hex_value, write_hex_upper};
use crate::protocol::slcan::decode;
use crate::protocol::transport::can_id::CanId;
use embedded_can::{Frame, Id};

#[derive(Clone, Copy, Debug, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Extended CAN data frame as integers and bytes.
///
/// Only [`CanFrame::new`] and the conversions from text build one, so `len`
/// never exceeds eight.
pub struct CanFrame {
    id: CanId,
    data: [u8; 8],
    len: usize,
}

impl CanFrame {
    /// Frame with the given payload. Fails above eight bytes.
    pub fn new(id: CanId, payload: &[u8]) -> Result<Self, FrameCodecError> {
        if payload.len() > MAX_DLC {
            return Err(FrameCodecError::FormatInvalid);
        }
        let mut data = [0u8; 8];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            id,
            data,
            len: payload.len(),
        })
    }

    /// Full 29-bit CAN identifier.
    #[inline]
    pub fn can_id(&self) -> CanId {
        self.id
    }

    /// Valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Canonical text fields of this frame.
    pub fn to_fields(&self) -> FrameFields {
        let mut bytes = [[0u8; BYTE_WIDTH]; MAX_DLC];
        for (slot, byte) in bytes.iter_mut().zip(self.payload()) {
            write_hex_upper(u32::from(*byte), slot);
        }
        FrameFields::from_validated(self.id.to_hex(), self.length_digit(), bytes)
    }

    /// Adapter command for this frame, e.g. `T000000012DEAD`.
    pub fn to_command(&self) -> WireCommand {
        let mut command = WireCommand::empty();
        command.push(&[EXTENDED_FRAME_LEADER]);
        command.push(&self.id.to_hex());
        command.push(&[self.length_digit()]);
        for byte in self.payload() {
            let mut text = [0u8; BYTE_WIDTH];
            write_hex_upper(u32::from(*byte), &mut text);
            command.push(&text);
        }
        command
    }

    /// Parse an adapter command with the strict decoder.
    pub fn from_command(command: &str) -> Result<Self, FrameCodecError> {
        Self::try_from(&decode(command)?)
    }

    #[inline]
    fn length_digit(&self) -> u8 {
        // len <= MAX_DLC
        b'0' + self.len as u8
    }
}

/// Frames are equal when they carry the same identifier and payload.
impl PartialEq for CanFrame {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.payload() == other.payload()
    }
}

impl From<&CanFrame> for FrameFields {
    fn from(frame: &CanFrame) -> Self {
        frame.to_fields()
    }
}

impl From<CanFrame> for FrameFields {
    fn from(frame: CanFrame) -> Self {
        frame.to_fields()
    }
}

impl TryFrom<&FrameFields> for CanFrame {
    type Error = FrameCodecError;

    fn try_from(fields: &FrameFields) -> Result<Self, Self::Error> {
        let raw = hex_value(fields.identifier().as_bytes()).ok_or(FrameCodecError::FormatInvalid)?;
        let mut data = [0u8; 8];
        for (slot, text) in data.iter_mut().zip(fields.payload()) {
            let value = hex_value(text.as_bytes()).ok_or(FrameCodecError::FormatInvalid)?;
            *slot = value as u8;
        }
        Self::new(CanId::new(raw)?, &data[..fields.dlc()])
    }
}

impl TryFrom<FrameFields> for CanFrame {
    type Error = FrameCodecError;

    fn try_from(fields: FrameFields) -> Result<Self, Self::Error> {
        Self::try_from(&fields)
    }
}

impl Frame for CanFrame {
    /// `None` for standard identifiers or more than eight bytes.
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        let id = CanId::try_from(id.into()).ok()?;
        CanFrame::new(id, data).ok()
    }

    /// Remote frames have no extended data frame command.
    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        true
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        self.id.into()
    }

    fn dlc(&self) -> usize {
        self.payload().len()
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
