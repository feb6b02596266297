//! Validated 29-bit extended CAN identifier.
use crate::core::{IDENTIFIER_WIDTH, MAX_EXTENDED_ID};
use crate::error::FrameCodecError;
use crate::infra::codec::ascii::write_hex_upper;
use embedded_can::{ExtendedId, Id};

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Extended CAN identifier. The wrapped value never exceeds `0x1FFFFFFF`.
pub struct CanId(u32);

impl CanId {
    /// Lowest identifier.
    pub const ZERO: CanId = CanId(0);
    /// Highest 29-bit identifier.
    pub const MAX: CanId = CanId(MAX_EXTENDED_ID);

    /// Wraps `raw`, rejecting anything above 29 bits.
    pub const fn new(raw: u32) -> Result<Self, FrameCodecError> {
        if raw > MAX_EXTENDED_ID {
            return Err(FrameCodecError::FormatInvalid);
        }
        Ok(Self(raw))
    }

    /// Raw identifier value.
    #[inline]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    /// Canonical text form: 8 uppercase hex digits, zero padded.
    pub fn to_hex(&self) -> [u8; IDENTIFIER_WIDTH] {
        let mut out = [0u8; IDENTIFIER_WIDTH];
        write_hex_upper(self.0, &mut out);
        out
    }
}

impl TryFrom<u32> for CanId {
    type Error = FrameCodecError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<CanId> for u32 {
    fn from(id: CanId) -> Self {
        id.0
    }
}

impl From<ExtendedId> for CanId {
    fn from(id: ExtendedId) -> Self {
        // ExtendedId guarantees the 29-bit range.
        Self(id.as_raw())
    }
}

impl From<CanId> for ExtendedId {
    fn from(id: CanId) -> Self {
        ExtendedId::new(id.0).unwrap_or(ExtendedId::MAX)
    }
}

impl From<CanId> for Id {
    fn from(id: CanId) -> Self {
        Id::Extended(id.into())
    }
}

impl TryFrom<Id> for CanId {
    type Error = FrameCodecError;

    /// Standard (11-bit) identifiers have no extended-frame command.
    fn try_from(id: Id) -> Result<Self, Self::Error> {
        match id {
            Id::Extended(ext) => Ok(ext.into()),
            Id::Standard(_) => Err(FrameCodecError::FormatInvalid),
        }
    }
}
