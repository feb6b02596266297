//! `canable-codec` library: the text command that slcan-style USB-to-CAN
//! adapters (the CANable family) use to transmit and report extended data
//! frames, in a `no_std` environment.
//!
//! ```text
//! T IIIIIIII N DD ... DD      e.g. T000000012DEAD
//! ```
//!
//! The codec works on one already isolated command string. Serial transport,
//! line framing and adapter configuration belong to the caller.
#![no_std]
//==================================================================================
/// Wire command buffer, decoded text fields, and grammar constants.
pub mod core;
/// The single `FormatInvalid` outcome shared by every operation.
pub mod error;
/// Low-level ASCII field helpers.
pub mod infra;
/// The extended-frame command codec and the typed frame layer.
pub mod protocol;
//==================================================================================
pub use crate::core::{FrameFields, WireCommand};
pub use crate::error::FrameCodecError;
pub use crate::protocol::slcan::{decode, encode, Decoder};
pub use crate::protocol::transport::{can_frame::CanFrame, can_id::CanId};
