//! Typed representation of an extended CAN data frame: the 29-bit identifier
//! and the frame itself, with `embedded-can` interoperability.

pub mod can_frame;
pub mod can_id;
