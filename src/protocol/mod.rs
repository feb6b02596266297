//! slcan command codec plus the typed CAN frame it converts to and from.
pub mod slcan;
pub mod transport;
