//! Error definitions shared across library modules.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failure to encode or decode an extended-frame command.
///
/// Every grammar violation collapses into one outcome. The enum leaves room for
/// finer-grained reasons without breaking callers that match on it.
pub enum FrameCodecError {
    /// A field has the wrong width or character class, a value is out of
    /// range, or the payload count does not match the data length code.
    #[error("Invalid extended frame format")]
    FormatInvalid,
}
