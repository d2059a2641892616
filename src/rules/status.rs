//! Response bodies for block decisions.
//!
//! Only codes listed in [`STATUS_MESSAGES`] get a body. Every other code is
//! answered with an empty body; there is deliberately no fallback to the
//! standard reason phrases.

use thiserror::Error;

/// Known status code → response body.
pub const STATUS_MESSAGES: &[(u32, &str)] = &[(404, "404 page not found")];

/// The status code has no entry in [`STATUS_MESSAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no status message for code {0}")]
pub struct UnknownStatusMessage(pub u32);

/// Look up the body for a status code.
pub fn lookup_status_message(code: u32) -> Result<&'static str, UnknownStatusMessage> {
    STATUS_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .ok_or(UnknownStatusMessage(code))
}
