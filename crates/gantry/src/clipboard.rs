//! System clipboard access

use arboard::Clipboard;
use gantry_core::CodecError;

use crate::codec::Direction;

/// Clipboard operations (allows mocking in tests)
pub trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String, CodecError>;
    fn set_text(&mut self, text: &str) -> Result<(), CodecError>;
}

/// Real clipboard implementation using arboard
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, CodecError> {
        let clipboard = Clipboard::new().map_err(|e| CodecError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String, CodecError> {
        self.clipboard
            .get_text()
            .map_err(|e| CodecError::Clipboard(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), CodecError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| CodecError::Clipboard(e.to_string()))
    }
}

/// Input and output of a codec run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    pub input: String,
    pub output: String,
}

/// Encode or decode `input` (or the clipboard contents when absent) and
/// leave the result on the clipboard.
pub fn transcode(
    direction: Direction,
    input: Option<&str>,
    clipboard: &mut dyn ClipboardProvider,
) -> Result<Transcoded, CodecError> {
    let input = match input.filter(|s| !s.is_empty()) {
        Some(text) => text.to_string(),
        None => clipboard.get_text()?,
    };

    if input.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let output = direction.apply(&input)?;
    clipboard.set_text(&output)?;

    Ok(Transcoded { input, output })
}
