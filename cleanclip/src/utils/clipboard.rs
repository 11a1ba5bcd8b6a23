//! System clipboard access.
//!
//! Backed by `arboard` when the `clipboard` feature is enabled (the default).
//! Without it every call fails with a hint to use `--stdin` or `--input-file`.

use anyhow::Result;

/// Reads text from the clipboard; `None` when it holds no text.
#[cfg(feature = "clipboard")]
pub fn read_clipboard_text() -> Result<Option<String>> {
    use anyhow::{anyhow, Context};

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(anyhow!("Failed to read the clipboard: {e}")),
    }
}

/// Replaces the clipboard contents with `text`.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to write to the clipboard")?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
const UNAVAILABLE: &str =
    "Clipboard support is not available in this build; use --stdin or --input-file.";

#[cfg(not(feature = "clipboard"))]
pub fn read_clipboard_text() -> Result<Option<String>> {
    Err(anyhow::anyhow!(UNAVAILABLE))
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> Result<()> {
    Err(anyhow::anyhow!(UNAVAILABLE))
}
