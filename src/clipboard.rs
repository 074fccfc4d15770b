use crate::errors::AppError;

/// Put `text` on the system clipboard, verbatim.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut ctx = copypasta_ext::try_context()
        .ok_or_else(|| AppError::Clipboard("no clipboard provider available".to_string()))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    tracing::debug!(chars = text.len(), "copied password to clipboard");
    Ok(())
}
