use crate::core::SearchError;

/// Current clipboard text, trimmed. An empty clipboard is an invalid argument
/// since there is nothing to search for.
pub fn read_clipboard_text() -> Result<String, SearchError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|error| {
        SearchError::Clipboard(format!("Failed to initialize clipboard: {error}"))
    })?;

    let text = clipboard
        .get_text()
        .map_err(|error| SearchError::Clipboard(format!("Failed to read clipboard: {error}")))?;

    clean_clipboard_text(&text)
}

pub fn clean_clipboard_text(text: &str) -> Result<String, SearchError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SearchError::InvalidArgument("clipboard is empty".to_string()));
    }
    Ok(text.to_string())
}
