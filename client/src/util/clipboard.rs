//! Clipboard access for copying answers.

/// Write `text` to the system clipboard.
///
/// Resolves once the browser has accepted (or refused) the write. Errors carry
/// a short reason suitable for logging.
#[cfg(feature = "hydrate")]
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let clipboard = window
        .navigator()
        .clipboard()
        .ok_or_else(|| "clipboard unavailable".to_owned())?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| format!("{err:?}"))
}

#[cfg(not(feature = "hydrate"))]
pub async fn copy_text(text: &str) -> Result<(), String> {
    let _ = text;
    Err("clipboard unavailable".to_owned())
}
