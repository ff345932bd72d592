// Copy and download of the displayed response.

use crate::error::ExportError;
use crate::model::Mode;
use chrono::NaiveDate;

/// `edugenius-<tab>-<YYYY-MM-DD>.txt`
pub fn download_file_name(mode: Mode, date: NaiveDate) -> String {
    format!("edugenius-{}-{}.txt", mode.tab_id(), date.format("%Y-%m-%d"))
}

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(_ctx: &egui::Context, text: &str) -> Result<(), ExportError> {
    if text.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ExportError::Clipboard(e.to_string()))
}

// The browser clipboard is reached through egui's web integration.
#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(ctx: &egui::Context, text: &str) -> Result<(), ExportError> {
    if text.is_empty() {
        return Err(ExportError::Empty);
    }
    ctx.copy_text(text.to_string());
    Ok(())
}

/// Asks where to save, then writes the file. `Ok(None)` when the user cancels.
#[cfg(not(target_arch = "wasm32"))]
pub fn download(
    file_name: &str,
    text: &str,
) -> Result<Option<std::path::PathBuf>, ExportError> {
    if text.is_empty() {
        return Err(ExportError::Empty);
    }
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(file_name)
        .add_filter("text", &["txt"])
        .save_file()
    else {
        return Ok(None);
    };
    std::fs::write(&path, text)?;
    log::info!("Saved response to {}", path.display());
    Ok(Some(path))
}

#[cfg(target_arch = "wasm32")]
pub fn download(
    file_name: &str,
    text: &str,
) -> Result<Option<std::path::PathBuf>, ExportError> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    if text.is_empty() {
        return Err(ExportError::Empty);
    }
    let fail = |what: &str, err: JsValue| ExportError::Browser(format!("{what}: {err:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("no body".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let props = BlobPropertyBag::new();
    props.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| fail("blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| fail("object url", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| fail("anchor", e))?
        .dyn_into()
        .map_err(|_| ExportError::Browser("anchor is not an <a>".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(|e| fail("append", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| fail("remove", e))?;
    Url::revoke_object_url(&url).map_err(|e| fail("revoke", e))?;

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_tab_and_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            download_file_name(Mode::Explanation, date),
            "edugenius-explain-2024-03-07.txt"
        );
        assert_eq!(
            download_file_name(Mode::Quiz, date),
            "edugenius-quiz-2024-03-07.txt"
        );
        assert_eq!(
            download_file_name(Mode::TeachingNotes, date),
            "edugenius-notes-2024-03-07.txt"
        );
    }

    #[test]
    fn empty_text_is_not_downloaded() {
        assert!(matches!(
            download("edugenius-quiz-2024-03-07.txt", ""),
            Err(ExportError::Empty)
        ));
    }
}
