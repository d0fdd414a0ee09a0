use crate::domain::AppError;

use super::TemplateId;

pub const MEMEGEN_IMAGES_BASE: &str = "https://api.memegen.link/images";

/// Returned when no valid caption set could be generated.
pub const FALLBACK_URL: &str = "https://api.memegen.link/images/sadfrog/meme--bot/failed_again.png";

/// Escape caption text for a memegen.link path segment.
///
/// Each input character is mapped once, so escape output is never re-escaped
/// (`_` always becomes `__`, and the `_` produced for a space stays single).
pub fn escape_caption(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match ch {
            '_' => escaped.push_str("__"),
            '-' => escaped.push_str("--"),
            ' ' => escaped.push('_'),
            '?' => escaped.push_str("~q"),
            '&' => escaped.push_str("~a"),
            '%' => escaped.push_str("~p"),
            '#' => escaped.push_str("~h"),
            '/' => escaped.push_str("~s"),
            '\\' => escaped.push_str("~b"),
            '<' => escaped.push_str("~l"),
            '>' => escaped.push_str("~g"),
            '"' => escaped.push_str("''"),
            '\n' => escaped.push_str("~n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Build the image URL for a template id and its captions.
pub fn encode<S: AsRef<str>>(template_id: &str, captions: &[S]) -> Result<String, AppError> {
    let id: TemplateId = template_id.parse()?;
    encode_captions(id, captions)
}

/// Build the image URL for an already-parsed template id.
pub fn encode_captions<S: AsRef<str>>(id: TemplateId, captions: &[S]) -> Result<String, AppError> {
    let expected = id.caption_slot_count();
    if captions.len() != expected {
        return Err(AppError::SlotCountMismatch {
            template: id.to_string(),
            expected,
            actual: captions.len(),
        });
    }

    Ok(build_url(id, captions))
}

/// Join escaped captions into the image URL without checking the slot count.
pub(crate) fn build_url<S: AsRef<str>>(id: TemplateId, captions: &[S]) -> String {
    let path = captions.iter().map(|c| escape_caption(c.as_ref())).collect::<Vec<_>>().join("/");
    format!("{}/{}/{}.png", MEMEGEN_IMAGES_BASE, id, path)
}
