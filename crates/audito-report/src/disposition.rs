//! `Content-Disposition` header for downloaded reports.
//!
//! The filename comes from the audit name, which is user-controlled. Control
//! characters (CR/LF included), quotes, backslashes and path separators are
//! removed so the name can neither break out of the header nor name a path.
//! Non-ASCII names get an RFC 6266 `filename*` parameter next to an ASCII
//! fallback.

/// Used when the audit has no usable name.
pub const DEFAULT_FILENAME_STEM: &str = "informe";

/// The sanitized `<stem>.pdf` filename for an audit name.
#[must_use]
pub fn attachment_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\' | '/'))
        .collect();
    let stem = stem.trim();
    if stem.is_empty() {
        format!("{DEFAULT_FILENAME_STEM}.pdf")
    } else {
        format!("{stem}.pdf")
    }
}

/// The full header value, e.g. `attachment; filename="Q1 Review.pdf"`.
#[must_use]
pub fn content_disposition(name: &str) -> String {
    let filename = attachment_filename(name);
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(&filename)
    )
}
