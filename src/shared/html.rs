//! HTML escaping for server-rendered pages.

use std::borrow::Cow;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Escape an optional value, rendering `None` as an empty string.
pub fn escape_opt(input: Option<&str>) -> Cow<'_, str> {
    input.map(escape).unwrap_or(Cow::Borrowed(""))
}
