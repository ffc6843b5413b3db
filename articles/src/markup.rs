//! Trusted boundary for turning catalog prose into HTML.
//!
//! Component templates escape interpolated text themselves. The only place
//! the app injects raw HTML is article prose, where backtick code spans are
//! rendered as `<code>`. That HTML is produced here and nowhere else.
//!
//! DESIGN
//! ======
//! The parser is used only to locate code spans. Everything outside them is
//! copied from the source text verbatim and passed through [`escape_html`],
//! so list markers, emphasis, entities, and backslashes read exactly as
//! authored.

use pulldown_cmark::{Event, Options, Parser};

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Escape `& < > " '` for use in element content or quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render one paragraph or key point as inline HTML (no wrapping element).
#[must_use]
pub fn inline_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut cursor = 0;
    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        let Event::Code(code) = event else {
            continue;
        };
        let Some(before) = text.get(cursor..range.start) else {
            continue;
        };
        out.push_str(&escape_html(before));
        out.push_str("<code>");
        out.push_str(&escape_html(&code));
        out.push_str("</code>");
        cursor = range.end;
    }
    out.push_str(&escape_html(text.get(cursor..).unwrap_or_default()));
    out
}
