//! Entry document rendering.
//!
//! `public/index.html` is a template with a single placeholder for the
//! identity platform client id. It is rendered once at startup and served for
//! `/` and for every path the history-API fallback catches.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

pub const CLIENT_ID_PLACEHOLDER: &str = "{{SIGNIN_CLIENT_ID}}";

/// Substitute the client id (HTML-attribute escaped) into the template.
pub fn render_document(template: &str, client_id: Option<&str>) -> String {
    template.replace(CLIENT_ID_PLACEHOLDER, &escape_attr(client_id.unwrap_or_default()))
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
