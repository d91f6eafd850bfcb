//! CSS post-processing transforms applied after Sass compilation.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A text-to-text pass over compiled CSS.
pub trait CssTransform: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, css: String) -> String;
}

/// Properties that still need a `-webkit-` duplicate in supported browsers.
pub const WEBKIT_PROPERTIES: [&str; 4] = ["appearance", "backdrop-filter", "text-size-adjust", "user-select"];

/// Inserts a `-webkit-` prefixed copy ahead of each declaration whose
/// property is in [`WEBKIT_PROPERTIES`]. Works on expanded and compressed
/// output alike.
///
/// `{`, `;` and `}` only delimit declarations outside string literals,
/// comments and parentheses. A block that already declares the vendor copy
/// is left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Autoprefix;

impl CssTransform for Autoprefix {
    fn name(&self) -> &'static str {
        "autoprefix"
    }

    fn apply(&self, css: String) -> String {
        let parts = split_top_level(&css);
        let mut out = String::with_capacity(css.len() + css.len() / 16);
        let mut prev_delim = None;
        let mut block = 0;

        for (i, &(segment, delim)) in parts.iter().enumerate() {
            if prev_delim != Some(';') {
                block = i;
            }
            // Declarations sit between `{`/`;` and `;`/`}`.
            if matches!(prev_delim, Some('{' | ';')) && matches!(delim, Some(';' | '}')) {
                if let Some(property) = listed_property(segment) {
                    if !block_declares(&parts[block..], &format!("-webkit-{property}")) {
                        out.push_str(&vendor_copy(segment));
                    }
                }
            }
            out.push_str(segment);
            if let Some(c) = delim {
                out.push(c);
            }
            prev_delim = delim;
        }
        out
    }
}

/// Split on `{`, `;` and `}` that sit outside quotes, comments and parens.
/// The last part carries no delimiter.
fn split_top_level(css: &str) -> Vec<(&str, Option<char>)> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote = None;
    let mut escaped = false;
    let mut in_comment = false;
    let mut depth = 0usize;
    let mut chars = css.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if in_comment {
            if c == '*' && chars.next_if(|&(_, n)| n == '/').is_some() {
                in_comment = false;
            }
            continue;
        }
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '/' if chars.next_if(|&(_, n)| n == '*').is_some() => in_comment = true,
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '{' | ';' | '}' if depth == 0 => {
                parts.push((&css[start..i], Some(c)));
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push((&css[start..], None));
    parts
}

fn declared_property(segment: &str) -> Option<&str> {
    let (property, _) = segment.trim_start().split_once(':')?;
    Some(property.trim_end())
}

fn listed_property(segment: &str) -> Option<&'static str> {
    let property = declared_property(segment)?;
    WEBKIT_PROPERTIES.into_iter().find(|listed| listed.eq_ignore_ascii_case(property))
}

/// Whether the declaration block starting at `block[0]` declares `property`.
fn block_declares(block: &[(&str, Option<char>)], property: &str) -> bool {
    for &(segment, delim) in block {
        if declared_property(segment).is_some_and(|p| p.eq_ignore_ascii_case(property)) {
            return true;
        }
        if delim != Some(';') {
            break;
        }
    }
    false
}

fn vendor_copy(segment: &str) -> String {
    let decl = segment.trim_start();
    let indent = &segment[..segment.len() - decl.len()];
    format!("{indent}-webkit-{};", decl.trim_end())
}

/// Default post-processing chain.
pub fn default_transforms() -> Vec<Box<dyn CssTransform>> {
    vec![Box::new(Autoprefix)]
}
