//! Declarative route table.
//!
//! DESIGN
//! ======
//! Routes are an ordered list of `(PathMatch, T)` pairs evaluated
//! first-match-wins. Matching is ASCII case-insensitive, ignores a trailing
//! slash, and ignores any query string or fragment. A path matching no entry
//! resolves to `None`; the shell renders nothing for it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// How a route pattern is compared against the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathMatch {
    /// The whole path must equal the pattern.
    Exact(&'static str),
    /// The path must equal the pattern or continue below it with `/`.
    /// `/contact/` matches `/contact`, `/contact/` and `/contact/form`,
    /// but not `/contacts`.
    Prefix(&'static str),
}

impl PathMatch {
    /// Whether `path` satisfies this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path = trim_trailing_slash(normalize_path(path));
        match *self {
            Self::Exact(pattern) => path.eq_ignore_ascii_case(trim_trailing_slash(pattern)),
            Self::Prefix(pattern) => {
                let base = trim_trailing_slash(pattern);
                if base == "/" {
                    return true;
                }
                let Some(head) = path.get(..base.len()) else {
                    return false;
                };
                head.eq_ignore_ascii_case(base) && path[base.len()..].chars().next().is_none_or(|c| c == '/')
            }
        }
    }
}

/// Ordered route table mapping path patterns to handlers.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable<'a, T> {
    routes: &'a [(PathMatch, T)],
}

impl<'a, T> RouteTable<'a, T> {
    pub const fn new(routes: &'a [(PathMatch, T)]) -> Self {
        Self { routes }
    }

    /// First entry whose pattern matches `path`, if any.
    pub fn resolve(&self, path: &str) -> Option<&'a T> {
        self.routes
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, handler)| handler)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Top-level pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Contact,
}

/// The site's route table.
pub const SITE_ROUTES: RouteTable<'static, Page> =
    RouteTable::new(&[(PathMatch::Exact("/"), Page::Home), (PathMatch::Prefix("/contact/"), Page::Contact)]);

/// Strip the query string and fragment; an empty path is the root.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() { "/" } else { path }
}

fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
