//! Endpoint construction for the listing site
//!
//! The site only needs two characters escaped in path segments, so this is
//! deliberately not general percent-encoding: `?`, `&`, `%` and non-ASCII
//! characters pass through untouched.

/// Escapes a folder title for use as a path segment (` ` and `#` only)
pub fn escape_path_segment(title: &str) -> String {
    title.replace(' ', "%20").replace('#', "%23")
}

/// Escapes the spaces in a media href
pub fn escape_spaces(href: &str) -> String {
    href.replace(' ', "%20")
}

/// URL of the listing nested under `endpoint` for the folder `title`
pub fn child_endpoint(endpoint: &str, title: &str) -> String {
    format!("{}{}/", endpoint, escape_path_segment(title))
}

/// Absolute URL of a media file from its listing href
///
/// One leading `/` is dropped before appending to `base_url`, which always
/// ends with `/`.
pub fn media_url(base_url: &str, href: &str) -> String {
    let relative = href.strip_prefix('/').unwrap_or(href);
    format!("{}{}", base_url, escape_spaces(relative))
}
