//! Listing page parser
//!
//! A listing page is a table whose body cells (`td.text-xs-left`) each carry a
//! `data-sort-value` identifier. The identifier decides what the row is:
//! - ends with the media extension: a video, title and href from its `<a>`
//! - starts with the directory prefix: a folder, title from its `<strong>`
//! - anything else: unsupported, skipped by the crawler

use crate::config::SourceConfig;
use crate::ChefError;
use scraper::{ElementRef, Html, Selector};

/// One classified row of a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRow {
    /// A playable file
    Media {
        source_id: String,
        title: String,
        href: String,
    },

    /// A nested listing
    Directory { source_id: String, title: String },

    /// A row the crawler does not import
    Unsupported { source_id: Option<String> },
}

/// Parses a listing page into rows, in document order
///
/// # Arguments
///
/// * `html` - The page body
/// * `url` - The page URL, used in error messages
/// * `source` - Supplies the media extension and directory prefix
///
/// # Returns
///
/// * `Ok(Vec<ListingRow>)` - Every cell of the first table body, classified
/// * `Err(ChefError)` - The page has no table body, or a media/directory row
///   lacks the element its title comes from
///
/// # Example
///
/// ```
/// use solar_chef::config::SourceConfig;
/// use solar_chef::crawler::{parse_listing, ListingRow};
///
/// let html = r#"<table><tbody><tr>
///     <td class="text-xs-left" data-sort-value="dir-crafts"><strong>Crafts</strong></td>
/// </tr></tbody></table>"#;
/// let rows = parse_listing(html, "http://example.com/content/", &SourceConfig::default()).unwrap();
/// assert_eq!(
///     rows,
///     vec![ListingRow::Directory {
///         source_id: "dir-crafts".to_string(),
///         title: "Crafts".to_string(),
///     }]
/// );
/// ```
pub fn parse_listing(
    html: &str,
    url: &str,
    source: &SourceConfig,
) -> Result<Vec<ListingRow>, ChefError> {
    let document = Html::parse_document(html);

    let tbody_selector = selector("tbody", url)?;
    let cell_selector = selector("td.text-xs-left", url)?;

    let tbody = document
        .select(&tbody_selector)
        .next()
        .ok_or_else(|| ChefError::HtmlParse {
            url: url.to_string(),
            message: "listing has no table body".to_string(),
        })?;

    tbody
        .select(&cell_selector)
        .map(|cell| classify_row(cell, url, source))
        .collect()
}

fn classify_row(
    cell: ElementRef<'_>,
    url: &str,
    source: &SourceConfig,
) -> Result<ListingRow, ChefError> {
    let Some(source_id) = cell.value().attr("data-sort-value") else {
        return Ok(ListingRow::Unsupported { source_id: None });
    };
    let source_id = source_id.to_string();

    if source_id.ends_with(&source.media_extension) {
        let link = first_match(cell, "a[href]", url)?
            .ok_or_else(|| malformed(url, &source_id, "media row has no link"))?;
        let href = link.value().attr("href").unwrap_or_default().to_string();
        let title = strip_extension(&element_text(link), &source.media_extension).to_string();
        if title.is_empty() {
            return Err(malformed(url, &source_id, "media link has no text"));
        }

        Ok(ListingRow::Media {
            source_id,
            title,
            href,
        })
    } else if source_id.starts_with(&source.directory_prefix) {
        let title = first_match(cell, "strong", url)?
            .map(element_text)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| malformed(url, &source_id, "directory row has no bold title"))?;

        Ok(ListingRow::Directory { source_id, title })
    } else {
        Ok(ListingRow::Unsupported {
            source_id: Some(source_id),
        })
    }
}

/// Drops a trailing `extension` from a display title, ignoring ASCII case
fn strip_extension<'a>(title: &'a str, extension: &str) -> &'a str {
    let split = title.len().saturating_sub(extension.len());
    match (title.get(..split), title.get(split..)) {
        (Some(stem), Some(tail)) if tail.eq_ignore_ascii_case(extension) => stem.trim_end(),
        _ => title,
    }
}

fn first_match<'a>(
    cell: ElementRef<'a>,
    css: &str,
    url: &str,
) -> Result<Option<ElementRef<'a>>, ChefError> {
    let selector = selector(css, url)?;
    let found = cell.select(&selector).next();
    Ok(found)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn selector(css: &str, url: &str) -> Result<Selector, ChefError> {
    Selector::parse(css).map_err(|e| ChefError::HtmlParse {
        url: url.to_string(),
        message: format!("invalid selector '{}': {:?}", css, e),
    })
}

fn malformed(url: &str, source_id: &str, reason: &str) -> ChefError {
    ChefError::MalformedRow {
        url: url.to_string(),
        source_id: source_id.to_string(),
        reason: reason.to_string(),
    }
}
