//! Sharing-link translation.
//!
//! Turns a Google Drive sharing link (`/file/d/<ID>/view` or `...?id=<ID>&...`)
//! into a direct-download URL on the `drive.usercontent.google.com` endpoint.
//! Everything here is plain substring work; no network access.

use thiserror::Error;

/// Host substring every accepted sharing link must contain.
pub const PROVIDER_HOST: &str = "drive.google.com";

/// Default endpoint the direct link points at.
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://drive.usercontent.google.com/download";

const PATH_MARKER: &str = "/file/d/";
const QUERY_MARKER: &str = "id=";

/// Why a sharing link could not be translated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The provider host is missing from the link.
    #[error("invalid Google Drive link")]
    InvalidLink,
    /// Neither `/file/d/` nor `id=` appears in the link.
    #[error("could not extract file ID from link")]
    UnrecognizedFormat,
    /// A marker matched but the identifier after it is empty.
    #[error("file ID is empty")]
    EmptyIdentifier,
}

/// Extracts the file identifier from a sharing link.
///
/// The path form wins when both markers are present. Only the first marker
/// occurrence is considered, and the identifier ends at the next delimiter
/// (`/` for the path form, `&` for the query form) or at the next repeat of
/// the marker.
pub fn extract_file_id(link: &str) -> Result<&str, LinkError> {
    if !link.contains(PROVIDER_HOST) {
        return Err(LinkError::InvalidLink);
    }

    let id = if link.contains(PATH_MARKER) {
        segment_after(link, PATH_MARKER, '/')
    } else if link.contains(QUERY_MARKER) {
        segment_after(link, QUERY_MARKER, '&')
    } else {
        return Err(LinkError::UnrecognizedFormat);
    };

    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(LinkError::EmptyIdentifier),
    }
}

/// Text between the first and second occurrence of `marker`, cut at `delimiter`.
fn segment_after<'a>(link: &'a str, marker: &str, delimiter: char) -> Option<&'a str> {
    link.split(marker).nth(1)?.split(delimiter).next()
}

/// Builds the direct-download URL for an already extracted identifier.
pub fn direct_link_for_id(id: &str, base: &str) -> String {
    format!("{}?id={}&export=download&authuser=0&confirm=t", base, id)
}

/// Translates a sharing link into a direct link on the default endpoint.
///
/// # Examples
///
/// ```
/// use gdfetch_core::link::direct_link;
///
/// let url = direct_link("https://drive.google.com/file/d/ABC123/view?usp=sharing").unwrap();
/// assert_eq!(
///     url,
///     "https://drive.usercontent.google.com/download?id=ABC123&export=download&authuser=0&confirm=t"
/// );
/// ```
pub fn direct_link(link: &str) -> Result<String, LinkError> {
    direct_link_with_base(link, DEFAULT_DOWNLOAD_BASE)
}

/// Like [`direct_link`] but against a caller-supplied download endpoint.
pub fn direct_link_with_base(link: &str, base: &str) -> Result<String, LinkError> {
    extract_file_id(link).map(|id| direct_link_for_id(id, base))
}
