//! Site data embedding and loading.

use reading_panel::Site;
use rust_embed::RustEmbed;
use std::path::Path;
use thiserror::Error;

/// Embeds the bundled site from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const SITE_RON: &str = "site.ron";

/// Errors that can occur when loading site data.
#[derive(Error, Debug)]
pub enum SiteLoadError {
    #[error("site.ron not found in embedded assets")]
    SiteNotFound,
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid UTF-8 in site data: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse site data: {0}")]
    ParseError(#[from] ron::de::SpannedError),
    #[error("site has no pages")]
    Empty,
}

/// Loads the site bundled with the binary.
pub fn load_embedded_site() -> Result<Site, SiteLoadError> {
    let file = Assets::get(SITE_RON).ok_or(SiteLoadError::SiteNotFound)?;
    parse_site(std::str::from_utf8(&file.data)?)
}

/// Loads a site from a RON file on disk.
pub fn load_site_file(path: &Path) -> Result<Site, SiteLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| SiteLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_site(&text)
}

fn parse_site(text: &str) -> Result<Site, SiteLoadError> {
    let site: Site = ron::from_str(text)?;
    if site.pages.is_empty() {
        return Err(SiteLoadError::Empty);
    }
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_parses() {
        let site = load_embedded_site().unwrap();
        assert!(site.landing_page().is_some());
        assert!(site.articles().count() >= 1);
    }

    #[test]
    fn test_site_without_pages_is_rejected() {
        let result = parse_site(r#"(title: "Empty", pages: [])"#);
        assert!(matches!(result, Err(SiteLoadError::Empty)));
    }

    #[test]
    fn test_malformed_site_is_a_parse_error() {
        let result = parse_site(r#"(title: "Broken", pages: ["#);
        assert!(matches!(result, Err(SiteLoadError::ParseError(_))));
    }

    #[test]
    fn test_missing_site_file() {
        let result = load_site_file(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(SiteLoadError::Io { .. })));
    }
}
