pub mod document;
pub mod geometry;
pub mod host;
pub mod panel;
pub mod preferences;
pub mod reading;
pub mod theme;

use document::{Document, ElementKind};
use serde::{Deserialize, Serialize};

/// Slug prefix marking a page as an article.
pub const ARTICLE_PREFIX: &str = "article-";

/// A static site: shared chrome plus its pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Site name shown in the window title
    pub title: String,
    /// Footer lines, top to bottom
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footer: Vec<String>,
    /// All pages, in navigation order
    pub pages: Vec<Page>,
}

impl Site {
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    /// Article pages, in site order.
    pub fn articles(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| page.is_article())
    }

    /// The page shown at startup: `index` if present, else the first one.
    pub fn landing_page(&self) -> Option<&Page> {
        self.page(NavItem::Home.target())
            .or_else(|| self.pages.first())
    }
}

/// A single page of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique identifier, e.g. "about" or "article-machine-trust"
    pub slug: String,
    /// Page heading
    pub title: String,
    /// Byline for articles (author, date)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Body content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

/// One piece of page body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    ListItem(String),
    Quote(String),
}

impl Page {
    pub fn is_article(&self) -> bool {
        self.slug.starts_with(ARTICLE_PREFIX)
    }

    /// Lays the page out as a styled document with the site chrome around it.
    ///
    /// Articles get a progress bar, a content root and a meta line; other
    /// pages put their blocks directly under the document.
    pub fn to_document(&self, site: &Site) -> Document {
        let mut doc = Document::new();
        doc.push(ElementKind::Nav, site.title.as_str(), None);
        doc.push(ElementKind::ThemeToggle, "", None);

        let parent = if self.is_article() {
            doc.push(ElementKind::ProgressBar, "", None);
            let root = doc.push(ElementKind::ContentRoot, "", None);
            doc.push(ElementKind::Heading, self.title.as_str(), Some(root));
            doc.push(
                ElementKind::Meta,
                self.meta.clone().unwrap_or_default(),
                Some(root),
            );
            Some(root)
        } else {
            doc.push(ElementKind::Heading, self.title.as_str(), None);
            None
        };

        for block in &self.blocks {
            let (kind, text) = match block {
                Block::Heading(text) => (ElementKind::Heading, text),
                Block::Paragraph(text) => (ElementKind::Paragraph, text),
                Block::ListItem(text) => (ElementKind::ListItem, text),
                Block::Quote(text) => (ElementKind::Blockquote, text),
            };
            doc.push(kind, text.as_str(), parent);
        }

        doc.push(ElementKind::Footer, site.footer.join("\n"), None);
        doc
    }
}

/// Entries of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Articles,
    /// The resources section of the home page.
    Resources,
}

impl NavItem {
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Articles, Self::Resources];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Articles => "Articles",
            Self::Resources => "Resources",
        }
    }

    /// Slug of the page this entry opens.
    pub fn target(self) -> &'static str {
        match self {
            Self::Home => "index",
            Self::About => "about",
            Self::Articles => "articles",
            Self::Resources => "index",
        }
    }

    /// Heading anchor to scroll to once the target page is open.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Resources => Some("resources"),
            _ => None,
        }
    }
}

/// Anchor id of a heading: lowercase words joined by `-`.
pub fn anchor_id(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The navigation entry to highlight while `slug` is shown.
///
/// Articles highlight "Articles"; an empty slug is the home page.
pub fn active_nav_item(slug: &str) -> Option<NavItem> {
    let slug = if slug.is_empty() { NavItem::Home.target() } else { slug };
    NavItem::ALL
        .into_iter()
        .find(|item| item.target() == slug)
        .or_else(|| slug.starts_with(ARTICLE_PREFIX).then_some(NavItem::Articles))
}
