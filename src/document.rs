//! A small styled document: the page the panel decorates.
//!
//! Elements live in a flat arena addressed by [`ElementId`]. Every element
//! has optional inline style overrides layered over a base [`Stylesheet`];
//! renderers read the [`ComputedStyle`].

use crate::host::ElementQuery;

/// Index of an element inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// What an element is. Drives selector matching and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Nav,
    Footer,
    ThemeToggle,
    ProgressBar,
    /// The article container. Its presence marks a reading page.
    ContentRoot,
    /// Byline area under the article title.
    Meta,
    Heading,
    Paragraph,
    ListItem,
    Blockquote,
}

impl ElementKind {
    /// Kinds whose size follows the reader's font scale.
    pub fn is_text_block(self) -> bool {
        matches!(self, Self::Paragraph | Self::ListItem | Self::Blockquote)
    }

    /// Site chrome hidden by focus mode.
    pub fn is_chrome(self) -> bool {
        matches!(
            self,
            Self::Nav | Self::Footer | Self::ThemeToggle | Self::ProgressBar
        )
    }
}

/// Element lookups understood by [`ElementQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Nav,
    Footer,
    ThemeToggle,
    ProgressBar,
    ContentRoot,
    Meta,
    /// Paragraphs, list items and quotes inside the content root.
    TextBlocks,
    /// Navigation, footer, theme toggle and progress bar.
    Chrome,
}

/// Inline overrides. `None` means "use the stylesheet".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InlineStyle {
    pub opacity: Option<f32>,
    /// Whether the element accepts pointer input.
    pub interactive: Option<bool>,
    /// Maximum content width in pixels.
    pub max_width: Option<f32>,
    /// Horizontally centered with automatic margins.
    pub centered: Option<bool>,
    /// Font size in multiples of the base size.
    pub font_scale: Option<f32>,
    /// Line height as a multiple of the font size.
    pub line_height: Option<f32>,
}

/// Base values every element falls back to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stylesheet {
    pub opacity: f32,
    pub interactive: bool,
    pub max_width: f32,
    pub centered: bool,
    pub font_scale: f32,
    pub line_height: f32,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            interactive: true,
            max_width: 800.0,
            centered: false,
            font_scale: 1.0,
            line_height: 1.6,
        }
    }
}

/// Resolved style of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub opacity: f32,
    pub interactive: bool,
    pub max_width: f32,
    pub centered: bool,
    pub font_scale: f32,
    pub line_height: f32,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub parent: Option<ElementId>,
    pub style: InlineStyle,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    stylesheet: Stylesheet,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its id.
    pub fn push(
        &mut self,
        kind: ElementKind,
        text: impl Into<String>,
        parent: Option<ElementId>,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            kind,
            text: text.into(),
            parent,
            style: InlineStyle::default(),
        });
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(idx, element)| (ElementId(idx), element))
    }

    /// Whether `id` is `ancestor` or nested anywhere below it.
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.get(cur).and_then(|element| element.parent);
        }
        false
    }

    /// Concatenated text of `root` and everything below it.
    pub fn text_content(&self, root: ElementId) -> String {
        self.elements()
            .filter(|(id, _)| self.is_within(*id, root))
            .map(|(_, element)| element.text.as_str())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Style of an element without inline overrides.
    pub fn base_style(&self) -> ComputedStyle {
        let base = self.stylesheet;
        ComputedStyle {
            opacity: base.opacity,
            interactive: base.interactive,
            max_width: base.max_width,
            centered: base.centered,
            font_scale: base.font_scale,
            line_height: base.line_height,
        }
    }

    pub fn computed_style(&self, id: ElementId) -> Option<ComputedStyle> {
        let inline = self.get(id)?.style;
        let base = self.stylesheet;
        Some(ComputedStyle {
            opacity: inline.opacity.unwrap_or(base.opacity),
            interactive: inline.interactive.unwrap_or(base.interactive),
            max_width: inline.max_width.unwrap_or(base.max_width),
            centered: inline.centered.unwrap_or(base.centered),
            font_scale: inline.font_scale.unwrap_or(base.font_scale),
            line_height: inline.line_height.unwrap_or(base.line_height),
        })
    }

    fn matches(&self, id: ElementId, element: &Element, selector: Selector) -> bool {
        match selector {
            Selector::Nav => element.kind == ElementKind::Nav,
            Selector::Footer => element.kind == ElementKind::Footer,
            Selector::ThemeToggle => element.kind == ElementKind::ThemeToggle,
            Selector::ProgressBar => element.kind == ElementKind::ProgressBar,
            Selector::ContentRoot => element.kind == ElementKind::ContentRoot,
            Selector::Meta => element.kind == ElementKind::Meta,
            Selector::Chrome => element.kind.is_chrome(),
            Selector::TextBlocks => {
                element.kind.is_text_block()
                    && self
                        .query(Selector::ContentRoot)
                        .is_some_and(|root| self.is_within(id, root))
            }
        }
    }
}

impl ElementQuery for Document {
    fn query_all(&self, selector: Selector) -> Vec<ElementId> {
        self.elements()
            .filter(|(id, element)| self.matches(*id, element, selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn inline_style(&self, id: ElementId) -> Option<InlineStyle> {
        self.get(id).map(|element| element.style)
    }

    fn set_inline_style(&mut self, id: ElementId, style: InlineStyle) {
        if let Some(element) = self.get_mut(id) {
            element.style = style;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_document() -> Document {
        let mut doc = Document::new();
        doc.push(ElementKind::Nav, "", None);
        let root = doc.push(ElementKind::ContentRoot, "", None);
        doc.push(ElementKind::Heading, "Title", Some(root));
        doc.push(ElementKind::Paragraph, "First paragraph.", Some(root));
        doc.push(ElementKind::ListItem, "An item", Some(root));
        doc.push(ElementKind::Blockquote, "A quote", Some(root));
        doc.push(ElementKind::Footer, "Footer text", None);
        doc
    }

    #[test]
    fn test_text_blocks_only_inside_content_root() {
        let mut doc = article_document();
        doc.push(ElementKind::Paragraph, "Outside the article", None);

        let blocks = doc.query_all(Selector::TextBlocks);
        assert_eq!(blocks.len(), 3);
        for id in blocks {
            assert!(doc.get(id).unwrap().kind.is_text_block());
        }
    }

    #[test]
    fn test_text_blocks_empty_without_content_root() {
        let mut doc = Document::new();
        doc.push(ElementKind::Paragraph, "Orphan", None);
        assert!(doc.query_all(Selector::TextBlocks).is_empty());
        assert!(doc.query(Selector::ContentRoot).is_none());
    }

    #[test]
    fn test_chrome_selector() {
        let doc = article_document();
        let chrome = doc.query_all(Selector::Chrome);
        let kinds: Vec<_> = chrome.iter().map(|id| doc.get(*id).unwrap().kind).collect();
        assert_eq!(kinds, vec![ElementKind::Nav, ElementKind::Footer]);
    }

    #[test]
    fn test_computed_style_prefers_inline() {
        let mut doc = article_document();
        let nav = doc.query(Selector::Nav).unwrap();

        let before = doc.computed_style(nav).unwrap();
        assert_eq!(before.opacity, 1.0);
        assert!(before.interactive);

        doc.set_inline_style(
            nav,
            InlineStyle {
                opacity: Some(0.0),
                ..InlineStyle::default()
            },
        );
        let after = doc.computed_style(nav).unwrap();
        assert_eq!(after.opacity, 0.0);
        assert!(after.interactive);
    }

    #[test]
    fn test_text_content_of_root() {
        let doc = article_document();
        let root = doc.query(Selector::ContentRoot).unwrap();
        assert_eq!(
            doc.text_content(root),
            "Title First paragraph. An item A quote"
        );
    }

    #[test]
    fn test_base_style_ignores_inline_overrides() {
        let mut doc = article_document();
        let root = doc.query(Selector::ContentRoot).unwrap();
        doc.set_inline_style(
            root,
            InlineStyle {
                max_width: Some(650.0),
                ..InlineStyle::default()
            },
        );
        let base = doc.base_style();
        assert_eq!(base.max_width, Stylesheet::default().max_width);
        assert_eq!(base.opacity, 1.0);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut doc = article_document();
        let bogus = ElementId(999);
        doc.set_inline_style(bogus, InlineStyle::default());
        assert!(doc.inline_style(bogus).is_none());
        assert!(doc.computed_style(bogus).is_none());
    }
}
