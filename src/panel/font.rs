//! Discrete body-text scales.

use crate::document::{InlineStyle, Selector};
use crate::host::ElementQuery;
use crate::preferences::PreferenceError;
use std::str::FromStr;

/// Line height is this multiple of the font scale.
pub const LINE_HEIGHT_RATIO: f32 = 1.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontScale {
    Decrease,
    #[default]
    Default,
    Increase,
}

impl FontScale {
    /// Button order in the panel.
    pub const ALL: [Self; 3] = [Self::Decrease, Self::Default, Self::Increase];

    pub fn value(self) -> f32 {
        match self {
            Self::Decrease => 0.9,
            Self::Default => 1.05,
            Self::Increase => 1.2,
        }
    }

    pub fn line_height(self) -> f32 {
        self.value() * LINE_HEIGHT_RATIO
    }

    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decrease => "0.9",
            Self::Default => "1.05",
            Self::Increase => "1.2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Decrease => "A-",
            Self::Default => "A",
            Self::Increase => "A+",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Decrease => "Smaller text",
            Self::Default => "Default text size",
            Self::Increase => "Larger text",
        }
    }
}

impl FromStr for FontScale {
    type Err = PreferenceError;

    /// Accepts any decimal spelling of one of the three values ("1.20", "0.90").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| PreferenceError::UnknownFontScale(s.to_owned()))?;
        Self::ALL
            .into_iter()
            .find(|scale| (scale.value() - value).abs() < 1e-3)
            .ok_or_else(|| PreferenceError::UnknownFontScale(s.to_owned()))
    }
}

/// Sets font size and line height on every text block of the content root.
pub fn apply_font_scale<Q: ElementQuery + ?Sized>(doc: &mut Q, scale: FontScale) {
    for id in doc.query_all(Selector::TextBlocks) {
        let Some(style) = doc.inline_style(id) else {
            continue;
        };
        doc.set_inline_style(
            id,
            InlineStyle {
                font_scale: Some(scale.value()),
                line_height: Some(scale.line_height()),
                ..style
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, ElementKind};

    #[test]
    fn test_parse_accepts_known_values() {
        assert_eq!("0.9".parse::<FontScale>().unwrap(), FontScale::Decrease);
        assert_eq!("1.05".parse::<FontScale>().unwrap(), FontScale::Default);
        assert_eq!(" 1.20 ".parse::<FontScale>().unwrap(), FontScale::Increase);
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for bad in ["", "1.5", "NaN", "large"] {
            assert!(bad.parse::<FontScale>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_as_str_parses_back() {
        for scale in FontScale::ALL {
            assert_eq!(scale.as_str().parse::<FontScale>().unwrap(), scale);
        }
    }

    #[test]
    fn test_apply_touches_only_text_blocks() {
        let mut doc = Document::new();
        let root = doc.push(ElementKind::ContentRoot, "", None);
        let heading = doc.push(ElementKind::Heading, "Title", Some(root));
        let para = doc.push(ElementKind::Paragraph, "Body", Some(root));
        let quote = doc.push(ElementKind::Blockquote, "Quote", Some(root));

        apply_font_scale(&mut doc, FontScale::Increase);

        for id in [para, quote] {
            let style = doc.computed_style(id).unwrap();
            assert_eq!(style.font_scale, 1.2);
            assert!((style.line_height - 1.2 * LINE_HEIGHT_RATIO).abs() < f32::EPSILON);
        }
        assert_eq!(doc.inline_style(heading).unwrap(), InlineStyle::default());
    }
}
