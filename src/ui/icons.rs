//! Glyph capability for the navigation controls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
}

/// Renders icon identifiers into single-cell glyphs.
pub trait IconSet {
    fn glyph(&self, icon: Icon) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeIcons;

impl IconSet for UnicodeIcons {
    fn glyph(&self, icon: Icon) -> &str {
        match icon {
            Icon::ChevronLeft => "❮",
            Icon::ChevronRight => "❯",
        }
    }
}

/// For terminals without the dingbat block.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconSet for AsciiIcons {
    fn glyph(&self, icon: Icon) -> &str {
        match icon {
            Icon::ChevronLeft => "<",
            Icon::ChevronRight => ">",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
}

impl IconStyle {
    pub fn icon_set(self) -> Box<dyn IconSet> {
        match self {
            IconStyle::Unicode => Box::new(UnicodeIcons),
            IconStyle::Ascii => Box::new(AsciiIcons),
        }
    }
}
