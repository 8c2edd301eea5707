use crate::ui::carousel::{CarouselProps, DefaultSelected};
use crate::ui::icons::IconStyle;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Initial props for the carousel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Initial position: a number or numeric string (default: 0).
    #[serde(default)]
    pub default_selected: DefaultSelected,
    /// Render item titles (default: false).
    #[serde(default)]
    pub show_title: bool,
}

/// Color tokens, as `#rrggbb` or a color name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_main_color")]
    pub main: String,
    #[serde(default = "default_complementary_color")]
    pub complementary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// "unicode" or "ascii" (default: unicode).
    #[serde(default)]
    pub style: IconStyle,
}

/// Page-wide defaults painted under every widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_color")]
    pub foreground: String,
    #[serde(default = "default_page_color")]
    pub background: String,
    /// Blank cells around the page (default: 0).
    #[serde(default)]
    pub padding: u16,
}

fn default_main_color() -> String {
    "#da7756".to_string()
}

fn default_complementary_color() -> String {
    "#f2c18d".to_string()
}

fn default_page_color() -> String {
    "reset".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            main: default_main_color(),
            complementary: default_complementary_color(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            foreground: default_page_color(),
            background: default_page_color(),
            padding: 0,
        }
    }
}

impl CarouselConfig {
    pub fn props(&self) -> CarouselProps {
        CarouselProps {
            default_selected: self.default_selected.clone(),
            show_title: self.show_title,
        }
    }
}
