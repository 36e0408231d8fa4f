//! Category styling for the HTML wrapper
//!
//! Maps each marked category to a visual style. The defaults replicate the
//! stock stylesheet; a TOML file can override individual fields:
//!
//! ```text
//! [keyword]
//! color = "navy"
//! bold = true
//!
//! [comment]
//! italic = false
//! ```
//!
//! Unknown tables and keys are ignored, so a theme file only has to name
//! what it changes.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::highlight::Category;

/// Visual style for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    /// CSS color value
    pub color: String,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl CategoryStyle {
    fn new(color: &str, bold: bool, italic: bool) -> Self {
        Self {
            color: color.to_string(),
            bold,
            italic,
        }
    }

    /// CSS declarations for this style
    fn css(&self) -> String {
        let mut out = format!("color: {};", self.color);
        if self.bold {
            out.push_str(" font-weight: bold;");
        }
        if self.italic {
            out.push_str(" font-style: italic;");
        }
        out
    }
}

/// Styles for every marked category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub keyword: CategoryStyle,
    pub operator: CategoryStyle,
    pub literal: CategoryStyle,
    pub comment: CategoryStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: CategoryStyle::new("blue", true, false),
            operator: CategoryStyle::new("green", true, false),
            literal: CategoryStyle::new("orange", false, true),
            comment: CategoryStyle::new("gray", false, true),
        }
    }
}

impl Theme {
    /// Load a theme file, overlaying it on the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse theme TOML, overlaying it on the defaults
    ///
    /// Unparseable TOML is an error; unknown tables and keys are not.
    pub fn parse(text: &str) -> Result<Self> {
        let table: toml::Table = text.parse()?;
        let mut theme = Theme::default();

        for (name, value) in &table {
            let style = match Category::from_name(name).and_then(|c| theme.style_mut(c)) {
                Some(style) => style,
                None => {
                    log::debug!("ignoring unknown theme table [{name}]");
                    continue;
                }
            };
            let Some(fields) = value.as_table() else {
                continue;
            };

            if let Some(color) = fields.get("color").and_then(|v| v.as_str()) {
                style.color = color.to_string();
            }
            if let Some(bold) = fields.get("bold").and_then(|v| v.as_bool()) {
                style.bold = bold;
            }
            if let Some(italic) = fields.get("italic").and_then(|v| v.as_bool()) {
                style.italic = italic;
            }
        }

        Ok(theme)
    }

    /// Get the style for a marked category
    pub fn style(&self, category: Category) -> Option<&CategoryStyle> {
        match category {
            Category::Keyword => Some(&self.keyword),
            Category::Operator => Some(&self.operator),
            Category::Literal => Some(&self.literal),
            Category::Comment => Some(&self.comment),
            Category::Default => None,
        }
    }

    fn style_mut(&mut self, category: Category) -> Option<&mut CategoryStyle> {
        match category {
            Category::Keyword => Some(&mut self.keyword),
            Category::Operator => Some(&mut self.operator),
            Category::Literal => Some(&mut self.literal),
            Category::Comment => Some(&mut self.comment),
            Category::Default => None,
        }
    }

    /// Emit the stylesheet for the HTML wrapper
    pub fn css(&self) -> String {
        let mut out = String::from("body { font-family: Arial, sans-serif; }\n");
        for category in [
            Category::Keyword,
            Category::Operator,
            Category::Literal,
            Category::Comment,
        ] {
            let style = self.style(category).expect("marked categories have styles");
            out.push_str(&format!(".{} {{ {} }}\n", category.name(), style.css()));
        }
        out
    }
}
