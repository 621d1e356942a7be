//! Presentation settings for the editing surface.
//!
//! The engine only records these; the host applies them when it draws the
//! surface. Values are CSS strings, and an empty string clears a setting.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStyle {
    pub font_size: Option<String>,
    pub background_color: Option<String>,
    pub base_text_color: Option<String>,
    pub height: Option<String>,
    pub line_height: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl SurfaceStyle {
    /// Set a raw attribute on the surface element. Returns false, changing
    /// nothing, when `name` is empty.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> bool {
        if name.is_empty() {
            log::debug!("ignoring surface attribute with empty name");
            return false;
        }
        self.attributes.insert(name.to_string(), value.into());
        true
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// `None` for an empty CSS value.
pub(crate) fn css_value(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}
