//! Uploaded images.

use reservista_core::Fields;
use serde::{Deserialize, Serialize};

use super::patch_field;
use crate::validation::{Checker, Validate, ValidationErrors};

/// An image reference in the media library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ManagedImage {
    pub fn new(url: impl Into<String>, alt_text: Option<&str>, filename: Option<&str>) -> Self {
        Self {
            url: url.into(),
            alt_text: alt_text.map(str::to_string),
            filename: filename.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedImageUpdate {
    pub url: Option<String>,
    pub alt_text: Option<String>,
    pub filename: Option<String>,
}

impl Fields for ManagedImage {
    type Patch = ManagedImageUpdate;

    fn merge(&mut self, patch: ManagedImageUpdate) {
        patch_field(&mut self.url, patch.url);
        if let Some(alt_text) = patch.alt_text {
            self.alt_text = Some(alt_text).filter(|a| !a.is_empty());
        }
        if let Some(filename) = patch.filename {
            self.filename = Some(filename).filter(|f| !f.is_empty());
        }
    }
}

const URL_MESSAGE: &str = "Please enter a valid image URL.";
const ALT_MESSAGE: &str = "Alt text must be at least 2 characters.";
const FILENAME_MESSAGE: &str = "Filename is required.";

impl Validate for ManagedImage {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .url("url", &self.url, URL_MESSAGE)
            .min_chars_or_empty("altText", self.alt_text.as_deref(), 2, ALT_MESSAGE)
            .min_chars_or_empty("filename", self.filename.as_deref(), 1, FILENAME_MESSAGE)
            .finish()
    }
}

impl Validate for ManagedImageUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        if let Some(url) = &self.url {
            checker.url("url", url, URL_MESSAGE);
        }
        checker
            .min_chars_or_empty("altText", self.alt_text.as_deref(), 2, ALT_MESSAGE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_rules() {
        let image = ManagedImage::new(
            "https://placehold.co/600x400.png?text=Pasta+Dish",
            Some("Delicious pasta dish"),
            Some("pasta.png"),
        );
        assert!(image.validate().is_ok());
        assert!(ManagedImage::new("https://placehold.co/1.png", Some(""), None).validate().is_ok());

        let errors = ManagedImage::new("pasta.png", Some("x"), None).validate().unwrap_err();
        assert_eq!(errors.message_for("url"), Some(URL_MESSAGE));
        assert_eq!(errors.message_for("altText"), Some(ALT_MESSAGE));
    }

    #[test]
    fn test_update_clears_optional_text() {
        let mut image = ManagedImage::new("https://placehold.co/1.png", Some("Salad"), Some("salad.jpg"));
        image.merge(ManagedImageUpdate {
            alt_text: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(image.alt_text, None);
        assert_eq!(image.filename.as_deref(), Some("salad.jpg"));
    }
}
