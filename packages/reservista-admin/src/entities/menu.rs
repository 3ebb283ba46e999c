//! Menu items and their categories.

use reservista_core::Fields;
use serde::{Deserialize, Serialize};

use super::patch_field;
use crate::validation::{Checker, Validate, ValidationErrors};

/// Splits a comma separated tag list, trimming each tag and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    /// Display name of `category_id`, kept in sync by the restaurant service
    #[serde(default)]
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category_id: category_id.into(),
            category_name: String::new(),
            image_url: None,
            tags: Vec::new(),
        }
    }

    /// Replaces the tags with the parsed comma list.
    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags = parse_tags(tags);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<String>,
    /// Overwritten by the restaurant service whenever `category_id` is set
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Fields for MenuItem {
    type Patch = MenuItemUpdate;

    fn merge(&mut self, patch: MenuItemUpdate) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.description, patch.description);
        patch_field(&mut self.price, patch.price);
        patch_field(&mut self.category_id, patch.category_id);
        patch_field(&mut self.category_name, patch.category_name);
        if let Some(url) = patch.image_url {
            self.image_url = Some(url).filter(|u| !u.is_empty());
        }
        patch_field(&mut self.tags, patch.tags);
    }
}

const NAME_MESSAGE: &str = "Item name must be at least 2 characters.";
const DESCRIPTION_MESSAGE: &str = "Description must be at least 10 characters.";
const PRICE_MESSAGE: &str = "Price must be a positive value.";
const CATEGORY_MESSAGE: &str = "Please select a category.";
const IMAGE_MESSAGE: &str = "Please enter a valid URL.";

impl Validate for MenuItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars("name", &self.name, 2, NAME_MESSAGE)
            .min_chars("description", &self.description, 10, DESCRIPTION_MESSAGE)
            .at_least("price", self.price, 0.01, PRICE_MESSAGE)
            .min_chars("categoryId", &self.category_id, 1, CATEGORY_MESSAGE)
            .url_or_empty("imageUrl", self.image_url.as_deref(), IMAGE_MESSAGE)
            .finish()
    }
}

impl Validate for MenuItemUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars_opt("name", self.name.as_deref(), 2, NAME_MESSAGE)
            .min_chars_opt("description", self.description.as_deref(), 10, DESCRIPTION_MESSAGE)
            .at_least_opt("price", self.price, 0.01, PRICE_MESSAGE)
            .min_chars_opt("categoryId", self.category_id.as_deref(), 1, CATEGORY_MESSAGE)
            .url_or_empty("imageUrl", self.image_url.as_deref(), IMAGE_MESSAGE)
            .finish()
    }
}

/// A menu section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Fields for Category {
    type Patch = CategoryUpdate;

    fn merge(&mut self, patch: CategoryUpdate) {
        patch_field(&mut self.name, patch.name);
        if let Some(description) = patch.description {
            self.description = Some(description).filter(|d| !d.is_empty());
        }
    }
}

const CATEGORY_NAME_MESSAGE: &str = "Category name must be at least 2 characters.";

impl Validate for Category {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars("name", &self.name, 2, CATEGORY_NAME_MESSAGE)
            .finish()
    }
}

impl Validate for CategoryUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars_opt("name", self.name.as_deref(), 2, CATEGORY_NAME_MESSAGE)
            .finish()
    }
}
