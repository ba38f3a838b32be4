//! Category model describing one resource kind, mixin or action category.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Action, AttributeDefinition};

/// The class of a category.
///
/// The set is open: the well-known classes get their own variant and anything
/// else is carried verbatim in [`CategoryClass::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryClass {
    Kind,
    Mixin,
    Action,
    Other(String),
}

impl CategoryClass {
    /// Returns the wire representation of this class.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryClass::Kind => "kind",
            CategoryClass::Mixin => "mixin",
            CategoryClass::Action => "action",
            CategoryClass::Other(s) => s,
        }
    }

    /// Returns true for an empty `Other` class, which no valid category carries.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl std::fmt::Display for CategoryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl From<String> for CategoryClass {
    fn from(s: String) -> Self {
        match s.as_str() {
            "kind" => CategoryClass::Kind,
            "mixin" => CategoryClass::Mixin,
            "action" => CategoryClass::Action,
            _ => CategoryClass::Other(s),
        }
    }
}

impl From<&str> for CategoryClass {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<CategoryClass> for String {
    fn from(class: CategoryClass) -> Self {
        match class {
            CategoryClass::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// A category descriptor.
///
/// A category names one resource kind (or mixin, or action category) within
/// its scheme namespace and describes the attributes and actions instances of
/// it support. Within a parsed collection the `(term, scheme)` pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short local identifier within the scheme (e.g., "entity").
    pub term: String,
    /// Namespace URI qualifying the term (e.g., "http://schemas.ogf.org/occi/core#").
    pub scheme: String,
    pub class: CategoryClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Location of the category's collection; must contain a path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Attribute definitions in rendering order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

impl Category {
    /// Creates a category with the three required fields and nothing else.
    pub fn new(
        term: impl Into<String>,
        scheme: impl Into<String>,
        class: impl Into<CategoryClass>,
    ) -> Self {
        Self {
            term: term.into(),
            scheme: scheme.into(),
            class: class.into(),
            title: None,
            rel: None,
            location: None,
            attributes: None,
            actions: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<AttributeDefinition>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Returns the `(term, scheme)` pair identifying this category.
    pub fn key(&self) -> (&str, &str) {
        (&self.term, &self.scheme)
    }

    /// Returns the names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.term.is_empty() {
            missing.push("term");
        }
        if self.scheme.is_empty() {
            missing.push("scheme");
        }
        if self.class.is_empty() {
            missing.push("class");
        }
        missing
    }

    /// Returns true if term, scheme and class are all non-empty.
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_str() {
        assert_eq!("kind".parse::<CategoryClass>().unwrap(), CategoryClass::Kind);
        assert_eq!("mixin".parse::<CategoryClass>().unwrap(), CategoryClass::Mixin);
        assert_eq!(
            "action".parse::<CategoryClass>().unwrap(),
            CategoryClass::Action
        );
        assert_eq!(
            "template".parse::<CategoryClass>().unwrap(),
            CategoryClass::Other("template".to_string())
        );
    }

    #[test]
    fn test_class_display_roundtrip() {
        for s in ["kind", "mixin", "action", "os_tpl"] {
            let class = CategoryClass::from(s);
            assert_eq!(class.to_string(), s);
        }
    }

    #[test]
    fn test_class_serializes_as_string() {
        let json = serde_json::to_string(&CategoryClass::Mixin).unwrap();
        assert_eq!(json, "\"mixin\"");
        let class: CategoryClass = serde_json::from_str("\"resource_tpl\"").unwrap();
        assert_eq!(class, CategoryClass::Other("resource_tpl".to_string()));
    }

    #[test]
    fn test_valid_category() {
        let category = Category::new("entity", "http://schemas.ogf.org/occi/core#", "kind");
        assert!(category.is_valid());
        assert_eq!(
            category.key(),
            ("entity", "http://schemas.ogf.org/occi/core#")
        );
    }

    #[test]
    fn test_missing_fields() {
        let category = Category::new("", "", "");
        assert_eq!(category.missing_fields(), vec!["term", "scheme", "class"]);
        assert!(!category.is_valid());

        let category = Category::new("entity", "", "kind");
        assert_eq!(category.missing_fields(), vec!["scheme"]);
    }

    #[test]
    fn test_category_json_skips_absent_fields() {
        let category = Category::new("entity", "http://x#", "kind").with_location("/entity/");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["class"], "kind");
        assert_eq!(json["location"], "/entity/");
        assert!(json.get("title").is_none());
        assert!(json.get("attributes").is_none());
    }
}
