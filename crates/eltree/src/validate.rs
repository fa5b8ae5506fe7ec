//! Node Validator
//!
//! Shape checks run before a node is built. Id uniqueness depends on tree
//! context and is enforced by the mutation engine instead.

use crate::{
    Attr, AttributeMap, Content, ContentInput, ElementTree, Tag, TreeError, TreeResult,
};

/// Allowed tag names
pub const ALLOWED_TAGS: [&str; 8] = ["div", "p", "span", "h1", "h2", "h3", "h4", "h5"];

/// Normalize a tag name, rejecting anything outside the allowed set
pub fn validate_tag(name: &str) -> TreeResult<Tag> {
    Tag::from_name(name).ok_or_else(|| TreeError::InvalidTag {
        name: name.to_string(),
    })
}

/// Flatten content into items, checking every child handle against `tree`
pub fn validate_content(tree: &ElementTree, value: ContentInput) -> TreeResult<Vec<Content>> {
    let items = value.into_items();
    for item in &items {
        if let Content::Child(id) = item {
            if !tree.contains(*id) {
                return Err(TreeError::InvalidContentType {
                    reason: format!("{id} is not an element of this tree"),
                });
            }
        }
    }
    Ok(items)
}

/// Build an attribute map from name/value pairs.
///
/// Names must be non-empty, unique, and free of whitespace, control
/// characters, quotes, `=`, `<`, `>` and `/`, so that they can be written
/// into a tag unquoted. Values are kept as given.
pub fn validate_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> TreeResult<AttributeMap>
where
    K: Into<String>,
    V: Into<String>,
{
    let mut map = AttributeMap::new();
    for (name, value) in attributes {
        let attr = Attr::new(name, value);
        if !is_valid_attr_name(&attr.name) {
            return Err(TreeError::InvalidAttributes {
                reason: format!("invalid attribute name {:?}", attr.name),
            });
        }
        if let Err(attr) = map.try_insert(attr) {
            return Err(TreeError::InvalidAttributes {
                reason: format!("attribute {:?} given more than once", attr.name),
            });
        }
    }
    Ok(map)
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}
