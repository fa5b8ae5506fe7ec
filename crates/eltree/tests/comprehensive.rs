//! Comprehensive tests for eltree
//!
//! Construction, append, queries and output through the public API.

use eltree::{AttributeMap, Content, ElementTree, NodeId, TreeError, ALLOWED_TAGS};

fn no_attrs() -> AttributeMap {
    AttributeMap::new()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_every_allowed_tag_constructs() {
    let mut tree = ElementTree::new();
    for name in ALLOWED_TAGS {
        let id = tree.new_node(name, "x", no_attrs()).unwrap();
        assert_eq!(tree.get(id).unwrap().tag().as_str(), name);

        let upper = tree.new_node(&name.to_uppercase(), "x", no_attrs()).unwrap();
        assert_eq!(tree.get(upper).unwrap().tag().as_str(), name);
    }
}

#[test]
fn test_section_is_not_allowed() {
    let mut tree = ElementTree::new();
    let result = tree.new_node("section", "x", no_attrs());
    assert!(matches!(result, Err(TreeError::InvalidTag { ref name }) if name == "section"));
    assert!(tree.is_empty());
}

#[test]
fn test_construction_with_mixed_content() {
    let mut tree = ElementTree::new();
    let span = tree.new_node("span", "s", no_attrs()).unwrap();
    let div = tree
        .new_node("div", vec![Content::text("before"), Content::Child(span), Content::text("after")], no_attrs())
        .unwrap();

    let node = tree.get(div).unwrap();
    assert_eq!(node.content().len(), 3);
    assert_eq!(node.children().collect::<Vec<_>>(), vec![span]);
    assert_eq!(node.text(), "beforeafter");
}

#[test]
fn test_attribute_order_kept() {
    let mut tree = ElementTree::new();
    let p = tree.new_node("p", "x", [("id", "a"), ("name", "karam")]).unwrap();
    let attrs = tree.get(p).unwrap().attributes();

    assert_eq!(attrs.names(), vec!["id", "name"]);
    assert_eq!(tree.get(p).unwrap().id(), Some("a"));
}

// ============================================================================
// UNIQUENESS
// ============================================================================

#[test]
fn test_duplicate_id_on_append() {
    let mut tree = ElementTree::new();
    let first = tree.new_node("div", "hello", [("id", "a")]).unwrap();
    let second = tree.new_node("div", "hello", [("id", "a")]).unwrap();

    let err = tree.append(first, second).unwrap_err();
    assert!(matches!(err, TreeError::DuplicateId { ref id } if id == "a"));
    assert!(err.to_string().contains("a"));
}

#[test]
fn test_siblings_built_independently_conflict_at_ancestor() {
    let mut tree = ElementTree::new();
    let div1 = tree.new_node("div", (), [("id", "unique_id1")]).unwrap();
    let div2 = tree.new_node("div", (), [("id", "unique_id2")]).unwrap();
    let div3 = tree.new_node("div", "Content33", [("id", "unique_id3")]).unwrap();

    tree.append(div2, div3).unwrap();
    tree.append(div1, div2).unwrap();

    let h1 = tree.new_node("h1", "Hello", [("id", "unique_id3")]).unwrap();
    assert!(matches!(tree.append(div1, h1), Err(TreeError::DuplicateId { .. })));

    // Not a problem in a separate tree
    let other = tree.new_node("div", h1, no_attrs()).unwrap();
    assert_eq!(tree.root_of(h1), other);
}

#[test]
fn test_rejected_append_leaves_tree_unchanged() {
    let mut tree = ElementTree::new();
    let p1 = tree.new_node("p", "x", [("id", "1")]).unwrap();
    let root = tree.new_node("div", p1, [("id", "root")]).unwrap();
    let fresh = tree.new_node("p", "y", [("id", "2")]).unwrap();
    let clash = tree.new_node("span", "z", [("id", "1")]).unwrap();
    let snapshot = tree.clone();

    assert!(tree.append(p1, vec![fresh, clash]).is_err());
    assert_eq!(tree, snapshot);

    tree.append(p1, fresh).unwrap();
    assert!(tree.visible_ids(root).unwrap().contains("2"));
}

#[test]
fn test_id_can_be_reused_after_rejection() {
    let mut tree = ElementTree::new();
    let root = tree.new_node("div", (), [("id", "r")]).unwrap();
    let bad = tree.new_node("p", "x", [("id", "r")]).unwrap();
    assert!(tree.append(root, bad).is_err());

    // `bad` is still a detached root and can go elsewhere
    let elsewhere = tree.new_node("div", bad, no_attrs()).unwrap();
    assert_eq!(tree.get(bad).unwrap().parent(), Some(elsewhere));
}

// ============================================================================
// QUERIES
// ============================================================================

#[test]
fn test_find_by_tag_document_order() {
    let mut tree = ElementTree::new();
    let p1 = tree.new_node("p", "x", [("id", "1")]).unwrap();
    let p2 = tree.new_node("p", "y", [("id", "2")]).unwrap();
    let d = tree.new_node("div", vec![p1, p2], no_attrs()).unwrap();

    assert_eq!(tree.find_by_tag(d, "p").unwrap(), vec![p1, p2]);
    assert_eq!(tree.find_by_tag(d, "p").unwrap(), tree.find_by_tag(d, "p").unwrap());
}

#[test]
fn test_find_includes_root() {
    let mut tree = ElementTree::new();
    let inner = tree.new_node("div", "in", [("name", "karam")]).unwrap();
    let outer = tree.new_node("div", inner, [("name", "karam")]).unwrap();

    assert_eq!(tree.find_by_tag(outer, "div").unwrap(), vec![outer, inner]);
    assert_eq!(tree.find_by_attr(outer, "name", "karam").unwrap(), vec![outer, inner]);
    assert_eq!(tree.find_by_attr(inner, "name", "karam").unwrap(), vec![inner]);
}

#[test]
fn test_find_by_attr_sees_later_appends() {
    let mut tree = ElementTree::new();
    let div1 = tree.new_node("div", "Content", [("id", "unique_id1"), ("name", "karam")]).unwrap();
    let div2 = tree.new_node("div", "Content22", [("id", "unique_id2")]).unwrap();
    tree.append(div1, div2).unwrap();
    assert_eq!(tree.find_by_attr(div1, "name", "karam").unwrap().len(), 1);

    let p = tree.new_node("p", "Hello", [("id", "unique_id4"), ("name", "karam")]).unwrap();
    tree.append(div2, p).unwrap();
    assert_eq!(tree.find_by_attr(div1, "name", "karam").unwrap(), vec![div1, p]);
    assert_eq!(tree.find_by_tag(div1, "div").unwrap().len(), 2);
    assert!(tree.find_by_tag(div1, "h1").unwrap().is_empty());
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_render_heading() {
    let mut tree = ElementTree::new();
    let h1 = tree.new_node("h1", "Hi", [("id", "z")]).unwrap();
    let html = tree.render(h1).unwrap();

    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines[0], "<h1 id=\"z\">");
    assert!(lines[1].contains("Hi"));
    assert_eq!(lines[2], "</h1>");
}

#[test]
fn test_render_is_idempotent() {
    let mut tree = ElementTree::new();
    let p = tree.new_node("p", "text", [("id", "p")]).unwrap();
    let div = tree.new_node("div", p, [("id", "d")]).unwrap();

    assert_eq!(tree.render(div).unwrap(), tree.render(div).unwrap());
}

#[test]
fn test_render_sample_document() {
    let mut tree = ElementTree::new();
    let div3 = tree.new_node("div", "Content33", [("id", "unique_id3")]).unwrap();
    let p = tree.new_node("p", "Hello world!", [("id", "unique_id4"), ("name", "karam")]).unwrap();
    tree.append(div3, p).unwrap();

    let expected = concat!(
        "<div id=\"unique_id3\">\n",
        "\tContent33\n",
        "\t<p id=\"unique_id4\" name=\"karam\">\n",
        "\t\tHello world!\n",
        "\t</p>\n",
        "</div>\n",
    );
    assert_eq!(tree.render(div3).unwrap(), expected);
}

#[test]
fn test_render_to_file_writes_doctype() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.html");

    let mut tree = ElementTree::new();
    let div = tree.new_node("div", "Content22", [("id", "unique_id2")]).unwrap();
    tree.render_to_file(div, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "<!DOCTYPE html>\n<div id=\"unique_id2\">\n\tContent22\n</div>\n");
}

#[test]
fn test_render_to_file_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.html");

    // Handle from a different arena; unknown to `tree`
    let mut other = ElementTree::new();
    let foreign: NodeId = other.new_node("p", "x", no_attrs()).unwrap();

    let tree = ElementTree::new();
    let result = tree.render_to_file(foreign, &path);

    assert!(matches!(result, Err(TreeError::NodeNotFound(_))));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_render_to_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("output.html");

    let mut tree = ElementTree::new();
    let p = tree.new_node("p", "x", no_attrs()).unwrap();

    assert!(matches!(tree.render_to_file(p, &path), Err(TreeError::Io(_))));
    assert!(!path.exists());
}
