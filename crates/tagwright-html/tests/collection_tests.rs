//! Integration tests for the ordered tag collection.

use tagwright_html::{HtmlTagObject, TagList, render_tag};

/// Helper to build a list of pre-rendered tag strings.
fn rendered(strings: &[&str]) -> TagList<String> {
    strings.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_concatenation_has_no_separator() {
    let tags = rendered(&["<br>", "<hr>"]);
    assert_eq!(tags.to_markup(), "<br><hr>");
    assert_eq!(tags.to_string(), "<br><hr>");
}

#[test]
fn test_empty_collection_converts_to_empty_string() {
    let tags: TagList<String> = TagList::new();
    assert_eq!(tags.to_markup(), "");
}

#[test]
fn test_tag_objects_concatenate_through_their_own_display() {
    let mut script = HtmlTagObject::new("script");
    script.set_attr("src", "main.js");
    let tags = TagList::from(vec![script, HtmlTagObject::new("hr")]);

    assert_eq!(tags.to_markup(), "<script src=\"main.js\"></script><hr>");
}

#[test]
fn test_filter_keeps_order_and_conversion() {
    let tags = TagList::from(vec![
        HtmlTagObject::new("script"),
        HtmlTagObject::new("style"),
        HtmlTagObject::new("script"),
    ]);

    let scripts = tags.filter(|tag| tag.tag_name == "script");

    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts.to_markup(), "<script></script><script></script>");
    // The source collection is untouched.
    assert_eq!(tags.len(), 3);
}

#[test]
fn test_map_feeds_an_external_rendering_step() {
    let tags = TagList::from(vec![HtmlTagObject::new("br"), HtmlTagObject::new("hr")]);

    // The collection never invokes the serializer; callers map it in.
    let xhtml = tags.map(|tag| render_tag(tag, true));

    assert_eq!(xhtml.to_markup(), "<br/><hr/>");
}

#[test]
fn test_slice_copies_the_requested_range() {
    let tags = rendered(&["<a></a>", "<b></b>", "<c></c>"]);
    assert_eq!(tags.slice(1..3).to_markup(), "<b></b><c></c>");
}

#[test]
fn test_slice_clamps_out_of_range_bounds() {
    let tags = rendered(&["<a></a>", "<b></b>"]);
    assert_eq!(tags.slice(1..99).to_markup(), "<b></b>");
    assert_eq!(tags.slice(5..9).len(), 0);
    // Inverted range yields an empty collection instead of panicking.
    assert_eq!(tags.slice(2..0).len(), 0);
}

#[test]
fn test_push_index_get_and_len() {
    let mut tags = TagList::new();
    assert!(tags.is_empty());

    tags.push("<br>".to_string());
    tags.push("<hr>".to_string());

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], "<br>");
    assert_eq!(tags.get(1).map(String::as_str), Some("<hr>"));
    assert_eq!(tags.get(2), None);
}

#[test]
fn test_duplicates_are_permitted() {
    let tags = rendered(&["<br>", "<br>"]);
    assert_eq!(tags.to_markup(), "<br><br>");
}

#[test]
fn test_extend_and_iteration_order() {
    let mut tags = rendered(&["<a></a>"]);
    tags.extend(["<b></b>".to_string(), "<c></c>".to_string()]);

    let collected: Vec<&String> = tags.iter().collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(tags.to_markup(), "<a></a><b></b><c></c>");
}
