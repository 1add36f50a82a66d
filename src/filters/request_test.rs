use super::*;

#[test]
fn new_request_is_empty() {
    let request = FilterRequest::new();
    assert!(request.is_empty());
    for dimension in Dimension::ALL {
        assert!(!request.requests(dimension));
    }
}

#[test]
fn builders_dedupe_and_drop_blanks_keeping_order() {
    let request = FilterRequest::new()
        .with_category(["shoes", "", "hats", "shoes", "  "])
        .with_channel(["default-channel"]);
    assert_eq!(request.category(), ["shoes", "hats"]);
    assert_eq!(request.channel(), ["default-channel"]);
    assert!(request.requests(Dimension::Category));
    assert!(!request.requests(Dimension::Collection));
}

#[test]
fn attribute_without_choices_is_still_requested() {
    let request = FilterRequest::new().with_attribute("color", Vec::<String>::new());
    assert!(request.requests(Dimension::Attribute));
    assert_eq!(request.attribute_slugs(), ["color"]);
    assert!(request.attribute_choice_ids().is_empty());
}

#[test]
fn blank_attribute_slug_is_ignored() {
    let request = FilterRequest::new().with_attribute(" ", ["red"]);
    assert!(request.is_empty());
}

#[test]
fn choice_ids_flatten_across_attributes() {
    let request = FilterRequest::new()
        .with_attribute("size", ["xl"])
        .with_attribute("color", ["red", "blue"])
        .with_attribute("color", ["red"]);
    assert_eq!(request.attribute_slugs(), ["color", "size"]);
    assert_eq!(request.attribute_choice_ids(), ["red", "blue", "xl"]);
}

#[test]
fn from_query_pairs_routes_keys() {
    let request = FilterRequest::from_query_pairs([
        ("category", "shoes"),
        ("collection", "summer"),
        ("channel", "ch2"),
        ("producttype", "simple"),
        ("attribute.color", "red"),
        ("attribute.color", "blue"),
        ("sort", "name"),
    ]);
    assert_eq!(request.category(), ["shoes"]);
    assert_eq!(request.collection(), ["summer"]);
    assert_eq!(request.channel(), ["ch2"]);
    assert_eq!(request.product_type(), ["simple"]);
    assert_eq!(request.attribute().get("color").unwrap(), &vec!["red".to_string(), "blue".to_string()]);
}

#[test]
fn from_query_pairs_trims_and_dedupes() {
    let request = FilterRequest::from_query_pairs([
        ("category", " shoes "),
        ("category", "shoes"),
        ("category", "  "),
        ("attribute.color", "red"),
        ("attribute.color", "red "),
    ]);
    assert_eq!(request.category(), ["shoes"]);
    assert_eq!(request.attribute().get("color").unwrap(), &vec!["red".to_string()]);
}

#[test]
fn dimension_names_and_markers() {
    assert_eq!(Dimension::ProductType.to_string(), "producttype");
    assert_eq!(Dimension::ProductType.marker_field(), "productTypes");
    assert_eq!(serde_json::to_value(Dimension::ProductType).unwrap(), "producttype");
}
