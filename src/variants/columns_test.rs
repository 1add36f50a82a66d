use super::*;

fn channels() -> Vec<ChannelData> {
    vec![
        ChannelData { id: "ch-1".into(), name: "Default".into(), currency: "USD".into() },
        ChannelData { id: "ch-2".into(), name: "Europe".into(), currency: "EUR".into() },
    ]
}

fn attributes() -> Vec<VariantAttribute> {
    vec![VariantAttribute { id: "a-1".into(), name: "Size".into(), input_type: Some("DROPDOWN".into()) }]
}

fn warehouses() -> Vec<Warehouse> {
    vec![Warehouse { id: "wh-1".into(), name: "Main".into() }]
}

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

fn column_set(selected: &[String]) -> ColumnSet {
    let categories = vec![
        channel_category(&channels(), selected),
        availability_category(&channels(), selected),
        attribute_category(&attributes(), selected),
        warehouse_category(&warehouses(), selected),
    ];
    ColumnSet::new(static_columns(), categories, selected)
}

#[test]
fn parses_column_ids() {
    assert_eq!(parse_column_id("name"), ColumnRef::Name);
    assert_eq!(parse_column_id("sku"), ColumnRef::Sku);
    assert_eq!(parse_column_id("channel:ch-1"), ColumnRef::ChannelPrice("ch-1"));
    assert_eq!(parse_column_id("availableInChannel:ch-2"), ColumnRef::ChannelAvailability("ch-2"));
    assert_eq!(parse_column_id("attribute:a-1"), ColumnRef::Attribute("a-1"));
    assert_eq!(parse_column_id("warehouse:wh-1"), ColumnRef::Warehouse("wh-1"));
    assert_eq!(parse_column_id("warehouse:"), ColumnRef::Unknown);
    assert_eq!(parse_column_id("bogus:x"), ColumnRef::Unknown);
    assert_eq!(parse_column_id("price"), ColumnRef::Unknown);
}

#[test]
fn column_id_joins_prefix_and_id() {
    assert_eq!(column_id(CHANNEL_PREFIX, "ch-1"), "channel:ch-1");
}

#[test]
fn availability_titles_name_the_channel() {
    let cat = availability_category(&channels(), &[]);
    assert_eq!(cat.available_nodes[1].title, "Available in Europe");
    assert!(cat.selected_nodes.is_empty());
}

#[test]
fn empty_selection_shows_static_columns() {
    let set = column_set(&[]);
    let visible: Vec<&str> = set.visible().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(visible, vec!["name", "sku"]);
    assert!(set.dynamic_columns().is_empty());
}

#[test]
fn initial_order_is_static_then_dynamic_in_selection_order() {
    let set = column_set(&ids(&["warehouse:wh-1", "channel:ch-2", "name", "gone:1"]));
    assert_eq!(set.selected(), ids(&["name", "warehouse:wh-1", "channel:ch-2"]));
    let dynamic: Vec<&str> = set.dynamic_columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(dynamic, vec!["warehouse:wh-1", "channel:ch-2"]);
    assert_eq!(set.categories()[0].selected_nodes.len(), 1);
}

#[test]
fn toggle_adds_and_removes() {
    let mut set = column_set(&[]);
    let selected = set.toggle("attribute:a-1");
    assert_eq!(selected, ids(&["name", "sku", "attribute:a-1"]));
    assert_eq!(set.recently_added(), Some("attribute:a-1"));
    assert_eq!(set.categories()[2].selected_nodes[0].title, "Size");

    let selected = set.toggle("sku");
    assert_eq!(selected, ids(&["name", "attribute:a-1"]));
    assert_eq!(set.recently_added(), Some("attribute:a-1"));

    set.toggle("attribute:a-1");
    assert_eq!(set.recently_added(), None);
    assert!(set.categories()[2].selected_nodes.is_empty());
}

#[test]
fn toggle_unknown_column_is_ignored() {
    let mut set = column_set(&[]);
    assert_eq!(set.toggle("channel:nope"), ids(&["name", "sku"]));
    assert_eq!(set.recently_added(), None);
}

#[test]
fn move_column_reorders_visible() {
    let mut set = column_set(&ids(&["name", "sku", "channel:ch-1"]));
    assert_eq!(set.move_column(2, 0), ids(&["channel:ch-1", "name", "sku"]));
    assert_eq!(set.column_at(0).map(|c| c.title.as_str()), Some("Default"));
    assert_eq!(set.move_column(0, 9), ids(&["channel:ch-1", "name", "sku"]));
}

#[test]
fn resize_clamps_to_minimum() {
    let mut set = column_set(&[]);
    set.resize("sku", 10);
    assert_eq!(set.column_at(1).map(|c| c.width), Some(MIN_COLUMN_WIDTH));
    set.resize("name", 320);
    assert_eq!(set.column_at(0).map(|c| c.width), Some(320));
}

#[test]
fn repeated_selection_ids_show_once() {
    let mut set = column_set(&ids(&["name", "channel:ch-1", "channel:ch-1", "name"]));
    assert_eq!(set.selected(), ids(&["name", "channel:ch-1"]));
    assert_eq!(set.categories()[0].selected_nodes.len(), 1);

    assert_eq!(set.toggle("channel:ch-1"), ids(&["name"]));
    assert!(set.dynamic_columns().is_empty());
}
