use ariadom::a11y::{active_descendant, controlled, find_by_role, snapshot};
use ariadom::element::find_element;
use ariadom::{aria, layout, Buffer, Element, Rect, Role};
use combobox::{Combobox, ComboboxConfig};

fn aria_of<'a>(root: &'a Element, id: &str, name: &str) -> Option<&'a str> {
    find_element(root, id)?.get_aria(name)
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_closed_snapshot() {
    let combobox = Combobox::new(["Apple", "Banana", "Cherry"]);
    let id = combobox.id();

    let expected = [
        format!(r#"combobox #{id} aria-expanded="false" aria-haspopup="listbox""#),
        format!(
            r#"  textbox #{id}-input aria-autocomplete="list" aria-controls="{id}-listbox" value="""#
        ),
    ]
    .join("\n");
    assert_eq!(snapshot(&combobox.element()), expected);
}

#[test]
fn test_open_highlighted_snapshot() {
    let combobox = Combobox::new(["Apple", "Banana", "Cherry"]);
    let id = combobox.id();
    combobox.input("a");
    combobox.arrow_down();
    combobox.arrow_down();

    let expected = [
        format!(r#"combobox #{id} aria-expanded="true" aria-haspopup="listbox""#),
        format!(
            r#"  textbox #{id}-input aria-activedescendant="{id}-option-1" aria-autocomplete="list" aria-controls="{id}-listbox" value="a""#
        ),
        format!("  listbox #{id}-listbox"),
        format!(r#"    option #{id}-option-0 aria-selected="false" "Apple""#),
        format!(r#"    option #{id}-option-1 aria-selected="true" "Banana""#),
    ]
    .join("\n");
    assert_eq!(snapshot(&combobox.element()), expected);
}

#[test]
fn test_no_results_snapshot() {
    let combobox = Combobox::new(Vec::<String>::new());
    let id = combobox.id();
    combobox.input("kiwi");

    let expected = [
        format!(r#"combobox #{id} aria-expanded="true" aria-haspopup="listbox""#),
        format!(
            r#"  textbox #{id}-input aria-autocomplete="list" aria-controls="{id}-listbox" value="kiwi""#
        ),
        format!("  listbox #{id}-listbox"),
        format!(r#"    option #{id}-no-results "No results found""#),
    ]
    .join("\n");
    assert_eq!(snapshot(&combobox.element()), expected);
}

// ============================================================================
// ARIA Wiring
// ============================================================================

#[test]
fn test_expanded_tracks_open_flag() {
    let combobox = Combobox::new(["Apple"]);
    let wrapper = combobox.wrapper_id();

    let root = combobox.element();
    assert_eq!(aria_of(&root, &wrapper, aria::EXPANDED), Some("false"));
    assert_eq!(aria_of(&root, &wrapper, aria::HAS_POPUP), Some("listbox"));
    assert_eq!(root.role, Some(Role::Combobox));

    combobox.focus();
    let root = combobox.element();
    assert_eq!(aria_of(&root, &wrapper, aria::EXPANDED), Some("true"));

    combobox.escape();
    let root = combobox.element();
    assert_eq!(aria_of(&root, &wrapper, aria::EXPANDED), Some("false"));
}

#[test]
fn test_input_controls_listbox() {
    let combobox = Combobox::new(["Apple"]);
    combobox.focus();
    let root = combobox.element();

    let listbox = controlled(&root, &combobox.input_id()).unwrap();
    assert_eq!(listbox.id, combobox.listbox_id());
    assert_eq!(listbox.role, Some(Role::Listbox));
    assert_eq!(
        aria_of(&root, &combobox.input_id(), aria::AUTOCOMPLETE),
        Some("list")
    );
}

#[test]
fn test_active_descendant_follows_highlight() {
    let combobox = Combobox::new(["Apple", "Banana", "Cherry"]);
    combobox.focus();
    let input = combobox.input_id();

    let root = combobox.element();
    assert_eq!(aria_of(&root, &input, aria::ACTIVE_DESCENDANT), None);

    for expected in ["Apple", "Banana", "Cherry"] {
        combobox.arrow_down();
        let root = combobox.element();
        let active = active_descendant(&root, &input).unwrap();
        assert_eq!(active.content.text(), Some(expected));
        assert_eq!(active.get_aria(aria::SELECTED), Some("true"));
    }

    combobox.arrow_up();
    combobox.arrow_up();
    combobox.arrow_up();
    let root = combobox.element();
    assert_eq!(aria_of(&root, &input, aria::ACTIVE_DESCENDANT), None);
}

#[test]
fn test_active_descendant_absent_while_closed() {
    let combobox = Combobox::new(["Apple", "Banana"]);
    combobox.focus();
    combobox.arrow_down();
    combobox.escape();

    // Highlight survives closing, but there is no row to point at
    assert_eq!(combobox.highlighted(), Some(0));
    let root = combobox.element();
    assert_eq!(
        aria_of(&root, &combobox.input_id(), aria::ACTIVE_DESCENDANT),
        None
    );
}

#[test]
fn test_exactly_one_row_selected() {
    let combobox = Combobox::new(["Apple", "Banana", "Cherry", "Date"]);
    combobox.focus();
    combobox.hover(2);

    let root = combobox.element();
    let selected: Vec<&str> = find_by_role(&root, Role::Option)
        .into_iter()
        .filter(|row| row.get_aria(aria::SELECTED) == Some("true"))
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(selected, vec![combobox.option_id(2)]);
}

#[test]
fn test_no_row_selected_without_highlight() {
    let combobox = Combobox::new(["Apple", "Banana"]);
    combobox.focus();

    let root = combobox.element();
    let rows = find_by_role(&root, Role::Option);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.get_aria(aria::SELECTED) == Some("false")));
}

// ============================================================================
// Rendering Contract
// ============================================================================

#[test]
fn test_closed_renders_no_listbox() {
    let combobox = Combobox::new(["Apple"]);
    let root = combobox.element();
    assert!(find_element(&root, &combobox.listbox_id()).is_none());
    assert!(find_by_role(&root, Role::Option).is_empty());
}

#[test]
fn test_rows_are_clickable_and_highlight_is_styled() {
    let combobox = Combobox::new(["Apple", "Banana"]);
    combobox.focus();
    combobox.arrow_down();
    let root = combobox.element();

    let first = find_element(&root, &combobox.option_id(0)).unwrap();
    let second = find_element(&root, &combobox.option_id(1)).unwrap();
    assert!(first.clickable && second.clickable);
    assert!(first.has_class("combobox-option"));
    assert!(first.has_class("highlighted"));
    assert!(!second.has_class("highlighted"));
    assert_ne!(first.style, second.style);
}

#[test]
fn test_no_results_row_is_inert() {
    let config = ComboboxConfig {
        no_results_text: "Nothing matches".to_string(),
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(["Apple"], config);
    combobox.input("zz");

    let root = combobox.element();
    let rows = find_by_role(&root, Role::Option);
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert!(row.has_class("no-results"));
    assert!(!row.clickable);
    assert_eq!(row.get_aria(aria::SELECTED), None);
    assert_eq!(row.content.text(), Some("Nothing matches"));
    assert_eq!(combobox.option_key(&row.id), None);
}

#[test]
fn test_placeholder_from_config() {
    let config = ComboboxConfig {
        placeholder: Some("Pick a fruit".to_string()),
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(["Apple"], config);
    let root = combobox.element();
    let input = find_element(&root, &combobox.input_id()).unwrap();
    assert!(matches!(
        &input.content,
        ariadom::Content::TextInput { placeholder: Some(p), .. } if p == "Pick a fruit"
    ));
}

#[test]
fn test_instances_do_not_share_ids() {
    let first = Combobox::new(["Apple"]);
    let second = Combobox::new(["Apple"]);
    assert_ne!(first.id(), second.id());
    assert_ne!(first.input_id(), second.input_id());
    assert_ne!(first.option_id(0), second.option_id(0));

    assert_eq!(first.option_key(&first.option_id(7)), Some(7));
    assert_eq!(second.option_key(&first.option_id(7)), None);
    assert_eq!(first.option_key(&first.input_id()), None);
}

// ============================================================================
// Scrolling Listbox
// ============================================================================

const FRUITS: [&str; 11] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
    "Mango",
];

#[test]
fn test_listbox_height_and_offset() {
    let config = ComboboxConfig {
        max_visible_rows: 3,
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(FRUITS, config);
    combobox.focus();
    for _ in 0..6 {
        combobox.arrow_down();
    }
    assert_eq!(combobox.scroll_offset(), 3);

    let root = combobox.element();
    let listbox = find_element(&root, &combobox.listbox_id()).unwrap();
    assert_eq!(listbox.max_height, Some(5));
    assert_eq!(listbox.scroll_offset, 3);
}

#[test]
fn test_highlighted_row_is_painted_in_view() {
    let config = ComboboxConfig {
        width: 20,
        max_visible_rows: 3,
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(FRUITS, config);
    combobox.focus();
    for _ in 0..6 {
        combobox.arrow_down();
    }

    let root = combobox.element();
    let layout = layout(&root, Rect::from_size(20, 10));
    let mut buf = Buffer::new(20, 10);
    ariadom::render::render_to_buffer(&root, &layout, &mut buf);

    // Input takes rows 0-2, the listbox border row 3
    assert!(buf.row_text(4).contains("Date"));
    assert!(buf.row_text(5).contains("Elderberry"));
    assert!(buf.row_text(6).contains("Fig"));
    assert!(buf.row_text(7).starts_with('└'));
    assert!((0..10).all(|y| !buf.row_text(y).contains("Apple")));

    // Only the rows in view are hittable
    assert!(layout.get(&combobox.option_id(2)).is_none());
    assert_eq!(layout.get(&combobox.option_id(5)).map(|r| r.y), Some(6));
}

#[test]
fn test_short_screen_scrolls_highlight_into_view() {
    let config = ComboboxConfig {
        width: 20,
        max_visible_rows: 6,
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(FRUITS, config);
    combobox.focus();
    for _ in 0..4 {
        combobox.arrow_down();
    }
    assert_eq!(combobox.scroll_offset(), 0);

    // Seven rows leave the listbox three: input 0-2, border 3, rows 4-6
    let area = Rect::from_size(20, 7);
    assert!(combobox.sync_viewport(&layout(&combobox.element(), area)));
    assert_eq!(combobox.scroll_offset(), 1);
    assert!(combobox.is_dirty());

    let root = combobox.element();
    let layout = layout(&root, area);
    assert!(!combobox.sync_viewport(&layout));
    assert_eq!(layout.visible(&combobox.option_id(3)).map(|r| r.y), Some(6));

    // Later moves scroll within the measured height
    combobox.arrow_down();
    assert_eq!(combobox.scroll_offset(), 2);
}

#[test]
fn test_tall_screen_keeps_configured_viewport() {
    let config = ComboboxConfig {
        max_visible_rows: 3,
        ..ComboboxConfig::default()
    };
    let combobox = Combobox::with_config(FRUITS, config);
    combobox.focus();
    combobox.arrow_down();

    assert!(!combobox.sync_viewport(&layout(&combobox.element(), Rect::from_size(80, 24))));
    for _ in 0..5 {
        combobox.arrow_down();
    }
    assert_eq!(combobox.scroll_offset(), 3);
}
