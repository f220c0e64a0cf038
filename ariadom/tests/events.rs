use ariadom::{
    collect_focusable, hit_test, hit_test_any, layout, Element, Event, FocusState, Key,
    LayoutResult, Modifiers, MouseButton, Overflow, Rect, Size,
};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn left_down(column: u16, row: u16) -> CrosstermEvent {
    mouse(
        MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column,
        row,
    )
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Click inside btn
    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));

    // Click inside root but outside btn
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));

    // Click outside everything
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    // hit_test_any returns element even if not clickable
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_skips_scrolled_out_rows() {
    let list = Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .max_height(2)
        .overflow_y(Overflow::Scroll)
        .scroll_offset(1)
        .children((0..3).map(|i| {
            Element::text(format!("row {i}"))
                .id(format!("r{i}"))
                .clickable(true)
        }));

    let layout = layout(&list, Rect::from_size(20, 10));

    assert_eq!(hit_test(&layout, &list, 0, 0), Some("r1".to_string()));
    assert_eq!(hit_test(&layout, &list, 0, 1), Some("r2".to_string()));
    assert_eq!(hit_test(&layout, &list, 0, 2), None);
}

// ============================================================================
// Focus State
// ============================================================================

fn form() -> Element {
    Element::col()
        .id("root")
        .child(Element::text_input("").id("first"))
        .child(Element::text("label").id("label"))
        .child(Element::text_input("").id("second"))
}

#[test]
fn test_collect_focusable_in_tree_order() {
    assert_eq!(collect_focusable(&form()), vec!["first", "second"]);
}

#[test]
fn test_focus_cycles_and_wraps() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.next_focusable(&root).as_deref(), Some("first"));
    assert!(focus.focus("first"));
    assert!(!focus.focus("first"));
    assert_eq!(focus.next_focusable(&root).as_deref(), Some("second"));
    assert_eq!(focus.prev_focusable(&root).as_deref(), Some("second"));

    focus.focus("second");
    assert_eq!(focus.next_focusable(&root).as_deref(), Some("first"));

    assert!(focus.blur());
    assert!(!focus.blur());
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_apply_marks_focused_input() {
    let mut root = form();
    let mut focus = FocusState::new();
    focus.focus("second");
    focus.apply(&mut root);

    let second = ariadom::element::find_element(&root, "second").unwrap();
    assert!(second.focused);
    assert!(matches!(
        second.content,
        ariadom::Content::TextInput { focused: true, .. }
    ));

    let first = ariadom::element::find_element(&root, "first").unwrap();
    assert!(!first.focused);
}

// ============================================================================
// Raw Event Processing
// ============================================================================

/// input at row 0, clickable option at row 1, plain label at row 2
fn page() -> (Element, LayoutResult) {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("input"))
        .child(Element::text("Option").id("opt").clickable(true))
        .child(Element::text("Label").id("label"));
    let layout = layout(&root, Rect::from_size(20, 5));
    (root, layout)
}

#[test]
fn test_tab_moves_focus() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "input".to_string()
        }]
    );

    // Only one focusable element; focus stays put
    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert!(events.is_empty());
}

#[test]
fn test_keys_target_focused_element() {
    let (root, layout) = page();
    let mut focus = FocusState::new();
    focus.focus("input");

    let events = focus.process_events(&[key(KeyCode::Char('a'))], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("input".to_string()),
            key: Key::Char('a'),
            modifiers: Modifiers::default(),
        }]
    );
}

#[test]
fn test_key_release_ignored() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(focus.process_events(&[release], &root, &layout).is_empty());
}

#[test]
fn test_mouse_down_on_clickable_emits_path_and_click() {
    let (root, layout) = page();
    let mut focus = FocusState::new();
    focus.focus("input");

    let events = focus.process_events(&[left_down(0, 1)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::MouseDown {
                target: Some("opt".to_string()),
                path: vec!["root".to_string(), "opt".to_string()],
                x: 0,
                y: 1,
                button: MouseButton::Left,
            },
            // Nothing focusable under the pointer: focus leaves the input
            Event::Blur {
                target: "input".to_string()
            },
            Event::Click {
                target: "opt".to_string(),
                x: 0,
                y: 1,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_mouse_down_on_input_focuses_it() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[left_down(0, 0)], &root, &layout);
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::MouseDown { target: Some(t), .. } if t == "input"));
    assert_eq!(
        events[1],
        Event::Focus {
            target: "input".to_string()
        }
    );
    assert_eq!(focus.focused(), Some("input"));
}

#[test]
fn test_right_button_leaves_focus() {
    let (root, layout) = page();
    let mut focus = FocusState::new();
    focus.focus("input");

    let right = mouse(
        MouseEventKind::Down(crossterm::event::MouseButton::Right),
        0,
        1,
    );
    let events = focus.process_events(&[right], &root, &layout);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::MouseDown {
            button: MouseButton::Right,
            ..
        }
    ));
    assert_eq!(focus.focused(), Some("input"));
}

#[test]
fn test_mouse_down_outside_tree_has_empty_path() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[left_down(15, 4)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::MouseDown {
            target: None,
            path: Vec::new(),
            x: 15,
            y: 4,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_hover_enter_and_leave() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 1, 1)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::MouseEnter {
            target: "opt".to_string()
        }]
    );
    assert_eq!(focus.hovered(), Some("opt"));

    // Moving within the same element is silent
    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 2, 1)], &root, &layout);
    assert!(events.is_empty());

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 15, 4)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::MouseLeave {
            target: "opt".to_string()
        }]
    );
    assert_eq!(focus.hovered(), None);
}

#[test]
fn test_scroll_events() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(
        &[
            mouse(MouseEventKind::ScrollDown, 0, 2),
            mouse(MouseEventKind::ScrollUp, 0, 2),
        ],
        &root,
        &layout,
    );
    let deltas: Vec<i16> = events
        .iter()
        .map(|e| match e {
            Event::Scroll { delta_y, path, .. } => {
                assert_eq!(path, &vec!["root".to_string(), "label".to_string()]);
                *delta_y
            }
            other => panic!("unexpected event {:?}", other),
        })
        .collect();
    assert_eq!(deltas, vec![1, -1]);
}

#[test]
fn test_resize_event() {
    let (root, layout) = page();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[CrosstermEvent::Resize(80, 24)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}

// ============================================================================
// Tree Queries
// ============================================================================

#[test]
fn test_path_to_and_contains() {
    use ariadom::element::{contains, path_to};

    let root = form();
    assert_eq!(path_to(&root, "second"), vec!["root", "second"]);
    assert_eq!(path_to(&root, "root"), vec!["root"]);
    assert!(path_to(&root, "missing").is_empty());

    assert!(contains(&root, "root", "label"));
    assert!(contains(&root, "label", "label"));
    assert!(!contains(&root, "first", "label"));
}
