use formdom::{
    collect_focusable, hit_test, hit_test_any, Document, Element, Event, FocusState, Key,
    LayoutResult, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::div()
        .id("root")
        .clickable(true)
        .child(Element::button().id("btn"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_later_sibling_on_top() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("bottom").clickable(true))
        .child(Element::div().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_skips_hidden_subtree() {
    let root = Element::div()
        .id("root")
        .child(
            Element::div()
                .id("popup")
                .hidden(true)
                .child(Element::button().id("day")),
        );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("day", Rect::new(10, 10, 20, 20)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 15), None);
    assert_eq!(hit_test_any(&layout, &root, 15, 15), Some("root".to_string()));
}

#[test]
fn test_hit_test_child_outside_parent_rect() {
    // Absolutely placed content can overflow its parent.
    let root = Element::div()
        .id("root")
        .child(Element::div().id("anchor").child(Element::button().id("floating")));

    let layout = create_layout(&[
        ("anchor", Rect::new(0, 0, 10, 10)),
        ("floating", Rect::new(50, 50, 10, 10)),
    ]);

    assert_eq!(hit_test(&layout, &root, 55, 55), Some("floating".to_string()));
}

#[test]
fn test_element_at_uses_document_layout() {
    let mut doc = Document::new(Element::div().id("root").child(Element::span().id("label")));
    doc.set_rect("label", Rect::new(0, 0, 40, 20));

    assert_eq!(doc.element_at(5, 5), Some("label".to_string()));
    assert_eq!(doc.element_at(50, 5), None);
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_order_and_visibility() {
    let root = Element::div()
        .id("root")
        .child(Element::text_input("").id("a"))
        .child(Element::button().id("b").disabled(true))
        .child(Element::div().hidden(true).child(Element::button().id("c")))
        .child(Element::textarea().id("d"));

    assert_eq!(collect_focusable(&root), vec!["a", "d"]);
}

#[test]
fn test_focus_state_changes() {
    let mut focus = FocusState::new();

    assert!(focus.focus("a"));
    assert!(!focus.focus("a"));
    assert_eq!(focus.focused(), Some("a"));
    assert!(focus.blur());
    assert!(!focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_target() {
    assert_eq!(Event::click("btn").target(), Some("btn"));
    assert_eq!(Event::PointerDown { target: None }.target(), None);
    assert_eq!(Event::key(Some("input".to_string()), Key::Escape).target(), Some("input"));
    assert_eq!(
        Event::Resize {
            width: 800,
            height: 600
        }
        .target(),
        None
    );
}

#[test]
fn test_change_bubbles() {
    assert!(matches!(
        Event::change("input"),
        Event::Change { bubbles: true, .. }
    ));
}
