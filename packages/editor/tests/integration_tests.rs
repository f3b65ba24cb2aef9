//! Integration tests for editor crate

use blockpage_editor::{
    Action, Builder, CanvasRect, ClickOutcome, EditorError, ElementKind, ElementValue, FieldKey,
    Layout, LinkValue, PointerClick, Position,
};

fn builder_with_one_of_each(layout: Layout) -> Builder {
    let mut builder = Builder::new(layout);
    for kind in ElementKind::ALL {
        builder.add(kind);
    }
    builder
}

#[test]
fn test_append_sequence_preserves_kinds() {
    let kinds = [
        ElementKind::List,
        ElementKind::List,
        ElementKind::Image,
        ElementKind::Heading,
        ElementKind::Link,
        ElementKind::Paragraph,
        ElementKind::Heading,
    ];

    let mut builder = Builder::default();
    for kind in kinds {
        builder.add(kind);
    }

    assert_eq!(builder.elements().len(), kinds.len());
    for (element, kind) in builder.elements().iter().zip(kinds) {
        assert_eq!(element.kind(), kind);
    }
}

#[test]
fn test_commit_leaves_other_elements_untouched() {
    let mut builder = builder_with_one_of_each(Layout::Flow);
    let before = builder.elements().to_vec();

    builder.activate(2).unwrap();
    builder.set_field(FieldKey::LinkText, "Docs").unwrap();
    builder.set_field(FieldKey::LinkUrl, "https://docs.example").unwrap();
    let working = builder.session().unwrap().value.clone();
    builder.save().unwrap();

    for (i, (after, before)) in builder.elements().iter().zip(&before).enumerate() {
        if i == 2 {
            assert_eq!(after.value, working);
        } else {
            assert_eq!(after, before);
        }
    }
    assert_eq!(
        builder.elements()[2].value,
        ElementValue::Link(LinkValue {
            text: "Docs".to_string(),
            url: "https://docs.example".to_string(),
        })
    );
}

#[test]
fn test_store_unchanged_until_save() {
    let mut builder = builder_with_one_of_each(Layout::Flow);

    builder.activate(0).unwrap();
    builder.set_field(FieldKey::Text, "Unsaved").unwrap();

    assert_eq!(
        builder.elements()[0].value,
        ElementValue::Heading("Sample H1".to_string())
    );

    builder.save().unwrap();
    assert_eq!(
        builder.elements()[0].value,
        ElementValue::Heading("Unsaved".to_string())
    );
    assert!(builder.session().is_none());
}

#[test]
fn test_list_edit_changes_one_item() {
    let mut builder = builder_with_one_of_each(Layout::Flow);

    builder.activate(3).unwrap();
    builder.set_field(FieldKey::ListItem(1), "Second").unwrap();
    builder.save().unwrap();

    assert_eq!(
        builder.elements()[3].value,
        ElementValue::List(vec![
            "Item 1".to_string(),
            "Second".to_string(),
            "Item 3".to_string(),
        ])
    );
}

#[test]
fn test_rejected_edit_keeps_session() {
    let mut builder = builder_with_one_of_each(Layout::Flow);
    builder.activate(3).unwrap();

    let err = builder.set_field(FieldKey::ListItem(3), "Fourth").unwrap_err();
    assert!(matches!(err, EditorError::Edit(_)));

    let session = builder.session().unwrap();
    assert_eq!(session.index, 3);
    assert_eq!(session.fields().len(), 3);
}

#[test]
fn test_absolute_append_takes_capture_state() {
    let mut builder = Builder::new(Layout::Absolute);
    builder.set_capture(Position::new(10, 20));

    let index = builder.add(ElementKind::Image);

    assert_eq!(builder.elements()[index].position, Some(Position::new(10, 20)));
}

#[test]
fn test_lock_mode_blocks_canvas_clicks() {
    let mut builder = builder_with_one_of_each(Layout::Absolute);
    let rect = CanvasRect::new(100.0, 100.0, 500.0, 500.0);
    builder.set_capture(Position::new(7, 8));

    assert!(builder.toggle_lock());
    for target in [None, Some(0), Some(4)] {
        let outcome = builder
            .canvas_click(PointerClick::new(250.0, 250.0), rect, target)
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
    }

    assert!(builder.session().is_none());
    assert_eq!(builder.canvas().capture, Position::new(7, 8));

    assert!(!builder.toggle_lock());
    let outcome = builder
        .canvas_click(PointerClick::new(250.0, 250.0), rect, None)
        .unwrap();
    assert_eq!(outcome, ClickOutcome::Captured(Position::new(150, 150)));
}

#[test]
fn test_reposition_through_clicks() {
    let rect = CanvasRect::new(0.0, 0.0, 1000.0, 1000.0);
    let mut builder = Builder::new(Layout::Absolute).with_canvas_rect(rect);

    builder
        .replay(vec![
            Action::CanvasClick { client_x: 40.0, client_y: 50.0, target: None },
            Action::Add { kind: ElementKind::Heading },
            Action::CanvasClick { client_x: 41.0, client_y: 51.0, target: Some(0) },
            Action::CanvasClick { client_x: 400.0, client_y: 500.0, target: None },
            Action::Save,
        ])
        .unwrap();

    assert_eq!(builder.elements()[0].position, Some(Position::new(400, 500)));
}

#[test]
fn test_default_content_survives_without_edits() {
    let builder = builder_with_one_of_each(Layout::Flow);

    let values: Vec<_> = builder.elements().iter().map(|e| e.value.clone()).collect();
    assert_eq!(values[0], ElementValue::Heading("Sample H1".to_string()));
    assert_eq!(values[1], ElementValue::Paragraph("Sample Paragraph".to_string()));
    assert_eq!(
        values[4],
        ElementValue::Image("https://via.placeholder.com/150".to_string())
    );
}
