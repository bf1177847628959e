use formdom::{layout, Border, Edges, Element, Position, Rect, Size, Style};

// ============================================================================
// Flow layout
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result["root"], Rect::new(0, 0, 20, 10));
    assert_eq!(result["a"], Rect::new(0, 0, 3, 1));
    assert_eq!(result["b"], Rect::new(0, 1, 3, 1));
}

#[test]
fn test_gap_and_padding() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result["a"], Rect::new(1, 1, 3, 1));
    assert_eq!(result["b"], Rect::new(1, 3, 3, 1));
}

#[test]
fn test_fill_children_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .child(Element::text("ab").id("fixed"))
        .child(Element::text("x").id("fill").width(Size::Fill));

    let result = layout(&root, Rect::from_size(40, 5));

    assert_eq!(result["fixed"], Rect::new(0, 0, 2, 1));
    assert_eq!(result["fill"], Rect::new(2, 0, 18, 1));
}

#[test]
fn test_border_insets_children() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("hi").id("label").width(Size::Fill));

    let result = layout(&root, Rect::from_size(40, 5));

    assert_eq!(result["label"], Rect::new(1, 1, 8, 1));
}

#[test]
fn test_auto_size_includes_fixed_children() {
    let field = Element::col()
        .id("field")
        .width(Size::Fill)
        .child(Element::text("Label"))
        .child(Element::row().height(Size::Fixed(3)));

    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(field)
        .child(Element::text("after").id("after"));

    let result = layout(&root, Rect::from_size(30, 20));

    assert_eq!(result["field"].height, 4);
    assert_eq!(result["after"].y, 4);
}

// ============================================================================
// Absolute positioning
// ============================================================================

#[test]
fn test_absolute_children_leave_the_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("first").id("first"))
        .child(
            Element::box_()
                .id("floating")
                .position(Position::Absolute)
                .left(5)
                .top(4)
                .width(Size::Fixed(6))
                .height(Size::Fixed(2)),
        )
        .child(Element::text("second").id("second"));

    let result = layout(&root, Rect::from_size(30, 10));

    assert_eq!(result["second"].y, 1, "absolute child must not take flow space");
    assert_eq!(result["floating"], Rect::new(5, 4, 6, 2));
}

#[test]
fn test_absolute_anchors_to_screen_bottom() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .child(
            Element::col()
                .id("nested")
                .child(
                    Element::box_()
                        .id("sheet")
                        .position(Position::Absolute)
                        .left(0)
                        .bottom(0)
                        .width(Size::Fill)
                        .height(Size::Fixed(4)),
                ),
        );

    let result = layout(&root, Rect::from_size(30, 12));

    assert_eq!(result["sheet"], Rect::new(0, 8, 30, 4));
}

#[test]
fn test_absolute_size_clamped_to_screen() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("big")
                .position(Position::Absolute)
                .width(Size::Fixed(100))
                .height(Size::Fixed(100)),
        );

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result["big"], Rect::new(0, 0, 20, 10));
}
