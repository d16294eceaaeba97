use crate::content::{BODY, HEADING, ILLUSTRATION_ALT, ILLUSTRATION_HEIGHT_PX, ILLUSTRATION_SRC};
use crate::theme::ColorToken;
use crate::view::{Dimension, Direction, Placement, Spacing, TextAlign, ViewNode};

/// Shown in place of the rule list when there are no rules.
///
/// Takes no input and always describes the same tree. Whether it is visible at all is
/// up to the caller.
pub struct EmptyStateView;

impl EmptyStateView {
    pub fn describe() -> ViewNode {
        ViewNode::Flex {
            direction: Direction::Column,
            justify: Placement::Center,
            align: Placement::Center,
            children: vec![
                ViewNode::Spaced {
                    margin: Spacing::vertical(10),
                    child: Box::new(ViewNode::Image {
                        src: ILLUSTRATION_SRC,
                        alt: ILLUSTRATION_ALT,
                        width: Dimension::Auto,
                        height: Dimension::Px(ILLUSTRATION_HEIGHT_PX),
                    }),
                },
                ViewNode::Heading {
                    text: HEADING,
                    margin: Spacing::bottom(6),
                },
                ViewNode::Text {
                    text: BODY,
                    color: ColorToken::Gray300,
                    align: TextAlign::Center,
                    margin: Spacing::bottom(8),
                },
                ViewNode::CreateAction,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_contain_single_illustration() {
        let view = EmptyStateView::describe();
        assert_eq!(
            vec![(
                "/assets/illustrations/empty-notepad.svg",
                "Empty Notepad illustration"
            )],
            view.images()
        );
    }

    #[test]
    fn should_contain_single_heading_and_text() {
        let view = EmptyStateView::describe();
        assert_eq!(vec!["No rules found"], view.headings());

        let texts = view.texts();
        assert_eq!(1, texts.len());
        assert!(texts[0].contains(
            "Writing rules will allow you to get alerts about suspicious activity in your system"
        ));
    }

    #[test]
    fn should_embed_exactly_one_action() {
        let view = EmptyStateView::describe();
        assert_eq!(1, view.action_count());
    }

    #[test]
    fn should_keep_element_order() {
        let view = EmptyStateView::describe();
        let order: Vec<&str> = view
            .leaves()
            .into_iter()
            .map(|node| match node {
                ViewNode::Image { .. } => "image",
                ViewNode::Heading { .. } => "heading",
                ViewNode::Text { .. } => "text",
                ViewNode::CreateAction => "action",
                _ => "other",
            })
            .collect();
        assert_eq!(vec!["image", "heading", "text", "action"], order);
    }

    #[test]
    fn should_center_column_layout() {
        match EmptyStateView::describe() {
            ViewNode::Flex {
                direction,
                justify,
                align,
                ..
            } => {
                assert_eq!(Direction::Column, direction);
                assert_eq!(Placement::Center, justify);
                assert_eq!(Placement::Center, align);
            }
            other => panic!("expected flex root, got {other:?}"),
        }
    }

    #[test]
    fn should_size_illustration_by_height() {
        let view = EmptyStateView::describe();
        let image = view
            .walk()
            .into_iter()
            .find(|node| matches!(node, ViewNode::Image { .. }))
            .cloned();
        match image {
            Some(ViewNode::Image { width, height, .. }) => {
                assert_eq!(Dimension::Auto, width);
                assert_eq!(Dimension::Px(300), height);
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn should_mute_and_center_body_text() {
        let view = EmptyStateView::describe();
        let body = view
            .walk()
            .into_iter()
            .find(|node| matches!(node, ViewNode::Text { .. }))
            .cloned();
        match body {
            Some(ViewNode::Text { color, align, .. }) => {
                assert_eq!(ColorToken::Gray300, color);
                assert_eq!(TextAlign::Center, align);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn should_render_identically_every_time() {
        let first = EmptyStateView::describe();
        let second = EmptyStateView::describe();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
