//! Turns a [`ViewNode`] description into Leptos views.

use leptos::prelude::*;
use shared::theme::Theme;
use shared::view::{Dimension, Direction, Placement, Spacing, TextAlign, ViewNode};

use crate::action::CreateActionControl;

pub fn render_node(node: &ViewNode, theme: &Theme, action: &dyn CreateActionControl) -> AnyView {
    match node {
        ViewNode::Flex {
            direction,
            justify,
            align,
            children,
        } => {
            let children = children
                .iter()
                .map(|child| render_node(child, theme, action))
                .collect::<Vec<_>>();
            let style = flex_style(*direction, *justify, *align);
            view! { <div style=style>{children}</div> }.into_any()
        }
        ViewNode::Spaced { margin, child } => {
            let child = render_node(child, theme, action);
            let style = margin_style(theme, *margin);
            view! { <div style=style>{child}</div> }.into_any()
        }
        ViewNode::Image {
            src,
            alt,
            width,
            height,
        } => {
            let (src, alt) = (*src, *alt);
            let style = size_style(*width, *height);
            view! { <img src=src alt=alt style=style /> }.into_any()
        }
        ViewNode::Heading { text, margin } => {
            let text = *text;
            let style = margin_style(theme, *margin);
            view! { <h2 style=style>{text}</h2> }.into_any()
        }
        ViewNode::Text {
            text,
            color,
            align,
            margin,
        } => {
            let style = format!(
                "{} {}",
                text_style(theme.color(*color), *align),
                margin_style(theme, *margin)
            );
            let text = *text;
            view! { <p style=style>{text}</p> }.into_any()
        }
        ViewNode::CreateAction => action.render(),
    }
}

pub fn flex_style(direction: Direction, justify: Placement, align: Placement) -> String {
    let direction = match direction {
        Direction::Row => "row",
        Direction::Column => "column",
    };
    format!(
        "display: flex; flex-direction: {direction}; justify-content: {}; align-items: {};",
        placement(justify),
        placement(align)
    )
}

fn placement(placement: Placement) -> &'static str {
    match placement {
        Placement::Start => "flex-start",
        Placement::Center => "center",
        Placement::End => "flex-end",
    }
}

pub fn margin_style(theme: &Theme, margin: Spacing) -> String {
    format!(
        "margin-top: {}; margin-bottom: {};",
        theme.space(margin.top),
        theme.space(margin.bottom)
    )
}

pub fn text_style(color: &str, align: TextAlign) -> String {
    let align = match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    };
    format!("color: {color}; text-align: {align};")
}

pub fn size_style(width: Dimension, height: Dimension) -> String {
    format!("width: {}; height: {};", length(width), length(height))
}

fn length(dimension: Dimension) -> String {
    match dimension {
        Dimension::Auto => "auto".to_string(),
        Dimension::Px(px) => format!("{px}px"),
    }
}
