//! Typed description of a rendered view.
//!
//! A [`ViewNode`] tree says *what* is shown and in which order. Colors and spacing are
//! kept as tokens and only become CSS once a [`crate::theme::Theme`] resolves them.

use serde::Serialize;

use crate::theme::ColorToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Auto,
    Px(u32),
}

/// Vertical margin, in steps of the theme's spacing scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub top: u8,
    pub bottom: u8,
}

impl Spacing {
    pub const NONE: Spacing = Spacing { top: 0, bottom: 0 };

    /// same step above and below
    pub fn vertical(step: u8) -> Self {
        Spacing {
            top: step,
            bottom: step,
        }
    }

    pub fn bottom(step: u8) -> Self {
        Spacing {
            top: 0,
            bottom: step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViewNode {
    Flex {
        direction: Direction,
        justify: Placement,
        align: Placement,
        children: Vec<ViewNode>,
    },
    Spaced {
        margin: Spacing,
        child: Box<ViewNode>,
    },
    Image {
        src: &'static str,
        alt: &'static str,
        width: Dimension,
        height: Dimension,
    },
    Heading {
        text: &'static str,
        margin: Spacing,
    },
    Text {
        text: &'static str,
        color: ColorToken,
        align: TextAlign,
        margin: Spacing,
    },
    /// Slot for the injected create-action control
    CreateAction,
}

impl ViewNode {
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Flex { children, .. } => children,
            ViewNode::Spaced { child, .. } => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }

    /// Depth-first, pre-order
    pub fn walk(&self) -> Vec<&ViewNode> {
        let mut nodes = vec![self];
        for child in self.children() {
            nodes.extend(child.walk());
        }
        nodes
    }

    /// Nodes that carry content, in document order (layout wrappers skipped)
    pub fn leaves(&self) -> Vec<&ViewNode> {
        self.walk()
            .into_iter()
            .filter(|node| node.children().is_empty())
            .collect()
    }

    /// `(src, alt)` of every image
    pub fn images(&self) -> Vec<(&'static str, &'static str)> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                ViewNode::Image { src, alt, .. } => Some((*src, *alt)),
                _ => None,
            })
            .collect()
    }

    pub fn headings(&self) -> Vec<&'static str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                ViewNode::Heading { text, .. } => Some(*text),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&'static str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                ViewNode::Text { text, .. } => Some(*text),
                _ => None,
            })
            .collect()
    }

    pub fn action_count(&self) -> usize {
        self.walk()
            .into_iter()
            .filter(|node| matches!(node, ViewNode::CreateAction))
            .count()
    }
}
