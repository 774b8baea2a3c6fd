//! src/ui/node.rs
//!
//! Recursive layout `Node` and the `Surface` trait every drawable panel implements.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Anything that can draw itself into a rectangle of the frame.
pub trait Surface {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree rebuilt every frame from the current state.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf(Box<dyn Surface>),
}

impl Node {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.iter().copied())
                    .split(area);
                // extra children beyond the constraints are not drawn
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf(surface) => surface.draw(f, area),
        }
    }
}

impl Surface for Node {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        Node::draw(self, f, area);
    }
}

pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

pub fn leaf(surface: impl Surface + 'static) -> Node {
    Node::Leaf(Box::new(surface))
}
