use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::domain::{
    layout::GRID_COLUMNS,
    node::{Cell, Node},
};

/// Paints a render tree.
///
/// Stacks give every child its natural height and let the last one take the
/// rest of the area. Grid rows split the width by `span / 12`.
#[derive(Debug, Clone, Copy)]
pub struct NodeWidget<'a> {
    node: &'a Node,
}

impl<'a> NodeWidget<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self { node }
    }
}

impl Widget for NodeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        paint(self.node, area, buf);
    }
}

fn paint(node: &Node, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    match node {
        Node::Empty => {}
        Node::Text(text) => Paragraph::new(text.clone()).render(area, buf),
        Node::Stack(children) => {
            let heights: Vec<u16> = children.iter().map(Node::height).collect();
            let areas = Layout::vertical(stack_constraints(&heights)).split(area);
            for (child, child_area) in children.iter().zip(areas.iter()) {
                paint(child, *child_area, buf);
            }
        }
        Node::Grid { rows, .. } => {
            let heights: Vec<u16> = rows.iter().map(|row| row_height(row)).collect();
            let areas = Layout::vertical(stack_constraints(&heights)).split(area);
            for (row, row_area) in rows.iter().zip(areas.iter()) {
                let columns = Layout::horizontal(row.iter().map(|cell| span(cell.span)))
                    .split(*row_area);
                for (cell, cell_area) in row.iter().zip(columns.iter()) {
                    paint(&cell.child, *cell_area, buf);
                }
            }
        }
        Node::Keyed { child, .. } => paint(child, area, buf),
        Node::Panel { title, child } => {
            let block = Block::bordered().title(title.as_str());
            let inner = block.inner(area);
            block.render(area, buf);
            paint(child, inner, buf);
        }
    }
}

fn stack_constraints(heights: &[u16]) -> Vec<Constraint> {
    let last = heights.len().saturating_sub(1);
    heights
        .iter()
        .enumerate()
        .map(|(index, height)| {
            if index == last {
                Constraint::Min(*height)
            } else {
                Constraint::Length(*height)
            }
        })
        .collect()
}

fn row_height(row: &[Cell]) -> u16 {
    row.iter()
        .map(|cell| cell.child.height())
        .max()
        .unwrap_or(0)
}

fn span(width: f64) -> Constraint {
    let scale = 1000.0;
    Constraint::Ratio((width * scale).round() as u32, (GRID_COLUMNS * scale) as u32)
}

/// Paints `node` into an off-screen buffer and returns its rows with
/// trailing blanks trimmed.
pub fn render_to_lines(node: &Node, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    NodeWidget::new(node).render(area, &mut buf);
    (0..height)
        .map(|y| {
            let line: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
