use crate::domain::{
    element::Element,
    view::{View, ViewKind},
};

pub const SPLIT_VIEW: ViewKind = ViewKind::new("SplitView");

/// Two panels side by side on the grid.
pub struct SplitView;

impl SplitView {
    pub fn create(name: &str, left: Element, right: Element) -> View {
        let mut view = View::new(SPLIT_VIEW, name);
        let left_id = left.id().to_string();
        let right_id = right.id().to_string();
        view.add_element(left);
        view.root_mut().children_mut().insert(right);
        view.layout_mut().insert_element_after(&left_id, &right_id);
        view.state_mut().set("left", left_id);
        view.state_mut().set("right", right_id);
        view
    }

    pub fn left_panel(view: &View) -> Option<&Element> {
        view.state()
            .get_str("left")
            .and_then(|id| view.root().children().get(id))
    }

    pub fn right_panel(view: &View) -> Option<&Element> {
        view.state()
            .get_str("right")
            .and_then(|id| view.root().children().get(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{
        element::GENERIC,
        layout::LayoutItem,
        node::{Cell, Node},
        props::Props,
    };

    #[test]
    fn test_panels_share_the_row() {
        let view = SplitView::create(
            "split",
            Element::new("left", GENERIC),
            Element::new("right", GENERIC),
        );

        assert_eq!(view.layout().rows().len(), 1);
        let widths: Vec<f64> = view.layout().rows()[0]
            .iter()
            .map(LayoutItem::width)
            .collect();
        assert_eq!(widths, vec![6.0, 6.0]);
        assert_eq!(SplitView::left_panel(&view).map(Element::id), Some("left"));
        assert_eq!(SplitView::right_panel(&view).map(Element::id), Some("right"));
    }

    #[test]
    fn test_renders_grid_cells() {
        let view = SplitView::create(
            "split",
            Element::generic("left", |_| Node::text("L")),
            Element::generic("right", |_| Node::text("R")),
        );

        assert_eq!(
            view.render(&Props::new()),
            Node::Grid {
                nested: false,
                rows: vec![vec![
                    Cell::new("left", 6.0, Node::keyed("GenericElement:left", Node::text("L"))),
                    Cell::new("right", 6.0, Node::keyed("GenericElement:right", Node::text("R"))),
                ]],
            }
        );
    }
}
