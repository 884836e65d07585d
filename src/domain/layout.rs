//! Row/column arrangement of element references.
//!
//! A layout stores element ids and their share of a 12 unit grid, never the
//! elements themselves. Ids are resolved through an [`ElementLookup`] at
//! render and sort time, so structural edits never touch element data.

use std::cmp::Ordering;

use crate::domain::{
    element::Element,
    node::{Cell, Node},
    props::Props,
    registry::ElementLookup,
};

pub const GRID_COLUMNS: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutItem {
    element: String,
    width: f64,
}

impl LayoutItem {
    fn full_width(element: &str) -> Self {
        Self {
            element: element.to_string(),
            width: GRID_COLUMNS,
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiLayout {
    grid: bool,
    prune_empty_rows: bool,
    rows: Vec<Vec<LayoutItem>>,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            grid: true,
            prune_empty_rows: false,
            rows: Vec::new(),
        }
    }
}

impl UiLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_grid(&mut self, flag: bool) -> &mut Self {
        self.grid = flag;
        self
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    /// When set, a row emptied by [`UiLayout::remove_element`] is dropped
    /// instead of being kept as an empty row.
    pub fn set_prune_empty_rows(&mut self, flag: bool) -> &mut Self {
        self.prune_empty_rows = flag;
        self
    }

    pub fn prune_empty_rows(&self) -> bool {
        self.prune_empty_rows
    }

    pub fn rows(&self) -> &[Vec<LayoutItem>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Ids in row order.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(LayoutItem::element)
    }

    /// Reorders rows by the element of each row's first item. Does nothing in
    /// grid mode. Rows whose first element cannot be resolved, including
    /// empty rows, go last.
    ///
    /// The sort is stable. `compare` should be a total order; if it is not,
    /// the relative order of resolved rows is unspecified but the call still
    /// returns with every row kept and unresolved rows last.
    pub fn sort_by<L, F>(&mut self, lookup: &L, mut compare: F) -> &mut Self
    where
        L: ElementLookup + ?Sized,
        F: FnMut(&Element, &Element) -> Ordering,
    {
        if self.grid {
            return self;
        }

        let first = |row: &[LayoutItem]| {
            row.first()
                .and_then(|item| lookup.element(&item.element))
        };
        let mut out_of_order = |a: &[LayoutItem], b: &[LayoutItem]| {
            let ordering = match (first(a), first(b)) {
                (Some(a), Some(b)) => compare(a, b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ordering == Ordering::Greater
        };

        // Insertion sort never panics, whatever `compare` returns.
        for unsorted in 1..self.rows.len() {
            let mut index = unsorted;
            while index > 0
                && out_of_order(self.rows[index - 1].as_slice(), self.rows[index].as_slice())
            {
                self.rows.swap(index - 1, index);
                index -= 1;
            }
        }
        self
    }

    pub fn remove_element(&mut self, id: &str) -> &mut Self {
        let Some((row, column)) = self.position(id) else {
            return self;
        };

        let items = &mut self.rows[row];
        items.remove(column);
        distribute(items);
        if items.is_empty() && self.prune_empty_rows {
            self.rows.remove(row);
        }
        self
    }

    pub fn insert_element_above(&mut self, look_for: &str, id: &str) -> &mut Self {
        if let Some((row, _)) = self.position(look_for) {
            self.rows.insert(row, vec![LayoutItem::full_width(id)]);
        }
        self
    }

    pub fn insert_element_below(&mut self, look_for: &str, id: &str) -> &mut Self {
        if let Some((row, _)) = self.position(look_for) {
            self.rows.insert(row + 1, vec![LayoutItem::full_width(id)]);
        }
        self
    }

    pub fn insert_element_after(&mut self, look_for: &str, id: &str) -> &mut Self {
        self.insert_into_row(look_for, id, 1)
    }

    pub fn insert_element_before(&mut self, look_for: &str, id: &str) -> &mut Self {
        self.insert_into_row(look_for, id, 0)
    }

    pub fn insert_element_at_the_beginning(&mut self, id: &str) -> &mut Self {
        self.rows.insert(0, vec![LayoutItem::full_width(id)]);
        self
    }

    pub fn insert_element_at_the_end(&mut self, id: &str) -> &mut Self {
        self.rows.push(vec![LayoutItem::full_width(id)]);
        self
    }

    /// Puts `id` where `look_for` was, keeping its width.
    pub fn replace_element(&mut self, look_for: &str, id: &str) -> &mut Self {
        match self.position(look_for) {
            Some((row, column)) => self.rows[row][column].element = id.to_string(),
            None => tracing::warn!("Could not locate element \"{look_for}\" in the layout!"),
        }
        self
    }

    pub fn render<L>(&self, lookup: &L, props: &Props, has_parent_grid: bool) -> Node
    where
        L: ElementLookup + ?Sized,
    {
        if !self.grid {
            let rows = self
                .rows
                .iter()
                .map(|row| {
                    Node::Stack(
                        row.iter()
                            .filter_map(|item| render_item(lookup, item, props, false))
                            .collect(),
                    )
                })
                .collect();
            return Node::Stack(rows);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|item| {
                        render_item(lookup, item, props, true)
                            .map(|child| Cell::new(item.element.as_str(), item.width, child))
                    })
                    .collect()
            })
            .collect();
        Node::Grid {
            nested: has_parent_grid,
            rows,
        }
    }

    fn insert_into_row(&mut self, look_for: &str, id: &str, offset: usize) -> &mut Self {
        let Some((row, column)) = self.position(look_for) else {
            tracing::warn!("Could not locate element \"{look_for}\" in the layout!");
            return self;
        };

        let items = &mut self.rows[row];
        items.insert(
            column + offset,
            LayoutItem {
                element: id.to_string(),
                width: 0.0,
            },
        );
        distribute(items);
        self
    }

    fn position(&self, id: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, items)| {
            items
                .iter()
                .position(|item| item.element == id)
                .map(|column| (row, column))
        })
    }
}

fn distribute(items: &mut [LayoutItem]) {
    if items.is_empty() {
        return;
    }
    let width = GRID_COLUMNS / items.len() as f64;
    for item in items.iter_mut() {
        item.width = width;
    }
}

fn render_item<L>(lookup: &L, item: &LayoutItem, props: &Props, in_grid: bool) -> Option<Node>
where
    L: ElementLookup + ?Sized,
{
    let Some(element) = lookup.element(&item.element) else {
        tracing::warn!("Element \"{}\" was not found!", item.element);
        return None;
    };

    if !element.should_render(props) {
        return None;
    }

    Some(Node::keyed(element.key(), element.render_in(props, in_grid)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::{element::GENERIC, registry::ElementRegistry};

    fn widths(layout: &UiLayout, row: usize) -> Vec<f64> {
        layout.rows()[row].iter().map(LayoutItem::width).collect()
    }

    fn ids(layout: &UiLayout) -> Vec<Vec<&str>> {
        layout
            .rows()
            .iter()
            .map(|row| row.iter().map(LayoutItem::element).collect())
            .collect()
    }

    fn labelled(id: &str) -> Element {
        let label = id.to_string();
        Element::generic(id, move |_| Node::text(label.clone()))
    }

    #[fixture]
    fn registry() -> ElementRegistry {
        let mut registry = ElementRegistry::new();
        for id in ["a", "b", "c", "d"] {
            registry.insert(labelled(id));
        }
        registry
    }

    #[fixture]
    fn stacked() -> UiLayout {
        let mut layout = UiLayout::new();
        layout
            .set_grid(false)
            .insert_element_at_the_end("a")
            .insert_element_at_the_end("b");
        layout
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(7)]
    fn test_insert_at_the_end_appends_full_width_rows(#[case] count: usize) {
        let mut layout = UiLayout::new();
        for index in 0..count {
            layout.insert_element_at_the_end(&format!("e{index}"));
        }

        assert_eq!(layout.rows().len(), count);
        for row in layout.rows() {
            assert_eq!(row.len(), 1);
            assert_eq!(row[0].width(), GRID_COLUMNS);
        }
    }

    #[test]
    fn test_insert_at_the_beginning_prepends() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_at_the_beginning("b");

        assert_eq!(ids(&layout), vec![vec!["b"], vec!["a"]]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    fn test_insert_after_distributes_width(#[case] extra: usize) {
        let mut layout = UiLayout::new();
        layout.insert_element_at_the_end("a");
        for index in 0..extra {
            layout.insert_element_after("a", &format!("e{index}"));
        }

        let row = &layout.rows()[0];
        assert_eq!(row.len(), extra + 1);
        let expected = GRID_COLUMNS / (extra + 1) as f64;
        assert!(row.iter().all(|item| item.width() == expected));
        let sum: f64 = row.iter().map(LayoutItem::width).sum();
        assert!((sum - GRID_COLUMNS).abs() < 1e-9);
    }

    #[test]
    fn test_insert_after_and_before_positions() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_after("a", "c")
            .insert_element_before("c", "b")
            .insert_element_before("a", "z");

        assert_eq!(ids(&layout), vec![vec!["z", "a", "b", "c"]]);
        assert_eq!(widths(&layout, 0), vec![3.0; 4]);
    }

    #[test]
    fn test_insert_after_thirds() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_after("a", "b")
            .insert_element_after("b", "c");

        let sum: f64 = widths(&layout, 0).iter().sum();
        assert!((sum - GRID_COLUMNS).abs() < 1e-9);
        assert_eq!(widths(&layout, 0), vec![4.0; 3]);
    }

    #[rstest]
    fn test_insert_next_to_missing_element_is_noop(stacked: UiLayout) {
        let mut layout = stacked.clone();
        layout
            .insert_element_after("missing", "x")
            .insert_element_before("missing", "x")
            .insert_element_above("missing", "x")
            .insert_element_below("missing", "x");

        assert_eq!(layout, stacked);
    }

    #[rstest]
    fn test_insert_above_and_below(stacked: UiLayout) {
        let mut layout = stacked;
        layout
            .insert_element_above("b", "above")
            .insert_element_below("a", "below");

        assert_eq!(
            ids(&layout),
            vec![vec!["a"], vec!["below"], vec!["above"], vec!["b"]]
        );
        assert_eq!(widths(&layout, 1), vec![GRID_COLUMNS]);
    }

    #[test]
    fn test_remove_redistributes_width() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_after("a", "b")
            .insert_element_after("b", "c")
            .remove_element("b");

        assert_eq!(ids(&layout), vec![vec!["a", "c"]]);
        assert_eq!(widths(&layout, 0), vec![6.0, 6.0]);
    }

    #[test]
    fn test_remove_last_item_keeps_empty_row_by_default() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_at_the_end("b")
            .remove_element("a");

        assert_eq!(layout.rows().len(), 2);
        assert!(layout.rows()[0].is_empty());
    }

    #[test]
    fn test_remove_last_item_prunes_row_when_enabled() {
        let mut layout = UiLayout::new();
        layout
            .set_prune_empty_rows(true)
            .insert_element_at_the_end("a")
            .insert_element_at_the_end("b")
            .remove_element("a");

        assert_eq!(ids(&layout), vec![vec!["b"]]);
    }

    #[rstest]
    fn test_remove_missing_is_noop(stacked: UiLayout) {
        let mut layout = stacked.clone();
        layout.remove_element("missing");
        assert_eq!(layout, stacked);
    }

    #[test]
    fn test_replace_keeps_width() {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_after("a", "b")
            .replace_element("b", "c")
            .replace_element("missing", "d");

        assert_eq!(ids(&layout), vec![vec!["a", "c"]]);
        assert_eq!(widths(&layout, 0), vec![6.0, 6.0]);
    }

    #[rstest]
    fn test_sort_orders_rows_by_first_element(registry: ElementRegistry) {
        let mut layout = UiLayout::new();
        layout
            .set_grid(false)
            .insert_element_at_the_end("c")
            .insert_element_at_the_end("a")
            .insert_element_after("a", "d")
            .insert_element_at_the_end("b")
            .sort_by(&registry, |a, b| a.id().cmp(b.id()));

        assert_eq!(ids(&layout), vec![vec!["a", "d"], vec!["b"], vec!["c"]]);
    }

    #[rstest]
    fn test_sort_puts_unresolved_rows_last(registry: ElementRegistry) {
        let mut layout = UiLayout::new();
        layout
            .set_grid(false)
            .insert_element_at_the_end("missing")
            .insert_element_at_the_end("b")
            .insert_element_at_the_end("a")
            .sort_by(&registry, |a, b| a.id().cmp(b.id()));

        assert_eq!(ids(&layout), vec![vec!["a"], vec!["b"], vec!["missing"]]);
    }

    #[rstest]
    fn test_sort_survives_inconsistent_comparator(mut registry: ElementRegistry) {
        let mut layout = UiLayout::new();
        layout.set_grid(false);
        for round in 0..20 {
            for id in ["d", "missing", "b", "a", "c"] {
                layout.insert_element_at_the_end(&format!("{id}{round}"));
            }
        }
        for round in 0..20 {
            for id in ["a", "b", "c", "d"] {
                registry.insert(labelled(&format!("{id}{round}")));
            }
        }
        let mut calls = 0u32;

        layout.sort_by(&registry, |_, _| {
            calls += 1;
            if calls % 3 == 0 {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        });

        let sorted = ids(&layout);
        assert_eq!(sorted.len(), 100);
        assert!(sorted[..80].iter().all(|row| !row[0].starts_with("missing")));
        assert!(sorted[80..].iter().all(|row| row[0].starts_with("missing")));
        assert_eq!(sorted[80][0], "missing0");
        assert_eq!(sorted[99][0], "missing19");
    }

    #[rstest]
    #[case::ascending(Ordering::Less)]
    #[case::descending(Ordering::Greater)]
    fn test_sort_is_noop_in_grid_mode(registry: ElementRegistry, #[case] ordering: Ordering) {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("c")
            .insert_element_at_the_end("a");
        let before = layout.clone();

        layout.sort_by(&registry, |_, _| ordering);

        assert!(layout.grid());
        assert_eq!(layout, before);
    }

    #[rstest]
    fn test_render_stacked(registry: ElementRegistry, stacked: UiLayout) {
        let node = stacked.render(&registry, &Props::new(), false);

        assert_eq!(
            node,
            Node::Stack(vec![
                Node::Stack(vec![Node::keyed("GenericElement:a", Node::text("a"))]),
                Node::Stack(vec![Node::keyed("GenericElement:b", Node::text("b"))]),
            ])
        );
    }

    #[rstest]
    fn test_render_grid_cells_carry_width(registry: ElementRegistry) {
        let mut layout = UiLayout::new();
        layout
            .insert_element_at_the_end("a")
            .insert_element_after("a", "b");

        let Node::Grid { nested, rows } = layout.render(&registry, &Props::new(), true) else {
            panic!("grid layout should render a grid");
        };
        assert!(nested);
        assert_eq!(rows.len(), 1);
        let spans: Vec<(&str, f64)> = rows[0]
            .iter()
            .map(|cell| (cell.key.as_str(), cell.span))
            .collect();
        assert_eq!(spans, vec![("a", 6.0), ("b", 6.0)]);
    }

    #[rstest]
    #[case::stacked(false)]
    #[case::grid(true)]
    fn test_render_skips_missing_elements(registry: ElementRegistry, #[case] grid: bool) {
        let mut layout = UiLayout::new();
        layout
            .set_grid(grid)
            .insert_element_at_the_end("a")
            .insert_element_after("a", "missing")
            .insert_element_at_the_end("gone");

        let node = layout.render(&registry, &Props::new(), false);

        assert_eq!(node.keys(), vec!["GenericElement:a"]);
    }

    #[rstest]
    #[case::stacked(false)]
    #[case::grid(true)]
    fn test_render_skips_hidden_elements(#[case] grid: bool) {
        let mut registry = ElementRegistry::new();
        registry.insert(labelled("a"));
        registry
            .insert(labelled("b"))
            .set_visibility(|props| props.get_bool("show_b"));
        let mut layout = UiLayout::new();
        layout
            .set_grid(grid)
            .insert_element_at_the_end("a")
            .insert_element_at_the_end("b");

        let hidden = layout.render(&registry, &Props::new(), false);
        let shown = layout.render(&registry, &Props::new().with("show_b", true), false);

        assert_eq!(hidden.keys(), vec!["GenericElement:a"]);
        assert_eq!(shown.keys(), vec!["GenericElement:a", "GenericElement:b"]);
    }
}
