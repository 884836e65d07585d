//! Navigation menu plugin.
//!
//! Fills the navigation drawer with the configured entries, puts a menu
//! button in the drawer header and teaches the navigation menu how to draw its
//! items. Items are drawn by depth: top-level groups, sections below them,
//! then plain section items. Entries with a path are links at any depth.

use ratatui::prelude::*;

use crate::{
    domain::{
        element::Element,
        node::Node,
        plugin::{ElementPlugin, Plugin, ViewPlugin},
        props::Props,
        renderer::{RenderParams, UiRenderer},
    },
    presentation::admin::{
        header::HeaderElement,
        navigation::{
            MenuEntry, MenuItem, NavigationView, MENU_ITEM, NAVIGATION_MENU, NAVIGATION_VIEW,
        },
    },
};

pub const MENU_BUTTON: &str = "≡";

pub fn plugins(entries: Vec<MenuEntry>) -> Vec<Plugin> {
    vec![
        ViewPlugin::new(NAVIGATION_VIEW, |view, _| {
            HeaderElement::set_menu_button(NavigationView::header_mut(view)?, MENU_BUTTON);
            Ok(())
        })
        .into(),
        ViewPlugin::new(NAVIGATION_VIEW, move |view, _| {
            NavigationView::add_entries(view, &entries)
        })
        .into(),
        ElementPlugin::new(NAVIGATION_MENU, |menu, _| {
            menu.add_renderer(MenuLinkRenderer)
                .add_renderer(MenuGroupRenderer)
                .add_renderer(MenuSectionRenderer)
                .add_renderer(MenuSectionItemRenderer);
            Ok(())
        })
        .into(),
    ]
}

fn indent(depth: u64) -> String {
    "  ".repeat(usize::try_from(depth).unwrap_or_default())
}

/// Renders the visible children of the current item one level deeper.
fn render_children(params: &RenderParams<'_>) -> Vec<Node> {
    let depth = MenuItem::depth(params.props);
    let props = params.props.clone().with("depth", depth + 1);
    params
        .element
        .visible_children(params.props)
        .map(|child| Node::keyed(child.key(), params.render_element(child, &props)))
        .collect()
}

fn with_children(label: Line<'static>, params: &RenderParams<'_>) -> Node {
    let mut nodes = vec![Node::text(label)];
    nodes.extend(render_children(params));
    Node::Stack(nodes)
}

fn is_item(element: &Element) -> bool {
    element.kind() == MENU_ITEM
}

struct MenuGroupRenderer;

impl UiRenderer for MenuGroupRenderer {
    fn can_render(&self, element: &Element, props: &Props) -> bool {
        is_item(element) && MenuItem::depth(props) == 0
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let label = Line::styled(
            MenuItem::label(params.element).to_string(),
            Style::default().bold(),
        );
        with_children(label, &params)
    }
}

struct MenuSectionRenderer;

impl UiRenderer for MenuSectionRenderer {
    fn can_render(&self, element: &Element, props: &Props) -> bool {
        is_item(element) && MenuItem::depth(props) >= 1 && !element.children().is_empty()
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let depth = MenuItem::depth(params.props);
        let label = Line::styled(
            format!("{}{}", indent(depth), MenuItem::label(params.element)),
            Style::default().italic(),
        );
        with_children(label, &params)
    }
}

struct MenuSectionItemRenderer;

impl UiRenderer for MenuSectionItemRenderer {
    fn can_render(&self, element: &Element, props: &Props) -> bool {
        is_item(element) && MenuItem::depth(props) >= 1
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let depth = MenuItem::depth(params.props);
        Node::text(Line::styled(
            format!("{}{}", indent(depth), MenuItem::label(params.element)),
            Style::default().dim(),
        ))
    }
}

struct MenuLinkRenderer;

impl UiRenderer for MenuLinkRenderer {
    fn can_render(&self, element: &Element, _props: &Props) -> bool {
        is_item(element) && MenuItem::path(element).is_some()
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let depth = MenuItem::depth(params.props);
        let path = MenuItem::path(params.element);
        let style = if path.is_some() && params.props.get_str("active_path") == path {
            Style::default().reversed()
        } else {
            Style::default()
        };
        let link = Line::from(vec![
            Span::raw(indent(depth)),
            Span::styled(format!("• {}", MenuItem::label(params.element)), style),
        ]);
        if params.element.children().is_empty() {
            return Node::text(link);
        }
        with_children(link, &params)
    }
}
