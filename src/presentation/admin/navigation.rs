use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::{
    domain::{
        element::{Element, ElementKind},
        node::Node,
        props::Props,
        renderer::{RenderParams, UiRenderer},
        view::{View, ViewKind},
    },
    presentation::admin::header::HeaderElement,
};

pub const NAVIGATION_VIEW: ViewKind = ViewKind::new("NavigationView");
pub const NAVIGATION_MENU: ElementKind = ElementKind::new("NavigationMenuElement");
pub const MENU_ITEM: ElementKind = ElementKind::new("MenuElement");

const HEADER_ID: &str = "navigationHeader";
const MENU_ID: &str = "navigationMenu";

/// One entry of the navigation menu as written in the configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }

    /// Builds the menu item element for this entry and its descendants. Ids
    /// are the slugged labels joined by `/`, below `parent`.
    pub fn to_element(&self, parent: &str) -> Element {
        let slug = self.label.to_lowercase().replace(' ', "-");
        let id = if parent.is_empty() {
            slug
        } else {
            format!("{parent}/{slug}")
        };

        let mut element =
            Element::new(id.as_str(), MENU_ITEM).with_config("label", self.label.as_str());
        if let Some(path) = &self.path {
            element.config_mut().set("path", path.as_str());
        }
        element.layout_mut().set_grid(false);
        for child in &self.children {
            element.add_element(child.to_element(&id));
        }
        element
    }
}

/// Menu item helpers shared by the menu renderers.
pub struct MenuItem;

impl MenuItem {
    pub fn label(element: &Element) -> &str {
        element.config().get_str("label").unwrap_or_default()
    }

    pub fn path(element: &Element) -> Option<&str> {
        element.config().get_str("path")
    }

    pub fn depth(props: &Props) -> u64 {
        props.get_u64("depth").unwrap_or_default()
    }
}

/// Root of the navigation menu. Renders its items through its own renderer
/// chain, so plugins decide how items look by adding renderers to it.
pub struct NavigationMenu;

impl NavigationMenu {
    pub fn create(id: &str) -> Element {
        let mut element = Element::new(id, NAVIGATION_MENU);
        element.layout_mut().set_grid(false);
        element.add_renderer(MenuRootRenderer);
        element
    }
}

struct MenuRootRenderer;

impl UiRenderer for MenuRootRenderer {
    fn can_render(&self, element: &Element, _props: &Props) -> bool {
        element.kind() == NAVIGATION_MENU
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let props = params.props.clone().with("depth", 0u64);
        let items = params
            .element
            .visible_children(params.props)
            .map(|item| Node::keyed(item.key(), params.render_element(item, &props)))
            .collect();
        Node::Stack(items)
    }
}

/// Drawer with a header and the navigation menu.
pub struct NavigationView;

impl NavigationView {
    pub fn create() -> View {
        let mut view = View::new(NAVIGATION_VIEW, "NavigationView");
        view.layout_mut().set_grid(false);
        view.add_element(HeaderElement::create(HEADER_ID));
        view.add_element(NavigationMenu::create(MENU_ID));
        view.state_mut().set("menu_visible", true);
        view
    }

    pub fn header_mut(view: &mut View) -> Result<&mut Element> {
        view.require_element_mut(HEADER_ID)
    }

    pub fn menu_mut(view: &mut View) -> Result<&mut Element> {
        view.require_element_mut(MENU_ID)
    }

    pub fn is_menu_visible(view: &View) -> bool {
        view.state().get_bool("menu_visible")
    }

    pub fn show_menu(view: &mut View) {
        view.state_mut().set("menu_visible", true);
    }

    pub fn hide_menu(view: &mut View) {
        view.state_mut().set("menu_visible", false);
    }

    pub fn toggle_menu(view: &mut View) {
        let visible = Self::is_menu_visible(view);
        view.state_mut().set("menu_visible", !visible);
    }

    pub fn add_entries(view: &mut View, entries: &[MenuEntry]) -> Result<()> {
        let menu = Self::menu_mut(view)?;
        for entry in entries {
            menu.add_element(entry.to_element(""));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn security() -> MenuEntry {
        MenuEntry::new("Security").with_children(vec![MenuEntry::new("Identity")
            .with_children(vec![
                MenuEntry::new("Users").with_path("/security/users"),
                MenuEntry::new("API Keys"),
            ])])
    }

    #[test]
    fn test_entry_to_element() {
        let element = security().to_element("");

        assert_eq!(element.id(), "security");
        assert_eq!(element.kind(), MENU_ITEM);
        let users = element.element("security/identity/users");
        assert_eq!(users.map(MenuItem::label), Some("Users"));
        assert_eq!(users.and_then(MenuItem::path), Some("/security/users"));
        assert_eq!(
            element
                .element("security/identity/api-keys")
                .and_then(MenuItem::path),
            None
        );
    }

    #[test]
    fn test_toggle_menu() {
        let mut view = NavigationView::create();
        assert!(NavigationView::is_menu_visible(&view));

        NavigationView::toggle_menu(&mut view);
        assert!(!NavigationView::is_menu_visible(&view));

        NavigationView::show_menu(&mut view);
        assert!(NavigationView::is_menu_visible(&view));
        NavigationView::hide_menu(&mut view);
        assert!(!NavigationView::is_menu_visible(&view));
    }

    #[test]
    fn test_menu_without_item_renderers() -> Result<()> {
        let mut view = NavigationView::create();
        NavigationView::add_entries(&mut view, &[security()])?;

        let node = view.render(&Props::new());

        assert_eq!(
            node.keys(),
            vec![
                "HeaderElement:navigationHeader",
                "NavigationMenuElement:navigationMenu",
                "MenuElement:security",
                "MenuElement:security/identity",
                "MenuElement:security/identity/users",
                "MenuElement:security/identity/api-keys",
            ]
        );
        assert_eq!(node.lines(), Vec::<String>::new());
        Ok(())
    }
}
