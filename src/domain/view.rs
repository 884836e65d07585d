use std::fmt;

use color_eyre::eyre::{eyre, Result};

use crate::domain::{
    element::{Element, ElementKind},
    layout::UiLayout,
    node::Node,
    props::Props,
};

/// Type tag of a view, used to match view plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewKind(&'static str);

impl ViewKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named aggregate of elements and the layout arranging them; the unit
/// view plugins target.
#[derive(Debug)]
pub struct View {
    kind: ViewKind,
    root: Element,
    initialized: bool,
}

impl View {
    pub fn new(kind: ViewKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            root: Element::new(name, ElementKind::new(kind.name())),
            initialized: false,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.root.id()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn layout(&self) -> &UiLayout {
        self.root.layout()
    }

    pub fn layout_mut(&mut self) -> &mut UiLayout {
        self.root.layout_mut()
    }

    /// View-level state, kept on the root element's configuration.
    pub fn state(&self) -> &Props {
        self.root.config()
    }

    pub fn state_mut(&mut self) -> &mut Props {
        self.root.config_mut()
    }

    pub fn add_element(&mut self, element: Element) -> &mut Element {
        self.root.add_element(element)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.element(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.element_mut(id)
    }

    pub fn require_element_mut(&mut self, id: &str) -> Result<&mut Element> {
        let name = self.name().to_string();
        self.root
            .element_mut(id)
            .ok_or_else(|| eyre!("Element \"{id}\" not found in view \"{name}\""))
    }

    /// Mutable access to the view embedded in element `id`.
    pub fn require_view_mut(&mut self, id: &str) -> Result<&mut View> {
        let name = self.name().to_string();
        self.require_element_mut(id)?
            .embedded_view_mut()
            .ok_or_else(|| eyre!("Element \"{id}\" in view \"{name}\" does not hold a view"))
    }

    /// Swaps the top-level element `look_for` for `element`, keeping its
    /// position and width in the layout.
    pub fn replace_element(&mut self, look_for: &str, element: Element) -> Result<&mut Element> {
        if !self.root.children().contains(look_for) {
            return Err(eyre!(
                "Element \"{look_for}\" not found in view \"{}\"",
                self.name()
            ));
        }
        self.root.children_mut().remove(look_for);
        self.root.layout_mut().replace_element(look_for, element.id());
        Ok(self.root.children_mut().insert(element))
    }

    pub fn render(&self, props: &Props) -> Node {
        self.root.render(props)
    }

    /// Embeds the view in a [`VIEW`](crate::domain::element::VIEW) element.
    pub fn into_element(self, id: impl Into<String>) -> Element {
        Element::view(id, self)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}
