use std::fmt;

use color_eyre::eyre::Result;

use crate::domain::{
    layout::UiLayout,
    node::Node,
    props::Props,
    registry::ElementRegistry,
    renderer::{FnRenderer, RendererChain, UiRenderer},
    view::View,
};

/// Type tag of an element, used to match renderers and plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementKind(&'static str);

impl ElementKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const GENERIC: ElementKind = ElementKind::new("GenericElement");
pub const VIEW: ElementKind = ElementKind::new("ViewElement");

type Visibility = Box<dyn Fn(&Props) -> bool>;

/// A named, typed unit of UI content.
///
/// An element owns its children and the layout arranging them, plus the
/// renderer chain producing its output. A view embedded as an element is
/// rendered in place of the element's own layout.
pub struct Element {
    id: String,
    kind: ElementKind,
    config: Props,
    children: ElementRegistry,
    layout: UiLayout,
    renderers: RendererChain,
    visibility: Option<Visibility>,
    view: Option<Box<View>>,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            config: Props::new(),
            children: ElementRegistry::new(),
            layout: UiLayout::new(),
            renderers: RendererChain::new(),
            visibility: None,
            view: None,
        }
    }

    /// Element rendered by a single closure over the incoming props.
    pub fn generic<F>(id: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Props) -> Node + 'static,
    {
        let mut element = Self::new(id, GENERIC);
        element.add_renderer(FnRenderer::new(move |params| render(params.props)));
        element
    }

    /// Element wrapping a whole view.
    pub fn view(id: impl Into<String>, view: View) -> Self {
        let mut element = Self::new(id, VIEW);
        element.view = Some(Box::new(view));
        element
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.set(key, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }

    pub fn config(&self) -> &Props {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Props {
        &mut self.config
    }

    pub fn layout(&self) -> &UiLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut UiLayout {
        &mut self.layout
    }

    pub fn children(&self) -> &ElementRegistry {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut ElementRegistry {
        &mut self.children
    }

    pub fn embedded_view(&self) -> Option<&View> {
        self.view.as_deref()
    }

    pub fn embedded_view_mut(&mut self) -> Option<&mut View> {
        self.view.as_deref_mut()
    }

    /// Registers `element` as a child and appends it to the layout in its own
    /// row. Re-adding an existing id replaces the element and keeps its slot.
    pub fn add_element(&mut self, element: Element) -> &mut Element {
        if !self.layout.contains(element.id()) {
            self.layout.insert_element_at_the_end(element.id());
        }
        self.children.insert(element)
    }

    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        self.layout.remove_element(id);
        self.children.remove(id)
    }

    /// Depth-first search through children and embedded views.
    pub fn element(&self, id: &str) -> Option<&Element> {
        if let Some(element) = self.children.get(id) {
            return Some(element);
        }
        self.children
            .iter()
            .find_map(|child| child.element(id))
            .or_else(|| self.view.as_ref().and_then(|view| view.element(id)))
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.children.contains(id) {
            return self.children.get_mut(id);
        }
        if let Some(found) = self
            .children
            .iter_mut()
            .find_map(|child| child.element_mut(id))
        {
            return Some(found);
        }
        self.view.as_mut().and_then(|view| view.element_mut(id))
    }

    /// Children in layout order, skipping unresolvable ids and hidden elements.
    pub fn visible_children<'a>(&'a self, props: &'a Props) -> impl Iterator<Item = &'a Element> {
        self.layout
            .element_ids()
            .filter_map(move |id| self.children.get(id))
            .filter(move |child| child.should_render(props))
    }

    pub fn add_renderer(&mut self, renderer: impl UiRenderer + 'static) -> &mut Self {
        self.renderers.push(renderer);
        self
    }

    pub fn renderers(&self) -> &RendererChain {
        &self.renderers
    }

    pub fn set_visibility<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Props) -> bool + 'static,
    {
        self.visibility = Some(Box::new(predicate));
        self
    }

    pub fn should_render(&self, props: &Props) -> bool {
        self.visibility
            .as_ref()
            .is_none_or(|predicate| predicate(props))
    }

    pub fn render(&self, props: &Props) -> Node {
        self.render_in(props, false)
    }

    pub fn render_in(&self, props: &Props, has_parent_grid: bool) -> Node {
        self.renderers.render(self, props, has_parent_grid)
    }

    /// Output of the element when no renderer takes it: the embedded view, or
    /// the element's own layout.
    pub fn render_layout(&self, props: &Props, has_parent_grid: bool) -> Node {
        match &self.view {
            Some(view) => view.root().render_in(props, has_parent_grid),
            None => self.layout.render(&self.children, props, has_parent_grid),
        }
    }

    /// Visits the element, its children and the roots of embedded views,
    /// parents first.
    pub fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element) -> Result<()>) -> Result<()> {
        visit(self)?;
        for child in self.children.iter_mut() {
            child.walk_mut(visit)?;
        }
        if let Some(view) = self.view.as_mut() {
            view.root_mut().walk_mut(visit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("children", &self.children)
            .field("layout", &self.layout)
            .field("renderers", &self.renderers)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
