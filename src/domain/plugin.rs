//! Bootstrap-time plugins.
//!
//! A [`PluginRegistry`] is built once at startup and passed explicitly to
//! whatever needs it. View plugins mutate every view of their target kind,
//! element plugins every element of theirs. Named entries replace lookups by
//! plugin name and are keyed by a typed [`PluginKey`].

use std::{any::Any, collections::HashMap, fmt, marker::PhantomData};

use color_eyre::eyre::Result;

use crate::domain::{
    element::{Element, ElementKind},
    view::{View, ViewKind},
};

type ViewCallback = Box<dyn Fn(&mut View, &PluginRegistry) -> Result<()>>;
type ElementCallback = Box<dyn Fn(&mut Element, &PluginRegistry) -> Result<()>>;

pub struct ViewPlugin {
    target: ViewKind,
    apply: ViewCallback,
}

impl ViewPlugin {
    pub fn new<F>(target: ViewKind, apply: F) -> Self
    where
        F: Fn(&mut View, &PluginRegistry) -> Result<()> + 'static,
    {
        Self {
            target,
            apply: Box::new(apply),
        }
    }

    pub fn target(&self) -> ViewKind {
        self.target
    }
}

pub struct ElementPlugin {
    target: ElementKind,
    apply: ElementCallback,
}

impl ElementPlugin {
    pub fn new<F>(target: ElementKind, apply: F) -> Self
    where
        F: Fn(&mut Element, &PluginRegistry) -> Result<()> + 'static,
    {
        Self {
            target,
            apply: Box::new(apply),
        }
    }

    pub fn target(&self) -> ElementKind {
        self.target
    }
}

pub enum Plugin {
    View(ViewPlugin),
    Element(ElementPlugin),
}

impl From<ViewPlugin> for Plugin {
    fn from(value: ViewPlugin) -> Self {
        Plugin::View(value)
    }
}

impl From<ElementPlugin> for Plugin {
    fn from(value: ElementPlugin) -> Self {
        Plugin::Element(value)
    }
}

/// Typed name of a registry entry.
pub struct PluginKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PluginKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for PluginKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PluginKey<T> {}

impl<T> fmt::Debug for PluginKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluginKey").field(&self.name).finish()
    }
}

#[derive(Default)]
pub struct PluginRegistry {
    views: Vec<ViewPlugin>,
    elements: Vec<ElementPlugin>,
    named: HashMap<&'static str, Box<dyn Any>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: impl Into<Plugin>) -> &mut Self {
        match plugin.into() {
            Plugin::View(plugin) => self.views.push(plugin),
            Plugin::Element(plugin) => self.elements.push(plugin),
        }
        self
    }

    pub fn register_all(&mut self, plugins: impl IntoIterator<Item = Plugin>) -> &mut Self {
        for plugin in plugins {
            self.register(plugin);
        }
        self
    }

    /// Stores `value` under `key`, replacing any previous entry of that name.
    pub fn register_named<T: Any>(&mut self, key: PluginKey<T>, value: T) -> &mut Self {
        self.named.insert(key.name, Box::new(value));
        self
    }

    pub fn get<T: Any>(&self, key: PluginKey<T>) -> Option<&T> {
        self.named.get(key.name)?.downcast_ref()
    }

    /// Runs the plugins targeting `view` and everything inside it: view
    /// plugins first, in registration order, then element plugins over the
    /// element tree, parents before children. Embedded views are initialised
    /// the same way. A view is only initialised once.
    pub fn apply(&self, view: &mut View) -> Result<()> {
        if view.is_initialized() {
            return Ok(());
        }

        let kind = view.kind();
        tracing::debug!("Applying plugins to view \"{}\" ({kind})", view.name());
        for plugin in self.views.iter().filter(|p| p.target == kind) {
            (plugin.apply)(view, self)?;
        }
        self.apply_to_element(view.root_mut())?;
        view.mark_initialized();
        Ok(())
    }

    fn apply_to_element(&self, element: &mut Element) -> Result<()> {
        let kind = element.kind();
        for plugin in self.elements.iter().filter(|p| p.target == kind) {
            (plugin.apply)(element, self)?;
        }
        for child in element.children_mut().iter_mut() {
            self.apply_to_element(child)?;
        }
        if let Some(view) = element.embedded_view_mut() {
            self.apply(view)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("views", &self.views.len())
            .field("elements", &self.elements.len())
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .finish()
    }
}
