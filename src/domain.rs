//! Composition core
//!
//! This module contains the UI composition layer:
//! - Elements and the registry owning them
//! - Row/column layouts of element references
//! - Renderer chains
//! - Views and bootstrap plugins
//! - The render output tree

pub mod element;
pub mod layout;
pub mod node;
pub mod plugin;
pub mod props;
pub mod registry;
pub mod renderer;
pub mod view;

pub use element::{Element, ElementKind};
pub use layout::{LayoutItem, UiLayout, GRID_COLUMNS};
pub use node::{Cell, Node};
pub use plugin::{ElementPlugin, Plugin, PluginKey, PluginRegistry, ViewPlugin};
pub use props::Props;
pub use registry::{ElementLookup, ElementRegistry};
pub use renderer::{FnRenderer, Next, RenderParams, RendererChain, UiRenderer};
pub use view::{View, ViewKind};
