//! # Composer
//!
//! A UI composition layer and the terminal admin console built on it.
//!
//! Screens are assembled from named, typed elements arranged by a layout on a
//! 12 column grid (or stacked), rendered through chains of renderers and
//! extended at startup by plugins.
//!
//! ## Example
//!
//! ```rust
//! use composer::domain::{Element, Node, Props, View, ViewKind};
//!
//! let mut view = View::new(ViewKind::new("PageView"), "page");
//! view.add_element(Element::generic("left", |_| Node::text("left")));
//! view.add_element(Element::generic("right", |_| Node::text("right")));
//! view.layout_mut().remove_element("right");
//! view.layout_mut().insert_element_after("left", "right");
//!
//! let node = view.render(&Props::new());
//! assert_eq!(node.lines(), vec!["left", "right"]);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Elements, layouts, renderers, views and plugins
//! - [`presentation`] - The admin console and the widgets painting render trees
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`app`] - The console's event loop

pub mod action;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod utils;
