//! Renderer chains.
//!
//! Renderers attached to an element are tried in registration order. The
//! first one whose [`UiRenderer::can_render`] accepts the element renders it
//! and may hand over to the rest of the chain through [`Next`]. When no
//! renderer is left the element's own layout (or embedded view) is rendered.

use std::fmt;

use crate::domain::{element::Element, node::Node, props::Props};

pub trait UiRenderer {
    fn can_render(&self, element: &Element, props: &Props) -> bool {
        let _ = (element, props);
        true
    }

    fn render(&self, params: RenderParams<'_>) -> Node;
}

pub struct RenderParams<'a> {
    pub element: &'a Element,
    pub props: &'a Props,
    pub has_parent_grid: bool,
    pub next: Next<'a>,
    chain: &'a RendererChain,
}

impl RenderParams<'_> {
    /// Renders another element, usually a child of `self.element`, through
    /// the chain currently rendering.
    pub fn render_element(&self, element: &Element, props: &Props) -> Node {
        self.chain.render(element, props, self.has_parent_grid)
    }
}

/// The remainder of a renderer chain.
pub struct Next<'a> {
    chain: &'a RendererChain,
    position: usize,
    element: &'a Element,
    props: &'a Props,
    has_parent_grid: bool,
}

impl Next<'_> {
    pub fn render(&self) -> Node {
        self.render_with(self.props)
    }

    pub fn render_with(&self, props: &Props) -> Node {
        self.chain
            .render_from(self.position, self.element, props, self.has_parent_grid)
    }
}

#[derive(Default)]
pub struct RendererChain {
    renderers: Vec<Box<dyn UiRenderer>>,
}

impl RendererChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, renderer: impl UiRenderer + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn render(&self, element: &Element, props: &Props, has_parent_grid: bool) -> Node {
        self.render_from(0, element, props, has_parent_grid)
    }

    fn render_from(
        &self,
        start: usize,
        element: &Element,
        props: &Props,
        has_parent_grid: bool,
    ) -> Node {
        for (index, renderer) in self.renderers.iter().enumerate().skip(start) {
            if !renderer.can_render(element, props) {
                continue;
            }
            return renderer.render(RenderParams {
                element,
                props,
                has_parent_grid,
                next: Next {
                    chain: self,
                    position: index + 1,
                    element,
                    props,
                    has_parent_grid,
                },
                chain: self,
            });
        }
        element.render_layout(props, has_parent_grid)
    }
}

impl fmt::Debug for RendererChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererChain")
            .field("len", &self.renderers.len())
            .finish()
    }
}

/// Renderer backed by a closure. Accepts every element.
pub struct FnRenderer<F>(F);

impl<F> FnRenderer<F>
where
    F: Fn(&RenderParams<'_>) -> Node,
{
    pub fn new(render: F) -> Self {
        Self(render)
    }
}

impl<F> UiRenderer for FnRenderer<F>
where
    F: Fn(&RenderParams<'_>) -> Node,
{
    fn render(&self, params: RenderParams<'_>) -> Node {
        (self.0)(&params)
    }
}
