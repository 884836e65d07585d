use ratatui::prelude::*;

use crate::domain::{
    element::{Element, ElementKind},
    node::Node,
    props::Props,
    renderer::{RenderParams, UiRenderer},
};

pub const HEADER: ElementKind = ElementKind::new("HeaderElement");

/// Header bar: menu button, logo and title on one line.
pub struct HeaderElement;

impl HeaderElement {
    pub fn create(id: &str) -> Element {
        let mut element = Element::new(id, HEADER);
        element.add_renderer(HeaderRenderer);
        element
    }

    pub fn set_logo(element: &mut Element, logo: impl Into<String>) {
        element.config_mut().set("logo", logo.into());
    }

    pub fn set_menu_button(element: &mut Element, button: impl Into<String>) {
        element.config_mut().set("menu_button", button.into());
    }

    pub fn set_title(element: &mut Element, title: impl Into<String>) {
        element.config_mut().set("title", title.into());
    }

    pub fn logo(element: &Element) -> Option<&str> {
        element.config().get_str("logo")
    }

    pub fn title(element: &Element) -> Option<&str> {
        element.config().get_str("title")
    }
}

struct HeaderRenderer;

impl UiRenderer for HeaderRenderer {
    fn can_render(&self, element: &Element, _props: &Props) -> bool {
        element.kind() == HEADER
    }

    fn render(&self, params: RenderParams<'_>) -> Node {
        let config = params.element.config();
        let mut spans = Vec::new();
        if let Some(button) = config.get_str("menu_button") {
            spans.push(Span::styled(format!("{button} "), Style::default().fg(Color::Gray)));
        }
        let logo = config.get_str("logo");
        let title = config.get_str("title");
        if let Some(logo) = logo {
            spans.push(Span::styled(logo.to_string(), Style::default().bold()));
        }
        if let Some(title) = title {
            if logo.is_some() {
                spans.push(Span::raw(" │ "));
            }
            spans.push(Span::raw(title.to_string()));
        }

        if spans.is_empty() {
            return Node::Empty;
        }
        Node::text(Line::from(spans))
    }
}
