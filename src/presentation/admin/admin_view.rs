use color_eyre::eyre::Result;

use crate::{
    domain::{
        element::{Element, GENERIC},
        view::{View, ViewKind},
    },
    presentation::admin::header::HeaderElement,
};

pub const ADMIN_VIEW: ViewKind = ViewKind::new("AdminView");

const HEADER_ID: &str = "adminHeader";
const CONTENT_ID: &str = "adminContent";

/// Page frame: a header row above a single content element.
pub struct AdminView;

impl AdminView {
    pub fn create() -> View {
        let mut view = View::new(ADMIN_VIEW, "AdminView");
        view.layout_mut().set_grid(false);
        view.add_element(HeaderElement::create(HEADER_ID));
        view.add_element(Element::new(CONTENT_ID, GENERIC));
        view.state_mut().set("content", CONTENT_ID);
        view
    }

    pub fn header_mut(view: &mut View) -> Result<&mut Element> {
        view.require_element_mut(HEADER_ID)
    }

    pub fn title(view: &View) -> Option<&str> {
        view.element(HEADER_ID).and_then(HeaderElement::title)
    }

    pub fn set_title(view: &mut View, title: &str) -> Result<()> {
        HeaderElement::set_title(Self::header_mut(view)?, title);
        Ok(())
    }

    /// Replaces whatever currently fills the content slot.
    pub fn set_content_element(view: &mut View, element: Element) -> Result<()> {
        let current = view
            .state()
            .get_str("content")
            .unwrap_or(CONTENT_ID)
            .to_string();
        let id = element.id().to_string();
        view.replace_element(&current, element)?;
        view.state_mut().set("content", id);
        Ok(())
    }
}
