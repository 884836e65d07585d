use color_eyre::eyre::Result;
use ratatui::prelude::*;

use crate::{
    domain::{
        element::{Element, GENERIC},
        node::Node,
        view::{View, ViewKind},
    },
    presentation::admin::{admin_view::AdminView, users::UserRecord},
};

pub const DASHBOARD_VIEW: ViewKind = ViewKind::new("DashboardView");

pub const TITLE: &str = "Dashboard";

/// Overview page: three summary cards on one grid row.
pub struct DashboardView;

impl DashboardView {
    pub fn create(users: &[UserRecord]) -> Result<View> {
        let grouped = users.iter().filter(|user| user.group.is_some()).count();
        let cards = [
            card("dashboardUsers", "Users", users.len().to_string()),
            card("dashboardGroups", "In a group", grouped.to_string()),
            card(
                "dashboardUngrouped",
                "Without group",
                (users.len() - grouped).to_string(),
            ),
        ];

        let mut content = Element::new("dashboardCards", GENERIC);
        let mut previous: Option<String> = None;
        for card in cards {
            let id = card.id().to_string();
            match previous.as_deref() {
                None => {
                    content.add_element(card);
                }
                Some(previous) => {
                    content.children_mut().insert(card);
                    content.layout_mut().insert_element_after(previous, &id);
                }
            }
            previous = Some(id);
        }

        let mut admin = AdminView::create();
        AdminView::set_title(&mut admin, TITLE)?;
        AdminView::set_content_element(&mut admin, content)?;

        let mut view = View::new(DASHBOARD_VIEW, "DashboardView");
        view.layout_mut().set_grid(false);
        view.add_element(admin.into_element("AdminView"));
        Ok(view)
    }
}

fn card(id: &str, title: &'static str, value: String) -> Element {
    Element::generic(id, move |_| {
        Node::panel(title, Node::text(Line::from(value.clone()).bold()))
    })
}
