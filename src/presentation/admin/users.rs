use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use serde::Deserialize;

use crate::{
    domain::{
        element::Element,
        node::Node,
        props::Props,
        renderer::FnRenderer,
        view::{View, ViewKind},
    },
    presentation::admin::{admin_view::AdminView, split_view::SplitView},
};

pub const USERS_VIEW: ViewKind = ViewKind::new("UsersView");
pub const USERS_FORM_VIEW: ViewKind = ViewKind::new("UsersFormView");

pub const TITLE: &str = "Security - Users";

const ADMIN_ID: &str = "AdminView";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub group: Option<String>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// The user picked by the `selected` prop, defaulting to the first one.
fn selected<'a>(users: &'a [UserRecord], props: &Props) -> Option<&'a UserRecord> {
    let index = props.get_u64("selected").unwrap_or_default();
    users.get(usize::try_from(index).ok()?)
}

/// Security → Users page: the admin frame around a list of users and a form
/// showing the selected one.
pub struct UsersView;

impl UsersView {
    pub fn create(users: &[UserRecord]) -> Result<View> {
        let users: Rc<[UserRecord]> = Rc::from(users);

        let form = UsersFormView::create(Rc::clone(&users)).into_element("adminUsersForm");
        let split = SplitView::create("adminUsers", user_list(users), form);

        let mut admin = AdminView::create();
        AdminView::set_title(&mut admin, TITLE)?;
        AdminView::set_content_element(&mut admin, split.into_element("adminUsersSplitView"))?;

        let mut view = View::new(USERS_VIEW, "UsersView");
        view.layout_mut().set_grid(false);
        view.add_element(admin.into_element(ADMIN_ID));
        Ok(view)
    }

    pub fn admin_mut(view: &mut View) -> Result<&mut View> {
        view.require_view_mut(ADMIN_ID)
    }

    pub fn title(view: &View) -> Option<&str> {
        view.element(ADMIN_ID)
            .and_then(Element::embedded_view)
            .and_then(AdminView::title)
    }

    pub fn set_title(view: &mut View, title: &str) -> Result<()> {
        AdminView::set_title(Self::admin_mut(view)?, title)
    }
}

fn user_list(users: Rc<[UserRecord]>) -> Element {
    Element::generic("adminUsersList", move |props| {
        if users.is_empty() {
            return Node::panel("Users", Node::text(Line::from("No users").dim()));
        }
        let current = props.get_u64("selected").unwrap_or_default();
        let lines: Vec<Line<'static>> = users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let line = format!("{} <{}>", user.name, user.email);
                if u64::try_from(index).is_ok_and(|index| index == current) {
                    Line::from(format!("> {line}")).reversed()
                } else {
                    Line::from(format!("  {line}"))
                }
            })
            .collect();
        Node::panel("Users", Node::text(lines))
    })
}

/// Read-only form with the fields of the selected user. The group field only
/// shows up for users that belong to one.
pub struct UsersFormView;

impl UsersFormView {
    pub fn create(users: Rc<[UserRecord]>) -> View {
        let mut view = View::new(USERS_FORM_VIEW, "UsersFormView");
        view.layout_mut().set_grid(false);
        view.root_mut()
            .add_renderer(FnRenderer::new(|params| Node::panel("User", params.next.render())));

        view.add_element(field("userName", "Name", Rc::clone(&users), |user| {
            Some(user.name.clone())
        }));
        view.add_element(field("userEmail", "Email", Rc::clone(&users), |user| {
            Some(user.email.clone())
        }));

        let visible_for = Rc::clone(&users);
        view.add_element(field("userGroup", "Group", users, |user| user.group.clone()))
            .set_visibility(move |props| {
                selected(&visible_for, props).is_some_and(|user| user.group.is_some())
            });
        view
    }
}

fn field<F>(id: &str, label: &'static str, users: Rc<[UserRecord]>, value: F) -> Element
where
    F: Fn(&UserRecord) -> Option<String> + 'static,
{
    Element::generic(id, move |props| {
        match selected(&users, props).and_then(&value) {
            Some(value) => Node::text(Line::from(vec![
                Span::styled(format!("{label:<6}"), Style::default().bold()),
                Span::raw(value),
            ])),
            None => Node::Empty,
        }
    })
}
