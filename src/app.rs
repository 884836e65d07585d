use std::iter;

use color_eyre::eyre::{eyre, Result};
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    domain::{
        node::{Cell, Node},
        plugin::PluginRegistry,
        props::Props,
        view::View,
    },
    infrastructure::{
        cli::Page,
        config::Config,
        tui::{self, Frame},
    },
    presentation::{
        admin::{
            self,
            dashboard::DashboardView,
            logo::{AdminMenuLogo, ADMIN_MENU_LOGO},
            navigation::NavigationView,
            users::UsersView,
        },
        widgets::{NodeWidget, StatusBarWidget},
    },
};

/// Width of the navigation drawer in grid columns.
const DRAWER_SPAN: f64 = 3.0;

/// The admin console: a navigation drawer next to one of the pages, driven
/// by actions.
pub struct App {
    pub config: Config,
    pub plugins: PluginRegistry,
    pub navigation: View,
    pub pages: Vec<(Page, View)>,
    pub active: usize,
    pub selected: usize,
    pub status: Option<String>,
    pub should_quit: bool,
    pub last_tick_key_events: Vec<KeyEvent>,
}

impl App {
    pub fn new(config: Config, page: Page) -> Result<Self> {
        let mut plugins = PluginRegistry::new();
        plugins.register_all(admin::plugins(&config));
        if let Some(logo) = &config.menu_logo {
            plugins.register_named(
                ADMIN_MENU_LOGO,
                AdminMenuLogo {
                    logo: logo.clone(),
                },
            );
        }

        let mut navigation = NavigationView::create();
        let mut pages = vec![
            (Page::Dashboard, DashboardView::create(&config.users)?),
            (Page::Users, UsersView::create(&config.users)?),
        ];

        let prune = config.layout.prune_empty_rows;
        let views = iter::once(&mut navigation).chain(pages.iter_mut().map(|(_, view)| view));
        for view in views {
            plugins.apply(view)?;
            view.root_mut().walk_mut(&mut |element| {
                element.layout_mut().set_prune_empty_rows(prune);
                Ok(())
            })?;
        }

        let active = pages
            .iter()
            .position(|(candidate, _)| *candidate == page)
            .ok_or_else(|| eyre!("Page {page} is not available"))?;

        Ok(Self {
            config,
            plugins,
            navigation,
            pages,
            active,
            selected: 0,
            status: None,
            should_quit: false,
            last_tick_key_events: Vec::new(),
        })
    }

    pub fn page(&self) -> Page {
        self.pages
            .get(self.active)
            .map(|(page, _)| *page)
            .unwrap_or_default()
    }

    /// Props handed to every view on render.
    pub fn props(&self) -> Props {
        Props::new()
            .with("selected", u64::try_from(self.selected).unwrap_or_default())
            .with("active_path", self.page().path())
    }

    /// Render tree of the whole console, without the status bar.
    pub fn frame(&self) -> Node {
        let props = self.props();
        let page = self
            .pages
            .get(self.active)
            .map_or(Node::Empty, |(_, view)| view.render(&props));

        if !NavigationView::is_menu_visible(&self.navigation) {
            return page;
        }
        Node::Grid {
            nested: false,
            rows: vec![vec![
                Cell::new(
                    self.navigation.name(),
                    DRAWER_SPAN,
                    self.navigation.render(&props),
                ),
                Cell::new(self.page().to_string(), 12.0 - DRAWER_SPAN, page),
            ]],
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let node = self.frame();
        frame.render_widget(NodeWidget::new(&node), body);
        let page = self.page().to_string();
        let hints = self.config.keybindings.hints();
        frame.render_widget(
            StatusBarWidget::new(&page, &hints, self.status.as_deref()),
            status,
        );
    }

    /// Maps a key press to an action through the keybindings, trying the
    /// single key first and then the keys pressed since the last tick.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let keybindings = &self.config.keybindings;
        if let Some(action) = keybindings.get(&vec![key]) {
            tracing::info!("Got action: {action:?}");
            return Some(action.clone());
        }

        self.last_tick_key_events.push(key);
        let action = keybindings.get(&self.last_tick_key_events).cloned();
        if let Some(action) = &action {
            tracing::info!("Got action: {action:?}");
        }
        action
    }

    pub fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.last_tick_key_events.clear(),
            Action::Quit => self.should_quit = true,
            Action::Error(message) => {
                tracing::error!("{message}");
                self.status = Some(message.clone());
            }
            Action::ToggleMenu => NavigationView::toggle_menu(&mut self.navigation),
            Action::NextPage => self.switch_page(1),
            Action::PreviousPage => self.switch_page(self.pages.len().saturating_sub(1)),
            Action::SelectNext => {
                let users = self.config.users.len();
                if users > 0 {
                    self.selected = (self.selected + 1) % users;
                }
            }
            Action::SelectPrevious => {
                let users = self.config.users.len();
                if users > 0 {
                    self.selected = (self.selected + users - 1) % users;
                }
            }
            Action::Render | Action::Resize(..) => {}
        }
        Ok(None)
    }

    fn switch_page(&mut self, offset: usize) {
        if self.pages.is_empty() {
            return;
        }
        self.active = (self.active + offset) % self.pages.len();
        self.selected = 0;
        self.status = None;
        tracing::debug!("Switched to page {}", self.page());
    }

    pub async fn run(&mut self, tick_rate: f64, frame_rate: f64) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(tick_rate)
            .frame_rate(frame_rate);
        tui.enter()?;

        loop {
            if let Some(event) = tui.next().await {
                match event {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.handle_key(key) {
                            action_tx.send(action)?;
                        }
                    }
                    _ => {}
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(action, Action::Tick | Action::Render) {
                    tracing::debug!("{action:?}");
                }
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|frame| self.draw(frame))?;
                    }
                    Action::Render => {
                        tui.draw(|frame| self.draw(frame))?;
                    }
                    _ => {}
                }
                if let Some(action) = self.update(&action)? {
                    action_tx.send(action)?;
                }
            }

            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};
    use rstest::*;

    use super::*;
    use crate::presentation::admin::{navigation::MenuEntry, users::UserRecord};

    #[fixture]
    fn config() -> Config {
        let mut config = Config {
            brand: String::from("Composer"),
            menu: vec![MenuEntry::new("Security").with_children(vec![
                MenuEntry::new("Users").with_path("/security/users"),
                MenuEntry::new("Overview").with_path("/dashboard"),
            ])],
            users: vec![
                UserRecord::new("Ada", "ada@example.com").with_group("Admins"),
                UserRecord::new("Alan", "alan@example.com"),
            ],
            ..Config::default()
        };
        config.keybindings.insert(
            vec![KeyEvent::new(KeyCode::Char('m'), KeyModifiers::empty())],
            Action::ToggleMenu,
        );
        config.keybindings.insert(
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::empty()),
            ],
            Action::NextPage,
        );
        config
    }

    #[rstest]
    fn test_starts_on_requested_page(config: Config) -> Result<()> {
        let app = App::new(config, Page::Dashboard)?;

        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(app.props().get_str("active_path"), Some("/dashboard"));
        Ok(())
    }

    #[rstest]
    fn test_frame_with_menu(config: Config) -> Result<()> {
        let app = App::new(config, Page::Users)?;

        let node = app.frame();

        assert_eq!(
            node.lines()[..5].to_vec(),
            vec![
                "≡ Composer",
                "Security",
                "  • Users",
                "  • Overview",
                "Composer │ Security - Users",
            ]
        );
        Ok(())
    }

    #[rstest]
    fn test_toggle_menu_hides_drawer(mut config: Config) -> Result<()> {
        config.menu_logo = Some(String::from("C"));
        let mut app = App::new(config, Page::Users)?;
        assert_eq!(app.frame().lines()[0], "≡ C");

        app.update(&Action::ToggleMenu)?;

        assert_eq!(app.frame().lines()[0], "Composer │ Security - Users");
        Ok(())
    }

    #[rstest]
    fn test_page_cycle(config: Config) -> Result<()> {
        let mut app = App::new(config, Page::Dashboard)?;

        app.update(&Action::SelectNext)?;
        app.update(&Action::NextPage)?;
        assert_eq!((app.page(), app.selected), (Page::Users, 0));

        app.update(&Action::NextPage)?;
        assert_eq!(app.page(), Page::Dashboard);

        app.update(&Action::PreviousPage)?;
        assert_eq!(app.page(), Page::Users);
        Ok(())
    }

    #[rstest]
    fn test_selection_wraps(config: Config) -> Result<()> {
        let mut app = App::new(config, Page::Users)?;

        app.update(&Action::SelectPrevious)?;
        assert_eq!(app.selected, 1);
        app.update(&Action::SelectNext)?;
        assert_eq!(app.selected, 0);
        Ok(())
    }

    #[rstest]
    fn test_multi_key_sequence(config: Config) -> Result<()> {
        let mut app = App::new(config, Page::Users)?;

        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::empty())),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty())),
            None
        );
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::empty())),
            Some(Action::NextPage)
        );

        app.update(&Action::Tick)?;
        assert!(app.last_tick_key_events.is_empty());
        Ok(())
    }

    #[rstest]
    fn test_quit_and_error(config: Config) -> Result<()> {
        let mut app = App::new(config, Page::Users)?;

        app.update(&Action::Error(String::from("boom")))?;
        app.update(&Action::Quit)?;

        assert_eq!(app.status.as_deref(), Some("boom"));
        assert!(app.should_quit);
        Ok(())
    }

    #[rstest]
    fn test_draw_status_bar(config: Config) -> Result<()> {
        let app = App::new(config, Page::Users)?;
        let mut terminal = Terminal::new(TestBackend::new(60, 20))?;

        terminal.draw(|frame| app.draw(frame))?;

        let buffer = terminal.backend().buffer();
        let last: String = (0..60u16).map(|x| buffer[(x, 19)].symbol()).collect();
        assert_eq!(last.trim_end(), "Users · m menu · gn page");
        Ok(())
    }

    #[rstest]
    fn test_status_bar_follows_rebinding(mut config: Config) -> Result<()> {
        config.keybindings.insert(
            vec![KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)],
            Action::Quit,
        );
        let app = App::new(config, Page::Dashboard)?;
        let mut terminal = Terminal::new(TestBackend::new(60, 20))?;

        terminal.draw(|frame| app.draw(frame))?;

        let buffer = terminal.backend().buffer();
        let last: String = (0..60u16).map(|x| buffer[(x, 19)].symbol()).collect();
        assert_eq!(last.trim_end(), "Dashboard · ctrl-x quit · m menu · gn page");
        Ok(())
    }

    #[rstest]
    #[case::pruned(true, 2)]
    #[case::kept(false, 3)]
    fn test_prune_setting_reaches_nested_layouts(
        mut config: Config,
        #[case] prune: bool,
        #[case] rows_left: usize,
    ) -> Result<()> {
        config.layout.prune_empty_rows = prune;
        let mut app = App::new(config, Page::Users)?;
        assert_eq!(app.navigation.layout().prune_empty_rows(), prune);

        let (_, users) = app
            .pages
            .iter_mut()
            .find(|(page, _)| *page == Page::Users)
            .ok_or_else(|| eyre!("no users page"))?;
        assert_eq!(users.layout().prune_empty_rows(), prune);
        let split = users.require_view_mut("adminUsersSplitView")?;
        assert_eq!(split.layout().prune_empty_rows(), prune);
        let form = split.require_view_mut("adminUsersForm")?;
        assert_eq!(form.layout().prune_empty_rows(), prune);
        assert_eq!(form.layout().rows().len(), 3);

        form.layout_mut().remove_element("userName");

        assert_eq!(form.layout().rows().len(), rows_left);
        Ok(())
    }
}
