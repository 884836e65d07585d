use color_eyre::eyre::Result;
use composer::{
    action::Action,
    app::App,
    infrastructure::{cli::Page, config::Config},
    presentation::{
        admin::{navigation::MenuEntry, users::UserRecord},
        widgets::render_to_lines,
    },
};
use pretty_assertions::assert_eq;
use rstest::*;

#[fixture]
fn config() -> Config {
    Config {
        brand: String::from("Composer"),
        menu: vec![MenuEntry::new("Security").with_children(vec![MenuEntry::new("Identity")
            .with_children(vec![
                MenuEntry::new("Users").with_path("/security/users"),
                MenuEntry::new("API Keys"),
            ])])],
        users: vec![
            UserRecord::new("Ada Lovelace", "ada@example.com").with_group("Full Access"),
            UserRecord::new("Alan Turing", "alan@example.com"),
        ],
        ..Config::default()
    }
}

#[rstest]
fn test_users_page_keys(config: Config) -> Result<()> {
    let mut app = App::new(config, Page::Users)?;
    app.update(&Action::ToggleMenu)?;

    let node = app.frame();

    assert_eq!(
        node.keys(),
        vec![
            "ViewElement:AdminView",
            "HeaderElement:adminHeader",
            "ViewElement:adminUsersSplitView",
            "GenericElement:adminUsersList",
            "ViewElement:adminUsersForm",
            "GenericElement:userName",
            "GenericElement:userEmail",
            "GenericElement:userGroup",
        ]
    );
    Ok(())
}

#[rstest]
fn test_selection_hides_group_field(config: Config) -> Result<()> {
    let mut app = App::new(config, Page::Users)?;
    app.update(&Action::ToggleMenu)?;

    app.update(&Action::SelectNext)?;

    let lines = app.frame().lines();
    assert!(lines.contains(&String::from("> Alan Turing <alan@example.com>")));
    assert!(lines.contains(&String::from("Name  Alan Turing")));
    assert!(!lines.iter().any(|line| line.starts_with("Group")));
    Ok(())
}

#[rstest]
fn test_dump_users_page(config: Config) -> Result<()> {
    let mut app = App::new(config, Page::Users)?;
    app.update(&Action::ToggleMenu)?;

    let lines = render_to_lines(&app.frame(), 40, 8);

    assert_eq!(
        lines,
        vec![
            "Composer │ Security - Users",
            "┌Users─────────────┐┌User──────────────┐",
            "│> Ada Lovelace <ad││Name  Ada Lovelace│",
            "│  Alan Turing <ala││Email ada@example.│",
            "│                  ││Group Full Access │",
            "│                  ││                  │",
            "│                  ││                  │",
            "└──────────────────┘└──────────────────┘",
        ]
    );
    Ok(())
}

#[rstest]
fn test_menu_comes_first(config: Config) -> Result<()> {
    let app = App::new(config, Page::Users)?;

    let lines = app.frame().lines();

    assert_eq!(
        lines[..5].to_vec(),
        vec!["≡ Composer", "Security", "  Identity", "    • Users", "    API Keys"]
    );
    Ok(())
}
