//! Admin console built on the composition layer: an admin frame with a
//! header, a navigation drawer and the pages shown inside the frame.

pub mod admin_view;
pub mod dashboard;
pub mod header;
pub mod logo;
pub mod menu;
pub mod navigation;
pub mod split_view;
pub mod users;

use crate::{domain::plugin::Plugin, infrastructure::config::Config};

/// Plugins wiring the configured brand and menu into the admin views.
pub fn plugins(config: &Config) -> Vec<Plugin> {
    let mut plugins = logo::plugins(config.brand.as_str());
    plugins.extend(menu::plugins(config.menu.clone()));
    plugins
}
