use crate::{
    domain::plugin::{Plugin, PluginKey, ViewPlugin},
    presentation::admin::{
        admin_view::{AdminView, ADMIN_VIEW},
        header::HeaderElement,
        navigation::{NavigationView, NAVIGATION_VIEW},
    },
};

/// Logo shown in the navigation drawer instead of the brand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminMenuLogo {
    pub logo: String,
}

/// Older setups register the drawer logo under this name.
pub const ADMIN_MENU_LOGO: PluginKey<AdminMenuLogo> = PluginKey::new("admin-menu-logo");

pub fn plugins(brand: impl Into<String>) -> Vec<Plugin> {
    let brand = brand.into();
    let admin_brand = brand.clone();
    vec![
        ViewPlugin::new(ADMIN_VIEW, move |view, _| {
            HeaderElement::set_logo(AdminView::header_mut(view)?, admin_brand.as_str());
            Ok(())
        })
        .into(),
        ViewPlugin::new(NAVIGATION_VIEW, move |view, registry| {
            let logo = registry
                .get(ADMIN_MENU_LOGO)
                .map_or(brand.as_str(), |entry| entry.logo.as_str());
            HeaderElement::set_logo(NavigationView::header_mut(view)?, logo);
            Ok(())
        })
        .into(),
    ]
}
