use yew::prelude::*;

use crate::components::pages::about::About;
use crate::components::pages::analytics::Analytics;
use crate::components::pages::clients::Clients;
use crate::components::pages::feedback::Feedback;
use crate::components::pages::home::Home;
use crate::components::pages::notifications::Notifications;
use crate::components::pages::profile::Profile;
use crate::components::pages::settings::Settings;
use crate::components::pages::tasks::Tasks;
use crate::components::pages::volunteers::Volunteers;

/// Identifier for one dashboard sub-page. The set is fixed; anything
/// else resolves to [`PageKey::Home`] through [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    Analytics,
    Clients,
    Tasks,
    Volunteers,
    Profile,
    Notifications,
    Settings,
    About,
    Feedback,
}

/// All registered pages, in menu order.
pub const ALL_PAGES: [PageKey; 10] = [
    PageKey::Home,
    PageKey::Analytics,
    PageKey::Clients,
    PageKey::Tasks,
    PageKey::Volunteers,
    PageKey::Profile,
    PageKey::Notifications,
    PageKey::Settings,
    PageKey::About,
    PageKey::Feedback,
];

#[derive(Clone, PartialEq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub active: bool,
}

impl PageKey {
    /// Exact match on the canonical lowercase key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(Self::Home),
            "analytics" => Some(Self::Analytics),
            "clients" => Some(Self::Clients),
            "tasks" => Some(Self::Tasks),
            "volunteers" => Some(Self::Volunteers),
            "profile" => Some(Self::Profile),
            "notifications" => Some(Self::Notifications),
            "settings" => Some(Self::Settings),
            "about" => Some(Self::About),
            "feedback" => Some(Self::Feedback),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Analytics => "analytics",
            Self::Clients => "clients",
            Self::Tasks => "tasks",
            Self::Volunteers => "volunteers",
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::About => "about",
            Self::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Analytics => "Analytics",
            Self::Clients => "Clients",
            Self::Tasks => "Tasks",
            Self::Volunteers => "Volunteers",
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
            Self::About => "About",
            Self::Feedback => "Feedback",
        }
    }

    /// Font Awesome icon class for the side menu.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "fas fa-home",
            Self::Analytics => "fas fa-chart-line",
            Self::Clients => "fas fa-handshake",
            Self::Tasks => "fas fa-list-check",
            Self::Volunteers => "fas fa-people-carry-box",
            Self::Profile => "fas fa-user-circle",
            Self::Notifications => "fas fa-bell",
            Self::Settings => "fas fa-cog",
            Self::About => "fas fa-circle-info",
            Self::Feedback => "fas fa-comment-dots",
        }
    }

    /// Breadcrumb trail for the page: a "Home" link followed by the
    /// active entry, or just the active entry on home itself.
    pub fn breadcrumb(&self) -> Vec<BreadcrumbItem> {
        match self {
            Self::Home => vec![BreadcrumbItem {
                label: "Home".to_string(),
                active: true,
            }],
            other => vec![
                BreadcrumbItem {
                    label: "Home".to_string(),
                    active: false,
                },
                BreadcrumbItem {
                    label: other.label().to_string(),
                    active: true,
                },
            ],
        }
    }

    pub fn render(&self) -> Html {
        match self {
            Self::Home => html! { <Home /> },
            Self::Analytics => html! { <Analytics /> },
            Self::Clients => html! { <Clients /> },
            Self::Tasks => html! { <Tasks /> },
            Self::Volunteers => html! { <Volunteers /> },
            Self::Profile => html! { <Profile /> },
            Self::Notifications => html! { <Notifications /> },
            Self::Settings => html! { <Settings /> },
            Self::About => html! { <About /> },
            Self::Feedback => html! { <Feedback /> },
        }
    }
}

/// Outcome of a registry lookup. Total over all inputs; `Defaulted`
/// carries the home page and tells the caller the input was not a
/// registered key, so bad navigation input can be detected instead of
/// silently aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Found(PageKey),
    Defaulted(PageKey),
}

impl Resolved {
    pub fn page(self) -> PageKey {
        match self {
            Self::Found(key) | Self::Defaulted(key) => key,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

pub fn resolve(key: &str) -> Resolved {
    match PageKey::from_key(key) {
        Some(page) => Resolved::Found(page),
        None => Resolved::Defaulted(PageKey::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_total_with_home_default() {
        for bad in ["", "HOME", "Home ", "dashboard", "404", "tasks/1", "🦀"] {
            let resolved = resolve(bad);
            assert!(resolved.is_defaulted(), "{:?} should default", bad);
            assert_eq!(resolved.page(), PageKey::Home);
        }
    }

    #[test]
    fn test_resolve_finds_every_registered_key() {
        for page in ALL_PAGES {
            let resolved = resolve(page.as_key());
            assert_eq!(resolved, Resolved::Found(page));
            assert!(!resolved.is_defaulted());
        }
    }

    #[test]
    fn test_key_round_trip() {
        for page in ALL_PAGES {
            assert_eq!(PageKey::from_key(page.as_key()), Some(page));
        }
    }

    #[test]
    fn test_breadcrumb_shape() {
        let home = PageKey::Home.breadcrumb();
        assert_eq!(home.len(), 1);
        assert!(home[0].active);

        for page in ALL_PAGES.iter().filter(|p| **p != PageKey::Home) {
            let trail = page.breadcrumb();
            assert_eq!(trail.len(), 2);
            assert_eq!(trail[0].label, "Home");
            assert!(!trail[0].active);
            assert_eq!(trail[1].label, page.label());
            assert!(trail[1].active, "last entry of {:?} must be active", page);
        }
    }
}
