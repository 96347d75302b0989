//! Top navigation bar: logo, one link per page and a collapsible menu for
//! narrow screens.
//!
//! The active link is decided by exact comparison of the current path with
//! each item's path, so unknown paths leave every link inactive.

mod state;
mod view;

pub use state::{MenuAction, MenuState};
pub use view::Navigation;

use crate::routes::Route;

/// Menu entries in display order.
pub const NAV_ITEMS: [(Route, &str); 7] = [
    (Route::Home, "Home"),
    (Route::Challenge, "Challenge"),
    (Route::Research, "Research"),
    (Route::VisualIdentity, "Identity"),
    (Route::Marketing, "Marketing"),
    (Route::WebsiteRedesign, "Website"),
    (Route::Impact, "Impact"),
];

/// Index into `NAV_ITEMS` of the item whose path equals `path`.
pub fn active_index(path: &str) -> Option<usize> {
    NAV_ITEMS
        .iter()
        .position(|(route, _)| yew_router::Routable::to_path(route) == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_item_is_active_only_on_its_own_path() {
        let paths = [
            "/",
            "/challenge",
            "/research",
            "/visual-identity",
            "/marketing",
            "/website",
            "/impact",
        ];
        for (index, path) in paths.into_iter().enumerate() {
            assert_eq!(active_index(path), Some(index), "{path}");
        }
    }

    #[test]
    fn no_item_is_active_elsewhere() {
        assert_eq!(active_index("/unknown"), None);
        assert_eq!(active_index("/impact/"), None);
        assert_eq!(active_index("/Research"), None);
        assert_eq!(active_index(""), None);
    }
}
