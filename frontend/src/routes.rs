//! Route dispatcher: the exact-match table from URL path to page.

use yew::{html, Html};
use yew_router::Routable;

use crate::components::data_bound::DataBound;
use crate::pages::challenge::ChallengeContent;
use crate::pages::home::HomeContent;
use crate::pages::impact::ImpactContent;
use crate::pages::marketing::MarketingContent;
use crate::pages::not_found::NotFound;
use crate::pages::research::ResearchContent;
use crate::pages::visual_identity::VisualIdentityContent;
use crate::pages::website_redesign::WebsiteRedesignContent;

/// Client-side routes. Paths are static; there are no parameters.
///
/// Anything else resolves to `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/challenge")]
    Challenge,
    #[at("/research")]
    Research,
    #[at("/visual-identity")]
    VisualIdentity,
    #[at("/marketing")]
    Marketing,
    #[at("/website")]
    WebsiteRedesign,
    #[at("/impact")]
    Impact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <DataBound<HomeContent> /> },
        Route::Challenge => html! { <DataBound<ChallengeContent> /> },
        Route::Research => html! { <DataBound<ResearchContent> /> },
        Route::VisualIdentity => html! { <DataBound<VisualIdentityContent> /> },
        Route::Marketing => html! { <DataBound<MarketingContent> /> },
        Route::WebsiteRedesign => html! { <DataBound<WebsiteRedesignContent> /> },
        Route::Impact => html! { <DataBound<ImpactContent> /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_its_path() {
        let table = [
            ("/", Route::Home),
            ("/challenge", Route::Challenge),
            ("/research", Route::Research),
            ("/visual-identity", Route::VisualIdentity),
            ("/marketing", Route::Marketing),
            ("/website", Route::WebsiteRedesign),
            ("/impact", Route::Impact),
        ];
        for (path, route) in table {
            assert_eq!(Route::recognize(path), Some(route), "{path}");
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/impact/2024"), Some(Route::NotFound));
    }
}
