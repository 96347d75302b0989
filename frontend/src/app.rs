use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navigation::Navigation;
use crate::routes::{switch, Route};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        }
    }
}

/// Navigation bar above the page for the current route. Expects a router in
/// context.
pub struct Shell;

impl Component for Shell {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Navigation />
                <main class="content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{count, render_shell};
    use pretty_assertions::assert_eq;

    const PAGES: [(&str, &str, &str); 7] = [
        ("/", "home", "home"),
        ("/challenge", "challenge", "challenge"),
        ("/research", "research", "research"),
        ("/visual-identity", "visual-identity", "identity"),
        ("/marketing", "marketing", "marketing"),
        ("/website", "website-redesign", "website"),
        ("/impact", "impact", "impact"),
    ];

    #[tokio::test]
    async fn each_route_renders_one_page_and_one_active_link() {
        for (path, page, link) in PAGES {
            let html = render_shell(path).await;
            assert_eq!(count(&html, "data-testid=\"page-"), 1, "{path}");
            assert_eq!(count(&html, &format!("data-testid=\"page-{page}\"")), 1, "{path}");
            assert_eq!(count(&html, "aria-current=\"page\""), 1, "{path}");

            let marker = format!("data-testid=\"nav-link-{link}\"");
            let anchor_start = html[..html.find(&marker).unwrap()].rfind("<a").unwrap();
            let anchor_end = anchor_start + html[anchor_start..].find('>').unwrap();
            assert!(
                html[anchor_start..anchor_end].contains("aria-current=\"page\""),
                "{path} marks the wrong link"
            );
        }
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_without_an_active_link() {
        let html = render_shell("/unknown").await;
        assert_eq!(count(&html, "data-testid=\"page-not-found\""), 1);
        assert_eq!(count(&html, "data-testid=\"page-"), 1);
        assert_eq!(count(&html, "aria-current=\"page\""), 0);
    }

    #[tokio::test]
    async fn shell_renders_every_nav_link_and_the_logo() {
        let html = render_shell("/").await;
        assert_eq!(count(&html, "data-testid=\"logo-link\""), 1);
        assert!(html.contains("Vintage Brew Rebrand"));
        for (_, _, link) in PAGES {
            assert_eq!(count(&html, &format!("data-testid=\"nav-link-{link}\"")), 1);
        }
        assert_eq!(count(&html, "data-testid=\"mobile-menu\""), 0);
    }
}
