use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::data_bound::PageFrame;
use crate::icons::Icon;
use crate::routes::Route;

/// Shown for any path outside the route table.
pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <PageFrame id="not-found">
                <section class="section hero gradient-subtle">
                    <div class="container narrow center">
                        { Icon::Coffee.view_with_class("cta-icon") }
                        <h1 class="section-title">{ "Page Not Found" }</h1>
                        <p class="section-subtitle">
                            { "This page isn't part of the case study." }
                        </p>
                        <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>
                            { "Back to the Story" }
                            { Icon::ArrowRight.view() }
                        </Link<Route>>
                    </div>
                </section>
            </PageFrame>
        }
    }
}
