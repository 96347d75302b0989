use common::content::Collection;
use common::model::BrandOverview;
use futures_util::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::icons::Icon;
use crate::routes::Route;

const FOUNDED_FALLBACK: &str = "1983";
const LOCATIONS_FALLBACK: &str = "47";

const PILLARS: [(&str, &str); 3] = [
    ("Research-Driven Strategy", "Deep customer insights and competitive analysis"),
    ("Complete Visual Refresh", "Modern identity system honoring heritage"),
    ("360° Brand Experience", "Cohesive touchpoints from packaging to digital"),
];

/// Landing page. The only page with an explicit loading state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContent {
    pub overview: Option<BrandOverview>,
}

impl PageContent for HomeContent {
    const ID: &'static str = "home";
    const COLLECTIONS: &'static [Collection] = &[Collection::BrandOverview];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            Self {
                overview: source.fetch_or_default(Collection::BrandOverview).await,
            }
        }
        .boxed_local()
    }

    fn view(&self, settled: bool) -> Html {
        if !settled {
            return loading();
        }
        let overview = self.overview.clone().unwrap_or_default();
        html! {
            <>
                { hero(&overview) }
                { overview_section(&overview) }
                { call_to_action() }
            </>
        }
    }
}

fn loading() -> Html {
    html! {
        <div class="loading center" data-testid="home-loading">
            { Icon::Coffee.view_with_class("pulse") }
            <p>{ "Loading brand story..." }</p>
        </div>
    }
}

fn hero(overview: &BrandOverview) -> Html {
    let founded = overview
        .founded
        .as_deref()
        .unwrap_or(FOUNDED_FALLBACK)
        .to_string();
    let locations = overview
        .locations
        .as_deref()
        .and_then(leading_figure)
        .unwrap_or(LOCATIONS_FALLBACK)
        .to_string();

    html! {
        <section class="section hero hero-full gradient-subtle">
            <div class="container narrow center fade-in">
                <div class="badge">
                    { Icon::Sparkles.view() }
                    <span data-testid="hero-year">{ format!("Rebranding Case Study • {}", overview.year) }</span>
                </div>
                <h1 class="display-title" data-testid="hero-title">{ "Reviving a Coffee Legacy" }</h1>
                <p class="lead">
                    { "How we transformed " }
                    <span class="brand-name" data-testid="hero-brand">{ overview.brand_name.clone() }</span>
                    { ", a struggling 40-year-old coffee chain, into a modern specialty café brand that honors heritage while embracing the future." }
                </p>
                <div class="actions">
                    <Link<Route> to={Route::Challenge} classes={classes!("btn-primary")}>
                        { "Explore the Journey" }
                        { Icon::ArrowRight.view() }
                    </Link<Route>>
                    <Link<Route> to={Route::Impact} classes={classes!("btn-secondary")}>
                        { "View Results" }
                    </Link<Route>>
                </div>
                <div class="stats">
                    { stat("stat-founded", founded, "Founded") }
                    { stat("stat-locations", locations, "Locations") }
                    { stat("stat-improvement", "+86%".to_string(), "Brand Score") }
                    { stat("stat-engagement", "+128%".to_string(), "Youth Appeal") }
                </div>
            </div>
        </section>
    }
}

fn stat(testid: &'static str, value: String, label: &'static str) -> Html {
    html! {
        <div class="stat" data-testid={testid}>
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}

fn overview_section(overview: &BrandOverview) -> Html {
    html! {
        <section class="section bg-white">
            <div class="container two-columns">
                <div class="slide-up">
                    <h2 class="heading">{ "The Challenge" }</h2>
                    <p class="body-large" data-testid="home-challenge">{ overview.challenge.clone() }</p>
                    <div class="tagline-block">
                        <p class="label">{ "Old Tagline" }</p>
                        <p class="tagline" data-testid="old-tagline">{ format!("“{}”", overview.old_tagline) }</p>
                        <p class="label">{ "New Tagline" }</p>
                        <p class="tagline accent" data-testid="new-tagline">{ format!("“{}”", overview.new_tagline) }</p>
                    </div>
                </div>
                <div class="slide-up">
                    <h2 class="heading">{ "Our Solution" }</h2>
                    <p class="body-large" data-testid="home-solution">{ overview.solution.clone() }</p>
                    <div class="pillars">
                        {
                            for PILLARS.iter().map(|(title, body)| html! {
                                <div class="pillar">
                                    <div class="dot"></div>
                                    <div>
                                        <h3>{ *title }</h3>
                                        <p>{ *body }</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn call_to_action() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container narrow center">
                { Icon::Coffee.view_with_class("cta-icon") }
                <h2 class="heading">{ "Ready to Dive Deep?" }</h2>
                <p class="body-large">
                    { "Explore the complete rebranding journey—from initial research and strategy to final execution and measurable impact." }
                </p>
                <Link<Route> to={Route::Challenge} classes={classes!("btn-primary")}>
                    { "Start the Journey" }
                    { Icon::ArrowRight.view() }
                </Link<Route>>
            </div>
        </section>
    }
}

/// `"47 locations across the Pacific Northwest"` → `"47"`.
fn leading_figure(text: &str) -> Option<&str> {
    text.split_whitespace()
        .next()
        .filter(|word| word.starts_with(|c: char| c.is_ascii_digit()))
}
