use common::content::Collection;
use common::model::MarketingCollateralItem;
use futures_util::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;

use super::item_key;
use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{card_grid, marked_list, Card, Hero, SectionHeading};
use crate::icons::{collateral_type_icon, Icon};

struct Campaign {
    testid: &'static str,
    emoji: &'static str,
    title: &'static str,
    summary: &'static str,
    tactics: [&'static str; 3],
}

const CAMPAIGNS: [Campaign; 2] = [
    Campaign {
        testid: "campaign-heritage",
        emoji: "📜",
        title: "\"Rooted in Heritage\" Series",
        summary: "Social media storytelling highlighting 40+ years of community moments, employee stories, and Pacific Northwest coffee culture.",
        tactics: [
            "Weekly historical photo features",
            "Customer story spotlight videos",
            "Behind-the-scenes roasting content",
        ],
    },
    Campaign {
        testid: "campaign-craft",
        emoji: "✨",
        title: "\"Crafted with Care\" Campaign",
        summary: "In-store and digital campaign showcasing sourcing practices, roasting process, and barista craftsmanship.",
        tactics: [
            "Origin story video series",
            "Seasonal menu launches",
            "Sustainability commitments",
        ],
    },
];

const GUIDELINES: [Card; 4] = [
    Card {
        testid: "guideline-logo",
        mark: "🎨",
        title: "Logo Usage",
        body: "Clear space, sizing, variations, misuse examples",
    },
    Card {
        testid: "guideline-color",
        mark: "🌈",
        title: "Color System",
        body: "Palettes, ratios, accessibility standards",
    },
    Card {
        testid: "guideline-typography",
        mark: "📝",
        title: "Typography",
        body: "Hierarchy, sizing, pairing rules",
    },
    Card {
        testid: "guideline-voice",
        mark: "💬",
        title: "Voice & Tone",
        body: "Writing style, messaging, do's and don'ts",
    },
];

const TOUCHPOINTS: [(&str, Icon, &str, [&str; 4]); 3] = [
    (
        "touchpoint-physical",
        Icon::Package,
        "Physical",
        [
            "Store signage & interiors",
            "Packaging & product design",
            "Uniforms & merchandise",
            "Menu boards & posters",
        ],
    ),
    (
        "touchpoint-digital",
        Icon::Share,
        "Digital",
        [
            "Website & mobile app",
            "Social media templates",
            "Email campaigns",
            "Digital advertising",
        ],
    ),
    (
        "touchpoint-print",
        Icon::File,
        "Print",
        [
            "Business cards & stationery",
            "Brochures & flyers",
            "Promotional materials",
            "Out-of-home advertising",
        ],
    ),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketingContent {
    pub collateral: Vec<MarketingCollateralItem>,
}

impl PageContent for MarketingContent {
    const ID: &'static str = "marketing";
    const COLLECTIONS: &'static [Collection] = &[Collection::MarketingCollateral];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            Self {
                collateral: source
                    .fetch_or_default(Collection::MarketingCollateral)
                    .await,
            }
        }
        .boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        html! {
            <>
                <Hero eyebrow="Marketing & Applications" title="Bringing the Brand to Life">
                    { "The new identity comes alive across every customer touchpoint—from coffee bags and reusable cups to social campaigns and store environments." }
                </Hero>
                <section class="section bg-white">
                    <div class="container wide card-grid three" data-testid="collateral-grid">
                        {
                            for self.collateral.iter().enumerate().map(|(index, item)| collateral_card(index, item))
                        }
                    </div>
                </section>
                { campaigns() }
                { guidelines() }
                { touchpoints() }
            </>
        }
    }
}

fn collateral_card(index: usize, item: &MarketingCollateralItem) -> Html {
    html! {
        <div
            key={item_key(index, &item.id)}
            class="image-card"
            data-testid={format!("collateral-card-{index}")}
        >
            <div class="image-frame">
                <img src={item.image_url.clone()} alt={item.title.clone()} loading="lazy" />
            </div>
            <div class="card-body">
                <div class="card-kind">
                    { collateral_type_icon(&item.kind).view_with_class("accent-icon") }
                    <span class="kind-label" data-testid={format!("collateral-type-{index}")}>{ item.kind.clone() }</span>
                </div>
                <h3>{ item.title.clone() }</h3>
                <p>{ item.description.clone() }</p>
            </div>
        </div>
    }
}

fn campaigns() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="Launch Campaign"
                    subtitle="The rebrand launched with an integrated campaign celebrating heritage, craft, and community."
                />
                <div class="card-grid two">
                    {
                        for CAMPAIGNS.iter().map(|campaign| html! {
                            <div class="card" data-testid={campaign.testid}>
                                <div class="card-mark">{ campaign.emoji }</div>
                                <h3>{ campaign.title }</h3>
                                <p>{ campaign.summary }</p>
                                { marked_list("•", &campaign.tactics) }
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn guidelines() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container narrow">
                <div class="panel latte">
                    <SectionHeading
                        title="Comprehensive Brand Guidelines"
                        subtitle="A detailed style guide ensures consistent brand application across all teams and touchpoints."
                        icon={Icon::File}
                    />
                    { card_grid("four", &GUIDELINES) }
                    <div class="center">
                        <button class="btn-primary" data-testid="download-guidelines-btn">
                            { "Download Brand Guidelines (PDF)" }
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn touchpoints() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="360° Brand Experience"
                    subtitle="Consistent, cohesive brand experience at every touchpoint."
                />
                <div class="card-grid three">
                    {
                        for TOUCHPOINTS.iter().map(|(testid, icon, title, items)| html! {
                            <div class="card center" data-testid={*testid}>
                                <div class="icon-circle">{ icon.view() }</div>
                                <h3>{ *title }</h3>
                                <ul class="plain-list">
                                    { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                </ul>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
