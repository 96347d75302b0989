use common::content::Collection;
use common::model::BrandOverview;
use futures_util::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;

use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{marked_list, Hero, SectionHeading};
use crate::icons::Icon;

struct Challenge {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const CHALLENGES: [Challenge; 4] = [
    Challenge {
        icon: Icon::TrendingDown,
        title: "Declining Performance",
        description: "Year-over-year foot traffic down 12%, with revenue declining across all locations.",
        accent: "copper",
    },
    Challenge {
        icon: Icon::Users,
        title: "Demographic Disconnect",
        description: "Only 18% of customers under 35, missing the core specialty coffee demographic.",
        accent: "terracotta",
    },
    Challenge {
        icon: Icon::Eye,
        title: "Outdated Perception",
        description: "Brand viewed as dated, corporate, and disconnected from modern coffee culture.",
        accent: "copper",
    },
    Challenge {
        icon: Icon::Warning,
        title: "Competitive Pressure",
        description: "Losing market share to independent cafés and modern specialty chains.",
        accent: "terracotta",
    },
];

const OLD_IDENTITY: [(&str, [&str; 3]); 3] = [
    (
        "Visual Language",
        [
            "Dark, heavy color palette",
            "Complex, dated logo design",
            "Inconsistent brand applications",
        ],
    ),
    (
        "Brand Voice",
        [
            "Corporate and impersonal",
            "Focused on convenience over craft",
            "Lacked storytelling and personality",
        ],
    ),
    (
        "Customer Experience",
        [
            "Generic café atmosphere",
            "Limited digital engagement",
            "Minimal social media presence",
        ],
    ),
];

const OBJECTIVES: [(&str, &str); 4] = [
    (
        "Attract Younger Demographics",
        "Increase under-35 customer base from 18% to 40%+ through modern aesthetics and authentic storytelling.",
    ),
    (
        "Elevate Brand Perception",
        "Transform perception from 'dated chain' to 'craft coffee destination' while maintaining loyal customer base.",
    ),
    (
        "Create Cohesive Brand System",
        "Develop flexible, modern identity system that works across all touchpoints—physical spaces to digital platforms.",
    ),
    (
        "Honor Pacific Northwest Roots",
        "Celebrate 40+ years of community connection and regional coffee heritage in authentic, contemporary way.",
    ),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeContent {
    pub overview: Option<BrandOverview>,
}

impl PageContent for ChallengeContent {
    const ID: &'static str = "challenge";
    const COLLECTIONS: &'static [Collection] = &[Collection::BrandOverview];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            Self {
                overview: source.fetch_or_default(Collection::BrandOverview).await,
            }
        }
        .boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        let brand = self
            .overview
            .as_ref()
            .map(|overview| overview.brand_name.clone())
            .unwrap_or_default();

        html! {
            <>
                <Hero eyebrow="The Challenge" title="A Legacy Brand at a Crossroads">
                    <span data-testid="challenge-brand">{ brand }</span>
                    { " had built a loyal following over four decades, but by 2023, the brand was struggling to remain relevant in an evolving coffee landscape." }
                </Hero>
                { challenges() }
                { old_identity() }
                { objectives() }
            </>
        }
    }
}

fn challenges() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container card-grid two">
                {
                    for CHALLENGES.iter().enumerate().map(|(index, challenge)| html! {
                        <div class="card hover-lift" data-testid={format!("challenge-card-{index}")}>
                            <div class={classes!("icon-tile", challenge.accent)}>
                                { challenge.icon.view() }
                            </div>
                            <h3>{ challenge.title }</h3>
                            <p>{ challenge.description }</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

fn old_identity() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="The Old Identity"
                    subtitle="The original branding reflected 1980s corporate aesthetics—heavy, formal, and disconnected from today's coffee culture."
                />
                <div class="card-grid three">
                    {
                        for OLD_IDENTITY.iter().map(|(heading, issues)| html! {
                            <div class="card">
                                <h3>{ *heading }</h3>
                                { marked_list("×", issues) }
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn objectives() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container narrow">
                <SectionHeading
                    title="Rebranding Objectives"
                    subtitle="Our goals were clear: honor the heritage while building a brand that resonates with modern coffee enthusiasts."
                />
                <div class="stack">
                    {
                        for OBJECTIVES.iter().enumerate().map(|(index, (title, body))| html! {
                            <div class="objective" data-testid={format!("objective-{}", index + 1)}>
                                <h3>{ format!("{}. {}", index + 1, title) }</h3>
                                <p>{ *body }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
