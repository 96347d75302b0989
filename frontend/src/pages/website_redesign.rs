use common::content::Collection;
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use yew::prelude::*;

use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{marked_list, term_list, Hero, SectionHeading};
use crate::icons::Icon;

const PREVIOUS_ISSUES: [&str; 4] = [
    "Confusing navigation and information hierarchy",
    "No mobile optimization or responsive design",
    "Minimal product photography and storytelling",
    "Slow load times and outdated technology",
];

const IMPROVEMENTS: [&str; 4] = [
    "Intuitive navigation with clear user journeys",
    "Fully responsive design optimized for all devices",
    "Rich photography and brand storytelling",
    "Fast performance with modern tech stack",
];

struct Feature {
    testid: &'static str,
    emoji: &'static str,
    title: &'static str,
    body: &'static str,
    outcome: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        testid: "feature-menu",
        emoji: "☕",
        title: "Interactive Menu",
        body: "Beautiful product photography with detailed descriptions, origin stories, and customization options.",
        outcome: "Increased add-to-cart rate by 65%",
    },
    Feature {
        testid: "feature-ordering",
        emoji: "📱",
        title: "Mobile Ordering",
        body: "Seamless order-ahead functionality with store location selection and pickup time estimates.",
        outcome: "30% of orders now placed online",
    },
    Feature {
        testid: "feature-stories",
        emoji: "📖",
        title: "Origin Stories",
        body: "Dedicated section showcasing coffee sourcing, farmer partnerships, and sustainability practices.",
        outcome: "Average time on site +3.2 minutes",
    },
    Feature {
        testid: "feature-locator",
        emoji: "📍",
        title: "Store Locator",
        body: "Interactive map with filtering, hours, amenities, and directions for all 47 locations.",
        outcome: "Improved location discovery",
    },
    Feature {
        testid: "feature-rewards",
        emoji: "🎁",
        title: "Loyalty Program",
        body: "Integrated rewards dashboard with point tracking, personalized offers, and member perks.",
        outcome: "42% enrollment rate",
    },
    Feature {
        testid: "feature-blog",
        emoji: "✍️",
        title: "Coffee Journal",
        body: "Editorial content covering brewing tips, recipe ideas, and coffee culture insights.",
        outcome: "Building community & SEO",
    },
];

const DEVICES: [(&str, Icon, &str, &str); 3] = [
    (
        "responsive-desktop",
        Icon::Monitor,
        "Desktop",
        "Rich layouts with immersive photography and detailed product information",
    ),
    (
        "responsive-tablet",
        Icon::Tablet,
        "Tablet",
        "Optimized touch interfaces with adapted layouts for medium screens",
    ),
    (
        "responsive-mobile",
        Icon::Smartphone,
        "Mobile",
        "Streamlined navigation and thumb-friendly interactions for on-the-go ordering",
    ),
];

const FRONTEND_STACK: [(&str, &str); 3] = [
    ("React", " - Component-based UI"),
    ("Next.js", " - Server-side rendering & SEO"),
    ("Tailwind CSS", " - Utility-first styling"),
];

const PERFORMANCE: [&str; 3] = [
    "Page load time: 1.2s (85% improvement)",
    "Lighthouse score: 95/100",
    "Mobile-first with progressive enhancement",
];

/// Entirely static; never touches the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebsiteRedesignContent;

impl PageContent for WebsiteRedesignContent {
    const ID: &'static str = "website-redesign";
    const COLLECTIONS: &'static [Collection] = &[];

    fn load<S: ContentSource>(_source: S) -> LocalBoxFuture<'static, Self> {
        ready(Self).boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        html! {
            <>
                <Hero eyebrow="Website Redesign" title="Digital Experience Reimagined">
                    { "The website transformation brings the new brand identity to life online with modern UX, compelling storytelling, and seamless functionality." }
                </Hero>
                { evolution() }
                { features() }
                { responsive() }
                { tech_stack() }
            </>
        }
    }
}

fn evolution() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container">
                <SectionHeading
                    title="Website Evolution"
                    subtitle="From cluttered and outdated to clean, inviting, and conversion-focused."
                />
                <div class="card-grid two">
                    <div class="stack" data-testid="before-website">
                        <div class="screen old">
                            { Icon::Monitor.view_with_class("screen-icon") }
                            <p>{ "Old Website Design" }</p>
                            <p class="caption">{ "Dated layout, poor UX" }</p>
                        </div>
                        <div class="panel latte">
                            <h3>{ "Previous Issues" }</h3>
                            { marked_list("×", &PREVIOUS_ISSUES) }
                        </div>
                    </div>
                    <div class="stack" data-testid="after-website">
                        <div class="screen new">
                            { Icon::Monitor.view_with_class("screen-icon accent") }
                            <p>{ "New Website Design" }</p>
                            <p class="caption accent">{ "Modern, intuitive, engaging" }</p>
                        </div>
                        <div class="panel outlined">
                            <h3>{ "Improvements" }</h3>
                            { marked_list("✓", &IMPROVEMENTS) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn features() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="Key Features"
                    subtitle="Strategic functionality designed to drive engagement and conversions."
                />
                <div class="card-grid three">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="card" data-testid={feature.testid}>
                                <div class="card-mark">{ feature.emoji }</div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.body }</p>
                                <div class="outcome">{ feature.outcome }</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn responsive() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container">
                <SectionHeading
                    title="Responsive Design"
                    subtitle="Optimized experiences across all devices—desktop, tablet, and mobile."
                    icon={Icon::Layout}
                />
                <div class="card-grid three">
                    {
                        for DEVICES.iter().map(|(testid, icon, title, body)| html! {
                            <div class="center" data-testid={*testid}>
                                <div class="device-tile">{ icon.view_with_class("device-icon") }</div>
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn tech_stack() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container narrow">
                <div class="panel" data-testid="tech-stack">
                    <SectionHeading
                        title="Technology Stack"
                        subtitle="Modern, performant infrastructure built for scale and speed."
                    />
                    <div class="card-grid two">
                        <div>
                            <h3 class="accent">{ "Frontend" }</h3>
                            { term_list("•", &FRONTEND_STACK) }
                        </div>
                        <div>
                            <h3 class="accent">{ "Performance" }</h3>
                            { marked_list("•", &PERFORMANCE) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
