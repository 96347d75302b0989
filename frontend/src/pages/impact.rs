use common::content::Collection;
use common::model::{ImpactMetric, Testimonial};
use futures_util::future::{join, FutureExt, LocalBoxFuture};
use yew::prelude::*;

use super::item_key;
use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{card_grid, Card, Hero, SectionHeading};
use crate::icons::{impact_metric_icon, Icon};

const TAKEAWAYS: [(&str, &str); 4] = [
    (
        "Research Drives Strategy",
        "Deep customer insights were essential to understanding the balance between honoring heritage and embracing modernity. Without research, we would have missed the emotional connection loyal customers had with the brand's history.",
    ),
    (
        "Consistency Is Everything",
        "A cohesive identity system across all touchpoints—from packaging to digital—creates a unified brand experience that builds recognition and trust exponentially faster than fragmented approaches.",
    ),
    (
        "Don't Fear Evolution",
        "Legacy brands often resist change from fear of alienating existing customers. Our results prove that thoughtful evolution can attract new audiences while deepening loyalty with existing ones.",
    ),
    (
        "Design With Purpose",
        "Every design decision—from color choices to typography—was rooted in strategic objectives and customer insights. Beautiful design that doesn't serve business goals is just decoration.",
    ),
];

const AWARDS: [Card; 3] = [
    Card {
        testid: "award-1",
        mark: "🏆",
        title: "Brand Impact Awards 2024",
        body: "Gold - Brand Transformation",
    },
    Card {
        testid: "award-2",
        mark: "⭐",
        title: "Design Excellence",
        body: "Featured in Creative Review",
    },
    Card {
        testid: "award-3",
        mark: "📰",
        title: "Industry Press",
        body: "Fast Company Case Study",
    },
];

/// Results page. Metrics and testimonials load concurrently; either may come
/// back empty without affecting the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactContent {
    pub metrics: Vec<ImpactMetric>,
    pub testimonials: Vec<Testimonial>,
}

impl PageContent for ImpactContent {
    const ID: &'static str = "impact";
    const COLLECTIONS: &'static [Collection] = &[Collection::ImpactMetrics, Collection::Testimonials];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            let (metrics, testimonials) = join(
                source.fetch_or_default(Collection::ImpactMetrics),
                source.fetch_or_default(Collection::Testimonials),
            )
            .await;
            Self {
                metrics,
                testimonials,
            }
        }
        .boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        html! {
            <>
                <Hero eyebrow="Results & Impact" title="A Brand Transformation">
                    { "Six months post-launch, the rebrand delivered measurable results across every key metric—from brand perception to revenue growth." }
                </Hero>
                <section class="section bg-white">
                    <div class="container">
                        <SectionHeading
                            title="Measurable Impact"
                            subtitle="Data-driven results demonstrating the power of strategic rebranding."
                        />
                        <div class="card-grid three" data-testid="metrics-grid">
                            { for self.metrics.iter().enumerate().map(|(index, metric)| metric_card(index, metric)) }
                        </div>
                    </div>
                </section>
                <section class="section gradient-subtle">
                    <div class="container">
                        <SectionHeading
                            title="Customer Voices"
                            subtitle="Real feedback from customers experiencing the transformed brand."
                        />
                        <div class="card-grid three" data-testid="testimonials-grid">
                            {
                                for self.testimonials.iter().enumerate().map(|(index, testimonial)| {
                                    testimonial_card(index, testimonial)
                                })
                            }
                        </div>
                    </div>
                </section>
                { takeaways() }
                <section class="section gradient-subtle">
                    <div class="container narrow center">
                        <SectionHeading
                            title="Recognition"
                            subtitle="The Vintage Brew rebrand has been recognized by industry organizations and publications."
                            icon={Icon::Award}
                        />
                        { card_grid("three", &AWARDS) }
                    </div>
                </section>
                { closing() }
            </>
        }
    }
}

fn metric_card(index: usize, metric: &ImpactMetric) -> Html {
    html! {
        <div
            key={item_key(index, &metric.id)}
            class="card metric-card"
            data-testid={format!("metric-card-{index}")}
        >
            { impact_metric_icon(index).view_with_class("metric-icon") }
            <h3 data-testid={format!("metric-name-{index}")}>{ metric.metric_name.clone() }</h3>
            <div class="before-after">
                <div>
                    <div class="label">{ "Before" }</div>
                    <div class="value muted" data-testid={format!("metric-before-{index}")}>
                        { metric.before_value.clone() }
                    </div>
                </div>
                <div class="right">
                    <div class="label">{ "After" }</div>
                    <div class="value accent" data-testid={format!("metric-after-{index}")}>
                        { metric.after_value.clone() }
                    </div>
                </div>
            </div>
            <div class="improvement">
                <div class="value" data-testid={format!("metric-improvement-{index}")}>
                    { metric.improvement.clone() }
                </div>
                <div class="label">{ "improvement" }</div>
            </div>
        </div>
    }
}

fn testimonial_card(index: usize, testimonial: &Testimonial) -> Html {
    html! {
        <div
            key={item_key(index, &testimonial.id)}
            class="card testimonial-card"
            data-testid={format!("testimonial-card-{index}")}
        >
            <div class="author">
                <img class="avatar" src={testimonial.image.clone()} alt={testimonial.name.clone()} />
                <div>
                    <h3>{ testimonial.name.clone() }</h3>
                    <p class="caption">{ testimonial.role.clone() }</p>
                </div>
            </div>
            <p class="quote" data-testid={format!("testimonial-quote-{index}")}>
                { format!("\"{}\"", testimonial.quote) }
            </p>
        </div>
    }
}

fn takeaways() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container narrow">
                <SectionHeading
                    title="Key Takeaways"
                    subtitle="Lessons learned from this comprehensive rebranding journey."
                />
                <div class="stack">
                    {
                        for TAKEAWAYS.iter().enumerate().map(|(index, (title, body))| html! {
                            <div class="objective latte" data-testid={format!("takeaway-{}", index + 1)}>
                                <h3 class="accent">{ format!("{}. {}", index + 1, title) }</h3>
                                <p>{ *body }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn closing() -> Html {
    html! {
        <section class="section bg-espresso">
            <div class="container narrow center">
                <h2 class="heading">{ "Ready to Transform Your Brand?" }</h2>
                <p class="body-large">
                    { "This case study demonstrates the power of strategic rebranding. Whether you're a legacy brand needing refresh or a new venture seeking identity, thoughtful design creates measurable business impact." }
                </p>
                <button class="btn-accent" data-testid="contact-btn">{ "Let's Talk About Your Brand" }</button>
            </div>
        </section>
    }
}
