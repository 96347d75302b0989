use common::content::Collection;
use common::model::ResearchInsight;
use futures_util::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;

use super::item_key;
use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{card_grid, term_list, Card, Hero, SectionHeading};
use crate::icons::research_category_icon;

const METHODOLOGY: [Card; 4] = [
    Card {
        testid: "research-method-1",
        mark: "1",
        title: "Customer Interviews",
        body: "45+ in-depth conversations with loyal and lapsed customers",
    },
    Card {
        testid: "research-method-2",
        mark: "2",
        title: "Market Analysis",
        body: "Competitive landscape and specialty coffee trend evaluation",
    },
    Card {
        testid: "research-method-3",
        mark: "3",
        title: "Brand Perception",
        body: "Surveys and focus groups across demographics",
    },
    Card {
        testid: "research-method-4",
        mark: "4",
        title: "Digital Audit",
        body: "Social media, website analytics, and online sentiment",
    },
];

struct Persona {
    testid: &'static str,
    emoji: &'static str,
    name: &'static str,
    profile: &'static str,
    needs: &'static str,
    implications: &'static str,
}

const PERSONAS: [Persona; 3] = [
    Persona {
        testid: "persona-heritage",
        emoji: "👵",
        name: "The Heritage Loyalist",
        profile: "Age 55+ • Regular Customer Since 1980s",
        needs: "Values tradition, community connection, and consistency. Concerned rebrand might lose the familiar warmth.",
        implications: "Preserve warmth and approachability. Honor heritage visually.",
    },
    Persona {
        testid: "persona-explorer",
        emoji: "🧑",
        name: "The Coffee Explorer",
        profile: "Age 25-35 • Specialty Coffee Enthusiast",
        needs: "Seeks quality, ethical sourcing, and unique experiences. Values aesthetics and brand story.",
        implications: "Modern aesthetics, craft emphasis, Instagram-worthy moments.",
    },
    Persona {
        testid: "persona-professional",
        emoji: "💼",
        name: "The Busy Professional",
        profile: "Age 30-45 • Daily Commuter",
        needs: "Wants premium quality with convenience. Values efficiency, rewards programs, mobile ordering.",
        implications: "Clear information hierarchy, digital-first experience, premium positioning.",
    },
];

const VALUES: [(&str, &str); 4] = [
    ("Heritage:", " 40+ years of community roots"),
    ("Craft:", " Quality and care in every cup"),
    ("Warmth:", " Approachable, welcoming spaces"),
    ("Progress:", " Evolution without abandoning roots"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchContent {
    pub insights: Vec<ResearchInsight>,
}

impl PageContent for ResearchContent {
    const ID: &'static str = "research";
    const COLLECTIONS: &'static [Collection] = &[Collection::ResearchInsights];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            Self {
                insights: source.fetch_or_default(Collection::ResearchInsights).await,
            }
        }
        .boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        html! {
            <>
                <Hero eyebrow="Research & Strategy" title="Understanding the Coffee Drinker">
                    { "Before touching any design, we immersed ourselves in research—customer interviews, competitive analysis, market trends, and brand perception studies." }
                </Hero>
                <section class="section bg-white">
                    <div class="container">
                        <SectionHeading title="Our Research Methodology" />
                        { card_grid("four", &METHODOLOGY) }
                    </div>
                </section>
                { insights(&self.insights) }
                { personas() }
                { strategic_direction() }
            </>
        }
    }
}

fn insights(insights: &[ResearchInsight]) -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="Key Research Insights"
                    subtitle="Six critical findings that shaped our rebranding strategy and design direction."
                />
                <div class="card-grid three" data-testid="insights-grid">
                    { for insights.iter().enumerate().map(|(index, insight)| insight_card(index, insight)) }
                </div>
            </div>
        </section>
    }
}

fn insight_card(index: usize, insight: &ResearchInsight) -> Html {
    html! {
        <div
            key={item_key(index, &insight.id)}
            class="card hover-lift"
            data-testid={format!("insight-card-{index}")}
        >
            <div class="card-header">
                { research_category_icon(&insight.category).view_with_class("accent-icon") }
                <span class="pill">{ insight.category.clone() }</span>
            </div>
            <h3>{ insight.title.clone() }</h3>
            <p>{ insight.description.clone() }</p>
            <div class="metric">{ insight.metric.clone() }</div>
        </div>
    }
}

fn personas() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container">
                <SectionHeading
                    title="Target Personas"
                    subtitle="Based on research, we identified three core customer personas to guide brand development."
                />
                <div class="card-grid three">
                    {
                        for PERSONAS.iter().map(|persona| html! {
                            <div class="card latte" data-testid={persona.testid}>
                                <div class="card-mark">{ persona.emoji }</div>
                                <h3>{ persona.name }</h3>
                                <p class="accent">{ persona.profile }</p>
                                <p>{ persona.needs }</p>
                                <div class="note">
                                    <p class="label">{ "Design Implications:" }</p>
                                    <p>{ persona.implications }</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn strategic_direction() -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container narrow">
                <div class="panel" data-testid="strategic-direction">
                    <h2 class="heading center">{ "Strategic Brand Direction" }</h2>
                    <div class="rule"></div>
                    <h3 class="accent">{ "Brand Positioning" }</h3>
                    <p>
                        { "\"The Pacific Northwest's heritage coffee roaster that bridges generational coffee culture—honoring craft tradition while embracing contemporary specialty coffee excellence.\"" }
                    </p>
                    <h3 class="accent">{ "Brand Values" }</h3>
                    { term_list("•", &VALUES) }
                    <h3 class="accent">{ "Voice & Tone" }</h3>
                    <p>
                        { "Warm yet refined. Knowledgeable without being pretentious. Storytelling that celebrates both tradition and innovation. Approachable premium." }
                    </p>
                </div>
            </div>
        </section>
    }
}
