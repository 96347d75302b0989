use common::content::Collection;
use common::model::{BrandColor, TypographyEntry};
use futures_util::future::{join, FutureExt, LocalBoxFuture};
use yew::prelude::*;

use super::item_key;
use crate::client::ContentSource;
use crate::components::data_bound::PageContent;
use crate::components::sections::{card_grid, Card, Hero, SectionHeading};
use crate::icons::Icon;

/// Swatches pale enough to need dark text on top.
const LIGHT_SWATCHES: [&str; 2] = ["#FAF7F2", "#F4EDE4"];

const RATIONALE: [(&str, &str); 3] = [
    (
        "Typography",
        "Playfair Display brings editorial elegance while maintaining readability and warmth",
    ),
    (
        "Simplicity",
        "Removed decorative clutter for timeless mark that works at any scale",
    ),
    (
        "Heritage Link",
        "\"Since 1983\" preserves historical connection in understated way",
    ),
];

const PRINCIPLES: [Card; 4] = [
    Card {
        testid: "principle-warmth",
        mark: "",
        title: "Approachable Warmth",
        body: "Every element should feel inviting and human. Avoid cold, corporate aesthetics in favor of organic warmth.",
    },
    Card {
        testid: "principle-craft",
        mark: "",
        title: "Craft Excellence",
        body: "Attention to detail and quality materials communicate premium coffee experience without pretension.",
    },
    Card {
        testid: "principle-balance",
        mark: "",
        title: "Heritage Balance",
        body: "Honor the past through subtle nods to history while embracing contemporary design language.",
    },
    Card {
        testid: "principle-flexibility",
        mark: "",
        title: "Flexible System",
        body: "Identity must work seamlessly across physical spaces, packaging, digital platforms, and marketing materials.",
    },
];

/// Palette and type system. Both collections load concurrently and each
/// falls back to empty on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualIdentityContent {
    pub colors: Vec<BrandColor>,
    pub typography: Vec<TypographyEntry>,
}

impl PageContent for VisualIdentityContent {
    const ID: &'static str = "visual-identity";
    const COLLECTIONS: &'static [Collection] = &[Collection::BrandColors, Collection::Typography];

    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self> {
        async move {
            let (colors, typography) = join(
                source.fetch_or_default(Collection::BrandColors),
                source.fetch_or_default(Collection::Typography),
            )
            .await;
            Self { colors, typography }
        }
        .boxed_local()
    }

    fn view(&self, _settled: bool) -> Html {
        html! {
            <>
                <Hero eyebrow="Visual Identity" title="A Modern Identity with Soul">
                    { "The new visual identity honors Vintage Brew's heritage while establishing a contemporary, craft-focused aesthetic that appeals to modern coffee enthusiasts." }
                </Hero>
                { logo_evolution() }
                { palette(&self.colors) }
                { type_system(&self.typography) }
                <section class="section gradient-subtle">
                    <div class="container narrow">
                        <SectionHeading title="Design Principles" icon={Icon::Sparkles} />
                        { card_grid("two", &PRINCIPLES) }
                    </div>
                </section>
            </>
        }
    }
}

fn logo_evolution() -> Html {
    html! {
        <section class="section bg-white">
            <div class="container">
                <SectionHeading
                    title="Logo Evolution"
                    subtitle="From complex and dated to refined and timeless—the new mark balances heritage with modernity."
                />
                <div class="card-grid two">
                    <div class="logo-panel old" data-testid="old-logo">
                        <div class="logo-mark">
                            <div class="logo-initials">{ "VB" }</div>
                            <div class="logo-caption">{ "EST. 1983" }</div>
                        </div>
                        <h3>{ "Before" }</h3>
                        <p>{ "Heavy, corporate, dated letterforms with complex embellishments" }</p>
                    </div>
                    <div class="logo-panel new" data-testid="new-logo">
                        <div class="logo-mark">
                            <div class="logo-wordmark">{ "Vintage Brew" }</div>
                            <div class="logo-caption accent">{ "SINCE 1983" }</div>
                        </div>
                        <h3 class="accent">{ "After" }</h3>
                        <p>{ "Clean, elegant serif with subtle vintage charm and modern refinement" }</p>
                    </div>
                </div>
                <div class="panel latte">
                    <h3>{ "Design Rationale" }</h3>
                    <div class="card-grid three">
                        {
                            for RATIONALE.iter().map(|(label, body)| html! {
                                <div>
                                    <div class="label accent">{ *label }</div>
                                    <p>{ *body }</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn palette(colors: &[BrandColor]) -> Html {
    html! {
        <section class="section gradient-subtle">
            <div class="container">
                <SectionHeading
                    title="Color Palette"
                    subtitle="Warm, inviting colors inspired by coffee, craft materials, and Pacific Northwest landscapes."
                    icon={Icon::Palette}
                />
                <div class="card-grid three" data-testid="color-grid">
                    { for colors.iter().enumerate().map(|(index, color)| color_card(index, color)) }
                </div>
            </div>
        </section>
    }
}

fn color_card(index: usize, color: &BrandColor) -> Html {
    let ink = if LIGHT_SWATCHES.contains(&color.hex_code.as_str()) {
        "ink-dark"
    } else {
        "ink-light"
    };
    html! {
        <div
            key={item_key(index, &color.id)}
            class="card swatch-card hover-lift"
            data-testid={format!("color-card-{index}")}
        >
            <div class={classes!("swatch", ink)} style={format!("background-color: {}", color.hex_code)}>
                <div class="swatch-hex" data-testid={format!("color-hex-{index}")}>{ color.hex_code.clone() }</div>
                <div class="swatch-type" data-testid={format!("color-type-{index}")}>{ color.kind.to_uppercase() }</div>
            </div>
            <div class="card-body">
                <h3>{ color.name.clone() }</h3>
                <p>{ color.usage.clone() }</p>
            </div>
        </div>
    }
}

fn type_system(typography: &[TypographyEntry]) -> Html {
    html! {
        <section class="section bg-white">
            <div class="container">
                <SectionHeading
                    title="Typography System"
                    subtitle="A balanced pairing of elegant serif and clean sans-serif for versatility across all applications."
                    icon={Icon::Type}
                />
                <div class="stack" data-testid="typography-list">
                    { for typography.iter().enumerate().map(|(index, entry)| typography_card(index, entry)) }
                </div>
            </div>
        </section>
    }
}

fn typography_card(index: usize, entry: &TypographyEntry) -> Html {
    let family = format!("font-family: {}", entry.font_family);
    html! {
        <div
            key={item_key(index, &entry.id)}
            class="type-card two-columns"
            data-testid={format!("typography-card-{index}")}
        >
            <div>
                <span class="pill">{ entry.kind.to_uppercase() }</span>
                <h3 class="type-family" style={family.clone()}>{ entry.font_family.clone() }</h3>
                <p>{ entry.usage.clone() }</p>
                <div class="weights">
                    {
                        for entry.weights.iter().map(|weight| html! {
                            <span class="weight">{ weight.clone() }</span>
                        })
                    }
                </div>
            </div>
            <div class="specimen" style={family}>
                <div class="specimen-large">{ "Aa" }</div>
                <div>{ "ABCDEFGHIJKLMNOPQRSTUVWXYZ" }</div>
                <div>{ "abcdefghijklmnopqrstuvwxyz" }</div>
                <div>{ "0123456789" }</div>
            </div>
        </div>
    }
}
