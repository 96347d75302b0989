//! Layout pieces repeated across pages: the hero banner, section headings,
//! static card grids and bullet lists.

use yew::prelude::*;

use crate::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Small pill above the title.
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Subtitle paragraph.
    #[prop_or_default]
    pub children: Html,
}

pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = HeroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <section class="section hero gradient-subtle">
                <div class="container narrow center fade-in">
                    <span class="eyebrow">{ props.eyebrow.clone() }</span>
                    <h1 class="section-title">{ props.title.clone() }</h1>
                    <p class="section-subtitle">{ props.children.clone() }</p>
                </div>
            </section>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Icon>,
}

pub struct SectionHeading;

impl Component for SectionHeading {
    type Message = ();
    type Properties = SectionHeadingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="section-heading center">
                {
                    match props.icon {
                        Some(icon) => icon.view_with_class("heading-icon"),
                        None => html! {},
                    }
                }
                <h2 class="heading">{ props.title.clone() }</h2>
                {
                    match &props.subtitle {
                        Some(subtitle) => html! { <p class="section-subtitle">{ subtitle.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

/// A static card: optional mark (emoji, step number), title and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub testid: &'static str,
    /// Shown above the title when non-empty.
    pub mark: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub fn card_grid(class: &'static str, cards: &[Card]) -> Html {
    html! {
        <div class={classes!("card-grid", class)}>
            { for cards.iter().map(card) }
        </div>
    }
}

fn card(card: &Card) -> Html {
    html! {
        <div class="card" data-testid={card.testid}>
            {
                if card.mark.is_empty() {
                    html! {}
                } else {
                    html! { <div class="card-mark">{ card.mark }</div> }
                }
            }
            <h3>{ card.title }</h3>
            <p>{ card.body }</p>
        </div>
    }
}

/// A list whose items are prefixed with `marker` (`×`, `✓`, `•`).
pub fn marked_list(marker: &'static str, items: &[&'static str]) -> Html {
    html! {
        <ul class="marked-list">
            {
                for items.iter().map(|item| html! {
                    <li>
                        <span class="marker">{ marker }</span>
                        <span>{ *item }</span>
                    </li>
                })
            }
        </ul>
    }
}

/// A list of `(term, rest)` pairs rendered as a bold term followed by text.
pub fn term_list(marker: &'static str, items: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul class="marked-list">
            {
                for items.iter().map(|(term, rest)| html! {
                    <li>
                        <span class="marker">{ marker }</span>
                        <span><strong>{ *term }</strong>{ *rest }</span>
                    </li>
                })
            }
        </ul>
    }
}
