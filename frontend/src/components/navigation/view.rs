use yew::prelude::*;
use yew_router::prelude::*;

use super::{active_index, MenuAction, MenuState, NAV_ITEMS};
use crate::icons::Icon;
use crate::routes::Route;

pub enum Msg {
    Toggle,
    Select,
    LocationChanged,
}

pub struct Navigation {
    menu: MenuState,
    _location: Option<LocationHandle>,
}

impl Component for Navigation {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let location = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));
        Self {
            menu: MenuState::default(),
            _location: location,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => self.menu.apply(MenuAction::Toggle),
            Msg::Select => self.menu.apply(MenuAction::Select),
            Msg::LocationChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let path = ctx
            .link()
            .location()
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        let active = active_index(&path);
        let on_select = ctx.link().callback(|()| Msg::Select);
        let open = self.menu.open;

        let links = |prefix: &'static str| -> Html {
            html! {
                <>
                    {
                        for NAV_ITEMS.iter().enumerate().map(|(index, (route, label))| html! {
                            <NavLink
                                route={*route}
                                label={*label}
                                testid={format!("{prefix}-{}", label.to_lowercase())}
                                active={active == Some(index)}
                                on_select={on_select.clone()}
                            />
                        })
                    }
                </>
            }
        };

        html! {
            <nav class="navbar">
                <div class="container navbar-inner">
                    <NavLink
                        route={Route::Home}
                        label="Vintage Brew Rebrand"
                        testid="logo-link"
                        class="logo"
                        on_select={on_select.clone()}
                    />
                    <div class="nav-links">{ links("nav-link") }</div>
                    <button
                        class="menu-toggle"
                        data-testid="menu-toggle"
                        aria-expanded={open.to_string()}
                        onclick={ctx.link().callback(|_: MouseEvent| Msg::Toggle)}
                    >
                        { if open { Icon::Close.view() } else { Icon::Menu.view() } }
                    </button>
                </div>
                if open {
                    <div class="mobile-menu" data-testid="mobile-menu">{ links("mobile-link") }</div>
                }
            </nav>
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    route: Route,
    label: AttrValue,
    testid: AttrValue,
    #[prop_or_default]
    active: bool,
    #[prop_or("nav-link")]
    class: &'static str,
    on_select: Callback<()>,
}

/// An anchor that navigates in-app and reports the selection. `Link` does not
/// forward arbitrary attributes, and the active item needs `aria-current`.
struct NavLink;

impl Component for NavLink {
    type Message = ();
    type Properties = NavLinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let navigator = ctx.link().navigator();
        let onclick = {
            let route = props.route;
            let on_select = props.on_select.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
                on_select.emit(());
            })
        };

        html! {
            <a
                href={props.route.to_path()}
                class={classes!(props.class, props.active.then_some("active"))}
                data-testid={props.testid.clone()}
                aria-current={props.active.then_some(AttrValue::Static("page"))}
                {onclick}
            >
                { props.label.clone() }
            </a>
        }
    }
}
