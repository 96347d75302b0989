//! The data-bound page: one component driving every page's fetch-and-render
//! cycle.
//!
//! A page describes itself through `PageContent`: the collections it reads,
//! how to load them and how to render the loaded value. `DataBound<P>` owns
//! the lifecycle:
//!
//! - On mount it issues the page's requests exactly once. Revisiting the route
//!   mounts a fresh instance and fetches again.
//! - Until the load settles the page renders `P::default()` with
//!   `settled = false`. Only Home shows a loading view for that state.
//! - When it settles the loaded value replaces it. A failed collection is
//!   already its empty default at this point, so the section renders empty.
//! - On unmount the `MountGuard` aborts outstanding requests and any late
//!   result is discarded.
//!
//! Pages without collections never fetch and render settled from the start.

mod guard;

pub use guard::MountGuard;

use common::content::Collection;
use futures_util::future::LocalBoxFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::client::{ContentClient, ContentSource};

pub trait PageContent: Clone + Default + PartialEq + 'static {
    /// Page identifier, exposed as `data-testid="page-<ID>"` on the wrapper.
    const ID: &'static str;

    /// Collections read by the page, in request order. Empty for static pages.
    const COLLECTIONS: &'static [Collection];

    /// Requests every collection, concurrently where there is more than one,
    /// and resolves once all have settled.
    fn load<S: ContentSource>(source: S) -> LocalBoxFuture<'static, Self>;

    /// Renders the page body. A pure function of `self` and `settled`.
    fn view(&self, settled: bool) -> Html;
}

/// Loads `P` from `source` and hands it back only if `guard` is still live.
pub async fn load_while_mounted<P: PageContent, S: ContentSource>(
    source: S,
    guard: MountGuard,
) -> Option<P> {
    let loaded = P::load(source).await;
    guard.is_live().then_some(loaded)
}

pub enum Msg<P> {
    Loaded(P),
}

pub struct DataBound<P: PageContent> {
    /// `None` until the load settles.
    content: Option<P>,
    guard: Option<MountGuard>,
}

impl<P: PageContent> Component for DataBound<P> {
    type Message = Msg<P>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            content: P::COLLECTIONS.is_empty().then(P::default),
            guard: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(content) => {
                self.content = Some(content);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.content {
            Some(loaded) => loaded.view(true),
            None => P::default().view(false),
        };

        html! {
            <PageFrame id={P::ID}>{ body }</PageFrame>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.content.is_none() {
            let guard = MountGuard::new(AbortController::new().ok());
            let client = ContentClient::from_env().bound_to(guard.signal());
            let link = ctx.link().clone();
            let live = guard.clone();
            self.guard = Some(guard);

            spawn_local(async move {
                if let Some(loaded) = load_while_mounted::<P, _>(client, live).await {
                    link.send_message(Msg::Loaded(loaded));
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Outer wrapper shared by every routed page.
pub struct PageFrame;

impl Component for PageFrame {
    type Message = ();
    type Properties = PageFrameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="page" data-testid={format!("page-{}", props.id)}>
                { props.children.clone() }
            </div>
        }
    }
}
