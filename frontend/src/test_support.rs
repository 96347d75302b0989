//! Server-side rendering harness for page tests.
//!
//! Pages are rendered to an HTML string with `yew::ServerRenderer` inside a
//! router backed by `MemoryHistory`, so `Link`s and the navigation shell work
//! without a browser. Effects never run during server rendering: no request is
//! issued and the content passed in is exactly what gets rendered.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use common::content::Collection;
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use serde_json::Value;
use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use crate::app::Shell;
use crate::client::{ContentFetchFailed, ContentSource};
use crate::components::data_bound::{MountGuard, PageContent};

/// In-memory `ContentSource` answering from canned JSON.
///
/// Collections without an answer fail like a `404`. Clones share the report
/// log, so a test keeps one clone and hands the other to `load`.
#[derive(Clone, Default)]
pub struct StubSource {
    answers: HashMap<Collection, Result<Value, String>>,
    reports: Rc<RefCell<Vec<ContentFetchFailed>>>,
    guard: Option<MountGuard>,
    release_on_fetch: bool,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serving(mut self, collection: Collection, body: Value) -> Self {
        self.answers.insert(collection, Ok(body));
        self
    }

    pub fn failing(mut self, collection: Collection, reason: &str) -> Self {
        self.answers.insert(collection, Err(reason.to_string()));
        self
    }

    /// Cancelled once `guard` is released.
    pub fn bound_to(mut self, guard: MountGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Releases the bound guard as soon as a request goes out, like a page
    /// unmounted while its requests are in flight.
    pub fn releasing_on_fetch(mut self) -> Self {
        self.release_on_fetch = true;
        self
    }

    pub fn reports(&self) -> Vec<ContentFetchFailed> {
        self.reports.borrow().clone()
    }
}

impl ContentSource for StubSource {
    fn fetch<T: DeserializeOwned + 'static>(
        &self,
        collection: Collection,
    ) -> LocalBoxFuture<'_, Result<T, ContentFetchFailed>> {
        if self.release_on_fetch {
            if let Some(guard) = &self.guard {
                guard.release();
            }
        }
        let fail = |reason: String| ContentFetchFailed { collection, reason };
        let answer = match self.answers.get(&collection) {
            Some(Ok(body)) => serde_json::from_value(body.clone()).map_err(|e| fail(e.to_string())),
            Some(Err(reason)) => Err(fail(reason.clone())),
            None => Err(fail("HTTP 404 Not Found".to_string())),
        };
        ready(answer).boxed_local()
    }

    fn is_cancelled(&self) -> bool {
        self.guard.as_ref().is_some_and(|guard| !guard.is_live())
    }

    fn report(&self, failure: &ContentFetchFailed) {
        self.reports.borrow_mut().push(failure.clone());
    }
}

#[derive(Properties, PartialEq)]
struct PageHarnessProps<P: PageContent> {
    content: P,
    settled: bool,
}

struct PageHarness<P: PageContent> {
    history: AnyHistory,
    _page: std::marker::PhantomData<P>,
}

impl<P: PageContent> Component for PageHarness<P> {
    type Message = ();
    type Properties = PageHarnessProps<P>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            history: AnyHistory::from(MemoryHistory::new()),
            _page: std::marker::PhantomData,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <Router history={self.history.clone()}>
                { props.content.view(props.settled) }
            </Router>
        }
    }
}

#[derive(Properties, PartialEq)]
struct ShellHarnessProps {
    path: String,
}

struct ShellHarness {
    history: AnyHistory,
}

impl Component for ShellHarness {
    type Message = ();
    type Properties = ShellHarnessProps;

    fn create(ctx: &Context<Self>) -> Self {
        let entries = vec![ctx.props().path.clone()];
        Self {
            history: AnyHistory::from(MemoryHistory::with_entries(entries)),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Router history={self.history.clone()}>
                <Shell />
            </Router>
        }
    }
}

/// Renders the body of page `P` for `content`.
pub async fn render_page<P: PageContent + Send>(content: P, settled: bool) -> String {
    ServerRenderer::<PageHarness<P>>::with_props(move || PageHarnessProps { content, settled })
        .hydratable(false)
        .render()
        .await
}

/// Renders the whole app shell (navigation + routed page) at `path`.
pub async fn render_shell(path: &str) -> String {
    let path = path.to_string();
    ServerRenderer::<ShellHarness>::with_props(move || ShellHarnessProps { path })
        .hydratable(false)
        .render()
        .await
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Text directly inside the element carrying `data-testid="<testid>"`, up to
/// its first child tag.
pub fn text_of(html: &str, testid: &str) -> Option<String> {
    let marker = format!("data-testid=\"{testid}\"");
    let start = html.find(&marker)? + marker.len();
    let rest = &html[start..];
    let open = rest.find('>')? + 1;
    let len = rest[open..].find('<')?;
    Some(rest[open..open + len].to_string())
}

#[test]
fn stub_fails_unanswered_collections() {
    let source = StubSource::new().serving(Collection::Typography, serde_json::json!([]));
    let fetched = source
        .fetch::<Vec<common::model::TypographyEntry>>(Collection::BrandColors)
        .now_or_never();
    assert_eq!(
        fetched,
        Some(Err(ContentFetchFailed {
            collection: Collection::BrandColors,
            reason: "HTTP 404 Not Found".to_string(),
        }))
    );
}

#[test]
fn text_of_reads_the_first_text_run() {
    let html = r#"<div data-testid="a" class="x">18%<span>b</span></div><p data-testid="b"></p>"#;
    assert_eq!(text_of(html, "a").as_deref(), Some("18%"));
    assert_eq!(text_of(html, "b").as_deref(), Some(""));
    assert_eq!(text_of(html, "c"), None);
}
