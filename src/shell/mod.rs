//! Application frame: header, footer, and routing between the list and
//! detail views.
//!
//! - [`route`]: client-side [`Route`]s and path parsing.
//! - [`session`]: line-oriented interactive driver used by `nasaview browse`.

pub mod route;
pub mod session;

pub use route::Route;

use std::sync::Arc;
use std::time::Duration;

use nasaview_core::MediaType;
use tracing::info;

use crate::api::MediaSource;
use crate::config::Config;
use crate::fetch::{AssetFetcher, SearchFetcher};
use crate::views::text::{detail_to_text, list_to_text};
use crate::views::{DetailView, ListState, ListView};

pub const HEADER: &str = "NASA App";
pub const FOOTER: &str = "© 2024 Nasa app";

pub struct Shell {
    searcher: SearchFetcher,
    assets: AssetFetcher,
    settle_delay: Duration,
    route: Route,
    history: Vec<Route>,
    list: ListView,
    detail: Option<DetailView>,
}

impl Shell {
    /// Build a shell on the search page.
    pub fn new(source: Arc<dyn MediaSource>, config: &Config) -> Self {
        Self {
            searcher: SearchFetcher::new(source.clone()),
            assets: AssetFetcher::new(source, config.api.lookup),
            settle_delay: config.view.settle_delay(),
            route: Route::List,
            history: Vec::new(),
            list: ListView::new(),
            detail: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Switch to `route`, mounting its view fresh.
    pub async fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "navigate");
        let previous = std::mem::replace(&mut self.route, route.clone());
        self.history.push(previous);
        self.mount(route).await;
    }

    /// Return to the previous route. `false` when there is nowhere to go.
    pub async fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        info!(from = %self.route, to = %previous, "back");
        self.route = previous.clone();
        self.mount(previous).await;
        true
    }

    async fn mount(&mut self, route: Route) {
        match route {
            Route::List => {
                self.list = ListView::new();
                self.detail = None;
            }
            Route::Asset(id) => {
                let mut view = match self.detail.take() {
                    Some(mut view) if view.id() != id => {
                        view.set_id(id);
                        view
                    }
                    _ => DetailView::new(id),
                };
                view.load(&self.assets).await;
                self.detail = Some(view);
            }
            Route::NotFound(_) => {
                self.detail = None;
            }
        }
    }

    /// Run a search from the list page, navigating there first if needed.
    pub async fn search(&mut self, query: &str) -> ListState {
        if self.route != Route::List {
            self.navigate(Route::List).await;
        }
        self.list.set_query(query);
        let ticket = self.list.search(&self.searcher).await;
        if self.list.state() == ListState::Loaded {
            self.list.settle(ticket, self.settle_delay).await;
        }
        self.list.state()
    }

    /// Toggle a media-type checkbox; `None` outside the list view, where
    /// there are no checkboxes.
    pub fn toggle_media_type(&mut self, media_type: MediaType) -> Option<bool> {
        if self.route != Route::List {
            return None;
        }
        Some(self.list.toggle_media_type(media_type))
    }

    /// Toggle the detail view's metadata panel; `None` outside the detail view.
    pub fn toggle_metadata(&mut self) -> Option<bool> {
        self.detail.as_mut().map(DetailView::toggle_metadata)
    }

    /// Open the `n`th rendered card (zero-based). Cards without an id, or
    /// numbers past the end, leave the shell where it is.
    pub async fn open(&mut self, n: usize) -> bool {
        if self.route != Route::List {
            return false;
        }
        match self.list.select_nth(n) {
            Some(route) => {
                self.navigate(route).await;
                true
            }
            None => false,
        }
    }

    /// Header, active view, and footer as text.
    pub fn render(&self) -> String {
        let body = match (&self.route, &self.detail) {
            (Route::List, _) => {
                let mut body = format!("Search: {:?}", self.list.query());
                let checked: Vec<_> = self.list.media_types().iter().map(|t| t.label()).collect();
                if !checked.is_empty() {
                    body.push_str(&format!(" [{}]", checked.join(", ")));
                }
                body.push('\n');
                body.push_str(&list_to_text(&self.list.render()));
                body
            }
            (Route::Asset(_), Some(view)) => detail_to_text(&view.render()),
            (Route::Asset(id), None) => format!("Loading {id}...\n"),
            (Route::NotFound(path), _) => format!("Nothing here: {path}\n"),
        };

        format!("{HEADER}\n{}\n{body}{}\n{FOOTER}\n", "=".repeat(HEADER.len()), "-".repeat(FOOTER.chars().count()))
    }
}
