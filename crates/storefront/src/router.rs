//! Fragment-based client-side routing.
//!
//! The router maps the location fragment (`#/product/42`) to a registered
//! handler. Resolution order:
//!
//! 1. A route whose pattern equals the path exactly.
//! 2. The first route, in registration order, whose pattern contains a `:`
//!    and matches segment by segment (see [`parse_params`]).
//! 3. The route registered under [`NOT_FOUND_ROUTE`].
//! 4. Otherwise the miss is logged and the router navigates to `/`.
//!
//! Navigation only changes the fragment and queues a change notification.
//! Handlers run when the event loop calls [`Router::dispatch_pending`], never
//! from inside [`Router::navigate`].

use std::collections::BTreeMap;

/// Sentinel route invoked when nothing else matches.
pub const NOT_FOUND_ROUTE: &str = "404";

/// The root path, used for an empty fragment and as the fallback target.
pub const ROOT_PATH: &str = "/";

/// Parameters bound from `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// The raw (undecoded) value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether no parameters were bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RouteParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

/// Match `path` against `pattern`, binding `:name` segments.
///
/// Both are split on `/`; the segment counts must be equal, literal segments
/// must match exactly and `:name` segments bind the path segment verbatim.
///
/// ```
/// use floralink_storefront::router::parse_params;
///
/// let params = parse_params("/category/:category", "/category/Romantic").unwrap();
/// assert_eq!(params.get("category"), Some("Romantic"));
/// assert!(parse_params("/category/:category", "/category/a/b").is_none());
/// ```
#[must_use]
pub fn parse_params(pattern: &str, path: &str) -> Option<RouteParams> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in pattern_parts.into_iter().zip(path_parts) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_owned(), actual.to_owned());
        } else if expected != actual {
            return None;
        }
    }

    Some(RouteParams(params))
}

/// What a handler sees while it runs.
#[derive(Debug)]
pub struct RouteContext<'r> {
    path: &'r str,
    params: &'r RouteParams,
    state: RouterState,
    redirect: Option<String>,
}

impl RouteContext<'_> {
    /// The path being dispatched.
    #[must_use]
    pub const fn path(&self) -> &str {
        self.path
    }

    /// Bound parameters (empty for exact and not-found routes).
    #[must_use]
    pub const fn params(&self) -> &RouteParams {
        self.params
    }

    /// State of the router running this handler.
    #[must_use]
    pub const fn state(&self) -> RouterState {
        self.state
    }

    /// Shorthand for `params().get(name)`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Navigate once this handler returns.
    ///
    /// Like any navigation, this only queues a fragment change.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.redirect = Some(path.into());
    }
}

/// Whether the router is waiting for a navigation or running a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterState {
    #[default]
    Idle,
    Dispatching,
}

type Handler<'h> = Box<dyn FnMut(&mut RouteContext<'_>) + 'h>;

struct Route<'h> {
    pattern: String,
    handler: Handler<'h>,
}

impl Route<'_> {
    fn has_params(&self) -> bool {
        self.pattern.contains(':')
    }
}

/// How a path resolved.
enum Resolution {
    Exact(usize),
    Pattern(usize, RouteParams),
    NotFound(usize),
    Unmatched,
}

/// Fragment router.
pub struct Router<'h> {
    routes: Vec<Route<'h>>,
    fragment: String,
    pending_changes: usize,
    current_route: Option<String>,
    state: RouterState,
}

impl Default for Router<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> Router<'h> {
    /// A router with no routes and an empty fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            routes: Vec::new(),
            fragment: String::new(),
            pending_changes: 0,
            current_route: None,
            state: RouterState::Idle,
        }
    }

    /// A router whose location starts at `fragment` (with or without `#`).
    #[must_use]
    pub fn with_fragment(fragment: &str) -> Self {
        let mut router = Self::new();
        fragment.trim_start_matches('#').clone_into(&mut router.fragment);
        router
    }

    /// Register `handler` for `pattern`.
    ///
    /// Registering the same pattern again replaces the handler but keeps the
    /// original position in the matching order.
    pub fn add_route(&mut self, pattern: &str, handler: impl FnMut(&mut RouteContext<'_>) + 'h) {
        let handler: Handler<'h> = Box::new(handler);
        if let Some(route) = self.routes.iter_mut().find(|r| r.pattern == pattern) {
            route.handler = handler;
        } else {
            self.routes.push(Route {
                pattern: pattern.to_owned(),
                handler,
            });
        }
    }

    /// Current fragment without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The path to resolve: the fragment, or `/` if it is empty.
    #[must_use]
    pub fn current_path(&self) -> &str {
        if self.fragment.is_empty() {
            ROOT_PATH
        } else {
            &self.fragment
        }
    }

    /// The path most recently dispatched.
    #[must_use]
    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    /// Whether a handler is running.
    #[must_use]
    pub const fn state(&self) -> RouterState {
        self.state
    }

    /// Number of fragment changes waiting to be dispatched.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending_changes
    }

    /// Change the fragment, as a link click or address-bar edit would.
    ///
    /// Queues a change notification only if the fragment actually changed.
    pub fn set_fragment(&mut self, fragment: &str) {
        let fragment = fragment.trim_start_matches('#');
        if fragment == self.fragment {
            return;
        }
        fragment.clone_into(&mut self.fragment);
        self.pending_changes += 1;
    }

    /// Navigate to `path`. The handler runs on the next
    /// [`dispatch_pending`](Self::dispatch_pending).
    pub fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "Navigate");
        self.set_fragment(path);
    }

    /// Dispatch the current fragment once (initial page load).
    pub fn init(&mut self) {
        self.handle_route();
    }

    /// Deliver queued change notifications, including any queued by the
    /// handlers themselves. Returns the number of dispatches.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut dispatched = 0;
        while self.pending_changes > 0 {
            self.pending_changes -= 1;
            self.handle_route();
            dispatched += 1;
        }
        dispatched
    }

    /// Which pattern `path` resolves to and the bound parameters.
    ///
    /// Returns `None` if neither a route nor the not-found route matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&str, RouteParams)> {
        match self.resolution(path) {
            Resolution::Exact(i) | Resolution::NotFound(i) => self
                .routes
                .get(i)
                .map(|r| (r.pattern.as_str(), RouteParams::default())),
            Resolution::Pattern(i, params) => {
                self.routes.get(i).map(|r| (r.pattern.as_str(), params))
            }
            Resolution::Unmatched => None,
        }
    }

    fn resolution(&self, path: &str) -> Resolution {
        if let Some(i) = self.routes.iter().position(|r| r.pattern == path) {
            return Resolution::Exact(i);
        }

        for (i, route) in self.routes.iter().enumerate() {
            if route.has_params()
                && let Some(params) = parse_params(&route.pattern, path)
            {
                return Resolution::Pattern(i, params);
            }
        }

        match self
            .routes
            .iter()
            .position(|r| r.pattern == NOT_FOUND_ROUTE)
        {
            Some(i) => Resolution::NotFound(i),
            None => Resolution::Unmatched,
        }
    }

    fn handle_route(&mut self) {
        let path = self.current_path().to_owned();
        self.current_route = Some(path.clone());

        let (index, params) = match self.resolution(&path) {
            Resolution::Exact(i) | Resolution::NotFound(i) => (i, RouteParams::default()),
            Resolution::Pattern(i, params) => (i, params),
            Resolution::Unmatched => {
                tracing::error!(path = %path, "Route not found");
                self.navigate(ROOT_PATH);
                return;
            }
        };

        let Some(route) = self.routes.get_mut(index) else {
            return;
        };

        self.state = RouterState::Dispatching;
        tracing::debug!(path = %path, pattern = %route.pattern, "Dispatching route");
        let mut ctx = RouteContext {
            path: &path,
            params: &params,
            state: self.state,
            redirect: None,
        };
        (route.handler)(&mut ctx);
        let redirect = ctx.redirect;
        self.state = RouterState::Idle;

        if let Some(target) = redirect {
            self.navigate(&target);
        }
    }
}

impl std::fmt::Debug for Router<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self.routes.iter().map(|r| r.pattern.as_str()).collect::<Vec<_>>(),
            )
            .field("fragment", &self.fragment)
            .field("pending_changes", &self.pending_changes)
            .field("state", &self.state)
            .finish()
    }
}
