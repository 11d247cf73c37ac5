//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Patch table with typed live updates.
    #[at("/")]
    Panel,
    /// Standalone dispatcher sending raw values per address.
    #[at("/dispatcher")]
    Dispatcher,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
