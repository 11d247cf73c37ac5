//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DispatcherPage, NotFoundPage, PanelPage};
use crate::routes::Route;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Panel => html! { <PanelPage /> },
        Route::Dispatcher => html! { <DispatcherPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
