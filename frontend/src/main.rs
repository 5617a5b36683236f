use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod disclosure;
mod dom;
mod hooks;
mod navigation;
mod reveal;
mod theme;
mod components {
    pub mod footer;
    pub mod form_embed;
    pub mod navbar;
    pub mod packages;
    pub mod reveal_on_scroll;
    pub mod video_embed;
}
mod pages {
    pub mod companies;
    pub mod home;
    pub mod individual_services;
}

use components::{footer::Footer, navbar::Navbar};
use hooks::NavHandle;
use navigation::{NavMsg, NavigationState, Page};
use pages::{companies::Companies, home::Home, individual_services::IndividualServices};
use theme::Theme;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/companies")]
    Companies,
    #[at("/individual-services")]
    IndividualServices,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Unknown paths fall back to the home page.
    pub fn page(&self) -> Page {
        match self {
            Route::Home | Route::NotFound => Page::Home,
            Route::Companies => Page::Companies,
            Route::IndividualServices => Page::IndividualServices,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::Companies => Route::Companies,
            Page::IndividualServices => Route::IndividualServices,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Companies => {
            info!("Rendering Companies page");
            html! { <Companies /> }
        }
        Route::IndividualServices => {
            info!("Rendering Individual Services page");
            html! { <IndividualServices /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

/// Owns the navigation state and keeps it in step with the router.
#[function_component(Shell)]
fn shell() -> Html {
    let page = use_route::<Route>().unwrap_or(Route::Home).page();
    let state = use_reducer(move || NavigationState::new(page));
    let navigator = use_navigator();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |page| {
                state.dispatch(NavMsg::Arrived(*page));
                || ()
            },
            page,
        );
    }

    let switch_page = use_callback(
        move |page: Page, navigator| match navigator {
            Some(navigator) => navigator.push(&Route::from(page)),
            None => warn!("no router available to open {}", page),
        },
        navigator,
    );

    let nav = NavHandle { state, switch_page };

    html! {
        <ContextProvider<NavHandle> context={nav}>
            <Theme />
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </ContextProvider<NavHandle>>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_matching_route() {
        for page in Page::ALL {
            let route = Route::from(page);
            assert_eq!(route.to_path(), page.path());
            assert_eq!(route.page(), page);
        }
    }

    #[test]
    fn unknown_paths_render_home() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.page(), Page::Home);
    }
}
