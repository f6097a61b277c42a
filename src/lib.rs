use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
pub mod common;
pub mod hooks;
pub mod pages;
pub mod settings;

use common::toast::ToastProvider;
use components::layout::layout::Layout;
use components::marketing::MarketingPage;
use components::sign_in::SignIn;
use pages::{PageKey, Resolved};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Marketing,
    #[at("/sign-in")]
    SignIn,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/:page")]
    DashboardPage { page: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route addressing a given dashboard page.
    pub fn for_page(key: PageKey) -> Route {
        match key {
            PageKey::Home => Route::Dashboard,
            other => Route::DashboardPage {
                page: other.as_key().to_string(),
            },
        }
    }
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Marketing => {
            log::trace!("Rendering marketing page");
            html! { <MarketingPage /> }
        }
        Route::SignIn => {
            log::trace!("Rendering sign-in page");
            html! { <SignIn /> }
        }
        Route::Dashboard => html! { <DashboardShell page={PageKey::Home} /> },
        Route::DashboardPage { page } => match pages::resolve(&page) {
            Resolved::Found(key) => html! { <DashboardShell page={key} /> },
            // Unknown page segments redirect instead of silently aliasing,
            // so the address bar never lies about what is shown.
            Resolved::Defaulted(_) => {
                log::warn!("Unknown dashboard page '{}', redirecting to home", page);
                html! { <Redirect<Route> to={Route::Dashboard} /> }
            }
        },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="hero min-h-screen bg-base-200">
                    <div class="hero-content text-center">
                        <div>
                            <h1 class="text-5xl font-bold">{"404"}</h1>
                            <p class="py-6">{"The page you are looking for does not exist."}</p>
                            <Link<Route> to={Route::Marketing} classes="btn btn-primary">{"Back to start"}</Link<Route>>
                        </div>
                    </div>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct DashboardShellProps {
    page: PageKey,
}

#[function_component(DashboardShell)]
fn dashboard_shell(props: &DashboardShellProps) -> Html {
    html! {
        <Layout page={props.page}>
            { props.page.render() }
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== ReliefNet Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
