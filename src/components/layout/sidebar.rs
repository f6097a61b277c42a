use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::PageKey;
use crate::Route;

const CONTACT_FORM_URL: &str = "https://forms.gle/SqSKAGdtF6CoU1Jd8";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: PageKey,
}

fn menu_entry(current: PageKey, key: PageKey) -> Html {
    let classes = if current == key {
        classes!("nav-link", "active")
    } else {
        classes!("nav-link")
    };

    html! {
        <li>
            <Link<Route> to={Route::for_page(key)} {classes}>
                <i class={classes!(key.icon(), "w-5")}></i> { key.label() }
            </Link<Route>>
        </li>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let current = props.page;

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="dashboard-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-hand-holding-heart"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"ReliefNet"}</span>
                    </div>
                </li>

                { menu_entry(current, PageKey::Home) }
                { menu_entry(current, PageKey::Analytics) }

                <li class="menu-title mt-2">{"Coordination"}</li>
                { menu_entry(current, PageKey::Volunteers) }
                { menu_entry(current, PageKey::Clients) }
                { menu_entry(current, PageKey::Tasks) }

                <li class="menu-title mt-2">{"Account"}</li>
                { menu_entry(current, PageKey::Profile) }
                { menu_entry(current, PageKey::Notifications) }
                { menu_entry(current, PageKey::Settings) }

                <div class="divider"></div>

                { menu_entry(current, PageKey::About) }
                { menu_entry(current, PageKey::Feedback) }
                <li>
                    <a class="nav-link" href={CONTACT_FORM_URL} target="_blank" rel="noopener">
                        <i class="fas fa-envelope w-5"></i> {"Contact"}
                    </a>
                </li>
            </ul>
        </div>
    }
}
