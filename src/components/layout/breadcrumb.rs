use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::PageKey;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: PageKey,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &Props) -> Html {
    let items = props.page.breadcrumb();

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().map(|item| {
                    html! {
                        <li>
                            if item.active {
                                <span class="text-primary font-semibold">{&item.label}</span>
                            } else {
                                <Link<Route> to={Route::Dashboard} classes="hover:text-primary">
                                    {&item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
