use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::PageKey;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: PageKey,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="dashboard-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ props.page.label() }</h1>
            </div>
            <div class="flex-none gap-2">
                <Link<Route> to={Route::for_page(PageKey::Notifications)} classes="btn btn-ghost btn-circle">
                    <i class="fas fa-bell text-xl"></i>
                </Link<Route>>
                <Link<Route> to={Route::for_page(PageKey::Profile)} classes="btn btn-ghost btn-circle">
                    <i class="fas fa-user-circle text-xl"></i>
                </Link<Route>>
            </div>
        </div>
    }
}
