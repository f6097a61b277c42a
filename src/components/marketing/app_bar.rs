use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(AppBar)]
pub fn app_bar() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-50">
            <div class="flex-1">
                <a class="btn btn-ghost text-xl" href="/">
                    <i class="fas fa-hand-holding-heart text-primary"></i>
                    {"ReliefNet"}
                </a>
            </div>
            <div class="flex-none hidden md:block">
                <ul class="menu menu-horizontal px-1">
                    <li><a href="#features">{"Features"}</a></li>
                    <li><a href="#highlights">{"Highlights"}</a></li>
                    <li><a href="#coverage">{"Coverage"}</a></li>
                    <li><a href="#faq">{"FAQ"}</a></li>
                </ul>
            </div>
            <div class="flex-none">
                <Link<Route> to={Route::SignIn} classes="btn btn-primary btn-sm">
                    {"Sign in"}
                </Link<Route>>
            </div>
        </div>
    }
}
