use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold">{"Aid, coordinated."}</h1>
                    <p class="py-6 text-lg">
                        {"ReliefNet connects volunteers, collection points and affected \
                          regions so that emergency aid is distributed faster, fairer \
                          and with less waste."}
                    </p>
                    <div class="flex gap-4 justify-center">
                        <Link<Route> to={Route::SignIn} classes="btn btn-primary">
                            {"Join as a volunteer"}
                        </Link<Route>>
                        <a class="btn btn-outline" href="#features">{"Learn more"}</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
