use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Authentication placeholder: the form performs no credential check
/// and simply forwards to the dashboard.
#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let navigator = use_navigator().expect("SignIn rendered outside a router");

    let on_submit = {
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            log::debug!("Sign-in submitted, entering dashboard");
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content">
                <div class="card bg-base-100 shadow-xl w-96">
                    <div class="card-body">
                        <h2 class="card-title text-2xl justify-center mb-4">
                            <i class="fas fa-hand-holding-heart text-primary"></i>
                            {"Sign in"}
                        </h2>
                        <form onsubmit={on_submit}>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email"}</span></label>
                                <input type="email" placeholder="you@example.com" class="input input-bordered" required={true} />
                            </div>
                            <div class="form-control mt-2">
                                <label class="label"><span class="label-text">{"Password"}</span></label>
                                <input type="password" placeholder="••••••••" class="input input-bordered" required={true} />
                            </div>
                            <div class="form-control mt-6">
                                <button type="submit" class="btn btn-primary">{"Sign in"}</button>
                            </div>
                        </form>
                        <p class="text-center text-sm text-gray-500 mt-2">
                            <Link<Route> to={Route::Marketing} classes="link link-hover">
                                {"Back to the site"}
                            </Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
