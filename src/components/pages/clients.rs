use yew::prelude::*;

#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center gap-3 mb-2">
                    <i class="fas fa-handshake text-primary text-2xl"></i>
                    <h2 class="card-title text-2xl">{"Clients"}</h2>
                </div>
                <p class="text-gray-500">
                    {"Client management placeholder. Partner organizations and aid \
                      recipients will be managed here."}
                </p>
            </div>
        </div>
    }
}
