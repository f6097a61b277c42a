use yew::prelude::*;

#[function_component(Tasks)]
pub fn tasks() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center gap-3 mb-2">
                    <i class="fas fa-list-check text-primary text-2xl"></i>
                    <h2 class="card-title text-2xl">{"Tasks"}</h2>
                </div>
                <p class="text-gray-500">
                    {"Task management placeholder. Collection, transport and \
                      distribution assignments will be tracked here."}
                </p>
            </div>
        </div>
    }
}
