use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-3xl mb-6">{"About ReliefNet"}</h2>

                <div class="prose max-w-none">
                    <p class="text-lg mb-4">
                        {"ReliefNet is an emergency aid and needs coordination network \
                          connecting volunteers, collection points and affected regions."}
                    </p>

                    <h3 class="text-xl font-semibold mb-3">{"What it does"}</h3>
                    <ul class="list-disc list-inside space-y-2 mb-6">
                        <li>{"Volunteer registration and coordination"}</li>
                        <li>{"Aid shipment tracking from collection to delivery"}</li>
                        <li>{"Coverage across major cities with local collection points"}</li>
                        <li>{"Campaign announcements and notifications"}</li>
                    </ul>

                    <h3 class="text-xl font-semibold mb-3">{"Technology Stack"}</h3>
                    <div class="flex flex-wrap gap-2">
                        <div class="badge badge-primary badge-lg">{"Rust"}</div>
                        <div class="badge badge-secondary badge-lg">{"Yew Framework"}</div>
                        <div class="badge badge-accent badge-lg">{"WebAssembly"}</div>
                        <div class="badge badge-neutral badge-lg">{"Tailwind CSS"}</div>
                        <div class="badge badge-info badge-lg">{"Daisy UI"}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
