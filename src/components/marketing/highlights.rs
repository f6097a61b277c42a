use yew::prelude::*;

const HIGHLIGHTS: [(&str, &str); 4] = [
    (
        "Fast response",
        "Campaigns go from announcement to first shipment within hours, not days.",
    ),
    (
        "Transparent",
        "Every shipment's status is visible to the volunteers who handled it.",
    ),
    (
        "Community driven",
        "Local coordinators decide where the need is greatest in their region.",
    ),
    (
        "Always on",
        "The network keeps operating during outages thanks to regional autonomy.",
    ),
];

#[function_component(Highlights)]
pub fn highlights() -> Html {
    html! {
        <section id="highlights" class="py-16 bg-base-200">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{"Highlights"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {for HIGHLIGHTS.iter().map(|(title, text)| html! {
                        <div class="card bg-base-100 shadow-sm">
                            <div class="card-body">
                                <h3 class="card-title text-lg">
                                    <i class="fas fa-star text-warning"></i>
                                    {*title}
                                </h3>
                                <p class="text-gray-500">{*text}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
