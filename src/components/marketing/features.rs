use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-route",
        title: "Smart logistics",
        description: "Shipments are tracked from the collection point to the \
                      delivery region, with every handover recorded.",
    },
    Feature {
        icon: "fas fa-people-group",
        title: "Volunteer coordination",
        description: "Volunteers register once and get matched to collection, \
                      transport and distribution tasks near them.",
    },
    Feature {
        icon: "fas fa-shield-halved",
        title: "Secure data handling",
        description: "Personal data of volunteers and recipients stays private \
                      and is only shared with coordinators who need it.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="py-16 bg-base-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{"Features"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {for FEATURES.iter().map(|feature| html! {
                        <div class="card bg-base-200">
                            <div class="card-body items-center text-center">
                                <i class={classes!(feature.icon, "text-4xl", "text-primary", "mb-2")}></i>
                                <h3 class="card-title">{feature.title}</h3>
                                <p class="text-gray-500">{feature.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
