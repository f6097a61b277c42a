use yew::prelude::*;

const ENTRIES: [(&str, &str); 4] = [
    (
        "How do I become a volunteer?",
        "Sign in, complete your profile and a regional coordinator will contact \
         you with available tasks near your city.",
    ),
    (
        "Where can I drop off donations?",
        "The coverage map lists every active collection point. Pick the city \
         closest to you to see directions.",
    ),
    (
        "Who receives the aid?",
        "Needs are reported by local coordinators in affected regions; shipments \
         are routed to the reported need, never to a general pool.",
    ),
    (
        "Is my personal data shared?",
        "No. Contact details are visible only to the coordinator assigning your \
         tasks and are never published.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    // Index of the open accordion entry; purely local UI state
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="py-16 bg-base-100">
            <div class="container mx-auto px-4 max-w-3xl">
                <h2 class="text-3xl font-bold text-center mb-12">{"Frequently Asked Questions"}</h2>
                <div class="flex flex-col gap-2">
                    {for ENTRIES.iter().enumerate().map(|(idx, (question, answer))| {
                        let is_open = *open == Some(idx);
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_| {
                                open.set(if is_open { None } else { Some(idx) });
                            })
                        };

                        html! {
                            <div class="collapse collapse-arrow bg-base-200">
                                <input
                                    type="checkbox"
                                    checked={is_open}
                                    onchange={on_toggle}
                                />
                                <div class="collapse-title font-semibold">{*question}</div>
                                <div class="collapse-content text-gray-500">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
