use yew::prelude::*;

const PARTNERS: [&str; 5] = [
    "City Relief Fund",
    "Open Logistics Co-op",
    "Volunteer Hub",
    "Aid Bridge",
    "Rapid Response Net",
];

#[function_component(LogoCollection)]
pub fn logo_collection() -> Html {
    html! {
        <div class="py-8 bg-base-100">
            <p class="text-center text-sm text-gray-500 mb-4">{"Working together with"}</p>
            <div class="flex flex-wrap justify-center gap-8 opacity-60">
                {for PARTNERS.iter().map(|partner| html! {
                    <span class="text-lg font-semibold">{partner}</span>
                })}
            </div>
        </div>
    }
}
