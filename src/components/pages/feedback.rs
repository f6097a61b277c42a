use yew::prelude::*;

const SURVEY_URL: &str = "https://forms.gle/SqSKAGdtF6CoU1Jd8";
const ISSUES_URL: &str = "https://github.com/reliefnet/reliefnet/issues";

#[function_component(Feedback)]
pub fn feedback() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center gap-3 mb-2">
                    <i class="fas fa-comment-dots text-primary text-2xl"></i>
                    <h2 class="card-title text-2xl">{"Feedback"}</h2>
                </div>
                <p class="text-gray-500 mb-4">
                    {"Tell us what works and what does not. Your feedback shapes how \
                      the coordination network evolves."}
                </p>
                <div class="flex flex-wrap gap-4">
                    <a class="btn btn-primary" href={SURVEY_URL} target="_blank" rel="noopener">
                        <i class="fas fa-clipboard-list"></i> {"Fill out the survey"}
                    </a>
                    <a class="btn btn-outline" href={ISSUES_URL} target="_blank" rel="noopener">
                        <i class="fab fa-github"></i> {"Report an issue"}
                    </a>
                </div>
            </div>
        </div>
    }
}
