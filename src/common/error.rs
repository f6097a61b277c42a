use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Full-width error panel for failed fetches. Pass `on_retry` to offer
/// the user a way to re-run the operation.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Rendering error panel: {}", props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_| on_retry.emit(()));
        html! {
            <button class="btn btn-primary btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Unable to load data"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {retry.unwrap_or_default()}
        </div>
    }
}
