use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

/// What the latency input asks for. Empty clears the override; anything
/// that is not a number leaves the stored value alone.
#[derive(Debug, PartialEq)]
enum LatencyField {
    Clear,
    Set(u32),
    Invalid,
}

fn parse_latency_field(raw: &str) -> LatencyField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LatencyField::Clear;
    }
    match trimmed.parse::<u32>() {
        Ok(ms) => LatencyField::Set(ms),
        Err(_) => LatencyField::Invalid,
    }
}

#[function_component(Settings)]
pub fn settings_page() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let log_level_ref = use_node_ref();
    let latency_ref = use_node_ref();
    let toast_duration_ref = use_node_ref();

    let current = settings::get_settings();

    let on_save = {
        let toast_ctx = toast_ctx.clone();
        let log_level_ref = log_level_ref.clone();
        let latency_ref = latency_ref.clone();
        let toast_duration_ref = toast_duration_ref.clone();

        Callback::from(move |_| {
            let log_level = log_level_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value());
            let latency = latency_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value());
            let toast_duration = toast_duration_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value());

            let mut latency_invalid = false;
            settings::update_settings(|s| {
                if let Some(level) = log_level.as_deref() {
                    s.log_level = match level {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => s.log_level,
                    };
                }
                if let Some(latency) = latency.as_deref() {
                    match parse_latency_field(latency) {
                        LatencyField::Clear => s.mock_latency_ms = None,
                        LatencyField::Set(ms) => s.mock_latency_ms = Some(ms),
                        LatencyField::Invalid => latency_invalid = true,
                    }
                }
                if let Some(duration) = toast_duration.as_deref() {
                    if let Ok(duration_val) = duration.trim().parse::<u32>() {
                        s.toast_duration_ms = duration_val;
                    }
                }
            });

            if latency_invalid {
                toast_ctx.show_warning(
                    "Latency must be a whole number of ms; keeping the previous value."
                        .to_string(),
                );
            }

            match settings::get_settings().save_to_storage() {
                Ok(()) => toast_ctx.show_success("Settings saved.".to_string()),
                Err(err) => {
                    log::error!("Failed to save settings: {:?}", err);
                    toast_ctx.show_error("Failed to save settings.".to_string());
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Application Settings"}</h2>

                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Log level"}</span></label>
                        <select
                            ref={log_level_ref}
                            class="select select-bordered w-full"
                        >
                            {for ["error", "warn", "info", "debug", "trace"].iter().map(|level| {
                                let selected = format!("{:?}", current.log_level).to_lowercase() == *level;
                                html! { <option value={*level} selected={selected}>{level}</option> }
                            })}
                        </select>
                    </div>

                    <div class="form-control w-full mt-2">
                        <label class="label">
                            <span class="label-text">{"Simulated latency (ms)"}</span>
                        </label>
                        <input
                            ref={latency_ref}
                            type="number"
                            placeholder="Empty = per-operation default"
                            class="input input-bordered w-full"
                            value={current.mock_latency_ms.map(|v| v.to_string()).unwrap_or_default()}
                        />
                    </div>

                    <div class="form-control w-full mt-2">
                        <label class="label">
                            <span class="label-text">{"Toast duration (ms)"}</span>
                        </label>
                        <input
                            ref={toast_duration_ref}
                            type="number"
                            class="input input-bordered w-full"
                            value={current.toast_duration_ms.to_string()}
                        />
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_latency_field_clears_override() {
        assert_eq!(parse_latency_field(""), LatencyField::Clear);
        assert_eq!(parse_latency_field("   "), LatencyField::Clear);
    }

    #[test]
    fn test_numeric_latency_field_sets_override() {
        assert_eq!(parse_latency_field("250"), LatencyField::Set(250));
        assert_eq!(parse_latency_field(" 0 "), LatencyField::Set(0));
    }

    #[test]
    fn test_garbage_latency_field_keeps_previous_value() {
        for raw in ["fast", "-1", "12ms", "1.5"] {
            assert_eq!(parse_latency_field(raw), LatencyField::Invalid);
        }
    }
}
