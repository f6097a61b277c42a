use plotly::common::Mode;
use plotly::{Bar, Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::mock_data;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

fn render_plot(div_id: &str, traces: Vec<String>, layout: &Layout) {
    let data_js = js_sys::Array::new();
    for trace_json in traces {
        match js_sys::JSON::parse(&trace_json) {
            Ok(trace_js) => {
                data_js.push(&trace_js);
            }
            Err(err) => {
                log::error!("Failed to build chart trace: {:?}", err);
                return;
            }
        }
    }

    let layout_json = serde_json::to_string(layout).unwrap_or_default();
    match js_sys::JSON::parse(&layout_json) {
        Ok(layout_js) => newPlot(div_id, data_js.into(), layout_js),
        Err(err) => log::error!("Failed to build chart layout: {:?}", err),
    }
}

#[function_component(Analytics)]
pub fn analytics() -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Volunteer Registrations"}</h2>
                    <p class="text-sm text-gray-500">{"New volunteers per week, last 12 weeks"}</p>
                    <VolunteerTrendChart />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Shipment Status"}</h2>
                    <p class="text-sm text-gray-500">{"Shipments per lifecycle status"}</p>
                    <ShipmentStatusChart />
                </div>
            </div>
        </div>
    }
}

#[function_component(VolunteerTrendChart)]
fn volunteer_trend_chart() -> Html {
    let container_ref = use_node_ref();

    use_effect_with(container_ref.clone(), move |container_ref| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            let div_id = "volunteer-trend-chart";
            element.set_id(div_id);

            let (dates, counts) = mock_data::volunteer_registration_series();

            let trace = Scatter::new(dates, counts)
                .mode(Mode::LinesMarkers)
                .name("Registrations")
                .line(plotly::common::Line::new().color("rgb(34, 197, 94)").width(2.0));

            let layout = Layout::new()
                .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Week")))
                .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Volunteers")))
                .height(320);

            let trace_json = serde_json::to_string(&trace).unwrap_or_default();
            render_plot(div_id, vec![trace_json], &layout);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:320px;"></div>
    }
}

#[function_component(ShipmentStatusChart)]
fn shipment_status_chart() -> Html {
    let container_ref = use_node_ref();

    use_effect_with(container_ref.clone(), move |container_ref| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            let div_id = "shipment-status-chart";
            element.set_id(div_id);

            let counts = mock_data::shipment_status_counts();
            let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
            let values: Vec<u32> = counts.iter().map(|(_, count)| *count).collect();

            let trace = Bar::new(labels, values).name("Shipments");

            let layout = Layout::new()
                .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Shipments")))
                .height(320);

            let trace_json = serde_json::to_string(&trace).unwrap_or_default();
            render_plot(div_id, vec![trace_json], &layout);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:320px;"></div>
    }
}
