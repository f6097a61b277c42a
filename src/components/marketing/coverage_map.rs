use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::mock_data;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue);
}

// Approximate center of the covered region
const MAP_CENTER: (f64, f64) = (39.0, 35.0);

#[function_component(CoverageMap)]
pub fn coverage_map() -> Html {
    let container_ref = use_node_ref();

    use_effect_with(container_ref.clone(), move |container_ref| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            let div_id = "coverage-map";
            element.set_id(div_id);

            let cities = mock_data::coverage_cities();
            let lat: Vec<f64> = cities.iter().map(|c| c.latitude).collect();
            let lon: Vec<f64> = cities.iter().map(|c| c.longitude).collect();
            let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();

            // Markers over the tile provider's OSM layer; read-only traffic
            let trace = json!({
                "type": "scattermapbox",
                "mode": "markers",
                "lat": lat,
                "lon": lon,
                "text": names,
                "hoverinfo": "text",
                "marker": { "size": 12, "color": "rgb(239, 68, 68)" },
            });

            let layout = json!({
                "mapbox": {
                    "style": "open-street-map",
                    "center": { "lat": MAP_CENTER.0, "lon": MAP_CENTER.1 },
                    "zoom": 5,
                },
                "margin": { "l": 0, "r": 0, "t": 0, "b": 0 },
                "height": 480,
            });

            let data_js = js_sys::Array::new();
            match js_sys::JSON::parse(&trace.to_string()) {
                Ok(trace_js) => {
                    data_js.push(&trace_js);
                }
                Err(err) => {
                    log::error!("Failed to build map trace: {:?}", err);
                    return;
                }
            }
            match js_sys::JSON::parse(&layout.to_string()) {
                Ok(layout_js) => new_plot(div_id, data_js.into(), layout_js),
                Err(err) => log::error!("Failed to build map layout: {:?}", err),
            }
        }
    });

    html! {
        <section id="coverage" class="py-16 bg-base-200">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-4">{"Coverage"}</h2>
                <p class="text-center text-gray-500 mb-8">
                    {"Active collection points across the network"}
                </p>
                <div class="card bg-base-100 shadow overflow-hidden">
                    <div ref={container_ref} style="width:100%; height:480px;"></div>
                </div>
            </div>
        </section>
    }
}
