use yew::prelude::*;

use crate::mock_data;

#[function_component(Home)]
pub fn home() -> Html {
    let stats = mock_data::dashboard_stats();

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <div class="card-body text-center">
                    <h2 class="text-3xl font-bold">{"Welcome"}</h2>
                    <p class="text-lg text-gray-500">{"Emergency Aid and Needs Coordination Network"}</p>
                    <p class="max-w-2xl mx-auto text-gray-500">
                        {"This panel coordinates volunteers, collection points and aid \
                          shipments so that relief reaches affected regions faster."}
                    </p>
                </div>
            </div>

            <div class="stats shadow w-full mt-6">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class="fas fa-people-carry-box text-3xl"></i></div>
                    <div class="stat-title">{"Active Volunteers"}</div>
                    <div class="stat-value">{stats.active_volunteers}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary"><i class="fas fa-truck text-3xl"></i></div>
                    <div class="stat-title">{"Open Shipments"}</div>
                    <div class="stat-value">{stats.open_shipments}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-accent"><i class="fas fa-city text-3xl"></i></div>
                    <div class="stat-title">{"Cities Covered"}</div>
                    <div class="stat-value">{stats.cities_covered}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-success"><i class="fas fa-box-open text-3xl"></i></div>
                    <div class="stat-title">{"Deliveries This Month"}</div>
                    <div class="stat-value">{stats.deliveries_this_month}</div>
                </div>
            </div>
        </>
    }
}
