use yew::prelude::*;

use crate::mock_data::{self, Volunteer};

#[function_component(Volunteers)]
pub fn volunteers() -> Html {
    // Index of the expanded row, if any; purely a local UI toggle
    let expanded = use_state(|| None::<usize>);
    let volunteers = mock_data::mock_volunteers();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center gap-3 mb-4">
                    <i class="fas fa-people-carry-box text-primary text-2xl"></i>
                    <h2 class="card-title text-2xl">{"Volunteers"}</h2>
                </div>

                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"City"}</th>
                                <th>{"Status"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for volunteers.iter().enumerate().map(|(idx, volunteer)| {
                                let is_expanded = *expanded == Some(idx);
                                let on_toggle = {
                                    let expanded = expanded.clone();
                                    Callback::from(move |_| {
                                        expanded.set(if is_expanded { None } else { Some(idx) });
                                    })
                                };
                                html! { <VolunteerRow volunteer={volunteer.clone()} expanded={is_expanded} {on_toggle} /> }
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VolunteerRowProps {
    volunteer: Volunteer,
    expanded: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(VolunteerRow)]
fn volunteer_row(props: &VolunteerRowProps) -> Html {
    let volunteer = &props.volunteer;

    let status = if volunteer.active {
        html! { <span class="badge badge-success">{"Active"}</span> }
    } else {
        html! { <span class="badge badge-ghost">{"Inactive"}</span> }
    };

    html! {
        <>
            <tr class="hover cursor-pointer" onclick={props.on_toggle.clone()}>
                <td class="font-semibold">{&volunteer.name}</td>
                <td>{&volunteer.city}</td>
                <td>{status}</td>
                <td class="text-right">
                    <i class={if props.expanded { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                </td>
            </tr>
            if props.expanded {
                <tr>
                    <td colspan="4" class="bg-base-200">
                        <div class="flex gap-8 px-4 py-2 text-sm">
                            <span><b>{"Role: "}</b>{&volunteer.role}</span>
                            <span><b>{"Assignments: "}</b>{volunteer.assignments}</span>
                        </div>
                    </td>
                </tr>
            }
        </>
    }
}
