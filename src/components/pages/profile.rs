use yew::prelude::*;

use crate::common::fetch_render::FetchRender;
use crate::hooks::profile::use_profile;
use crate::mock_data::UserProfile;

#[function_component(Profile)]
pub fn profile() -> Html {
    let (profile_state, refetch) = use_profile();

    let render = Callback::from(|profile: UserProfile| {
        let verification = if profile.is_verified {
            html! { <span class="badge badge-success gap-1"><i class="fas fa-check"></i>{"Verified"}</span> }
        } else {
            html! { <span class="badge badge-warning gap-1"><i class="fas fa-clock"></i>{"Pending verification"}</span> }
        };

        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center gap-4 mb-4">
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-16">
                                <span class="text-2xl">
                                    { profile.first_name.chars().next().unwrap_or('?') }
                                </span>
                            </div>
                        </div>
                        <div>
                            <h2 class="card-title text-2xl">
                                { format!("{} {}", profile.first_name, profile.last_name) }
                            </h2>
                            { verification }
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <ProfileField label="Email" value={profile.email.clone()} icon="fas fa-envelope" />
                        <ProfileField label="Phone" value={profile.phone_number.clone()} icon="fas fa-phone" />
                        <ProfileField label="Location" value={profile.location.clone()} icon="fas fa-location-dot" />
                        <ProfileField label="Member since" value={profile.join_date.clone()} icon="fas fa-calendar" />
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <FetchRender<UserProfile>
            state={(*profile_state).clone()}
            {render}
            on_retry={Some(refetch)}
            loading_text={Some("Loading profile...".to_string())}
        />
    }
}

#[derive(Properties, PartialEq)]
struct ProfileFieldProps {
    label: &'static str,
    value: String,
    icon: &'static str,
}

// Read-only display; this app has no profile write path.
#[function_component(ProfileField)]
fn profile_field(props: &ProfileFieldProps) -> Html {
    html! {
        <div class="flex items-center gap-3 p-3 rounded-lg bg-base-200">
            <i class={classes!(props.icon, "text-primary")}></i>
            <div>
                <p class="text-xs text-gray-500">{props.label}</p>
                <p class="font-semibold">{&props.value}</p>
            </div>
        </div>
    }
}
