use yew::prelude::*;

use crate::hooks::notifications::use_notifications;
use crate::hooks::preferences::use_notification_preferences;
use crate::mock_data::Notification;

#[function_component(Notifications)]
pub fn notifications() -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2">
                <NotificationFeed />
            </div>
            <div>
                <PreferencesCard />
            </div>
        </div>
    }
}

#[function_component(NotificationFeed)]
fn notification_feed() -> Html {
    let handle = use_notifications();
    let state = (*handle.state).clone();

    let on_refresh = {
        let refetch = handle.refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let on_delete_all = {
        let delete_all = handle.delete_all.clone();
        Callback::from(move |_| delete_all.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="card-title">
                        {"Notifications"}
                        if state.loading {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                    </h2>
                    <div class="flex gap-2">
                        <button class="btn btn-ghost btn-sm" onclick={on_refresh} disabled={state.loading}>
                            <i class="fas fa-rotate"></i> {"Refresh"}
                        </button>
                        <button
                            class="btn btn-ghost btn-sm text-error"
                            onclick={on_delete_all}
                            disabled={state.loading || state.items.is_empty()}
                        >
                            <i class="fas fa-trash"></i> {"Clear all"}
                        </button>
                    </div>
                </div>

                if let Some(error) = &state.error {
                    <div class="alert alert-error mb-2">
                        <i class="fas fa-exclamation-circle"></i>
                        <span>{error}</span>
                    </div>
                }

                if state.items.is_empty() && !state.loading {
                    <div class="text-center py-8 text-gray-500">
                        <i class="fas fa-bell-slash text-4xl mb-4 opacity-50"></i>
                        <p>{"No notifications."}</p>
                    </div>
                } else {
                    <div class="flex flex-col gap-2">
                        {for state.items.iter().map(|notification| {
                            let on_delete = {
                                let delete = handle.delete.clone();
                                let id = notification.id.clone();
                                Callback::from(move |_| delete.emit(id.clone()))
                            };
                            html! {
                                <NotificationRow
                                    key={notification.id.clone()}
                                    notification={notification.clone()}
                                    {on_delete}
                                    disabled={state.loading}
                                />
                            }
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationRowProps {
    notification: Notification,
    on_delete: Callback<MouseEvent>,
    disabled: bool,
}

#[function_component(NotificationRow)]
fn notification_row(props: &NotificationRowProps) -> Html {
    let notification = &props.notification;

    html! {
        <div class={classes!("alert", notification.kind.alert_class())}>
            <i class={notification.kind.icon()}></i>
            <div class="flex-1">
                <p>{&notification.message}</p>
                <p class="text-xs opacity-70">
                    { notification.timestamp.format("%Y-%m-%d %H:%M UTC").to_string() }
                </p>
            </div>
            <button
                class="btn btn-sm btn-ghost btn-circle"
                onclick={props.on_delete.clone()}
                disabled={props.disabled}
                aria-label="delete notification"
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

#[function_component(PreferencesCard)]
fn preferences_card() -> Html {
    let handle = use_notification_preferences();
    let state = (*handle.state).clone();

    let on_toggle_email = {
        let toggle = handle.toggle_email.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let on_toggle_sms = {
        let toggle = handle.toggle_sms.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">
                    {"Preferences"}
                    if state.loading {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                </h2>

                if let Some(error) = &state.error {
                    <div class="alert alert-error">
                        <span>{error}</span>
                    </div>
                }

                <div class="form-control">
                    <label class="label cursor-pointer">
                        <span class="label-text">
                            <i class="fas fa-envelope mr-2"></i>{"Email notifications"}
                        </span>
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            checked={state.preferences.email}
                            onchange={on_toggle_email}
                            disabled={state.loading}
                        />
                    </label>
                </div>
                <div class="form-control">
                    <label class="label cursor-pointer">
                        <span class="label-text">
                            <i class="fas fa-mobile-screen mr-2"></i>{"SMS notifications"}
                        </span>
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            checked={state.preferences.sms}
                            onchange={on_toggle_sms}
                            disabled={state.loading}
                        />
                    </label>
                </div>
            </div>
        </div>
    }
}
