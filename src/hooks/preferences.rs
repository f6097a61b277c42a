use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use web_sys::window;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

pub const STORAGE_KEY: &str = "reliefnet_notification_preferences";
pub const FETCH_DELAY_MS: u32 = 300;
pub const UPDATE_DELAY_MS: u32 = 500;

/// Per-session notification channel preferences, persisted wholesale
/// under a single local-storage key (last write wins, single writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
        }
    }
}

/// Partial update; `None` fields are left untouched by [`apply`].
///
/// [`apply`]: NotificationPreferences::apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub email: Option<bool>,
    pub sms: Option<bool>,
}

impl NotificationPreferences {
    pub fn apply(self, patch: PreferencesPatch) -> Self {
        Self {
            email: patch.email.unwrap_or(self.email),
            sms: patch.sms.unwrap_or(self.sms),
        }
    }
}

/// Decode a stored preference value. Stored input is untrusted: a
/// missing or malformed value falls back to the defaults instead of
/// propagating a parse fault to the view layer.
pub fn decode_preferences(raw: Option<String>) -> NotificationPreferences {
    match raw {
        None => NotificationPreferences::default(),
        Some(text) => match serde_json::from_str(&text) {
            Ok(preferences) => preferences,
            Err(err) => {
                log::warn!(
                    "Malformed stored notification preferences ({}), using defaults",
                    err
                );
                NotificationPreferences::default()
            }
        },
    }
}

pub fn encode_preferences(preferences: &NotificationPreferences) -> String {
    // Two plain bools cannot fail to serialize
    serde_json::to_string(preferences).unwrap_or_else(|_| "{}".to_string())
}

fn read_storage() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

fn write_storage(value: &str) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(STORAGE_KEY, value) {
                log::error!("Failed to persist notification preferences: {:?}", err);
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PreferencesState {
    pub preferences: NotificationPreferences,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self {
            preferences: NotificationPreferences::default(),
            loading: false,
            error: None,
        }
    }
}

async fn load_remote() -> Result<NotificationPreferences, String> {
    TimeoutFuture::new(settings::mock_latency(FETCH_DELAY_MS)).await;
    Ok(decode_preferences(read_storage()))
}

async fn store_remote(merged: NotificationPreferences) -> Result<(), String> {
    TimeoutFuture::new(settings::mock_latency(UPDATE_DELAY_MS)).await;
    write_storage(&encode_preferences(&merged));
    Ok(())
}

pub struct PreferencesHandle {
    pub state: UseStateHandle<PreferencesState>,
    pub refetch: Callback<()>,
    pub update: Callback<PreferencesPatch>,
    pub toggle_email: Callback<()>,
    pub toggle_sms: Callback<()>,
}

#[hook]
pub fn use_notification_preferences() -> PreferencesHandle {
    let state = use_state(PreferencesState::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let refetch = {
        let state = state.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback(state.preferences, move |_, current| {
            let current = *current;
            state.set(PreferencesState {
                preferences: current,
                loading: true,
                error: None,
            });

            let state = state.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_remote().await {
                    Ok(preferences) => state.set(PreferencesState {
                        preferences,
                        loading: false,
                        error: None,
                    }),
                    Err(err) => {
                        state.set(PreferencesState {
                            preferences: current,
                            loading: false,
                            error: Some(err.clone()),
                        });
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    // Recreated whenever the stored value changes, so the merge always
    // starts from the current preferences.
    let update = {
        let state = state.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback(
            state.preferences,
            move |patch: PreferencesPatch, current| {
                let current = *current;
                let merged = current.apply(patch);
                state.set(PreferencesState {
                    preferences: current,
                    loading: true,
                    error: None,
                });

                let state = state.clone();
                let toast_ctx = toast_ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match store_remote(merged).await {
                        Ok(()) => state.set(PreferencesState {
                            preferences: merged,
                            loading: false,
                            error: None,
                        }),
                        Err(err) => {
                            state.set(PreferencesState {
                                preferences: current,
                                loading: false,
                                error: Some(err.clone()),
                            });
                            toast_ctx.show_error(err);
                        }
                    }
                });
            },
        )
    };

    let toggle_email = {
        let update = update.clone();
        use_callback(state.preferences, move |_, current| {
            update.emit(PreferencesPatch {
                email: Some(!current.email),
                ..PreferencesPatch::default()
            });
        })
    };

    let toggle_sms = {
        let update = update.clone();
        use_callback(state.preferences, move |_, current| {
            update.emit(PreferencesPatch {
                sms: Some(!current.sms),
                ..PreferencesPatch::default()
            });
        })
    };

    // Load persisted preferences on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    PreferencesHandle {
        state,
        refetch,
        update,
        toggle_email,
        toggle_sms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_never_drops_untouched_fields() {
        let current = NotificationPreferences {
            email: true,
            sms: false,
        };
        let merged = current.apply(PreferencesPatch {
            sms: Some(true),
            ..PreferencesPatch::default()
        });
        assert_eq!(
            merged,
            NotificationPreferences {
                email: true,
                sms: true,
            }
        );
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let current = NotificationPreferences {
            email: false,
            sms: true,
        };
        assert_eq!(current.apply(PreferencesPatch::default()), current);
    }

    #[test]
    fn test_round_trip_reproduces_updated_value() {
        let updated = NotificationPreferences::default().apply(PreferencesPatch {
            sms: Some(true),
            ..PreferencesPatch::default()
        });

        let stored = encode_preferences(&updated);
        let reloaded = decode_preferences(Some(stored));

        assert_eq!(reloaded, updated);
        assert_ne!(reloaded, NotificationPreferences::default());
    }

    #[test]
    fn test_missing_value_decodes_to_defaults() {
        assert_eq!(decode_preferences(None), NotificationPreferences::default());
    }

    #[test]
    fn test_malformed_value_decodes_to_defaults() {
        for garbage in ["", "not json", "{\"email\": \"yes\"}", "[1,2,3]"] {
            assert_eq!(
                decode_preferences(Some(garbage.to_string())),
                NotificationPreferences::default(),
                "{:?} should fall back to defaults",
                garbage
            );
        }
    }
}
