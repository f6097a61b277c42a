use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;
use crate::mock_data::{self, UserProfile};
use crate::settings;

pub const FETCH_DELAY_MS: u32 = 100;

async fn load_profile() -> Result<UserProfile, String> {
    TimeoutFuture::new(settings::mock_latency(FETCH_DELAY_MS)).await;
    Ok(mock_data::mock_profile())
}

/// Read-only profile record; this app has no write path for it.
#[hook]
pub fn use_profile() -> (UseStateHandle<FetchState<UserProfile>>, Callback<()>) {
    use_fetch_with_refetch(load_profile)
}
