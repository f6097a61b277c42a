use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::mock_data::{self, Notification};
use crate::settings;

pub const FETCH_DELAY_MS: u32 = 500;
pub const DELETE_DELAY_MS: u32 = 300;

#[derive(Clone, PartialEq, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum NotificationsAction {
    /// An operation started; keep the current list visible while it runs.
    Started,
    /// A fetch completed with a fresh feed.
    Loaded(Vec<Notification>),
    /// A single notification was deleted. No-op for absent ids.
    Removed(String),
    /// Every notification was deleted.
    Cleared,
    Failed(String),
}

impl Reducible for NotificationsState {
    type Action = NotificationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationsAction::Started => Rc::new(Self {
                items: self.items.clone(),
                loading: true,
                error: None,
            }),
            NotificationsAction::Loaded(items) => Rc::new(Self {
                items: sorted_desc(items),
                loading: false,
                error: None,
            }),
            NotificationsAction::Removed(id) => Rc::new(Self {
                items: remove_by_id(&self.items, &id),
                loading: false,
                error: None,
            }),
            NotificationsAction::Cleared => Rc::new(Self {
                items: Vec::new(),
                loading: false,
                error: None,
            }),
            NotificationsAction::Failed(message) => Rc::new(Self {
                items: self.items.clone(),
                loading: false,
                error: Some(message),
            }),
        }
    }
}

/// Feed presentation order: newest first.
pub fn sorted_desc(mut items: Vec<Notification>) -> Vec<Notification> {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

pub fn remove_by_id(items: &[Notification], id: &str) -> Vec<Notification> {
    items.iter().filter(|n| n.id != id).cloned().collect()
}

// Overlapping operations are sequenced with a monotonic token: each
// operation bumps the counter, and a completion whose token is no longer
// the newest is dropped. Latest-issued operation wins.
type OpSeq = Rc<RefCell<u64>>;

fn next_op(seq: &OpSeq) -> u64 {
    let mut current = seq.borrow_mut();
    *current += 1;
    *current
}

fn is_current(seq: &OpSeq, token: u64) -> bool {
    *seq.borrow() == token
}

async fn load_feed() -> Result<Vec<Notification>, String> {
    // Stands in for a network call; the error path is kept for the day
    // a real backend replaces the timer.
    TimeoutFuture::new(settings::mock_latency(FETCH_DELAY_MS)).await;
    Ok(mock_data::seed_notifications())
}

async fn delete_remote(_id: Option<&str>) -> Result<(), String> {
    TimeoutFuture::new(settings::mock_latency(DELETE_DELAY_MS)).await;
    Ok(())
}

pub struct NotificationsHandle {
    pub state: UseReducerHandle<NotificationsState>,
    pub refetch: Callback<()>,
    pub delete: Callback<String>,
    pub delete_all: Callback<()>,
}

#[hook]
pub fn use_notifications() -> NotificationsHandle {
    let state = use_reducer(NotificationsState::default);
    let op_seq: OpSeq = use_mut_ref(|| 0u64);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let refetch = {
        let state = state.clone();
        let op_seq = op_seq.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |_, _| {
            let token = next_op(&op_seq);
            state.dispatch(NotificationsAction::Started);

            let state = state.clone();
            let op_seq = op_seq.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = load_feed().await;
                if !is_current(&op_seq, token) {
                    log::debug!("Discarding stale notification fetch (token {})", token);
                    return;
                }
                match result {
                    Ok(items) => state.dispatch(NotificationsAction::Loaded(items)),
                    Err(err) => {
                        state.dispatch(NotificationsAction::Failed(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    let delete = {
        let state = state.clone();
        let op_seq = op_seq.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |id: String, _| {
            let token = next_op(&op_seq);
            state.dispatch(NotificationsAction::Started);

            let state = state.clone();
            let op_seq = op_seq.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = delete_remote(Some(&id)).await;
                if !is_current(&op_seq, token) {
                    log::debug!("Discarding stale notification delete (token {})", token);
                    return;
                }
                match result {
                    Ok(()) => state.dispatch(NotificationsAction::Removed(id)),
                    Err(err) => {
                        state.dispatch(NotificationsAction::Failed(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    let delete_all = {
        let state = state.clone();
        let op_seq = op_seq.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |_, _| {
            let token = next_op(&op_seq);
            state.dispatch(NotificationsAction::Started);

            let state = state.clone();
            let op_seq = op_seq.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = delete_remote(None).await;
                if !is_current(&op_seq, token) {
                    log::debug!("Discarding stale notification clear (token {})", token);
                    return;
                }
                match result {
                    Ok(()) => state.dispatch(NotificationsAction::Cleared),
                    Err(err) => {
                        state.dispatch(NotificationsAction::Failed(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    NotificationsHandle {
        state,
        refetch,
        delete,
        delete_all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NotificationsState, action: NotificationsAction) -> NotificationsState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    fn ids(state: &NotificationsState) -> Vec<&str> {
        state.items.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_loaded_sorts_any_seed_permutation() {
        let seeds = mock_data::seed_notifications();

        // A few representative shuffles, including reversed
        let permutations: Vec<Vec<usize>> =
            vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0], vec![2, 0, 3, 1], vec![1, 3, 0, 2]];

        for order in permutations {
            let shuffled: Vec<_> = order.iter().map(|&i| seeds[i].clone()).collect();
            let state = apply(
                NotificationsState::default(),
                NotificationsAction::Loaded(shuffled),
            );
            assert_eq!(ids(&state), vec!["1", "2", "3", "4"]);
            assert!(!state.loading);
            assert!(state.error.is_none());
            assert!(state
                .items
                .windows(2)
                .all(|w| w[0].timestamp >= w[1].timestamp));
        }
    }

    #[test]
    fn test_delete_removes_one_and_is_idempotent() {
        let loaded = apply(
            NotificationsState::default(),
            NotificationsAction::Loaded(mock_data::seed_notifications()),
        );

        let after_first = apply(
            loaded,
            NotificationsAction::Removed("2".to_string()),
        );
        assert_eq!(ids(&after_first), vec!["1", "3", "4"]);
        assert!(after_first.error.is_none());

        // Deleting the same id again changes nothing and raises no error
        let after_second = apply(
            after_first.clone(),
            NotificationsAction::Removed("2".to_string()),
        );
        assert_eq!(ids(&after_second), ids(&after_first));
        assert!(after_second.error.is_none());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let loaded = apply(
            NotificationsState::default(),
            NotificationsAction::Loaded(mock_data::seed_notifications()),
        );
        let after = apply(
            loaded.clone(),
            NotificationsAction::Removed("missing".to_string()),
        );
        assert_eq!(ids(&after), ids(&loaded));
        assert!(after.error.is_none());
    }

    #[test]
    fn test_cleared_empties_feed() {
        let loaded = apply(
            NotificationsState::default(),
            NotificationsAction::Loaded(mock_data::seed_notifications()),
        );
        let cleared = apply(loaded, NotificationsAction::Cleared);
        assert!(cleared.items.is_empty());
        assert!(!cleared.loading);
    }

    #[test]
    fn test_started_keeps_items_and_clears_error() {
        let failed = apply(
            NotificationsState {
                items: mock_data::seed_notifications(),
                loading: false,
                error: None,
            },
            NotificationsAction::Failed("boom".to_string()),
        );
        assert_eq!(failed.error.as_deref(), Some("boom"));
        assert_eq!(failed.items.len(), 4);

        let restarted = apply(failed, NotificationsAction::Started);
        assert!(restarted.loading);
        assert!(restarted.error.is_none());
        assert_eq!(restarted.items.len(), 4);
    }

    #[test]
    fn test_stale_tokens_are_discarded() {
        let seq: OpSeq = Rc::new(RefCell::new(0));

        let fetch_token = next_op(&seq);
        let delete_token = next_op(&seq);

        // The delete was issued later, so a racing fetch completion must
        // be dropped while the delete completion is applied.
        assert!(!is_current(&seq, fetch_token));
        assert!(is_current(&seq, delete_token));
    }

    #[test]
    fn test_overlapping_completions_resolve_to_latest_issued_op() {
        let seq: OpSeq = Rc::new(RefCell::new(0));

        // Completions pass through the same gate the async glue uses:
        // apply only when the token is still the newest.
        let complete = |state: NotificationsState, token: u64, action: NotificationsAction| {
            if is_current(&seq, token) {
                apply(state, action)
            } else {
                state
            }
        };

        let mut state = apply(
            NotificationsState::default(),
            NotificationsAction::Loaded(mock_data::seed_notifications()),
        );

        // A refresh starts, then a delete of "3" is issued before the
        // refresh has completed.
        let fetch_token = next_op(&seq);
        state = apply(state, NotificationsAction::Started);
        let delete_token = next_op(&seq);
        state = apply(state, NotificationsAction::Started);

        // The delete lands first; the stale refresh lands afterwards and
        // must not resurrect "3".
        state = complete(state, delete_token, NotificationsAction::Removed("3".to_string()));
        state = complete(
            state,
            fetch_token,
            NotificationsAction::Loaded(mock_data::seed_notifications()),
        );

        assert_eq!(ids(&state), vec!["1", "2", "4"]);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
