pub mod notifications;
pub mod preferences;
pub mod profile;

/// Fetch state for data loaded through a mock (or, later, real) backend.
/// Fetches start in `Loading` the moment the hook mounts, so there is no
/// idle variant.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}
