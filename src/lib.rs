//! Core engine for the public-events map: fetches the full dataset from the
//! open-data portal, evaluates the multi-facet filter over it, and keeps the
//! in-memory filter state, the shareable URL query string, and the rendered
//! marker set in sync. Rendering and DOM work live behind the traits in
//! [`view`]; this crate never touches a screen itself.

pub mod api;
pub mod debounce;
pub mod domain;
pub mod urlstate;
pub mod view;

#[cfg(test)]
mod tests;

pub use api::{fetch_all_records, ApiError, DatastoreClient, RecordSource};
pub use domain::{matches, DateWindow, FacetValue, FilterField, FilterState, Record};
pub use view::{LocationBar, MapSurface, Phase, StatusUi, ViewCoordinator};
