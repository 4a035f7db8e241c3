// src/view/surfaces.rs
//
// Seams to the world outside the engine. The map layer that actually draws
// pins and clusters, the status chrome, and the browser location bar are all
// collaborators the coordinator calls into, never the other way around —
// except for zoom changes, which the map surface reports back through
// `ViewCoordinator::zoom_changed`.

/// The rendering collaborator (a Leaflet-style marker layer).
pub trait MapSurface {
    /// Removes every marker.
    fn clear(&mut self);

    /// Adds one marker with prebuilt popup content.
    fn add_point(&mut self, id: u64, lat: f64, long: f64, content: &str);

    /// Resizes marker icons to suit the given zoom level.
    fn set_zoom_dependent_icon_size(&mut self, zoom: f64);

    /// Pans to a record, opens its detail view, and highlights it.
    fn reveal_and_highlight(&mut self, id: u64);

    fn highlight(&mut self, id: u64);

    fn clear_highlights(&mut self);

    fn current_zoom(&self) -> f64;
}

/// Status chrome around the map.
pub trait StatusUi {
    /// Shows or hides the "no results" message.
    fn set_no_results_visible(&mut self, visible: bool);

    /// Lights up the filter toggle when any filter is active.
    fn set_filter_indicator(&mut self, active: bool);

    /// Surfaces the fatal fetch-failure state. No retry follows.
    fn show_fetch_error(&mut self);
}

/// The browser's navigable location, reduced to its query string.
pub trait LocationBar {
    /// Current query string (leading `?` tolerated).
    fn query(&self) -> String;

    /// Replaces the query string without navigating and without growing
    /// the history stack.
    fn replace_query(&mut self, query: &str);
}
