use crate::api::ApiError;
use crate::domain::{matches, FilterField, FilterState, Record};
use crate::urlstate;
use crate::view::popup::popup_content;
use crate::view::surfaces::{LocationBar, MapSurface, StatusUi};
use chrono::Local;

/// Lifecycle of one session. `Filtering` is transient within a redraw;
/// `Error` is terminal — there is no retry after a failed initial fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Filtering,
    Error,
}

/// Owns the record collection, the filter state, and the collaborators, and
/// keeps them consistent: every filter mutation re-filters, redraws, rewrites
/// the URL, and refreshes the indicator in one synchronous pass.
pub struct ViewCoordinator<M, S, L> {
    records: Vec<Record>,
    filters: FilterState,
    phase: Phase,
    map: M,
    status: S,
    location: L,
}

impl<M, S, L> ViewCoordinator<M, S, L>
where
    M: MapSurface,
    S: StatusUi,
    L: LocationBar,
{
    pub fn new(map: M, status: S, location: L) -> Self {
        ViewCoordinator {
            records: Vec::new(),
            filters: FilterState::default(),
            phase: Phase::Idle,
            map,
            status,
            location,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filters(&self) -> FilterState {
        self.filters.snapshot()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Marks the fetch as underway.
    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Hands over the fetch outcome. On success: decode the location query
    /// into filter state, draw the initial view, and restore a permalink
    /// selection if the URL carried one. On failure: terminal error state.
    pub fn start(&mut self, fetched: Result<Vec<Record>, ApiError>) {
        self.phase = Phase::Loading;
        match fetched {
            Ok(records) => {
                self.records = records;
                self.filters = urlstate::decode(&self.location.query(), FilterState::default());
                self.phase = Phase::Ready;
                self.apply_filters_and_redraw();

                // Permalink restoration. An id that no longer exists in the
                // dataset is silently ignored.
                if let Some(id) = self.filters.selected {
                    if self.records.iter().any(|r| r.id == id) {
                        self.map.reveal_and_highlight(id);
                    }
                }
            }
            Err(e) => {
                eprintln!("❌ initial fetch failed: {e}");
                self.phase = Phase::Error;
                self.status.show_fetch_error();
            }
        }
    }

    /// Replaces one filter field and refreshes the whole view. Free-text
    /// changes are expected to arrive here through the debounce gate.
    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        if self.phase != Phase::Ready {
            return;
        }
        self.filters.set(field, value);
        self.apply_filters_and_redraw();
    }

    pub fn reset_filters(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.filters.reset();
        self.apply_filters_and_redraw();
    }

    /// The detail view for a record was opened. Selection changes only the
    /// URL and the indicator; the marker set is untouched.
    pub fn open_record(&mut self, id: u64) {
        self.filters.selected = Some(id);
        self.sync_url_and_indicator();
    }

    /// The detail view was closed: drop the selection and any highlight.
    pub fn close_record(&mut self) {
        self.filters.selected = None;
        self.map.clear_highlights();
        self.sync_url_and_indicator();
    }

    /// Zoom-change notification from the map surface.
    pub fn zoom_changed(&mut self, zoom: f64) {
        self.map.set_zoom_dependent_icon_size(zoom);
    }

    /// Records passing the current filters, in dataset order.
    pub fn filtered_records(&self) -> Vec<&Record> {
        let today = Local::now().date_naive();
        self.records
            .iter()
            .filter(|r| matches(r, &self.filters, today))
            .collect()
    }

    fn apply_filters_and_redraw(&mut self) {
        self.phase = Phase::Filtering;
        self.map.clear_highlights();

        // One reference instant per pass; staleness and the date window
        // must agree on what "today" is within a single redraw.
        let today = Local::now().date_naive();
        let matched: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| matches(r, &self.filters, today))
            .collect();

        self.map.clear();
        for record in &matched {
            if let Some((lat, long)) = record.coord {
                self.map
                    .add_point(record.id, lat, long, &popup_content(record).into_string());
            }
        }

        // A search narrowing the map to one event reads as "found it".
        if matched.len() == 1 && !self.filters.search.is_empty() {
            self.map.highlight(matched[0].id);
        }

        self.status.set_no_results_visible(matched.is_empty());
        self.sync_url_and_indicator();
        self.phase = Phase::Ready;
    }

    fn sync_url_and_indicator(&mut self) {
        self.location.replace_query(&urlstate::encode(&self.filters));
        self.status.set_filter_indicator(self.filters.is_active());
    }
}
