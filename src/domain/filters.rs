// src/domain/filters.rs

use crate::domain::dates;
use crate::domain::Record;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One categorical filter dimension: either wide open or pinned to a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetValue {
    #[default]
    All,
    Is(String),
}

impl FacetValue {
    /// The UI and the URL both use the literal "all" for the open state.
    pub fn parse(value: &str) -> FacetValue {
        if value == "all" {
            FacetValue::All
        } else {
            FacetValue::Is(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateWindow {
    /// Unknown values fall back to `All` rather than failing.
    pub fn parse(value: &str) -> DateWindow {
        match value {
            "today" => DateWindow::Today,
            "thisWeek" => DateWindow::ThisWeek,
            "thisMonth" => DateWindow::ThisMonth,
            _ => DateWindow::All,
        }
    }

    /// URL form of a non-default window; `All` is omitted from URLs.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            DateWindow::All => None,
            DateWindow::Today => Some("today"),
            DateWindow::ThisWeek => Some("thisWeek"),
            DateWindow::ThisMonth => Some("thisMonth"),
        }
    }
}

/// Names the one field a `FilterState::set` call replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Borough,
    EventType,
    VenueKind,
    Cost,
    Search,
    Date,
    Selected,
}

/// Single source of truth for what the user is looking at: four facets, the
/// free-text query, the date window, and the optional permalink selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub borough: FacetValue,
    pub event_type: FacetValue,
    pub venue_kind: FacetValue,
    pub cost: FacetValue,
    pub search: String,
    pub date: DateWindow,
    pub selected: Option<u64>,
}

impl FilterState {
    /// Replaces exactly one field. No validation beyond type coercion: a
    /// facet value that exists in no record simply matches nothing, and a
    /// non-numeric selection coerces to `None`.
    pub fn set(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Borough => self.borough = FacetValue::parse(value),
            FilterField::EventType => self.event_type = FacetValue::parse(value),
            FilterField::VenueKind => self.venue_kind = FacetValue::parse(value),
            FilterField::Cost => self.cost = FacetValue::parse(value),
            FilterField::Search => self.search = value.to_string(),
            FilterField::Date => self.date = DateWindow::parse(value),
            FilterField::Selected => self.selected = value.parse().ok(),
        }
    }

    /// Back to the all-permissive default, query and selection included.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Immutable copy for consumers.
    pub fn snapshot(&self) -> FilterState {
        self.clone()
    }

    /// True iff at least one field differs from the default — drives the
    /// active-filter indicator.
    pub fn is_active(&self) -> bool {
        *self != FilterState::default()
    }
}

fn facet_passes(facet: &FacetValue, field: Option<&str>) -> bool {
    match facet {
        FacetValue::All => true,
        FacetValue::Is(wanted) => field == Some(wanted.as_str()),
    }
}

fn search_passes(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |field: &Option<String>| {
        field
            .as_ref()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    };
    hit(&record.title) || hit(&record.description)
}

fn window_passes(record: &Record, window: DateWindow, today: NaiveDate) -> bool {
    // A record without complete, parsable date bounds is never excluded by
    // the window mode.
    let (start, end) = match (record.start_date, record.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return true,
    };

    match window {
        DateWindow::All => true,
        DateWindow::Today => start <= today && today <= end,
        DateWindow::ThisWeek => start < dates::end_of_week(today) && end >= today,
        DateWindow::ThisMonth => start <= dates::end_of_month(today) && end >= today,
    }
}

/// The filter predicate. All four stages must pass, checked in order:
/// staleness, categorical facets, free-text search, date window.
///
/// `today` is the per-pass reference instant; the caller computes it once
/// per redraw so staleness and the window checks agree within a pass.
pub fn matches(record: &Record, filters: &FilterState, today: NaiveDate) -> bool {
    // A finished event is gone no matter what else is selected. Records
    // with no usable end date are treated as ongoing.
    if let Some(end) = record.end_date {
        if end < today {
            return false;
        }
    }

    if !facet_passes(&filters.borough, record.borough.as_deref()) {
        return false;
    }
    if !facet_passes(&filters.event_type, record.event_type.as_deref()) {
        return false;
    }
    if !facet_passes(&filters.venue_kind, record.venue_kind.as_deref()) {
        return false;
    }
    if !facet_passes(&filters.cost, record.cost.as_deref()) {
        return false;
    }

    if !search_passes(record, &filters.search) {
        return false;
    }

    window_passes(record, filters.date, today)
}

/// Sorted, deduplicated values present for one facet — what a select
/// control offers. Sentinels were already normalized away at ingestion.
pub fn facet_options<F>(records: &[Record], field: F) -> Vec<String>
where
    F: Fn(&Record) -> Option<&str>,
{
    let values: BTreeSet<&str> = records.iter().filter_map(|r| field(r)).collect();
    values.into_iter().map(str::to_string).collect()
}
