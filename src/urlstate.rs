// src/urlstate.rs
//
// Bidirectional mapping between the filter state and the shareable query
// string. Parameter names match the public site's existing links.

use crate::domain::{DateWindow, FacetValue, FilterState};
use url::form_urlencoded;

/// Query-string form of `filters`. Only non-default fields are emitted, so
/// the canonical "no filters" state encodes to the empty string.
pub fn encode(filters: &FilterState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let FacetValue::Is(value) = &filters.borough {
        query.append_pair("arrondissement", value);
    }
    if let FacetValue::Is(value) = &filters.event_type {
        query.append_pair("type_evenement", value);
    }
    if let FacetValue::Is(value) = &filters.venue_kind {
        query.append_pair("emplacement", value);
    }
    if let FacetValue::Is(value) = &filters.cost {
        query.append_pair("cout", value);
    }
    if let Some(window) = filters.date.as_param() {
        query.append_pair("date", window);
    }
    if !filters.search.is_empty() {
        query.append_pair("search", &filters.search);
    }
    if let Some(id) = filters.selected {
        query.append_pair("event", &id.to_string());
    }

    query.finish()
}

/// Reads recognized parameters over `defaults`. Unknown names are ignored,
/// a non-numeric `event` soft-fails to no selection, and an unknown `date`
/// value falls back to the open window.
pub fn decode(query: &str, defaults: FilterState) -> FilterState {
    let mut filters = defaults;
    let query = query.strip_prefix('?').unwrap_or(query);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "arrondissement" => filters.borough = FacetValue::parse(&value),
            "type_evenement" => filters.event_type = FacetValue::parse(&value),
            "emplacement" => filters.venue_kind = FacetValue::parse(&value),
            "cout" => filters.cost = FacetValue::parse(&value),
            "date" => filters.date = DateWindow::parse(&value),
            "search" => filters.search = value.into_owned(),
            "event" => filters.selected = value.parse().ok(),
            _ => {}
        }
    }

    filters
}
