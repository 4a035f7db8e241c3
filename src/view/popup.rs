use crate::domain::Record;
use maud::{html, Markup};

/// Popup content for one marker. Lines appear only when the record carries
/// the field; the end date is dropped when it just repeats the start date.
pub fn popup_content(record: &Record) -> Markup {
    let has_address = record.address_title.is_some()
        || record.address_main.is_some()
        || record.address_secondary.is_some()
        || record.postal_code.is_some();

    html! {
        div class="event-popup" {
            b { (record.title.as_deref().unwrap_or("Sans titre")) }
            @if let Some(description) = &record.description {
                p { (description) }
            }
            hr;
            @if let Some(borough) = &record.borough {
                b { "Arrondissement : " } (borough) br;
            }
            @if let Some(event_type) = &record.event_type {
                b { "Type : " } (event_type) br;
            }
            @if let Some(start) = &record.start_date_raw {
                b { "Date de début : " } (start) br;
            }
            @if let Some(end) = &record.end_date_raw {
                @if record.start_date_raw.as_deref() != Some(end.as_str()) {
                    b { "Date de fin : " } (end) br;
                }
            }
            @if let Some(audience) = &record.audience {
                b { "Public cible : " } (audience) br;
            }
            @if let Some(venue) = &record.venue_kind {
                b { "Emplacement : " } (venue) br;
            }
            @if let Some(registration) = &record.registration {
                b { "Inscription : " } (registration) br;
            }
            @if let Some(cost) = &record.cost {
                b { "Coût : " } (cost) br;
            }
            @if has_address {
                br; b { "Adresse :" } br;
                @if let Some(line) = &record.address_title { (line) br; }
                @if let Some(line) = &record.address_main { (line) br; }
                @if let Some(line) = &record.address_secondary { (line) br; }
                @if let Some(line) = &record.postal_code { (line) br; }
            }
            @if let Some(url) = &record.info_url {
                br;
                a href=(url) target="_blank" { "Page d'information officielle" }
            }
        }
    }
}
