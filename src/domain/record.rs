use crate::api::RawRecord;
use crate::domain::dates;
use chrono::NaiveDate;

/// One civic event, normalized at ingestion and immutable afterwards.
///
/// Normalization does two things the wire shape leaves to consumers:
/// the upstream's "nan" sentinel (and empty strings) become `None`, and
/// date fields are parsed once so filtering never re-parses per pass. The
/// raw date strings are kept alongside for popup display.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,

    pub borough: Option<String>,
    pub event_type: Option<String>,
    pub venue_kind: Option<String>,
    pub cost: Option<String>,
    pub audience: Option<String>,
    pub registration: Option<String>,

    pub start_date_raw: Option<String>,
    pub end_date_raw: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    /// Present only when both lat and long are usable; records without a
    /// coordinate are never rendered.
    pub coord: Option<(f64, f64)>,

    pub address_title: Option<String>,
    pub address_main: Option<String>,
    pub address_secondary: Option<String>,
    pub postal_code: Option<String>,

    pub info_url: Option<String>,
}

/// Empty strings and the upstream "nan" sentinel mean "no value".
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty() && s != "nan")
}

impl Record {
    pub fn from_raw(raw: RawRecord) -> Record {
        let start_date_raw = clean(raw.date_debut);
        let end_date_raw = clean(raw.date_fin);
        let start_date = start_date_raw.as_deref().and_then(dates::parse_loose);
        let end_date = end_date_raw.as_deref().and_then(dates::parse_loose);

        let coord = match (
            raw.lat.as_ref().and_then(|v| v.as_f64()),
            raw.long.as_ref().and_then(|v| v.as_f64()),
        ) {
            (Some(lat), Some(long)) => Some((lat, long)),
            _ => None,
        };

        Record {
            id: raw.id,
            title: clean(raw.titre),
            description: clean(raw.description),
            borough: clean(raw.arrondissement),
            event_type: clean(raw.type_evenement),
            venue_kind: clean(raw.emplacement),
            cost: clean(raw.cout),
            audience: clean(raw.public_cible),
            registration: clean(raw.inscription),
            start_date_raw,
            end_date_raw,
            start_date,
            end_date,
            coord,
            address_title: clean(raw.titre_adresse),
            address_main: clean(raw.adresse_principale),
            address_secondary: clean(raw.adresse_secondaire),
            postal_code: clean(raw.code_postal),
            info_url: clean(raw.url_fiche),
        }
    }
}
