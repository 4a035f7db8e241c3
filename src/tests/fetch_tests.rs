use crate::api::{
    fetch_all_records, page_offsets, ApiError, DatastoreResponse, RawRecord, RecordSource,
    RECORDS_PER_PAGE,
};
use crate::domain::Record;
use std::sync::Mutex;

fn raw_record(id: u64) -> RawRecord {
    serde_json::from_value(serde_json::json!({ "_id": id })).unwrap()
}

/// In-memory source holding `total` records with ids equal to their offset.
struct FakeSource {
    total: usize,
    fail_offsets: Vec<usize>,
    seen_offsets: Mutex<Vec<usize>>,
}

impl FakeSource {
    fn new(total: usize) -> Self {
        FakeSource {
            total,
            fail_offsets: Vec::new(),
            seen_offsets: Mutex::new(Vec::new()),
        }
    }
}

impl RecordSource for FakeSource {
    fn total_count(&self) -> Result<usize, ApiError> {
        Ok(self.total)
    }

    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawRecord>, ApiError> {
        self.seen_offsets.lock().unwrap().push(offset);
        if self.fail_offsets.contains(&offset) {
            return Err(ApiError::Data("bad page".into()));
        }
        let end = self.total.min(offset + limit);
        Ok((offset..end).map(|i| raw_record(i as u64)).collect())
    }
}

struct FailingProbe;

impl RecordSource for FailingProbe {
    fn total_count(&self) -> Result<usize, ApiError> {
        Err(ApiError::Network("connection refused".into()))
    }

    fn fetch_page(&self, _offset: usize, _limit: usize) -> Result<Vec<RawRecord>, ApiError> {
        panic!("no pages should be requested after a failed count probe");
    }
}

fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn offsets_cover_the_dataset_at_page_size() {
    assert_eq!(page_offsets(1200, 500), vec![0, 500, 1000]);
    assert_eq!(page_offsets(500, 500), vec![0]);
    assert_eq!(page_offsets(501, 500), vec![0, 500]);
    assert_eq!(page_offsets(0, 500), Vec::<usize>::new());
}

#[test]
fn fetch_issues_one_request_per_page_and_merges_in_offset_order() {
    let source = FakeSource::new(1200);
    let records = fetch_all_records(&source).unwrap();

    let mut seen = source.seen_offsets.lock().unwrap().clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 500, 1000]);

    // Merge order follows requested offsets, so ids come back ascending.
    assert_eq!(records.len(), 1200);
    assert_eq!(ids(&records), (0..1200).collect::<Vec<u64>>());
}

#[test]
fn a_failed_page_contributes_nothing_without_reordering_the_rest() {
    let mut source = FakeSource::new(1200);
    source.fail_offsets.push(500);

    let records = fetch_all_records(&source).unwrap();
    assert_eq!(records.len(), 700);

    let expected: Vec<u64> = (0..500).chain(1000..1200).collect();
    assert_eq!(ids(&records), expected);
}

#[test]
fn a_failed_count_probe_is_fatal() {
    let err = fetch_all_records(&FailingProbe).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn empty_dataset_fetches_no_pages() {
    let source = FakeSource::new(0);
    let records = fetch_all_records(&source).unwrap();
    assert!(records.is_empty());
    assert!(source.seen_offsets.lock().unwrap().is_empty());
}

#[test]
fn page_size_is_the_upstream_page_size() {
    assert_eq!(RECORDS_PER_PAGE, 500);
}

#[test]
fn envelope_parses_and_normalizes_like_the_portal_sends_it() {
    let body = r#"{
        "success": true,
        "result": {
            "total": 2,
            "records": [
                {
                    "_id": 11,
                    "titre": "Marché de nuit",
                    "description": "nan",
                    "arrondissement": "Ville-Marie",
                    "type_evenement": "Marché",
                    "emplacement": "nan",
                    "cout": "Gratuit",
                    "date_debut": "2025-07-01",
                    "date_fin": "pas encore décidé",
                    "lat": "45.5019",
                    "long": -73.5674,
                    "url_fiche": "https://example.org/11"
                },
                {
                    "_id": 12,
                    "titre": "Sans coordonnées",
                    "lat": "nan"
                }
            ]
        }
    }"#;

    let envelope: DatastoreResponse = serde_json::from_str(body).unwrap();
    assert!(envelope.success);
    let result = envelope.result.unwrap();
    assert_eq!(result.total, 2);

    let first = Record::from_raw(result.records[0].clone());
    assert_eq!(first.id, 11);
    assert_eq!(first.title.as_deref(), Some("Marché de nuit"));
    // "nan" sentinels are gone after ingestion.
    assert_eq!(first.description, None);
    assert_eq!(first.venue_kind, None);
    // String lat, numeric long: both usable.
    assert_eq!(first.coord, Some((45.5019, -73.5674)));
    // Unparsable end date: raw string kept for display, parsed side empty.
    assert_eq!(first.end_date_raw.as_deref(), Some("pas encore décidé"));
    assert_eq!(first.end_date, None);
    assert_eq!(first.start_date, Some(crate::tests::utils::day("2025-07-01")));

    let second = Record::from_raw(result.records[1].clone());
    // lat unusable, long missing: never rendered.
    assert_eq!(second.coord, None);
}

#[test]
fn unsuccessful_envelope_has_no_records_to_offer() {
    let body = r#"{ "success": false }"#;
    let envelope: DatastoreResponse = serde_json::from_str(body).unwrap();
    assert!(!envelope.success);
    assert!(envelope.result.is_none());
}
