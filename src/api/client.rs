use crate::api::models::{DatastoreResponse, RawRecord};
use crate::api::ApiError;
use crate::domain::Record;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

pub const API_BASE_URL: &str = "https://donnees.montreal.ca/api/3/action/datastore_search";
pub const RESOURCE_ID: &str = "6decf611-6f11-4f34-bb36-324d804c9bad";
pub const RECORDS_PER_PAGE: usize = 500;

/// Where pages of raw records come from. The reqwest client below is the real
/// implementation; tests substitute in-memory sources.
pub trait RecordSource {
    /// Total number of records the source holds (the limit=1 count probe).
    fn total_count(&self) -> Result<usize, ApiError>;

    /// One page of records starting at `offset`.
    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawRecord>, ApiError>;
}

pub struct DatastoreClient {
    client: Client,
    base_url: String,
    resource_id: String,
}

impl DatastoreClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_endpoint(API_BASE_URL, RESOURCE_ID)
    }

    pub fn with_endpoint(base_url: &str, resource_id: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            resource_id: resource_id.to_string(),
        })
    }

    fn query(&self, limit: usize, offset: usize) -> Result<DatastoreResponse, ApiError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("resource_id", self.resource_id.clone()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Network(format!("datastore HTTP {status}")));
        }

        resp.json::<DatastoreResponse>()
            .map_err(|e| ApiError::Data(e.to_string()))
    }
}

impl RecordSource for DatastoreClient {
    fn total_count(&self) -> Result<usize, ApiError> {
        let resp = self.query(1, 0)?;
        if !resp.success {
            return Err(ApiError::Data("count probe returned success=false".into()));
        }
        let result = resp
            .result
            .ok_or_else(|| ApiError::Data("count probe missing result".into()))?;
        Ok(result.total as usize)
    }

    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawRecord>, ApiError> {
        let resp = self.query(limit, offset)?;
        if !resp.success {
            return Err(ApiError::Data(format!(
                "page at offset {offset} returned success=false"
            )));
        }
        Ok(resp.result.map(|r| r.records).unwrap_or_default())
    }
}

/// Offsets of the pages needed to cover `[0, total)` at `page_size`.
pub fn page_offsets(total: usize, page_size: usize) -> Vec<usize> {
    (0..total).step_by(page_size).collect()
}

/// Fetches the whole dataset: count probe first, then every page in parallel,
/// merged in ascending-offset order so the result is deterministic no matter
/// which request finishes first.
///
/// A page that fails only drops its own records; a failed count probe aborts
/// the fetch.
pub fn fetch_all_records<S>(source: &S) -> Result<Vec<Record>, ApiError>
where
    S: RecordSource + Sync,
{
    let total = source.total_count()?;
    eprintln!("📄 datastore reports {total} records");

    let offsets = page_offsets(total, RECORDS_PER_PAGE);

    let pages: Vec<Vec<RawRecord>> = std::thread::scope(|scope| {
        let handles: Vec<_> = offsets
            .iter()
            .map(|&offset| scope.spawn(move || source.fetch_page(offset, RECORDS_PER_PAGE)))
            .collect();

        handles
            .into_iter()
            .zip(&offsets)
            .map(|(handle, offset)| match handle.join() {
                Ok(Ok(records)) => records,
                Ok(Err(e)) => {
                    eprintln!("⚠️ page at offset {offset} dropped: {e}");
                    Vec::new()
                }
                Err(_) => {
                    eprintln!("⚠️ page at offset {offset} dropped: fetch thread panicked");
                    Vec::new()
                }
            })
            .collect()
    });

    let mut records = Vec::with_capacity(total);
    for raw in pages.into_iter().flatten() {
        records.push(Record::from_raw(raw));
    }

    eprintln!("✅ fetched {} records", records.len());
    Ok(records)
}
