mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::{
    fetch_all_records, page_offsets, DatastoreClient, RecordSource, API_BASE_URL, RECORDS_PER_PAGE,
    RESOURCE_ID,
};
pub use models::{DatastoreResponse, DatastoreResult, LooseFloat, RawRecord};
