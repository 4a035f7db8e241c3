pub mod dates;
mod filters;
mod record;

pub use filters::{facet_options, matches, DateWindow, FacetValue, FilterField, FilterState};
pub use record::Record;
