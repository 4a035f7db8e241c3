use serde::Deserialize;

// Envelope of a CKAN datastore_search response:
//
// {
//   "success": true,
//   "result": {
//     "total": 1234,
//     "records": [ { "_id": 1, "titre": "...", ... }, ... ]
//   }
// }

#[derive(Debug, Deserialize)]
pub struct DatastoreResponse {
    pub success: bool,
    pub result: Option<DatastoreResult>,
}

#[derive(Debug, Deserialize)]
pub struct DatastoreResult {
    pub total: u64,
    #[serde(default)]
    pub records: Vec<RawRecord>,
}

/// One record exactly as the portal sends it. Everything except `_id` is
/// optional, and the portal is not shy about sending the literal string
/// "nan" where a value is missing — normalization happens in
/// `Record::from_raw`, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "_id")]
    pub id: u64,
    pub titre: Option<String>,
    pub description: Option<String>,
    pub arrondissement: Option<String>,
    pub type_evenement: Option<String>,
    pub emplacement: Option<String>,
    pub cout: Option<String>,
    pub public_cible: Option<String>,
    pub inscription: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
    pub lat: Option<LooseFloat>,
    pub long: Option<LooseFloat>,
    pub titre_adresse: Option<String>,
    pub adresse_principale: Option<String>,
    pub adresse_secondaire: Option<String>,
    pub code_postal: Option<String>,
    pub url_fiche: Option<String>,
}

/// Coordinates arrive sometimes as JSON numbers, sometimes as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseFloat {
    Num(f64),
    Text(String),
}

impl LooseFloat {
    /// Usable numeric value, if any. Rust happily parses the string "nan"
    /// into an f64 NaN, which is exactly the upstream missing-value
    /// sentinel, so non-finite values are rejected here.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseFloat::Num(n) => Some(*n),
            LooseFloat::Text(s) => s.trim().parse().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}
