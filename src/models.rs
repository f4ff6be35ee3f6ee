use serde::{Deserialize, Serialize};

/// One entry in the collection, keyed by unique numeric `ID`.
///
/// Field names on the wire are capitalized, matching the backing file
/// format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Cast")]
    pub cast: Vec<String>,
}

/// The full on-disk collection: every record, wrapped under a `todos` key.
///
/// This is the entire backing file format. Insertion order of `todos` is
/// the sole ordering and is preserved across every read/write cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub todos: Vec<Record>,
}

/// Partial record body for PUT requests.
///
/// Only the fields present in the request are applied; everything else on
/// the stored record is retained. The `ID` field is deliberately absent:
/// the path parameter is authoritative and records cannot be re-keyed.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct RecordPatch {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Cast")]
    pub cast: Option<Vec<String>>,
}

impl RecordPatch {
    /// Shallow-merge this patch into an existing record.
    pub fn apply(self, record: &mut Record) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(rating) = self.rating {
            record.rating = rating;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(genre) = self.genre {
            record.genre = genre;
        }
        if let Some(cast) = self.cast {
            record.cast = cast;
        }
    }
}

/// Confirmation body for successful mutations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
