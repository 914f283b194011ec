use serde::{Deserialize, Serialize};

/// A course offered by the institute, as returned by `GET /courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// A faculty member, as returned by `GET /faculty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub designation: String,
    pub subject: String,
    pub experience: String,
    #[serde(default)]
    pub image: String,
}

/// `{ "data": [...] }` wrapper used by the catalog endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}
