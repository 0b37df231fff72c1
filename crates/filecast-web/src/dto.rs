use filecast_core::EntryInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct DirResponse {
    pub entries: Vec<EntryInfo>,
}
