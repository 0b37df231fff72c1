use axum::extract::{Query, State};
use axum::Json;
use filecast_core::{basename, classify, list_directory, resolve, EntryInfo};

use crate::dto::{DirResponse, EntryQuery};
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_entry(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<EntryInfo>, AppError> {
    let full_path = resolve(state.root(), &query.path);
    let entry_type = classify(&full_path)?;
    let name = match full_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => basename(&full_path.to_string_lossy()).to_string(),
    };
    tracing::debug!("{} is {}", full_path.display(), entry_type);

    Ok(Json(EntryInfo::new(entry_type, &name)))
}

pub async fn get_dir(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<DirResponse>, AppError> {
    let full_path = resolve(state.root(), &query.path);
    let entry_type = classify(&full_path)?;
    if !entry_type.is_dir() {
        tracing::debug!("{} is {}, not dir", full_path.display(), entry_type);
        return Err(AppError::NotADirectory);
    }

    let entries = list_directory(&full_path)?;
    tracing::debug!("listed {} entries in {}", entries.len(), full_path.display());

    Ok(Json(DirResponse { entries }))
}
