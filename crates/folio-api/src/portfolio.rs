//! Handlers for the read-only portfolio endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/projects` | All projects, seed order |
//! | `GET`  | `/projects/category/:category` | Exact, case-sensitive match |
//! | `GET`  | `/projects/:id` | 404 if unknown or not a number |
//! | `GET`  | `/experiences` | |
//! | `GET`  | `/skills` | |

use axum::{
  Json,
  extract::{Path, State},
};
use folio_assistant::CompletionBackend;
use folio_core::{
  Id,
  portfolio::{Experience, Project, Skill},
  store::PortfolioStore,
};

use crate::{ApiState, error::ApiError};

// ─── Projects ─────────────────────────────────────────────────────────────────

/// `GET /projects`
pub async fn list_projects<S, B>(
  State(state): State<ApiState<S, B>>,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let projects = state
    .store
    .get_all_projects()
    .await
    .map_err(ApiError::internal("Failed to fetch projects"))?;
  Ok(Json(projects))
}

/// `GET /projects/category/:category`
pub async fn projects_by_category<S, B>(
  State(state): State<ApiState<S, B>>,
  Path(category): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let projects = state
    .store
    .get_projects_by_category(&category)
    .await
    .map_err(ApiError::internal("Failed to fetch projects by category"))?;
  Ok(Json(projects))
}

/// `GET /projects/:id`
pub async fn get_project<S, B>(
  State(state): State<ApiState<S, B>>,
  Path(raw_id): Path<String>,
) -> Result<Json<Project>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let id: Id = raw_id
    .parse()
    .map_err(|_| ApiError::NotFound("Project not found"))?;
  let project = state
    .store
    .get_project(id)
    .await
    .map_err(ApiError::internal("Failed to fetch project"))?
    .ok_or(ApiError::NotFound("Project not found"))?;
  Ok(Json(project))
}

// ─── Experiences ──────────────────────────────────────────────────────────────

/// `GET /experiences`
pub async fn list_experiences<S, B>(
  State(state): State<ApiState<S, B>>,
) -> Result<Json<Vec<Experience>>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let experiences = state
    .store
    .get_all_experiences()
    .await
    .map_err(ApiError::internal("Failed to fetch experiences"))?;
  Ok(Json(experiences))
}

// ─── Skills ───────────────────────────────────────────────────────────────────

/// `GET /skills`
pub async fn list_skills<S, B>(
  State(state): State<ApiState<S, B>>,
) -> Result<Json<Vec<Skill>>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let skills = state
    .store
    .get_all_skills()
    .await
    .map_err(ApiError::internal("Failed to fetch skills"))?;
  Ok(Json(skills))
}
