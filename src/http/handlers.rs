use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entity::{Employee, EmployeeForm, EmployeeInput};
use crate::error::{HrError, Result};
use crate::storage::{Database, EmployeeStore};

use super::extract::{ApiForm, ApiJson, ApiPath};
use super::page::render_index;
use super::AppState;

type ApiResult<T> = std::result::Result<Json<T>, HrError>;

/// Run `f` against a fresh database session on the blocking pool.
///
/// The session is dropped when `f` returns, whatever the outcome.
async fn in_session<T, F>(db: &Database, f: F) -> Result<T>
where
    F: FnOnce(&EmployeeStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db = db.clone();
    tokio::task::spawn_blocking(move || {
        let store = db.session()?;
        f(&store)
    })
    .await
    .map_err(|e| HrError::Storage(format!("Database task failed: {}", e)))?
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub query: String,
    pub ai_response: String,
}

pub async fn index(State(state): State<AppState>) -> std::result::Result<Html<String>, HrError> {
    let roster = in_session(&state.db, |store| store.list()).await?;
    Ok(Html(render_index(&roster, state.chat.is_some())))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let roster = in_session(&state.db, |store| store.list()).await?;
    Ok(Json(roster))
}

pub async fn get_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Employee> {
    let employee = in_session(&state.db, move |store| store.get(id))
        .await?
        .ok_or(HrError::NotFound(id))?;
    Ok(Json(employee))
}

pub async fn create_employee(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<EmployeeForm>,
) -> std::result::Result<(StatusCode, Json<Created>), HrError> {
    // Read-then-write: two concurrent requests for the same name can both pass this check.
    let employee = in_session(&state.db, move |store| {
        if store
            .find_by_name(&form.first_name, &form.last_name)?
            .is_some()
        {
            return Err(HrError::Duplicate {
                first_name: form.first_name,
                last_name: form.last_name,
            });
        }
        let input = form.parse()?;
        store.create(&input)
    })
    .await?;

    tracing::info!(id = employee.id, name = %employee.full_name(), "Employee created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Employee added".to_string(),
            id: employee.id,
        }),
    ))
}

pub async fn update_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<EmployeeInput>,
) -> ApiResult<Employee> {
    input.validate()?;

    let employee = in_session(&state.db, move |store| store.update(id, &input))
        .await?
        .ok_or(HrError::NotFound(id))?;

    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Deleted> {
    let employee = in_session(&state.db, move |store| store.delete(id))
        .await?
        .ok_or(HrError::NotFound(id))?;

    tracing::info!(id, name = %employee.full_name(), "Employee deleted");

    Ok(Json(Deleted {
        success: true,
        message: "Employee deleted".to_string(),
    }))
}

pub async fn chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ChatQuery>,
) -> ApiResult<ChatReply> {
    let Some(client) = state.chat.as_ref() else {
        return Err(HrError::MissingApiKey);
    };
    if body.query.trim().is_empty() {
        return Err(HrError::Validation(vec!["query is empty".to_string()]));
    }

    let roster = in_session(&state.db, |store| store.list()).await?;
    let answer = client
        .ask(&roster, &body.query)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Chat request failed"))?;

    Ok(Json(ChatReply {
        query: body.query,
        ai_response: answer,
    }))
}
