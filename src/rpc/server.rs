//! HTTP transport mapping RPC routes onto the registry service.
//!
//! Each operation is a POST route under `/rpc/` taking and returning JSON.
//! Handlers stay thin: decode, delegate, encode. All authorization and
//! validation lives in the service so every transport shares one contract.

use crate::auth::TokenVerifier;
use crate::rpc::status::RpcError;
use crate::rpc::wire;
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskRegistryService;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Builds the RPC router over the given registry service.
pub fn router<R, V>(service: Arc<TaskRegistryService<R, V>>) -> Router
where
    R: TaskRepository + 'static,
    V: TokenVerifier + 'static,
{
    Router::new()
        .route("/rpc/get_task", post(get_task::<R, V>))
        .route("/rpc/get_tasks_ids", post(get_tasks_ids::<R, V>))
        .route("/rpc/create_task", post(create_task::<R, V>))
        .route("/rpc/update_task", post(update_task::<R, V>))
        .route("/rpc/delete_task", post(delete_task::<R, V>))
        .route(
            "/rpc/get_tasks_by_patient",
            post(get_tasks_by_patient::<R, V>),
        )
        .with_state(service)
}

async fn get_task<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::GetTaskRequest>,
) -> Result<Json<wire::GetTaskResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    let task = service
        .get_task(&request.token, TaskId::from_i32(request.id))
        .await?;
    Ok(Json(wire::GetTaskResponse {
        task: wire::TaskDto::from_task(&task),
    }))
}

async fn get_tasks_ids<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::GetTasksIdsRequest>,
) -> Result<Json<wire::GetTasksIdsResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    let page = service
        .get_tasks_ids(
            &request.token,
            request.limit,
            request.offset,
            request.search.as_deref(),
        )
        .await?;
    Ok(Json(wire::GetTasksIdsResponse {
        count: page.total,
        results: page.ids.into_iter().map(TaskId::value).collect(),
    }))
}

async fn create_task<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::CreateTaskRequest>,
) -> Result<Json<wire::CreateTaskResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    let token = request.token.clone();
    let task = service
        .create_task(&token, request.into_create_request())
        .await?;
    Ok(Json(wire::CreateTaskResponse {
        id: task.id().value(),
    }))
}

async fn update_task<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::UpdateTaskRequest>,
) -> Result<Json<wire::UpdateTaskResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    let id = service
        .update_task(&request.token, request.task.into_update_request())
        .await?;
    Ok(Json(wire::UpdateTaskResponse { id: id.value() }))
}

async fn delete_task<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::DeleteTaskRequest>,
) -> Result<Json<wire::DeleteTaskResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    service
        .delete_task(&request.token, TaskId::from_i32(request.id))
        .await?;
    Ok(Json(wire::DeleteTaskResponse {}))
}

async fn get_tasks_by_patient<R, V>(
    State(service): State<Arc<TaskRegistryService<R, V>>>,
    Json(request): Json<wire::GetTasksByPatientRequest>,
) -> Result<Json<wire::GetTasksByPatientResponse>, RpcError>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    let tasks = service
        .get_tasks_by_patient(&request.token, request.patient_id)
        .await?;
    Ok(Json(wire::GetTasksByPatientResponse {
        tasks: tasks.iter().map(wire::TaskDto::from_task).collect(),
    }))
}
