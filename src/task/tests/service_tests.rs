//! Service orchestration tests for the six registry operations.

use std::collections::HashSet;
use std::sync::Arc;

use crate::auth::{AuthError, StaticTokenVerifier};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskId},
    services::{CreateTaskRequest, TaskRegistryError, TaskRegistryService, UpdateTaskRequest},
};
use rstest::{fixture, rstest};

const ADMIN_TOKEN: &str = "admin-token";
const VIEWER_TOKEN: &str = "viewer-token";

type TestService = TaskRegistryService<InMemoryTaskRepository, StaticTokenVerifier>;

#[fixture]
fn service() -> TestService {
    let verifier = StaticTokenVerifier::admin(ADMIN_TOKEN)
        .with_token(VIEWER_TOKEN, ["viewer".to_owned()]);
    TaskRegistryService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(verifier))
}

fn sample_request(patient_id: i32) -> CreateTaskRequest {
    CreateTaskRequest::new("Check vitals", "nursing", patient_id)
        .with_description("morning round")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_token_is_unauthenticated(service: TestService) {
    let result = service.get_task("nonsense", TaskId::from_i32(1)).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::Unauthenticated(AuthError::InvalidToken))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_token_is_unauthenticated(service: TestService) {
    let result = service.create_task("", sample_request(1)).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::Unauthenticated(AuthError::MissingToken))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_admin_role_is_denied(service: TestService) {
    let result = service.get_tasks_ids(VIEWER_TOKEN, 10, 0, None).await;
    assert!(matches!(result, Err(TaskRegistryError::PermissionDenied)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorization_runs_before_validation(service: TestService) {
    // An invalid window with an invalid token must fail authentication,
    // not validation.
    let result = service.get_tasks_ids("nonsense", 0, -1, None).await;
    assert!(matches!(result, Err(TaskRegistryError::Unauthenticated(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips_all_fields(service: TestService) {
    let created = service
        .create_task(ADMIN_TOKEN, sample_request(12))
        .await
        .expect("creation should succeed");
    assert!(created.id().value() >= 1);
    assert!(!created.complete());

    let fetched = service
        .get_task(ADMIN_TOKEN, created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
    assert_eq!(fetched.title().as_str(), "Check vitals");
    assert_eq!(fetched.description().as_str(), "morning round");
    assert_eq!(fetched.expertise().as_str(), "nursing");
    assert_eq!(fetched.patient_id().value(), 12);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_invalid_fields(service: TestService) {
    let request = CreateTaskRequest::new("", "nursing", 12);
    let result = service.create_task(ADMIN_TOKEN, request).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::Validation(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_ids(service: TestService) {
    let service = Arc::new(service);
    let mut handles = Vec::new();
    for patient in 1..=8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .create_task(ADMIN_TOKEN, sample_request(patient))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let task = handle
            .await
            .expect("task should not panic")
            .expect("creation should succeed");
        assert!(ids.insert(task.id()), "assigned ids must not collide");
    }
    assert_eq!(ids.len(), 8);
}

#[rstest]
#[case(0, 0)]
#[case(51, 0)]
#[case(10, -1)]
#[tokio::test(flavor = "multi_thread")]
async fn listing_rejects_out_of_bounds_windows(
    service: TestService,
    #[case] limit: i32,
    #[case] offset: i32,
) {
    let result = service.get_tasks_ids(ADMIN_TOKEN, limit, offset, None).await;
    assert!(matches!(result, Err(TaskRegistryError::Validation(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_pages_and_reports_total_independently(service: TestService) {
    for patient in 1..=3 {
        service
            .create_task(ADMIN_TOKEN, sample_request(patient))
            .await
            .expect("creation should succeed");
    }

    let first = service
        .get_tasks_ids(ADMIN_TOKEN, 2, 0, None)
        .await
        .expect("listing should succeed");
    assert_eq!(first.ids.len(), 2);
    assert_eq!(first.total, 3);

    // Total is invariant under window changes.
    let second = service
        .get_tasks_ids(ADMIN_TOKEN, 2, 2, None)
        .await
        .expect("listing should succeed");
    assert_eq!(second.ids.len(), 1);
    assert_eq!(second.total, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_parameter_is_a_no_op_passthrough(service: TestService) {
    service
        .create_task(ADMIN_TOKEN, sample_request(1))
        .await
        .expect("creation should succeed");

    let plain = service
        .get_tasks_ids(ADMIN_TOKEN, 10, 0, None)
        .await
        .expect("listing should succeed");
    let searched = service
        .get_tasks_ids(ADMIN_TOKEN, 10, 0, Some("vitals"))
        .await
        .expect("listing should succeed");
    assert_eq!(plain, searched);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_retrievable_by_id_but_hidden_from_listings(service: TestService) {
    let kept = service
        .create_task(ADMIN_TOKEN, sample_request(5))
        .await
        .expect("creation should succeed");
    let deleted = service
        .create_task(ADMIN_TOKEN, sample_request(5))
        .await
        .expect("creation should succeed");

    service
        .delete_task(ADMIN_TOKEN, deleted.id())
        .await
        .expect("deletion should succeed");

    let fetched = service
        .get_task(ADMIN_TOKEN, deleted.id())
        .await
        .expect("by-id lookup bypasses the soft-delete filter");
    assert!(fetched.is_deleted());

    let page = service
        .get_tasks_ids(ADMIN_TOKEN, 50, 0, None)
        .await
        .expect("listing should succeed");
    assert_eq!(page.ids, vec![kept.id()]);
    assert_eq!(page.total, 1);

    let by_patient = service
        .get_tasks_by_patient(ADMIN_TOKEN, 5)
        .await
        .expect("per-patient listing should succeed");
    assert_eq!(by_patient.len(), 1);
    assert_eq!(by_patient.first().map(Task::id), Some(kept.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_is_not_found(service: TestService) {
    let result = service.delete_task(ADMIN_TOKEN, TaskId::from_i32(99)).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::NotFound(id)) if id == TaskId::from_i32(99)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_delete_is_not_found(service: TestService) {
    let task = service
        .create_task(ADMIN_TOKEN, sample_request(2))
        .await
        .expect("creation should succeed");
    service
        .delete_task(ADMIN_TOKEN, task.id())
        .await
        .expect("first deletion should succeed");
    let result = service.delete_task(ADMIN_TOKEN, task.id()).await;
    assert!(matches!(result, Err(TaskRegistryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields_but_preserves_created_at(service: TestService) {
    let created = service
        .create_task(ADMIN_TOKEN, sample_request(12))
        .await
        .expect("creation should succeed");

    let request = UpdateTaskRequest::new(
        created.id().value(),
        true,
        "Check vitals twice",
        "nursing",
        14,
    );
    let updated_id = service
        .update_task(ADMIN_TOKEN, request)
        .await
        .expect("update should succeed");
    assert_eq!(updated_id, created.id());

    let fetched = service
        .get_task(ADMIN_TOKEN, created.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.complete());
    assert_eq!(fetched.title().as_str(), "Check vitals twice");
    assert_eq!(fetched.patient_id().value(), 14);
    // Omitted description resets to absent; system fields are untouched.
    assert!(fetched.description().is_empty());
    assert_eq!(fetched.created_at(), created.created_at());
    assert!(!fetched.is_deleted());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_requires_task_id(service: TestService) {
    let request = UpdateTaskRequest::new(0, false, "Title", "nursing", 1);
    let result = service.update_task(ADMIN_TOKEN, request).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::Validation(
            TaskDomainError::MissingTaskId
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_is_not_found(service: TestService) {
    let request = UpdateTaskRequest::new(404, false, "Title", "nursing", 1);
    let result = service.update_task(ADMIN_TOKEN, request).await;
    assert!(matches!(result, Err(TaskRegistryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_deleted_task_is_not_found(service: TestService) {
    let task = service
        .create_task(ADMIN_TOKEN, sample_request(3))
        .await
        .expect("creation should succeed");
    service
        .delete_task(ADMIN_TOKEN, task.id())
        .await
        .expect("deletion should succeed");

    let request = UpdateTaskRequest::new(task.id().value(), true, "Title", "nursing", 3);
    let result = service.update_task(ADMIN_TOKEN, request).await;
    assert!(matches!(result, Err(TaskRegistryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_malformed_created_at(service: TestService) {
    let task = service
        .create_task(ADMIN_TOKEN, sample_request(3))
        .await
        .expect("creation should succeed");

    let request = UpdateTaskRequest::new(task.id().value(), false, "Title", "nursing", 3)
        .with_created_at("not-a-date");
    let result = service.update_task(ADMIN_TOKEN, request).await;
    assert!(matches!(
        result,
        Err(TaskRegistryError::Validation(
            TaskDomainError::InvalidCreatedAt(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_by_patient_returns_empty_list_for_unknown_patient(service: TestService) {
    let tasks = service
        .get_tasks_by_patient(ADMIN_TOKEN, 404)
        .await
        .expect("per-patient listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_by_patient_filters_to_the_requested_patient(service: TestService) {
    for patient in [7, 7, 8] {
        service
            .create_task(ADMIN_TOKEN, sample_request(patient))
            .await
            .expect("creation should succeed");
    }

    let tasks = service
        .get_tasks_by_patient(ADMIN_TOKEN, 7)
        .await
        .expect("per-patient listing should succeed");
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|task| task.patient_id().value() == 7));
}
