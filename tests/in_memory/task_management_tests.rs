//! In-memory integration tests for task management operations.

use crate::test_helpers::{TestTaskService, in_memory_service};
use rstest::{fixture, rstest};
use taskboard::task::{
    domain::{Task, TaskCategory, TaskId, TaskLifeCycleState, TaskPriority},
    services::{ErrorKind, TaskManagementError},
};

#[fixture]
fn service() -> TestTaskService {
    in_memory_service("mtheis").expect("valid acting user")
}

/// Fetches a task that must exist.
///
/// # Errors
///
/// Returns an error if the lookup fails or the task is missing.
async fn fetch(service: &TestTaskService, id: TaskId) -> Result<Task, eyre::Report> {
    service
        .get_task_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("task {id} should exist"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_modify_and_remove_round_trip(service: TestTaskService) -> Result<(), eyre::Report> {
    let id = service
        .add_task(
            Task::new("Fix login bug")
                .with_category(TaskCategory::Bugfix)
                .with_priority(TaskPriority::High),
        )
        .await?;

    let created = fetch(&service, id).await?;
    eyre::ensure!(
        created.life_cycle_state() == TaskLifeCycleState::Undefined,
        "new task should start undefined"
    );
    eyre::ensure!(created.completion_rate() == 0, "new task should start at 0%");
    eyre::ensure!(
        created.audit().created_by().map(|a| a.as_str()) == Some("mtheis"),
        "creator should be the acting user"
    );

    let mut update = Task::new("Fix login bug")
        .with_category(TaskCategory::Bugfix)
        .with_life_cycle_state(TaskLifeCycleState::Completed)
        .with_completion_rate(100);
    update.set_completed_by_user_id(Some("mtheis".to_owned()));
    update.assign_id(id)?;
    service.modify_task(update).await?;

    let modified = fetch(&service, id).await?;
    eyre::ensure!(modified.completion_rate() == 100, "completion rate not updated");
    eyre::ensure!(
        modified.life_cycle_state() == TaskLifeCycleState::Completed,
        "lifecycle state not updated"
    );
    eyre::ensure!(modified.completed_by_user_id() == Some("mtheis"), "completing user not updated");
    eyre::ensure!(
        modified.audit().created_at() == created.audit().created_at(),
        "creation timestamp must not change"
    );
    eyre::ensure!(
        modified.audit().last_modified_at() > created.audit().last_modified_at(),
        "modification timestamp must advance"
    );

    service.remove_task(id).await?;
    eyre::ensure!(service.get_task_by_id(id).await?.is_none(), "removed task still present");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_state_accepts_any_transition(
    service: TestTaskService,
) -> Result<(), eyre::Report> {
    let id = service
        .add_task(Task::new("Ship release").with_life_cycle_state(TaskLifeCycleState::Completed))
        .await?;

    let mut reopened = Task::new("Ship release").with_life_cycle_state(TaskLifeCycleState::Proposed);
    reopened.assign_id(id)?;
    service.modify_task(reopened).await?;

    eyre::ensure!(
        fetch(&service, id).await?.life_cycle_state() == TaskLifeCycleState::Proposed,
        "lifecycle state not updated"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn later_modification_wins(service: TestTaskService) -> Result<(), eyre::Report> {
    let id = service.add_task(Task::new("Tune query")).await?;

    let mut first = Task::new("Tune query").with_completion_rate(30);
    first.assign_id(id)?;
    let mut second = Task::new("Tune query").with_completion_rate(60);
    second.assign_id(id)?;
    service.modify_task(first).await?;
    service.modify_task(second).await?;

    eyre::ensure!(
        fetch(&service, id).await?.completion_rate() == 60,
        "later modification should win"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn modifying_a_removed_task_reports_not_found(
    service: TestTaskService,
) -> Result<(), eyre::Report> {
    let id = service.add_task(Task::new("Short-lived")).await?;
    service.remove_task(id).await?;

    let mut update = Task::new("Short-lived");
    update.assign_id(id)?;
    let result = service.modify_task(update).await;

    let Err(error) = result else {
        return Err(eyre::eyre!("expected modification of a removed task to fail"));
    };
    eyre::ensure!(
        matches!(error, TaskManagementError::TaskNotFound(_)),
        "unexpected error {error:?}"
    );
    eyre::ensure!(error.kind() == ErrorKind::NotFound, "unexpected error kind");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn json_payload_can_be_submitted(service: TestTaskService) -> Result<(), eyre::Report> {
    let payload = r#"{
        "subject": "Fix login bug",
        "category": "BUGFIX",
        "priority": "HIGH",
        "estimatedEffort": 8,
        "affectedApplicationId": "cloudtrain"
    }"#;
    let task: Task = serde_json::from_str(payload)?;

    let id = service.add_task(task).await?;
    let stored = fetch(&service, id).await?;
    let json = serde_json::to_value(&stored)?;

    eyre::ensure!(json["id"] == id.to_string(), "id missing from JSON");
    eyre::ensure!(json["category"] == "BUGFIX", "category not serialized by name");
    eyre::ensure!(json["estimatedEffort"] == 8, "estimated effort lost");
    eyre::ensure!(json["createdBy"] == "mtheis", "createdBy missing from JSON");
    eyre::ensure!(json["lastModifiedBy"] == "mtheis", "lastModifiedBy missing from JSON");
    Ok(())
}
