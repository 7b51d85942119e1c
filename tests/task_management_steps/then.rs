//! Then steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskLifeCycleState, services::ErrorKind};

#[then("the task can be retrieved by its identifier")]
fn task_retrievable_by_id(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = world.fetch_created()?;
    eyre::ensure!(
        task.id() == Some(world.created_id()?),
        "retrieved task has a different identifier"
    );
    Ok(())
}

#[then(r#"the task has lifecycle state "{state}" and completion rate {rate:u8}"#)]
fn task_has_state_and_rate(world: &TaskWorld, state: String, rate: u8) -> Result<(), eyre::Report> {
    let task = world.fetch_created()?;
    let expected = TaskLifeCycleState::try_from(state.as_str())?;
    eyre::ensure!(
        task.life_cycle_state() == expected,
        "expected lifecycle state {expected}, found {}",
        task.life_cycle_state()
    );
    eyre::ensure!(
        task.completion_rate() == rate,
        "expected completion rate {rate}, found {}",
        task.completion_rate()
    );
    Ok(())
}

#[then(r#"the task was created and last modified by "{user_id}""#)]
fn task_audited_by(world: &TaskWorld, user_id: String) -> Result<(), eyre::Report> {
    let task = world.fetch_created()?;
    let audit = task.audit();
    eyre::ensure!(
        audit.created_by().map(|actor| actor.as_str()) == Some(user_id.as_str()),
        "unexpected creator {:?}",
        audit.created_by()
    );
    eyre::ensure!(
        audit.last_modified_by() == audit.created_by(),
        "creation and modification actors differ"
    );
    eyre::ensure!(
        audit.last_modified_at() == audit.created_at(),
        "creation and modification timestamps differ"
    );
    Ok(())
}

#[then("the request fails with a validation error")]
fn request_fails_validation(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    let Err(error) = result else {
        return Err(eyre::eyre!("expected task creation to fail"));
    };
    eyre::ensure!(
        error.kind() == ErrorKind::Validation,
        "expected a validation error, got {error:?}"
    );
    Ok(())
}

#[then("no task is stored")]
fn no_task_stored(world: &TaskWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service()?.get_all_tasks())?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}

#[then("the task has completion rate {rate:u8}")]
fn task_has_rate(world: &TaskWorld, rate: u8) -> Result<(), eyre::Report> {
    let task = world.fetch_created()?;
    eyre::ensure!(
        task.completion_rate() == rate,
        "expected completion rate {rate}, found {}",
        task.completion_rate()
    );
    Ok(())
}

#[then("the last modification timestamp has advanced")]
fn modification_timestamp_advanced(world: &TaskWorld) -> Result<(), eyre::Report> {
    let before = world
        .created_snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation snapshot in scenario world"))?;
    let after = world.fetch_created()?;
    eyre::ensure!(
        after.audit().last_modified_at() > before.audit().last_modified_at(),
        "modification timestamp did not advance"
    );
    eyre::ensure!(
        after.audit().created_at() == before.audit().created_at(),
        "creation timestamp changed"
    );
    Ok(())
}

#[then("the removal succeeds")]
fn removal_succeeds(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_remove_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing remove result in scenario world"))?;
    if let Err(error) = result {
        return Err(eyre::eyre!("unexpected removal failure: {error}"));
    }
    Ok(())
}

#[then("the unknown task cannot be retrieved")]
fn unknown_task_missing(world: &TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .unknown_id
        .ok_or_else(|| eyre::eyre!("missing unknown task id in scenario world"))?;
    let found = run_async(world.service()?.get_task_by_id(id))?;
    eyre::ensure!(found.is_none(), "unknown task {id} unexpectedly found");
    Ok(())
}
