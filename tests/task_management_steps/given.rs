//! Given steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use crate::test_helpers::in_memory_service;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::{Task, TaskCategory, TaskPriority};

#[given(r#"the acting user "{user_id}""#)]
fn acting_user(world: &mut TaskWorld, user_id: String) -> Result<(), eyre::Report> {
    world.service = Some(in_memory_service(&user_id).wrap_err("build task service")?);
    Ok(())
}

#[given(r#"a task with subject "{subject}" in category "{category}" with priority "{priority}""#)]
fn task_with_classification(
    world: &mut TaskWorld,
    subject: String,
    category: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = Task::new(subject)
        .with_category(TaskCategory::try_from(category.as_str())?)
        .with_priority(TaskPriority::try_from(priority.as_str())?);
    world.pending_task = Some(task);
    Ok(())
}

#[given("a task without a subject")]
fn task_without_subject(world: &mut TaskWorld) {
    world.pending_task = Some(Task::new(""));
}

#[given("the task has been added")]
fn task_has_been_added(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let task = world
        .pending_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let id = run_async(world.service()?.add_task(task)).wrap_err("add initial task")?;
    world.created_id = Some(id);
    world.created_snapshot = Some(world.fetch_created()?);
    Ok(())
}
