//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use chrono::{TimeDelta, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskhub::task::{
    domain::{CategoryFilter, StatusFilter, TaskFilter},
    services::AddTaskRequest,
};

#[when(r#"the board is filtered by status "{status}" and category "{category}""#)]
fn filter_board(
    world: &mut TaskBoardWorld,
    status: String,
    category: String,
) -> Result<(), eyre::Report> {
    let status_filter = StatusFilter::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let category_filter = CategoryFilter::try_from(category.as_str())
        .map_err(|err| eyre::eyre!("invalid category in scenario: {err}"))?;
    world.filter = TaskFilter::new()
        .with_status(status_filter)
        .with_category(category_filter);
    world.snapshot = Some(run_async(world.service.load()));
    Ok(())
}

#[when(r#"the board is searched for "{query}""#)]
fn search_board(world: &mut TaskBoardWorld, query: String) {
    world.filter = TaskFilter::new().with_search(query);
    world.snapshot = Some(run_async(world.service.load()));
}

#[when(r#"the task titled "{title}" is toggled"#)]
fn toggle_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let update =
        run_async(world.service.toggle_task(&task)).wrap_err("toggle task in scenario")?;
    world.snapshot = Some(update.snapshot);
    Ok(())
}

#[when(r#"a task titled "{title}" is added"#)]
fn add_task(world: &mut TaskBoardWorld, title: String) {
    let result = run_async(world.service.add_task(AddTaskRequest::new(title)));
    world.last_add_result = Some(result);
    world.snapshot = Some(run_async(world.service.load()));
}

#[when(r#"an active task titled "{title}" due yesterday is added"#)]
fn add_task_due_yesterday(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let yesterday = (Utc::now() - TimeDelta::days(1)).date_naive();
    let update = run_async(
        world
            .service
            .add_task(AddTaskRequest::new(title).with_due_date(yesterday)),
    )
    .wrap_err("add overdue task in scenario")?;
    world.snapshot = Some(update.snapshot);
    Ok(())
}
