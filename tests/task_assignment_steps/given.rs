//! Given steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{
    api::dto::{CreateTaskBody, CreateUserBody},
    notification::adapters::memory::InMemoryMailer,
    user::domain::UserId,
};

#[given("the mail relay is unavailable")]
fn mail_relay_unavailable(world: &mut TaskAssignmentWorld) {
    *world = TaskAssignmentWorld::with_mailer(InMemoryMailer::failing());
}

#[given(r#"a registered user "{email}" with password "{password}""#)]
fn registered_user(
    world: &mut TaskAssignmentWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let body = CreateUserBody {
        first_name: Some("A".to_owned()),
        last_name: Some("B".to_owned()),
        email: Some(email),
        password: Some(password),
        admin_code: None,
    };
    run_async(world.api.create_user(body)).wrap_err("register user for scenario")?;
    Ok(())
}

#[given(r#"an administrator assigned "{text}" due "{deadline}" to user {owner:i64}"#)]
fn task_already_assigned(
    world: &mut TaskAssignmentWorld,
    text: String,
    deadline: String,
    owner: i64,
) -> Result<(), eyre::Report> {
    let body = CreateTaskBody {
        owner_id: Some(UserId::new(owner)),
        text: Some(text),
        deadline: Some(deadline),
    };
    let created =
        run_async(world.api.create_task(body)).wrap_err("assign task in scenario setup")?;
    world.last_created_task = Some(created);
    Ok(())
}
