//! In-memory integration tests for account management.

use super::helpers::{ADMIN_CODE, Board, board, signup};
use rstest::rstest;
use taskboard::{
    api::{
        ApiError,
        dto::{CreateUserBody, LoginBody, UpdateUserBody},
    },
    user::domain::{Role, UserId},
};

fn login_body(email: &str, password: &str) -> LoginBody {
    LoginBody {
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_lifecycle_from_signup_to_deletion(board: Board) -> Result<(), eyre::Report> {
    let created = board
        .api
        .create_user(signup("Ada", "Lovelace", "ada@example.com", "engine"))
        .await?;
    eyre::ensure!(created.id == UserId::new(1), "first user should get id 1");

    let identity = board
        .api
        .login(login_body("ada@example.com", "engine"))
        .await?;
    eyre::ensure!(identity.id == created.id, "login should identify the user");
    eyre::ensure!(identity.role == Role::User, "default role should be user");

    board
        .api
        .update_user(
            created.id,
            UpdateUserBody {
                first_name: Some("Augusta".to_owned()),
                last_name: Some("King".to_owned()),
                email: Some("augusta@example.com".to_owned()),
                role: Some("admin".to_owned()),
            },
        )
        .await?;

    let old_address = board
        .api
        .login(login_body("ada@example.com", "engine"))
        .await;
    eyre::ensure!(
        old_address == Err(ApiError::InvalidCredentials),
        "old address should no longer log in"
    );
    let promoted = board
        .api
        .login(login_body("augusta@example.com", "engine"))
        .await?;
    eyre::ensure!(
        promoted.role == Role::Admin,
        "profile update should keep the password and apply the new role"
    );

    board.api.delete_user(created.id).await?;
    let after_delete = board
        .api
        .login(login_body("augusta@example.com", "engine"))
        .await;
    eyre::ensure!(
        after_delete == Err(ApiError::InvalidCredentials),
        "deleted user should not log in"
    );
    Ok(())
}

#[rstest]
#[case(Some(ADMIN_CODE), Role::Admin)]
#[case(Some("s3cret-admin "), Role::User)]
#[case(Some("S3CRET-ADMIN"), Role::User)]
#[case(Some(""), Role::User)]
#[case(None, Role::User)]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_exact_admin_code_elevates(
    board: Board,
    #[case] code: Option<&str>,
    #[case] expected: Role,
) -> Result<(), eyre::Report> {
    let body = CreateUserBody {
        admin_code: code.map(str::to_owned),
        ..signup("A", "B", "a@b.com", "pw123456")
    };

    let created = board.api.create_user(body).await?;

    eyre::ensure!(
        created.role == expected,
        "expected {expected:?}, got {:?}",
        created.role
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_are_listed_newest_first_without_digests(board: Board) -> Result<(), eyre::Report> {
    for email in ["first@example.com", "second@example.com", "third@example.com"] {
        board
            .api
            .create_user(signup("A", "B", email, "pw123456"))
            .await?;
    }

    let users = board.api.list_users().await?;
    let emails: Vec<&str> = users.iter().map(|user| user.email.as_str()).collect();
    eyre::ensure!(
        emails == ["third@example.com", "second@example.com", "first@example.com"],
        "unexpected order: {emails:?}"
    );

    let json = serde_json::to_string(&users)?;
    eyre::ensure!(!json.contains("password"), "listing leaked a password field");
    eyre::ensure!(!json.contains("$argon2"), "listing leaked a digest");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_collisions_are_conflicts(board: Board) -> Result<(), eyre::Report> {
    board
        .api
        .create_user(signup("A", "B", "a@b.com", "pw123456"))
        .await?;
    let second = board
        .api
        .create_user(signup("C", "D", "c@d.com", "pw123456"))
        .await?;

    let duplicate = board
        .api
        .create_user(signup("E", "F", "a@b.com", "other"))
        .await;
    let stolen = board
        .api
        .update_user(
            second.id,
            UpdateUserBody {
                first_name: Some("C".to_owned()),
                last_name: Some("D".to_owned()),
                email: Some("a@b.com".to_owned()),
                role: Some("user".to_owned()),
            },
        )
        .await;

    eyre::ensure!(
        duplicate
            == Err(ApiError::DuplicateIdentity(
                "This email address is already registered.".to_owned()
            )),
        "unexpected registration outcome: {duplicate:?}"
    );
    eyre::ensure!(
        stolen
            == Err(ApiError::DuplicateIdentity(
                "This email address is already in use by another account.".to_owned()
            )),
        "unexpected update outcome: {stolen:?}"
    );
    eyre::ensure!(
        board.api.list_users().await?.len() == 2,
        "a rejected registration must not leave a record"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_failures_are_indistinguishable(board: Board) -> Result<(), eyre::Report> {
    board
        .api
        .create_user(signup("A", "B", "a@b.com", "pw123456"))
        .await?;

    let wrong_password = board.api.login(login_body("a@b.com", "wrong")).await;
    let unknown_user = board.api.login(login_body("nobody@b.com", "pw123456")).await;
    let other_case = board.api.login(login_body("A@B.COM", "pw123456")).await;
    let whitespace = board.api.login(login_body("  ", "pw123456")).await;

    eyre::ensure!(wrong_password == unknown_user, "failures must look identical");
    eyre::ensure!(other_case == unknown_user, "emails are case-sensitive");
    eyre::ensure!(
        whitespace == unknown_user,
        "a whitespace email is an unknown user, not a missing field"
    );
    let status = wrong_password.err().map(|err| err.status());
    eyre::ensure!(status == Some(401), "expected 401, got {status:?}");
    Ok(())
}
