use super::*;

/// Tests the login bookkeeping columns.
///
/// Failures accumulate until a successful login clears them and stamps the time.
///
/// Expected: failures 2, then 0 with last_login_at set
#[tokio::test]
async fn failures_accumulate_until_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInfo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.record_login_failure(created.id).await?;
    repo.record_login_failure(created.id).await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.login_failures, 2);
    assert!(user.last_login_at.is_none());

    repo.record_login(created.id).await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.login_failures, 0);
    assert!(user.last_login_at.is_some());

    Ok(())
}
