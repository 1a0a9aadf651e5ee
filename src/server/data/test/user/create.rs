use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) with zero login failures and no last login
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInfo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("alice@example.com")).await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "salt:hash");
    assert_eq!(user.login_failures, 0);
    assert!(user.last_login_at.is_none());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserInfo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("alice@example.com")).await?;
    let result = repo.create(create_params("alice@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
