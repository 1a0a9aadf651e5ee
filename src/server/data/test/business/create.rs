use super::*;

/// Tests registering a business with its address.
///
/// Expected: Ok(Business) with status ACTIVE and the address attached
#[tokio::test]
async fn creates_account_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    let business = repo
        .create(create_params("123-45-67891", "contact@acme.com"))
        .await?;

    assert_eq!(business.status, STATUS_ACTIVE);
    assert_eq!(business.industry_type, IndustryType::Tech);
    let address = business.address.unwrap();
    assert_eq!(address.city, "Seoul");
    assert_eq!(address.zip_code, "04524");

    Ok(())
}

/// Tests that registration is atomic.
///
/// The address table is missing so the second insert fails; the account insert
/// must be rolled back with it.
///
/// Expected: Err(DbErr) and no account rows
#[tokio::test]
async fn rolls_back_account_when_address_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusinessAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    let result = repo
        .create(create_params("123-45-67891", "contact@acme.com"))
        .await;

    assert!(result.is_err());
    let accounts = entity::prelude::BusinessAccount::find().count(db).await?;
    assert_eq!(accounts, 0);

    Ok(())
}

/// Tests that business numbers are unique.
///
/// Expected: Err(DbErr) on the second registration
#[tokio::test]
async fn rejects_duplicate_business_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    repo.create(create_params("123-45-67891", "first@acme.com"))
        .await?;
    let result = repo
        .create(create_params("123-45-67891", "second@acme.com"))
        .await;

    assert!(result.is_err());

    Ok(())
}
