use super::*;

/// Tests listing businesses with their addresses.
///
/// Expected: Ok with both businesses in id order
#[tokio::test]
async fn lists_businesses_with_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::create_business(db).await?;
    let (second, _) = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    let businesses = repo.find_all().await?;

    assert_eq!(businesses.len(), 2);
    assert_eq!(businesses[0].id, first.id);
    assert_eq!(businesses[1].id, second.id);
    assert!(businesses.iter().all(|b| b.address.is_some()));

    Ok(())
}

/// Tests the lookups by id, email and business number.
///
/// Expected: Some for existing values, None otherwise
#[tokio::test]
async fn finds_by_unique_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::business::BusinessFactory::new(db)
        .email("biz@example.com")
        .business_number("220-81-62517")
        .build()
        .await?;

    let repo = BusinessRepository::new(db);

    assert_eq!(repo.find_by_id(account.id).await?.unwrap().id, account.id);
    assert!(repo.find_by_id(account.id + 1).await?.is_none());
    assert!(repo.find_by_email("biz@example.com").await?.is_some());
    assert!(repo.find_by_email("other@example.com").await?.is_none());
    assert!(repo
        .find_by_business_number("220-81-62517")
        .await?
        .is_some());
    assert!(repo
        .find_by_business_number("123-45-67891")
        .await?
        .is_none());

    Ok(())
}
