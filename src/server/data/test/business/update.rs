use super::*;

/// Tests updating account and address columns together.
///
/// Expected: Ok(Some(Business)) with both changes applied
#[tokio::test]
async fn updates_account_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, address) = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    let updated = repo
        .update(
            account.id,
            UpdateBusinessParams {
                company_name: Some("Renamed Inc".to_string()),
                employee_count: Some(99),
                city: Some("Busan".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.company_name, "Renamed Inc");
    assert_eq!(updated.employee_count, 99);
    let updated_address = updated.address.unwrap();
    assert_eq!(updated_address.city, "Busan");
    assert_eq!(updated_address.street, address.street);

    Ok(())
}

/// Tests deactivation through the status column.
///
/// Expected: status INACTIVE after the update
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    let updated = repo
        .update(
            account.id,
            UpdateBusinessParams {
                status: Some("INACTIVE".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "INACTIVE");
    assert!(updated.address.is_some());

    Ok(())
}

/// Tests updating a business that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    let result = repo
        .update(
            7,
            UpdateBusinessParams {
                company_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
