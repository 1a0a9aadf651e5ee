use super::*;

/// Tests listing servers without any filter.
///
/// Expected: Ok with every server in insertion order
#[tokio::test]
async fn returns_all_servers_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo.find_all(&ServerFilterOptions::default()).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].system_name, first.system_name);
    assert_eq!(servers[1].system_name, second.system_name);

    Ok(())
}

/// Tests the OS filter.
///
/// Expected: Ok with only Linux servers for `lin`
#[tokio::test]
async fn filters_by_os() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db).os(1).build().await?;
    let linux = factory::server::ServerFactory::new(db).os(2).build().await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_all(&ServerFilterOptions {
            os: "lin".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].system_name, linux.system_name);

    Ok(())
}

/// Tests the state and license filters together.
///
/// Expected: Ok with only connected servers that have a license
#[tokio::test]
async fn filters_by_state_and_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let licensed = factory::server::ServerFactory::new(db)
        .status("connect")
        .license_id(42)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .status("connect")
        .license_id(0)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .status("disconnect")
        .license_id(7)
        .build()
        .await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_all(&ServerFilterOptions {
            state: "connect".to_string(),
            license: "assign".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].system_name, licensed.system_name);
    assert_eq!(servers[0].license_id, 42);

    let unassigned = repo
        .find_all(&ServerFilterOptions {
            license: "unassign".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].license_id, 0);

    Ok(())
}

/// Tests that a filter matching nothing is not an error.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .os(2)
        .status("disconnect")
        .build()
        .await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_all(&ServerFilterOptions {
            os: "win".to_string(),
            state: "connect".to_string(),
            ..Default::default()
        })
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerBasicRepository::new(db);
    let result = repo.find_all(&ServerFilterOptions::default()).await;

    assert!(result.is_err());

    Ok(())
}
