use super::*;

/// Tests looking up a server by its system name.
///
/// Expected: Ok with exactly the named server
#[tokio::test]
async fn finds_named_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;
    factory::server::ServerFactory::new(db)
        .system_name("web-01")
        .os_version("Ubuntu 22.04")
        .build()
        .await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_by_system_name("web-01", &ServerFilterOptions::default())
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].system_name, "web-01");
    assert_eq!(servers[0].os_version, "Ubuntu 22.04");

    Ok(())
}

/// Tests that filters still apply on a named lookup.
///
/// Expected: Ok(empty vec) when the named server fails the filter
#[tokio::test]
async fn applies_filter_to_named_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .system_name("web-01")
        .os(1)
        .build()
        .await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_by_system_name(
            "web-01",
            &ServerFilterOptions {
                os: "lin".to_string(),
                ..Default::default()
            },
        )
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests looking up a name that does not exist.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;

    let repo = ServerBasicRepository::new(db);
    let servers = repo
        .find_by_system_name("missing", &ServerFilterOptions::default())
        .await?;

    assert!(servers.is_empty());

    Ok(())
}
