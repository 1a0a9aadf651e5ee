use super::*;

/// Tests that relation fetchers skip the query for an empty name set.
///
/// The database has no relation tables, so any issued query would fail.
///
/// Expected: Ok(empty vec) from every fetcher
#[tokio::test]
async fn empty_name_set_issues_no_query() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ServerDiskRepository::new(db)
        .find_by_system_names(&[])
        .await?
        .is_empty());
    assert!(ServerNetworkRepository::new(db)
        .find_by_system_names(&[])
        .await?
        .is_empty());
    assert!(ServerPartitionRepository::new(db)
        .find_by_system_names(&[])
        .await?
        .is_empty());
    assert!(ServerRepositoryRepository::new(db)
        .find_by_system_names(&[])
        .await?
        .is_empty());

    Ok(())
}

/// Tests that the disk fetcher returns only rows for the requested servers.
///
/// Expected: Ok with the disks of the two requested servers, ordered by id
#[tokio::test]
async fn fetches_disks_for_requested_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;

    factory::disk::DiskFactory::new(db, &first.system_name)
        .device("sda")
        .build()
        .await?;
    factory::disk::DiskFactory::new(db, &second.system_name)
        .device("sdb")
        .build()
        .await?;
    factory::create_disk(db, &other.system_name).await?;

    let names = vec![first.system_name.clone(), second.system_name.clone()];
    let disks = ServerDiskRepository::new(db)
        .find_by_system_names(&names)
        .await?;

    assert_eq!(disks.len(), 2);
    assert_eq!(disks[0].device, "sda");
    assert_eq!(disks[1].device, "sdb");

    Ok(())
}

/// Tests the network, partition and repository fetchers.
///
/// Expected: Ok with one row each for the requested server
#[tokio::test]
async fn fetches_other_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    factory::create_network(db, &server.system_name).await?;
    factory::create_partition(db, &server.system_name).await?;
    factory::create_repository(db, &server.system_name).await?;

    let names = vec![server.system_name.clone()];

    let networks = ServerNetworkRepository::new(db)
        .find_by_system_names(&names)
        .await?;
    let partitions = ServerPartitionRepository::new(db)
        .find_by_system_names(&names)
        .await?;
    let repositories = ServerRepositoryRepository::new(db)
        .find_by_system_names(&names)
        .await?;

    assert_eq!(networks.len(), 1);
    assert_eq!(partitions.len(), 1);
    assert_eq!(repositories.len(), 1);
    assert_eq!(repositories[0].system_name, server.system_name);

    Ok(())
}

/// Tests that names matching no rows produce an empty result.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unmatched_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    factory::create_disk(db, &server.system_name).await?;

    let disks = ServerDiskRepository::new(db)
        .find_by_system_names(&["ghost".to_string()])
        .await?;

    assert!(disks.is_empty());

    Ok(())
}
