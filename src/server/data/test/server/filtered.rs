use super::*;

/// Tests that an empty filter builds a query without any predicate.
///
/// Expected: SQL without a WHERE clause
#[test]
fn empty_options_add_no_where_clause() {
    let sql = ServerBasicRepository::filtered(&ServerFilterOptions::default())
        .build(DbBackend::Sqlite)
        .sql;

    assert!(!sql.contains("WHERE"));
}

/// Tests that flags alone never turn into predicates.
///
/// Relation and detail flags only steer fetching and shaping.
///
/// Expected: SQL without a WHERE clause
#[test]
fn flags_add_no_where_clause() {
    let options = ServerFilterOptions {
        network: true,
        disk: true,
        partition: true,
        repository: true,
        detail: true,
        ..Default::default()
    };

    let sql = ServerBasicRepository::filtered(&options)
        .build(DbBackend::Sqlite)
        .sql;

    assert!(!sql.contains("WHERE"));
}

/// Tests that an unrecognized OS value is ignored rather than matched.
///
/// Expected: SQL without a WHERE clause
#[test]
fn unknown_os_adds_no_predicate() {
    let options = ServerFilterOptions {
        os: "mac".to_string(),
        ..Default::default()
    };

    let sql = ServerBasicRepository::filtered(&options)
        .build(DbBackend::Sqlite)
        .sql;

    assert!(!sql.contains("WHERE"));
}

/// Tests that OS, state and license predicates are combined with AND.
///
/// Expected: one WHERE clause naming all three columns
#[test]
fn combines_predicates_with_and() {
    let options = ServerFilterOptions {
        os: "lin".to_string(),
        state: "connect".to_string(),
        license: "assign".to_string(),
        ..Default::default()
    };

    let sql = ServerBasicRepository::filtered(&options)
        .build(DbBackend::Sqlite)
        .sql;

    assert_eq!(sql.matches("WHERE").count(), 1);
    assert!(sql.contains("\"os\""));
    assert!(sql.contains("\"status\""));
    assert!(sql.contains("\"license_id\""));
    assert_eq!(sql.matches(" AND ").count(), 2);
}
