use anyhow::Result;
use boldlink_testing::fixtures::{record, records, uncoded_record};
use boldlink_testing::{StubServer, TestWorld};

#[test]
fn test_list_merges_server_and_local_records() -> Result<()> {
    let server = StubServer::builder()
        .route(
            "GET",
            "/api/urls",
            200,
            &records(vec![record(
                "srv001",
                "https://server.example/one",
                "2024-01-15T10:00:00Z",
                3,
            )])
            .to_string(),
        )
        .start();
    let world = TestWorld::new().with_server(server);
    world.seed_local(&records(vec![record(
        "loc001",
        "https://local.example/two",
        "2024-01-16T10:00:00Z",
        0,
    )]))?;

    let result = world.run(&["list"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("/srv001"));
    assert!(result.stdout.contains("/loc001"));
    assert!(result.stdout.contains("server"));
    assert!(result.stdout.contains("local"));
    Ok(())
}

#[test]
fn test_list_server_record_wins_on_duplicate_code() -> Result<()> {
    let server = StubServer::builder()
        .route(
            "GET",
            "/api/urls",
            200,
            &records(vec![record(
                "abc123",
                "https://server.example/fresh",
                "2024-01-15T10:00:00Z",
                9,
            )])
            .to_string(),
        )
        .start();
    let world = TestWorld::new().with_server(server);
    world.seed_local(&records(vec![record(
        "abc123",
        "https://local.example/stale",
        "2024-01-15T10:00:00Z",
        2,
    )]))?;

    let result = world.run(&["list", "--format", "json"])?;

    assert!(result.success());
    let entries = result.json()?;
    let entries = entries.as_array().expect("json array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["longUrl"], "https://server.example/fresh");
    assert_eq!(entries[0]["visits"], 9);
    assert_eq!(entries[0]["source"], "server");
    Ok(())
}

#[test]
fn test_list_offline_degrades_to_local_only() -> Result<()> {
    let world = TestWorld::new();
    world.seed_local(&records(vec![record(
        "loc001",
        "https://local.example/kept",
        "2024-01-16T10:00:00Z",
        1,
    )]))?;

    let result = world.run(&["list"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("/loc001"));
    assert!(result.stderr.contains("showing local records only"));
    Ok(())
}

#[test]
fn test_list_empty_catalog_message() -> Result<()> {
    let server = StubServer::builder()
        .route("GET", "/api/urls", 200, "[]")
        .start();
    let world = TestWorld::new().with_server(server);

    let result = world.run(&["list"])?;

    assert!(result.success());
    assert!(result.stdout.contains("No short links yet"));
    Ok(())
}

#[test]
fn test_list_sorts_newest_first() -> Result<()> {
    let server = StubServer::builder()
        .route(
            "GET",
            "/api/urls",
            200,
            &records(vec![
                record("old001", "https://a.example", "2024-01-01T10:00:00Z", 0),
                record("new001", "https://b.example", "2024-03-01T10:00:00Z", 0),
            ])
            .to_string(),
        )
        .start();
    let world = TestWorld::new().with_server(server);

    let result = world.run(&["list"])?;

    assert!(result.success());
    let newer = result.stdout.find("/new001").expect("newer row");
    let older = result.stdout.find("/old001").expect("older row");
    assert!(newer < older, "newest record should render first");
    Ok(())
}

#[test]
fn test_list_limit_caps_output() -> Result<()> {
    let server = StubServer::builder()
        .route(
            "GET",
            "/api/urls",
            200,
            &records(vec![
                record("aaa111", "https://a.example", "2024-03-01T10:00:00Z", 0),
                record("bbb222", "https://b.example", "2024-02-01T10:00:00Z", 0),
                record("ccc333", "https://c.example", "2024-01-01T10:00:00Z", 0),
            ])
            .to_string(),
        )
        .start();
    let world = TestWorld::new().with_server(server);

    let result = world.run(&["list", "--limit", "2", "--format", "json"])?;

    assert!(result.success());
    let entries = result.json()?;
    let entries = entries.as_array().expect("json array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["shortCode"], "aaa111");
    assert_eq!(entries[1]["shortCode"], "bbb222");
    Ok(())
}

#[test]
fn test_list_keeps_uncoded_local_records_by_default() -> Result<()> {
    let server = StubServer::builder()
        .route("GET", "/api/urls", 200, "[]")
        .start();
    let world = TestWorld::new().with_server(server);
    world.seed_local(&records(vec![uncoded_record(
        "https://pending.example",
        "2024-01-16T10:00:00Z",
    )]))?;

    let result = world.run(&["list"])?;

    assert!(result.success());
    assert!(result.stdout.contains("(awaiting code)"));
    assert!(result.stdout.contains("https://pending.example"));
    Ok(())
}

#[test]
fn test_list_drop_policy_hides_uncoded_local_records() -> Result<()> {
    let server = StubServer::builder()
        .route("GET", "/api/urls", 200, "[]")
        .start();
    let world = TestWorld::new().with_server(server);
    world.write_config("uncoded = \"drop\"\n")?;
    world.seed_local(&records(vec![uncoded_record(
        "https://pending.example",
        "2024-01-16T10:00:00Z",
    )]))?;

    let result = world.run(&["list"])?;

    assert!(result.success());
    assert!(result.stdout.contains("No short links yet"));
    Ok(())
}
