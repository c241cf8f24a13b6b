use anyhow::Result;
use boldlink_testing::TestWorld;
use boldlink_testing::fixtures::{record, records};

#[test]
fn test_visit_known_code_increments_local_count() -> Result<()> {
    let world = TestWorld::new();
    world.seed_local(&records(vec![record(
        "abc123",
        "https://example.com/page",
        "2024-01-15T10:00:00Z",
        4,
    )]))?;

    let result = world.run(&["visit", "abc123"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("/abc123"));
    assert!(result.stdout.contains("Recorded visit #5 locally"));

    let slot = world.read_slot()?;
    assert_eq!(slot[0]["visits"], 5);
    Ok(())
}

#[test]
fn test_visit_unknown_code_still_prints_short_url() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["visit", "ghost99"])?;

    assert!(result.success());
    assert!(result.stdout.contains("/ghost99"));
    assert!(result.stdout.contains("No local record for 'ghost99'"));
    Ok(())
}

#[test]
fn test_visit_does_not_touch_other_records() -> Result<()> {
    let world = TestWorld::new();
    world.seed_local(&records(vec![
        record("abc123", "https://a.example", "2024-01-15T10:00:00Z", 1),
        record("def456", "https://b.example", "2024-01-16T10:00:00Z", 7),
    ]))?;

    let result = world.run(&["visit", "abc123"])?;
    assert!(result.success());

    let slot = world.read_slot()?;
    assert_eq!(slot[0]["visits"], 2);
    assert_eq!(slot[1]["visits"], 7);
    Ok(())
}

#[test]
fn test_visit_json_output_tracked() -> Result<()> {
    let world = TestWorld::new();
    world.seed_local(&records(vec![record(
        "abc123",
        "https://example.com/page",
        "2024-01-15T10:00:00Z",
        0,
    )]))?;

    let result = world.run(&["visit", "abc123", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["shortCode"], "abc123");
    assert_eq!(json["visits"], 1);
    assert_eq!(json["tracked"], true);
    Ok(())
}

#[test]
fn test_visit_json_output_untracked() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["visit", "ghost99", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["shortCode"], "ghost99");
    assert_eq!(json["tracked"], false);
    Ok(())
}
