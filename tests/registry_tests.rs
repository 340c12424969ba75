use chrono::{TimeZone, Utc};
use recap::core::models::Channel;
use recap::registry::ChannelRegistry;

fn channel(id: &str, name: &str, active: bool) -> Channel {
    Channel {
        id: id.to_string(),
        guild_id: "g-1".to_string(),
        name: name.to_string(),
        last_message_id: None,
        last_check: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        active,
    }
}

#[test]
fn test_put_then_get_round_trips() {
    let registry = ChannelRegistry::open_in_memory().unwrap();
    let mut stored = channel("c-1", "general", true);
    stored.last_message_id = Some("m-99".to_string());

    registry.put(&stored).unwrap();
    let loaded = registry.get("c-1").unwrap().unwrap();

    assert_eq!(loaded.id, stored.id);
    assert_eq!(loaded.guild_id, stored.guild_id);
    assert_eq!(loaded.name, stored.name);
    assert_eq!(loaded.last_message_id, stored.last_message_id);
    assert_eq!(loaded.last_check, stored.last_check);
    assert!(loaded.active);
}

#[test]
fn test_get_unknown_channel_is_none() {
    let registry = ChannelRegistry::open_in_memory().unwrap();
    assert!(registry.get("nope").unwrap().is_none());
}

#[test]
fn test_get_active_skips_inactive_records() {
    let registry = ChannelRegistry::open_in_memory().unwrap();
    registry.put(&channel("c-1", "general", true)).unwrap();
    registry.put(&channel("c-2", "archive", false)).unwrap();
    registry.put(&channel("c-3", "dev", true)).unwrap();

    let active = registry.get_active().unwrap();
    let names: Vec<&str> = active.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, ["dev", "general"]);
}

#[test]
fn test_last_write_wins() {
    let registry = ChannelRegistry::open_in_memory().unwrap();
    registry.put(&channel("c-1", "general", true)).unwrap();

    let mut renamed = channel("c-1", "general-renamed", true);
    renamed.last_message_id = Some("m-7".to_string());
    registry.put(&renamed).unwrap();

    let loaded = registry.get("c-1").unwrap().unwrap();
    assert_eq!(loaded.name, "general-renamed");
    assert_eq!(loaded.last_message_id.as_deref(), Some("m-7"));
    assert_eq!(registry.get_active().unwrap().len(), 1);
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.db");

    {
        let registry = ChannelRegistry::open(&path).unwrap();
        registry.put(&channel("c-1", "general", true)).unwrap();
    }

    let registry = ChannelRegistry::open(&path).unwrap();
    let loaded = registry.get("c-1").unwrap().unwrap();
    assert_eq!(loaded.name, "general");
}
