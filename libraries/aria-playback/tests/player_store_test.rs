//! Integration tests for the player store
//!
//! Exercises the store the way the front-end does: through the public
//! operation set, with a real preference store behind it.

use aria_core::TrackId;
use aria_playback::{PlayerStore, RepeatMode};
use aria_storage::MemoryStore;
use std::time::Duration;

fn ids(names: &[&str]) -> Vec<TrackId> {
    names.iter().map(|name| TrackId::new(*name)).collect()
}

fn player() -> PlayerStore {
    PlayerStore::new(Box::new(MemoryStore::new()))
}

#[test]
fn next_on_empty_queue_changes_nothing() {
    let mut player = player();
    player.set_volume(0.7);
    player.set_repeat(RepeatMode::All);

    player.next();

    assert!(player.queue().is_empty());
    assert_eq!(player.active_track(), None);
    assert_eq!(player.song(), None);
    assert!(!player.is_playing());
    assert!(player.history().is_empty());
    assert_eq!(player.volume(), 0.7);
    assert_eq!(player.repeat(), RepeatMode::All);
}

#[test]
fn repeat_all_cycles_through_the_queue() {
    let mut player = player();
    player.set_queue(ids(&["a", "b", "c"]));
    player.set_repeat(RepeatMode::All);
    player.play_track(TrackId::new("a"));

    player.next();
    assert_eq!(player.active_track(), Some(&TrackId::new("b")));

    player.next();
    assert_eq!(player.active_track(), Some(&TrackId::new("c")));

    player.next();
    assert_eq!(player.active_track(), Some(&TrackId::new("a")));
}

#[test]
fn repeat_one_keeps_the_active_track_out_of_history() {
    let mut player = player();
    player.set_queue(ids(&["a", "b", "c"]));
    player.set_repeat(RepeatMode::One);
    player.play_track(TrackId::new("b"));
    let history_before = player.history().to_vec();

    player.next();

    assert_eq!(player.active_track(), Some(&TrackId::new("b")));
    assert_eq!(player.history(), &history_before[..]);
}

#[test]
fn previous_wraps_regardless_of_modes() {
    for (shuffle, repeat) in [
        (false, RepeatMode::Off),
        (true, RepeatMode::Off),
        (false, RepeatMode::All),
        (true, RepeatMode::One),
    ] {
        let mut player = player();
        player.set_queue(ids(&["a", "b", "c"]));
        player.set_shuffle(shuffle);
        player.set_repeat(repeat);
        player.play_track(TrackId::new("a"));

        player.previous();

        assert_eq!(
            player.active_track(),
            Some(&TrackId::new("c")),
            "shuffle={shuffle} repeat={repeat}"
        );
    }
}

#[test]
fn history_pops_in_reverse_selection_order() {
    let mut player = player();
    player.play_track(TrackId::new("x"));
    player.play_track(TrackId::new("y"));

    assert_eq!(player.pop_history(), Some(TrackId::new("x")));
    assert_eq!(player.pop_history(), None);
}

#[test]
fn reset_keeps_preferences() {
    let mut player = player();
    player.set_queue(ids(&["a", "b"]));
    player.set_volume(0.25);
    player.set_shuffle(true);
    player.set_repeat(RepeatMode::One);
    player.play_track(TrackId::new("a"));
    player.play_track(TrackId::new("b"));
    player.record_seek(TrackId::new("b"), Duration::from_secs(33));

    player.reset();

    assert!(player.queue().is_empty());
    assert!(player.history().is_empty());
    assert_eq!(player.resume_position(&TrackId::new("b")), None);
    assert_eq!(player.active_track(), None);
    assert!(!player.is_playing());

    assert_eq!(player.volume(), 0.25);
    assert!(player.is_shuffle());
    assert_eq!(player.repeat(), RepeatMode::One);
}

#[test]
fn only_preferences_survive_a_reload() {
    let backing = MemoryStore::new();

    let mut player = PlayerStore::new(Box::new(backing.clone()));
    player.set_queue(ids(&["a", "b", "c"]));
    player.set_volume(0.6);
    player.set_shuffle(true);
    player.set_repeat(RepeatMode::All);
    player.play_track(TrackId::new("b"));
    player.push_history(TrackId::new("a"));
    drop(player);

    // A new session over the same durable storage
    let restored = PlayerStore::new(Box::new(backing));

    assert_eq!(restored.volume(), 0.6);
    assert!(restored.is_shuffle());
    assert_eq!(restored.repeat(), RepeatMode::All);

    assert!(restored.queue().is_empty());
    assert_eq!(restored.active_track(), None);
    assert!(!restored.is_playing());
    assert!(restored.history().is_empty());
}

#[test]
fn corrupt_settings_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{definitely not json").unwrap();

    let player = PlayerStore::new(Box::new(aria_storage::JsonFileStore::new(path)));

    assert_eq!(player.volume(), 1.0);
    assert!(!player.is_shuffle());
    assert_eq!(player.repeat(), RepeatMode::Off);
}

#[test]
fn shuffle_advance_selects_a_queue_member() {
    let mut player = player();
    player.set_queue(ids(&["a", "b", "c", "d", "e"]));
    player.set_shuffle(true);
    player.play_track(TrackId::new("c"));

    for _ in 0..100 {
        player.next();
        let active = player.active_track().expect("shuffle keeps playing").clone();
        assert!(player.queue().contains(&active));
        assert!(player.is_playing());
    }
}

#[test]
fn walking_history_does_not_grow_it() {
    let mut player = player();
    player.play_track(TrackId::new("a"));
    player.play_track(TrackId::new("b"));
    player.play_track(TrackId::new("c"));
    assert_eq!(player.history().len(), 2);

    // Walk the whole trail back the way the UI's back button does
    while let Some(id) = player.pop_history() {
        player.replay_track(id);
    }

    assert_eq!(player.active_track(), Some(&TrackId::new("a")));
    assert!(player.history().is_empty());
}
