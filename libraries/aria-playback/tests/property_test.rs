//! Property tests for transport navigation invariants

use aria_core::TrackId;
use aria_playback::{PlayerStore, RepeatMode};
use aria_storage::MemoryStore;
use proptest::prelude::*;

fn player() -> PlayerStore {
    PlayerStore::new(Box::new(MemoryStore::new()))
}

/// Unique track ids so queue positions are unambiguous
fn unique_ids() -> impl Strategy<Value = Vec<TrackId>> {
    prop::collection::hash_set("[a-z]{2,8}", 1..12)
        .prop_map(|names| names.into_iter().map(TrackId::new).collect())
}

#[derive(Debug, Clone)]
enum NavOp {
    Play(usize),
    Next,
    Previous,
}

fn nav_ops() -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            (0usize..64).prop_map(NavOp::Play),
            Just(NavOp::Next),
            Just(NavOp::Previous),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn shuffle_next_always_lands_in_queue(queue in unique_ids(), start in 0usize..64) {
        let mut player = player();
        player.set_queue(queue.clone());
        player.set_shuffle(true);
        player.play_track(queue[start % queue.len()].clone());

        player.next();

        let active = player.active_track().expect("active after next").clone();
        prop_assert!(queue.contains(&active));
    }

    #[test]
    fn previous_always_lands_in_queue(
        queue in unique_ids(),
        start in 0usize..64,
        shuffle in any::<bool>(),
        repeat in prop_oneof![Just(RepeatMode::Off), Just(RepeatMode::All), Just(RepeatMode::One)],
    ) {
        let mut player = player();
        player.set_queue(queue.clone());
        player.set_shuffle(shuffle);
        player.set_repeat(repeat);
        player.play_track(queue[start % queue.len()].clone());

        player.previous();

        let active = player.active_track().expect("active after previous").clone();
        prop_assert!(queue.contains(&active));
    }

    #[test]
    fn ordered_advance_walks_the_queue(queue in unique_ids(), start in 0usize..64) {
        let mut player = player();
        player.set_queue(queue.clone());
        player.set_repeat(RepeatMode::All);

        let start = start % queue.len();
        player.play_track(queue[start].clone());

        for step in 1..=queue.len() * 2 {
            player.next();
            let expected = &queue[(start + step) % queue.len()];
            prop_assert_eq!(player.active_track(), Some(expected));
        }
    }

    #[test]
    fn navigation_never_stacks_duplicate_history_entries(
        queue in unique_ids(),
        ops in nav_ops(),
    ) {
        let mut player = player();
        player.set_queue(queue.clone());

        for op in ops {
            match op {
                NavOp::Play(index) => player.play_track(queue[index % queue.len()].clone()),
                NavOp::Next => player.next(),
                NavOp::Previous => player.previous(),
            }
        }

        let trail = player.history();
        for pair in trail.windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
        }
    }
}
