//! Shuffle selection
//!
//! Shuffle mode draws a uniformly random track from the whole queue on
//! every advance. The draw is with replacement: any member can come up,
//! including the track that just played. This is not a permutation walk.

use aria_core::TrackId;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Pick a uniformly random track from the queue
pub fn pick_random(ids: &[TrackId]) -> Option<&TrackId> {
    ids.choose(&mut thread_rng())
}
