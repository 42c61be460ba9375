//! Two-period blockade confirmation for the input (CAM) and output (DLT) groups.

use crate::acute::alert::StarCounts;
use crate::domain::{BlockadeResult, BlockadeStatus};

/// Critical gauges a group needs in *both* periods to count as blocked.
pub const BLOCKADE_MIN_STARS: usize = 2;

fn status(blocked: bool, stars: usize) -> BlockadeStatus {
    if blocked {
        BlockadeStatus::Blocked
    } else if stars >= BLOCKADE_MIN_STARS {
        BlockadeStatus::Alert
    } else if stars >= 1 {
        BlockadeStatus::Caution
    } else {
        BlockadeStatus::Normal
    }
}

pub fn judge(current: &StarCounts, previous: Option<&StarCounts>) -> BlockadeResult {
    let cam_blocked = previous.is_some_and(|p| {
        current.input_stars >= BLOCKADE_MIN_STARS && p.input_stars >= BLOCKADE_MIN_STARS
    });
    let dlt_blocked = previous.is_some_and(|p| {
        current.output_stars >= BLOCKADE_MIN_STARS && p.output_stars >= BLOCKADE_MIN_STARS
    });

    BlockadeResult {
        cam_blocked,
        dlt_blocked,
        dual_blockade: cam_blocked && dlt_blocked,
        cam_status: status(cam_blocked, current.input_stars),
        dlt_status: status(dlt_blocked, current.output_stars),
    }
}
