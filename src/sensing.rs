//! Wall-distance sensing

use serde::{Deserialize, Serialize};

use crate::{
    grid::GridWorld,
    rover::{Direction, Rover},
};

/// The rover's sensory snapshot: free cells until the nearest obstacle
/// ahead, to the left, and to the right of the current heading.
///
/// Two rovers with the same triple are indistinguishable to the learner;
/// absolute position and map layout are discarded after sensing, so the
/// triple is the entire state key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensedState {
    pub front: u32,
    pub left: u32,
    pub right: u32,
}

impl SensedState {
    pub fn new(front: u32, left: u32, right: u32) -> Self {
        Self { front, left, right }
    }

    /// Sense the three relative distances from the rover's position.
    ///
    /// Each component counts the free cells strictly between the rover and
    /// the nearest obstacle in that direction: 0 means the adjacent cell is
    /// already blocked. Pure function of grid and rover, so re-sensing an
    /// unchanged world yields an identical triple.
    pub fn scan(grid: &GridWorld, rover: &Rover) -> Self {
        Self {
            front: ray_length(grid, rover, rover.heading),
            left: ray_length(grid, rover, rover.heading.turned_left()),
            right: ray_length(grid, rover, rover.heading.turned_right()),
        }
    }
}

fn ray_length(grid: &GridWorld, rover: &Rover, direction: Direction) -> u32 {
    let (dx, dy) = direction.delta();
    let (mut x, mut y) = (rover.x + dx, rover.y + dy);
    let mut count = 0;
    while !grid.is_blocked(x, y) {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}
