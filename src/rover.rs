//! Rover pose and kinematics

use serde::{Deserialize, Serialize};

/// Compass heading; y grows downward, so North is (0, -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step along this heading as (dx, dy)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Quarter turn counterclockwise
    pub fn turned_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Quarter turn clockwise
    pub fn turned_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// An action the rover takes before its forced forward move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    TurnLeft,
    TurnRight,
    Nothing,
}

impl Action {
    /// All actions, in a fixed order for table scans and uniform draws
    pub const ALL: [Action; 3] = [Action::TurnLeft, Action::TurnRight, Action::Nothing];

    pub fn label(self) -> &'static str {
        match self {
            Action::TurnLeft => "turn-left",
            Action::TurnRight => "turn-right",
            Action::Nothing => "nothing",
        }
    }
}

/// Rover pose on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rover {
    pub x: i32,
    pub y: i32,
    pub heading: Direction,
}

impl Rover {
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self { x, y, heading }
    }

    /// Rotate the heading according to the action; `Nothing` leaves it unchanged
    pub fn apply_turn(&mut self, action: Action) {
        self.heading = match action {
            Action::TurnLeft => self.heading.turned_left(),
            Action::TurnRight => self.heading.turned_right(),
            Action::Nothing => self.heading,
        };
    }

    /// The cell one step along the current heading
    pub fn ahead(&self) -> (i32, i32) {
        let (dx, dy) = self.heading.delta();
        (self.x + dx, self.y + dy)
    }

    /// Move one cell along the current heading
    pub fn advance(&mut self) {
        let (x, y) = self.ahead();
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_left_turns_return_to_start() {
        let mut heading = Direction::North;
        for _ in 0..4 {
            heading = heading.turned_left();
        }
        assert_eq!(heading, Direction::North);
    }

    #[test]
    fn test_four_right_turns_return_to_start() {
        let mut heading = Direction::East;
        for _ in 0..4 {
            heading = heading.turned_right();
        }
        assert_eq!(heading, Direction::East);
    }

    #[test]
    fn test_left_then_right_is_identity() {
        for heading in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(heading.turned_left().turned_right(), heading);
            assert_eq!(heading.turned_right().turned_left(), heading);
        }
    }

    #[test]
    fn test_deltas_use_screen_coordinates() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::South.delta(), (0, 1));
        assert_eq!(Direction::East.delta(), (1, 0));
        assert_eq!(Direction::West.delta(), (-1, 0));
    }

    #[test]
    fn test_apply_turn_and_advance() {
        let mut rover = Rover::new(3, 3, Direction::North);

        rover.apply_turn(Action::Nothing);
        assert_eq!(rover.heading, Direction::North);
        rover.advance();
        assert_eq!((rover.x, rover.y), (3, 2));

        rover.apply_turn(Action::TurnLeft);
        assert_eq!(rover.heading, Direction::West);
        assert_eq!(rover.ahead(), (2, 2));

        rover.apply_turn(Action::TurnRight);
        rover.apply_turn(Action::TurnRight);
        assert_eq!(rover.heading, Direction::East);
    }

    #[test]
    fn test_action_order_is_stable() {
        assert_eq!(
            Action::ALL,
            [Action::TurnLeft, Action::TurnRight, Action::Nothing]
        );
    }
}
