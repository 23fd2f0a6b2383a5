use gridq::q_learning::QTable;
use gridq::report::{PolicyBucket, PolicySummary};
use gridq::rover::Action;
use gridq::sensing::SensedState;

#[test]
fn sealed_cell_entries_land_in_catch_all() {
    // A rover sealed in a 1x1 pocket only ever senses (0, 0, 0), so the
    // wall buckets collect nothing and everything goes to the catch-all.
    let mut table = QTable::new();
    for action in Action::ALL {
        table.set(SensedState::new(0, 0, 0), action, -10.0);
    }

    let summary = PolicySummary::from_table(&table);

    assert_eq!(
        summary.stats(PolicyBucket::NothingWhenWallFront).samples(),
        0
    );
    assert_eq!(summary.stats(PolicyBucket::LeftWhenWallLeft).samples(), 0);
    assert_eq!(summary.stats(PolicyBucket::RightWhenWallRight).samples(), 0);
    assert_eq!(summary.stats(PolicyBucket::AllElse).samples(), 3);

    let lines = summary.stdout_lines();
    assert_eq!(lines[0], "Average nothing when wall front: no samples");
    assert_eq!(lines[4], "Average all else: -10");
}

#[test]
fn every_pair_lands_in_exactly_one_bucket() {
    for front in 0..4u32 {
        for left in 0..4u32 {
            for right in 0..4u32 {
                let state = SensedState::new(front, left, right);

                for action in Action::ALL {
                    match PolicyBucket::classify(state, action) {
                        PolicyBucket::NothingWhenWallFront => {
                            assert_eq!(action, Action::Nothing);
                            assert_eq!(front, 1);
                        }
                        PolicyBucket::LeftWhenWallLeft => {
                            assert_eq!(action, Action::TurnLeft);
                            assert_eq!(left, 1);
                        }
                        PolicyBucket::RightWhenWallRight => {
                            assert_eq!(action, Action::TurnRight);
                            assert_eq!(right, 1);
                        }
                        PolicyBucket::AllElse => {
                            let claimed = (action == Action::Nothing && front == 1)
                                || (action == Action::TurnLeft && left == 1)
                                || (action == Action::TurnRight && right == 1);
                            assert!(!claimed, "pair belongs in a wall bucket");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn stdout_lines_follow_report_layout() {
    let mut table = QTable::new();
    table.set(SensedState::new(1, 1, 1), Action::Nothing, -4.0);
    table.set(SensedState::new(1, 1, 1), Action::TurnLeft, -6.0);

    let summary = PolicySummary::from_table(&table);
    let lines = summary.stdout_lines();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Average nothing when wall front: -4");
    assert_eq!(lines[1], "Average left when wall left: -6");
    assert_eq!(lines[2], "Average right when wall right: no samples");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Average all else: no samples");
}
