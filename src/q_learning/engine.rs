//! Q-learning update rule

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, ports::StepOutcome, q_learning::q_table::QTable, rover::Action,
    sensing::SensedState,
};

/// Reward for a step that killed the rover; surviving steps earn 0.0
pub const CRASH_PENALTY: f64 = -100.0;

/// One (state, action, outcome, next state) tuple consumed by an update
///
/// `next` is sensed after the step; on a fatal step it equals sensing at
/// the last surviving position with the post-turn heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: SensedState,
    pub action: Action,
    pub outcome: StepOutcome,
    pub next: SensedState,
}

impl Transition {
    /// Reward earned by this transition
    pub fn reward(&self) -> f64 {
        if self.outcome.survived() {
            0.0
        } else {
            CRASH_PENALTY
        }
    }
}

/// Tabular Q-learning update
///
/// Q(s,a) ← Q(s,a) + α·(r + γ·max_a' Q(s',a') − Q(s,a))
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QLearningEngine {
    learning_rate: f64,
    discount_factor: f64,
}

impl Default for QLearningEngine {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
        }
    }
}

impl QLearningEngine {
    /// Create an engine with explicit α and γ
    pub fn new(learning_rate: f64, discount_factor: f64) -> Result<Self> {
        for (name, value) in [
            ("learning rate", learning_rate),
            ("discount factor", discount_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} {value} must lie in [0.0, 1.0]"),
                });
            }
        }
        Ok(Self {
            learning_rate,
            discount_factor,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Apply one update to the table and return the new value.
    ///
    /// The max over the next state's actions is taken whether or not the
    /// step was fatal, so terminal post-states keep their three zero
    /// entries in the final table.
    pub fn update(&self, table: &mut QTable, transition: &Transition) -> f64 {
        let current = table.get(transition.state, transition.action);
        let max_next = table.max_over(transition.next);
        let td_target = transition.reward() + self.discount_factor * max_next;
        let td_error = td_target - current;
        let new_q = current + self.learning_rate * td_error;
        table.set(transition.state, transition.action, new_q);
        new_q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crash_on_spot(state: SensedState, action: Action) -> Transition {
        Transition {
            state,
            action,
            outcome: StepOutcome::Crashed,
            next: state,
        }
    }

    #[test]
    fn test_default_parameters() {
        let engine = QLearningEngine::default();
        assert_eq!(engine.learning_rate(), 0.1);
        assert_eq!(engine.discount_factor(), 0.9);
    }

    #[test]
    fn test_new_rejects_out_of_range_parameters() {
        assert!(QLearningEngine::new(1.5, 0.9).is_err());
        assert!(QLearningEngine::new(0.1, -0.1).is_err());
        assert!(QLearningEngine::new(0.1, f64::NAN).is_err());
        assert!(QLearningEngine::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_reward_scheme() {
        let state = SensedState::new(0, 0, 0);
        let fatal = crash_on_spot(state, Action::Nothing);
        assert_eq!(fatal.reward(), -100.0);

        let survived = Transition {
            outcome: StepOutcome::Moved,
            ..fatal
        };
        assert_eq!(survived.reward(), 0.0);
    }

    #[test]
    fn test_first_crash_update_is_exactly_minus_ten() {
        let engine = QLearningEngine::default();
        let mut table = QTable::new();
        let sealed = SensedState::new(0, 0, 0);

        let new_q = engine.update(&mut table, &crash_on_spot(sealed, Action::TurnLeft));

        // 0 + 0.1 * (-100 + 0.9 * 0 - 0)
        assert_eq!(new_q, -10.0);
        assert_eq!(table.get(sealed, Action::TurnLeft), -10.0);
        // The shared post-state was materialized for all three actions.
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(sealed, Action::TurnRight), 0.0);
        assert_eq!(table.get(sealed, Action::Nothing), 0.0);
    }

    #[test]
    fn test_second_crash_update_reaches_minus_nineteen() {
        let engine = QLearningEngine::default();
        let mut table = QTable::new();
        let sealed = SensedState::new(0, 0, 0);
        let transition = crash_on_spot(sealed, Action::Nothing);

        assert_eq!(engine.update(&mut table, &transition), -10.0);
        // The untouched sibling actions still read 0.0, so the max over
        // the dead-end state stays 0 and the estimate keeps sinking.
        assert_eq!(engine.update(&mut table, &transition), -19.0);
    }

    #[test]
    fn test_survival_update_discounts_next_state() {
        let engine = QLearningEngine::default();
        let mut table = QTable::new();
        let here = SensedState::new(2, 1, 1);
        let there = SensedState::new(1, 1, 1);
        table.set(there, Action::Nothing, 2.0);

        let new_q = engine.update(
            &mut table,
            &Transition {
                state: here,
                action: Action::Nothing,
                outcome: StepOutcome::Moved,
                next: there,
            },
        );

        // 0 + 0.1 * (0 + 0.9 * 2.0 - 0)
        assert!((new_q - 0.18).abs() < 1e-12);
    }

    #[test]
    fn test_custom_parameters_change_step_size() {
        let engine = QLearningEngine::new(0.5, 0.0).unwrap();
        let mut table = QTable::new();
        let sealed = SensedState::new(0, 0, 0);

        let new_q = engine.update(&mut table, &crash_on_spot(sealed, Action::TurnRight));
        assert_eq!(new_q, -50.0);
    }
}
