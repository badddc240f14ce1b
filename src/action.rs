use crate::config::EnvConfig;
use crate::error::EnvError;

/// Discrete thruster commands available to the agent.
///
/// Side engines push the module sideways: the left engine pushes it to the
/// right, the right engine to the left. The main engine pushes straight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// No force applied.
    None,
    /// Left engine: force to the right.
    LeftThrust,
    /// Right engine: force to the left.
    RightThrust,
    /// Main engine: force upward.
    MainThrust,
}

pub const ACTIONS: [Action; 4] = [
    Action::None,
    Action::LeftThrust,
    Action::RightThrust,
    Action::MainThrust,
];

impl Action {
    /// Force `(fx, fy)` in newtons applied by this action under `config`.
    pub fn force(self, config: &EnvConfig) -> (f32, f32) {
        match self {
            Action::None => (0.0, 0.0),
            Action::LeftThrust => (config.side_thrust, 0.0),
            Action::RightThrust => (-config.side_thrust, 0.0),
            Action::MainThrust => (0.0, config.main_thrust),
        }
    }

    /// Per-step reward penalty, time-step cost included.
    pub fn penalty(self) -> f32 {
        match self {
            Action::None => -1.0,
            Action::LeftThrust => -1.0,
            Action::RightThrust => -1.5,
            Action::MainThrust => -1.0,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::None),
            1 => Ok(Action::LeftThrust),
            2 => Ok(Action::RightThrust),
            3 => Ok(Action::MainThrust),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_table_resolves_every_action() {
        let config = EnvConfig::default();
        assert_eq!(Action::None.force(&config), (0.0, 0.0));
        assert_eq!(Action::LeftThrust.force(&config), (10.0, 0.0));
        assert_eq!(Action::RightThrust.force(&config), (-10.0, 0.0));
        assert_eq!(Action::MainThrust.force(&config), (0.0, 2000.0));
    }

    #[test]
    fn penalties_match_action_table() {
        assert_eq!(Action::None.penalty(), -1.0);
        assert_eq!(Action::LeftThrust.penalty(), -1.0);
        assert_eq!(Action::RightThrust.penalty(), -1.5);
        assert_eq!(Action::MainThrust.penalty(), -1.0);
    }

    #[test]
    fn raw_values_round_trip() {
        for (raw, action) in ACTIONS.iter().enumerate() {
            assert_eq!(Action::try_from(raw as u8).unwrap(), *action);
        }
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        assert!(matches!(
            Action::try_from(99),
            Err(EnvError::InvalidAction(99))
        ));
    }
}
