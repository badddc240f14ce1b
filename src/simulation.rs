use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::Action;
use crate::config::EnvConfig;
use crate::constants::*;
use crate::error::EnvError;

/// Continuous physical state of the module, all values centered at zero:
/// negative velocities mean leftward or downward motion, ground is `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl ContinuousState {
    /// `[x, y, vx, vy]`, the layout the discretizer consumes.
    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.vx, self.vy]
    }
}

// Initial state after reset
const INITIAL_STATE: ContinuousState = ContinuousState {
    x: 0.0,
    y: 1.5,
    vx: 0.0,
    vy: -0.5,
};

/// Episode outcome. Anything other than `Ongoing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// Touched down on the pad slowly enough.
    Landed,
    /// Hit the ground off the pad or too fast.
    Crashed,
    /// Drifted past the horizontal limit, or ran out of time.
    OutOfBounds,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// One transition of the MDP.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub state: ContinuousState,
    pub reward: f32,
    pub done: bool,
    pub outcome: Outcome,
}

/// Discrete-time lunar module simulation exposed as an MDP.
///
/// The environment owns its state exclusively and mutates it in place on
/// every `step`. Instances are fully independent; driving several from
/// separate threads needs no synchronization.
pub struct LanderEnv {
    config: EnvConfig,
    state: ContinuousState,
    steps: u32,
    outcome: Outcome,
    rng: StdRng,
}

impl LanderEnv {
    /// Environment with an entropy-seeded RNG for the stochastic mode.
    pub fn new(config: EnvConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Environment with a fixed RNG seed, for reproducible stochastic runs.
    pub fn seeded(config: EnvConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EnvConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: INITIAL_STATE,
            steps: 0,
            outcome: Outcome::Ongoing,
            rng,
        }
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Start a fresh episode. Callable at any time, mid-episode included.
    pub fn reset(&mut self) -> ContinuousState {
        self.state = INITIAL_STATE;
        self.steps = 0;
        self.outcome = Outcome::Ongoing;
        self.state
    }

    /// Advance the simulation by one time step.
    ///
    /// Resolves the action to a force, perturbs it when the instance is
    /// stochastic, integrates with semi-implicit Euler (velocity before
    /// position), then evaluates terminal conditions in priority order:
    /// landed, crashed, out of horizontal bounds, episode cutoff. Returns
    /// the updated state with the accumulated reward.
    ///
    /// Stepping a finished episode is an error and mutates nothing; call
    /// `reset` to start over.
    pub fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        if self.outcome.is_terminal() {
            return Err(EnvError::StepAfterTerminal {
                outcome: self.outcome,
            });
        }

        let (mut force_x, mut force_y) = action.force(&self.config);
        if self.config.stochastic {
            // Bounded jitter on each force component, applied before the
            // velocity update.
            let s = self.config.noise_scale;
            force_x += self.rng.gen_range(-s..=s);
            force_y += self.rng.gen_range(-s..=s);
        }

        let acc_x = force_x / self.config.mass;
        let acc_y = force_y / self.config.mass - self.config.gravity;

        let dt = self.config.dt;
        self.state.vx += acc_x * dt;
        self.state.vy += acc_y * dt;
        self.state.x += self.state.vx * dt;
        self.state.y += self.state.vy * dt;

        self.steps += 1;

        // Per-action penalty already contains the time-step cost
        let mut reward = action.penalty();

        let ContinuousState { x, y, vx, vy } = self.state;
        let on_pad = x.abs() <= PAD_HALF_WIDTH && vx.abs() <= SAFE_SPEED && vy.abs() <= SAFE_SPEED;

        // First match wins; one outcome per step
        self.outcome = if y <= 0.0 && on_pad {
            reward += LANDED_REWARD;
            Outcome::Landed
        } else if y <= 0.0 && !on_pad {
            reward += CRASHED_PENALTY;
            Outcome::Crashed
        } else if x.abs() >= X_LIMIT || self.steps >= self.config.max_steps {
            reward += OUT_OF_BOUNDS_PENALTY;
            Outcome::OutOfBounds
        } else {
            Outcome::Ongoing
        };

        Ok(Step {
            state: self.state,
            reward,
            done: self.outcome.is_terminal(),
            outcome: self.outcome,
        })
    }

    /// Step from a raw action value, the surface tabular agents use.
    ///
    /// An unresolved value fails with `InvalidAction` before any state is
    /// touched; there is no silent defaulting.
    pub fn step_index(&mut self, action: u8) -> Result<Step, EnvError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    /// Read-only snapshot of the current state.
    pub fn get_state(&self) -> ContinuousState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Steps taken since the last reset.
    pub fn elapsed_steps(&self) -> u32 {
        self.steps
    }

    /// Print the current state for diagnostics. Never mutates.
    pub fn render(&self) {
        let ContinuousState { x, y, vx, vy } = self.state;
        println!(
            "t={:4} x={:+8.4} y={:+8.4} vx={:+7.4} vy={:+7.4} [{:?}]",
            self.steps, x, y, vx, vy, self.outcome
        );
    }
}
