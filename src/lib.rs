//! Discrete-time lunar landing simulation exposed as an MDP, plus a
//! state-space discretizer for tabular reinforcement learning.
//!
//! A learning agent `reset`s the [`LanderEnv`] to get the initial state,
//! then repeatedly `step`s it with an [`Action`] until the returned
//! transition reports `done`. The [`Discretizer`] turns the continuous
//! state into a scalar table index for Q-learning style methods.

pub mod action;
pub mod config;
pub mod constants;
pub mod discretizer;
pub mod error;
pub mod simulation;

pub use action::{Action, ACTIONS};
pub use config::EnvConfig;
pub use discretizer::{DiscreteState, Discretizer};
pub use error::EnvError;
pub use simulation::{ContinuousState, LanderEnv, Outcome, Step};
