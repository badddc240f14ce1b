use rand::Rng;

use lander_env::{Discretizer, EnvConfig, EnvError, LanderEnv, ACTIONS};

const DEFAULT_CONFIG_PATH: &str = "config/default.ron";

/// Runs one random-policy episode and prints each state alongside its
/// discretized table index.
///
/// Usage: lander-env [--stochastic] [--seed N]
fn main() -> Result<(), EnvError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stochastic = args.iter().any(|a| a == "--stochastic");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse::<u64>().ok());

    let mut config = if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
        EnvConfig::load(DEFAULT_CONFIG_PATH)?
    } else {
        EnvConfig::default()
    };
    config.stochastic = stochastic;

    let mut env = match seed {
        Some(seed) => LanderEnv::seeded(config, seed),
        None => LanderEnv::new(config),
    };
    let discretizer = Discretizer::default_lander();
    let mut rng = rand::thread_rng();

    env.reset();
    let mut total_reward = 0.0;
    loop {
        let action = ACTIONS[rng.gen_range(0..ACTIONS.len())];
        let step = env.step(action)?;
        total_reward += step.reward;
        env.render();
        if step.done {
            let index = discretizer.state_index(&step.state.as_array())?;
            println!(
                "episode finished: {:?} after {} steps, total reward {:.1}, final state index {}/{}",
                step.outcome,
                env.elapsed_steps(),
                total_reward,
                index,
                discretizer.n_states()
            );
            break;
        }
    }
    Ok(())
}
