// Physical defaults for the lunar module, SI units
pub const LUNAR_GRAVITY: f32 = 1.62; // gravitational acceleration in m/s²
pub const LANDER_MASS: f32 = 1000.0; // module mass in kg
pub const MAIN_THRUST: f32 = 2000.0; // main engine force in N
pub const SIDE_THRUST: f32 = 10.0; // side engine force in N
pub const TIME_STEP: f32 = 0.04; // integration step in seconds

// Episode limits
pub const MAX_EPISODE_STEPS: u32 = 1000; // T_MAX cutoff
pub const X_LIMIT: f32 = 4.5; // |x| beyond this ends the episode

// Touchdown tolerances
pub const PAD_HALF_WIDTH: f32 = 1.5; // |x| for a pad touchdown in meters
pub const SAFE_SPEED: f32 = 0.5; // |vx| and |vy| limit for a soft landing

// Terminal rewards
pub const LANDED_REWARD: f32 = 100.0;
pub const CRASHED_PENALTY: f32 = -1000.0;
pub const OUT_OF_BOUNDS_PENALTY: f32 = -100.0;

// Default bound on the stochastic force perturbation in N
pub const NOISE_SCALE: f32 = 50.0;
