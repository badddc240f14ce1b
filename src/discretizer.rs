use crate::error::EnvError;

/// Bucket indices for one continuous state, one per coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteState {
    pub x: usize,
    pub y: usize,
    pub vx: usize,
    pub vy: usize,
}

/// Maps the 4-dimensional continuous state onto a finite grid for tabular
/// methods.
///
/// Each coordinate has its own strictly increasing boundary array; a value
/// falls into the half-open bucket `(b[i-1], b[i]]`, so a value equal to a
/// boundary belongs to that boundary's bucket. An array of n boundaries
/// yields n + 1 buckets. The mapping is pure and the instance immutable, so
/// shared read-only use needs no synchronization.
#[derive(Debug, Clone)]
pub struct Discretizer {
    x_bins: Vec<f32>,
    y_bins: Vec<f32>,
    vx_bins: Vec<f32>,
    vy_bins: Vec<f32>,
}

fn check_bins(name: &str, bins: &[f32]) -> Result<(), EnvError> {
    if bins.iter().any(|b| !b.is_finite()) {
        return Err(EnvError::InvalidConfiguration(format!(
            "{name} boundaries must be finite"
        )));
    }
    if bins.windows(2).any(|w| w[0] >= w[1]) {
        return Err(EnvError::InvalidConfiguration(format!(
            "{name} boundaries must be strictly increasing"
        )));
    }
    Ok(())
}

// Bucket of `v`: the count of boundaries strictly below it
fn bucket(bins: &[f32], v: f32) -> usize {
    bins.partition_point(|b| *b < v)
}

impl Discretizer {
    /// Build a discretizer from one boundary array per coordinate.
    ///
    /// Non-strictly-increasing (or non-finite) boundaries are a
    /// configuration error, caught here rather than at lookup time.
    pub fn new(
        x_bins: Vec<f32>,
        y_bins: Vec<f32>,
        vx_bins: Vec<f32>,
        vy_bins: Vec<f32>,
    ) -> Result<Self, EnvError> {
        check_bins("x", &x_bins)?;
        check_bins("y", &y_bins)?;
        check_bins("vx", &vx_bins)?;
        check_bins("vy", &vy_bins)?;
        Ok(Self {
            x_bins,
            y_bins,
            vx_bins,
            vy_bins,
        })
    }

    /// The fixed lander geometry, 3·4·3·3 = 108 states:
    /// x splits at the pad edges, y at ground/low/medium altitude, vx at the
    /// crash speed, vy between crash-speed descent, safe descent and
    /// hovering.
    pub fn default_lander() -> Self {
        Self::new(
            vec![-1.5, 1.5],
            vec![0.1, 0.5, 1.0],
            vec![-0.5, 0.5],
            vec![-0.5, -0.1],
        )
        .expect("fixed lander boundaries are strictly increasing")
    }

    /// Bucket counts per axis `(n_x, n_y, n_vx, n_vy)`.
    pub fn shape(&self) -> (usize, usize, usize, usize) {
        (
            self.x_bins.len() + 1,
            self.y_bins.len() + 1,
            self.vx_bins.len() + 1,
            self.vy_bins.len() + 1,
        )
    }

    /// Total number of distinct discrete states.
    pub fn n_states(&self) -> usize {
        let (nx, ny, nvx, nvy) = self.shape();
        nx * ny * nvx * nvy
    }

    /// Bucket tuple for a `[x, y, vx, vy]` state.
    ///
    /// Wrong arity or non-finite components fail with `InvalidInput`.
    pub fn bucketize(&self, state: &[f32]) -> Result<DiscreteState, EnvError> {
        let [x, y, vx, vy] = <[f32; 4]>::try_from(state).map_err(|_| {
            EnvError::InvalidInput(format!("expected 4 components, got {}", state.len()))
        })?;
        if !(x.is_finite() && y.is_finite() && vx.is_finite() && vy.is_finite()) {
            return Err(EnvError::InvalidInput(
                "state components must be finite".into(),
            ));
        }
        Ok(DiscreteState {
            x: bucket(&self.x_bins, x),
            y: bucket(&self.y_bins, y),
            vx: bucket(&self.vx_bins, vx),
            vy: bucket(&self.vy_bins, vy),
        })
    }

    /// Row-major flattening of a bucket tuple:
    /// `x + y·Nx + vx·Nx·Ny + vy·Nx·Ny·Nvx`.
    pub fn flatten(&self, d: DiscreteState) -> usize {
        let (nx, ny, nvx, _) = self.shape();
        d.x + d.y * nx + d.vx * nx * ny + d.vy * nx * ny * nvx
    }

    /// Scalar table index for a `[x, y, vx, vy]` state, in
    /// `0..self.n_states()`.
    pub fn state_index(&self, state: &[f32]) -> Result<usize, EnvError> {
        Ok(self.flatten(self.bucketize(state)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_has_108_states() {
        let disc = Discretizer::default_lander();
        assert_eq!(disc.shape(), (3, 4, 3, 3));
        assert_eq!(disc.n_states(), 108);
    }

    #[test]
    fn boundary_values_map_into_their_own_bucket() {
        // Right-inclusive buckets: the pad edge still counts as the pad.
        let disc = Discretizer::default_lander();
        let d = disc.bucketize(&[1.5, 0.1, 0.5, -0.5]).unwrap();
        assert_eq!(d, DiscreteState { x: 1, y: 0, vx: 1, vy: 0 });

        let d = disc.bucketize(&[-1.5, 1.0, -0.5, -0.1]).unwrap();
        assert_eq!(d, DiscreteState { x: 0, y: 2, vx: 0, vy: 1 });
    }

    #[test]
    fn open_ended_buckets_catch_extremes() {
        let disc = Discretizer::default_lander();
        let low = disc.bucketize(&[-100.0, -100.0, -100.0, -100.0]).unwrap();
        assert_eq!(low, DiscreteState { x: 0, y: 0, vx: 0, vy: 0 });

        let high = disc.bucketize(&[100.0, 100.0, 100.0, 100.0]).unwrap();
        assert_eq!(high, DiscreteState { x: 2, y: 3, vx: 2, vy: 2 });
    }

    #[test]
    fn same_input_same_bucket() {
        let disc = Discretizer::default_lander();
        let state = [0.3, 0.7, -0.2, -0.3];
        assert_eq!(
            disc.bucketize(&state).unwrap(),
            disc.bucketize(&state).unwrap()
        );
    }

    #[test]
    fn flattened_indices_cover_the_table_without_collisions() {
        let disc = Discretizer::default_lander();
        let (nx, ny, nvx, nvy) = disc.shape();
        let mut seen = vec![false; disc.n_states()];
        for x in 0..nx {
            for y in 0..ny {
                for vx in 0..nvx {
                    for vy in 0..nvy {
                        let idx = disc.flatten(DiscreteState { x, y, vx, vy });
                        assert!(idx < disc.n_states());
                        assert!(!seen[idx], "index {idx} produced twice");
                        seen[idx] = true;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn state_index_flattens_the_bucket_tuple() {
        let disc = Discretizer::default_lander();
        // Reset state (0, 1.5, 0, -0.5): x=1, y=3, vx=1, vy=0
        let idx = disc.state_index(&[0.0, 1.5, 0.0, -0.5]).unwrap();
        assert_eq!(idx, 1 + 3 * 3 + 1 * 3 * 4);
    }

    #[test]
    fn wrong_arity_is_invalid_input() {
        let disc = Discretizer::default_lander();
        assert!(matches!(
            disc.bucketize(&[0.0, 1.0, 0.0]),
            Err(EnvError::InvalidInput(_))
        ));
        assert!(matches!(
            disc.bucketize(&[0.0; 5]),
            Err(EnvError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_components_are_invalid_input() {
        let disc = Discretizer::default_lander();
        assert!(matches!(
            disc.bucketize(&[f32::NAN, 0.0, 0.0, 0.0]),
            Err(EnvError::InvalidInput(_))
        ));
        assert!(matches!(
            disc.bucketize(&[0.0, f32::INFINITY, 0.0, 0.0]),
            Err(EnvError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_increasing_boundaries_are_rejected() {
        let err = Discretizer::new(
            vec![1.5, -1.5],
            vec![0.1, 0.5, 1.0],
            vec![-0.5, 0.5],
            vec![-0.5, -0.1],
        );
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));

        // Equal adjacent boundaries are not strictly increasing either
        let err = Discretizer::new(
            vec![-1.5, 1.5],
            vec![0.1, 0.1, 1.0],
            vec![-0.5, 0.5],
            vec![-0.5, -0.1],
        );
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));
    }
}
