//! Cube stakes: powers of two up to 64, at most one above 1.

use super::Invariant;
use crate::cube::{DoublingCube, MAX_STAKE};

/// Invariant: stakes lie in {1,2,4,...,64} and at most one exceeds 1.
pub struct CubeStakesInvariant;

impl Invariant<DoublingCube> for CubeStakesInvariant {
    fn holds(cube: &DoublingCube) -> bool {
        let stakes = cube.stakes();
        let valid = |s: u32| s.is_power_of_two() && s <= MAX_STAKE;
        stakes.iter().all(|s| valid(*s)) && stakes.iter().filter(|s| **s > 1).count() <= 1
    }

    fn description() -> &'static str {
        "Cube stakes are powers of two up to 64 and only one side holds the cube"
    }
}
