//! Independent bilateral in-shoe humidity draws.

use super::round_to;
use rand::Rng;
use synth_core::HumidityConfig;

/// Draw left and right humidity, uniform over the configured range with no
/// coupling between feet.
pub fn sample_humidity<R: Rng>(rng: &mut R, cfg: &HumidityConfig) -> (f64, f64) {
    let left = round_to(rng.gen_range(cfg.range_pct.min..=cfg.range_pct.max), 1);
    let right = round_to(rng.gen_range(cfg.range_pct.min..=cfg.range_pct.max), 1);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_humidity_within_range() {
        let cfg = HumidityConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let (left, right) = sample_humidity(&mut rng, &cfg);
            assert!(cfg.range_pct.contains(left));
            assert!(cfg.range_pct.contains(right));
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let cfg = HumidityConfig {
            range_pct: synth_core::Bounds::new(50.0, 50.0),
        };
        let mut rng = StdRng::seed_from_u64(42);

        let (left, right) = sample_humidity(&mut rng, &cfg);
        assert_eq!(left, 50.0);
        assert_eq!(right, 50.0);
    }
}
