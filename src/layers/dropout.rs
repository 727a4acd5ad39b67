use rand::Rng;

/// Inverted dropout over `values`.
///
/// Each unit is zeroed with probability `rate`, otherwise scaled by
/// `1 / (1 - rate)` so the expected activation is unchanged. One uniform
/// draw is taken per unit. A `rate` of zero leaves `values` untouched and
/// draws nothing.
pub fn apply_inverted_dropout<R: Rng>(values: &mut [f64], rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    let keep_scale = 1.0 / (1.0 - rate);
    for v in values.iter_mut() {
        if rng.gen::<f64>() < rate {
            *v = 0.0;
        } else {
            *v *= keep_scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_rate_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut v = vec![0.2, 0.4, 0.6];
        apply_inverted_dropout(&mut v, 0.0, &mut rng);
        assert_eq!(v, vec![0.2, 0.4, 0.6]);
    }

    #[test]
    fn survivors_are_rescaled() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut v = vec![1.0; 1000];
        apply_inverted_dropout(&mut v, 0.5, &mut rng);
        assert!(v.iter().all(|&x| x == 0.0 || (x - 2.0).abs() < 1e-12));
    }

    #[test]
    fn drop_fraction_tracks_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut v = vec![1.0; 10_000];
        apply_inverted_dropout(&mut v, 0.3, &mut rng);
        let dropped = v.iter().filter(|&&x| x == 0.0).count() as f64 / v.len() as f64;
        assert!((dropped - 0.3).abs() < 0.05, "dropped fraction {dropped}");
    }
}
