// Random draws shared by both particle kinds

use rand::Rng;

// Uniform in [min, max), or `min` when the range is empty
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min, max)
    } else {
        min
    }
}

// Uniform choice from a non-empty option list (config validation guarantees
// the lists are populated before anything is spawned)
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0, options.len())]
}

// Magnitude in [min, max) with a random sign
pub fn signed<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let magnitude = uniform(rng, min, max);
    if rng.gen::<bool>() {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 1.0, 2.5);
            assert!(v >= 1.0 && v < 2.5);
        }
    }

    #[test]
    fn degenerate_range_yields_min() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn signed_draws_both_directions() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..200).map(|_| signed(&mut rng, 0.05, 0.2)).collect();
        assert!(draws.iter().any(|v| *v > 0.0));
        assert!(draws.iter().any(|v| *v < 0.0));
        assert!(draws.iter().all(|v| v.abs() >= 0.05 && v.abs() < 0.2));
    }

    #[test]
    fn pick_only_returns_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = [1, 2, 3];
        for _ in 0..100 {
            assert!(options.contains(&pick(&mut rng, &options)));
        }
    }
}
