/// A source of uniform draws in `[0, 1)`.
///
/// The engine asks for one draw per cell that needs a stochastic decision,
/// so implementations only need to be cheap and, for reproducible runs,
/// seedable.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// The default source, seeded when `seed` is given and from entropy otherwise.
pub fn default_source(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = default_source(Some(7));
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = default_source(Some(42));
        let mut b = default_source(Some(42));
        for _ in 0..100 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn borrowed_source_advances_owner() {
        fn draw<R: RandomSource>(mut source: R) -> f64 {
            source.next_unit()
        }

        let mut owner = default_source(Some(3));
        let mut twin = default_source(Some(3));
        draw(&mut owner);
        twin.next_unit();
        assert_eq!(owner.next_unit().to_bits(), twin.next_unit().to_bits());
    }
}
