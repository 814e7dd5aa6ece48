use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source for food placement, so a game can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let xs: Vec<usize> = (0..16).map(|_| a.random_range(0..20)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.random_range(0..20)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_optional_seed_is_kept() {
        assert_eq!(SessionRng::from_optional_seed(Some(99)).seed(), 99);
    }
}
