use crate::core::prelude::*;

use std::fmt;

/// Uniform random samples from a PCG32 stream.
pub struct IndependentSampler {
    sample_count: u32,
    seed: u64,
    rng: RNG,
}

fn mix_seed(base: u64, seed: u64) -> u64 {
    // splitmix64 finalizer
    let mut z = base ^ seed.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    return z ^ (z >> 31);
}

impl IndependentSampler {
    pub fn new(sample_count: u32, seed: u64) -> Self {
        IndependentSampler {
            sample_count,
            seed,
            rng: RNG::new_sequence(seed),
        }
    }
}

impl Sampler for IndependentSampler {
    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn next_1d(&mut self) -> Float {
        return self.rng.uniform_float();
    }

    fn next_2d(&mut self) -> Point2f {
        let x = self.rng.uniform_float();
        let y = self.rng.uniform_float();
        return Point2f::new(x, y);
    }

    fn clone_sampler(&self) -> Box<dyn Sampler> {
        Box::new(IndependentSampler {
            sample_count: self.sample_count,
            seed: self.seed,
            rng: self.rng.clone(),
        })
    }

    fn clone_with_seed(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(IndependentSampler::new(
            self.sample_count,
            mix_seed(self.seed, seed),
        ))
    }
}

impl fmt::Display for IndependentSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndependentSampler[sample_count={}, seed={}]",
            self.sample_count, self.seed
        )
    }
}

pub fn create_independent_sampler(params: &ParamSet) -> Result<Box<dyn Sampler>, OkapiError> {
    let sample_count = params.find_one_int("sample_count", 1);
    if sample_count <= 0 {
        let msg = format!("Sampler sample_count must be positive, got {}.", sample_count);
        return Err(OkapiError::error(&msg));
    }
    let seed = params.find_one_int("seed", 0);
    return Ok(Box::new(IndependentSampler::new(
        sample_count as u32,
        seed as u64,
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::create_sampler;

    #[test]
    fn test_001() {
        let mut params = ParamSet::new();
        params.add_int("sample_count", 16);
        let mut sampler = create_sampler("independent", &params).unwrap();
        assert_eq!(sampler.sample_count(), 16);
        for _ in 0..100 {
            let p = sampler.next_2d();
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_002() {
        let sampler = IndependentSampler::new(4, 0);
        let mut a = sampler.clone_with_seed(3);
        let mut b = sampler.clone_with_seed(3);
        let mut c = sampler.clone_with_seed(4);
        let va: Vec<Float> = (0..8).map(|_| a.next_1d()).collect();
        let vb: Vec<Float> = (0..8).map(|_| b.next_1d()).collect();
        let vc: Vec<Float> = (0..8).map(|_| c.next_1d()).collect();
        assert_eq!(va, vb);
        assert_ne!(va, vc);
        assert_eq!(a.sample_count(), 4);
    }

    #[test]
    fn test_003() {
        let mut sampler = IndependentSampler::new(1, 7);
        sampler.next_1d();
        let mut copy = sampler.clone_sampler();
        assert_eq!(copy.next_1d(), sampler.next_1d());
        let mut params = ParamSet::new();
        params.add_int("sample_count", 0);
        assert!(create_sampler("independent", &params).is_err());
        assert!(create_sampler("sobol", &ParamSet::new()).is_err());
    }
}
