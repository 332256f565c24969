//! Secure random source.
//!
//! Anything that is both [`RngCore`] and [`CryptoRng`] can feed the
//! generator; general-purpose PRNGs don't satisfy the bound. There is no
//! fallback: if the source fails, generation fails.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::RandomSourceUnavailable;

/// The operating system CSPRNG (`getrandom`).
pub use rand::rngs::OsRng as SystemRandom;

pub trait RandomSource {
    /// Fill `dest` with uniformly distributed values.
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<(), RandomSourceUnavailable>;
}

impl<R> RandomSource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<(), RandomSourceUnavailable> {
        let mut bytes = Zeroizing::new(vec![0u8; dest.len() * 4]);
        self.try_fill_bytes(bytes.as_mut_slice())
            .map_err(|e| RandomSourceUnavailable::new(e.to_string()))?;

        for (slot, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
            *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Draw once from `rng` to confirm it is usable.
pub fn probe<R>(rng: &mut R) -> Result<(), RandomSourceUnavailable>
where
    R: RandomSource + ?Sized,
{
    let mut scratch = [0u32; 1];
    rng.fill_u32(&mut scratch)
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::{CryptoRng, RngCore};

    /// A "secure" source whose device is gone.
    pub struct DeadSource;

    impl RngCore for DeadSource {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy device offline"))
        }
    }

    impl CryptoRng for DeadSource {}
}
