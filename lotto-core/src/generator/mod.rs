pub mod sequence;

pub use sequence::{generate, Sequence};

use crate::{LottoConfig, Ticket};
use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// One ticket of `config.ea` independently drawn numbers.
/// Duplicates within a ticket are allowed.
pub fn ticket<R: Rng + ?Sized>(rng: &mut R, config: &LottoConfig) -> Ticket {
    let numbers = generate(config.ea, || random_int(&mut *rng, config.min, config.max)).collect();
    Ticket::new(numbers)
}

/// Lazy batch of `count` tickets
pub fn tickets<'a, R: Rng + ?Sized>(
    rng: &'a mut R,
    count: usize,
    config: &'a LottoConfig,
) -> Sequence<impl FnMut() -> Ticket + 'a> {
    generate(count, move || {
        let ticket = ticket(&mut *rng, config);
        tracing::debug!("Generated ticket {}", ticket);
        ticket
    })
}
