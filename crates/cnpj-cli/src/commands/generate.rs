//! Generate command implementation.

use super::{with_engine, CommandResult, Variant};
use crate::output;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

pub fn run(variant: Variant, count: u32, seed: Option<u64>, json: bool) -> CommandResult {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    debug!(?variant, count, seeded = seed.is_some(), "generating identifiers");

    let ids: Vec<String> = with_engine!(variant, |engine| {
        (0..count).map(|_| engine.generate_with(rng.as_mut())).collect()
    });

    if json {
        println!("{}", output::format_json(&ids));
    } else {
        for id in ids {
            println!("{}", id);
        }
    }
    Ok(())
}
