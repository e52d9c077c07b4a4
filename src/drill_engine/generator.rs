use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    digits,
    models::{Problem, ProblemRequest},
};

/// Probability that a problem is built to force a units-column carry.
pub const CARRY_BIAS: f64 = 0.5;

/// Build a fresh RNG from an optional seed.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Single entry point: one problem per request.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng = make_rng(request.rng_seed);
    draw_problem(&mut rng)
}

/// Draw one problem from `rng`.
///
/// Half of the time the units digits are chosen so that they sum past 9.
/// Otherwise both addends are drawn independently from 10..=49.
pub fn draw_problem<R: Rng>(rng: &mut R) -> Problem {
    if rng.gen_bool(CARRY_BIAS) {
        forced_carry(rng)
    } else {
        Problem {
            num1: rng.gen_range(10..=49),
            num2: rng.gen_range(10..=49),
            forced_carry: false,
        }
    }
}

fn forced_carry<R: Rng>(rng: &mut R) -> Problem {
    // A units digit of 0 leaves no partner digit that can carry; redraw.
    let num1 = loop {
        let n: u8 = rng.gen_range(15..=54);
        if digits::units(n) != 0 {
            break n;
        }
    };
    let u1 = digits::units(num1);
    let u2 = rng.gen_range((10 - u1)..=9);
    let tens: u8 = rng.gen_range(1..=3);

    Problem {
        num1,
        num2: tens * 10 + u2,
        forced_carry: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_request_is_deterministic() {
        for seed in [1u64, 42, 999, 0xDEAD_BEEF] {
            assert_eq!(
                generate_problem(ProblemRequest::seeded(seed)),
                generate_problem(ProblemRequest::seeded(seed)),
            );
        }
    }

    #[test]
    fn forced_branch_never_uses_a_round_first_addend() {
        let mut rng = make_rng(Some(7));
        for _ in 0..2_000 {
            let p = forced_carry(&mut rng);
            assert_ne!(p.num1 % 10, 0, "num1={} has no carry partner", p.num1);
            assert!((15..=54).contains(&p.num1));
            assert!((11..=39).contains(&p.num2));
        }
    }
}
