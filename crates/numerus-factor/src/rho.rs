//! Pollard's rho factorization.

use numerus_integers::Integer;

/// Outcome of one Pollard's rho search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RhoResult {
    /// A nontrivial proper divisor of the input.
    Found(Integer),
    /// The gcd jumped straight to the input: the cycle collapsed without
    /// splitting it. Retrying with a different seed may succeed.
    CycleCollapsed,
    /// The iteration budget ran out before the gcd moved off one.
    Exhausted,
}

impl RhoResult {
    /// Returns the divisor if one was found.
    #[must_use]
    pub fn divisor(self) -> Option<Integer> {
        match self {
            RhoResult::Found(d) => Some(d),
            _ => None,
        }
    }
}

/// Searches for a nontrivial divisor of `n > 1` with Floyd cycle detection
/// over the map `f(z) = (z^2 + 1) mod n`.
///
/// Even inputs short-circuit to `Found(2)`. Passing `max_iterations`
/// bounds the search; `None` runs until the gcd moves off one, which for a
/// composite `n` is expected after O(n^(1/4)) steps.
#[must_use]
pub fn pollards_rho(n: &Integer, seed: &Integer, max_iterations: Option<u64>) -> RhoResult {
    let one = Integer::new(1);
    if n.is_even() {
        return RhoResult::Found(Integer::new(2));
    }

    let mut x = seed.clone();
    let mut y = seed.clone();
    let mut d = one.clone();
    let mut iterations = 0u64;

    while d == one {
        if let Some(bound) = max_iterations {
            if iterations >= bound {
                return RhoResult::Exhausted;
            }
            iterations += 1;
        }
        x = step(&x, n);
        y = step(&step(&y, n), n);
        d = (&x - &y).abs().gcd(n);
    }

    if &d == n {
        RhoResult::CycleCollapsed
    } else {
        RhoResult::Found(d)
    }
}

fn step(z: &Integer, n: &Integer) -> Integer {
    (z * z + Integer::new(1)).rem_euclid(n)
}
