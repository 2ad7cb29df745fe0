use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{trail::Trail, Lit, Var};

/// Seed used unless [`Solver::with_seed`](super::Solver::with_seed) is
/// given one, so that repeated runs take identical decisions.
pub(crate) const DEFAULT_SEED: u64 = 5201314;

/// Branching heuristic: an unassigned variable and a polarity, both chosen
/// uniformly at random from a seeded generator.
///
/// This is the seam for smarter heuristics; the driver only ever asks it for
/// the next decision literal.
pub(crate) struct Brancher {
    rng: StdRng,
}

impl Brancher {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self, trail: &Trail) -> Option<Lit> {
        let candidates: Vec<Var> = trail.unassigned_vars().collect();
        if candidates.is_empty() {
            return None;
        }

        let var = candidates[self.rng.gen_range(0..candidates.len())];
        let positive: bool = self.rng.gen();

        let lit = Lit::from(var);
        Some(if positive { lit } else { -lit })
    }
}

impl Default for Brancher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::trail::TrailReason;

    #[test]
    fn picks_only_unassigned_variables() {
        let mut trail = Trail::default();
        trail.expand(Var::new(3));
        trail.assign_lit(Lit::new(1), TrailReason::Axiom);
        trail.assign_lit(Lit::new(-3), TrailReason::Axiom);

        let mut brancher = Brancher::default();
        for _ in 0..32 {
            let lit = brancher.pick(&trail).unwrap();
            assert_eq!(lit.var(), Var::new(2));
        }
    }

    #[test]
    fn exhausted_trail_yields_no_decision() {
        let mut trail = Trail::default();
        trail.expand(Var::new(1));
        trail.assign_lit(Lit::new(1), TrailReason::Axiom);

        assert!(Brancher::default().pick(&trail).is_none());
    }

    #[test]
    fn same_seed_same_decisions() {
        let mut trail = Trail::default();
        trail.expand(Var::new(20));

        let mut a = Brancher::new(42);
        let mut b = Brancher::new(42);
        for _ in 0..20 {
            assert_eq!(a.pick(&trail), b.pick(&trail));
        }
    }
}
