mod analyze;
mod assignment;
mod clause;
mod data;
mod decide;
mod log;
mod propagate;
mod trail;
mod watch;

use analyze::AnalyzeResult;
use clause::ClauseDB;
use data::LitVec;
use decide::Brancher;
use propagate::PropagationResult;
use tracing::debug;
use trail::{Trail, TrailReason};
use watch::Watch;

use self::analyze::AnalyzeState;

pub use clause::resolve;
pub use data::{Lit, Var};

/// Search counters, exposed via [`Solver::stats`].
#[derive(Default)]
pub struct Stats {
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
}

#[derive(Default)]
pub struct Solver {
    clause_db: ClauseDB,

    watches: LitVec<Vec<Watch>>,

    trail: Trail,

    // Where on the trail unit propagation should continue.
    unpropagated_lit_pos: usize,

    // The input formula is trivially unsat. This might be because an empty
    // clause or contradictory unit clauses were added.
    trivially_unsat: bool,

    stats: Stats,

    /// Scratch data for conflict analysis, reset for each conflict. Mainly
    /// used in analyze.rs.
    analyze_state: AnalyzeState,

    brancher: Brancher,
}

pub struct Model<'a> {
    assignment: &'a Trail,
}

impl<'a> Model<'a> {
    /// Get the truth value of a DIMACS literal under the model.
    pub fn lit(&self, l: i32) -> bool {
        self.assignment.is_lit_satisfied(Lit::new(l))
    }

    /// `(variable, value)` pairs for every variable, in variable order.
    pub fn assignments(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        (1..=self.assignment.total_vars() as u32)
            .map(move |var| (var, self.assignment.is_lit_satisfied(Lit::new(var as i32))))
    }

    /// The model as signed DIMACS literals, one per variable.
    pub fn as_vec(&self) -> Vec<i32> {
        self.assignments()
            .map(|(var, value)| if value { var as i32 } else { -(var as i32) })
            .collect()
    }
}

impl std::fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Model").field(&self.as_vec()).finish()
    }
}

#[derive(Debug)]
pub struct Proof;

#[derive(Debug)]
pub enum Result<'a> {
    Sat(Model<'a>),
    Unsat(Proof),
}

impl<'a> Result<'a> {
    pub fn is_sat(&self) -> bool {
        matches!(self, Result::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, Result::Unsat(_))
    }

    pub fn unwrap_sat(self) -> Model<'a> {
        match self {
            Result::Sat(model) => model,
            Result::Unsat(_) => panic!("result is not SAT"),
        }
    }

    pub fn unwrap_unsat(self) -> Proof {
        match self {
            Result::Unsat(proof) => proof,
            Result::Sat(_) => panic!("result is SAT"),
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A solver whose branching decisions are driven by `seed` instead of
    /// the built-in default seed.
    pub fn with_seed(seed: u64) -> Self {
        Solver {
            brancher: Brancher::new(seed),
            ..Default::default()
        }
    }

    pub fn from_dimacs(input: &str) -> std::result::Result<Solver, crate::dimacs::ParseError> {
        let clauses = crate::dimacs::Dimacs::parse(input)?;

        let mut solver = Solver::new();
        for clause in clauses {
            solver.add_clause(clause);
        }

        Ok(solver)
    }

    /// Remove duplicate literals. Tautological clauses keep both polarities;
    /// they are never unit and never conflicting, so they are harmless to
    /// watch like any other clause.
    fn normalise_clause(cls: &mut Vec<Lit>) {
        cls.sort_by_key(|lit| lit.code());
        cls.dedup();
    }

    pub fn add_clause<I>(&mut self, cls: I)
    where
        I: IntoIterator<Item = i32>,
    {
        let mut cls: Vec<Lit> = cls.into_iter().map(Lit::new).collect();
        Self::normalise_clause(&mut cls);

        if let Some(max_lit) = cls.iter().max_by_key(|l| l.var().get()) {
            self.trail.expand(max_lit.var());
            self.watches.expand(-Lit::from(max_lit.var()), Vec::new());
        }

        match cls.len() {
            0 => {
                self.trivially_unsat = true;
            }
            1 => match self.trail.get_lit_assignment(cls[0]) {
                // Unit clauses become permanent root-level assignments
                // instead of stored clauses.
                Some(false) => self.trivially_unsat = true,
                Some(true) => {}
                None => self.trail.assign_lit(cls[0], TrailReason::Axiom),
            },
            _ => {
                let cls_idx = self.clause_db.insert_clause(&cls);
                for &lit in &cls[0..2] {
                    self.watches[lit].push(Watch { clause: cls_idx });
                }
            }
        }
    }

    fn all_vars_assigned(&self) -> bool {
        self.trail.assignment_complete()
    }

    fn extract_model(&self) -> Model {
        Model {
            assignment: &self.trail,
        }
    }

    fn decide(&mut self) -> Option<Lit> {
        self.brancher.pick(&self.trail)
    }

    pub fn solve(&mut self) -> Result {
        if self.trivially_unsat {
            return Result::Unsat(Proof);
        }

        loop {
            self.log_state();
            let result = self.propagate();

            if let PropagationResult::Contradiction(conflicting_clause) = result {
                if self.analyze_contradiction(conflicting_clause) == AnalyzeResult::Unsat {
                    debug!("formula is unsat");
                    return Result::Unsat(Proof);
                }
                // The analysis backjumped and asserted the learnt clause's
                // unit literal, so propagation has to run again.
                continue;
            } else if self.all_vars_assigned() {
                // With all variables assigned and propagation finished
                // without contradiction, the assignment is a model.
                let model = self.extract_model();
                debug!("satisfying assignment found: {model:?}");
                assert!(
                    self.check_assignment(),
                    "generated assignment does not satisfy the input formula"
                );
                return Result::Sat(model);
            }

            match self.decide() {
                Some(lit) => {
                    self.stats.decisions += 1;
                    debug!(
                        "decision {lit} opens level {}",
                        self.trail.current_decision_level() + 1
                    );
                    self.trail.assign_lit(lit, TrailReason::Decision);
                }
                None => {
                    unreachable!(
                        "not all variables are assigned, so a decision candidate must exist"
                    );
                }
            }
        }
    }

    /// Check that the current assignment satisfies the entire formula.
    fn check_assignment(&self) -> bool {
        self.clause_db
            .iter()
            .all(|clause| self.trail.is_clause_satisfied(clause))
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
