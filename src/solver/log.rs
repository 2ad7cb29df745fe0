use tracing::{debug, instrument};

use super::{
    trail::{Trail, TrailReason},
    Lit, Solver,
};

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const END: &str = "\u{1b}[0m";

impl Solver {
    /// Dump every clause, colored by the current assignment. Only does
    /// anything in debug builds under `RUST_LOG=debug` or finer.
    #[instrument(skip_all)]
    pub(crate) fn log_state(&self) {
        debug!("database of {} clauses", self.clause_db.len());

        #[cfg(debug_assertions)]
        for cls in self.clause_db.iter() {
            debug!("{}", self.trail.fmt_clause(cls));
        }
    }
}

impl Trail {
    fn fmt_lit(&self, lit: Lit) -> String {
        match self.get_lit_assignment(lit) {
            Some(true) => format!("{GREEN}{lit}{END}"),
            Some(false) => format!("{RED}{lit}{END}"),
            None => format!("{lit}"),
        }
    }

    pub(crate) fn fmt_clause(&self, clause: &[Lit]) -> String {
        let lits: Vec<String> = clause.iter().map(|&lit| self.fmt_lit(lit)).collect();
        lits.join(", ")
    }

    /// The trail as `[1D, 2P, ...]` with D/P/A marking decided, propagated
    /// and axiomatic literals.
    pub(crate) fn fmt_trail(&self) -> String {
        let entries: Vec<String> = self
            .trail()
            .iter()
            .map(|trail_elem| {
                let lit = trail_elem.lit;
                match trail_elem.reason {
                    TrailReason::Decision => format!("{lit}D"),
                    TrailReason::Propagated { .. } => format!("{lit}P"),
                    TrailReason::Axiom => format!("{lit}A"),
                }
            })
            .collect();

        format!("[{}]", entries.join(", "))
    }
}
