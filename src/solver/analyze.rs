use tracing::debug;

use super::{
    clause::{Clause, ClauseIdx},
    data::VarVec,
    trail::{Trail, TrailReason},
    watch::Watch,
    Lit, Solver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalyzeResult {
    Unsat,
    Done,
}

/// Scratch state for conflict analysis, reset for every conflict.
#[derive(Default)]
pub(crate) struct AnalyzeState {
    /// Variables already part of the analysis.
    seen: VarVec<bool>,

    /// New learnt 1-UIP clause which is under construction.
    new_clause: Vec<Lit>,

    /// Seen literals of the conflict level whose reason clauses have not
    /// been resolved yet.
    open: u32,
}

impl AnalyzeState {
    fn reset(&mut self, num_vars: usize) {
        self.seen.fill(false);
        self.seen.resize(num_vars, false);
        self.new_clause.clear();
        self.open = 0;
    }

    fn analyze_reason(&mut self, skip: Option<Lit>, reason: Clause, trail: &Trail) {
        for &other_lit in reason {
            if skip == Some(other_lit) {
                continue;
            }
            self.analyze_literal(other_lit, trail);
        }
    }

    /// Account for one false literal of a resolved clause: literals below
    /// the conflict level go straight into the learnt clause, literals at
    /// the conflict level stay open until the trail walk reaches them.
    fn analyze_literal(&mut self, lit: Lit, trail: &Trail) {
        if self.seen[lit.var()] {
            return;
        }

        let lit_level = trail
            .decision_level(lit)
            .expect("conflict analysis saw an unassigned literal");
        let current_level = trail.current_decision_level();

        debug_assert!(trail.is_lit_unsatisfied(lit));
        debug_assert!(lit_level <= current_level);

        if lit_level < current_level {
            self.new_clause.push(lit);
        } else {
            self.open += 1;
        }

        self.seen[lit.var()] = true;
    }
}

impl Solver {
    /// Analyze a conflict found at the current decision level: derive the
    /// 1-UIP clause, install it, backjump and assert its unit literal.
    ///
    /// Returns [`AnalyzeResult::Unsat`] when the conflict exists at level 0.
    pub(crate) fn analyze_contradiction(&mut self, clause: ClauseIdx) -> AnalyzeResult {
        self.stats.conflicts += 1;
        debug_assert!(self.unpropagated_lit_pos <= self.trail.assigned_vars());

        let conflict_clause = self.clause_db.get(clause);
        debug_assert!(conflict_clause
            .iter()
            .all(|&lit| self.trail.is_lit_unsatisfied(lit)));
        debug!(
            "analyzing conflict in [{}], trail: {}",
            self.trail.fmt_clause(conflict_clause),
            self.trail.fmt_trail()
        );

        let current_level = self.trail.current_decision_level();
        if current_level == 0 {
            return AnalyzeResult::Unsat;
        }

        #[cfg(debug_assertions)]
        let resolution_clause = self.resolution_learnt_clause(clause);

        let mut trail_pos = self.trail.assigned_vars();
        let mut reason = conflict_clause;
        let mut maybe_uip = None;

        let analyze_state = &mut self.analyze_state;
        analyze_state.reset(self.trail.total_vars());

        // Resolve backwards over the trail until a single literal of the
        // conflict level remains: the first unique implication point.
        loop {
            analyze_state.analyze_reason(maybe_uip, reason, &self.trail);

            let uip_elem = loop {
                debug_assert!(trail_pos > 0);
                trail_pos -= 1;

                let trail_elem = self.trail.get(trail_pos).unwrap();
                if !analyze_state.seen[trail_elem.lit.var()] {
                    continue;
                }
                if self.trail.decision_level(trail_elem.lit) == Some(current_level) {
                    break *trail_elem;
                }
            };
            maybe_uip = Some(uip_elem.lit);

            if analyze_state.open == 1 {
                break;
            }
            analyze_state.open -= 1;

            reason = match uip_elem.reason {
                TrailReason::Propagated { cls } => self.clause_db.get(cls),
                _ => unreachable!("resolved literal must have an antecedent"),
            };
        }

        let uip = maybe_uip.unwrap();
        analyze_state.new_clause.push(-uip);

        let learnt = &mut analyze_state.new_clause;
        debug!("learnt 1-UIP clause {learnt:?}");

        #[cfg(debug_assertions)]
        {
            let mut sorted = learnt.clone();
            sorted.sort_by_key(|l| l.code());
            assert_eq!(
                sorted, resolution_clause,
                "trail walk and explicit resolution disagree"
            );
        }

        // The backjump level is the second largest decision level in the
        // learnt clause. The asserting literal sits in the last position and
        // is the only literal of the conflict level.
        let backjump_level = learnt[..learnt.len() - 1]
            .iter()
            .map(|&lit| self.trail.decision_level(lit).unwrap())
            .max()
            .unwrap_or(0);
        debug_assert!(backjump_level < current_level);

        // Order the learnt clause so that the watched positions hold the two
        // highest decision levels: the asserting literal first, a literal of
        // the backjump level second. After the backjump the clause is then
        // unit on position 0.
        let len = learnt.len();
        learnt.swap(0, len - 1);
        if len >= 2 {
            let (second_pos, _) = learnt[1..]
                .iter()
                .enumerate()
                .max_by_key(|&(_, &lit)| self.trail.decision_level(lit).unwrap())
                .expect("non-unit learnt clause has a second literal");
            learnt.swap(1, second_pos + 1);
        }

        self.unpropagated_lit_pos = self.trail.backtrack(backjump_level);
        debug!("backjumped to level {backjump_level}");

        debug_assert!(self.trail.is_lit_unassigned(-uip));
        debug_assert!(learnt[1..]
            .iter()
            .all(|&lit| self.trail.is_lit_unsatisfied(lit)));

        if len == 1 {
            debug_assert_eq!(backjump_level, 0);
            self.trail.assign_lit(-uip, TrailReason::Axiom);
        } else {
            let learnt_idx = self.clause_db.insert_clause(learnt);
            for &lit in learnt[..2].iter() {
                self.watches[lit].push(Watch { clause: learnt_idx });
            }
            debug!("asserting {} with the learnt clause as antecedent", -uip);
            self.trail
                .assign_lit(-uip, TrailReason::Propagated { cls: learnt_idx });
        }

        AnalyzeResult::Done
    }

    /// Recompute the learnt clause by explicit resolution steps, resolving
    /// on the trail-latest literal of the conflict level each round. Debug
    /// builds cross-check the seen-marking trail walk against this.
    #[cfg(debug_assertions)]
    fn resolution_learnt_clause(&self, conflict: ClauseIdx) -> Vec<Lit> {
        use super::clause::resolve;

        let current_level = self.trail.current_decision_level();

        let mut clause = self.clause_db.get(conflict).to_vec();
        clause.sort_by_key(|l| l.code());
        clause.dedup();

        loop {
            let at_conflict_level = clause
                .iter()
                .filter(|&&lit| self.trail.decision_level(lit) == Some(current_level))
                .count();
            if at_conflict_level == 1 {
                return clause;
            }

            let pivot = self
                .trail
                .trail()
                .iter()
                .rev()
                .find(|elem| clause.iter().any(|&lit| lit.var() == elem.lit.var()))
                .expect("conflict clause has assigned literals");
            let reason = match pivot.reason {
                TrailReason::Propagated { cls } => self.clause_db.get(cls),
                _ => unreachable!("pivot literal must be implied"),
            };

            clause = resolve(&clause, reason, pivot.lit.var());
        }
    }
}
