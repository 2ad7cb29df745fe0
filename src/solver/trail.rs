use super::{assignment::Assignment, clause::ClauseIdx, Lit, Var};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailReason {
    /// Literal was decided by the brancher.
    Decision,

    /// Literal was forced during unit propagation; `cls` is its antecedent.
    Propagated { cls: ClauseIdx },

    /// Root-level literal from an input unit clause or a learnt unit clause.
    Axiom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailElement {
    pub(crate) lit: Lit,
    pub(crate) reason: TrailReason,
}

/// Chronological record of assignments together with the decision level
/// bookkeeping. `decision_positions[d]` is the trail index of the decision
/// that opened level `d + 1`; everything before `decision_positions[0]` is
/// level 0 and permanent.
#[derive(Default)]
pub(crate) struct Trail {
    trail: Vec<TrailElement>,
    decision_positions: Vec<usize>,
    assignment: Assignment,
}

impl Trail {
    pub fn assigned_vars(&self) -> usize {
        self.trail.len()
    }

    pub fn total_vars(&self) -> usize {
        self.assignment.len()
    }

    pub fn get(&self, idx: usize) -> Option<&TrailElement> {
        self.trail.get(idx)
    }

    pub fn current_decision_level(&self) -> u32 {
        self.decision_positions.len() as u32
    }

    pub fn decision_level(&self, lit: Lit) -> Option<u32> {
        self.assignment.decision_level(lit.var())
    }

    /// Expands internal assignment for new max variable.
    pub fn expand(&mut self, var: Var) {
        self.assignment.expand(var)
    }

    pub fn assignment_complete(&self) -> bool {
        self.trail.len() == self.assignment.len()
    }

    pub fn get_lit_assignment(&self, lit: Lit) -> Option<bool> {
        self.assignment.get(lit)
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.assignment.is_lit_unassigned(lit)
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        self.assignment.is_lit_satisfied(lit)
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        self.assignment.is_lit_unsatisfied(lit)
    }

    pub fn unassigned_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.assignment.unassigned_vars()
    }

    pub fn assign_lit(&mut self, lit: Lit, reason: TrailReason) {
        if reason == TrailReason::Decision {
            self.decision_positions.push(self.trail.len());
        }
        debug_assert!(reason != TrailReason::Axiom || self.current_decision_level() == 0);

        self.trail.push(TrailElement { lit, reason });
        self.assignment
            .assign_lit(lit, self.current_decision_level());
    }

    /// Undo all assignments made after `level` was complete. Returns the new
    /// trail length, which is also the position propagation may resume from.
    pub fn backtrack(&mut self, level: u32) -> usize {
        debug_assert!(level < self.current_decision_level());

        let keep = self.decision_positions[level as usize];
        for elem in self.trail.drain(keep..) {
            self.assignment.unassign_lit(elem.lit);
        }
        self.decision_positions.truncate(level as usize);

        self.trail.len()
    }

    pub fn trail(&self) -> &[TrailElement] {
        &self.trail
    }

    pub fn is_clause_satisfied(&self, clause: &[Lit]) -> bool {
        clause.iter().any(|&lit| self.is_lit_satisfied(lit))
    }
}
