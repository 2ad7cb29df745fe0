/// Implementation of the unit propagation algorithm for two watched literals.
use std::mem;

use tracing::trace;

use super::{clause::ClauseIdx, trail::TrailReason, watch::Watch, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagationResult {
    Contradiction(ClauseIdx),
    Done,
}

impl Solver {
    /// Propagate all trail literals that have not been propagated yet.
    ///
    /// Clauses are only examined when one of their two watched literals
    /// becomes false. The examined clause either rewatches a non-false
    /// literal, forces its other watched literal, is already satisfied by
    /// the other watched literal, or is conflicting.
    pub(crate) fn propagate(&mut self) -> PropagationResult {
        let mut trail_pos = self.unpropagated_lit_pos;

        while let Some(&trail_elem) = self.trail.get(trail_pos) {
            let lit = trail_elem.lit;
            debug_assert!(self.trail.is_lit_satisfied(lit));
            self.stats.propagations += 1;

            let mut contradiction_found = None;

            // `-lit` has just become false, so every clause watching it must
            // be re-examined. The list is taken out of the index for the
            // scan: rewatching pushes into other literals' lists while this
            // one is iterated.
            let mut watch_list = mem::take(&mut self.watches[-lit]);
            watch_list.retain(|watch| {
                // Once a contradiction was found we stop propagating and
                // just have `retain` keep the remaining watches.
                if contradiction_found.is_some() {
                    return true;
                }

                let cls_idx = watch.clause;
                let cls = self.clause_db.get_mut(cls_idx);

                let watch_pos = if cls[0] == -lit {
                    0
                } else {
                    debug_assert!(cls[1] == -lit);
                    1
                };

                // Search the unwatched literals for a non-false replacement.
                let replacement = cls
                    .iter()
                    .enumerate()
                    .skip(2)
                    .find(|&(_, &candidate)| !self.trail.is_lit_unsatisfied(candidate))
                    .map(|(pos, &candidate)| (pos, candidate));

                if let Some((candidate_pos, candidate)) = replacement {
                    // The replacement becomes a watched literal: move it into
                    // the watched position and register the new watch. The
                    // old watch is dropped by returning false from `retain`.
                    self.watches[candidate].push(Watch { clause: cls_idx });
                    cls.swap(watch_pos, candidate_pos);
                    return false;
                }

                // All unwatched literals are false; the clause is satisfied,
                // unit or conflicting depending on the other watched literal.
                let other_pos = watch_pos ^ 1;
                let other = cls[other_pos];

                if self.trail.is_lit_satisfied(other) {
                    // Clause already satisfied, the watch stays.
                } else if self.trail.is_lit_unassigned(other) {
                    trace!("implied {other} by clause {cls:?}");
                    self.trail
                        .assign_lit(other, TrailReason::Propagated { cls: cls_idx });
                    // Reason clauses keep the literal they forced at
                    // position 0; both positions stay watched.
                    cls.swap(0, other_pos);
                } else {
                    contradiction_found = Some(cls_idx);
                }
                true
            });
            self.watches[-lit] = watch_list;

            if let Some(conflicting_clause) = contradiction_found {
                trace!("conflict in clause {:?}", self.clause_db.get(conflicting_clause));
                return PropagationResult::Contradiction(conflicting_clause);
            }

            trail_pos += 1;
        }

        self.unpropagated_lit_pos = trail_pos;
        debug_assert_eq!(self.unpropagated_lit_pos, self.trail.assigned_vars());
        self.audit_watches();

        PropagationResult::Done
    }

    /// Debug-build audit of the watch invariants: every stored clause is
    /// watched on exactly its first two literals, and after a completed
    /// propagation no clause is falsified or unit without having been
    /// propagated.
    #[cfg(debug_assertions)]
    fn audit_watches(&self) {
        use std::collections::HashMap;

        let mut watch_counts: HashMap<ClauseIdx, usize> = HashMap::new();
        for watch_list in self.watches.iter() {
            for watch in watch_list {
                *watch_counts.entry(watch.clause).or_default() += 1;
            }
        }

        for (idx, cls) in self.clause_db.iter_with_idx() {
            assert_ne!(cls[0], cls[1]);
            assert_eq!(watch_counts.get(&idx).copied().unwrap_or(0), 2);
            assert!(self.watches[cls[0]].iter().any(|w| w.clause == idx));
            assert!(self.watches[cls[1]].iter().any(|w| w.clause == idx));

            if !self.trail.is_clause_satisfied(cls) {
                let unassigned = cls
                    .iter()
                    .filter(|&&l| self.trail.is_lit_unassigned(l))
                    .count();
                assert!(
                    unassigned >= 2,
                    "clause {cls:?} is unit or falsified after propagation"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn audit_watches(&self) {}
}
