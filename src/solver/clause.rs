/// Clauses are stored contiguously in a single arena. Every stored clause
/// has at least two literals (unit input clauses become root-level trail
/// entries instead) and a variable appears at most once per clause. The
/// first two positions of a clause are its watched literals.
use std::{num::NonZeroU32, ops::Range};

use super::{Lit, Var};

pub type Clause<'db> = &'db [Lit];
pub type ClauseMut<'db> = &'db mut [Lit];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ClauseIdx {
    start: u32,
    size: NonZeroU32,
}

#[derive(Clone, Default)]
pub struct ClauseDB {
    clause_data: Vec<Lit>,
    clause_ranges: Vec<Range<u32>>,
}

impl ClauseDB {
    pub fn insert_clause(&mut self, cls: Clause) -> ClauseIdx {
        debug_assert!(cls.len() >= 2);

        let start = self.clause_data.len();
        self.clause_data.extend(cls);
        let end = self.clause_data.len();

        debug_assert!(u32::try_from(end).is_ok());
        let start = start as u32;
        let end = end as u32;

        self.clause_ranges.push(start..end);
        ClauseIdx {
            start,
            size: NonZeroU32::new(end - start).expect("insertion of empty clause"),
        }
    }

    pub fn get(&self, r: ClauseIdx) -> Clause {
        debug_assert!(self.is_valid_clause_idx(r));

        let start = r.start as usize;
        let end = (r.start + r.size.get()) as usize;

        &self.clause_data[start..end]
    }

    pub fn get_mut(&mut self, r: ClauseIdx) -> ClauseMut {
        debug_assert!(self.is_valid_clause_idx(r));

        let start = r.start as usize;
        let end = (r.start + r.size.get()) as usize;

        &mut self.clause_data[start..end]
    }

    fn is_valid_clause_idx(&self, r: ClauseIdx) -> bool {
        let entry = self
            .clause_ranges
            .binary_search_by_key(&r.start, |range| range.start);

        match entry {
            Ok(e) => {
                let range = self.clause_ranges[e].clone();
                range.start == r.start && range.end == r.start + r.size.get()
            }
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.clause_ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Clause<'_>> {
        self.clause_ranges
            .iter()
            .map(move |range| &self.clause_data[range.start as usize..range.end as usize])
    }

    /// Like [`ClauseDB::iter`], but also yields the stable index of each
    /// clause. Used by the debug-build watch audits.
    #[cfg(any(test, debug_assertions))]
    pub fn iter_with_idx(&self) -> impl Iterator<Item = (ClauseIdx, Clause<'_>)> {
        self.clause_ranges.iter().map(move |range| {
            let idx = ClauseIdx {
                start: range.start,
                size: NonZeroU32::new(range.end - range.start).expect("empty clause in arena"),
            };
            (idx, &self.clause_data[range.start as usize..range.end as usize])
        })
    }
}

/// Binary resolution of `a` and `b` on the pivot `x`: the union of both
/// literal sets with both polarities of `x` removed.
///
/// The result is deduplicated and sorted by literal code, so equal clauses
/// compare equal regardless of input order.
pub fn resolve(a: Clause, b: Clause, x: Var) -> Vec<Lit> {
    let mut result: Vec<Lit> = a
        .iter()
        .chain(b.iter())
        .copied()
        .filter(|lit| lit.var() != x)
        .collect();

    result.sort_by_key(|l| l.code());
    result.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(cls: &[i32]) -> Vec<Lit> {
        cls.iter().copied().map(Lit::new).collect()
    }

    #[test]
    fn insert_and_get() {
        let mut db = ClauseDB::default();
        let c0 = db.insert_clause(&lits(&[1, -2, 3]));
        let c1 = db.insert_clause(&lits(&[-1, 2]));

        assert_eq!(db.len(), 2);
        assert_eq!(db.get(c0), &lits(&[1, -2, 3])[..]);
        assert_eq!(db.get(c1), &lits(&[-1, 2])[..]);

        db.get_mut(c0).swap(0, 2);
        assert_eq!(db.get(c0), &lits(&[3, -2, 1])[..]);

        let collected: Vec<Vec<Lit>> = db.iter().map(<[Lit]>::to_vec).collect();
        assert_eq!(collected, vec![lits(&[3, -2, 1]), lits(&[-1, 2])]);
    }

    #[test]
    fn resolve_removes_both_pivot_polarities() {
        let a = lits(&[1, 2, -3]);
        let b = lits(&[3, 4]);

        let resolvent = resolve(&a, &b, Var::new(3));
        assert_eq!(resolvent, lits(&[1, 2, 4]));
    }

    #[test]
    fn resolve_has_set_semantics() {
        let a = lits(&[1, -2]);
        let b = lits(&[2, 1, -4]);

        let resolvent = resolve(&a, &b, Var::new(2));
        assert_eq!(resolvent, lits(&[1, -4]));

        // symmetric in its arguments
        assert_eq!(resolvent, resolve(&b, &a, Var::new(2)));
    }

    #[test]
    fn resolvent_is_entailed_by_its_premises() {
        // Truth-table check over the three variables of `a` and `b`: every
        // assignment satisfying both premises satisfies the resolvent.
        let a = lits(&[1, -2]);
        let b = lits(&[2, 3]);
        let resolvent = resolve(&a, &b, Var::new(2));

        let eval = |cls: &[Lit], bits: u32| {
            cls.iter()
                .any(|l| (bits >> (l.var().get() - 1) & 1 == 1) == l.is_pos())
        };

        for bits in 0u32..8 {
            if eval(&a, bits) && eval(&b, bits) {
                assert!(eval(&resolvent, bits));
            }
        }
    }
}
