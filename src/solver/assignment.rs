use super::{data::VarVec, Lit, Var};

#[derive(Clone, Copy, Debug)]
struct AssignData {
    status: bool,
    decision_level: u32,
}

/// Per-variable truth value and decision level. The chronological order of
/// assignments lives in the [`Trail`](super::trail::Trail), which owns this.
#[derive(Default)]
pub(crate) struct Assignment {
    assignment: VarVec<Option<AssignData>>,
}

impl Assignment {
    pub fn expand(&mut self, v: Var) {
        self.assignment.expand(v, None);
    }

    pub fn get(&self, lit: Lit) -> Option<bool> {
        self.assignment[lit.var()].map(|var_val| var_val.status == lit.is_pos())
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        self.get(lit) == Some(true)
    }

    pub fn is_lit_assigned(&self, lit: Lit) -> bool {
        self.assignment[lit.var()].is_some()
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.assignment[lit.var()].is_none()
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        self.get(lit) == Some(false)
    }

    pub fn decision_level(&self, v: Var) -> Option<u32> {
        self.assignment[v].map(|var_val| var_val.decision_level)
    }

    pub fn assign_lit(&mut self, lit: Lit, decision_level: u32) {
        debug_assert!(self.is_lit_unassigned(lit));

        self.assignment[lit.var()] = Some(AssignData {
            status: lit.is_pos(),
            decision_level,
        });
    }

    pub fn unassign_lit(&mut self, lit: Lit) {
        debug_assert!(self.is_lit_assigned(lit));

        self.assignment[lit.var()] = None;
    }

    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// All variables without a value, in index order.
    pub fn unassigned_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.assignment
            .iter_with_var()
            .filter(|(_, data)| data.is_none())
            .map(|(var, _)| var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_levels() {
        let mut assignment = Assignment::default();
        assignment.expand(Var::new(3));

        assignment.assign_lit(Lit::new(-2), 0);
        assignment.assign_lit(Lit::new(3), 1);

        assert_eq!(assignment.get(Lit::new(2)), Some(false));
        assert_eq!(assignment.get(Lit::new(-2)), Some(true));
        assert_eq!(assignment.decision_level(Var::new(2)), Some(0));
        assert_eq!(assignment.decision_level(Var::new(3)), Some(1));
        assert_eq!(assignment.decision_level(Var::new(1)), None);

        let unassigned: Vec<u32> = assignment.unassigned_vars().map(Var::get).collect();
        assert_eq!(unassigned, vec![1]);

        assignment.unassign_lit(Lit::new(3));
        assert!(assignment.is_lit_unassigned(Lit::new(3)));
        assert_eq!(assignment.unassigned_vars().count(), 2);
    }
}
