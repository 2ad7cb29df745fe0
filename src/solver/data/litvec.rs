use super::Lit;

/// Wrapper over `Vec` which is indexed by [`Lit`].
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct LitVec<T>(Vec<T>);

impl<T> LitVec<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Iterate all entries. Only the debug-build watch audits need this.
    #[cfg(any(test, debug_assertions))]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }
}

impl<T: Clone> LitVec<T> {
    /// Resize so that `l` is a valid index.
    pub fn expand(&mut self, l: Lit, val: T) {
        let len = lit_to_idx(l) + 1;

        if len >= self.0.len() {
            self.0.resize(len, val)
        }
    }
}

// Literal codes start at 2 (variable 1, positive), so the code doubles as a
// dense index after shifting it down.
fn lit_to_idx(lit: Lit) -> usize {
    lit.code() as usize - 2
}

impl<T> std::ops::Index<Lit> for LitVec<T> {
    type Output = T;

    fn index(&self, index: Lit) -> &Self::Output {
        &self.0[lit_to_idx(index)]
    }
}

impl<T> std::ops::IndexMut<Lit> for LitVec<T> {
    fn index_mut(&mut self, index: Lit) -> &mut Self::Output {
        &mut self.0[lit_to_idx(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_indices_are_dense() {
        assert_eq!(lit_to_idx(Lit::new(1)), 0);
        assert_eq!(lit_to_idx(Lit::new(-1)), 1);
        assert_eq!(lit_to_idx(Lit::new(2)), 2);
        assert_eq!(lit_to_idx(Lit::new(-2)), 3);
        assert_eq!(lit_to_idx(Lit::new(3)), 4);
        assert_eq!(lit_to_idx(Lit::new(-3)), 5);
    }

    #[test]
    fn expand_and_index() {
        let mut litvec: LitVec<i32> = LitVec::new();
        litvec.expand(Lit::new(-4), 0);

        litvec[Lit::new(1)] = 1;
        litvec[Lit::new(-1)] = -1;
        litvec[Lit::new(3)] = 3;
        litvec[Lit::new(-3)] = -3;

        assert_eq!(litvec[Lit::new(1)], 1);
        assert_eq!(litvec[Lit::new(-1)], -1);
        assert_eq!(litvec[Lit::new(3)], 3);
        assert_eq!(litvec[Lit::new(-3)], -3);
        assert_eq!(litvec[Lit::new(2)], 0);
        assert_eq!(litvec[Lit::new(-4)], 0);
    }
}
