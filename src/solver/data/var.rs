#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Var(u32);

impl Var {
    pub fn new(i: i32) -> Self {
        assert!(i > 0, "variables are 1-indexed");
        let i = i as u32;
        assert_eq!(i >> 30, 0, "variable index too large");
        Var(i)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Literals are represented as a u32 code: the variable shifted left once,
// with the least significant bit set iff the literal is negative. The two
// literals of a variable get adjacent codes, which keeps literal-indexed
// tables dense.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit(u32);

impl Lit {
    pub fn new(lit: i32) -> Self {
        assert_ne!(lit, 0, "literals cannot be zero");

        let var = lit.unsigned_abs();
        assert_eq!(var >> 30, 0, "literal magnitude too large");

        Lit((var << 1) | (lit < 0) as u32)
    }

    /// The raw code. Used as a dense table index.
    pub fn code(self) -> u32 {
        self.0
    }

    pub fn var(self) -> Var {
        Var(self.0 >> 1)
    }

    pub fn is_pos(self) -> bool {
        self.0 & 1 == 0
    }

    #[allow(unused)]
    pub fn is_neg(self) -> bool {
        self.0 & 1 == 1
    }

    /// Signed DIMACS form of this literal.
    pub fn to_dimacs(self) -> i32 {
        let var = self.var().get() as i32;
        if self.is_pos() {
            var
        } else {
            -var
        }
    }
}

impl From<Var> for Lit {
    fn from(v: Var) -> Self {
        Lit(v.0 << 1)
    }
}

impl std::ops::Neg for Lit {
    type Output = Lit;

    fn neg(self) -> Self::Output {
        Lit(self.0 ^ 1)
    }
}

impl std::fmt::Debug for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_round_trip() {
        for i in [1, -1, 7, -7, 42, -42] {
            assert_eq!(Lit::new(i).to_dimacs(), i);
        }
    }

    #[test]
    fn negation_flips_polarity_only() {
        let lit = Lit::new(3);
        assert_eq!(-lit, Lit::new(-3));
        assert_eq!(-(-lit), lit);
        assert_eq!((-lit).var(), lit.var());
        assert!(lit.is_pos());
        assert!((-lit).is_neg());
    }

    #[test]
    fn var_to_lit_is_positive() {
        let var = Var::new(5);
        assert_eq!(Lit::from(var), Lit::new(5));
    }
}
