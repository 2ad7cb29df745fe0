use kitesat::{Dimacs, Result, Solver};

#[test]
fn unit_cascade() {
    let mut solver =
        Solver::from_dimacs(include_str!("../cnf_examples/3_3_unit_cascade.dimacs")).unwrap();
    let model = solver.solve().unwrap_sat();
    assert_eq!(model.as_vec(), vec![1, 2, 3]);
}

#[test]
fn contradictory_units() {
    let mut solver = Solver::from_dimacs(include_str!(
        "../cnf_examples/1_2_contradictory_units.dimacs"
    ))
    .unwrap();
    assert!(solver.solve().is_unsat());
}

#[test]
fn all_polarity_combinations() {
    let mut solver =
        Solver::from_dimacs(include_str!("../cnf_examples/2_4_all_polarities.dimacs")).unwrap();
    assert!(solver.solve().is_unsat());
}

#[test]
fn tautological_clause_is_tolerated() {
    let mut solver =
        Solver::from_dimacs(include_str!("../cnf_examples/2_2_tautology.dimacs")).unwrap();

    let result = solver.solve();
    assert!(matches!(&result, Result::Sat(model) if model.lit(-2)));
}

#[test]
fn duplicate_literals_are_normalized() {
    let mut solver = Solver::from_dimacs(include_str!(
        "../cnf_examples/2_3_duplicate_literals.dimacs"
    ))
    .unwrap();
    assert!(solver.solve().is_unsat());
}

#[test]
fn pigeonhole_3_2() {
    let mut solver =
        Solver::from_dimacs(include_str!("../cnf_examples/6_9_pigeonhole_3_2.dimacs")).unwrap();
    assert!(solver.solve().is_unsat());
}

#[test]
fn pigeonhole_4_3() {
    let mut solver = Solver::from_dimacs(include_str!(
        "../cnf_examples/12_22_pigeonhole_4_3.dimacs"
    ))
    .unwrap();

    assert!(solver.solve().is_unsat());
    assert!(solver.stats().conflicts >= 1);
}

#[test]
fn random_satisfiable_instance() {
    let mut solver =
        Solver::from_dimacs(include_str!("../cnf_examples/12_30_random_sat.dimacs")).unwrap();

    let model = solver.solve().unwrap_sat();
    assert_eq!(model.as_vec().len(), 12);
}

// The verdict must not depend on the branching order, only the particular
// model and the search statistics may.
#[test]
fn verdict_is_seed_independent() {
    for seed in 0..16 {
        let mut unsat = Solver::with_seed(seed);
        for clause in
            Dimacs::parse(include_str!("../cnf_examples/6_9_pigeonhole_3_2.dimacs")).unwrap()
        {
            unsat.add_clause(clause);
        }
        assert!(unsat.solve().is_unsat());

        let mut sat = Solver::with_seed(seed);
        for clause in
            Dimacs::parse(include_str!("../cnf_examples/12_30_random_sat.dimacs")).unwrap()
        {
            sat.add_clause(clause);
        }
        assert!(sat.solve().is_sat());
    }
}
