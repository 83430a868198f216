//! Invariance properties: the SAT/UNSAT outcome survives clause
//! reordering, literal reordering, global polarity flips, and the
//! addition of tautological clauses.
use risat::{Certificate, CnfProblem, Config, SatSolverIF, Solver};

const SAT_PROBLEM: [&[i32]; 5] = [&[1, -2], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]];
const UNSAT_PROBLEM: [&[i32]; 6] = [
    &[1, -2],
    &[-1, 3, -4],
    &[1, 3, -4],
    &[-3, -5],
    &[-3, 5],
    &[3, 4],
];

fn outcome(num_vars: u32, clauses: &[Vec<i32>]) -> Option<Vec<bool>> {
    let cnf = CnfProblem::new(num_vars, clauses.to_vec());
    let mut s = Solver::try_from((&Config::default(), &cnf)).expect("failed to build");
    match s.solve().expect("solver error") {
        Certificate::Sat(model) => {
            for (i, clause) in clauses.iter().enumerate() {
                assert!(
                    clause
                        .iter()
                        .any(|l| if *l < 0 { !model[-l as usize] } else { model[*l as usize] }),
                    "the model doesn't satisfy clause #{i} {clause:?}"
                );
            }
            Some(model)
        }
        Certificate::Unsat => None,
    }
}

fn to_vecs(clauses: &[&[i32]]) -> Vec<Vec<i32>> {
    clauses.iter().map(|c| c.to_vec()).collect::<Vec<_>>()
}

#[test]
fn clause_order_invariance() {
    let base = to_vecs(&SAT_PROBLEM);
    assert!(outcome(5, &base).is_some());
    let mut reversed = base.clone();
    reversed.reverse();
    assert!(outcome(5, &reversed).is_some());
    let mut rotated = base.clone();
    rotated.rotate_left(2);
    assert!(outcome(5, &rotated).is_some());

    let base = to_vecs(&UNSAT_PROBLEM);
    assert!(outcome(5, &base).is_none());
    let mut reversed = base.clone();
    reversed.reverse();
    assert!(outcome(5, &reversed).is_none());
    let mut rotated = base;
    rotated.rotate_left(3);
    assert!(outcome(5, &rotated).is_none());
}

#[test]
fn literal_order_invariance() {
    let mut sat = to_vecs(&SAT_PROBLEM);
    for c in sat.iter_mut() {
        c.reverse();
    }
    assert!(outcome(5, &sat).is_some());

    let mut unsat = to_vecs(&UNSAT_PROBLEM);
    for c in unsat.iter_mut() {
        c.reverse();
    }
    assert!(outcome(5, &unsat).is_none());
}

/// flip the sign of every occurrence of var `v`.
fn flip(clauses: &[Vec<i32>], v: i32) -> Vec<Vec<i32>> {
    clauses
        .iter()
        .map(|c| {
            c.iter()
                .map(|l| if l.abs() == v { -*l } else { *l })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
}

#[test]
fn polarity_flip_preserves_satisfiability() {
    let base = to_vecs(&SAT_PROBLEM);
    for v in 1..=5i32 {
        let flipped = flip(&base, v);
        let model = outcome(5, &flipped).expect("flip broke satisfiability");
        // un-flipping the var must give back a model of the original
        let mut restored = model.clone();
        restored[v as usize] = !restored[v as usize];
        for clause in base.iter() {
            assert!(clause
                .iter()
                .any(|l| if *l < 0 { !restored[-l as usize] } else { restored[*l as usize] }));
        }
    }
    let base = to_vecs(&UNSAT_PROBLEM);
    for v in 1..=5i32 {
        assert!(outcome(5, &flip(&base, v)).is_none());
    }
}

#[test]
fn tautology_addition_is_neutral() {
    let mut sat = to_vecs(&SAT_PROBLEM);
    sat.push(vec![2, -2]);
    assert!(outcome(5, &sat).is_some());

    let mut unsat = to_vecs(&UNSAT_PROBLEM);
    unsat.push(vec![4, 1, -4]);
    assert!(outcome(5, &unsat).is_none());
}

#[test]
fn dimacs_round_trip_preserves_outcome() {
    let cnf = CnfProblem::new(5, to_vecs(&UNSAT_PROBLEM));
    let replayed = CnfProblem::parse(cnf.to_string().as_bytes()).expect("parse error");
    assert_eq!(cnf, replayed);
    assert!(outcome(5, &replayed.clauses).is_none());
}
