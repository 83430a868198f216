//! End-to-end scenarios driven through the public `Solver` API.
//! Every satisfiable answer is checked by evaluating all input clauses
//! against the returned model.
use risat::{Certificate, CnfProblem, Config, SatSolverIF, Solver, SolverError, ValidateIF};

fn build(num_vars: u32, clauses: &[&[i32]]) -> Solver {
    let cnf = CnfProblem::new(
        num_vars,
        clauses.iter().map(|c| c.to_vec()).collect::<Vec<_>>(),
    );
    Solver::try_from((&Config::default(), &cnf)).expect("failed to build")
}

fn evaluate(clause: &[i32], model: &[bool]) -> bool {
    clause
        .iter()
        .any(|l| if *l < 0 { !model[-l as usize] } else { model[*l as usize] })
}

/// solve and check; returns the model on Sat.
fn certify(num_vars: u32, clauses: &[&[i32]], expect_sat: bool) -> Option<Vec<bool>> {
    let mut s = build(num_vars, clauses);
    match s.solve().expect("solver error") {
        Certificate::Sat(model) => {
            assert!(expect_sat, "expected Unsat, got a model");
            assert_eq!(model.len(), num_vars as usize + 1);
            assert!(!model[0]);
            for (i, clause) in clauses.iter().enumerate() {
                assert!(
                    evaluate(clause, &model),
                    "the model doesn't satisfy clause #{i} {clause:?}"
                );
            }
            Some(model)
        }
        Certificate::Unsat => {
            assert!(!expect_sat, "expected Sat, got Unsat");
            None
        }
    }
}

#[test]
fn unit_contradiction() {
    // p cnf 1 2 / 1 0 / -1 0
    certify(1, &[&[1], &[-1]], false);
}

#[test]
fn tautological_clause() {
    // p cnf 1 1 / 1 -1 0
    certify(1, &[&[1, -1]], true);
}

#[test]
fn complex_unsat() {
    // p cnf 5 6
    certify(
        5,
        &[&[1, -2], &[-1, 3, -4], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]],
        false,
    );
}

#[test]
fn complex_sat() {
    // p cnf 5 5
    certify(5, &[&[1, -2], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]], true);
}

#[test]
fn forced_chain() {
    // p cnf 7 4; clause 3 forces 4, then 6 and 3 go false
    let model = certify(7, &[&[3, -5, 7], &[-3, 6], &[4], &[-4, -6]], true).expect("no model");
    assert!(model[4]);
    assert!(!model[6]);
    assert!(!model[3]);
}

#[test]
fn forced_by_pair() {
    // p cnf 9 9; clauses 4-5 force 6 to be false
    let model = certify(
        9,
        &[
            &[2, 3, 6],
            &[-3, 5, 6],
            &[-3, -5, 6],
            &[-6, 9],
            &[-6, -9],
            &[-2, 4],
            &[-4, -7],
            &[7, 8],
            &[-1, -8],
        ],
        true,
    )
    .expect("no model");
    assert!(!model[6]);
}

#[test]
fn no_variables() {
    let model = certify(0, &[], true).expect("no model");
    assert_eq!(model, vec![false]);
}

#[test]
fn no_clauses() {
    // every assignment works; the canonical model sets all vars
    let model = certify(4, &[], true).expect("no model");
    assert_eq!(model.len(), 5);
}

#[test]
fn empty_single_clause() {
    certify(4, &[&[]], false);
}

#[test]
fn empty_clause_among_others() {
    certify(4, &[&[], &[1, 2, 3, 4]], false);
}

#[test]
fn negated_units() {
    certify(2, &[&[-1], &[2]], true);
}

#[test]
fn negated_second_variable() {
    certify(3, &[&[1, 2, 3], &[1, 2, -3], &[-2]], true);
}

#[test]
fn unit_chain() {
    // (~y | z) & (x | ~z) & (z)
    certify(3, &[&[-2, 3], &[1, -3], &[3]], true);
}

#[test]
fn learning_clauses() {
    certify(
        7,
        &[&[-1, 2], &[-3, 4], &[-6, -5, -2], &[-5, 6], &[5, 7], &[-1, 5, -7]],
        true,
    );
}

#[test]
fn failed_literal() {
    certify(
        4,
        &[&[3, 4], &[-2, -4], &[-2, -3, 4], &[1, 2, -4], &[-1, 2, 4]],
        true,
    );
}

#[test]
fn failed_literal_from_complex_sat() {
    certify(4, &[&[-3, -2, -1], &[-2, 3], &[2, 4], &[2, -4]], true);
}

#[test]
fn unit_clauses_sat() {
    certify(3, &[&[1], &[2], &[-1, -2, 3]], true);
}

#[test]
fn unit_clauses_unsat() {
    certify(3, &[&[1], &[2], &[-3], &[-1, -2, 3]], false);
}

#[test]
fn once_reported_unsat_wrongly() {
    certify(4, &[&[-2, 3], &[4], &[1, -3, -4], &[-1]], true);
}

#[test]
fn once_reported_unsat_wrongly_2() {
    certify(
        7,
        &[&[-3, 5], &[-4], &[-2, 3, 4], &[2, -6], &[-5], &[6, 7], &[-1, -7]],
        true,
    );
}

#[test]
fn once_reported_unsat_wrongly_3() {
    certify(
        11,
        &[
            &[6, 8],
            &[-6, 8],
            &[3, -8],
            &[-5, 9],
            &[5, -7],
            &[-2, 5, 7],
            &[-3, 4],
            &[2, -10],
            &[-4, -9],
            &[9, 10, 11],
            &[-1, -11],
        ],
        true,
    );
}

#[test]
fn pigeon_hole_three_into_two() {
    // three pigeons into two holes; forces real clause learning
    certify(
        6,
        &[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ],
        false,
    );
}

#[test]
fn solve_twice_stays_sat() {
    let clauses: &[&[i32]] = &[&[1, -2], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]];
    let mut s = build(5, clauses);
    let first = s.solve().expect("solver error");
    assert!(matches!(first, Certificate::Sat(_)));
    // a second run on the same instance must find a model again
    match s.solve().expect("solver error") {
        Certificate::Sat(model) => {
            for clause in clauses.iter() {
                assert!(evaluate(clause, &model));
            }
        }
        Certificate::Unsat => panic!("the instance became Unsat"),
    }
}

#[test]
fn external_validation() {
    let clauses: &[&[i32]] = &[&[1, -2], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]];
    let mut s = build(5, clauses);
    let Certificate::Sat(model) = s.solve().expect("solver error") else {
        panic!("It should be satisfied!");
    };
    let assignment = (1..=5)
        .map(|v| if model[v] { v as i32 } else { -(v as i32) })
        .collect::<Vec<i32>>();
    // replay the model on a fresh solver
    let mut validator = build(5, clauses);
    validator
        .inject_assignment(&assignment)
        .expect("It's completely broken!");
    assert_eq!(validator.validate(), None);
}

#[test]
fn cooperative_interruption() {
    use std::sync::atomic::Ordering;
    // an instance the preprocessor can't settle
    let mut s = build(
        6,
        &[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ],
    );
    s.state.interrupt_handle().store(true, Ordering::Relaxed);
    assert_eq!(s.solve(), Err(SolverError::Interrupted));
}

#[test]
fn deterministic_model() {
    let clauses: &[&[i32]] = &[&[1, -2], &[1, 3, -4], &[-3, -5], &[-3, 5], &[3, 4]];
    let a = certify(5, clauses, true).expect("no model");
    let b = certify(5, clauses, true).expect("no model");
    assert_eq!(a, b);
}
