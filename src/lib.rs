/*!
`risat` is a CDCL SAT solver for propositional logic in conjunctive
normal form, based on two-watched-literal unit propagation, 1-UIP clause
learning with non-chronological backjumping, activity-based branching,
learned-clause reduction, and restart-triggered top-level simplification.

# Examples

```
use risat::*;

let mut s = Solver::try_from(vec![vec![1i32, 2], vec![-1, 3], vec![-3]]).expect("panic");
if let Ok(Certificate::Sat(model)) = s.solve() {
    assert!(!model[3]);
    assert!(model[2]);
} else {
    panic!("It should be satisfied!");
}
```
*/
/// assignment management
pub mod assign;
/// clause database
pub mod cdb;
/// DIMACS CNF reading and writing
pub mod cnf;
/// solver configuration and CLI
pub mod config;
/// preprocessing and simplification
pub mod processor;
/// the top-level solver API
pub mod solver;
/// misc data holder
pub mod state;
/// plumbing layer
pub mod types;

pub use crate::{
    cnf::{CnfError, CnfProblem},
    config::Config,
    solver::{Certificate, SatSolverIF, Solver, SolverResult, ValidateIF},
    types::SolverError,
};
