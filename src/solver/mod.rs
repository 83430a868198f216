/// Crate `solver` provides the top-level API as a SAT solver.
mod build;
mod conflict;
mod restart;
mod search;
mod validate;

pub use self::{
    build::SatSolverBuildIF,
    restart::{RestartIF, Restarter},
    search::SatSolverSearchIF,
    validate::ValidateIF,
};

use crate::{
    assign::AssignStack, cdb::ClauseDB, processor::Simplifier, state::State, types::*,
};

/// API for SAT solver like `build`, `solve` and so on.
pub trait SatSolverIF: SatSolverBuildIF + SatSolverSearchIF {
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// if solver becomes inconsistent by an internal error.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverIF for Solver {
    fn build(config: &Config) -> Result<Solver, SolverError> {
        <Solver as SatSolverBuildIF>::solver_build(config)
    }
    fn solve(&mut self) -> SolverResult {
        <Solver as SatSolverSearchIF>::solve(self)
    }
}

/// Normal results returned by Solver. On Sat, the model is 1-indexed by
/// variable; the slot 0 is a padding fixed to `false`.
#[derive(Debug, Eq, PartialEq)]
pub enum Certificate {
    Sat(Vec<bool>),
    Unsat,
}

/// The return type of `Solver::solve`.
/// This captures the following three cases:
/// * `Certificate::Sat` -- solved with a satisfiable assignment set,
/// * `Certificate::Unsat` -- proved that it's an unsatisfiable problem, and
/// * `SolverError::*` -- caused by interruption or an internal error.
pub type SolverResult = Result<Certificate, SolverError>;

/// The SAT solver object consisting of 5 sub modules.
#[derive(Debug)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// preprocessor and simplifier
    pub prep: Simplifier,
    /// restart management
    pub rst: Restarter,
    /// misc data holder
    pub state: State,
}
