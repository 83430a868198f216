//! Module `validate` implements a model checker.
use crate::{
    assign::{AssignIF, PropagateIF},
    cdb::ClauseDBIF,
    solver::Solver,
    types::*,
};

/// API for SAT validator like
/// [`inject_assignment`](`crate::solver::ValidateIF::inject_assignment`) and
/// [`validate`](`crate::solver::ValidateIF::validate`).
pub trait ValidateIF {
    /// load an assignment set into the solver.
    ///
    /// # Errors
    ///
    /// if the solver becomes inconsistent.
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent;
    /// return `None` if the loaded assignment set satisfies the problem;
    /// otherwise return a falsified clause.
    fn validate(&self) -> Option<Vec<i32>>;
}

impl ValidateIF for Solver {
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent {
        if vec.is_empty() {
            return Err(SolverError::Inconsistent);
        }
        for i in vec {
            self.asg.assign_at_root_level(Lit::from(*i))?;
        }
        Ok(())
    }
    fn validate(&self) -> Option<Vec<i32>> {
        self.cdb
            .validate(&self.asg.assign_ref(), true)
            .map(|ci| Vec::<i32>::from(&self.cdb[ci]))
    }
}
