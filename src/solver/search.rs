/// Conflict-Driven Clause Learning Search engine
use {
    super::{conflict::handle_conflict, restart::RestartIF, Certificate, Solver, SolverResult},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF},
        processor::{Simplifier, SimplifyIF},
        solver::restart::Restarter,
        state::State,
        types::*,
    },
};

/// API for SAT search.
pub trait SatSolverSearchIF {
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// if solver becomes inconsistent by an internal error.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverSearchIF for Solver {
    fn solve(&mut self) -> SolverResult {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut prep,
            ref mut rst,
            ref mut state,
        } = self;
        cdb.check_size()?;
        if !state.ok {
            return Ok(Certificate::Unsat);
        }
        //
        //## Preprocess
        //
        if let Err(e) = prep.preprocess(asg, cdb) {
            return match e {
                SolverError::RootLevelConflict(_)
                | SolverError::Inconsistent
                | SolverError::EmptyClause => Ok(Certificate::Unsat),
                _ => Err(e),
            };
        }
        asg.rebuild_order();
        if asg.num_vars == asg.stack_len() {
            return Ok(Certificate::Sat(asg.extract_model()));
        }
        //
        //## Search
        //
        let answer = search(asg, cdb, prep, rst, state);
        match answer {
            Ok(true) => {
                if cdb.validate(&asg.assign_ref(), false).is_some() {
                    return Err(SolverError::SolverBug);
                }
                let model = asg.extract_model();
                asg.cancel_until(cdb, 0);
                Ok(Certificate::Sat(model))
            }
            Ok(false) => {
                asg.cancel_until(cdb, 0);
                Ok(Certificate::Unsat)
            }
            Err(e) => {
                asg.cancel_until(cdb, 0);
                Err(e)
            }
        }
    }
}

/// main loop; returns `Ok(true)` for SAT, `Ok(false)` for UNSAT.
fn search(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    prep: &mut Simplifier,
    rst: &mut Restarter,
    state: &mut State,
) -> Result<bool, SolverError> {
    loop {
        if state.is_interrupted() {
            return Err(SolverError::Interrupted);
        }
        if let Some(ci) = asg.propagate(cdb) {
            if asg.decision_level() == 0 {
                return Ok(false);
            }
            rst.update_on_conflict();
            match handle_conflict(asg, cdb, state, ci) {
                Ok(()) => (),
                Err(
                    SolverError::Inconsistent
                    | SolverError::RootLevelConflict(_)
                    | SolverError::EmptyClause,
                ) => return Ok(false),
                Err(e) => return Err(e),
            }
            //## keep the learnt database bounded
            if cdb.should_reduce() {
                cdb.reduce();
            }
        } else {
            //## top-level simplification after reaching the root
            if asg.decision_level() == 0 && prep.simplify(asg, cdb).is_err() {
                return Ok(false);
            }
            if asg.num_vars == asg.stack_len() {
                return Ok(true);
            }
            if rst.force_restart() {
                asg.num_restart += 1;
                asg.cancel_until(cdb, 0);
                continue;
            }
            //## make a decision
            let lit = asg.select_decision_literal();
            asg.assign_by_decision(lit);
        }
    }
}
