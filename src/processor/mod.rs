//! Module `processor` implements preprocessing and top-level simplification.
use crate::{
    assign::{AssignIF, AssignStack, PropagateIF},
    cdb::{ClauseDB, ClauseDBIF, ClauseIF},
    types::*,
};

/// API for preprocessing and top-level simplification.
pub trait SimplifyIF {
    /// one-time preprocessing before search: assign untouched and pure
    /// vars, propagate the initial units, drop entailed clauses.
    ///
    /// # Errors
    ///
    /// `SolverError::RootLevelConflict` if the problem is refuted here.
    fn preprocess(&mut self, asg: &mut AssignStack, cdb: &mut ClauseDB) -> MaybeInconsistent;
    /// top-level simplification, repeated until fixpoint.
    /// *precondition*: decision level == 0.
    fn simplify(&mut self, asg: &mut AssignStack, cdb: &mut ClauseDB) -> MaybeInconsistent;
}

/// Preprocessor and simplifier
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    //
    //## statistics
    //
    /// the number of pure literals assigned at the top level.
    pub num_pure_literal: usize,
}

impl Instantiate for Simplifier {
    fn instantiate(_config: &Config, _cnf: &CnfProblem) -> Simplifier {
        Simplifier::default()
    }
}

impl SimplifyIF for Simplifier {
    fn preprocess(&mut self, asg: &mut AssignStack, cdb: &mut ClauseDB) -> MaybeInconsistent {
        // clause size ordering and unit enqueueing happened at load time
        self.simplify(asg, cdb)
    }
    fn simplify(&mut self, asg: &mut AssignStack, cdb: &mut ClauseDB) -> MaybeInconsistent {
        debug_assert_eq!(asg.decision_level(), 0);
        loop {
            if let Some(cc) = asg.propagate(cdb) {
                return Err(SolverError::RootLevelConflict(cc));
            }
            let mut changed = false;
            //## delete satisfied clauses, strip falsified literals
            for ci in 1..cdb.len() {
                if cdb[ci].is_dead() {
                    continue;
                }
                match cdb.transform_by_simplification(asg, ci) {
                    RefClause::Clause(_) => (),
                    RefClause::Dead => {
                        cdb.num_simplified += 1;
                        changed = true;
                    }
                    RefClause::EmptyClause => {
                        return Err(SolverError::RootLevelConflict(ci));
                    }
                    RefClause::UnitClause(l) => {
                        cdb.num_simplified += 1;
                        asg.assign_at_root_level(l)
                            .map_err(|_| SolverError::RootLevelConflict(ci))?;
                        changed = true;
                    }
                }
            }
            //## assign pure and untouched literals
            if self.assign_pure_literals(asg, cdb)? {
                changed = true;
            }
            if !changed {
                break;
            }
        }
        cdb.rebuild_watches();
        Ok(())
    }
}

impl Simplifier {
    /// assign every var occurring with a single polarity in the live,
    /// unsatisfied clauses; vars with no occurrence at all default to true.
    /// return `true` if any assignment was made.
    fn assign_pure_literals(
        &mut self,
        asg: &mut AssignStack,
        cdb: &mut ClauseDB,
    ) -> Result<bool, SolverError> {
        let mut pos = vec![0usize; asg.num_vars + 1];
        let mut neg = vec![0usize; asg.num_vars + 1];
        for c in cdb.iter().skip(1) {
            if c.is_dead() || c.is_satisfied_under(asg) {
                continue;
            }
            for l in c.iter() {
                if asg.assigned(*l).is_none() {
                    if bool::from(*l) {
                        pos[l.vi()] += 1;
                    } else {
                        neg[l.vi()] += 1;
                    }
                }
            }
        }
        let mut changed = false;
        for vi in 1..=asg.num_vars {
            if asg.assign(vi).is_some() {
                continue;
            }
            match (pos[vi], neg[vi]) {
                (0, 0) => {
                    asg.assign_at_root_level(Lit::from_assign(vi, true))?;
                    changed = true;
                }
                (_, 0) => {
                    asg.assign_at_root_level(Lit::from_assign(vi, true))?;
                    self.num_pure_literal += 1;
                    changed = true;
                }
                (0, _) => {
                    asg.assign_at_root_level(Lit::from_assign(vi, false))?;
                    self.num_pure_literal += 1;
                    changed = true;
                }
                _ => (),
            }
        }
        Ok(changed)
    }
}
