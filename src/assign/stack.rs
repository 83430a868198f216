//! main struct AssignStack
use {
    super::{
        heap::{VarHeapIF, VarIdHeap},
        var::Var,
    },
    crate::types::*,
    std::{fmt, slice::Iter},
};

/// A record of assignments. It's called 'trail' in Glucose.
#[derive(Clone, Debug)]
pub struct AssignStack {
    /// record of assignment
    pub(super) trail: Vec<Lit>,
    /// start offset of each decision level in `trail`
    pub(super) trail_lim: Vec<usize>,
    /// the-number-of-assigned-and-propagated-vars
    pub(super) q_head: usize,
    /// vars
    pub(super) var: Vec<Var>,
    /// Variable Order
    pub(super) var_order: VarIdHeap,

    //
    //## Var Rewarding
    //
    /// var activity increment step
    pub(super) activity_inc: f64,
    /// var activity decay
    pub(super) activity_decay: f64,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    /// the number of decisions.
    pub num_decision: usize,
    /// the number of propagations.
    pub num_propagation: usize,
    /// the number of conflicts.
    pub num_conflict: usize,
    /// the number of restarts.
    pub num_restart: usize,
}

impl Default for AssignStack {
    fn default() -> AssignStack {
        AssignStack {
            trail: Vec::new(),
            trail_lim: Vec::new(),
            q_head: 0,
            var: Vec::new(),
            var_order: VarIdHeap::default(),
            activity_inc: 1.0,
            activity_decay: 0.95,
            num_vars: 0,
            num_decision: 0,
            num_propagation: 0,
            num_conflict: 0,
            num_restart: 0,
        }
    }
}

impl Instantiate for AssignStack {
    fn instantiate(config: &Config, cnf: &CnfProblem) -> AssignStack {
        let nv = cnf.num_variables as usize;
        AssignStack {
            trail: Vec::with_capacity(nv),
            var: Var::new_vars(nv),
            var_order: VarIdHeap::new(nv),
            activity_decay: config.var_decay,
            num_vars: nv,
            ..AssignStack::default()
        }
    }
}

/// API for assignment-level data access.
pub trait AssignIF {
    /// return *the value* of a literal.
    fn assigned(&self, l: Lit) -> Option<bool>;
    /// return the assignment of var.
    fn assign(&self, vi: VarId) -> Option<bool>;
    /// return the assign level of var.
    fn level(&self, vi: VarId) -> DecisionLevel;
    /// return the reason of assignment.
    fn reason(&self, vi: VarId) -> AssignReason;
    /// return the var.
    fn var(&self, vi: VarId) -> &Var;
    /// return the var mutably.
    fn var_mut(&mut self, vi: VarId) -> &mut Var;
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return the `i`-th element on the trail.
    fn stack(&self, i: usize) -> Lit;
    /// return the length of the trail.
    fn stack_len(&self) -> usize;
    /// return the trail's start offset of decision level `n`.
    fn len_upto(&self, n: DecisionLevel) -> usize;
    /// return an iterator over the trail.
    fn stack_iter(&self) -> Iter<'_, Lit>;
    /// return `true` if there are unpropagated assignments.
    fn remains(&self) -> bool;
    /// return the whole assignment map, indexed by `VarId`.
    fn assign_ref(&self) -> Vec<Option<bool>>;
    /// extract a model; unassigned vars default to true.
    fn extract_model(&self) -> Vec<bool>;
}

impl AssignIF for AssignStack {
    fn assigned(&self, l: Lit) -> Option<bool> {
        match self.var[l.vi()].assign {
            Some(x) if !bool::from(l) => Some(!x),
            x => x,
        }
    }
    #[inline]
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.var[vi].assign
    }
    #[inline]
    fn level(&self, vi: VarId) -> DecisionLevel {
        self.var[vi].level
    }
    #[inline]
    fn reason(&self, vi: VarId) -> AssignReason {
        self.var[vi].reason
    }
    #[inline]
    fn var(&self, vi: VarId) -> &Var {
        &self.var[vi]
    }
    #[inline]
    fn var_mut(&mut self, vi: VarId) -> &mut Var {
        &mut self.var[vi]
    }
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn len_upto(&self, n: DecisionLevel) -> usize {
        self.trail_lim.get(n as usize).map_or(0, |n| *n)
    }
    fn stack_iter(&self) -> Iter<'_, Lit> {
        self.trail.iter()
    }
    fn remains(&self) -> bool {
        self.q_head < self.trail.len()
    }
    fn assign_ref(&self) -> Vec<Option<bool>> {
        self.var.iter().map(|v| v.assign).collect::<Vec<_>>()
    }
    fn extract_model(&self) -> Vec<bool> {
        let mut model = Vec::with_capacity(self.num_vars + 1);
        model.push(false);
        for v in self.var.iter().skip(1) {
            model.push(v.assign.unwrap_or(true));
        }
        model
    }
}

impl AssignStack {
    /// turn a var into an asserted fact: its reason clause reference is
    /// dropped so that simplification can delete the clause later.
    pub(super) fn make_var_asserted(&mut self, vi: VarId) {
        self.var[vi].reason = AssignReason::None;
        self.remove_from_heap(vi);
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.trail.iter().map(|l| i32::from(*l)).collect::<Vec<_>>();
        write!(
            f,
            "ASG:: trail({}):{:?}\n      level: {}",
            self.trail.len(),
            v,
            self.decision_level(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assign::PropagateIF, cdb::ClauseDB};

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }
    #[test]
    fn test_assignment() {
        let config = Config::default();
        let cnf = CnfProblem {
            num_variables: 4,
            ..CnfProblem::default()
        };
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        let mut asg = AssignStack::instantiate(&config, &cnf);
        // [] + 1 => [1]
        assert!(asg.assign_at_root_level(lit(1)).is_ok());
        assert_eq!(asg.trail, vec![lit(1)]);

        // [1] + 1 => [1]
        assert!(asg.assign_at_root_level(lit(1)).is_ok());
        assert_eq!(asg.trail, vec![lit(1)]);

        // [1] + 2 => [1, 2]
        assert!(asg.assign_at_root_level(lit(2)).is_ok());
        assert_eq!(asg.trail, vec![lit(1), lit(2)]);

        // [1, 2] + -1 => ABORT & [1, 2]
        assert!(asg.assign_at_root_level(lit(-1)).is_err());
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.stack_len(), 2);

        // [1, 2] + 3 => [1, 2, 3]
        asg.assign_by_decision(lit(3));
        assert_eq!(asg.trail, vec![lit(1), lit(2), lit(3)]);
        assert_eq!(asg.decision_level(), 1);
        assert_eq!(asg.stack_len(), 3);
        assert_eq!(asg.len_upto(0), 2);

        // [1, 2, 3] + 4 => [1, 2, 3, 4]
        asg.assign_by_decision(lit(4));
        assert_eq!(asg.trail, vec![lit(1), lit(2), lit(3), lit(4)]);
        assert_eq!(asg.decision_level(), 2);
        assert_eq!(asg.stack_len(), 4);
        assert_eq!(asg.len_upto(1), 3);
        assert_eq!(asg.level(4), 2);

        // [1, 2, 3, 4] => [1, 2, 3]
        asg.cancel_until(&mut cdb, 1);
        assert_eq!(asg.trail, vec![lit(1), lit(2), lit(3)]);
        assert_eq!(asg.decision_level(), 1);
        assert_eq!(asg.stack_len(), 3);
        assert_eq!(asg.trail_lim, vec![2]);
        assert_eq!(asg.assigned(lit(1)), Some(true));
        assert_eq!(asg.assigned(lit(-1)), Some(false));
        assert_eq!(asg.assigned(lit(4)), None);

        // [1, 2, 3] => [1, 2]
        asg.cancel_until(&mut cdb, 0);
        assert_eq!(asg.trail, vec![lit(1), lit(2)]);
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.assigned(lit(3)), None);
    }
}
