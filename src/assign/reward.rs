/// Var rewarding based on VSIDS
use {
    super::{heap::VarHeapIF, stack::AssignStack},
    crate::types::*,
};

/// API for var rewarding.
pub trait VarRewardIF {
    /// return var's activity.
    fn activity(&self, vi: VarId) -> f64;
    /// set var's activity.
    fn set_activity(&mut self, vi: VarId, val: f64);
    /// bump the vars of the newly learnt clause.
    fn reward_at_analysis(&mut self, vi: VarId);
    /// age all var activities; called once per conflict.
    fn decay_activity(&mut self);
}

impl VarRewardIF for AssignStack {
    #[inline]
    fn activity(&self, vi: VarId) -> f64 {
        self.var[vi].activity
    }
    fn set_activity(&mut self, vi: VarId, val: f64) {
        self.var[vi].activity = val;
    }
    fn reward_at_analysis(&mut self, vi: VarId) {
        let s = self.activity_inc;
        let v = &mut self.var[vi];
        v.activity += s;
        const SCALE: f64 = 1e-100;
        const SCALE_MAX: f64 = 1e100;
        if SCALE_MAX < v.activity {
            for v in &mut self.var[1..] {
                v.activity *= SCALE;
            }
            self.activity_inc *= SCALE;
        }
        self.update_heap(vi);
    }
    fn decay_activity(&mut self) {
        // multiplying all activities by the decay factor is realized by
        // inverse-scaling the increment step; the heap order is identical.
        self.activity_inc /= self.activity_decay;
    }
}
