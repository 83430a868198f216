//! methods on clause activity
use {super::db::ClauseDB, crate::types::*};

impl ClauseDB {
    /// bump the activity of the clause used in conflict analysis.
    pub(super) fn bump_activity(&mut self, ci: ClauseIndex) {
        let inc = self.activity_inc;
        let c = &mut self.clause[ci];
        c.activity += inc;
        const SCALE: f64 = 1e-20;
        const SCALE_MAX: f64 = 1e20;
        if SCALE_MAX < c.activity {
            for c in self.clause.iter_mut().skip(1) {
                if c.is(FlagClause::LEARNT) {
                    c.activity *= SCALE;
                }
            }
            self.activity_inc *= SCALE;
        }
    }
    /// age all clause activities; called once per conflict.
    pub(super) fn decay_activity_step(&mut self) {
        self.activity_inc /= self.activity_decay;
    }
}
