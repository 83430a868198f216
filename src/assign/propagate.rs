/// implement boolean constraint propagation, backjump
use {
    super::{heap::VarHeapIF, stack::AssignStack, AssignIF},
    crate::{
        cdb::{ClauseDBIF, ClauseIF, WatchDBIF},
        types::*,
    },
};

/// API for Boolean Constraint Propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assign_by_decision`](`crate::assign::PropagateIF::assign_by_decision`),
/// [`cancel_until`](`crate::assign::PropagateIF::cancel_until`), and so on.
pub trait PropagateIF {
    /// add an assignment at root level as a precondition.
    ///
    /// # Errors
    ///
    /// emit `SolverError::Inconsistent` if the var was assigned the other way.
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent;
    /// unsafe enqueue (assign by implication); doesn't emit an exception.
    ///
    /// ## Warning
    /// Callers must assure the consistency after this assignment.
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason);
    /// unsafe assume (assign by decision); doesn't emit an exception.
    /// ## Caveat
    /// Callers have to assure the consistency after this assignment.
    fn assign_by_decision(&mut self, l: Lit);
    /// execute *backjump*; assignments at `lv` itself are preserved.
    fn cancel_until(&mut self, cdb: &mut impl ClauseDBIF, lv: DecisionLevel);
    /// execute *boolean constraint propagation* or *unit propagation*.
    fn propagate(&mut self, cdb: &mut impl ClauseDBIF) -> Option<ClauseIndex>;
}

impl PropagateIF for AssignStack {
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent {
        let vi = l.vi();
        debug_assert!(vi < self.var.len());
        debug_assert!(self.trail_lim.is_empty());
        match self.var[vi].assign {
            None => {
                let v = &mut self.var[vi];
                v.assign = Some(bool::from(l));
                v.level = 0;
                v.reason = AssignReason::None;
                debug_assert!(!self.trail.contains(&!l));
                self.trail.push(l);
                self.make_var_asserted(vi);
                Ok(())
            }
            Some(x) if x == bool::from(l) => Ok(()),
            _ => Err(SolverError::Inconsistent),
        }
    }
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason) {
        debug_assert!(usize::from(l) != 0, "Null literal is about to be enqueued");
        let vi = l.vi();
        debug_assert!(vi < self.var.len());
        debug_assert!(
            self.var[vi].assign == Some(bool::from(l)) || self.var[vi].assign.is_none()
        );
        let lv = self.decision_level();
        let v = &mut self.var[vi];
        v.assign = Some(bool::from(l));
        v.level = lv;
        v.reason = reason;
        debug_assert!(!self.trail.contains(&l));
        debug_assert!(!self.trail.contains(&!l));
        self.trail.push(l);
        if lv == 0 {
            self.make_var_asserted(vi);
        }
    }
    fn assign_by_decision(&mut self, l: Lit) {
        let vi = l.vi();
        debug_assert!(vi < self.var.len());
        debug_assert!(self.var[vi].assign.is_none());
        debug_assert!(!self.trail.contains(&l));
        debug_assert!(!self.trail.contains(&!l), "the trail contains a strange literal");
        self.level_up();
        let dl = self.trail_lim.len() as DecisionLevel;
        let v = &mut self.var[vi];
        v.assign = Some(bool::from(l));
        v.level = dl;
        v.reason = AssignReason::Decision;
        self.trail.push(l);
        self.num_decision += 1;
        debug_assert!(self.q_head < self.trail.len());
    }
    fn cancel_until(&mut self, cdb: &mut impl ClauseDBIF, lv: DecisionLevel) {
        if self.trail_lim.len() as DecisionLevel <= lv {
            return;
        }
        let lim = self.trail_lim[lv as usize];
        for i in lim..self.trail.len() {
            let l = self.trail[i];
            let vi = l.vi();
            debug_assert!(
                self.var[vi].assign.is_some(),
                "cancel_until found unassigned var in trail {}",
                vi,
            );
            if let AssignReason::Implication(ci) = self.var[vi].reason {
                cdb[ci].turn_off(FlagClause::LOCKED);
            }
            let v = &mut self.var[vi];
            v.assign = None;
            v.reason = AssignReason::None;
            self.insert_heap(vi);
        }
        self.trail.truncate(lim);
        self.trail_lim.truncate(lv as usize);
        self.q_head = self.trail.len();
        debug_assert!(self.trail.iter().all(|l| self.var[l.vi()].assign.is_some()));
        debug_assert!(self.trail.iter().all(|k| !self.trail.contains(&!*k)));
    }
    /// UNIT PROPAGATION.
    /// Implications are discovered in trail order; on conflict the
    /// propagation queue is drained and the conflicting clause returned.
    fn propagate(&mut self, cdb: &mut impl ClauseDBIF) -> Option<ClauseIndex> {
        while let Some(p) = self.trail.get(self.q_head).copied() {
            self.num_propagation += 1;
            self.q_head += 1;
            let false_lit = !p;
            let mut watchers = cdb.take_watchers(p);
            let mut n = 0;
            'next_clause: while n < watchers.len() {
                let (blocker, ci) = {
                    let w = &watchers[n];
                    (w.blocker, w.c)
                };
                debug_assert!(!cdb[ci].is_dead());
                //## if the cached blocker is satisfied, the clause needs no work
                if self.assigned(blocker) == Some(true) {
                    n += 1;
                    continue 'next_clause;
                }
                //## place the just-falsified watch at the second slot
                if cdb[ci].lit0() == false_lit {
                    cdb[ci].swap(0, 1);
                }
                debug_assert_eq!(cdb[ci].lit1(), false_lit);
                let first = cdb[ci].lit0();
                let first_value = self.assigned(first);
                if first != blocker && first_value == Some(true) {
                    watchers[n].blocker = first;
                    n += 1;
                    continue 'next_clause;
                }
                //## search an un-falsified literal in the rest of the clause
                for k in 2..cdb[ci].len() {
                    let lk = cdb[ci][k];
                    if self.assigned(lk) != Some(false) {
                        cdb[ci].swap(1, k);
                        cdb.watcher_list_mut(!lk).register(first, ci);
                        watchers.swap_remove(n);
                        continue 'next_clause;
                    }
                }
                //## the clause became unit or conflicting on its first literal
                watchers[n].blocker = first;
                n += 1;
                if first_value == Some(false) {
                    cdb.restore_watchers(p, watchers);
                    self.q_head = self.trail.len();
                    self.num_conflict += 1;
                    return Some(ci);
                }
                if 0 < self.decision_level() {
                    cdb[ci].turn_on(FlagClause::LOCKED);
                }
                self.assign_by_implication(first, AssignReason::Implication(ci));
            }
            cdb.restore_watchers(p, watchers);
        }
        None
    }
}

impl AssignStack {
    fn level_up(&mut self) {
        self.trail_lim.push(self.trail.len());
    }
}
