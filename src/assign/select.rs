/// Decision var selection
use {
    super::{
        heap::{VarHeapIF, VarOrderIF},
        stack::AssignStack,
    },
    crate::types::*,
};

/// API for var selection, depending on an internal heap.
pub trait VarSelectIF {
    /// select a new decision literal.
    fn select_decision_literal(&mut self) -> Lit;
    /// rebuild the internal var_order.
    fn rebuild_order(&mut self);
}

impl VarSelectIF for AssignStack {
    fn select_decision_literal(&mut self) -> Lit {
        let vi = self.select_var();
        // the reference design always decides the positive phase
        Lit::from_assign(vi, true)
    }
    fn rebuild_order(&mut self) {
        self.var_order.clear();
        for vi in 1..self.var.len() {
            if self.var[vi].assign.is_none() {
                self.insert_heap(vi);
            }
        }
    }
}

impl AssignStack {
    /// select the unassigned var of maximum activity.
    fn select_var(&mut self) -> VarId {
        loop {
            debug_assert!(!self.var_order.is_empty());
            let vi = self.get_heap_root();
            if self.var[vi].assign.is_none() {
                return vi;
            }
        }
    }
}
