use crate::types::*;

/// 'Watch literal' structure
#[derive(Clone, Debug)]
pub struct Watch {
    /// a cache of another literal in the clause; if it's satisfied the
    /// propagator skips the clause without touching its memory
    pub blocker: Lit,
    /// ClauseIndex
    pub c: ClauseIndex,
}

/// API for 'watcher list' like `register`, `detach_with` and so on.
pub trait WatchDBIF {
    /// make a new 'watch', and add it to this watcher list.
    fn register(&mut self, blocker: Lit, c: ClauseIndex);
    /// remove a clause which index is `ci` from the watcher list. *O(n)* operation.
    fn detach_with(&mut self, ci: ClauseIndex);
}

impl WatchDBIF for Vec<Watch> {
    fn register(&mut self, blocker: Lit, c: ClauseIndex) {
        self.push(Watch { blocker, c });
    }
    fn detach_with(&mut self, ci: ClauseIndex) {
        for (n, w) in self.iter().enumerate() {
            if w.c == ci {
                self.swap_remove(n);
                return;
            }
        }
    }
}
