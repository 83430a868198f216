//! Crate `restart` provides a geometric conflict-budget restart policy.
use crate::types::*;

/// API for restart like [`force_restart`](`crate::solver::RestartIF::force_restart`).
pub trait RestartIF {
    /// register a new conflict.
    fn update_on_conflict(&mut self);
    /// return `true` and open the next budget if the solver should
    /// cancel to the top level now.
    fn force_restart(&mut self) -> bool;
}

/// restart management
#[derive(Clone, Debug)]
pub struct Restarter {
    enable: bool,
    /// the number of conflicts since the last restart
    after_restart: usize,
    /// conflict budget until the next restart
    next_restart: usize,
    /// budget growth factor
    scale: f64,
}

impl Instantiate for Restarter {
    fn instantiate(config: &Config, _cnf: &CnfProblem) -> Self {
        Restarter {
            enable: !config.without_restart,
            after_restart: 0,
            next_restart: config.rst_step.max(1),
            scale: 1.5,
        }
    }
}

impl RestartIF for Restarter {
    fn update_on_conflict(&mut self) {
        self.after_restart += 1;
    }
    fn force_restart(&mut self) -> bool {
        if self.enable && self.next_restart <= self.after_restart {
            self.after_restart = 0;
            self.next_restart = (self.next_restart as f64 * self.scale) as usize;
            return true;
        }
        false
    }
}
