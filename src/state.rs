//! Crate `state` is a collection of internal data, used by the whole modules.
use {
    crate::{
        assign::AssignStack,
        cdb::ClauseDB,
        processor::Simplifier,
        types::*,
    },
    std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::Instant,
    },
};

/// Miscellaneous data holder: problem description, timing, interruption,
/// and shared working buffers.
#[derive(Clone, Debug)]
pub struct State {
    /// `false` if a top-level inconsistency was found while loading
    pub ok: bool,
    /// the number of declared variables
    pub num_vars: usize,
    /// the number of declared clauses
    pub num_clauses: usize,
    /// working buffer for conflict analysis
    pub new_learnt: Vec<Lit>,
    /// cooperative interruption flag, settable from a signal handler
    abort: Arc<AtomicBool>,
    /// the instant the solver was built
    pub start: Instant,
    /// suppress the statistics report
    pub quiet: bool,
}

impl Default for State {
    fn default() -> State {
        State {
            ok: true,
            num_vars: 0,
            num_clauses: 0,
            new_learnt: Vec::new(),
            abort: Arc::new(AtomicBool::new(false)),
            start: Instant::now(),
            quiet: false,
        }
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CnfProblem) -> State {
        State {
            num_vars: cnf.num_variables as usize,
            num_clauses: cnf.clauses.len(),
            quiet: config.quiet_mode,
            ..State::default()
        }
    }
}

impl State {
    /// return a handle with which a signal handler can stop the search;
    /// the solver then returns `SolverError::Interrupted`.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.abort.clone()
    }
    /// polled by the search loop between propagation rounds.
    pub fn is_interrupted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }
    /// dump the statistics to stdout.
    pub fn report(&self, asg: &AssignStack, cdb: &ClauseDB, prep: &Simplifier) {
        if self.quiet {
            return;
        }
        println!("c variables:             {}", self.num_vars);
        println!("c clauses:               {}", self.num_clauses);
        println!("c decisions:             {}", asg.num_decision);
        println!("c conflicts:             {}", asg.num_conflict);
        println!("c learned_clauses:       {}", cdb.num_learnt_total);
        println!("c propagations:          {}", asg.num_propagation);
        println!("c restarts:              {}", asg.num_restart);
        println!("c clauses_eliminated_by_simplification: {}", cdb.num_simplified);
        println!("c clauses_eliminated_by_reduce: {}", cdb.num_reduced);
        println!("c pure_literals:         {}", prep.num_pure_literal);
        println!("c elapsed:               {:.3}s", self.start.elapsed().as_secs_f64());
    }
}
