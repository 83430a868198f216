// Command line interface: read a DIMACS file, run the solver, dump the
// statistics and the final status line.
use {
    risat::{Certificate, CnfProblem, Config, SatSolverIF, Solver, SolverError},
    std::process::exit,
    structopt::StructOpt,
};

fn main() {
    let config = Config::from_args();
    let cnf = match CnfProblem::from_file(&config.cnf_file) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("c error: {e}");
            exit(1);
        }
    };
    let mut solver = match Solver::try_from((&config, &cnf)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("c error: {e}");
            exit(1);
        }
    };
    let result = solver.solve();
    solver
        .state
        .report(&solver.asg, &solver.cdb, &solver.prep);
    match result {
        Ok(Certificate::Sat(_)) => println!("Sat"),
        Ok(Certificate::Unsat) => println!("Unsat"),
        Err(SolverError::Interrupted) => println!("Unknown"),
        Err(e) => {
            println!("Unknown");
            eprintln!("c error: {e}");
            exit(1);
        }
    }
}
