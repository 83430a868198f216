/// Solver Builder
use {
    super::{restart::Restarter, Solver},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF},
        cnf::CnfProblem,
        processor::Simplifier,
        state::State,
        types::*,
    },
    std::path::Path,
};

/// API for solver construction.
pub trait SatSolverBuildIF {
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file.
    fn solver_build(config: &Config) -> Result<Solver, SolverError>;
    /// add a vector of `Lit` as a clause to the solver.
    /// `None` means a top-level contradiction was found.
    fn add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> Option<ClauseIndex>;
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CnfProblem) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            prep: Simplifier::instantiate(config, cnf),
            rst: Restarter::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl TryFrom<&Path> for Solver {
    type Error = SolverError;
    /// return a new solver built for a CNF file.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let config = Config::from(path);
        Solver::solver_build(&config)
    }
}

impl TryFrom<(&Config, &CnfProblem)> for Solver {
    type Error = SolverError;
    /// return a new solver loaded with a parsed problem.
    fn try_from((config, cnf): (&Config, &CnfProblem)) -> Result<Self, Self::Error> {
        Solver::instantiate(config, cnf).inject(cnf)
    }
}

impl TryFrom<Vec<Vec<i32>>> for Solver {
    type Error = SolverError;
    /// return a new solver for a vec-represented CNF, deriving the
    /// number of variables from the largest literal.
    fn try_from(vec: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        let cnf = CnfProblem::from(&vec[..]);
        Solver::try_from((&Config::default(), &cnf))
    }
}

impl SatSolverBuildIF for Solver {
    fn solver_build(config: &Config) -> Result<Solver, SolverError> {
        let cnf = CnfProblem::from_file(&config.cnf_file).map_err(|_| SolverError::IOError)?;
        Solver::try_from((config, &cnf))
    }
    // renamed from clause_new
    fn add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> Option<ClauseIndex> {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ..
        } = self;
        debug_assert_eq!(asg.decision_level(), 0);
        if lits.is_empty() {
            return None;
        }
        lits.sort_unstable();
        let mut j = 0;
        let mut l_ = NULL_LIT; // last literal; [x, !x] means tautology.
        for i in 0..lits.len() {
            let li = lits[i];
            let sat = asg.assigned(li);
            if sat == Some(true) || !li == l_ {
                return Some(NULL_CLAUSE);
            } else if sat != Some(false) && li != l_ {
                lits[j] = li;
                j += 1;
                l_ = li;
            }
        }
        lits.truncate(j);
        match lits.len() {
            0 => None, // Empty clause is UNSAT.
            1 => asg
                .assign_at_root_level(lits[0])
                .map_or(None, |_| Some(NULL_CLAUSE)),
            _ => match cdb.new_clause(lits, false) {
                RefClause::Clause(ci) => Some(ci),
                _ => Some(NULL_CLAUSE),
            },
        }
    }
}

impl Solver {
    fn inject(mut self, cnf: &CnfProblem) -> Result<Solver, SolverError> {
        // order clauses by size for locality
        let mut clauses = cnf.clauses.clone();
        clauses.sort_by_key(|c| c.len());
        for clause in clauses.iter() {
            if clause
                .iter()
                .any(|l| *l == 0 || self.asg.num_vars < l.unsigned_abs() as usize)
            {
                return Err(SolverError::InvalidLiteral);
            }
            let mut lits = clause.iter().map(|i| Lit::from(*i)).collect::<Vec<Lit>>();
            if self.add_unchecked_clause(&mut lits).is_none() {
                // a top-level contradiction; `solve` reports UNSAT
                self.state.ok = false;
                break;
            }
        }
        Ok(self)
    }
}
