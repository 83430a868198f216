//! Module `types` provides various building blocks, including some common traits.

/// methods on flags used in Var and Clause
pub mod flags;
/// methods on literals
pub mod lit;

pub use self::{flags::*, lit::*};

pub use crate::{assign::AssignReason, cnf::CnfProblem, config::Config};

use std::fmt;

/// 'Variable' identifier or 'variable' index, starting with one.
pub type VarId = usize;

/// Decision Level Representation.
pub type DecisionLevel = u32;

/// Reference into the clause database. Index 0 is reserved for 'no clause'.
pub type ClauseIndex = usize;

/// the value of `ClauseIndex` meaning 'no clause'.
pub const NULL_CLAUSE: ClauseIndex = 0;

/// A generic reference to a clause or what it degenerated into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefClause {
    Clause(ClauseIndex),
    Dead,
    EmptyClause,
    UnitClause(Lit),
}

/// Internal errors.
/// Note: returning `Result<(), a-singleton>` is identical to returning `bool`.
#[derive(Debug, Eq, PartialEq)]
pub enum SolverError {
    // A given CNF contains an empty clause or derives it during reading
    EmptyClause,
    // The load phase produced a top-level contradiction
    Inconsistent,
    // The caller set the interruption flag
    Interrupted,
    // A clause contains a literal out of the range defined in the header
    InvalidLiteral,
    // Exceptions caused by file operations
    IOError,
    OutOfMemory,
    // UNSAT with the clause falsified at the top level
    RootLevelConflict(ClauseIndex),
    SolverBug,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A Return type used by solver functions.
pub type MaybeInconsistent = Result<(), SolverError>;

/// API for object instantiation based on `Config` and `CnfProblem`.
/// This is implemented by *all the major modules* except `Config` and
/// `CnfProblem` themselves.
pub trait Instantiate {
    /// make and return an object from `Config` and `CnfProblem`.
    fn instantiate(config: &Config, cnf: &CnfProblem) -> Self;
}
