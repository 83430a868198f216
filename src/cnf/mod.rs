//! Module `cnf` provides DIMACS CNF reading and writing.
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// A propositional problem in conjunctive normal form, as read from a
/// DIMACS file: clauses are lists of nonzero signed integers whose
/// magnitudes don't exceed `num_variables`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CnfProblem {
    pub num_variables: u32,
    pub clauses: Vec<Vec<i32>>,
}

/// Errors raised while reading a DIMACS stream.
#[derive(Debug)]
pub enum CnfError {
    /// no `p cnf <nvars> <nclauses>` line, or unparsable counts
    MalformedHeader,
    /// a token in the clause section is not an integer
    NonIntegerToken(String),
    /// a literal's magnitude exceeds the declared number of variables
    LiteralOutOfRange(i32),
    /// the stream ended inside a clause, before its `0` terminator
    MissingTerminator,
    /// the stream ended before the declared number of clauses
    TruncatedInput,
    /// an underlying I/O failure
    IOError(std::io::Error),
}

impl fmt::Display for CnfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CnfError::MalformedHeader => write!(f, "malformed DIMACS header"),
            CnfError::NonIntegerToken(t) => write!(f, "non-integer token '{t}'"),
            CnfError::LiteralOutOfRange(l) => write!(f, "literal {l} out of declared range"),
            CnfError::MissingTerminator => write!(f, "clause without terminating 0"),
            CnfError::TruncatedInput => write!(f, "fewer clauses than declared"),
            CnfError::IOError(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<std::io::Error> for CnfError {
    fn from(e: std::io::Error) -> Self {
        CnfError::IOError(e)
    }
}

impl CnfProblem {
    pub fn new(num_variables: u32, clauses: Vec<Vec<i32>>) -> Self {
        CnfProblem {
            num_variables,
            clauses,
        }
    }
    /// read a problem from a DIMACS file.
    pub fn from_file(path: &Path) -> Result<CnfProblem, CnfError> {
        let file = File::open(path)?;
        CnfProblem::parse(BufReader::new(file))
    }
    /// read a problem from a DIMACS token stream. Lines starting with `c`
    /// are comments; the header introduces the clause section.
    pub fn parse(input: impl BufRead) -> Result<CnfProblem, CnfError> {
        let mut tokens: Vec<String> = Vec::new();
        for line in input.lines() {
            let line = line?;
            let body = line.trim_start();
            if body.starts_with('c') {
                continue;
            }
            tokens.extend(body.split_whitespace().map(|s| s.to_string()));
        }
        let mut it = tokens.into_iter();
        match (it.next(), it.next()) {
            (Some(p), Some(k)) if p == "p" && k == "cnf" => (),
            _ => return Err(CnfError::MalformedHeader),
        }
        let num_variables = it
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or(CnfError::MalformedHeader)?;
        let num_clauses = it
            .next()
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or(CnfError::MalformedHeader)?;
        let mut clauses: Vec<Vec<i32>> = Vec::with_capacity(num_clauses);
        for _ in 0..num_clauses {
            let mut clause: Vec<i32> = Vec::new();
            loop {
                let token = it.next().ok_or(if clause.is_empty() {
                    CnfError::TruncatedInput
                } else {
                    CnfError::MissingTerminator
                })?;
                let val = token
                    .parse::<i32>()
                    .map_err(|_| CnfError::NonIntegerToken(token))?;
                if val == 0 {
                    break;
                }
                if num_variables < val.unsigned_abs() {
                    return Err(CnfError::LiteralOutOfRange(val));
                }
                clause.push(val);
            }
            clauses.push(clause);
        }
        Ok(CnfProblem {
            num_variables,
            clauses,
        })
    }
}

impl fmt::Display for CnfProblem {
    /// write back in DIMACS format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_variables, self.clauses.len())?;
        for clause in self.clauses.iter() {
            for l in clause.iter() {
                write!(f, "{l} ")?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

impl<V: AsRef<[i32]>> From<&[V]> for CnfProblem {
    fn from(vec: &[V]) -> Self {
        let num_variables = vec
            .iter()
            .map(|clause| {
                clause
                    .as_ref()
                    .iter()
                    .map(|l| l.unsigned_abs())
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0);
        CnfProblem {
            num_variables,
            clauses: vec.iter().map(|c| c.as_ref().to_vec()).collect::<Vec<_>>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_clause() {
        let cnf = CnfProblem::parse("p cnf 1 2\n1 0\n-1 0\n".as_bytes()).expect("parse error");
        assert_eq!(cnf.num_variables, 1);
        assert_eq!(cnf.clauses, vec![vec![1], vec![-1]]);
    }
    #[test]
    fn test_comments() {
        let cnf =
            CnfProblem::parse("c a simple clause\np cnf 1 2\n1 0\nc mid comment\n-1 0\n".as_bytes())
                .expect("parse error");
        assert_eq!(cnf.num_variables, 1);
        assert_eq!(cnf.clauses, vec![vec![1], vec![-1]]);
    }
    #[test]
    fn test_multiline_clause() {
        let cnf = CnfProblem::parse("p cnf 3 1\n1 2\n3 0\n".as_bytes()).expect("parse error");
        assert_eq!(cnf.clauses, vec![vec![1, 2, 3]]);
    }
    #[test]
    fn test_empty_clause() {
        let cnf = CnfProblem::parse("p cnf 2 1\n0\n".as_bytes()).expect("parse error");
        assert_eq!(cnf.clauses, vec![Vec::<i32>::new()]);
    }
    #[test]
    fn test_bad_header() {
        assert!(matches!(
            CnfProblem::parse("p dnf 1 1\n1 0\n".as_bytes()),
            Err(CnfError::MalformedHeader)
        ));
        assert!(matches!(
            CnfProblem::parse("1 0\n".as_bytes()),
            Err(CnfError::MalformedHeader)
        ));
    }
    #[test]
    fn test_bad_token() {
        assert!(matches!(
            CnfProblem::parse("p cnf 2 1\n1 x 0\n".as_bytes()),
            Err(CnfError::NonIntegerToken(_))
        ));
    }
    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            CnfProblem::parse("p cnf 2 1\n1 3 0\n".as_bytes()),
            Err(CnfError::LiteralOutOfRange(3))
        ));
    }
    #[test]
    fn test_truncated() {
        assert!(matches!(
            CnfProblem::parse("p cnf 2 2\n1 2 0\n".as_bytes()),
            Err(CnfError::TruncatedInput)
        ));
        assert!(matches!(
            CnfProblem::parse("p cnf 2 1\n1 2\n".as_bytes()),
            Err(CnfError::MissingTerminator)
        ));
    }
    #[test]
    fn test_round_trip() {
        let text = "p cnf 5 6\n1 -2 0\n-1 3 -4 0\n1 3 -4 0\n-3 -5 0\n-3 5 0\n3 4 0\n";
        let cnf = CnfProblem::parse(text.as_bytes()).expect("parse error");
        let replayed = CnfProblem::parse(cnf.to_string().as_bytes()).expect("parse error");
        assert_eq!(cnf, replayed);
    }
}
