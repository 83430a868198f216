/// Crate `config` provides solver's configuration and CLI.
use {std::path::PathBuf, structopt::StructOpt};

/// Configuration built from command line options
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "risat", about = "A CDCL SAT solver for DIMACS CNF files")]
pub struct Config {
    //
    //## I/O configuration
    //
    /// CNF file in DIMACS format
    #[structopt(parse(from_os_str))]
    pub cnf_file: PathBuf,

    /// Disable the statistics report
    #[structopt(long = "quiet", short = "q")]
    pub quiet_mode: bool,

    //
    //## clause DB
    //
    /// Soft limit of #clauses (0 for unlimited)
    #[structopt(long = "cl", default_value = "0")]
    pub clause_limit: usize,

    /// Clause activity decay rate
    #[structopt(long = "cd", default_value = "0.999")]
    pub cls_decay: f64,

    //
    //## var rewarding
    //
    /// Variable activity decay rate
    #[structopt(long = "vd", default_value = "0.95")]
    pub var_decay: f64,

    //
    //## restarter
    //
    /// #conflicts between restarts
    #[structopt(long = "rs", default_value = "100")]
    pub rst_step: usize,

    /// Disable restarts
    #[structopt(long = "no-restart")]
    pub without_restart: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cnf_file: PathBuf::new(),
            quiet_mode: false,
            clause_limit: 0,
            cls_decay: 0.999,
            var_decay: 0.95,
            rst_step: 100,
            without_restart: false,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        Config {
            cnf_file: PathBuf::from(path),
            ..Config::default()
        }
    }
}
