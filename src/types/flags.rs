use bitflags::bitflags;

/// API for flag bytes.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag is on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
}

bitflags! {
    /// Misc flags used by [`Clause`](`crate::cdb::Clause`).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct FlagClause: u8 {
        /// a clause was generated by conflict analysis and is removable.
        const LEARNT  = 0b0000_0001;
        /// a clause is the reason of a live implication.
        const LOCKED  = 0b0000_0010;
        /// a clause slot was retired and waits for reuse.
        const GARBAGE = 0b0000_0100;
    }
}

bitflags! {
    /// Misc flags used by [`Var`](`crate::assign::Var`).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct FlagVar: u8 {
        /// a var is visited during the current conflict analysis.
        const CA_SEEN = 0b0000_0001;
    }
}
