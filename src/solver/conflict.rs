//! Conflict Analysis
use {
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarRewardIF},
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        state::State,
        types::*,
    },
};

/// learn a clause from the conflict `ci` and backjump.
pub fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    ci: ClauseIndex,
) -> MaybeInconsistent {
    let conflicting_level = asg.decision_level();
    debug_assert!(0 < conflicting_level);
    //## age activities once per conflict
    asg.decay_activity();
    cdb.decay_activity();
    let assign_level = conflict_analyze(asg, cdb, state, ci);
    let new_learnt = &mut state.new_learnt;
    debug_assert!(!new_learnt.is_empty());
    //## Learnt Literal Rewarding
    for l in new_learnt.iter() {
        asg.reward_at_analysis(l.vi());
    }
    let l0 = new_learnt[0];
    if new_learnt.len() == 1 {
        //
        //## A NEW ASSERTION by UNIT LEARNT CLAUSE GENERATION
        //
        cdb.num_learnt_total += 1;
        asg.cancel_until(cdb, 0);
        return asg.assign_at_root_level(l0);
    }
    asg.cancel_until(cdb, assign_level);
    debug_assert_eq!(asg.assigned(l0), None);
    debug_assert_eq!(
        new_learnt.iter().skip(1).map(|l| asg.level(l.vi())).max(),
        Some(assign_level)
    );
    match cdb.new_clause(new_learnt, true) {
        RefClause::Clause(cid) => {
            debug_assert_eq!(cdb[cid].lit0(), l0);
            //## the new clause is unit under the backjumped trail
            debug_assert!(cdb[cid]
                .iter()
                .skip(1)
                .all(|l| asg.assigned(*l) == Some(false)));
            if 0 < asg.decision_level() {
                cdb[cid].turn_on(FlagClause::LOCKED);
            }
            asg.assign_by_implication(l0, AssignReason::Implication(cid));
            Ok(())
        }
        _ => Err(SolverError::SolverBug),
    }
}

///
/// ## Conflict Analysis
///
/// Compute the 1-UIP learnt clause by resolving backwards over the
/// implication graph, and return the backjump level. The learnt clause is
/// left in `state.new_learnt` with the asserting literal first and a
/// literal of the backjump level second.
fn conflict_analyze(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    conflicting_clause: ClauseIndex,
) -> DecisionLevel {
    let learnt = &mut state.new_learnt;
    learnt.clear();
    learnt.push(NULL_LIT); // reserved for the asserting literal
    let dl = asg.decision_level();
    let mut p = NULL_LIT;
    let mut ci = conflicting_clause;
    let mut path_cnt = 0;
    let mut ti = asg.stack_len() - 1; // trail index
    loop {
        if cdb[ci].is(FlagClause::LEARNT) {
            cdb.reward_at_analysis(ci);
        }
        let skip = usize::from(p != NULL_LIT); // a reason clause implies its first literal
        debug_assert!(p == NULL_LIT || cdb[ci].lit0() == p);
        for q in &cdb[ci][skip..] {
            let vi = q.vi();
            let lvl = asg.level(vi);
            if !asg.var(vi).is(FlagVar::CA_SEEN) && 0 < lvl {
                debug_assert!(asg.assign(vi).is_some());
                asg.var_mut(vi).turn_on(FlagVar::CA_SEEN);
                if lvl == dl {
                    path_cnt += 1;
                } else {
                    learnt.push(*q);
                }
            }
        }
        //## set the index of the next literal to ti
        while !asg.var(asg.stack(ti).vi()).is(FlagVar::CA_SEEN) {
            debug_assert!(0 < ti);
            ti -= 1;
        }
        p = asg.stack(ti);
        asg.var_mut(p.vi()).turn_off(FlagVar::CA_SEEN);
        path_cnt -= 1;
        if path_cnt == 0 {
            break;
        }
        debug_assert!(0 < ti);
        ti -= 1;
        match asg.reason(p.vi()) {
            AssignReason::Implication(r) => ci = r,
            r => panic!("conflict_analyze: pivot {p} has no implying clause but {r}"),
        }
    }
    debug_assert_eq!(asg.level(p.vi()), dl);
    learnt[0] = !p;
    if learnt.len() == 1 {
        return 0;
    }
    //## canonicalize, then place a literal of the backjump level second
    learnt[1..].sort_unstable();
    learnt.dedup();
    let mut max_i = 1;
    let mut assign_level = asg.level(learnt[1].vi());
    for (i, l) in learnt.iter().enumerate().skip(2) {
        let lv = asg.level(l.vi());
        if assign_level < lv {
            assign_level = lv;
            max_i = i;
        }
    }
    learnt.swap(1, max_i);
    for l in learnt.iter().skip(1) {
        asg.var_mut(l.vi()).turn_off(FlagVar::CA_SEEN);
    }
    assign_level
}
