//! Hamster lifecycle rules: aging, hunger decay and deactivation.
//!
//! Two entry points share the same rule. [`apply_transaction_effects`] is
//! the fixed per-action tick run as a side effect of feed, sell and
//! reproduce. [`advance`] takes a caller-chosen step count and backs the
//! sleep time-skip.

use crate::config::GameConfig;
use crate::state::Hamster;

/// Summary of one lifecycle pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgingReport {
    /// Hamsters whose age and hunger were changed.
    pub affected: usize,
    /// Hamsters that became inactive during this pass.
    pub deactivated: usize,
}

/// Applies the per-action tick to every hamster in the collection.
///
/// Each hamster ages by [`GameConfig::TICK_STEP`] and loses the same amount
/// of hunger. Calling this twice for one action ages the collection twice;
/// the engine guarantees a single call per action.
pub fn apply_transaction_effects(hamsters: &mut [Hamster]) {
    advance(hamsters.iter_mut(), GameConfig::TICK_STEP);
}

/// Ages every hamster by `steps` and drains the same amount of hunger.
///
/// A step count of zero is a no-op and reports nothing affected.
pub fn advance<'a, I>(hamsters: I, steps: i32) -> AgingReport
where
    I: IntoIterator<Item = &'a mut Hamster>,
{
    let mut report = AgingReport::default();
    if steps == 0 {
        return report;
    }

    for hamster in hamsters {
        report.affected += 1;
        if hamster.advance(steps) {
            report.deactivated += 1;
        }
    }

    report
}
