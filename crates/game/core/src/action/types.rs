use crate::lifecycle::AgingReport;
use crate::state::{Gold, HamsterId, NewHamster};

/// Confirmation returned by the sleep time-skip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepReport {
    /// Days skipped.
    pub days: i64,
    /// Hamsters aged by the skip.
    pub affected: usize,
    /// Hamsters deactivated by the skip.
    pub inactive_hamsters: usize,
}

impl SleepReport {
    pub fn new(days: i64, aging: AgingReport) -> Self {
        Self {
            days,
            affected: aging.affected,
            inactive_hamsters: aging.deactivated,
        }
    }
}

/// What an executed action did, for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum ActionOutcome {
    Fed { hamster: HamsterId, cost: Gold },
    Sold { hamster: HamsterId, payout: Gold },
    Bred { baby: NewHamster },
    Slept(SleepReport),
    Renamed { hamster: HamsterId },
    /// Rename to the current name; nothing was written.
    Unchanged { hamster: HamsterId },
}
