use std::collections::BTreeMap;

use crate::state::{Account, Hamster, HamsterId, Household, NewHamster};

/// Pending mutations produced by one executed action.
///
/// The persistence layer applies a delta as a single unit: either every
/// change lands or none does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseholdDelta {
    /// Updated account row, if any account field changed.
    pub account: Option<Account>,
    /// Hamsters whose fields changed, in id order.
    pub updated: Vec<Hamster>,
    /// Hamsters that must be deleted.
    pub removed: Vec<HamsterId>,
    /// Hamsters to insert; the store allocates their ids.
    pub born: Vec<NewHamster>,
}

impl HouseholdDelta {
    /// Creates a delta by comparing two household states.
    ///
    /// Hamsters are matched by id. Rows present only in `before` are
    /// removals; newborns present only in `after` are insertions.
    pub fn from_states(before: &Household, after: &Household) -> Self {
        let account = (before.account != after.account).then(|| after.account.clone());

        let previous: BTreeMap<HamsterId, &Hamster> =
            before.hamsters.iter().map(|h| (h.id, h)).collect();
        let current: BTreeMap<HamsterId, &Hamster> =
            after.hamsters.iter().map(|h| (h.id, h)).collect();

        let updated = current
            .iter()
            .filter(|(id, hamster)| previous.get(id).is_some_and(|old| old != *hamster))
            .map(|(_, hamster)| (*hamster).clone())
            .collect();

        let removed = previous
            .keys()
            .filter(|id| !current.contains_key(id))
            .copied()
            .collect();

        let born = after
            .newborns
            .iter()
            .skip(before.newborns.len())
            .cloned()
            .collect();

        Self {
            account,
            updated,
            removed,
            born,
        }
    }

    /// Returns true if the action changed nothing.
    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.updated.is_empty()
            && self.removed.is_empty()
            && self.born.is_empty()
    }
}
