use crate::config::GameConfig;

use super::common::{AccountId, HamsterId};

/// Hamster gender, spelled `m` / `f` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    #[strum(serialize = "m")]
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Male,
    #[strum(serialize = "f")]
    #[cfg_attr(feature = "serde", serde(rename = "f"))]
    Female,
}

/// A persisted hamster.
///
/// `hunger` and `age` are deliberately not clamped: hunger may drop below
/// zero and age may exceed [`GameConfig::MAX_AGE`]; either condition
/// deactivates the hamster for good.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hamster {
    pub id: HamsterId,
    /// Owning account. The only place the relationship is stored.
    pub owner: AccountId,
    pub name: String,
    pub hunger: i32,
    pub age: i32,
    pub gender: Gender,
    pub active: bool,
}

impl Hamster {
    /// True when feeding would have no effect.
    pub fn is_satiated(&self) -> bool {
        self.hunger >= GameConfig::MAX_HUNGER
    }

    /// True when the hamster is past the age limit or starving.
    pub fn exceeds_limits(&self) -> bool {
        self.age > GameConfig::MAX_AGE || self.hunger < 0
    }

    /// Gold needed to bring hunger back to the maximum, floored at zero.
    pub fn feeding_cost(&self) -> i64 {
        i64::from(GameConfig::MAX_HUNGER.saturating_sub(self.hunger)).max(0)
    }

    /// Ages the hamster and drains hunger by `steps`.
    ///
    /// Returns true if this call deactivated the hamster. Deactivation is
    /// monotonic: an inactive hamster never comes back.
    pub fn advance(&mut self, steps: i32) -> bool {
        self.age = self.age.saturating_add(steps);
        self.hunger = self.hunger.saturating_sub(steps);

        if self.active && self.exceeds_limits() {
            self.active = false;
            return true;
        }
        false
    }
}

/// Hamster row that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewHamster {
    pub owner: AccountId,
    pub name: String,
    pub hunger: i32,
    pub age: i32,
    pub gender: Gender,
    pub active: bool,
}

impl NewHamster {
    /// Fresh hamster: full, newborn and active.
    pub fn newborn(owner: AccountId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            owner,
            name: name.into(),
            hunger: GameConfig::MAX_HUNGER,
            age: 0,
            gender,
            active: true,
        }
    }

    /// Attaches the identifier allocated by the store.
    pub fn into_hamster(self, id: HamsterId) -> Hamster {
        Hamster {
            id,
            owner: self.owner,
            name: self.name,
            hunger: self.hunger,
            age: self.age,
            gender: self.gender,
            active: self.active,
        }
    }
}
