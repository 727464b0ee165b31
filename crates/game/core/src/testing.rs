//! Fixtures shared by unit tests.

use crate::config::GameConfig;
use crate::env::{GameEnv, PcgRng};
use crate::state::{AccountId, Gender, Hamster, HamsterId, Household, NewAccount, NewHamster};

pub(crate) static CONFIG: GameConfig = GameConfig {
    starting_gold: GameConfig::DEFAULT_STARTING_GOLD,
    sell_payout: GameConfig::DEFAULT_SELL_PAYOUT,
};
pub(crate) static RNG: PcgRng = PcgRng;

pub(crate) const OWNER: AccountId = AccountId(1);

pub(crate) fn env(seed: u64) -> GameEnv<'static> {
    GameEnv::from_parts(&CONFIG, &RNG, seed)
}

pub(crate) fn hamster(id: u64, gender: Gender, hunger: i32, age: i32) -> Hamster {
    NewHamster {
        hunger,
        age,
        ..NewHamster::newborn(OWNER, format!("Hamster{id}"), gender)
    }
    .into_hamster(HamsterId(id))
}

pub(crate) fn household(gold: i64, hamsters: Vec<Hamster>) -> Household {
    let account = NewAccount::new("test@test.com", "hash", gold).into_account(OWNER);
    Household::new(account, hamsters)
}
