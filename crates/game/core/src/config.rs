/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Gold credited to a freshly registered account.
    pub starting_gold: i64,
    /// Gold credited when a hamster is sold.
    pub sell_payout: i64,
}

impl GameConfig {
    // ===== lifecycle rules =====
    /// Age gained and hunger lost by every hamster on each transaction tick.
    pub const TICK_STEP: i32 = 5;
    /// Hunger of a fully fed hamster.
    pub const MAX_HUNGER: i32 = 100;
    /// Hamsters older than this are deactivated.
    pub const MAX_AGE: i32 = 500;

    // ===== validation rules =====
    pub const MIN_NAME_LEN: usize = 2;
    pub const MAX_NAME_LEN: usize = 255;
    pub const MIN_PASSWORD_LEN: usize = 8;
    pub const MAX_EMAIL_LEN: usize = 180;

    // ===== reproduction =====
    pub const BABY_NAME_PREFIX: &'static str = "Baby";
    pub const BABY_SUFFIX_MIN: u32 = 100;
    pub const BABY_SUFFIX_MAX: u32 = 999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_GOLD: i64 = 500;
    pub const DEFAULT_SELL_PAYOUT: i64 = 300;

    pub fn new() -> Self {
        Self {
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            sell_payout: Self::DEFAULT_SELL_PAYOUT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
