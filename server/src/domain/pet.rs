//! Pet Entity
//!
//! Stats drift over time and are brought up to date lazily: every read or
//! action calls [`Pet::tick`] with the current time before the pet is used.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub const STAT_MIN: i64 = 0;
pub const STAT_MAX: i64 = 100;

// Natural drift per minute
const FULLNESS_DECAY_PER_MIN: f64 = 0.20;
const ENERGY_DECAY_PER_MIN: f64 = 0.10;
const HAPPINESS_DECAY_PER_MIN: f64 = 0.05;

// Mood effects per minute, applied after the base drift
const HAPPINESS_PENALTY_LOW_FULLNESS: f64 = 0.15;
const HAPPINESS_PENALTY_LOW_ENERGY: f64 = 0.10;
const HAPPINESS_BONUS_WELL_CARED: f64 = 0.05;

const LOW_STAT: f64 = 30.0;
const HIGH_STAT: f64 = 70.0;

const MAX_BACKDATED_MINUTES: i64 = 3 * 24 * 60;
const MAX_MINUTES_PER_TICK: i64 = 24 * 60;

const MS_PER_MINUTE: i64 = 60_000;

/// A virtual pet owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub level: i64,
    pub fullness: i64,
    pub happiness: i64,
    pub energy: i64,
    /// Last time the drift was applied, unix millis (0 = never)
    pub last_tick_at: i64,
    pub created_at: i64,
}

impl Pet {
    /// A freshly adopted pet: level 1, every stat full
    pub fn adopt(user_id: i64, name: &str, pet_type: &str, now_ms: i64) -> Self {
        Self {
            id: 0,
            user_id,
            name: name.trim().to_string(),
            pet_type: pet_type.trim().to_string(),
            level: 1,
            fullness: STAT_MAX,
            happiness: STAT_MAX,
            energy: STAT_MAX,
            last_tick_at: now_ms,
            created_at: now_ms,
        }
    }

    /// Apply the drift accumulated since `last_tick_at`.
    ///
    /// Only whole minutes count. Absences are capped at three days, and a
    /// single call never applies more than 24 hours. Returns `true` when
    /// anything (stats or timestamp) changed and the pet should be saved.
    pub fn tick(&mut self, now_ms: i64) -> bool {
        if self.last_tick_at <= 0 {
            self.last_tick_at = now_ms;
            return true;
        }

        let raw_minutes = ((now_ms - self.last_tick_at) / MS_PER_MINUTE).max(0);
        let minutes = raw_minutes
            .min(MAX_BACKDATED_MINUTES)
            .min(MAX_MINUTES_PER_TICK);
        if minutes == 0 {
            return false;
        }
        let m = minutes as f64;

        let fullness = self.fullness as f64 - FULLNESS_DECAY_PER_MIN * m;
        let energy = self.energy as f64 - ENERGY_DECAY_PER_MIN * m;
        let mut happiness = self.happiness as f64 - HAPPINESS_DECAY_PER_MIN * m;

        if fullness < LOW_STAT {
            happiness -= HAPPINESS_PENALTY_LOW_FULLNESS * m;
        }
        if energy < LOW_STAT {
            happiness -= HAPPINESS_PENALTY_LOW_ENERGY * m;
        }
        if fullness > HIGH_STAT && energy > HIGH_STAT {
            happiness += HAPPINESS_BONUS_WELL_CARED * m;
        }

        let next_fullness = clamp_stat(round_half_up(fullness));
        let next_energy = clamp_stat(round_half_up(energy));
        let next_happiness = clamp_stat(round_half_up(happiness));

        let changed = next_fullness != self.fullness
            || next_energy != self.energy
            || next_happiness != self.happiness
            || self.last_tick_at != now_ms;

        self.fullness = next_fullness;
        self.energy = next_energy;
        self.happiness = next_happiness;
        self.last_tick_at = now_ms;

        changed
    }

    /// Apply an action's stat deltas, clamping each stat
    pub fn apply(&mut self, action: PetAction) {
        let (fullness, happiness, energy) = action.deltas();
        self.fullness = clamp_stat(self.fullness + fullness);
        self.happiness = clamp_stat(self.happiness + happiness);
        self.energy = clamp_stat(self.energy + energy);
    }

    /// Tick to `now_ms`, then apply the action
    pub fn perform(&mut self, action: PetAction, now_ms: i64) {
        self.tick(now_ms);
        self.apply(action);
    }
}

impl Entity for Pet {
    type Id = i64;
    const KIND: &'static str = "Pet";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Care actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetAction {
    Feed,
    Play,
    Rest,
}

impl PetAction {
    /// (fullness, happiness, energy)
    fn deltas(self) -> (i64, i64, i64) {
        match self {
            PetAction::Feed => (20, 5, 0),
            PetAction::Play => (-10, 15, -10),
            PetAction::Rest => (-5, 2, 25),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PetAction::Feed => "feed",
            PetAction::Play => "play",
            PetAction::Rest => "rest",
        }
    }
}

/// Clamp a stat value into `[0, 100]`
pub fn clamp_stat(value: i64) -> i64 {
    value.clamp(STAT_MIN, STAT_MAX)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000_000;

    fn minutes(n: i64) -> i64 {
        T0 + n * MS_PER_MINUTE
    }

    fn pet_with(fullness: i64, happiness: i64, energy: i64) -> Pet {
        let mut pet = Pet::adopt(1, "Mochi", "Cat", T0);
        pet.fullness = fullness;
        pet.happiness = happiness;
        pet.energy = energy;
        pet
    }

    #[test]
    fn test_adopt_defaults() {
        let pet = Pet::adopt(7, "  Mochi ", " Cat ", T0);
        assert_eq!(pet.user_id, 7);
        assert_eq!(pet.name, "Mochi");
        assert_eq!(pet.pet_type, "Cat");
        assert_eq!(pet.level, 1);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (100, 100, 100));
        assert_eq!(pet.last_tick_at, T0);
    }

    #[test]
    fn test_tick_under_a_minute_is_noop() {
        let mut pet = pet_with(100, 100, 100);
        assert!(!pet.tick(T0 + 59_999));
        assert_eq!(pet.last_tick_at, T0);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (100, 100, 100));
    }

    #[test]
    fn test_tick_clock_skew_is_noop() {
        let mut pet = pet_with(50, 50, 50);
        assert!(!pet.tick(T0 - 10 * MS_PER_MINUTE));
        assert_eq!(pet.last_tick_at, T0);
    }

    #[test]
    fn test_tick_first_touch_only_stamps() {
        let mut pet = pet_with(60, 60, 60);
        pet.last_tick_at = 0;
        assert!(pet.tick(T0));
        assert_eq!(pet.last_tick_at, T0);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (60, 60, 60));
    }

    #[test]
    fn test_tick_ten_minutes_well_cared() {
        let mut pet = pet_with(100, 100, 100);
        assert!(pet.tick(minutes(10)));
        assert_eq!(pet.fullness, 98);
        assert_eq!(pet.energy, 99);
        // -0.5 base, +0.5 well-cared bonus
        assert_eq!(pet.happiness, 100);
        assert_eq!(pet.last_tick_at, minutes(10));
    }

    #[test]
    fn test_tick_rounds_half_up() {
        let mut pet = pet_with(100, 100, 100);
        pet.tick(minutes(5));
        assert_eq!(pet.energy, 100);
        assert_eq!(pet.fullness, 99);
    }

    #[test]
    fn test_tick_low_fullness_penalty() {
        let mut pet = pet_with(40, 50, 80);
        pet.tick(minutes(60));
        assert_eq!(pet.fullness, 28);
        assert_eq!(pet.energy, 74);
        assert_eq!(pet.happiness, 38);
    }

    #[test]
    fn test_tick_low_energy_penalty() {
        let mut pet = pet_with(100, 50, 30);
        pet.tick(minutes(10));
        // energy 29 < 30, fullness 98 but energy not > 70
        assert_eq!(pet.energy, 29);
        assert_eq!(pet.fullness, 98);
        assert_eq!(pet.happiness, 49);
    }

    #[test]
    fn test_tick_long_absence_is_capped() {
        let mut capped = pet_with(100, 100, 100);
        capped.tick(minutes(24 * 60));
        let mut long_gone = pet_with(100, 100, 100);
        long_gone.tick(minutes(30 * 24 * 60));

        assert_eq!(capped.fullness, long_gone.fullness);
        assert_eq!(capped.happiness, long_gone.happiness);
        assert_eq!(capped.energy, long_gone.energy);
        assert_eq!((long_gone.fullness, long_gone.happiness, long_gone.energy), (0, 0, 0));
        assert_eq!(long_gone.last_tick_at, minutes(30 * 24 * 60));
    }

    #[test]
    fn test_actions_apply_deltas() {
        let mut pet = pet_with(50, 50, 50);
        pet.apply(PetAction::Feed);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (70, 55, 50));
        pet.apply(PetAction::Play);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (60, 70, 40));
        pet.apply(PetAction::Rest);
        assert_eq!((pet.fullness, pet.happiness, pet.energy), (55, 72, 65));
        assert_eq!(pet.level, 1);
    }

    #[test]
    fn test_actions_clamp() {
        let mut pet = pet_with(95, 98, 5);
        pet.apply(PetAction::Feed);
        assert_eq!((pet.fullness, pet.happiness), (100, 100));
        pet.apply(PetAction::Play);
        assert_eq!(pet.energy, 0);
        let mut tired = pet_with(3, 0, 90);
        tired.apply(PetAction::Rest);
        assert_eq!((tired.fullness, tired.happiness, tired.energy), (0, 2, 100));
    }

    #[test]
    fn test_perform_ticks_first() {
        let mut pet = pet_with(100, 100, 100);
        pet.perform(PetAction::Feed, minutes(10));
        assert_eq!(pet.fullness, 100);
        assert_eq!(pet.energy, 99);
        assert_eq!(pet.last_tick_at, minutes(10));
    }

    #[test]
    fn test_serializes_type_field() {
        let pet = pet_with(1, 2, 3);
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["type"], "Cat");
    }
}
