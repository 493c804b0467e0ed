//! Pet Mood
//!
//! Status lines for stats that need attention.

use crate::brand::statuses;
use crate::models::Pet;

/// A stat at or below this is flagged
pub const LOW_STAT: i64 = 30;

/// Messages for each low stat, in fullness, happiness, energy order
pub fn mood_for(pet: &Pet) -> Vec<&'static str> {
    [
        (pet.fullness, statuses::LOW_FOOD),
        (pet.happiness, statuses::LOW_HAPPY),
        (pet.energy, statuses::LOW_ENERGY),
    ]
    .into_iter()
    .filter(|(value, _)| *value <= LOW_STAT)
    .map(|(_, message)| message)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(fullness: i64, happiness: i64, energy: i64) -> Pet {
        Pet {
            fullness,
            happiness,
            energy,
            ..Default::default()
        }
    }

    #[test]
    fn test_healthy_pet_has_no_mood() {
        assert!(mood_for(&pet(31, 80, 100)).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(mood_for(&pet(30, 90, 90)), vec![statuses::LOW_FOOD]);
    }

    #[test]
    fn test_all_low() {
        assert_eq!(
            mood_for(&pet(0, 12, 30)),
            vec![statuses::LOW_FOOD, statuses::LOW_HAPPY, statuses::LOW_ENERGY]
        );
    }
}
