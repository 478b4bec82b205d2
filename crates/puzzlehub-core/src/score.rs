use crate::catalog::Difficulty;

/// Elapsed-time reference for the completion bonus, in seconds. Flat across
/// difficulties; the bonus hits zero at and beyond this mark.
pub const TIME_BONUS_REF_SECS: u64 = 600;

/// Points awarded per second under the bonus reference.
pub const TIME_BONUS_RATE: u64 = 2;

/// Points for completing a puzzle: difficulty base plus a time bonus,
/// unbounded above.
pub fn compute(difficulty: Difficulty, elapsed_secs: u64) -> u64 {
    let bonus = TIME_BONUS_REF_SECS.saturating_sub(elapsed_secs) * TIME_BONUS_RATE;
    difficulty.base_points() + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(compute(Difficulty::Easy, 0), 1300);
        assert_eq!(compute(Difficulty::Easy, 600), 100);
        assert_eq!(compute(Difficulty::Hard, 700), 300);
    }

    #[test]
    fn bonus_floors_at_zero() {
        assert_eq!(compute(Difficulty::Medium, 600), 200);
        assert_eq!(compute(Difficulty::Medium, 10_000), 200);
    }

    #[test]
    fn faster_is_never_worse() {
        for secs in 0..700 {
            assert!(compute(Difficulty::Hard, secs) >= compute(Difficulty::Hard, secs + 1));
        }
    }
}
