//! Billing calculator
//!
//! Pure pricing function for an active session. Amounts are whole currency
//! units, so everything is exact integer arithmetic; hourly bills round up so
//! partial hours are never undercharged.

use shared::models::RateUnit;

const SECS_PER_HOUR: u64 = 3600;

/// Current amount owed for a session
///
/// - `PerHour`: `ceil(elapsed_secs / 3600 * rate)`; zero at zero elapsed
/// - `PerFrame` / `PerGame`: the flat `rate`, independent of elapsed time
///
/// Side-effect free; safe to call at any polling interval for live display.
/// `rate` is guaranteed positive by catalog validation; negative elapsed
/// (clock skew) clamps to zero.
pub fn compute_bill(unit: RateUnit, rate: i64, elapsed_secs: i64) -> i64 {
    match unit {
        RateUnit::PerHour => {
            let elapsed = elapsed_secs.max(0) as u64;
            (elapsed * rate.max(0) as u64).div_ceil(SECS_PER_HOUR) as i64
        }
        RateUnit::PerFrame | RateUnit::PerGame => rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_hour_zero_elapsed_is_free() {
        assert_eq!(compute_bill(RateUnit::PerHour, 200, 0), 0);
    }

    #[test]
    fn test_per_hour_rounds_up_at_boundary() {
        // Exactly half an hour at 200/hour is 100; one second more rounds up
        assert_eq!(compute_bill(RateUnit::PerHour, 200, 1800), 100);
        assert_eq!(compute_bill(RateUnit::PerHour, 200, 1801), 101);
        // A full hour and a half
        assert_eq!(compute_bill(RateUnit::PerHour, 200, 5400), 300);
        // A single second is already billed
        assert_eq!(compute_bill(RateUnit::PerHour, 200, 1), 1);
    }

    #[test]
    fn test_per_hour_monotonic_in_elapsed() {
        let mut prev = 0;
        for elapsed in (0..=7200).step_by(7) {
            let bill = compute_bill(RateUnit::PerHour, 200, elapsed);
            assert!(
                bill >= prev,
                "bill decreased at {} secs: {} < {}",
                elapsed,
                bill,
                prev
            );
            prev = bill;
        }
    }

    #[test]
    fn test_flat_rates_ignore_elapsed() {
        for elapsed in [0, 1, 3600, 999_999] {
            assert_eq!(compute_bill(RateUnit::PerFrame, 100, elapsed), 100);
            assert_eq!(compute_bill(RateUnit::PerGame, 60, elapsed), 60);
        }
    }

    #[test]
    fn test_negative_elapsed_clamps_to_zero() {
        assert_eq!(compute_bill(RateUnit::PerHour, 200, -30), 0);
    }
}
