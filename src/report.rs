//! Pure attendance arithmetic: percentage, compliance tier, and the recovery
//! plan. No database access happens here, everything operates on the two
//! aggregate counts.

/// Minimum attendance percentage required to remain eligible.
pub const DEADLINE_PERCENT: f64 = 75.0;

/// Target percentage above which no corrective action is advised.
pub const SAFETY_NET_PERCENT: f64 = 85.0;

/// Where a course stands relative to the two institutional thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Below the 75% deadline. Action required.
    BelowDeadline,
    /// At or above 75% but below the 85% safety net.
    BelowSafetyNet,
    /// At or above the 85% safety net.
    Safe,
}

impl Tier {
    pub fn of(percentage: f64) -> Self {
        if percentage >= SAFETY_NET_PERCENT {
            Tier::Safe
        } else if percentage >= DEADLINE_PERCENT {
            Tier::BelowSafetyNet
        } else {
            Tier::BelowDeadline
        }
    }
}

/// The computed standing of one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseReport {
    pub total: u32,
    pub present: u32,
    pub percentage: f64,
    pub tier: Tier,
    /// Additional consecutive present sessions needed to reach the safety
    /// net. Zero means the next attended session already improves the ratio
    /// past it (or the course is already safe).
    pub recovery_count: u32,
}

impl CourseReport {
    /// Builds a report from the aggregate counts, or `None` when no sessions
    /// have been recorded yet (the percentage is undefined at zero).
    pub fn from_counts(total: u32, present: u32) -> Option<Self> {
        if total == 0 {
            return None;
        }
        debug_assert!(present <= total, "present sessions cannot exceed total");

        let percentage = 100.0 * f64::from(present) / f64::from(total);

        Some(Self {
            total,
            present,
            percentage,
            tier: Tier::of(percentage),
            recovery_count: recovery_count(total, present),
        })
    }

    /// The standing if one more session were skipped: same present count over
    /// one more total. Advisory only, nothing is written anywhere.
    pub fn bunk_projection(&self) -> Self {
        Self::from_counts(self.total + 1, self.present)
            .expect("total + 1 is always greater than zero")
    }
}

/// Minimal number of additional consecutive present sessions `x` such that
/// `(present + x) / (total + x) >= 0.85`.
///
/// Solving for x:
///   present + x >= 0.85 * (total + x)
///   0.15 * x    >= 0.85 * total - present
/// scaled by 100 to stay in exact integer arithmetic:
///   15 * x      >= 85 * total - 100 * present
///
/// Rounded up since partial sessions do not exist, and clamped at zero: a
/// non-positive deficit means no extra sessions are needed.
pub fn recovery_count(total: u32, present: u32) -> u32 {
    let deficit = 85 * i64::from(total) - 100 * i64::from(present);
    if deficit <= 0 {
        0
    } else {
        ((deficit + 14) / 15) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percentage(total: u32, present: u32) -> f64 {
        100.0 * f64::from(present) / f64::from(total)
    }

    #[test]
    fn no_records_means_no_report() {
        assert_eq!(CourseReport::from_counts(0, 0), None);
    }

    #[test]
    fn below_deadline_report() {
        let report = CourseReport::from_counts(20, 14).unwrap();
        assert_eq!(report.percentage, 70.0);
        assert_eq!(report.tier, Tier::BelowDeadline);
        // (14 + 20) / (20 + 20) = 85% exactly.
        assert_eq!(report.recovery_count, 20);
    }

    #[test]
    fn safe_report_needs_no_recovery() {
        let report = CourseReport::from_counts(20, 18).unwrap();
        assert_eq!(report.percentage, 90.0);
        assert_eq!(report.tier, Tier::Safe);
        assert_eq!(report.recovery_count, 0);
    }

    #[test]
    fn tier_boundaries_are_inclusive_below() {
        assert_eq!(Tier::of(percentage(20, 15)), Tier::BelowSafetyNet); // 75.00
        assert_eq!(Tier::of(percentage(20, 17)), Tier::Safe); // 85.00
        assert_eq!(Tier::of(percentage(20, 14)), Tier::BelowDeadline); // 70.00
    }

    #[test]
    fn bunk_projection_can_shift_tier() {
        let report = CourseReport::from_counts(10, 8).unwrap();
        assert_eq!(report.percentage, 80.0);
        assert_eq!(report.tier, Tier::BelowSafetyNet);

        let bunked = report.bunk_projection();
        assert_eq!(bunked.total, 11);
        assert_eq!(bunked.present, 8);
        assert!((bunked.percentage - 72.7).abs() < 0.05);
        assert_eq!(bunked.tier, Tier::BelowDeadline);
        assert!(bunked.recovery_count > 0);
    }

    #[test]
    fn percentage_is_monotonic_in_present() {
        for total in 1..=40 {
            let mut previous = -1.0;
            for present in 0..=total {
                let report = CourseReport::from_counts(total, present).unwrap();
                assert!(report.percentage >= previous);
                previous = report.percentage;
            }
        }
    }

    #[test]
    fn recovery_count_is_minimal() {
        for total in 1..=60u32 {
            for present in 0..=total {
                let x = recovery_count(total, present);

                // Attending x more sessions reaches the safety net.
                assert!(
                    100 * u64::from(present + x) >= 85 * u64::from(total + x),
                    "recovery_count({total}, {present}) = {x} falls short"
                );

                // One session fewer does not.
                if x > 0 {
                    assert!(
                        100 * u64::from(present + x - 1) < 85 * u64::from(total + x - 1),
                        "recovery_count({total}, {present}) = {x} is not minimal"
                    );
                }
            }
        }
    }

    #[test]
    fn low_attendance_close_to_target_needs_zero() {
        // 85 / 100 = 85% exactly, already at the target.
        assert_eq!(recovery_count(100, 85), 0);
        // One percent under needs a streak: deficit 100, ceil(100 / 15) = 7.
        assert_eq!(recovery_count(100, 84), 7);
        // 5 / 6 is 83.33%, but a single attended session reaches 6 / 7 = 85.7%.
        assert_eq!(recovery_count(6, 5), 1);
    }
}
