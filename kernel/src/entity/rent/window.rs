use time::{Duration, OffsetDateTime};
use vodca::References;

/// Every rent lasts exactly this long.
pub const RENT_DURATION: Duration = Duration::hours(24);

/// How far before a new window's start an existing rent's end still blocks it.
pub const RENT_LOOKBACK: Duration = Duration::hours(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, References)]
pub struct RentWindow {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl RentWindow {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    pub fn starting_at(start: OffsetDateTime) -> Self {
        Self {
            start,
            end: start + RENT_DURATION,
        }
    }

    pub fn lookback_start(&self) -> OffsetDateTime {
        self.start - RENT_LOOKBACK
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether an existing rent of the same user and movie that ends at `existing_end`
    /// prevents this window from being admitted.
    ///
    /// Two clauses are evaluated, both with strict bounds:
    /// the existing end lies inside `(start, end)`, or it lies inside
    /// `(start - RENT_LOOKBACK, end)`. The second one covers the first, and both are kept
    /// so stores can evaluate them the same way.
    pub fn is_blocked_by(&self, existing_end: &OffsetDateTime) -> bool {
        let ends_within = self.start < *existing_end && *existing_end < self.end;
        let ends_within_lookback =
            self.lookback_start() < *existing_end && *existing_end < self.end;
        ends_within || ends_within_lookback
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};

    use super::{RentWindow, RENT_DURATION};

    fn t0() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    fn existing() -> RentWindow {
        RentWindow::starting_at(t0())
    }

    #[test]
    fn starting_at_lasts_one_day() {
        let window = RentWindow::starting_at(t0());
        assert_eq!(window.end(), &(t0() + RENT_DURATION));
        assert_eq!(window.duration(), Duration::hours(24));
    }

    #[test]
    fn overlapping_candidate_is_blocked() {
        let candidate = RentWindow::starting_at(t0() + Duration::hours(1));
        assert!(candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn lookback_blocks_beyond_plain_overlap() {
        let candidate = RentWindow::starting_at(t0() + Duration::hours(30));
        assert!(candidate.start() > existing().end());
        assert!(candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn end_equal_to_candidate_end_is_not_blocking() {
        let candidate = RentWindow::starting_at(t0());
        assert!(!candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn end_equal_to_candidate_start_falls_in_lookback() {
        // Clause one is strict at `start`, the lookback clause still catches it.
        let candidate = RentWindow::starting_at(t0() + Duration::hours(24));
        assert!(candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn end_equal_to_lookback_start_is_not_blocking() {
        let candidate = RentWindow::starting_at(t0() + Duration::hours(48));
        assert_eq!(&candidate.lookback_start(), existing().end());
        assert!(!candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn long_past_rent_is_not_blocking() {
        let candidate = RentWindow::starting_at(t0() + Duration::hours(72));
        assert!(!candidate.is_blocked_by(existing().end()));
    }

    #[test]
    fn future_rent_ending_after_candidate_is_not_blocking() {
        let candidate = RentWindow::starting_at(t0() - Duration::hours(1));
        assert!(!candidate.is_blocked_by(existing().end()));
    }
}
