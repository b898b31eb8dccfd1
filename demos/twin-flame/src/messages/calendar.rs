/// A local calendar day, counted from 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(pub i64);

impl CalendarDay {
    /// Proleptic Gregorian date to day number (days-from-civil).
    pub fn from_civil(year: i32, month: u32, day: u32) -> Self {
        let y = i64::from(year) - i64::from(month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let m = i64::from(month);
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        CalendarDay(era * 146_097 + doe - 719_468)
    }

    /// Day number back to (year, month, day).
    pub fn civil(self) -> (i32, u32, u32) {
        let z = self.0 + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
        (year, month, day)
    }

    pub fn day_of_month(self) -> u32 {
        self.civil().2
    }

    /// Signed whole days from `earlier` to `self`.
    pub fn days_since(self, earlier: CalendarDay) -> i64 {
        self.0 - earlier.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_day_zero() {
        assert_eq!(CalendarDay::from_civil(1970, 1, 1), CalendarDay(0));
        assert_eq!(CalendarDay(0).civil(), (1970, 1, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(CalendarDay::from_civil(2000, 3, 1).0, 11_017);
        assert_eq!(CalendarDay::from_civil(2026, 2, 8).0, 20_492);
        assert_eq!(CalendarDay::from_civil(1969, 12, 31).0, -1);
    }

    #[test]
    fn round_trips_across_leap_years() {
        for (y, m, d) in [(2024, 2, 29), (2000, 2, 29), (1900, 3, 1), (2026, 12, 24)] {
            assert_eq!(CalendarDay::from_civil(y, m, d).civil(), (y, m, d));
        }
    }

    #[test]
    fn days_since_is_signed() {
        let a = CalendarDay::from_civil(2026, 2, 8);
        let b = CalendarDay::from_civil(2026, 3, 1);
        assert_eq!(b.days_since(a), 21);
        assert_eq!(a.days_since(b), -21);
    }

    #[test]
    fn day_of_month() {
        assert_eq!(CalendarDay::from_civil(2026, 10, 24).day_of_month(), 24);
    }
}
