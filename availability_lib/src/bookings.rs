use crate::date_ranges::DateRange;
use crate::errors::Error;
use crate::overlaps::find_overlapping_range;
use crate::settings::Settings;
use crate::subtraction::{subtract_range_with, Remainder};
use itertools::Itertools;
use log::info;

/// The availability windows of one rentable item
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Availability {
    ranges: Vec<DateRange>,
}

impl Availability {
    #[must_use]
    pub fn new(ranges: Vec<DateRange>) -> Self {
        Availability { ranges }
    }

    #[must_use]
    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    #[must_use]
    pub fn into_ranges(self) -> Vec<DateRange> {
        self.ranges
    }

    /// Update the window at `index` with the result of a subtraction:
    ///    Consumed  => the window is deleted
    ///    One, Two  => the window is replaced with the remaining range(s)
    ///    Invalid   => nothing changes
    /// Returns whether the availability was modified.
    pub fn apply(&mut self, index: usize, remainder: Remainder) -> bool {
        let Some(slot) = self.ranges.get_mut(index) else {
            return false;
        };
        match remainder {
            Remainder::Invalid => return false,
            Remainder::Consumed => {
                self.ranges.remove(index);
            }
            Remainder::One(r) => *slot = r,
            Remainder::Two(r1, r2) => {
                *slot = r1;
                self.ranges.insert(index + 1, r2);
            }
        }
        true
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ranges.iter().join(", "))
    }
}

/// A reservation that was accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reservation {
    /// The requested range
    pub range: DateRange,

    /// Position of the availability window it was taken from, before the
    /// window was updated.
    pub window: usize,

    /// What was left of that window
    pub remainder: Remainder,
}

/// Accepts reservations for a single item, keeping its availability in
/// sync.
pub struct Booking {
    availability: Availability,
    reservations: Vec<DateRange>,
    settings: Settings,
}

impl Booking {
    #[must_use]
    pub fn new(
        availability: Availability,
        reservations: Vec<DateRange>,
        settings: Settings,
    ) -> Self {
        Booking {
            availability,
            reservations,
            settings,
        }
    }

    #[must_use]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    #[must_use]
    pub fn reservations(&self) -> &[DateRange] {
        &self.reservations
    }

    /// Reserve the given range.
    /// The request is rejected if it overlaps an existing reservation, or
    /// if no availability window overlaps it.  Otherwise it is withdrawn
    /// from the first overlapping window.
    pub fn reserve(&mut self, request: DateRange) -> Result<Reservation, Error> {
        let (start, end) = request.bounds()?;
        if start > end {
            return Err(Error::ReversedRange);
        }
        if let Some(index) = find_overlapping_range(&self.reservations, &request)
        {
            return Err(Error::Conflict(index));
        }

        let window = find_overlapping_range(self.availability.ranges(), &request)
            .ok_or(Error::Unavailable)?;
        let split = self
            .availability
            .ranges()
            .get(window)
            .ok_or(Error::Unavailable)?;
        let remainder = subtract_range_with(split, &request, &self.settings);
        if remainder.is_invalid() {
            return Err(Error::Unavailable);
        }

        info!("reserved {request} from window #{window} {split}");
        self.availability.apply(window, remainder);
        self.reservations.push(request);
        Ok(Reservation {
            range: request,
            window,
            remainder,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::settings::SupersetPolicy;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    fn availability() -> Availability {
        Availability::new(vec![
            range("2024-01-01", "2024-01-10"),
            range("2024-02-01", "2024-02-10"),
        ])
    }

    #[test]
    fn test_apply() {
        let mut a = availability();
        assert!(!a.apply(0, Remainder::Invalid));
        assert!(!a.apply(2, Remainder::Consumed));
        assert_eq!(a, availability());

        assert!(a.apply(
            0,
            Remainder::Two(
                range("2024-01-01", "2024-01-03"),
                range("2024-01-07", "2024-01-10"),
            )
        ));
        assert_eq!(
            a.ranges(),
            &[
                range("2024-01-01", "2024-01-03"),
                range("2024-01-07", "2024-01-10"),
                range("2024-02-01", "2024-02-10"),
            ]
        );

        assert!(a.apply(2, Remainder::One(range("2024-02-05", "2024-02-10"))));
        assert!(a.apply(1, Remainder::Consumed));
        assert_eq!(
            a.to_string(),
            "[2024-01-01, 2024-01-03], [2024-02-05, 2024-02-10]"
        );
    }

    #[test]
    fn test_reserve() {
        let mut booking = Booking::new(availability(), vec![], Settings::default());

        let r = booking.reserve(range("2024-01-04", "2024-01-06")).unwrap();
        assert_eq!(r.window, 0);
        assert!(matches!(r.remainder, Remainder::Two(_, _)));
        assert_eq!(booking.availability().ranges().len(), 3);

        // Overlaps the reservation we just made
        assert_eq!(
            booking.reserve(range("2024-01-06", "2024-01-07")),
            Err(Error::Conflict(0))
        );

        let r = booking.reserve(range("2024-02-01", "2024-02-10")).unwrap();
        assert_eq!(r.window, 2);
        assert_eq!(r.remainder, Remainder::Consumed);
        assert_eq!(
            booking.availability().ranges(),
            &[
                range("2024-01-01", "2024-01-03"),
                range("2024-01-07", "2024-01-10"),
            ]
        );
        assert_eq!(booking.reservations().len(), 2);
    }

    #[test]
    fn test_reserve_rejected() {
        let mut booking = Booking::new(availability(), vec![], Settings::default());
        assert_eq!(
            booking.reserve(range("2024-03-01", "2024-03-02")),
            Err(Error::Unavailable)
        );
        assert_eq!(
            booking.reserve(range("2024-01-05", "2024-01-02")),
            Err(Error::ReversedRange)
        );
        assert_eq!(
            booking.reserve(DateRange::from_fields(None, Some("2024-01-02"))),
            Err(Error::MissingDate("startDate"))
        );
        assert_eq!(booking.availability(), &availability());
        assert!(booking.reservations().is_empty());
    }

    #[test]
    fn test_reserve_superset() {
        let request = range("2023-12-20", "2024-01-20");

        let mut booking = Booking::new(availability(), vec![], Settings::default());
        let r = booking.reserve(request).unwrap();
        assert_eq!(r.remainder, Remainder::One(range("2024-01-01", "2024-01-10")));
        assert_eq!(booking.availability(), &availability());

        let mut booking = Booking::new(
            availability(),
            vec![],
            Settings {
                superset: SupersetPolicy::Consume,
                ..Settings::default()
            },
        );
        let r = booking.reserve(request).unwrap();
        assert_eq!(r.remainder, Remainder::Consumed);
        assert_eq!(booking.availability().ranges().len(), 1);
    }
}
