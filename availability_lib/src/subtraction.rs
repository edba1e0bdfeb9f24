use crate::date_ranges::{DateRange, DAY};
use crate::errors::Error;
use crate::overlaps::ranges_overlap;
use crate::settings::{FlushOverhangPolicy, Settings, SupersetPolicy};
use chrono::{DateTime, Utc};
use log::{debug, trace};

/// What remains of an availability range once a reservation was withdrawn
/// from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remainder {
    /// The input was rejected (missing dates, ranges that do not overlap,
    /// withdrawal ending before it starts).  Nothing should change.
    Invalid,

    /// Nothing is left: the availability record must be deleted.
    Consumed,

    /// The availability range is replaced with a single range.
    One(DateRange),

    /// The availability range is replaced with two disjoint ranges, in
    /// chronological order.
    Two(DateRange, DateRange),
}

impl Remainder {
    /// Build from the fragments left after withdrawal.  Missing fragments
    /// (out of the representable dates) are dropped, and so are reversed
    /// ones unless the policy is literal.  If nothing is left, the range
    /// was consumed.
    fn from_fragments<I>(fragments: I, policy: FlushOverhangPolicy) -> Self
    where
        I: IntoIterator<Item = Option<DateRange>>,
    {
        let mut kept = fragments.into_iter().flatten().filter(|r| match policy {
            FlushOverhangPolicy::Literal => true,
            FlushOverhangPolicy::Consume => {
                matches!(r.bounds(), Ok((start, end)) if start <= end)
            }
        });
        match (kept.next(), kept.next()) {
            (None, _) => Remainder::Consumed,
            (Some(r), None) => Remainder::One(r),
            (Some(r1), Some(r2)) => Remainder::Two(r1, r2),
        }
    }

    /// The remainder as a sequence:
    ///    `[]`              invalid input
    ///    `[None]`          fully consumed
    ///    `[Some(r)]`       replaced with one range
    ///    `[Some(r1), Some(r2)]`  replaced with two ranges
    #[must_use]
    pub fn to_sequence(&self) -> Vec<Option<DateRange>> {
        match self {
            Remainder::Invalid => vec![],
            Remainder::Consumed => vec![None],
            Remainder::One(r) => vec![Some(*r)],
            Remainder::Two(r1, r2) => vec![Some(*r1), Some(*r2)],
        }
    }

    /// The ranges that replace the availability range (none if it was
    /// consumed or if the input was invalid).
    #[must_use]
    pub fn ranges(&self) -> Vec<DateRange> {
        self.to_sequence().into_iter().flatten().collect()
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Remainder::Invalid)
    }
}

/// The four bounds of a subtraction, once validated
struct Bounds {
    split_start: DateTime<Utc>,
    split_end: DateTime<Utc>,
    withdraw_start: DateTime<Utc>,
    withdraw_end: DateTime<Utc>,
}

/// How the withdrawn range sits relative to the split range.  Ranges that
/// do not overlap are rejected before classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Geometry {
    //      [-- split --]
    //   [---- withdraw ----]
    Superset,

    //      [-- split --]
    //   [-- withdraw --]
    LeftOverhang,

    //   [-- split --]
    //      [-- withdraw --]
    RightOverhang,

    //   [-- split --]
    //   [-withdraw -]
    ExactMatch,

    //   [---- split ----]
    //   [- withdraw -]
    LeftFlush,

    //   [---- split ----]
    //      [- withdraw -]
    RightFlush,

    //   [------ split ------]
    //      [- withdraw -]
    Interior,
}

impl Bounds {
    fn validate(split: &DateRange, withdraw: &DateRange) -> Result<Self, Error> {
        let (split_start, split_end) = split.bounds()?;
        let (withdraw_start, withdraw_end) = withdraw.bounds()?;
        if !ranges_overlap(split, withdraw) {
            return Err(Error::NoOverlap);
        }
        if withdraw_start > withdraw_end {
            return Err(Error::ReversedRange);
        }
        Ok(Bounds {
            split_start,
            split_end,
            withdraw_start,
            withdraw_end,
        })
    }

    fn geometry(&self, policy: FlushOverhangPolicy) -> Geometry {
        // A withdrawal may end up to one day after the split range and still
        // be considered within it.
        let ends_after_slack = self
            .split_end
            .checked_add_signed(DAY)
            .is_some_and(|limit| self.withdraw_end > limit);

        if self.withdraw_start < self.split_start {
            if self.withdraw_end > self.split_end {
                Geometry::Superset
            } else {
                Geometry::LeftOverhang
            }
        } else if ends_after_slack {
            Geometry::RightOverhang
        } else {
            let same_start = self.withdraw_start == self.split_start;
            let same_end = match policy {
                FlushOverhangPolicy::Literal => {
                    self.withdraw_end == self.split_end
                }
                FlushOverhangPolicy::Consume => {
                    self.withdraw_end >= self.split_end
                }
            };
            match (same_start, same_end) {
                (true, true) => Geometry::ExactMatch,
                (true, false) => Geometry::LeftFlush,
                (false, true) => Geometry::RightFlush,
                (false, false) => Geometry::Interior,
            }
        }
    }

    /// The part of split before the withdrawal
    fn before(&self) -> Option<DateRange> {
        self.withdraw_start
            .checked_sub_signed(DAY)
            .map(|end| DateRange::new(self.split_start, end))
    }

    /// The part of split after the withdrawal
    fn after(&self) -> Option<DateRange> {
        self.withdraw_end
            .checked_add_signed(DAY)
            .map(|start| DateRange::new(start, self.split_end))
    }
}

/// Same as [`subtract_range_with`], with default settings.
#[must_use]
pub fn subtract_range(split: &DateRange, withdraw: &DateRange) -> Remainder {
    subtract_range_with(split, withdraw, &Settings::default())
}

/// Remove the days of `withdraw` from `split`, and return what is left.
///
/// Both ranges include their first and last day, so the remaining
/// fragments stop the day before the withdrawal starts, and restart the day
/// after it ends:
/// ```text
///    split     [1 ......................... 10]
///    withdraw           [4 ....... 6]
///    result    [1 ... 3]             [7 ... 10]
/// ```
///
/// With the default settings, a withdrawal flush with one side of `split`
/// and overhanging the other returns a reversed range rather than
/// [`Remainder::Consumed`]; see [`FlushOverhangPolicy`].
///
/// This never fails: invalid input returns [`Remainder::Invalid`].
#[must_use]
pub fn subtract_range_with(
    split: &DateRange,
    withdraw: &DateRange,
    settings: &Settings,
) -> Remainder {
    let bounds = match Bounds::validate(split, withdraw) {
        Ok(b) => b,
        Err(e) => {
            debug!("cannot withdraw {withdraw} from {split}: {e}");
            return Remainder::Invalid;
        }
    };

    let policy = settings.flush_overhang;
    let geometry = bounds.geometry(policy);
    trace!("withdraw {withdraw} from {split}: {geometry:?}");

    match geometry {
        Geometry::Superset => match settings.superset {
            SupersetPolicy::KeepSplit => Remainder::One(*split),
            SupersetPolicy::Consume => Remainder::Consumed,
        },
        Geometry::ExactMatch => Remainder::Consumed,
        Geometry::LeftOverhang | Geometry::LeftFlush => {
            Remainder::from_fragments([bounds.after()], policy)
        }
        Geometry::RightOverhang | Geometry::RightFlush => {
            Remainder::from_fragments([bounds.before()], policy)
        }
        Geometry::Interior => Remainder::from_fragments(
            [bounds.before(), bounds.after()],
            policy,
        ),
    }
}
