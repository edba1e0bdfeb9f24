/// What to do when a withdrawal starts before and ends after the range it
/// is removed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupersetPolicy {
    // The availability range is returned unchanged, as if nothing had been
    // withdrawn.
    #[default]
    KeepSplit,

    // The availability range is fully consumed, like an exact match.
    Consume,
}

/// What to do with a fragment that would end before it starts.  This
/// happens when a withdrawal overhangs one side of the range and is flush
/// with (or within a day past) the other side, or with instants that are
/// not at midnight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlushOverhangPolicy {
    // Fragments are returned as computed, even if reversed.  A withdrawal
    // ending within the day after the range is not aligned on its end.
    #[default]
    Literal,

    // Reversed fragments contain no day and are dropped; the range is
    // consumed when nothing is left.  A withdrawal ending within the day
    // after the range is treated as ending with it.
    Consume,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    pub superset: SupersetPolicy,
    pub flush_overhang: FlushOverhangPolicy,
}
