use anyhow::Result;
use availability_lib::{Remainder, bookings::Reservation};
use itertools::Itertools;
use std::cmp::Ordering;

pub fn overlap_view(overlap: bool, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&overlap)?);
    }
    Ok(if overlap { "overlapping" } else { "disjoint" }.to_string())
}

/// Position of the first overlapping range: -1 if none, or null in JSON
pub fn index_view(index: Option<usize>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&index)?);
    }
    Ok(index.map_or_else(|| "-1".to_string(), |i| i.to_string()))
}

pub fn ordering_view(ordering: Option<Ordering>, json: bool) -> String {
    match ordering {
        None if json => "null".to_string(),
        None => "not comparable".to_string(),
        Some(Ordering::Less) => "-1".to_string(),
        Some(Ordering::Equal) => "0".to_string(),
        Some(Ordering::Greater) => "1".to_string(),
    }
}

/// Either the remainder as a JSON sequence (`[]`, `[null]`, or a list of
/// ranges), or a sentence describing what to do with the availability.
pub fn remainder_view(remainder: &Remainder, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&remainder.to_sequence())?);
    }
    Ok(match remainder {
        Remainder::Invalid => "invalid input, nothing changed".to_string(),
        Remainder::Consumed => "fully consumed, delete the availability".to_string(),
        Remainder::One(_) | Remainder::Two(_, _) => {
            format!("replace with {}", remainder.ranges().iter().join(", "))
        }
    })
}

pub fn reservation_view(
    reservation: &Reservation,
    availability: &[availability_lib::DateRange],
    json: bool,
) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(availability)?);
    }
    Ok(format!(
        "Reserved:     {}
From window:  #{}
Availability: {}",
        reservation.range,
        reservation.window,
        if availability.is_empty() {
            "none".to_string()
        } else {
            availability.iter().join(", ")
        },
    ))
}
