//! Bookable time slots for one clinic day.

use chrono::{NaiveDate, Utc};

use crate::models::BookingError;

/// First bookable hour of the day.
pub const OPENING_HOUR: u32 = 8;
/// Last bookable hour of the day, inclusive.
pub const CLOSING_HOUR: u32 = 17;
/// Lunch break, never bookable.
pub const LUNCH_HOUR: u32 = 13;

/// Ordered bookable time labels for one clinic day: "08:00" through
/// "17:00", skipping the lunch hour.
pub fn daily_slots() -> Vec<String> {
    (OPENING_HOUR..=CLOSING_HOUR)
        .filter(|hour| *hour != LUNCH_HOUR)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
}

/// A submitted time is bookable iff it is one of the generated slots:
/// on the hour, within opening hours, outside lunch.
pub fn validate_booking_time(time: &str) -> Result<(), BookingError> {
    let (hour, minute) = parse_time(time)
        .ok_or_else(|| BookingError::InvalidTime(format!("'{}' is not a HH:MM time", time)))?;

    if minute != 0 {
        return Err(BookingError::InvalidTime(format!(
            "'{}' is not on the hour",
            time
        )));
    }
    if hour < OPENING_HOUR || hour > CLOSING_HOUR {
        return Err(BookingError::InvalidTime(format!(
            "hour {} is outside opening hours ({}:00 to {}:00)",
            hour, OPENING_HOUR, CLOSING_HOUR
        )));
    }
    if hour == LUNCH_HOUR {
        return Err(BookingError::InvalidTime(format!(
            "the clinic is closed for lunch at {}:00",
            LUNCH_HOUR
        )));
    }

    Ok(())
}

/// The booking form's date rule: ISO format, today or later.
pub fn validate_booking_date(date: &str) -> Result<(), BookingError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", date)))?;

    if parsed < Utc::now().date_naive() {
        return Err(BookingError::InvalidDate(format!("{} is in the past", date)));
    }

    Ok(())
}

fn parse_time(time: &str) -> Option<(u32, u32)> {
    let (hour, minute) = time.split_once(':')?;
    if hour.len() != 2 || minute.len() != 2 {
        return None;
    }
    Some((hour.parse().ok()?, minute.parse().ok()?))
}
