// order_admin/src/format.rs

//! Display helpers for timestamps, addresses and prices.

use crate::labels::CURRENCY_SUFFIX;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;

/// Placeholder shown for missing or unparseable timestamps.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonical display pattern, `HH:MM:SS DD-MM-YYYY`.
pub const DISPLAY_PATTERN: &str = "%H:%M:%S %d-%m-%Y";

pub const ADDRESS_DISPLAY_CHARS: usize = 30;

// Offset-less date-times are read as wall-clock time in the display zone.
const NAIVE_DATE_TIME_PATTERNS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M",
];

/// Formats an order timestamp for display in local time.
///
/// The order service sometimes sends `orderAt` pre-formatted as
/// `HH:MM:SS DD-MM-YYYY` and sometimes as a raw timestamp; both end up in
/// the display pattern. Anything else becomes [`NOT_AVAILABLE`].
pub fn format_order_at(raw: Option<&str>) -> String {
  format_order_at_in(raw, &Local)
}

/// Same as [`format_order_at`], rendering raw timestamps in `tz`.
pub fn format_order_at_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  let raw = match raw.map(str::trim) {
    Some(s) if !s.is_empty() => s,
    _ => return NOT_AVAILABLE.to_string(),
  };

  if is_display_pattern(raw) {
    return raw.to_string();
  }

  match parse_timestamp(raw, tz) {
    Some(ts) => ts.format(DISPLAY_PATTERN).to_string(),
    None => NOT_AVAILABLE.to_string(),
  }
}

/// Shape check only (`dd:dd:dd dd-dd-dddd`); field ranges are not validated.
fn is_display_pattern(s: &str) -> bool {
  const SHAPE: &[u8] = b"00:00:00 00-00-0000";
  let bytes = s.as_bytes();
  bytes.len() == SHAPE.len()
    && bytes.iter().zip(SHAPE).all(|(b, shape)| match shape {
      b'0' => b.is_ascii_digit(),
      other => b == other,
    })
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
  if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
    return Some(ts.with_timezone(tz));
  }
  if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
    return Some(ts.with_timezone(tz));
  }
  for pattern in NAIVE_DATE_TIME_PATTERNS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
      // `earliest` resolves DST overlaps; gaps yield None.
      return tz.from_local_datetime(&naive).earliest();
    }
  }
  // A bare date is midnight UTC.
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Shortens long addresses to their first 30 characters followed by `...`.
pub fn truncate_address(address: &str) -> String {
  match address.char_indices().nth(ADDRESS_DISPLAY_CHARS) {
    Some((cut, _)) => format!("{}...", &address[..cut]),
    None => address.to_string(),
  }
}

/// Formats an amount the way vi-VN locales do (`1.234.567,5`), with at most
/// three fraction digits, followed by the currency suffix.
pub fn format_price(amount: Decimal) -> String {
  format!("{} {}", format_vi_number(amount), CURRENCY_SUFFIX)
}

pub fn format_vi_number(amount: Decimal) -> String {
  let rounded = amount
    .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
    .normalize();
  let plain = rounded.abs().to_string();
  let (int_part, frac_part) = match plain.split_once('.') {
    Some((i, f)) => (i, Some(f)),
    None => (plain.as_str(), None),
  };

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, digit) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(digit);
  }

  let mut out = String::new();
  if rounded.is_sign_negative() && !rounded.is_zero() {
    out.push('-');
  }
  out.push_str(&grouped);
  if let Some(frac) = frac_part {
    out.push(',');
    out.push_str(frac);
  }
  out
}
