use serde::Deserialize;

/// The id stays textual so that a non-numeric segment is reported as a
/// missing ride instead of a routing error.
#[derive(Debug, Deserialize)]
pub struct GetRideDto {
  pub id: String,
}

impl GetRideDto {
  /// Integral numbers are accepted in any numeric spelling, so `1.0` and
  /// `1e0` address ride 1, like a numeric comparison against the id column.
  pub fn ride_id(&self) -> Option<i64> {
    let id = self.id.trim();
    if let Ok(ride_id) = id.parse::<i64>() {
      return Some(ride_id);
    }
    let number = id.parse::<f64>().ok().filter(|number| {
      number.is_finite()
        && number.fract() == 0.0
        && *number >= i64::MIN as f64
        && *number < i64::MAX as f64
    })?;
    Some(number as i64)
  }
}
