//! Ephemeris provider seam and single-body position queries.

use chrono::NaiveDate;

use crate::body::Body;
use crate::error::EphemerisError;

/// Raw ecliptic state of one body on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub lon_deg: f64,
    /// Longitude speed in degrees per day. Negative while retrograde.
    pub speed_deg_per_day: f64,
}

impl RawPosition {
    /// The point 180 degrees opposite on the ecliptic, same speed.
    ///
    /// This is the South Node relative to the North Node.
    pub fn antipode(self) -> Self {
        Self {
            lon_deg: (self.lon_deg + 180.0).rem_euclid(360.0),
            speed_deg_per_day: self.speed_deg_per_day,
        }
    }
}

/// External ephemeris source.
///
/// Implementations expose sidereal (Lahiri ayanamsha) ecliptic longitudes
/// and daily speeds at UTC-midnight day granularity. The sidereal zodiac
/// is part of the contract: it shifts every sign boundary relative to the
/// tropical zodiac, so a tropical provider would silently change all
/// reported signs. Providers are only ever asked for directly queryable
/// bodies; derived points are handled by [`raw_position`].
pub trait Ephemeris: Send + Sync {
    /// Longitude and speed for one body on one day.
    fn longitude_and_speed(
        &self,
        date: NaiveDate,
        body: Body,
    ) -> Result<RawPosition, EphemerisError>;
}

/// Raw position for any tracked body, deriving computed points.
///
/// The South Node comes from the North Node's position (one provider
/// query, then [`RawPosition::antipode`]); every other body is a direct
/// provider query. Failures propagate unchanged; the data source being
/// unable to resolve a date is a setup problem, not a transient fault,
/// so nothing here retries.
pub fn raw_position<E: Ephemeris>(
    provider: &E,
    date: NaiveDate,
    body: Body,
) -> Result<RawPosition, EphemerisError> {
    match body {
        Body::SouthNode => Ok(provider
            .longitude_and_speed(date, Body::NorthNode)?
            .antipode()),
        _ => provider.longitude_and_speed(date, body),
    }
}
