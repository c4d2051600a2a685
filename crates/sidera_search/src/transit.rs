//! Sign-ingress and station scan.
//!
//! Compares a baseline snapshot against each following day inside the
//! horizon. Per body, the first day its sign differs from the baseline
//! yields a [`SignIngress`] and the first day its retrograde flag flips
//! yields a [`StationEvent`]; the two are recorded independently. The
//! event date is the first differing day at day granularity, with no
//! sub-day refinement.

use chrono::{Days, NaiveDate};

use sidera_core::{ALL_BODIES, Almanac, Body, Ephemeris};

use crate::error::SearchError;
use crate::transit_types::{
    BodyTransit, ScanConfig, SignIngress, Station, StationEvent, TransitSet,
};

/// Find each body's next sign ingress and station within the horizon.
///
/// Stops early once every body has at least one recorded change. Bodies
/// with no change inside the horizon end up with an empty entry; that is
/// an ordinary outcome, not an error.
pub fn transits<E: Ephemeris>(
    almanac: &Almanac<E>,
    date: NaiveDate,
    config: &ScanConfig,
) -> Result<TransitSet, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let baseline = almanac.snapshot(date)?;
    let mut entries = [BodyTransit::default(); Body::COUNT];

    for day in 1..=config.max_days {
        if entries.iter().all(|entry| !entry.is_empty()) {
            break;
        }
        let future_date = future_day(date, day)?;
        let future = almanac.snapshot(future_date)?;

        for body in ALL_BODIES {
            let now = baseline.get(body);
            let then = future.get(body);
            let entry = &mut entries[body.index()];

            if entry.ingress.is_none() && then.sign != now.sign {
                entry.ingress = Some(SignIngress {
                    date: future_date,
                    sign: then.sign,
                });
            }
            if entry.station.is_none() && then.retrograde != now.retrograde {
                let station = if then.retrograde {
                    Station::Retrograde
                } else {
                    Station::Direct
                };
                entry.station = Some(StationEvent {
                    date: future_date,
                    station,
                });
            }
        }
    }

    Ok(TransitSet::new(entries))
}

/// `date` advanced by `day` calendar days.
pub(crate) fn future_day(date: NaiveDate, day: u32) -> Result<NaiveDate, SearchError> {
    date.checked_add_days(Days::new(u64::from(day))).ok_or(
        SearchError::DateOutOfRange("scan horizon exceeds the supported calendar"),
    )
}
