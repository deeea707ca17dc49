//! Trucking segment pricing.

use chrono::NaiveDateTime;

use crate::distance::{DistanceError, DistanceProvider};
use crate::domain::{Currency, RouteSegment, convert_to_eur, country_name};
use crate::store::RateStore;

use super::error::PricingError;
use super::{SegmentQuote, hours_after};

/// Assumed average truck speed for duration estimates.
const AVERAGE_TRUCK_SPEED_KMH: f64 = 70.0;

/// Price a trucking segment starting at `start`.
///
/// Road distance comes from the injected provider; the rate row is matched
/// by origin country name only, taking the lowest base price when several
/// rows match. The destination column on trucking rates is deliberately
/// not consulted.
pub async fn price_trucking_segment<S, D>(
    store: &S,
    distance: &D,
    segment: &RouteSegment,
    start: NaiveDateTime,
) -> Result<SegmentQuote, PricingError>
where
    S: RateStore,
    D: DistanceProvider,
{
    let (Some(origin), Some(destination)) =
        (segment.origin_coordinates, segment.destination_coordinates)
    else {
        return Err(PricingError::Distance(DistanceError::MissingCoordinates));
    };

    let distance_km = distance.distance_km(origin, destination).await?;

    let origin_cc = segment
        .origin_country_code
        .as_deref()
        .ok_or(PricingError::MissingCountryCode)?;
    let origin_country = country_name(origin_cc);

    let rate = store
        .trucking_rates_for_origin(&origin_country)?
        .into_iter()
        .min_by(|a, b| a.base_price.total_cmp(&b.base_price))
        .ok_or_else(|| PricingError::TruckingRateNotFound(origin_country.clone()))?;

    let total = rate.base_price + distance_km * rate.km_price;
    let price_eur = convert_to_eur(total, rate.currency);

    let duration_hours = distance_km / AVERAGE_TRUCK_SPEED_KMH;
    let arrival = hours_after(start, duration_hours);

    let mut priced = segment.clone();
    priced.price_eur = Some(price_eur);
    priced.currency = Some(Currency::Eur);
    priced.distance_km = Some(distance_km);
    priced.duration_hours = Some(duration_hours);
    priced.departure_time = Some(start);
    priced.arrival_time = Some(arrival);

    Ok(SegmentQuote {
        segment: priced,
        price_eur,
        duration_hours,
        arrival,
    })
}
