//! Air segment pricing.

use chrono::NaiveDateTime;

use crate::domain::{AirlineRate, Currency, Request, RouteSegment, ServiceType, convert_to_eur};
use crate::routing::{FlightQuery, find_first_available_flight};
use crate::store::{FlightStore, RateStore};

use super::error::PricingError;
use super::SegmentQuote;

/// Price an air segment starting no earlier than `start`.
///
/// Picks the earliest scheduled flight on the segment's airline whose
/// departure is at or after `start` and, when the request carries a
/// delivery deadline, whose arrival is at or before it. The price sums the
/// airline's weight charge, fuel surcharge and base price with the export
/// fees at the origin airport and import fees at the destination airport,
/// each converted to EUR in its own currency.
pub fn price_air_segment<S>(
    store: &S,
    segment: &RouteSegment,
    request: &Request,
    start: NaiveDateTime,
) -> Result<SegmentQuote, PricingError>
where
    S: FlightStore + RateStore,
{
    let origin = segment
        .origin_airport
        .ok_or(PricingError::MissingRequiredField("origin airport"))?;
    let destination = segment
        .destination_airport
        .ok_or(PricingError::MissingRequiredField("destination airport"))?;
    let airline = segment
        .airline
        .as_deref()
        .ok_or(PricingError::MissingRequiredField("airline"))?;
    let weight_kg = request
        .weight_kg
        .ok_or(PricingError::MissingRequiredField("cargo weight"))?;

    let (Some(origin_cc), Some(destination_cc)) = (
        segment.origin_country_code.as_deref(),
        segment.destination_country_code.as_deref(),
    ) else {
        return Err(PricingError::MissingCountryCode);
    };

    let query = FlightQuery {
        origin: &origin,
        destination: &destination,
        airline,
        start_time: Some(start),
        delivery_deadline: request.delivery_date,
    };
    let flight = find_first_available_flight(store, &query)?.ok_or_else(|| {
        PricingError::NoFlightFound {
            origin,
            destination,
            airline: airline.to_owned(),
            start,
            deadline: request.delivery_date,
        }
    })?;

    let export_rate = store
        .airport_rate(&origin, airline, ServiceType::Export)?
        .ok_or_else(|| PricingError::AirportRateNotFound {
            station: origin,
            airline: airline.to_owned(),
            service_type: ServiceType::Export,
        })?;
    let import_rate = store
        .airport_rate(&destination, airline, ServiceType::Import)?
        .ok_or_else(|| PricingError::AirportRateNotFound {
            station: destination,
            airline: airline.to_owned(),
            service_type: ServiceType::Import,
        })?;
    let airline_rate = store
        .airline_rate(&origin, origin_cc, destination_cc)?
        .ok_or_else(|| PricingError::AirlineRateNotFound {
            station: origin,
            origin_country: origin_cc.to_owned(),
            destination_country: destination_cc.to_owned(),
        })?;

    let carriage = weight_charge(&airline_rate, weight_kg)
        + airline_rate.fuel_charge_per_kg * weight_kg
        + airline_rate.base_price;

    let price_eur = convert_to_eur(carriage, airline_rate.currency)
        + convert_to_eur(export_rate.total_fee(), export_rate.currency)
        + convert_to_eur(import_rate.total_fee(), import_rate.currency);

    let duration_hours = flight.duration_hours();

    let mut priced = segment.clone();
    priced.flight_number = Some(flight.flight_number.clone());
    priced.scheduled_flight_id = Some(flight.id);
    priced.price_eur = Some(price_eur);
    priced.currency = Some(Currency::Eur);
    priced.duration_hours = Some(duration_hours);
    priced.departure_time = Some(flight.departure_at);
    priced.arrival_time = Some(flight.arrival_at);

    Ok(SegmentQuote {
        segment: priced,
        price_eur,
        duration_hours,
        arrival: flight.arrival_at,
    })
}

/// The tiered weight charge: the per-kg price of the smallest configured
/// breakpoint at or above the cargo weight, times the weight. Cargo above
/// every breakpoint has no weight charge.
fn weight_charge(rate: &AirlineRate, weight_kg: f64) -> f64 {
    rate.tiers()
        .into_iter()
        .find_map(|(breakpoint, per_kg)| {
            (weight_kg <= breakpoint).then_some(per_kg).flatten()
        })
        .map_or(0.0, |per_kg| per_kg * weight_kg)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Currency, IataCode};
    use proptest::prelude::*;

    fn fully_configured_rate(per_kg: [f64; 6]) -> AirlineRate {
        AirlineRate {
            station: IataCode::parse("FRA").unwrap(),
            origin_country_code: "DE".into(),
            destination_country_code: "MX".into(),
            airline: "LH".into(),
            fuel_charge_per_kg: 0.0,
            base_price: 0.0,
            price_under_45kg: Some(per_kg[0]),
            price_under_100kg: Some(per_kg[1]),
            price_under_250kg: Some(per_kg[2]),
            price_under_300kg: Some(per_kg[3]),
            price_under_500kg: Some(per_kg[4]),
            price_under_1000kg: Some(per_kg[5]),
            over_1000kg: None,
            currency: Currency::Eur,
        }
    }

    proptest! {
        /// Property: with every tier configured, the charge uses the per-kg
        /// price of the smallest breakpoint at or above the weight, and
        /// anything above the last breakpoint charges nothing.
        #[test]
        fn charge_matches_selected_tier(
            weight in 0.1f64..1500.0,
            per_kg in proptest::array::uniform6(0.5f64..10.0),
        ) {
            let rate = fully_configured_rate(per_kg);
            let charge = weight_charge(&rate, weight);

            let expected = rate
                .tiers()
                .iter()
                .find(|(breakpoint, _)| weight <= *breakpoint)
                .map_or(0.0, |(_, p)| p.unwrap() * weight);

            prop_assert_eq!(charge, expected);
            if weight > 1000.0 {
                prop_assert_eq!(charge, 0.0);
            }
        }
    }
}
