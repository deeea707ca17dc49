//! Route discovery: airport proximity, flight availability, candidate
//! enumeration, and route assembly.

mod airports;
mod assembler;
mod builder;
mod error;
mod flights;

pub use airports::find_closest_airports;
pub use assembler::build_available_routes;
pub use builder::{AIRPORTS_PER_ENDPOINT, FlightOption, find_flight_options};
pub use error::RoutingError;
pub use flights::{FlightQuery, FlightSearchError, find_first_available_flight};
