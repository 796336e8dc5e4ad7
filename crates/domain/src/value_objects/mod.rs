//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod field_group;
mod geocode_query;
mod timezone;

pub use coordinates::Coordinates;
pub use field_group::FieldGroup;
pub use geocode_query::{GeocodeQuery, MIN_QUERY_LEN};
pub use timezone::{AUTO_TIMEZONE, Timezone};
