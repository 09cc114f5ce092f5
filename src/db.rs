pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod override_repo;
pub use override_repo::OverrideRepository;
pub mod discount_repo;
pub use discount_repo::DiscountRepository;
pub mod rate_source;
pub use rate_source::{PgRateSource, RateSource};

#[cfg(test)]
pub mod memory_source;
#[cfg(test)]
pub use memory_source::InMemoryRateSource;
