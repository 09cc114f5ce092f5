pub mod discount_service;
pub use discount_service::{DiscountChanges, DiscountService};
pub mod pricing_service;
pub use pricing_service::PricingService;
pub mod rate_resolver;
pub mod room_service;
pub use room_service::RoomService;
