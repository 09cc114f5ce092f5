pub mod discount;
pub use discount::{Discount, DiscountRule, DiscountType, RoomDiscountAssignment};
pub mod rate;
pub use rate::DailyRate;
pub mod room;
pub use room::{RateOverride, Room};
