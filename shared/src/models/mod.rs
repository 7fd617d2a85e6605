//! Data models for the storefront backend contract

pub mod attribute;
pub mod order;
pub mod vendor;

pub use attribute::{AttributeModel, AttributeTable};
pub use order::{Order, OrderItem};
pub use vendor::{ShopTiming, VendorScheduleConfig};
