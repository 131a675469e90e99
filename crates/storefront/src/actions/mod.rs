//! Action creators.
//!
//! Each creator dispatches `*Request`, performs at most one backend call,
//! then dispatches `*Success` (plus any follow-up actions) or `*Fail` with
//! the extracted error message. Failures live in state; creators return
//! nothing unless the flow has no failure action of its own.
//!
//! Authenticated calls read the token from the store at call time. Without a
//! session the request goes out with no `Authorization` header and the
//! backend's rejection is reported like any other failure.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{add_to_cart, remove_from_cart, save_payment_method, save_shipping_address};
pub use order::{create_order, deliver_order, get_order_details, list_my_orders, pay_order};
pub use product::{create_product_review, list_product_details, list_products};
pub use user::{get_user_details, login, logout, register, update_user_profile};
