//! Domain types for the SDFM storefront.

mod cart;
mod id;
mod order;
mod product;
mod wishlist;

pub use cart::{CartLine, NewCartItem, StockDelta};
pub use id::ProductId;
pub use order::{Order, OrderForm};
pub use product::Product;
pub use wishlist::WishlistItem;
