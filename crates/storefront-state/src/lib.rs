//! # storefront-state: State Stores for the Storefront Engine
//!
//! Owns the mutable record collections and the notification side channel.
//!
//! ## Why Multiple Store Types?
//! Instead of a single `AppState` struct containing everything, each
//! collection gets its own store. This approach:
//!
//! 1. **Better Separation of Concerns**: Each store has a single responsibility
//! 2. **Easier Testing**: Stores can be built and exercised independently
//! 3. **Reduced Contention**: Independent stores don't block each other
//! 4. **Explicit Cross-Store Reads**: A cart mutation that needs live stock
//!    takes the catalog as a parameter - no ambient shared state
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store Architecture                            │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐              │
//! │  │ CatalogStore │  │  CartStore   │  │ CouponStore  │              │
//! │  │              │  │              │  │              │              │
//! │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ Arc<Mutex<   │              │
//! │  │  Vec<Product>│  │  Vec<CartLine│  │  Vec<Coupon> │              │
//! │  │ >>           │  │ >>>          │  │ >> + selected│              │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘              │
//! │         │                 │                 │                       │
//! │         └────────────────┬┴─────────────────┘                       │
//! │                          ▼                                          │
//! │                 ┌─────────────────┐                                 │
//! │                 │ NotificationHub │  success / error / warning      │
//! │                 │ (3s auto-expiry)│  outcome messages               │
//! │                 └─────────────────┘                                 │
//! │                                                                     │
//! │  THREAD SAFETY: each store's mutations are serialized behind its    │
//! │  own Mutex; guard decision + commit happen under one lock hold.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod coupons;
mod notify;
mod persist;
mod seed;

pub use cart::CartStore;
pub use catalog::{CatalogStore, NewProduct, ProductPatch};
pub use coupons::CouponStore;
pub use notify::{NotificationHub, NOTIFICATION_TTL};
pub use persist::{
    load_collection, save_collection, CollectionStore, MemoryStore, CART_KEY, COUPONS_KEY,
    PRODUCTS_KEY,
};
pub use seed::{seed_coupons, seed_products};
