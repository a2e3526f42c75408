//! # Storefront Demo
//!
//! Walks a complete storefront session against seeded data: tiered
//! discounts, the bulk-purchase bonus, a coupon, and order completion.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-state --bin demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p storefront-state --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_state::{
    load_collection, save_collection, seed_coupons, seed_products, CartStore, CatalogStore,
    CouponStore, MemoryStore, NotificationHub, CART_KEY, COUPONS_KEY, PRODUCTS_KEY,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Persistence collaborator: empty here, so every load falls back to
    // the seed dataset.
    let storage = MemoryStore::new();
    let products = load_collection(&storage, PRODUCTS_KEY, &seed_products());
    let coupons = load_collection(&storage, COUPONS_KEY, &seed_coupons());

    let hub = NotificationHub::new();
    let catalog = CatalogStore::with_products(hub.clone(), products);
    let coupon_store = CouponStore::with_coupons(hub.clone(), coupons);
    let cart = CartStore::new(hub.clone());

    info!(products = catalog.list().len(), "catalog ready");

    // Three t-shirts: below the 10-unit tier, so no discount yet
    let shirt = catalog.search("t-shirt")[0].clone();
    for _ in 0..3 {
        cart.add_to_cart(&shirt)?;
    }
    report_totals(&cart, &coupon_store);

    // Ten tote bags: unlocks the bag's own tier AND the cart-wide bulk
    // bonus, which now discounts the shirts too
    let tote = catalog.search("tote")[0].clone();
    cart.add_to_cart(&tote)?;
    cart.set_quantity(&catalog, &tote.id, 10)?;
    report_totals(&cart, &coupon_store);

    // Apply the 10% coupon against the pre-coupon discounted total
    let percent_coupon = coupon_store
        .list()
        .into_iter()
        .find(|c| c.code == "PERCENT10")
        .expect("seeded coupon");
    let pre_coupon_total = cart.totals(None).after_discount();
    coupon_store.apply(percent_coupon, pre_coupon_total)?;
    report_totals(&cart, &coupon_store);

    // Persist, then check out
    save_collection(&storage, CART_KEY, &cart.lines())?;
    let confirmation = cart.complete_order(&coupon_store);
    save_collection(&storage, CART_KEY, &cart.lines())?;

    info!(order_number = %confirmation.order_number, "order placed");
    info!(
        cart_persisted = storage.contains(CART_KEY),
        "empty cart removed from storage"
    );

    for notification in hub.snapshot() {
        info!(severity = ?notification.severity, "{}", notification.message);
    }

    Ok(())
}

fn report_totals(cart: &CartStore, coupons: &CouponStore) {
    let selected = coupons.selected();
    let totals = cart.totals(selected.as_ref());
    info!(
        items = cart.total_item_count(),
        before = totals.before_discount_cents,
        after = totals.after_discount_cents,
        coupon = selected.map(|c| c.code).as_deref().unwrap_or("-"),
        "cart totals"
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for storefront crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
