//! # Catalog Store
//!
//! Owns the product collection: create/update/delete/list plus the
//! case-insensitive search used by the storefront's (externally
//! debounced) search box.
//!
//! Product ids are UUID v4, generated at creation and immutable. Deleting
//! a product does not touch existing cart lines - lines hold snapshots -
//! but stock guards always re-read the live entry from here.

use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

use storefront_core::validation::{
    validate_discount_tiers, validate_price_cents, validate_product_name, validate_stock,
};
use storefront_core::{DiscountTier, EngineError, EngineResult, Product};

use crate::notify::NotificationHub;

/// Input for creating a product; the id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i64,
    pub discounts: Vec<DiscountTier>,
}

/// A partial update to an existing product. `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub discounts: Option<Vec<DiscountTier>>,
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Mutex<Vec<Product>>>,
    hub: NotificationHub,
}

impl CatalogStore {
    /// Creates an empty catalog reporting into `hub`.
    pub fn new(hub: NotificationHub) -> Self {
        CatalogStore {
            products: Arc::new(Mutex::new(Vec::new())),
            hub,
        }
    }

    /// Creates a catalog pre-populated with `products`.
    pub fn with_products(hub: NotificationHub, products: Vec<Product>) -> Self {
        CatalogStore {
            products: Arc::new(Mutex::new(products)),
            hub,
        }
    }

    /// Validates and adds a new product, generating its id.
    pub fn add(&self, new: NewProduct) -> EngineResult<Product> {
        validate_product_name(&new.name)?;
        validate_price_cents(new.price_cents)?;
        validate_stock(new.stock)?;
        validate_discount_tiers(&new.discounts)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            description: new.description,
            price_cents: new.price_cents,
            stock: new.stock,
            discounts: new.discounts,
        };

        debug!(id = %product.id, name = %product.name, "product added");

        self.products
            .lock()
            .expect("catalog mutex poisoned")
            .push(product.clone());

        self.hub.success("Product added.");
        Ok(product)
    }

    /// Applies a validated patch to an existing product.
    ///
    /// The id is immutable; everything else may change.
    pub fn update(&self, product_id: &str, patch: ProductPatch) -> EngineResult<Product> {
        if let Some(name) = &patch.name {
            validate_product_name(name)?;
        }
        if let Some(price_cents) = patch.price_cents {
            validate_price_cents(price_cents)?;
        }
        if let Some(stock) = patch.stock {
            validate_stock(stock)?;
        }
        if let Some(discounts) = &patch.discounts {
            validate_discount_tiers(discounts)?;
        }

        let mut products = self.products.lock().expect("catalog mutex poisoned");
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| EngineError::ProductNotFound(product_id.to_string()))?;

        if let Some(name) = patch.name {
            product.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(discounts) = patch.discounts {
            product.discounts = discounts;
        }

        let updated = product.clone();
        drop(products);

        debug!(id = %product_id, "product updated");
        self.hub.success("Product updated.");
        Ok(updated)
    }

    /// Deletes a product from the catalog.
    ///
    /// Existing cart lines keep their snapshot; they are not removed.
    pub fn delete(&self, product_id: &str) -> EngineResult<()> {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        let before = products.len();
        products.retain(|p| p.id != product_id);

        if products.len() == before {
            return Err(EngineError::ProductNotFound(product_id.to_string()));
        }
        drop(products);

        debug!(id = %product_id, "product deleted");
        self.hub.success("Product deleted.");
        Ok(())
    }

    /// Looks up the live catalog entry for a product id.
    pub fn get(&self, product_id: &str) -> Option<Product> {
        self.products
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }

    /// Returns all products.
    pub fn list(&self) -> Vec<Product> {
        self.products
            .lock()
            .expect("catalog mutex poisoned")
            .clone()
    }

    /// Case-insensitive search over product name and description.
    ///
    /// An empty (or all-whitespace) query matches everything. Debouncing
    /// the query is the UI's concern, not the store's.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim().to_lowercase();
        let products = self.products.lock().expect("catalog mutex poisoned");

        if query.is_empty() {
            return products.clone();
        }

        products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Replaces the whole collection (persistence load path).
    pub fn replace(&self, products: Vec<Product>) {
        *self.products.lock().expect("catalog mutex poisoned") = products;
    }
}
