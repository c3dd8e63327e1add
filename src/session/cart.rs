//! Simulated order cart.
//!
//! A toy shopping cart backed by a fixed menu, with a simulated checkout
//! that clears the cart. No real payment integration; the cart never
//! interacts with the matchers.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BanterError, Result};

/// One orderable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name, unique within the menu.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// On-disk menu document shape: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
struct MenuDocument {
    items: Vec<MenuItem>,
}

/// A fixed menu of orderable items, in load order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Create a menu from a list of items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Menu { items }
    }

    /// Load a menu from a JSON document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let document: MenuDocument = serde_json::from_str(&content)?;
        Ok(Menu {
            items: document.items,
        })
    }

    /// Get the menu items in load order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Price of an item by name, if present.
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.find(name).map(|item| item.price)
    }
}

/// Simulated payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cash,
    /// Credit or debit card.
    Card,
    /// E-wallet.
    EWallet,
}

impl FromStr for PaymentMethod {
    type Err = BanterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "ewallet" | "e-wallet" => Ok(PaymentMethod::EWallet),
            other => Err(BanterError::invalid_operation(format!(
                "unknown payment method `{other}`"
            ))),
        }
    }
}

/// Receipt produced by a successful simulated checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    /// Total charged.
    pub total: f64,
    /// Payment method used.
    pub method: PaymentMethod,
}

/// A session-scoped order cart.
///
/// Items are recorded in add order. Checkout is simulated: it produces a
/// receipt and clears the cart.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add a menu item to the cart by name.
    ///
    /// Fails if the name is not on the menu.
    pub fn add(&mut self, menu: &Menu, name: &str) -> Result<()> {
        let Some(item) = menu.find(name) else {
            return Err(BanterError::invalid_operation(format!(
                "`{name}` is not on the menu"
            )));
        };
        self.items.push(item.name.clone());
        Ok(())
    }

    /// Item names in add order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total price of the cart against the given menu.
    pub fn total(&self, menu: &Menu) -> f64 {
        self.items
            .iter()
            .filter_map(|name| menu.price_of(name))
            .sum()
    }

    /// Simulated checkout: produce a receipt and clear the cart.
    ///
    /// Fails on an empty cart.
    pub fn checkout(&mut self, menu: &Menu, method: PaymentMethod) -> Result<Receipt> {
        if self.items.is_empty() {
            return Err(BanterError::invalid_operation("cart is empty"));
        }

        let receipt = Receipt {
            total: self.total(menu),
            method,
        };
        self.items.clear();
        Ok(receipt)
    }
}
