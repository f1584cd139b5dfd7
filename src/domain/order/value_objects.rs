use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Standard orders at or above this total ship for free
pub const STANDARD_FREE_SHIPPING_THRESHOLD: f64 = 100.0;
pub const STANDARD_SHIPPING_FEE: f64 = 5.0;
pub const EXPRESS_SHIPPING_FEE: f64 = 15.0;
pub const INTERNATIONAL_BASE_FEE: f64 = 25.0;
/// Share of the order total added to the international base fee
pub const INTERNATIONAL_FEE_RATE: f64 = 0.10;

pub const STANDARD_DELIVERY_DAYS: u32 = 7;
pub const EXPRESS_DELIVERY_DAYS: u32 = 2;
pub const INTERNATIONAL_DELIVERY_DAYS: u32 = 14;

/// Order classification - selects the shipping and delivery rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderClass {
    Standard,
    Express,
    International,
}

impl OrderClass {
    pub const ALL: [OrderClass; 3] = [
        OrderClass::Standard,
        OrderClass::Express,
        OrderClass::International,
    ];

    /// Shipping cost for an order of this class with the given total
    pub fn shipping_cost(&self, amount: f64) -> f64 {
        match self {
            OrderClass::Standard => {
                if amount < STANDARD_FREE_SHIPPING_THRESHOLD {
                    STANDARD_SHIPPING_FEE
                } else {
                    0.0
                }
            }
            OrderClass::Express => EXPRESS_SHIPPING_FEE,
            OrderClass::International => INTERNATIONAL_BASE_FEE + INTERNATIONAL_FEE_RATE * amount,
        }
    }

    pub fn delivery_days(&self) -> u32 {
        match self {
            OrderClass::Standard => STANDARD_DELIVERY_DAYS,
            OrderClass::Express => EXPRESS_DELIVERY_DAYS,
            OrderClass::International => INTERNATIONAL_DELIVERY_DAYS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderClass::Standard => "standard",
            OrderClass::Express => "express",
            OrderClass::International => "international",
        }
    }

    /// Type-style name of the order variant, e.g. `StandardOrder`
    pub fn variant_name(&self) -> &'static str {
        match self {
            OrderClass::Standard => "StandardOrder",
            OrderClass::Express => "ExpressOrder",
            OrderClass::International => "InternationalOrder",
        }
    }
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderClass {
    type Err = OrderError;

    /// Accepts exactly the serde tags: `standard`, `express`, `international`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        OrderClass::ALL
            .into_iter()
            .find(|class| class.as_str() == tag)
            .ok_or_else(|| OrderError::InvalidArgument(tag.to_string()))
    }
}

/// Order lifecycle status. Only moves forward: created -> processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Processing,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Created => f.write_str("created"),
            OrderStatus::Processing => f.write_str("processing"),
        }
    }
}

/// Shipping terms of one order class at a given order total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub class: OrderClass,
    pub amount: f64,
    pub shipping_cost: f64,
    pub delivery_days: u32,
}

impl ShippingQuote {
    pub fn new(class: OrderClass, amount: f64) -> Self {
        Self {
            class,
            amount,
            shipping_cost: class.shipping_cost(amount),
            delivery_days: class.delivery_days(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
