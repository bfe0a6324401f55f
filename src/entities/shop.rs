//! The town shop
//!
//! Shops sell at catalog price and buy back at a marked-down price. They
//! hold no state of their own; every trade changes the hunter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::entities::Hunter;
use crate::error::{KitError, ParseError};
use crate::items::Item;

/// Which side of the counter the hunter is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Buy,
    Sell,
}

impl FromStr for ShopMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "buy" => Ok(ShopMode::Buy),
            "s" | "sell" => Ok(ShopMode::Sell),
            other => Err(ParseError::UnknownShopMode(other.to_string())),
        }
    }
}

impl fmt::Display for ShopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopMode::Buy => f.write_str("buy"),
            ShopMode::Sell => f.write_str("sell"),
        }
    }
}

/// Highest price a catalog entry may carry
pub const MAX_PRICE: u32 = 10_000;

/// Buy prices for every item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    prices: BTreeMap<Item, u32>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            prices: Item::ALL.iter().map(|&item| (item, item.base_price())).collect(),
        }
    }
}

impl Catalog {
    /// Default prices with some replaced
    pub fn with_overrides(overrides: &BTreeMap<Item, u32>) -> Self {
        let mut catalog = Self::default();
        catalog.prices.extend(overrides.iter().map(|(&item, &price)| (item, price)));
        catalog
    }

    pub fn price(&self, item: Item) -> u32 {
        self.prices.get(&item).copied().unwrap_or_else(|| item.base_price())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.prices.iter().map(|(&item, &price)| (item, price))
    }
}

#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
    catalog: Catalog,
}

impl Shop {
    pub fn new(markdown: f64, catalog: Catalog) -> Self {
        Self { markdown, catalog }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    pub fn buy_price(&self, item: Item) -> i32 {
        i32::try_from(self.catalog.price(item)).unwrap_or(i32::MAX)
    }

    /// Catalog price times the markdown, rounded down
    pub fn sell_price(&self, item: Item) -> i32 {
        let price = (self.catalog.price(item) as f64 * self.markdown).floor();
        price.clamp(0.0, i32::MAX as f64) as i32
    }

    /// Run one trade and describe how it went
    pub fn enter(&self, hunter: &mut Hunter, mode: ShopMode, item: Item) -> String {
        match mode {
            ShopMode::Buy => self.buy(hunter, item),
            ShopMode::Sell => self.sell(hunter, item),
        }
    }

    /// Price list for one side of the counter
    pub fn price_list(&self, mode: ShopMode) -> String {
        let mut lines = Vec::with_capacity(Item::ALL.len() + 1);
        lines.push(match mode {
            ShopMode::Buy => "We've got the finest goods in town:".to_string(),
            ShopMode::Sell => "Here's what we'll pay for your gear:".to_string(),
        });
        for (item, _) in self.catalog.iter() {
            let price = match mode {
                ShopMode::Buy => self.buy_price(item),
                ShopMode::Sell => self.sell_price(item),
            };
            lines.push(format!("  {}: {} gold", item, price));
        }
        lines.join("\n")
    }

    fn buy(&self, hunter: &mut Hunter, item: Item) -> String {
        let price = self.buy_price(item);
        if hunter.has_item(item) {
            return format!("Hmm, {}.", KitError::AlreadyOwned(item));
        }
        if hunter.gold() < price {
            return format!(
                "Hmm, the {} costs {} gold and you only have {}. Come back when you've got the coin.",
                item,
                price,
                hunter.gold()
            );
        }
        if let Err(e) = hunter.add_item(item) {
            return format!("Hmm, {}.", e);
        }
        hunter.change_gold(-price);
        log::debug!("{} bought {} for {} gold", hunter.name(), item, price);
        format!("Ye' got yerself a {}. Come again soon.", item)
    }

    fn sell(&self, hunter: &mut Hunter, item: Item) -> String {
        if let Err(e) = hunter.remove_item(item) {
            return format!("We ain't buying thin air: {}.", e);
        }
        let price = self.sell_price(item);
        hunter.change_gold(price);
        log::debug!("{} sold {} for {} gold", hunter.name(), item, price);
        format!("Pleasure doin' business with you. Here's {} gold for yer {}.", price, item)
    }
}
