//! The general store: fixed stock, markdown-scaled sell-back.

use crate::hunter::Hunter;
use crate::items::Item;

/// Which side of the counter the hunter is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Buy,
    Sell,
}

/// Why a trade was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    NotStocked,
    AlreadyOwned,
    CannotAfford,
    NotOwned,
}

impl ShopError {
    pub fn message(self) -> &'static str {
        match self {
            ShopError::NotStocked => "We don't carry that here.",
            ShopError::AlreadyOwned => "You already have one of those.",
            ShopError::CannotAfford => "You can't afford it!",
            ShopError::NotOwned => "You don't have one of those to sell.",
        }
    }
}

/// The town shop. Prices come off the item table; the markdown is the
/// fraction paid out when the hunter sells something back.
#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
    sword_stocked: bool,
}

impl Shop {
    pub fn new(markdown: f64) -> Self {
        Self {
            markdown,
            sword_stocked: false,
        }
    }

    /// Samurai mode puts the sword on the shelf.
    pub fn stock_sword(&mut self) {
        self.sword_stocked = true;
    }

    pub fn stock(&self) -> Vec<Item> {
        let mut stock = Item::BASE_STOCK.to_vec();
        if self.sword_stocked {
            stock.push(Item::Sword);
        }
        stock
    }

    pub fn buy_price(&self, item: Item) -> i64 {
        item.price()
    }

    pub fn sell_price(&self, item: Item) -> i64 {
        (item.price() as f64 * self.markdown) as i64
    }

    /// Sells an item to the hunter. Returns the gold spent.
    pub fn buy(&self, hunter: &mut Hunter, item: Item) -> Result<i64, ShopError> {
        if !self.stock().contains(&item) {
            return Err(ShopError::NotStocked);
        }
        if hunter.has_item(item) {
            return Err(ShopError::AlreadyOwned);
        }
        let price = self.buy_price(item);
        if hunter.gold() < price {
            return Err(ShopError::CannotAfford);
        }
        hunter.change_gold(-price);
        hunter.add_item(item);
        Ok(price)
    }

    /// Buys an item back from the hunter. Returns the gold paid out.
    pub fn sell(&self, hunter: &mut Hunter, item: Item) -> Result<i64, ShopError> {
        if !hunter.has_item(item) {
            return Err(ShopError::NotOwned);
        }
        let price = self.sell_price(item);
        hunter.remove_item(item);
        hunter.change_gold(price);
        Ok(price)
    }
}
