//! Item definitions and base shop prices.

/// Everything a hunter can own, other than gold and treasures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Boots,
    Shovel,
    Horse,
    Boat,
    Sword,
}

impl Item {
    /// The shop's everyday stock, cheapest first. The sword is special
    /// stock and only appears in samurai mode.
    pub const BASE_STOCK: [Item; 7] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Boots,
        Item::Shovel,
        Item::Horse,
        Item::Boat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Boots => "Boots",
            Item::Shovel => "Shovel",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
            Item::Sword => "Sword",
        }
    }

    /// Base purchase price in gold. Sell-back is scaled by the shop's
    /// markdown, not here.
    pub fn price(self) -> i64 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Boots => 6,
            Item::Shovel => 8,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Sword => 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stock_excludes_sword() {
        assert!(!Item::BASE_STOCK.contains(&Item::Sword));
        assert_eq!(Item::BASE_STOCK.len(), 7);
    }

    #[test]
    fn test_prices_are_positive() {
        for item in Item::BASE_STOCK {
            assert!(item.price() > 0, "{} should cost gold", item.name());
        }
        assert!(Item::Sword.price() > 0);
    }
}
