//! Integration test: shop pricing across difficulties.

use prospect::core::game_state::{Difficulty, GameState};
use prospect::items::Item;
use prospect::shop::{Shop, ShopError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn state_for(difficulty: Difficulty) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    GameState::new("Rory", difficulty, false, &mut rng)
}

#[test]
fn test_sell_back_follows_the_difficulty_markdown() {
    // Boat costs 20: easy pays it all back, normal half, hard a quarter.
    assert_eq!(state_for(Difficulty::Easy).shop.sell_price(Item::Boat), 20);
    assert_eq!(state_for(Difficulty::Normal).shop.sell_price(Item::Boat), 10);
    assert_eq!(state_for(Difficulty::Hard).shop.sell_price(Item::Boat), 5);
}

#[test]
fn test_buy_price_ignores_difficulty() {
    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        assert_eq!(state_for(difficulty).shop.buy_price(Item::Boat), 20);
    }
}

#[test]
fn test_sword_appears_only_on_samurai_shelves() {
    assert!(!state_for(Difficulty::Normal)
        .shop
        .stock()
        .contains(&Item::Sword));
    assert!(state_for(Difficulty::Samurai)
        .shop
        .stock()
        .contains(&Item::Sword));
}

#[test]
fn test_round_trip_loses_half_on_normal() {
    let mut state = state_for(Difficulty::Normal);
    state.hunter.change_gold(15); // 25 total

    assert_eq!(state.shop.buy(&mut state.hunter, Item::Boat), Ok(20));
    assert_eq!(state.hunter.gold(), 5);
    assert_eq!(state.shop.sell(&mut state.hunter, Item::Boat), Ok(10));
    assert_eq!(state.hunter.gold(), 15);
    assert!(!state.hunter.has_item(Item::Boat));
}

#[test]
fn test_round_trip_is_free_on_easy() {
    let mut state = state_for(Difficulty::Easy);
    let start = state.hunter.gold();

    assert_eq!(state.shop.buy(&mut state.hunter, Item::Shovel), Ok(8));
    assert_eq!(state.shop.sell(&mut state.hunter, Item::Shovel), Ok(8));
    assert_eq!(state.hunter.gold(), start);
}

#[test]
fn test_starting_purse_cannot_afford_a_boat() {
    let mut state = state_for(Difficulty::Normal);

    assert_eq!(
        state.shop.buy(&mut state.hunter, Item::Boat),
        Err(ShopError::CannotAfford)
    );
    assert_eq!(state.hunter.gold(), 10);
}

#[test]
fn test_fresh_shop_stocks_every_crossing_item() {
    let shop = Shop::new(0.5);
    for item in [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Boots,
        Item::Shovel,
        Item::Horse,
        Item::Boat,
    ] {
        assert!(shop.stock().contains(&item), "missing {}", item.name());
    }
}
