//! Town actions: crossing out, brawling, treasure hunting, digging.
//!
//! Every action takes the visiting hunter and an injected RNG, mutates
//! both sides, and leaves a human-readable report in the town's
//! `latest_news`.

use super::types::{Terrain, Town};
use crate::core::constants::{
    BRAWL_STAKE_MAX, DIG_DIRT_CHANCE, DIG_GOLD_MAX, ITEM_BREAK_CHANCE, NO_TROUBLE_CHANCE_MILD,
    NO_TROUBLE_CHANCE_TOUGH,
};
use crate::hunter::Hunter;
use crate::items::Item;
use rand::Rng;

/// What one dig attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// This town has already been dug up; nothing happens.
    AlreadyDug,
    /// No shovel in the kit. The town is left undug, so the attempt can
    /// be repeated (and keep failing) until a shovel is bought.
    NoShovel,
    /// Dug, found nothing. The town still counts as dug.
    Dirt,
    /// Dug and struck gold; the amount has already been credited.
    Struck(i64),
}

/// What came of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrawlOutcome {
    NoTrouble,
    Won { stake: i64, by_sword: bool },
    Lost { stake: i64 },
}

/// True when the hunter can cross out of this town: the kit holds the
/// terrain's required item, or the terrain is Jungle and a sword can
/// hack through instead.
pub fn can_cross(town: &Town, hunter: &Hunter) -> bool {
    hunter.has_item(town.terrain.required_item())
        || (town.terrain == Terrain::Jungle && hunter.has_item(Item::Sword))
}

/// Attempts to leave. On success the crossing item may break and drop
/// out of the kit; on failure nothing changes and the news names the
/// missing item.
pub fn leave_town(town: &mut Town, hunter: &mut Hunter, rng: &mut impl Rng) -> bool {
    if !can_cross(town, hunter) {
        town.latest_news = format!(
            "You can't leave town, {}. You don't have a {}.",
            hunter.name(),
            town.terrain.required_item().name()
        );
        return false;
    }

    // In the Jungle a carried sword does the machete's job, and is the
    // item put at risk.
    let item = if town.terrain == Terrain::Jungle && hunter.has_item(Item::Sword) {
        Item::Sword
    } else {
        town.terrain.required_item()
    };

    town.latest_news = format!(
        "You used your {} to cross the {}.",
        item.name(),
        town.terrain.name()
    );
    if roll_item_break(town, rng) {
        hunter.remove_item(item);
        town.latest_news
            .push_str(&format!("\nUnfortunately, you lost your {}.", item.name()));
    }
    true
}

fn roll_item_break(town: &Town, rng: &mut impl Rng) -> bool {
    town.breaks_forced() || rng.gen::<f64>() < ITEM_BREAK_CHANCE
}

/// Goes looking for a fight. Tough towns offer trouble more readily and
/// win it more often; a sword settles any brawl instantly. The stake
/// moves in full whenever a fight happens, win or lose.
pub fn look_for_trouble(town: &mut Town, hunter: &mut Hunter, rng: &mut impl Rng) -> BrawlOutcome {
    let no_trouble_chance = if town.is_tough() {
        NO_TROUBLE_CHANCE_TOUGH
    } else {
        NO_TROUBLE_CHANCE_MILD
    };

    if rng.gen::<f64>() > no_trouble_chance {
        town.latest_news = "You couldn't find any trouble.".to_string();
        return BrawlOutcome::NoTrouble;
    }

    let stake = rng.gen_range(1..=BRAWL_STAKE_MAX);
    let mut news = String::from("You want trouble, stranger? You got it!\nOof! Umph! Ow!");
    let by_sword = hunter.has_item(Item::Sword);
    let won = rng.gen::<f64>() > no_trouble_chance || by_sword;
    if won {
        if by_sword {
            news.push_str("\nThe stranger takes one look at your sword and hands over his gold.");
        } else {
            news.push_str("\nOkay, stranger! You proved yer mettle. Here, take my gold.");
        }
        news.push_str(&format!("\nYou won the brawl and receive {} gold.", stake));
        hunter.change_gold(stake);
        town.latest_news = news;
        BrawlOutcome::Won { stake, by_sword }
    } else {
        news.push_str("\nThat'll teach you to go lookin' fer trouble in MY town! Now pay up!");
        news.push_str(&format!("\nYou lost the brawl and pay {} gold.", stake));
        hunter.change_gold(-stake);
        town.latest_news = news;
        BrawlOutcome::Lost { stake }
    }
}

/// Searches the town for its treasure. Returns true only on a fresh
/// find; a claimed town or an already-held treasure kind both report
/// false, distinguished by re-reading `town.has_treasure()`.
pub fn look_for_treasure(town: &mut Town, hunter: &mut Hunter) -> bool {
    if !town.has_treasure() {
        return false;
    }
    if hunter.has_treasure(town.treasure()) {
        return false;
    }
    town.claim_treasure();
    hunter.add_treasure(town.treasure());
    true
}

/// Digs for buried gold. One shovel-bearing attempt per town; shovel-less
/// attempts never consume the town's dig.
pub fn dig(town: &mut Town, hunter: &mut Hunter, rng: &mut impl Rng) -> DigOutcome {
    if town.is_dug() {
        return DigOutcome::AlreadyDug;
    }
    if !hunter.has_shovel() {
        return DigOutcome::NoShovel;
    }
    town.mark_dug();
    if rng.gen::<f64>() < DIG_DIRT_CHANCE {
        DigOutcome::Dirt
    } else {
        let gold = rng.gen_range(1..=DIG_GOLD_MAX);
        hunter.change_gold(gold);
        DigOutcome::Struck(gold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::town::types::Treasure;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // StepRng with a constant value pins every draw: 0 makes each f64
    // come out 0.0 and each bounded range land on its low end; HIGH
    // (0.75 of the u64 space) makes each f64 come out 0.75 and divides
    // evenly into the ranges used here, so nothing rejects.
    const HIGH: u64 = 0xC000_0000_0000_0000;

    fn low_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn high_rng() -> StepRng {
        StepRng::new(HIGH, 0)
    }

    fn town_of(terrain: Terrain) -> Town {
        Town::with_terrain(terrain, false, Treasure::Gem)
    }

    #[test]
    fn test_crossing_requires_the_terrain_item() {
        let mut hunter = Hunter::new("Rory", 10);
        for terrain in Terrain::ALL {
            let town = town_of(terrain);
            assert!(!can_cross(&town, &hunter), "{}", terrain.name());
            hunter.add_item(terrain.required_item());
            assert!(can_cross(&town, &hunter), "{}", terrain.name());
            hunter.remove_item(terrain.required_item());
        }
    }

    #[test]
    fn test_sword_crosses_jungle_only() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Sword);
        for terrain in Terrain::ALL {
            let town = town_of(terrain);
            assert_eq!(can_cross(&town, &hunter), terrain == Terrain::Jungle);
        }
    }

    #[test]
    fn test_leave_failure_names_missing_item_and_keeps_kit() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Shovel);
        let mut town = town_of(Terrain::Ocean);

        assert!(!leave_town(&mut town, &mut hunter, &mut low_rng()));
        assert!(town.latest_news.contains("Boat"));
        assert_eq!(hunter.kit(), &[Item::Shovel]);
    }

    #[test]
    fn test_leave_break_removes_item() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Rope);
        let mut town = town_of(Terrain::Mountains);

        // Low roll -> the item breaks on the way out.
        assert!(leave_town(&mut town, &mut hunter, &mut low_rng()));
        assert!(!hunter.has_item(Item::Rope));
        assert!(town.latest_news.contains("lost your Rope"));
    }

    #[test]
    fn test_leave_without_break_keeps_item() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Rope);
        let mut town = town_of(Terrain::Mountains);

        assert!(leave_town(&mut town, &mut hunter, &mut high_rng()));
        assert!(hunter.has_item(Item::Rope));
        assert!(!town.latest_news.contains("lost"));
    }

    #[test]
    fn test_forced_break_always_breaks() {
        // The easy-mode flag makes breakage certain even on the highest
        // possible roll.
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Rope);
        let mut town = town_of(Terrain::Mountains);
        town.force_item_break();

        assert!(leave_town(&mut town, &mut hunter, &mut high_rng()));
        assert!(!hunter.has_item(Item::Rope));
    }

    #[test]
    fn test_jungle_prefers_sword_over_machete() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Machete);
        hunter.add_item(Item::Sword);
        let mut town = town_of(Terrain::Jungle);

        // Forced break so the consumed item is observable.
        town.force_item_break();
        assert!(leave_town(&mut town, &mut hunter, &mut low_rng()));
        assert!(!hunter.has_item(Item::Sword));
        assert!(hunter.has_item(Item::Machete));
    }

    #[test]
    fn test_no_trouble_leaves_gold_alone() {
        let mut hunter = Hunter::new("Rory", 10);
        let mut town = town_of(Terrain::Plains);

        let outcome = look_for_trouble(&mut town, &mut hunter, &mut high_rng());
        assert_eq!(outcome, BrawlOutcome::NoTrouble);
        assert_eq!(hunter.gold(), 10);
        assert!(town.latest_news.contains("couldn't find any trouble"));
    }

    #[test]
    fn test_lost_brawl_pays_the_stake() {
        let mut hunter = Hunter::new("Rory", 10);
        let mut town = town_of(Terrain::Plains);

        // All-zero draws: a fight breaks out, the stake bottoms out at 1,
        // and the win roll fails.
        let outcome = look_for_trouble(&mut town, &mut hunter, &mut low_rng());
        assert_eq!(
            outcome,
            BrawlOutcome::Lost { stake: 1 },
            "zero draws should find and lose a fight"
        );
        assert_eq!(hunter.gold(), 9);
        assert!(town.latest_news.contains("lost the brawl"));
    }

    #[test]
    fn test_sword_wins_any_brawl() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Sword);
        let mut town = town_of(Terrain::Plains);

        // Same zero draws that lose bare-handed; the sword turns it.
        let outcome = look_for_trouble(&mut town, &mut hunter, &mut low_rng());
        assert_eq!(
            outcome,
            BrawlOutcome::Won {
                stake: 1,
                by_sword: true
            }
        );
        assert_eq!(hunter.gold(), 11);
        assert!(town.latest_news.contains("sword"));
    }

    #[test]
    fn test_brawl_gold_moves_by_exactly_the_stake() {
        // Aggregate invariant over many seeds: no fight leaves gold
        // alone, a fight moves it by the stake and nothing else.
        for seed in 0..500u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut hunter = Hunter::new("Rory", 100);
            let mut town = Town::with_terrain(Terrain::Plains, seed % 2 == 0, Treasure::Gem);

            let before = hunter.gold();
            match look_for_trouble(&mut town, &mut hunter, &mut rng) {
                BrawlOutcome::NoTrouble => assert_eq!(hunter.gold(), before),
                BrawlOutcome::Won { stake, .. } => {
                    assert!((1..=BRAWL_STAKE_MAX).contains(&stake));
                    assert_eq!(hunter.gold(), before + stake);
                }
                BrawlOutcome::Lost { stake } => {
                    assert!((1..=BRAWL_STAKE_MAX).contains(&stake));
                    assert_eq!(hunter.gold(), before - stake);
                }
            }
        }
    }

    #[test]
    fn test_treasure_claims_once() {
        let mut hunter = Hunter::new("Rory", 10);
        let mut town = town_of(Terrain::Plains);

        assert!(look_for_treasure(&mut town, &mut hunter));
        assert!(!town.has_treasure());
        assert!(hunter.has_treasure(Treasure::Gem));

        // Second search of the same town finds nothing.
        assert!(!look_for_treasure(&mut town, &mut hunter));
        assert_eq!(hunter.treasures(), &[Treasure::Gem]);
    }

    #[test]
    fn test_duplicate_treasure_left_in_place() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_treasure(Treasure::Gem);
        let mut town = town_of(Terrain::Plains);

        assert!(!look_for_treasure(&mut town, &mut hunter));
        // The town keeps its treasure: that is how callers tell a
        // duplicate find from an exhausted town.
        assert!(town.has_treasure());
        assert_eq!(hunter.treasures(), &[Treasure::Gem]);
    }

    #[test]
    fn test_dig_without_shovel_never_consumes_the_town() {
        let mut hunter = Hunter::new("Rory", 10);
        let mut town = town_of(Terrain::Plains);

        for _ in 0..3 {
            assert_eq!(
                dig(&mut town, &mut hunter, &mut low_rng()),
                DigOutcome::NoShovel
            );
            assert!(!town.is_dug());
        }
        assert_eq!(hunter.gold(), 10);
    }

    #[test]
    fn test_dig_dirt_then_idempotent() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Shovel);
        let mut town = town_of(Terrain::Plains);

        assert_eq!(dig(&mut town, &mut hunter, &mut low_rng()), DigOutcome::Dirt);
        assert!(town.is_dug());
        assert_eq!(hunter.gold(), 10);

        // Any further attempt, whatever the rolls, is a no-op.
        assert_eq!(
            dig(&mut town, &mut hunter, &mut high_rng()),
            DigOutcome::AlreadyDug
        );
        assert_eq!(hunter.gold(), 10);
    }

    #[test]
    fn test_dig_strike_credits_gold() {
        let mut hunter = Hunter::new("Rory", 10);
        hunter.add_item(Item::Shovel);
        let mut town = town_of(Terrain::Plains);

        // HIGH divides range 20 exactly: the strike pays 16.
        assert_eq!(
            dig(&mut town, &mut hunter, &mut high_rng()),
            DigOutcome::Struck(16)
        );
        assert_eq!(hunter.gold(), 26);
        assert!(town.is_dug());
    }

    #[test]
    fn test_dig_payout_stays_in_range() {
        for seed in 0..500u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut hunter = Hunter::new("Rory", 0);
            hunter.add_item(Item::Shovel);
            let mut town = town_of(Terrain::Plains);

            match dig(&mut town, &mut hunter, &mut rng) {
                DigOutcome::Struck(gold) => {
                    assert!((1..=DIG_GOLD_MAX).contains(&gold));
                    assert_eq!(hunter.gold(), gold);
                }
                DigOutcome::Dirt => assert_eq!(hunter.gold(), 0),
                other => panic!("unexpected outcome {:?}", other),
            }
            assert!(town.is_dug());
        }
    }
}
