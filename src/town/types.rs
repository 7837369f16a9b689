//! Town state plus the terrain and treasure tables.

use crate::hunter::Hunter;
use crate::items::Item;
use rand::Rng;

/// The barrier surrounding a town. Crossing it consumes (and may break)
/// a specific item from the hunter's kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Mountains,
        Terrain::Ocean,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Jungle,
        Terrain::Marsh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Mountains => "Mountains",
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Jungle => "Jungle",
            Terrain::Marsh => "Marsh",
        }
    }

    /// The item consumed when crossing out of a town with this terrain.
    pub fn required_item(self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The four unique treasures. The hunt ends once the hunter holds one
/// of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    pub const ALL: [Treasure; 4] = [
        Treasure::Crown,
        Treasure::Trophy,
        Treasure::Gem,
        Treasure::Dust,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
            Treasure::Dust => "dust",
        }
    }

    /// The treasure with its article, for prose ("a crown", "some dust").
    pub fn with_article(self) -> &'static str {
        match self {
            Treasure::Crown => "a crown",
            Treasure::Trophy => "a trophy",
            Treasure::Gem => "a gem",
            Treasure::Dust => "some dust",
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// One visitable location. Terrain, toughness and treasure are fixed at
/// creation; `dug` and the treasure-claimed flag mutate over the visit.
#[derive(Debug, Clone)]
pub struct Town {
    pub terrain: Terrain,
    tough: bool,
    treasure: Treasure,
    has_treasure: bool,
    dug: bool,
    break_forced: bool,
    /// Human-readable result of the most recent town action.
    pub latest_news: String,
}

impl Town {
    /// Rolls a fresh town: uniform terrain, then a toughness draw
    /// against the difficulty's parameter.
    pub fn new(toughness: f64, treasure: Treasure, rng: &mut impl Rng) -> Self {
        let terrain = Terrain::random(rng);
        let tough = rng.gen::<f64>() < toughness;
        Self::with_terrain(terrain, tough, treasure)
    }

    /// Builds a town from known parts. The game only ever rolls towns via
    /// [`Town::new`]; this is the deterministic seam for scenario tests.
    pub fn with_terrain(terrain: Terrain, tough: bool, treasure: Treasure) -> Self {
        Self {
            terrain,
            tough,
            treasure,
            has_treasure: true,
            dug: false,
            break_forced: false,
            latest_news: String::new(),
        }
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    /// True while the town's treasure is still unclaimed.
    pub fn has_treasure(&self) -> bool {
        self.has_treasure
    }

    pub(crate) fn claim_treasure(&mut self) {
        self.has_treasure = false;
    }

    pub fn is_dug(&self) -> bool {
        self.dug
    }

    pub(crate) fn mark_dug(&mut self) {
        self.dug = true;
    }

    /// Easy mode sets this on every town. Once forced, the crossing item
    /// breaks every time; see DESIGN.md for the open question around
    /// that reading.
    pub fn force_item_break(&mut self) {
        self.break_forced = true;
    }

    pub fn breaks_forced(&self) -> bool {
        self.break_forced
    }

    /// Greets an arriving hunter, with flavor matching the town's mood.
    pub fn greet(&mut self, hunter: &Hunter) {
        let mut news = format!("Welcome to town, {}.", hunter.name());
        if self.tough {
            news.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            news.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.latest_news = news;
    }

    /// The town's only bookkeeping for a shop visit; the shop itself
    /// mutates the hunter.
    pub fn shop_visited(&mut self) {
        self.latest_news = "You left the shop.".to_string();
    }

    pub fn description(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_new_town_starts_unclaimed_and_undug() {
        let mut rng = StepRng::new(0, 0);
        let town = Town::new(0.4, Treasure::Gem, &mut rng);
        assert!(town.has_treasure());
        assert!(!town.is_dug());
        assert!(!town.breaks_forced());
    }

    #[test]
    fn test_zero_toughness_never_tough() {
        // A zero RNG drives every f64 draw to 0.0, the most tough-biased
        // value possible; toughness 0.0 must still refuse it.
        let mut rng = StepRng::new(0, 0);
        let town = Town::new(0.0, Treasure::Gem, &mut rng);
        assert!(!town.is_tough());
    }

    #[test]
    fn test_greeting_matches_mood() {
        let hunter = Hunter::new("Rory", 10);

        let mut tough = Town::with_terrain(Terrain::Plains, true, Treasure::Gem);
        tough.greet(&hunter);
        assert!(tough.latest_news.contains("watch yourself"));

        let mut mild = Town::with_terrain(Terrain::Plains, false, Treasure::Gem);
        mild.greet(&hunter);
        assert!(mild.latest_news.contains("sleepy little town"));
    }

    #[test]
    fn test_description_names_terrain() {
        let town = Town::with_terrain(Terrain::Marsh, false, Treasure::Gem);
        assert!(town.description().contains("Marsh"));
    }
}
