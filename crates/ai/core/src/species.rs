//! Static species table, one entry per monster letter `A`-`Z`.
//!
//! Species carry base stats, sensing ranges and a small set of trait flags.
//! Behavior that differs between species is keyed on those flags, never on the
//! letter itself.

bitflags::bitflags! {
    /// Capabilities that change how a species fights or moves.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SpeciesTraits: u8 {
        /// Never enters `Flee`, whatever its health.
        const FEARLESS = 1 << 0;
        /// Chases with the pathfinder instead of greedy steps.
        const INTELLIGENT = 1 << 1;
        /// Hits almost every time.
        const PERFECT_ACCURACY = 1 << 2;
        /// Fire or frost attack that deals bonus damage.
        const ELEMENTAL = 1 << 3;
        /// Heals from the damage it deals while badly hurt.
        const LIFE_DRAIN = 1 << 4;
        /// Steals gold and vanishes.
        const THEFT = 1 << 5;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub health: u32,
    pub attack: i32,
    pub defense: i32,
}

/// Immutable species definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
    pub symbol: char,
    pub name: &'static str,
    pub stats: BaseStats,
    pub view_range: u32,
    pub detection_range: u32,
    pub traits: SpeciesTraits,
}

impl Species {
    const fn new(
        symbol: char,
        name: &'static str,
        (health, attack, defense): (u32, i32, i32),
        (view_range, detection_range): (u32, u32),
        traits: SpeciesTraits,
    ) -> Self {
        Self {
            symbol,
            name,
            stats: BaseStats {
                health,
                attack,
                defense,
            },
            view_range,
            detection_range,
            traits,
        }
    }

    /// Looks up the species for an uppercase letter.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not in `A..=Z`. Callers spawn monsters from the
    /// table, so an unknown letter is a programming error. Use
    /// [`Species::try_lookup`] for letters read from untrusted data.
    pub fn lookup(symbol: char) -> &'static Species {
        match Self::try_lookup(symbol) {
            Some(species) => species,
            None => panic!("no species for monster letter {symbol:?}"),
        }
    }

    pub fn try_lookup(symbol: char) -> Option<&'static Species> {
        if symbol.is_ascii_uppercase() {
            Some(&SPECIES[(symbol as u8 - b'A') as usize])
        } else {
            None
        }
    }

    pub fn all() -> &'static [Species; 26] {
        &SPECIES
    }

    #[inline]
    pub fn has(&self, traits: SpeciesTraits) -> bool {
        self.traits.contains(traits)
    }
}

const NONE: SpeciesTraits = SpeciesTraits::empty();
const FEARLESS: SpeciesTraits = SpeciesTraits::FEARLESS;
const SMART: SpeciesTraits = SpeciesTraits::INTELLIGENT;
const SURE: SpeciesTraits = SpeciesTraits::PERFECT_ACCURACY;
const ELEMENTAL: SpeciesTraits = SpeciesTraits::ELEMENTAL;
const DRAIN: SpeciesTraits = SpeciesTraits::LIFE_DRAIN;
const THIEF: SpeciesTraits = SpeciesTraits::THEFT;

// (health, attack, defense), (view, detection)
static SPECIES: [Species; 26] = [
    Species::new('A', "aquator", (25, 4, 2), (6, 2), NONE),
    Species::new('B', "bat", (5, 2, 1), (7, 3), NONE),
    Species::new('C', "centaur", (32, 6, 3), (9, 3), SMART.union(SURE)),
    Species::new(
        'D',
        "dragon",
        (100, 14, 8),
        (10, 4),
        FEARLESS.union(SMART).union(ELEMENTAL),
    ),
    Species::new('E', "emu", (6, 2, 1), (5, 2), NONE),
    Species::new('F', "venus flytrap", (40, 5, 3), (3, 1), NONE),
    Species::new('G', "griffin", (65, 9, 5), (10, 3), SMART.union(SURE)),
    Species::new('H', "hobgoblin", (15, 3, 2), (6, 2), SMART),
    Species::new('I', "ice monster", (12, 4, 2), (5, 2), ELEMENTAL),
    Species::new('J', "jabberwock", (75, 12, 6), (8, 3), FEARLESS.union(SMART)),
    Species::new('K', "kestrel", (5, 2, 1), (8, 3), NONE),
    Species::new('L', "leprechaun", (20, 2, 4), (7, 3), SMART.union(THIEF)),
    Species::new('M', "medusa", (55, 8, 5), (8, 3), SMART),
    Species::new('N', "nymph", (18, 1, 3), (7, 3), SMART.union(THIEF)),
    Species::new('O', "orc", (14, 4, 3), (6, 2), SMART),
    Species::new('P', "phantom", (40, 6, 4), (6, 4), NONE),
    Species::new('Q', "quagga", (20, 4, 3), (6, 2), NONE),
    Species::new('R', "rattlesnake", (10, 3, 2), (4, 2), NONE),
    Species::new('S', "snake", (6, 2, 1), (4, 2), NONE),
    Species::new('T', "troll", (60, 10, 5), (7, 3), FEARLESS.union(SMART)),
    Species::new('U', "black unicorn", (50, 9, 6), (8, 3), SMART),
    Species::new('V', "vampire", (60, 10, 5), (8, 4), SMART.union(DRAIN)),
    Species::new('W', "wraith", (35, 7, 4), (7, 3), SMART.union(DRAIN)),
    Species::new('X', "xeroc", (45, 7, 4), (6, 2), SMART),
    Species::new('Y', "yeti", (35, 6, 3), (6, 2), NONE),
    Species::new('Z', "zombie", (20, 4, 2), (5, 1), NONE),
];
