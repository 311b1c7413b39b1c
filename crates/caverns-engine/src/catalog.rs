//! Static catalog of monsters and objects.
//!
//! Entities are numbered 1 to 24. Indices 1-6 are monsters and 7-24 are
//! objects, so iterating in index order always lists monsters first.

use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::parser::contains_word;

/// Number of entities in the catalog.
pub const NUM_ENTITIES: usize = 24;

/// Number of monsters; they occupy the lowest indices.
pub const NUM_MONSTERS: usize = 6;

/// Index of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u8);

impl EntityId {
    /// The home made bomb.
    pub const BOMB: Self = Self(9);
    /// The rusty key.
    pub const KEY: Self = Self(19);
    /// The double bladed sword, the only weapon.
    pub const SWORD: Self = Self(20);
    /// The thin and tatty rope.
    pub const ROPE: Self = Self(22);
    /// The ventilation grill covering the grate.
    pub const GRILL: Self = Self(24);

    /// Look up an entity by its 1-based index.
    pub fn new(index: usize) -> EngineResult<Self> {
        if (1..=NUM_ENTITIES).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::InvalidEntity(index))
        }
    }

    /// The 1-based catalog index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Whether this entity is a monster.
    pub fn is_monster(self) -> bool {
        self.index() <= NUM_MONSTERS
    }

    /// Whether this entity is an object that can be carried.
    pub fn is_object(self) -> bool {
        !self.is_monster()
    }

    /// Display name, including its article.
    pub fn name(self) -> &'static str {
        describe(self.index())
    }

    /// The single word that refers to this entity in commands.
    pub fn noun(self) -> &'static str {
        entry(self.index()).map_or("", |e| e.noun)
    }

    /// Whether normalized input mentions this entity.
    pub fn is_named_in(self, normalized: &str) -> bool {
        matches_noun(normalized, self.index())
    }

    /// Every entity in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=NUM_ENTITIES as u8).map(Self)
    }

    /// Monsters in index order.
    pub fn monsters() -> impl Iterator<Item = Self> {
        Self::all().filter(|id| id.is_monster())
    }

    /// Objects in index order.
    pub fn objects() -> impl Iterator<Item = Self> {
        Self::all().filter(|id| id.is_object())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct CatalogEntry {
    name: &'static str,
    noun: &'static str,
}

const fn entity(name: &'static str, noun: &'static str) -> CatalogEntry {
    CatalogEntry { name, noun }
}

static CATALOG: [CatalogEntry; NUM_ENTITIES] = [
    entity("an evil wizard", "wizard"),
    entity("a fiery demon", "demon"),
    entity("an axe wielding troll", "troll"),
    entity("a fire breathing dragon", "dragon"),
    entity("a giant bat", "bat"),
    entity("an old and gnarled dwarf", "dwarf"),
    entity("a gold coin", "coin"),
    entity("a useful looking compass", "compass"),
    entity("a home made bomb", "bomb"),
    entity("a blood red ruby", "ruby"),
    entity("a sparkling diamond", "diamond"),
    entity("a moon-like pearl", "pearl"),
    entity("an interesting stone", "stone"),
    entity("a diamond studded ring", "ring"),
    entity("a magic pendant", "pendant"),
    entity("a most holy grail", "grail"),
    entity("a mirror like shield", "shield"),
    entity("a nondescript black box", "box"),
    entity("an old and rusty key", "key"),
    entity("a double bladed sword", "sword"),
    entity("a small candle", "candle"),
    entity("a thin and tatty rope", "rope"),
    entity("a red house brick", "brick"),
    entity("a rusty ventilation grill", "grill"),
];

fn entry(index: usize) -> Option<&'static CatalogEntry> {
    index.checked_sub(1).and_then(|i| CATALOG.get(i))
}

/// Display text for an entity index; empty when the index has no entry.
pub fn describe(index: usize) -> &'static str {
    entry(index).map_or("", |e| e.name)
}

/// Whether `normalized` contains the entity's noun as a whole word.
///
/// Indices without an entry never match.
pub fn matches_noun(normalized: &str, index: usize) -> bool {
    entry(index).is_some_and(|e| contains_word(normalized, e.noun))
}
