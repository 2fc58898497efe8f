//! Sets of characters an activation can resolve against.
//!
//! Abilities never hold references to other characters. They address
//! combatants by [`CharacterId`] through the [`Combatants`] trait, which lets
//! the same activation code run against a whole encounter roster or against
//! two characters borrowed separately.

use super::{Character, CharacterId};

/// Id-addressed access to a group of characters.
///
/// Ids are dense: every id in `0..len()` resolves to a character.
pub trait Combatants {
    fn len(&self) -> usize;

    fn get(&self, id: CharacterId) -> Option<&Character>;

    fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ids(&self) -> impl Iterator<Item = CharacterId> {
        (0..self.len() as u32).map(CharacterId)
    }

    fn iter(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.ids().filter_map(move |id| self.get(id).map(|c| (id, c)))
    }
}

/// Growable roster owned by an encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character and returns its id.
    pub fn add(&mut self, character: Character) -> CharacterId {
        let id = CharacterId(self.characters.len() as u32);
        self.characters.push(character);
        id
    }

    /// Id of the first character named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<CharacterId> {
        self.characters
            .iter()
            .position(|c| c.name == name)
            .map(|index| CharacterId(index as u32))
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }
}

impl Combatants for Roster {
    fn len(&self) -> usize {
        self.characters.len()
    }

    fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.index())
    }
}

impl FromIterator<Character> for Roster {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}

/// Two characters borrowed independently: the caster at [`Duel::CASTER`] and
/// the other party at [`Duel::TARGET`].
#[derive(Debug)]
pub struct Duel<'a> {
    caster: &'a mut Character,
    target: &'a mut Character,
}

impl<'a> Duel<'a> {
    pub const CASTER: CharacterId = CharacterId(0);
    pub const TARGET: CharacterId = CharacterId(1);

    pub fn new(caster: &'a mut Character, target: &'a mut Character) -> Self {
        Self { caster, target }
    }
}

impl Combatants for Duel<'_> {
    fn len(&self) -> usize {
        2
    }

    fn get(&self, id: CharacterId) -> Option<&Character> {
        match id {
            Self::CASTER => Some(&*self.caster),
            Self::TARGET => Some(&*self.target),
            _ => None,
        }
    }

    fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        match id {
            Self::CASTER => Some(&mut *self.caster),
            Self::TARGET => Some(&mut *self.target),
            _ => None,
        }
    }
}
