use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId};
use crate::error::{CoreError, CoreResult};

/// The store of characters at a table.
///
/// Keeps insertion order for display. Names are unique case-insensitively;
/// all lookups go by name, which is how players refer to their dads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character. Returns the character's ID.
    pub fn add(&mut self, character: Character) -> CoreResult<CharacterId> {
        if self.get(&character.name).is_some() {
            return Err(CoreError::DuplicateCharacter(character.name.clone()));
        }
        let id = character.id;
        self.characters.push(character);
        Ok(id)
    }

    /// Find a character by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a character by name (case-insensitive), mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a character by name, or fail with [`CoreError::UnknownCharacter`].
    pub fn require(&self, name: &str) -> CoreResult<&Character> {
        self.get(name)
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))
    }

    /// Look up a character mutably, or fail with [`CoreError::UnknownCharacter`].
    pub fn require_mut(&mut self, name: &str) -> CoreResult<&mut Character> {
        self.get_mut(name)
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))
    }

    /// Remove a character by name, returning it.
    pub fn remove(&mut self, name: &str) -> CoreResult<Character> {
        let index = self
            .characters
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))?;
        Ok(self.characters.remove(index))
    }

    /// Iterate over characters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Number of characters in the roster.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if the roster has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenPool;

    fn test_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add(Character::new("Gary")).unwrap();
        roster.add(Character::new("Phil")).unwrap();
        roster
    }

    #[test]
    fn add_and_get() {
        let roster = test_roster();
        assert_eq!(roster.len(), 2);
        assert!(roster.get("gary").is_some());
        assert!(roster.get("GARY").is_some());
        assert!(roster.get("Randy").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut roster = test_roster();
        let err = roster.add(Character::new("GARY")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCharacter(_)));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn require_reports_unknown() {
        let roster = test_roster();
        let err = roster.require("Randy").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCharacter(_)));
    }

    #[test]
    fn remove_returns_character() {
        let mut roster = test_roster();
        let gone = roster.remove("phil").unwrap();
        assert_eq!(gone.name, "Phil");
        assert_eq!(roster.len(), 1);
        assert!(roster.remove("phil").is_err());
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let roster = test_roster();
        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gary", "Phil"]);
    }

    #[test]
    fn roster_serde_roundtrip() {
        let roster = test_roster();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get("Gary").unwrap().pool, TokenPool::new(4, 3));
    }
}
