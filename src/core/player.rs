//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel always has exactly two seats: `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::DuelError;

/// Number of seats in a duel.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. Indices are 0-based: the first player is `PlayerId(0)`.
///
/// Only the two seats can be built, so indexing a `PlayerMap` never goes
/// out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a seat. Use [`PlayerId::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "a duel has two seats");
        Self(id)
    }

    /// Checked constructor: `None` unless `id` is 0 or 1.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if (id as usize) < PLAYER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The raw seat number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player duel.
    ///
    /// ```
    /// use math_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = DuelError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_new(id).ok_or(DuelError::UnknownSeat(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A contestant: display name and remaining life.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub life: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, life: u32) -> Self {
        Self {
            name: name.into(),
            life,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remove life, saturating at zero. Returns the amount actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.life;
        self.life = self.life.saturating_sub(amount);
        before - self.life
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use math_duel::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<u32> = PlayerMap::with_value(300);
/// life[PlayerId::new(1)] = 275;
///
/// assert_eq!(life[PlayerId::new(0)], 300);
/// assert_eq!(life[PlayerId::new(1)], 275);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(p0.opponent(), p1);
        assert_eq!(p1.opponent(), p0);
    }

    #[test]
    fn test_only_two_seats_exist() {
        assert_eq!(PlayerId::try_new(1), Some(PlayerId::new(1)));
        assert_eq!(PlayerId::try_new(2), None);
        assert_eq!(PlayerId::try_from(7), Err(DuelError::UnknownSeat(7)));

        let json = serde_json::to_string(&PlayerId::new(1)).unwrap();
        assert_eq!(json, "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    #[should_panic(expected = "two seats")]
    fn test_new_rejects_third_seat() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_take_damage_saturates() {
        let mut player = Player::new("Cat", 8);

        assert_eq!(player.take_damage(5), 5);
        assert_eq!(player.life, 3);
        assert!(player.is_alive());

        assert_eq!(player.take_damage(10), 3);
        assert_eq!(player.life, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_mutation_and_map() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[PlayerId::new(0)], 20);
        assert_eq!(doubled[PlayerId::new(1)], 40);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &0), (PlayerId::new(1), &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<Player> = PlayerMap::new(|p| Player::new(format!("{}", p), 300));
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<Player> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
