//! Registry of live games and the connections watching them.
//!
//! The engine itself is not thread-safe: a `Game` is a mutable value
//! holder, and all access to one game must be serialized. This module
//! provides that discipline as an explicit owned object the transport
//! layer holds on to. Each game sits behind its own `Mutex` so unrelated
//! games proceed in parallel, and connections are routed to games with
//! insertion on connect and removal on disconnect.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::game::Game;

/// Identifier for a stored game, assigned by the persistence layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a live transport connection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owned map of active games plus the connection routing table.
#[derive(Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Arc<Mutex<Game>>>>,
    connections: RwLock<HashMap<ConnectionId, GameId>>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        GameRegistry {
            games: RwLock::new(HashMap::new()),
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a game, returning its shared handle. An existing game
    /// under the same id is replaced.
    pub fn insert(&self, id: GameId, game: Game) -> Arc<Mutex<Game>> {
        let handle = Arc::new(Mutex::new(game));
        self.games.write().insert(id, Arc::clone(&handle));

        #[cfg(feature = "logging")]
        log::debug!("registered game {id}");

        handle
    }

    /// Drop a game and every connection routed to it.
    pub fn remove(&self, id: GameId) -> Option<Arc<Mutex<Game>>> {
        let removed = self.games.write().remove(&id);
        if removed.is_some() {
            self.connections.write().retain(|_, game| *game != id);

            #[cfg(feature = "logging")]
            log::debug!("removed game {id}");
        }
        removed
    }

    /// Shared handle for a game, if registered
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<Arc<Mutex<Game>>> {
        self.games.read().get(&id).map(Arc::clone)
    }

    /// Run a closure under the game's lock.
    ///
    /// All mutation of a live game should go through here (or through a
    /// handle from `game`); the per-game lock is what keeps concurrent
    /// callers from interleaving on one game.
    pub fn with_game<T>(&self, id: GameId, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        let handle = self.game(id)?;
        let mut game = handle.lock();
        Some(f(&mut game))
    }

    /// Route a connection to a game. Returns false (and routes nothing)
    /// for an unregistered game id.
    pub fn connect(&self, conn: ConnectionId, id: GameId) -> bool {
        if !self.games.read().contains_key(&id) {
            return false;
        }
        self.connections.write().insert(conn, id);

        #[cfg(feature = "logging")]
        log::debug!("connection {conn} joined game {id}");

        true
    }

    /// Drop a connection's routing, returning the game it watched
    pub fn disconnect(&self, conn: ConnectionId) -> Option<GameId> {
        let removed = self.connections.write().remove(&conn);

        #[cfg(feature = "logging")]
        if let Some(id) = removed {
            log::debug!("connection {conn} left game {id}");
        }

        removed
    }

    /// The game a connection is routed to, if any
    #[must_use]
    pub fn game_for(&self, conn: ConnectionId) -> Option<Arc<Mutex<Game>>> {
        let id = *self.connections.read().get(&conn)?;
        self.game(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}
