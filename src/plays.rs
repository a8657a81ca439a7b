//! Play-throughs held by the server for browser visitors, keyed by the token
//! in their play cookie.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ulid::Ulid;

use crate::player::Player;

pub type SharedPlayer = Arc<tokio::sync::Mutex<Player>>;

#[derive(Clone, Default)]
pub struct PlayRegistry {
    players: Arc<Mutex<HashMap<String, SharedPlayer>>>,
}

impl PlayRegistry {
    fn players(&self) -> MutexGuard<'_, HashMap<String, SharedPlayer>> {
        self.players.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, token: &str) -> Option<SharedPlayer> {
        self.players().get(token).cloned()
    }

    /// Registers a new play-through and returns its token.
    // TODO: evict play-throughs whose cookie has expired; they are currently kept until restart.
    pub fn insert(&self, player: Player) -> (String, SharedPlayer) {
        let token = Ulid::new().to_string();
        let shared = Arc::new(tokio::sync::Mutex::new(player));
        self.players().insert(token.clone(), Arc::clone(&shared));
        (token, shared)
    }

    pub fn len(&self) -> usize {
        self.players().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players().is_empty()
    }
}
