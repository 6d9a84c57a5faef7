use super::*;
use crate::Guild;
use crate::ID;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Shared handle to one guild's state. Hold the lock only for
/// read-modify-write steps; never across a wait or a platform call.
pub type Shared = Arc<Mutex<ServerState>>;

/// Lookup from guild to its state, created lazily on first reference.
#[derive(Debug, Default)]
pub struct Registry {
    guilds: RwLock<HashMap<ID<Guild>, Shared>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
    /// Existing state for `id`, or a freshly created one.
    pub async fn get(&self, id: ID<Guild>) -> Shared {
        if let Some(state) = self.guilds.read().await.get(&id) {
            return state.clone();
        }
        self.guilds
            .write()
            .await
            .entry(id)
            .or_insert_with(|| {
                log::debug!("[registry] created guild {}", id);
                Arc::new(Mutex::new(ServerState::new(id)))
            })
            .clone()
    }
    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.guilds.read().await.is_empty()
    }
    /// Stops every running game and forgets all guilds.
    pub async fn shutdown(&self) {
        let guilds = std::mem::take(&mut *self.guilds.write().await);
        for (id, state) in guilds {
            let mut guild = state.lock().await;
            if guild.session.is_active() {
                log::info!("[registry] stopping game in guild {}", id);
                guild.finish();
            }
        }
    }
}
