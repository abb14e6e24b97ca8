//! In-process view cache adapter.
//!
//! Holds rendered bodies keyed by request path for the lifetime of the
//! process, sharded with `DashMap`. Each path keeps a generation alongside its
//! body. Invalidation drops the body and advances the generation, and a
//! conditional `put` compares generations under the same shard lock. Suitable
//! for a single instance; a shared backend would implement the same port.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::ports::{CachedView, ViewCache, ViewCacheError};

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    body: Option<String>,
}

/// Sharded map implementing [`ViewCache`].
#[derive(Debug, Default)]
pub struct InMemoryViewCache {
    slots: DashMap<String, Slot>,
}

impl InMemoryViewCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn get(&self, path: &str) -> Result<CachedView, ViewCacheError> {
        let Some(slot) = self.slots.get(path) else {
            return Ok(CachedView::Miss { generation: 0 });
        };
        Ok(match &slot.body {
            Some(body) => CachedView::Hit(body.clone()),
            None => CachedView::Miss {
                generation: slot.generation,
            },
        })
    }

    async fn put(
        &self,
        path: &str,
        body: String,
        generation: u64,
    ) -> Result<bool, ViewCacheError> {
        match self.slots.entry(path.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                if slot.generation != generation {
                    return Ok(false);
                }
                slot.body = Some(body);
                Ok(true)
            }
            // Slots are never removed, so a vacant path is still at generation 0.
            Entry::Vacant(vacant) if generation == 0 => {
                vacant.insert(Slot {
                    generation,
                    body: Some(body),
                });
                Ok(true)
            }
            Entry::Vacant(_) => Ok(false),
        }
    }

    async fn invalidate(&self, path: &str) -> Result<(), ViewCacheError> {
        let mut slot = self.slots.entry(path.to_owned()).or_default();
        slot.generation = slot.generation.wrapping_add(1);
        slot.body = None;
        Ok(())
    }
}
