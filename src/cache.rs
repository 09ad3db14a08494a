use crate::shapes::member::MemberEntry;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedMember {
    inserted: Instant,
    member: MemberEntry,
}

/// Least recently used members by id. Entries expire a fixed time after they
/// were written, regardless of reads.
pub struct MemberCache {
    entries: LruCache<i64, CachedMember>,
    ttl: Duration,
}

impl MemberCache {
    /// A zero `capacity` is treated as 1.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            ttl,
        }
    }

    pub fn get(&mut self, id: i64) -> Option<MemberEntry> {
        let expired = match self.entries.get(&id) {
            Some(cached) => cached.inserted.elapsed() >= self.ttl,
            None => return None,
        };
        if expired {
            self.entries.pop(&id);
            return None;
        }
        self.entries.get(&id).map(|cached| cached.member.clone())
    }

    pub fn put(&mut self, member: MemberEntry) {
        self.entries.put(
            member.id,
            CachedMember {
                inserted: Instant::now(),
                member,
            },
        );
    }

    pub fn invalidate(&mut self, id: i64) {
        self.entries.pop(&id);
    }
}

#[cfg(test)]
impl MemberCache {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Expired entries that have not been read or evicted yet are included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}
