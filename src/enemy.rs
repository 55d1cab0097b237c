//! Decoded enemy entities and identifier allocation

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Experience sentinel for enemies whose base type code was not recognized.
/// Downstream logic must not award experience for these.
pub const UNKNOWN_EXPERIENCE: u32 = u32::MAX;

/// One spawned enemy, as decoded from a map record.
///
/// Created only by [`decode_map`](crate::decode_map); ownership transfers
/// whole to the caller, which mutates the hit-tracking fields during combat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyEntity {
    /// Process-unique identifier, referenced in protocol messages
    pub id: u64,
    /// Raw base type code from the map record this enemy derives from
    pub base_type: u32,
    /// Bitmask of clients that have hit this enemy (initially zero)
    pub hit_flags: u8,
    /// Client id of the last attacker (initially zero)
    pub last_hit: u16,
    /// Experience awarded on kill, or [`UNKNOWN_EXPERIENCE`]
    pub experience: u32,
    /// Game-facing roster classification, 0 when unclassified
    pub rt_index: u32,
}

impl EnemyEntity {
    pub fn new(id: u64, base_type: u32, experience: u32, rt_index: u32) -> Self {
        EnemyEntity {
            id,
            base_type,
            hit_flags: 0,
            last_hit: 0,
            experience,
            rt_index,
        }
    }
}

impl fmt::Display for EnemyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Enemy E-{:X} base_type={:X} hit={:02X}/{} exp={} rt_index={:X}]",
            self.id, self.base_type, self.hit_flags, self.last_hit, self.experience, self.rt_index
        )
    }
}

/// Allocator for enemy identifiers.
///
/// Identifiers must stay unique and strictly increasing across every decode
/// call in the process, because clients refer to enemies by id across game
/// sessions. One allocator is shared by all decoders; the atomic counter
/// keeps concurrent decodes from handing out duplicates.
#[derive(Debug)]
pub struct EnemyIdAllocator {
    next: AtomicU64,
}

impl EnemyIdAllocator {
    /// New allocator starting at id 1 (id 0 is reserved as "no enemy")
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first_id: u64) -> Self {
        EnemyIdAllocator {
            next: AtomicU64::new(first_id),
        }
    }

    /// Claim the next identifier
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for EnemyIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
