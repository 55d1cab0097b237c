//! Map enemy data decoding
//!
//! A map's enemy population is a flat sequence of fixed 72-byte records with
//! no header or padding. Record layout (all fields little-endian, packed):
//!
//! - `u32` base type code
//! - `u16` reserved, `u16` clone count
//! - `u32 x 11` reserved; bit 0x0080_0000 of the last one is the
//!   rare/variant flag
//! - `f32` reserved, `u32 x 2` reserved
//! - `u32` skin (variant/color selector)
//! - `u32` reserved
//!
//! [`decode_map`] walks the records in buffer order (spawn order is
//! significant to downstream room/trigger logic) and expands each one into
//! typed enemies, fixed escorts, and generic clones according to the rule
//! set in [`crate::rules`].

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;
use tracing::warn;

use crate::enemy::{EnemyEntity, EnemyIdAllocator, UNKNOWN_EXPERIENCE};
use crate::error::{Error, Result};
use crate::rules::{rule_for, CloneTail, SpawnContext};
use crate::stats::StatTable;

/// Game episode a map belongs to. Selects both the stat-table grid
/// coordinate and a handful of episode-conditional spawn rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Episode {
    Episode1,
    Episode2,
    Episode4,
}

impl Episode {
    /// The episode's coordinate in the stat-table grid (and the selector for
    /// the stat file's name suffix): 0, 1, or 2.
    pub fn table_index(self) -> u8 {
        match self {
            Episode::Episode1 => 0,
            Episode::Episode2 => 1,
            Episode::Episode4 => 2,
        }
    }

    pub fn from_table_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Episode::Episode1),
            1 => Some(Episode::Episode2),
            2 => Some(Episode::Episode4),
            _ => None,
        }
    }
}

/// One raw enemy record, decoded field by field from the map buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEnemyRecord {
    pub base: u32,
    pub reserved0: u16,
    pub num_clones: u16,
    pub reserved: [u32; 11],
    pub reserved12: f32,
    pub reserved13: u32,
    pub reserved14: u32,
    pub skin: u32,
    pub reserved15: u32,
}

impl RawEnemyRecord {
    /// On-disk record size in bytes
    pub const SIZE: usize = 72;

    /// Parse one record from a little-endian byte slice
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::InvalidMapData(format!(
                "enemy record requires {} bytes, got {}",
                Self::SIZE,
                data.len()
            )));
        }

        let mut cursor = Cursor::new(data);
        let base = cursor.read_u32::<LittleEndian>()?;
        let reserved0 = cursor.read_u16::<LittleEndian>()?;
        let num_clones = cursor.read_u16::<LittleEndian>()?;
        let mut reserved = [0u32; 11];
        for slot in reserved.iter_mut() {
            *slot = cursor.read_u32::<LittleEndian>()?;
        }
        let reserved12 = cursor.read_f32::<LittleEndian>()?;
        let reserved13 = cursor.read_u32::<LittleEndian>()?;
        let reserved14 = cursor.read_u32::<LittleEndian>()?;
        let skin = cursor.read_u32::<LittleEndian>()?;
        let reserved15 = cursor.read_u32::<LittleEndian>()?;

        Ok(RawEnemyRecord {
            base,
            reserved0,
            num_clones,
            reserved,
            reserved12,
            reserved13,
            reserved14,
            skin,
            reserved15,
        })
    }

    /// Rare/variant flag carried in the record's reserved area
    pub fn is_rare(&self) -> bool {
        self.reserved[10] & 0x0080_0000 != 0
    }
}

/// Decode a map's enemy buffer into the ordered entity list.
///
/// `stat_table` must already be resolved for the (solo, episode, difficulty)
/// the map is loaded under, via
/// [`StatTableIndex::get_subtable`](crate::StatTableIndex::get_subtable).
/// Entities are emitted strictly in record order; records with fixed escorts
/// or clone counts expand in place. Unknown base type codes yield a sentinel
/// entity and a warning rather than failing the whole map.
pub fn decode_map(
    episode: Episode,
    difficulty: u8,
    stat_table: &StatTable,
    data: &[u8],
    alt_enemies: bool,
    ids: &EnemyIdAllocator,
) -> Result<Vec<EnemyEntity>> {
    if !data.len().is_multiple_of(RawEnemyRecord::SIZE) {
        return Err(Error::InvalidMapData(format!(
            "map data length {} is not a multiple of the {}-byte record size",
            data.len(),
            RawEnemyRecord::SIZE
        )));
    }

    let mut enemies = Vec::new();
    for (index, chunk) in data.chunks_exact(RawEnemyRecord::SIZE).enumerate() {
        let record = RawEnemyRecord::parse(chunk)?;
        let context = SpawnContext {
            episode,
            difficulty,
            alt_enemies,
            skin: record.skin,
            rare: record.is_rare(),
            num_clones: record.num_clones,
        };

        let clone_tail = match rule_for(record.base) {
            Some(rule) => {
                for spawn in (rule.spawns)(&context) {
                    let experience = stat_table.row(spawn.stat_slot)?.experience;
                    enemies.push(EnemyEntity::new(
                        ids.next_id(),
                        record.base,
                        experience,
                        spawn.rt_index,
                    ));
                }
                for _ in 0..(rule.generic_escorts)(&context) {
                    enemies.push(EnemyEntity::new(ids.next_id(), record.base, 0, 0));
                }
                rule.clone_tail
            }
            None => {
                warn!(
                    "unknown enemy type {:08X} {:08X} (entry {}, offset {:#X})",
                    record.base,
                    record.skin,
                    index,
                    index * RawEnemyRecord::SIZE
                );
                enemies.push(EnemyEntity::new(
                    ids.next_id(),
                    record.base,
                    UNKNOWN_EXPERIENCE,
                    0,
                ));
                CloneTail::Append
            }
        };

        if clone_tail == CloneTail::Append {
            for _ in 0..record.num_clones {
                enemies.push(EnemyEntity::new(ids.next_id(), record.base, 0, 0));
            }
        }
    }

    Ok(enemies)
}
