//! Battle parameter (stat) table loading and lookup
//!
//! Combat statistics for every monster type live in a set of `.dat` files,
//! one per (solo, episode) combination:
//!
//! - `<prefix>.dat` / `<prefix>_on.dat` — episode 1, solo / multiplayer
//! - `<prefix>_lab.dat` / `<prefix>_lab_on.dat` — episode 2
//! - `<prefix>_ep4.dat` / `<prefix>_ep4_on.dat` — episode 4
//!
//! Each file is exactly 4 consecutive table blocks ordered by ascending
//! difficulty (0..3), with no header and no padding. A table block is 0x61
//! rows of 0x24 bytes, one row per monster-type slot (0x00..=0x60), all
//! fields little-endian.
//!
//! The whole set is loaded once at startup into a [`StatTableIndex`], which
//! is read-only afterward and safe to share across threads.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs;
use std::io::{Cursor, Read};

use crate::error::{Error, Result};

/// One monster type's combat statistics, as stored on disk.
///
/// Only `experience` is interpreted by the map decoder; the remaining fields
/// are carried through for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatRow {
    pub atp: u16,
    pub psv: u16,
    pub evp: u16,
    pub hp: u16,
    pub dfp: u16,
    pub ata: u16,
    pub lck: u16,
    pub esp: u16,
    /// Unidentified portion of the row, passed through opaquely.
    pub unknown: [u8; 12],
    pub experience: u32,
    pub difficulty: u32,
}

impl StatRow {
    /// On-disk size of one row in bytes
    pub const SIZE: usize = 0x24;

    /// Parse one row from a little-endian byte slice
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::InvalidStatTable(format!(
                "stat row requires {} bytes, got {}",
                Self::SIZE,
                data.len()
            )));
        }

        let mut cursor = Cursor::new(data);
        let atp = cursor.read_u16::<LittleEndian>()?;
        let psv = cursor.read_u16::<LittleEndian>()?;
        let evp = cursor.read_u16::<LittleEndian>()?;
        let hp = cursor.read_u16::<LittleEndian>()?;
        let dfp = cursor.read_u16::<LittleEndian>()?;
        let ata = cursor.read_u16::<LittleEndian>()?;
        let lck = cursor.read_u16::<LittleEndian>()?;
        let esp = cursor.read_u16::<LittleEndian>()?;
        let mut unknown = [0u8; 12];
        cursor.read_exact(&mut unknown)?;
        let experience = cursor.read_u32::<LittleEndian>()?;
        let difficulty = cursor.read_u32::<LittleEndian>()?;

        Ok(StatRow {
            atp,
            psv,
            evp,
            hp,
            dfp,
            ata,
            lck,
            esp,
            unknown,
            experience,
            difficulty,
        })
    }
}

/// A full stat table for one (solo, episode, difficulty) combination: one
/// [`StatRow`] per monster-type slot 0x00..=0x60.
#[derive(Debug, Clone)]
pub struct StatTable {
    rows: Vec<StatRow>,
}

impl StatTable {
    /// Number of monster-type slots per table (0x00..=0x60)
    pub const ROW_COUNT: usize = 0x61;

    /// On-disk size of one table block in bytes
    pub const SIZE: usize = Self::ROW_COUNT * StatRow::SIZE;

    /// Parse one table block from a byte slice
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::InvalidStatTable(format!(
                "stat table requires {} bytes, got {}",
                Self::SIZE,
                data.len()
            )));
        }

        let mut rows = Vec::with_capacity(Self::ROW_COUNT);
        for slot in 0..Self::ROW_COUNT {
            rows.push(StatRow::parse(&data[slot * StatRow::SIZE..])?);
        }
        Ok(StatTable { rows })
    }

    /// Get the row for a monster-type slot. Slots above 0x60 do not exist;
    /// asking for one is a caller bug, not a data condition.
    pub fn row(&self, monster_type: u8) -> Result<&StatRow> {
        self.rows
            .get(monster_type as usize)
            .ok_or_else(|| Error::InvalidArgument(format!("incorrect monster type {monster_type:#04X}")))
    }
}

/// The full 2 (solo/multi) x 3 (episode) x 4 (difficulty) grid of stat
/// tables, loaded whole at startup and immutable afterward.
pub struct StatTableIndex {
    // Indexed [solo as usize][episode][difficulty]
    tables: Vec<Vec<Vec<StatTable>>>,
}

impl StatTableIndex {
    /// Load all 6 stat files reachable from `prefix` (see module docs for
    /// the naming rule). Any missing, unreadable, or short file is fatal.
    pub fn load(prefix: &str) -> Result<Self> {
        let mut tables = Vec::with_capacity(2);
        for is_solo in 0..2u8 {
            let mut by_episode = Vec::with_capacity(3);
            for episode in 0..3u8 {
                let mut filename = prefix.to_string();
                match episode {
                    1 => filename.push_str("_lab"),
                    2 => filename.push_str("_ep4"),
                    _ => {}
                }
                if is_solo == 0 {
                    filename.push_str("_on");
                }
                filename.push_str(".dat");

                let data = fs::read(&filename)?;
                if data.len() < 4 * StatTable::SIZE {
                    return Err(Error::InvalidStatTable(format!(
                        "{}: expected at least {} bytes, got {}",
                        filename,
                        4 * StatTable::SIZE,
                        data.len()
                    )));
                }

                let mut by_difficulty = Vec::with_capacity(4);
                for difficulty in 0..4 {
                    by_difficulty.push(StatTable::parse(&data[difficulty * StatTable::SIZE..])?);
                }
                by_episode.push(by_difficulty);
            }
            tables.push(by_episode);
        }
        Ok(StatTableIndex { tables })
    }

    /// Get one stat row by full coordinates.
    ///
    /// `episode > 3`, `difficulty > 4`, and `monster_type > 0x60` are
    /// contract violations. The reserved boundary values (episode 3,
    /// difficulty 4) have no table behind them and also fail.
    pub fn get(&self, solo: bool, episode: u8, difficulty: u8, monster_type: u8) -> Result<&StatRow> {
        self.get_subtable(solo, episode, difficulty)?.row(monster_type)
    }

    /// Get the whole table for a (solo, episode, difficulty) triple, to be
    /// handed to [`decode_map`](crate::decode_map).
    pub fn get_subtable(&self, solo: bool, episode: u8, difficulty: u8) -> Result<&StatTable> {
        if episode > 3 {
            return Err(Error::InvalidArgument(format!("incorrect episode {episode}")));
        }
        if difficulty > 4 {
            return Err(Error::InvalidArgument(format!("incorrect difficulty {difficulty}")));
        }
        self.tables[solo as usize]
            .get(episode as usize)
            .and_then(|by_difficulty| by_difficulty.get(difficulty as usize))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "no stat table for episode {episode} difficulty {difficulty}"
                ))
            })
    }
}
