//! # psomap
//!
//! A Rust library for decoding PSO battle parameter tables and map enemy
//! data into ordered, typed enemy entities.
//!
//! ## Overview
//!
//! A dungeon's enemy population ships as a flat buffer of fixed-layout
//! binary records. This library provides:
//!
//! - Loading the per-(solo, episode, difficulty) battle parameter tables
//!   from their `.dat` files into an immutable, shareable [`StatTableIndex`]
//! - Checked, field-by-field decoding of the 72-byte map enemy records
//! - A data-driven dispatch table expanding each record into its spawns:
//!   variant/skin-selected stat rows, roster indices, fixed escorts, and
//!   generic clones
//! - Process-unique, strictly increasing enemy identifiers via an atomic
//!   [`EnemyIdAllocator`] shared across decode calls
//!
//! Unrecognized base type codes never abort a decode; they produce a
//! sentinel entity and a `tracing` warning. Only structurally malformed
//! buffers and out-of-range table lookups fail.
//!
//! ## Example
//!
//! ```rust,no_run
//! use psomap::{decode_map, EnemyIdAllocator, Episode, StatTableIndex};
//!
//! fn main() -> psomap::Result<()> {
//!     let index = StatTableIndex::load("system/blueburst/BattleParamEntry")?;
//!     let ids = EnemyIdAllocator::new();
//!
//!     let episode = Episode::Episode1;
//!     let table = index.get_subtable(false, episode.table_index(), 2)?;
//!     let map_data = std::fs::read("system/maps/map_forest01_00e.dat")?;
//!
//!     for enemy in decode_map(episode, 2, table, &map_data, false, &ids)? {
//!         println!("{}", enemy);
//!     }
//!     Ok(())
//! }
//! ```

pub mod enemy;
pub mod error;
pub mod map;
pub mod rules;
pub mod stats;

pub use enemy::{EnemyEntity, EnemyIdAllocator, UNKNOWN_EXPERIENCE};
pub use error::{Error, Result};
pub use map::{decode_map, Episode, RawEnemyRecord};
pub use rules::{rule_for, SpawnContext, SpawnRule};
pub use stats::{StatRow, StatTable, StatTableIndex};
