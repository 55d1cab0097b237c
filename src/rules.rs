//! Per-monster-family spawn rules
//!
//! Every known base type code maps to one [`SpawnRule`] describing which
//! stat-table rows and roster indices its spawns use, how many fixed escorts
//! it brings, and whether the record's own clone count appends a tail of
//! generic clones. The selector expressions encode reverse-engineered
//! conventions of the map format; treat the constants here as normative and
//! do not "correct" them, even where a rare variant reads a lower stat slot
//! than its common counterpart.
//!
//! Selector precedence: rare-bit and alt-enemy checks come first, plain
//! skin-indexed selection only applies when no special case matched.

use crate::map::Episode;

/// Variant signals extracted from one map record, against which the rule's
/// selectors are evaluated.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext {
    pub episode: Episode,
    pub difficulty: u8,
    pub alt_enemies: bool,
    /// Variant/color selector from the record
    pub skin: u32,
    /// Rare/variant flag bit from the record's reserved area
    pub rare: bool,
    /// The record's declared clone count
    pub num_clones: u16,
}

/// One typed spawn: a stat-table slot to read experience from, and the
/// game-facing roster index assigned to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub stat_slot: u8,
    pub rt_index: u32,
}

impl Spawn {
    pub const fn new(stat_slot: u8, rt_index: u32) -> Self {
        Spawn { stat_slot, rt_index }
    }
}

/// Whether the record's own clone count appends generic clones after the
/// rule's spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneTail {
    /// Append `num_clones` generic clones (the default for most families)
    Append,
    /// The rule already accounts for the clone field; no tail
    Ignore,
}

/// Dispatch descriptor for one monster family.
pub struct SpawnRule {
    /// Base type code this rule applies to
    pub base: u32,
    /// Family name, for diagnostics and tests
    pub name: &'static str,
    /// Typed spawns: primaries plus fixed typed escorts, in emission order.
    /// May be empty for codes that spawn nothing (Dubwitch, Vol Opt form 1).
    pub spawns: fn(&SpawnContext) -> Vec<Spawn>,
    /// Generic escorts (fresh id, parent's base type, no stats) emitted
    /// after the typed spawns
    pub generic_escorts: fn(&SpawnContext) -> u16,
    pub clone_tail: CloneTail,
}

fn skin_bit(cx: &SpawnContext) -> u8 {
    (cx.skin & 1) as u8
}

fn skin_mod3(cx: &SpawnContext) -> u8 {
    (cx.skin % 3) as u8
}

fn rare_bit(cx: &SpawnContext) -> u8 {
    cx.rare as u8
}

fn no_spawns(_: &SpawnContext) -> Vec<Spawn> {
    Vec::new()
}

fn no_escorts(_: &SpawnContext) -> u16 {
    0
}

/// The full rule set, one entry per known base type code.
pub static RULES: &[SpawnRule] = &[
    SpawnRule {
        base: 0x40,
        name: "Hildebear and Hildetorr",
        spawns: |cx| vec![Spawn::new(0x49 + skin_bit(cx), 1 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x41,
        name: "Rappies",
        spawns: |cx| {
            if cx.episode == Episode::Episode4 {
                // Sand Rappy and Del Rappy
                let slot = if cx.alt_enemies { 0x17 } else { 0x05 };
                vec![Spawn::new(slot + skin_bit(cx), 17 + skin_bit(cx) as u32)]
            } else if cx.skin & 1 != 0 {
                // Rare rappy; which one cannot be told from the record alone
                vec![Spawn::new(0x18 + skin_bit(cx), 0xFF)]
            } else {
                // Rag Rappy
                vec![Spawn::new(0x18, 5)]
            }
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x42,
        name: "Monest + 30 Mothmants",
        spawns: |_| {
            let mut spawns = vec![Spawn::new(0x01, 4)];
            spawns.extend(std::iter::repeat(Spawn::new(0x00, 3)).take(30));
            spawns
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x43,
        name: "Savage Wolf and Barbarous Wolf",
        spawns: |cx| vec![Spawn::new(0x02 + rare_bit(cx), 7 + rare_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x44,
        name: "Booma family",
        spawns: |cx| vec![Spawn::new(0x4B + skin_mod3(cx), 9 + skin_mod3(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x60,
        name: "Grass Assassin",
        spawns: |_| vec![Spawn::new(0x4E, 12)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x61,
        name: "Del Lily, Poison Lily, Nar Lily",
        spawns: |cx| {
            if cx.episode == Episode::Episode2 && cx.alt_enemies {
                vec![Spawn::new(0x25, 83)]
            } else {
                vec![Spawn::new(0x04 + rare_bit(cx), 13 + rare_bit(cx) as u32)]
            }
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x62,
        name: "Nano Dragon",
        spawns: |_| vec![Spawn::new(0x1A, 15)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x63,
        name: "Shark family",
        spawns: |cx| vec![Spawn::new(0x4F + skin_mod3(cx), 16 + skin_mod3(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x64,
        name: "Slime + 4 clones",
        spawns: |cx| {
            // The rare slime reads the lower stat slot.
            let mut spawns = vec![Spawn::new(
                0x2F + if cx.rare { 0 } else { 1 },
                19 + rare_bit(cx) as u32,
            )];
            spawns.extend(std::iter::repeat(Spawn::new(0x30, 19)).take(4));
            spawns
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x65,
        name: "Pan Arms, Migium, Hidoom",
        spawns: |_| vec![Spawn::new(0x31, 21), Spawn::new(0x32, 22), Spawn::new(0x33, 23)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x80,
        name: "Dubchic and Gillchic",
        spawns: |cx| {
            let rt_index = if cx.skin & 1 != 0 { 50 } else { 24 };
            vec![Spawn::new(0x1B + skin_bit(cx), rt_index)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x81,
        name: "Garanz",
        spawns: |_| vec![Spawn::new(0x1D, 25)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x82,
        name: "Sinow Beat and Gold",
        spawns: |cx| {
            let slot = if cx.rare { 0x13 } else { 0x06 };
            vec![Spawn::new(slot, 26 + rare_bit(cx) as u32)]
        },
        // A lone record still brings a squad of 4.
        generic_escorts: |cx| if cx.num_clones == 0 { 4 } else { 0 },
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x83,
        name: "Canadine",
        spawns: |_| vec![Spawn::new(0x07, 28)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x84,
        name: "Canadine Group",
        spawns: |_| {
            let mut spawns = vec![Spawn::new(0x09, 29)];
            spawns.extend(std::iter::repeat(Spawn::new(0x08, 28)).take(8));
            spawns
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x85,
        name: "Dubwitch",
        spawns: no_spawns,
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA0,
        name: "Delsaber",
        spawns: |_| vec![Spawn::new(0x52, 30)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA1,
        name: "Chaos Sorcerer + 2 Bits",
        spawns: |_| vec![Spawn::new(0x0A, 31)],
        generic_escorts: |_| 2,
        clone_tail: CloneTail::Ignore,
    },
    SpawnRule {
        base: 0xA2,
        name: "Dark Gunner",
        spawns: |_| vec![Spawn::new(0x1E, 34)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA4,
        name: "Chaos Bringer",
        spawns: |_| vec![Spawn::new(0x0D, 36)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA5,
        name: "Dark Belra",
        spawns: |_| vec![Spawn::new(0x0E, 37)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA6,
        name: "Dimenian family",
        spawns: |cx| vec![Spawn::new(0x53 + skin_mod3(cx), 41 + skin_mod3(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA7,
        name: "Bulclaw + 4 claws",
        spawns: |_| {
            let mut spawns = vec![Spawn::new(0x1F, 40)];
            spawns.extend(std::iter::repeat(Spawn::new(0x20, 38)).take(4));
            spawns
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xA8,
        name: "Claw",
        spawns: |_| vec![Spawn::new(0x20, 38)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xC0,
        name: "Dragon or Gal Gryphon",
        spawns: |cx| match cx.episode {
            Episode::Episode1 => vec![Spawn::new(0x12, 44)],
            Episode::Episode2 => vec![Spawn::new(0x1E, 77)],
            Episode::Episode4 => Vec::new(),
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xC1,
        name: "De Rol Le",
        spawns: |_| vec![Spawn::new(0x0F, 45)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xC2,
        name: "Vol Opt form 1",
        spawns: no_spawns,
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xC5,
        name: "Vol Opt form 2",
        spawns: |_| vec![Spawn::new(0x25, 46)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xC8,
        name: "Dark Falz + 510 Helpers",
        spawns: |cx| {
            // Second form on Normal, final form above
            let form_slot = if cx.difficulty != 0 { 0x38 } else { 0x37 };
            let mut spawns = vec![Spawn::new(form_slot, 47)];
            spawns.extend(std::iter::repeat(Spawn::new(0x35, 0)).take(510));
            spawns
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xCA,
        name: "Olga Flow",
        spawns: |_| vec![Spawn::new(0x2C, 78)],
        generic_escorts: |_| 0x200,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xCB,
        name: "Barba Ray",
        spawns: |_| vec![Spawn::new(0x0F, 73)],
        generic_escorts: |_| 0x2F,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xCC,
        name: "Gol Dragon",
        spawns: |_| vec![Spawn::new(0x12, 76)],
        generic_escorts: |_| 5,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD4,
        name: "Sinows Berill and Spigell",
        spawns: |cx| {
            let slot = if cx.rare { 0x13 } else { 0x06 };
            vec![Spawn::new(slot, 62 + rare_bit(cx) as u32)]
        },
        generic_escorts: |_| 4,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD5,
        name: "Merillia and Meriltas",
        spawns: |cx| vec![Spawn::new(0x4B + skin_bit(cx), 52 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD6,
        name: "Mericarol, Mericus, Merikle",
        spawns: |cx| {
            let slot = if cx.skin != 0 { 0x44 + skin_mod3(cx) } else { 0x3A };
            vec![Spawn::new(slot, 56 + skin_mod3(cx) as u32)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD7,
        name: "Ul Gibbon and Zol Gibbon",
        spawns: |cx| vec![Spawn::new(0x3B + skin_bit(cx), 59 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD8,
        name: "Gibbles",
        spawns: |_| vec![Spawn::new(0x3D, 61)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xD9,
        name: "Gee",
        spawns: |_| vec![Spawn::new(0x07, 54)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDA,
        name: "Gi Gue",
        spawns: |_| vec![Spawn::new(0x1A, 55)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDB,
        name: "Deldepth",
        spawns: |_| vec![Spawn::new(0x30, 71)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDC,
        name: "Delbiter",
        spawns: |_| vec![Spawn::new(0x0D, 72)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDD,
        name: "Dolmolm and Dolmdarl",
        spawns: |cx| vec![Spawn::new(0x4F + skin_bit(cx), 64 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDE,
        name: "Morfos",
        spawns: |_| vec![Spawn::new(0x40, 66)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xDF,
        name: "Recobox and Recons",
        spawns: |cx| {
            let mut spawns = vec![Spawn::new(0x41, 67)];
            spawns.extend(std::iter::repeat(Spawn::new(0x42, 68)).take(cx.num_clones as usize));
            spawns
        },
        generic_escorts: no_escorts,
        // The clone field counts Recons, already emitted above.
        clone_tail: CloneTail::Ignore,
    },
    SpawnRule {
        base: 0xE0,
        name: "Epsilon, Sinow Zoa and Zele",
        spawns: |cx| {
            if cx.episode == Episode::Episode2 && cx.alt_enemies {
                vec![Spawn::new(0x23, 84)]
            } else {
                vec![Spawn::new(0x43 + skin_bit(cx), 69 + skin_bit(cx) as u32)]
            }
        },
        generic_escorts: |cx| {
            if cx.episode == Episode::Episode2 && cx.alt_enemies {
                4
            } else {
                0
            }
        },
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0xE1,
        name: "Ill Gill",
        spawns: |_| vec![Spawn::new(0x26, 82)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0110,
        name: "Astark",
        spawns: |_| vec![Spawn::new(0x09, 1)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0111,
        name: "Satellite Lizard and Yowie",
        spawns: |cx| {
            let alt_offset = if cx.alt_enemies { 0x10 } else { 0 };
            vec![Spawn::new(
                0x0D + rare_bit(cx) + alt_offset,
                2 + if cx.rare { 0 } else { 1 },
            )]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0112,
        name: "Merissa A/AA",
        spawns: |cx| vec![Spawn::new(0x19 + skin_bit(cx), 4 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0113,
        name: "Girtablulu",
        spawns: |_| vec![Spawn::new(0x1F, 6)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0114,
        name: "Zu and Pazuzu",
        spawns: |cx| {
            let alt_offset = if cx.alt_enemies { 0x14 } else { 0 };
            vec![Spawn::new(0x0B + skin_bit(cx) + alt_offset, 7 + skin_bit(cx) as u32)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0115,
        name: "Boota family",
        spawns: |cx| {
            let slot = if cx.skin & 2 != 0 { 0x03 } else { skin_mod3(cx) };
            vec![Spawn::new(slot, 9 + skin_mod3(cx) as u32)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0116,
        name: "Dorphon and Eclair",
        spawns: |cx| vec![Spawn::new(0x0F + skin_bit(cx), 12 + skin_bit(cx) as u32)],
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0117,
        name: "Goran family",
        spawns: |cx| {
            let rt_index = if cx.skin & 2 != 0 {
                15
            } else if cx.skin & 1 != 0 {
                16
            } else {
                14
            };
            vec![Spawn::new(0x11 + skin_mod3(cx), rt_index)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
    SpawnRule {
        base: 0x0119,
        name: "Saint Million, Shambertin, Kondrieu",
        spawns: |cx| {
            let rt_index = if cx.rare { 21 } else { 19 + skin_bit(cx) as u32 };
            vec![Spawn::new(0x22, rt_index)]
        },
        generic_escorts: no_escorts,
        clone_tail: CloneTail::Append,
    },
];

/// Look up the rule for a base type code, if it is a known family.
pub fn rule_for(base: u32) -> Option<&'static SpawnRule> {
    RULES.iter().find(|rule| rule.base == base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SpawnContext {
        SpawnContext {
            episode: Episode::Episode1,
            difficulty: 1,
            alt_enemies: false,
            skin: 0,
            rare: false,
            num_clones: 0,
        }
    }

    #[test]
    fn test_rule_for_known_and_unknown() {
        assert_eq!(rule_for(0x44).unwrap().name, "Booma family");
        assert_eq!(rule_for(0x0119).unwrap().base, 0x0119);
        assert!(rule_for(0xFFFF_FFFF).is_none());
        assert!(rule_for(0x45).is_none());
    }

    #[test]
    fn test_booma_skin_mod3() {
        let rule = rule_for(0x44).unwrap();
        for skin in 0..6u32 {
            let spawns = (rule.spawns)(&SpawnContext { skin, ..context() });
            assert_eq!(spawns, vec![Spawn::new(0x4B + (skin % 3) as u8, 9 + skin % 3)]);
        }
    }

    #[test]
    fn test_wolf_rare_bit() {
        let rule = rule_for(0x43).unwrap();
        assert_eq!((rule.spawns)(&context()), vec![Spawn::new(0x02, 7)]);
        let spawns = (rule.spawns)(&SpawnContext { rare: true, ..context() });
        assert_eq!(spawns, vec![Spawn::new(0x03, 8)]);
    }

    #[test]
    fn test_rappy_episode_and_alt_precedence() {
        let rule = rule_for(0x41).unwrap();

        // Episode 1: common and rare rappy; the rare one is unclassified.
        assert_eq!((rule.spawns)(&context()), vec![Spawn::new(0x18, 5)]);
        let rare = (rule.spawns)(&SpawnContext { skin: 1, ..context() });
        assert_eq!(rare, vec![Spawn::new(0x19, 0xFF)]);

        // Episode 4: the alt flag switches the whole stat block.
        let ep4 = SpawnContext { episode: Episode::Episode4, ..context() };
        assert_eq!((rule.spawns)(&ep4), vec![Spawn::new(0x05, 17)]);
        let ep4_alt = SpawnContext { alt_enemies: true, skin: 1, ..ep4 };
        assert_eq!((rule.spawns)(&ep4_alt), vec![Spawn::new(0x18, 18)]);
    }

    #[test]
    fn test_rare_slime_reads_lower_slot() {
        let rule = rule_for(0x64).unwrap();
        let common = (rule.spawns)(&context());
        let rare = (rule.spawns)(&SpawnContext { rare: true, ..context() });
        assert_eq!(common[0], Spawn::new(0x30, 19));
        assert_eq!(rare[0], Spawn::new(0x2F, 20));
        // 4 fixed slime clones either way
        assert_eq!(common.len(), 5);
        assert_eq!(&common[1..], &[Spawn::new(0x30, 19); 4]);
    }

    #[test]
    fn test_lily_alt_takes_precedence_over_rare() {
        let rule = rule_for(0x61).unwrap();
        let cx = SpawnContext {
            episode: Episode::Episode2,
            alt_enemies: true,
            rare: true,
            ..context()
        };
        assert_eq!((rule.spawns)(&cx), vec![Spawn::new(0x25, 83)]);
        let cx = SpawnContext { episode: Episode::Episode2, rare: true, ..context() };
        assert_eq!((rule.spawns)(&cx), vec![Spawn::new(0x05, 14)]);
    }

    #[test]
    fn test_dragon_by_episode() {
        let rule = rule_for(0xC0).unwrap();
        assert_eq!((rule.spawns)(&context()), vec![Spawn::new(0x12, 44)]);
        let ep2 = SpawnContext { episode: Episode::Episode2, ..context() };
        assert_eq!((rule.spawns)(&ep2), vec![Spawn::new(0x1E, 77)]);
        let ep4 = SpawnContext { episode: Episode::Episode4, ..context() };
        assert!((rule.spawns)(&ep4).is_empty());
    }

    #[test]
    fn test_dark_falz_difficulty_form() {
        let rule = rule_for(0xC8).unwrap();
        let normal = (rule.spawns)(&SpawnContext { difficulty: 0, ..context() });
        let hard = (rule.spawns)(&SpawnContext { difficulty: 1, ..context() });
        assert_eq!(normal[0], Spawn::new(0x37, 47));
        assert_eq!(hard[0], Spawn::new(0x38, 47));
        assert_eq!(normal.len(), 511);
        assert_eq!(normal[1], Spawn::new(0x35, 0));
    }

    #[test]
    fn test_sinow_beat_squad_when_alone() {
        let rule = rule_for(0x82).unwrap();
        assert_eq!((rule.generic_escorts)(&context()), 4);
        assert_eq!((rule.generic_escorts)(&SpawnContext { num_clones: 3, ..context() }), 0);
        // Sinow Gold reads a lower stat slot than its rt_index suggests.
        let gold = (rule.spawns)(&SpawnContext { rare: true, ..context() });
        assert_eq!(gold, vec![Spawn::new(0x13, 27)]);
    }

    #[test]
    fn test_recobox_consumes_clone_field() {
        let rule = rule_for(0xDF).unwrap();
        assert_eq!(rule.clone_tail, CloneTail::Ignore);
        let spawns = (rule.spawns)(&SpawnContext { num_clones: 3, ..context() });
        assert_eq!(spawns[0], Spawn::new(0x41, 67));
        assert_eq!(spawns.len(), 4);
        assert_eq!(&spawns[1..], &[Spawn::new(0x42, 68); 3]);
    }

    #[test]
    fn test_epsilon_alt_escorts() {
        let rule = rule_for(0xE0).unwrap();
        let alt = SpawnContext { episode: Episode::Episode2, alt_enemies: true, ..context() };
        assert_eq!((rule.spawns)(&alt), vec![Spawn::new(0x23, 84)]);
        assert_eq!((rule.generic_escorts)(&alt), 4);
        let plain = SpawnContext { episode: Episode::Episode2, skin: 1, ..context() };
        assert_eq!((rule.spawns)(&plain), vec![Spawn::new(0x44, 70)]);
        assert_eq!((rule.generic_escorts)(&plain), 0);
    }

    #[test]
    fn test_satellite_lizard_alt_and_rare() {
        let rule = rule_for(0x0111).unwrap();
        assert_eq!((rule.spawns)(&context()), vec![Spawn::new(0x0D, 3)]);
        let rare = SpawnContext { rare: true, ..context() };
        assert_eq!((rule.spawns)(&rare), vec![Spawn::new(0x0E, 2)]);
        let alt_rare = SpawnContext { alt_enemies: true, rare: true, ..context() };
        assert_eq!((rule.spawns)(&alt_rare), vec![Spawn::new(0x1E, 2)]);
    }

    #[test]
    fn test_boota_skin_bit2_precedence() {
        let rule = rule_for(0x0115).unwrap();
        assert_eq!((rule.spawns)(&SpawnContext { skin: 1, ..context() }), vec![Spawn::new(0x01, 10)]);
        // Bit 2 overrides the per-skin slot but not the rt_index.
        assert_eq!((rule.spawns)(&SpawnContext { skin: 2, ..context() }), vec![Spawn::new(0x03, 11)]);
    }

    #[test]
    fn test_goran_rt_expression() {
        let rule = rule_for(0x0117).unwrap();
        assert_eq!((rule.spawns)(&SpawnContext { skin: 0, ..context() }), vec![Spawn::new(0x11, 14)]);
        assert_eq!((rule.spawns)(&SpawnContext { skin: 1, ..context() }), vec![Spawn::new(0x12, 16)]);
        assert_eq!((rule.spawns)(&SpawnContext { skin: 2, ..context() }), vec![Spawn::new(0x13, 15)]);
    }

    #[test]
    fn test_saint_million_rare_override() {
        let rule = rule_for(0x0119).unwrap();
        assert_eq!((rule.spawns)(&SpawnContext { skin: 1, ..context() }), vec![Spawn::new(0x22, 20)]);
        let rare = SpawnContext { skin: 1, rare: true, ..context() };
        assert_eq!((rule.spawns)(&rare), vec![Spawn::new(0x22, 21)]);
    }
}
