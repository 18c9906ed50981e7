//! Static display-name data for decoded records. Nothing here is read from
//! the ROM; ids missing from these tables simply print as raw numbers.

pub(crate) struct NameEntry {
    pub id: u8,
    pub name: &'static str,
    pub subs: &'static [(u8, &'static str)],
}

pub(crate) fn find(table: &'static [NameEntry], id: u8) -> Option<&'static NameEntry> {
    table.iter().find(|entry| entry.id == id)
}

pub(crate) fn music_name(id: u8) -> Option<&'static str> {
    MUSIC.iter().find(|(m, _)| *m == id).map(|(_, name)| *name)
}

// Music and sound-effect ids share one table.
const MUSIC: &[(u8, &'static str)] = &[
    (0x03, "overworld"),
    (0x0a, "horon village"),
    (0x0d, "essence room"),
    (0x0e, "house"),
    (0x0f, "fairy fountain"),
    (0x12, "hero's cave"),
    (0x13, "gnarled root dungeon"),
    (0x14, "snake's remains"),
    (0x15, "poison moth's lair"),
    (0x16, "dancing dragon dungeon"),
    (0x17, "unicorn's cave"),
    (0x18, "ancient ruins"),
    (0x19, "explorer's crypt"),
    (0x1a, "sword and shield maze"),
    (0x28, "subrosia"),
    (0x35, "samasa desert"),
    (0x36, "cave"),
    (0x3e, "goron mountain"),
    (0x4c, "got item"),
    (0x4d, "puzzle solved (short)"),
    (0x4e, "damage enemy"),
    (0x4f, "damage link"),
    (0x50, "ping"),
    (0x51, "shoot rock"),
    (0x52, "engulf"),
    (0x53, "jump"),
    (0x54, "open menu"),
    (0x55, "close menu"),
    (0x56, "select option"),
    (0x57, "restore heart"),
    (0x58, "deflect"),
    (0x59, "falling enemy"),
    (0x5a, "menu says no"),
    (0x5b, "puzzle solved (long)"),
    (0x5c, "preparing magic"),
    (0x5d, "sword beam"),
    (0x5e, "small key"),
    (0x60, "low hearts"),
    (0x70, "onox walk"),
    (0x80, "minecart"),
    (0x90, "gale seed"),
    (0xa0, "dimitri?"),
    (0xb0, "rumble"),
    (0xc0, "spell?"),
    (0xd0, "scent seed impact"),
    (0xd1, "growl?"),
    (0xd2, "thunder"),
    (0xd3, "whirlwind"),
];

pub(crate) const NV_INTERACTIONS: &[NameEntry] = &[];

pub(crate) const ENTITIES: &[NameEntry] = &[
    NameEntry {
        id: 0x09,
        name: "octorok",
        subs: &[(0x00, "red 0x00"), (0x01, "red 0x01")],
    },
    NameEntry {
        id: 0x0a,
        name: "goriya",
        subs: &[(0x00, "boomerang")],
    },
    NameEntry {
        id: 0x0e,
        name: "trap",
        subs: &[(0x00, "spinner"), (0x01, "blade")],
    },
    NameEntry {
        id: 0x31,
        name: "stalfos",
        subs: &[(0x00, "blue")],
    },
    NameEntry {
        id: 0x32,
        name: "keese",
        subs: &[],
    },
    NameEntry {
        id: 0x34,
        name: "zol",
        subs: &[(0x01, "red")],
    },
    NameEntry {
        id: 0x35,
        name: "floormaster",
        subs: &[],
    },
    NameEntry {
        id: 0x38,
        name: "great fairy",
        subs: &[],
    },
    NameEntry {
        id: 0x39,
        name: "fire keese",
        subs: &[],
    },
    NameEntry {
        id: 0x43,
        name: "gel",
        subs: &[],
    },
    NameEntry {
        id: 0x53,
        name: "dragonfly",
        subs: &[],
    },
    NameEntry {
        id: 0x59,
        name: "fixed drop",
        subs: &[
            (0x00, "fairy"),
            (0x04, "bombs"),
            (0x05, "ember seeds"),
            (0x09, "mystery seeds"),
        ],
    },
    NameEntry {
        id: 0x5a,
        name: "seed tree",
        subs: &[
            (0x00, "ember"),
            (0x01, "mystery"),
            (0x02, "scent"),
            (0x03, "pegasus"),
            (0x04, "gale (sunken city)"),
            (0x05, "gale (tarm ruins)"),
        ],
    },
    NameEntry {
        id: 0x70,
        name: "goriya bros",
        subs: &[],
    },
    NameEntry {
        id: 0x78,
        name: "aquamentus",
        subs: &[],
    },
];

pub(crate) const DV_INTERACTIONS: &[NameEntry] = &[
    NameEntry {
        id: 0x12,
        name: "dungeon",
        subs: &[
            (0x00, "entry text"),
            (0x01, "small key when room cleared"),
            (0x02, "chest when room cleared"),
            (0x04, "stairs when room cleared"),
        ],
    },
    NameEntry {
        id: 0x13,
        name: "push block trigger",
        subs: &[],
    },
    NameEntry {
        id: 0x1e,
        name: "doors",
        subs: &[
            (0x04, "N opens on trigger"),
            (0x08, "N opens when room cleared"),
            (0x09, "E opens when room cleared"),
            (0x0a, "S opens when room cleared"),
            (0x0b, "W opens when room cleared"),
            (0x14, "N opens for torches"),
            (0x15, "W opens for torches"),
        ],
    },
    NameEntry {
        id: 0x38,
        name: "d1 old man",
        subs: &[],
    },
    NameEntry {
        id: 0x46,
        name: "shopkeeper",
        subs: &[],
    },
    NameEntry {
        id: 0x47,
        name: "shop item",
        subs: &[],
    },
    NameEntry {
        id: 0x6b,
        name: "placed item",
        subs: &[
            (0x0a, "piece of heart"),
            (0x91, "gasha seed"),
            (0x1f, "gasha seed"),
            (0x20, "seed satchel"),
        ],
    },
    NameEntry {
        id: 0x78,
        name: "toggle tile",
        subs: &[],
    },
    NameEntry {
        id: 0x7e,
        name: "miniboss portal",
        subs: &[],
    },
    NameEntry {
        id: 0x7f,
        name: "essence",
        subs: &[],
    },
    NameEntry {
        id: 0x9d,
        name: "impa",
        subs: &[],
    },
    NameEntry {
        id: 0xc6,
        name: "wooden sword",
        subs: &[],
    },
    NameEntry {
        id: 0xc7,
        name: "0xc7",
        subs: &[(0x04, "renewable bush")],
    },
    NameEntry {
        id: 0xdc,
        name: "warp",
        subs: &[(0x01, "doorway"), (0x02, "chimney")],
    },
    NameEntry {
        id: 0x31,
        name: "subrosia portal",
        subs: &[],
    },
    NameEntry {
        id: 0xe2,
        name: "statue eyes",
        subs: &[],
    },
];

pub(crate) const PARTS: &[NameEntry] = &[];

pub(crate) const TREASURES: &[NameEntry] = &[
    NameEntry {
        id: 0x00,
        name: "none",
        subs: &[],
    },
    NameEntry {
        id: 0x03,
        name: "bombs",
        subs: &[(0x00, "10 count")],
    },
    NameEntry {
        id: 0x05,
        name: "sword",
        subs: &[(0x00, "L-1")],
    },
    NameEntry {
        id: 0x06,
        name: "boomerang",
        subs: &[(0x01, "L-2")],
    },
    NameEntry {
        id: 0x08,
        name: "magnet gloves",
        subs: &[],
    },
    NameEntry {
        id: 0x13,
        name: "slingshot",
        subs: &[(0x00, "L-1"), (0x01, "L-2")],
    },
    NameEntry {
        id: 0x16,
        name: "power bracelet",
        subs: &[],
    },
    NameEntry {
        id: 0x17,
        name: "feather",
        subs: &[(0x00, "L-1"), (0x01, "L-2")],
    },
    NameEntry {
        id: 0x28,
        name: "rupees",
        subs: &[
            (0x00, "1 count"),
            (0x01, "5 count"),
            (0x02, "10 count"),
            (0x03, "20 count"),
            (0x04, "30 count"),
            (0x05, "50 count"),
            (0x06, "100 count"),
        ],
    },
    NameEntry {
        id: 0x2d,
        name: "ring",
        subs: &[
            (0x04, "discovery ring"),
            (0x05, "moblin ring"),
            (0x06, "steadfast ring"),
            (0x07, "rang ring L-1"),
            (0x08, "blast ring"),
            (0x09, "quicksand ring"),
            (0x0a, "quicksand ring"),
            (0x0b, "armor ring L-2"),
            (0x0e, "power ring L-1"),
            (0x10, "subrosian ring"),
        ],
    },
    NameEntry {
        id: 0x2b,
        name: "piece of heart",
        subs: &[],
    },
    NameEntry {
        id: 0x30,
        name: "small key",
        subs: &[],
    },
    NameEntry {
        id: 0x31,
        name: "boss key",
        subs: &[],
    },
    NameEntry {
        id: 0x32,
        name: "compass",
        subs: &[],
    },
    NameEntry {
        id: 0x33,
        name: "dungeon map",
        subs: &[],
    },
    NameEntry {
        id: 0x34,
        name: "gasha seed",
        subs: &[],
    },
    NameEntry {
        id: 0x4f,
        name: "x-shaped jewel",
        subs: &[],
    },
    NameEntry {
        id: 0x50,
        name: "red ore",
        subs: &[],
    },
    NameEntry {
        id: 0x51,
        name: "blue ore",
        subs: &[],
    },
    NameEntry {
        id: 0x54,
        name: "master's plaque",
        subs: &[],
    },
];
