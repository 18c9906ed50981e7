use serde::ser::Serializer;
use serde::Serialize;

use crate::interaction::{read_stream, Interaction};
use crate::room::{read_music, Music};
use crate::rom::{Rom, OBJECT_PTR_TABLE};
use crate::Result;

// Only the first six groups hold room object data.
const SEARCH_GROUPS: std::ops::Range<u8> = 0..6;

/// One whole-ROM search match: the record plus its room location and that
/// room's music id. Serializes flat, annotations first.
#[derive(Debug)]
pub struct SearchHit {
    pub location: (u8, u8),
    pub music: Music,
    pub interaction: Interaction,
}

impl Serialize for SearchHit {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("location", &self.location)?;
        map.serialize_entry("music", &self.music)?;
        self.interaction.serialize_fields(&mut map)?;
        map.end()
    }
}

/// Decode every room of every searchable group in raw mode and collect the
/// records matching `mode` and, when given, the id and sub-id.
pub fn search_objects(
    rom: &Rom,
    mode: u8,
    id: Option<u8>,
    subid: Option<u8>,
) -> Result<Vec<SearchHit>> {
    let (bank, _) = OBJECT_PTR_TABLE;
    let mut hits = Vec::new();

    for group in SEARCH_GROUPS {
        let room_ptrs = rom.table_ptr(OBJECT_PTR_TABLE, group as u16)?;

        for room in 0..=0xffu8 {
            let addr = rom.read_ptr(bank, room_ptrs.wrapping_add(room as u16 * 2))?;

            for object in read_stream(rom, bank, addr, false)? {
                if object.mode() != mode {
                    continue;
                }
                let variety = object.variety();
                if let Some(want) = id {
                    if variety.id != want {
                        continue;
                    }
                }
                if let Some(want) = subid {
                    if variety.subid != want {
                        continue;
                    }
                }

                hits.push(SearchHit {
                    location: (group, room),
                    music: Music(read_music(rom, group, room)?),
                    interaction: object,
                });
            }
        }
    }

    Ok(hits)
}
