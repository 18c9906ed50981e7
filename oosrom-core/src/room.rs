use serde::ser::Serializer;
use serde::Serialize;

use crate::chest::{chest_for_room, Chest};
use crate::interaction::{read_stream, Interaction};
use crate::names;
use crate::rom::{Rom, MUSIC_PTR_TABLE, OBJECT_PTR_TABLE};
use crate::Result;

/// A music or sound-effect id; serializes as its display name when one is
/// known, otherwise as the raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Music(pub u8);

impl Serialize for Music {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match names::music_name(self.0) {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u8(self.0),
        }
    }
}

/// Read the music id assigned to a room. The music table stores one byte
/// per room behind a single level of per-group indirection.
pub fn read_music(rom: &Rom, group: u8, room: u8) -> Result<u8> {
    let addr = rom
        .table_ptr(MUSIC_PTR_TABLE, group as u16)?
        .wrapping_add(room as u16);
    rom.read_byte(MUSIC_PTR_TABLE.0, addr)
}

/// Resolve the object table down to a room's interaction stream and decode
/// it. The table is two-level: group pointer to a 256-entry array of room
/// pointers, each pointing at the room's stream.
pub fn read_objects(rom: &Rom, group: u8, room: u8, named: bool) -> Result<Vec<Interaction>> {
    let (bank, _) = OBJECT_PTR_TABLE;
    let room_ptrs = rom.table_ptr(OBJECT_PTR_TABLE, group as u16)?;
    let addr = rom.read_ptr(bank, room_ptrs.wrapping_add(room as u16 * 2))?;
    read_stream(rom, bank, addr, named)
}

/// Everything `getroom` reports about one room.
#[derive(Debug, Serialize)]
pub struct RoomData {
    pub group: u8,
    pub room: u8,
    pub music: Music,
    pub objects: Vec<Interaction>,
    pub chest: Option<Chest>,
}

pub fn room_data(rom: &Rom, group: u8, room: u8) -> Result<RoomData> {
    Ok(RoomData {
        group,
        room,
        music: Music(read_music(rom, group, room)?),
        objects: read_objects(rom, group, room, true)?,
        chest: chest_for_room(rom, group, room)?,
    })
}
