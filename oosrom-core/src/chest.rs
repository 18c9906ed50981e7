use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::interaction::{Address, Variety};
use crate::names;
use crate::room::read_music;
use crate::rom::{Rom, CHEST_PTR_TABLE};
use crate::Result;

/// One chest as reported for a single room. The address points at the
/// record's treasure id byte.
#[derive(Debug, Serialize)]
pub struct Chest {
    pub address: Address,
    pub treasure: Variety,
}

/// One chest as reported by a whole-group scan, annotated with its room's
/// music id.
#[derive(Debug)]
pub struct GroupChest {
    pub address: Address,
    pub location: (u8, u8),
    pub music: u8,
    pub treasure: Variety,
}

// Group scans print music as an [id, name] pair when the id is known.
struct MusicWithName(u8);

impl Serialize for MusicWithName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match names::music_name(self.0) {
            Some(name) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&self.0)?;
                seq.serialize_element(name)?;
                seq.end()
            }
            None => serializer.serialize_u8(self.0),
        }
    }
}

impl Serialize for GroupChest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("address", &self.address)?;
        map.serialize_entry("location", &self.location)?;
        map.serialize_entry("music", &MusicWithName(self.music))?;
        map.serialize_entry("treasure", &self.treasure)?;
        map.end()
    }
}

/// Find the chest placed in a room, if any. First matching record wins.
pub fn chest_for_room(rom: &Rom, group: u8, room: u8) -> Result<Option<Chest>> {
    let (bank, _) = CHEST_PTR_TABLE;
    let mut addr = rom.table_ptr(CHEST_PTR_TABLE, group as u16)?;

    // info byte 0xff ends a group's chest table
    loop {
        let info = rom.read_byte(bank, addr)?;
        if info == 0xff {
            return Ok(None);
        }

        let chest_room = rom.read_byte(bank, addr.wrapping_add(1))?;
        if chest_room == room {
            let id = rom.read_byte(bank, addr.wrapping_add(2))?;
            let subid = rom.read_byte(bank, addr.wrapping_add(3))?;
            return Ok(Some(Chest {
                address: Address::new(bank, addr.wrapping_add(2)),
                treasure: Variety::lookup(names::TREASURES, id, subid),
            }));
        }

        addr = addr.wrapping_add(4);
    }
}

/// Collect every chest in a group.
pub fn chests_in_group(rom: &Rom, group: u8) -> Result<Vec<GroupChest>> {
    let (bank, _) = CHEST_PTR_TABLE;
    let mut addr = rom.table_ptr(CHEST_PTR_TABLE, group as u16)?;

    let mut chests = Vec::new();
    loop {
        let info = rom.read_byte(bank, addr)?;
        if info == 0xff {
            return Ok(chests);
        }

        let room = rom.read_byte(bank, addr.wrapping_add(1))?;
        let id = rom.read_byte(bank, addr.wrapping_add(2))?;
        let subid = rom.read_byte(bank, addr.wrapping_add(3))?;
        chests.push(GroupChest {
            address: Address::new(bank, addr.wrapping_add(2)),
            location: (group, room),
            music: read_music(rom, group, room)?,
            treasure: Variety::lookup(names::TREASURES, id, subid),
        });

        addr = addr.wrapping_add(4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{blank_rom, poke, poke_ptr};

    const GROUP: u8 = 0x03;
    const TABLE: u16 = 0x6200;

    fn chest_rom() -> Rom {
        let mut rom = blank_rom();
        let (bank, base) = CHEST_PTR_TABLE;
        poke_ptr(&mut rom, bank, base + GROUP as u16 * 2, TABLE);
        #[rustfmt::skip]
        let records = [
            0x10, 0x44, 0x30, 0x00,
            0x20, 0x51, 0x2d, 0x04,
            0x00, 0x63, 0x28, 0x05,
            0xff,
        ];
        poke(&mut rom, bank, TABLE, &records);
        rom
    }

    #[test]
    fn scan_stops_at_the_sentinel() {
        let rom = chest_rom();
        let chests = chests_in_group(&rom, GROUP).unwrap();
        assert_eq!(chests.len(), 3);

        assert_eq!(chests[0].location, (GROUP, 0x44));
        assert_eq!(chests[0].address, Address::new(CHEST_PTR_TABLE.0, TABLE + 2));
        assert_eq!(chests[0].treasure.name(), Some("small key"));

        assert_eq!(chests[1].treasure.id, 0x2d);
        assert_eq!(chests[1].treasure.subid, 0x04);
        assert_eq!(chests[2].location, (GROUP, 0x63));
        assert_eq!(chests[2].address, Address::new(CHEST_PTR_TABLE.0, TABLE + 10));
    }

    #[test]
    fn room_lookup_returns_the_first_match() {
        let rom = chest_rom();

        let chest = chest_for_room(&rom, GROUP, 0x51).unwrap().unwrap();
        assert_eq!(chest.address, Address::new(CHEST_PTR_TABLE.0, TABLE + 6));
        assert_eq!(chest.treasure.name(), Some("ring"));
    }

    #[test]
    fn room_lookup_misses_when_the_sentinel_comes_first() {
        let rom = chest_rom();
        assert!(chest_for_room(&rom, GROUP, 0x99).unwrap().is_none());
    }

    #[test]
    fn group_chests_carry_their_rooms_music() {
        let mut rom = chest_rom();
        let (mbank, mbase) = crate::rom::MUSIC_PTR_TABLE;
        poke_ptr(&mut rom, mbank, mbase + GROUP as u16 * 2, 0x5200);
        poke(&mut rom, mbank, 0x5200 + 0x44, &[0x28]);

        let chests = chests_in_group(&rom, GROUP).unwrap();
        assert_eq!(chests[0].music, 0x28);
        assert_eq!(chests[1].music, 0x00);
    }
}
