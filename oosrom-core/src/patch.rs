use crate::rom::Rom;
use crate::search::search_objects;
use crate::Result;

// 0xe0 packs count 7, param 0; 0x32 0x00 is a keese.
const RANDOM_ENTITY_FILL: [u8; 3] = [0xe0, 0x32, 0x00];
const SPECIFIC_ENTITY_FILL: [u8; 2] = [0x32, 0x00];

/// Rewrite every enemy placement in the ROM to keese and return the
/// patched image. Both overwrites are fixed-width, so addresses recorded
/// by a scan stay valid after its edits; the second pass rescans the
/// buffer the first pass already edited.
pub fn keesanity(rom: &Rom) -> Result<Rom> {
    let mut patched = rom.clone();

    for hit in search_objects(&patched, 0xf6, None, None)? {
        let addr = hit.interaction.address;
        patched.write(addr.bank, addr.offset, &RANDOM_ENTITY_FILL)?;
    }

    for hit in search_objects(&patched, 0xf7, None, None)? {
        let addr = hit.interaction.address;
        patched.write(addr.bank, addr.offset, &SPECIFIC_ENTITY_FILL)?;
    }

    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::{full_addr, OBJECT_PTR_TABLE};
    use crate::testutil::{blank_rom, poke, poke_ptr};

    // One stream shared by every room: a random-entity record and a
    // specific-entity record.
    fn enemy_rom() -> Rom {
        let mut rom = blank_rom();
        let (bank, base) = OBJECT_PTR_TABLE;

        for group in 0..6u16 {
            poke_ptr(&mut rom, bank, base + group * 2, 0x6000);
        }
        for room in 0..0x100u16 {
            poke_ptr(&mut rom, bank, 0x6000 + room * 2, 0x7000);
        }
        #[rustfmt::skip]
        let stream = [
            0xf6, 0x47, 0x39, 0x01,
            0xf7, 0x02, 0x0a, 0x00, 0x18, 0x48,
            0xff,
        ];
        poke(&mut rom, bank, 0x7000, &stream);
        rom
    }

    #[test]
    fn enemies_become_keese() {
        let rom = enemy_rom();
        let patched = keesanity(&rom).unwrap();

        let bank = OBJECT_PTR_TABLE.0;
        let stream = full_addr(bank, 0x7000);
        #[rustfmt::skip]
        let expected = [
            0xf6, 0xe0, 0x32, 0x00,
            0xf7, 0x02, 0x32, 0x00, 0x18, 0x48,
            0xff,
        ];
        assert_eq!(&patched.as_bytes()[stream..stream + expected.len()], &expected);
    }

    #[test]
    fn patching_twice_changes_nothing_more() {
        let rom = enemy_rom();
        let once = keesanity(&rom).unwrap();
        let twice = keesanity(&once).unwrap();
        assert_eq!(once.as_bytes(), twice.as_bytes());
    }
}
