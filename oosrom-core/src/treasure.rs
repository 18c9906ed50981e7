use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::rom::{Rom, TREASURE_PTR_TABLE};
use crate::Result;

/// The raw 4-byte attribute block of one treasure, with the bank-relative
/// address it was found at. Serializes as `[addr, b0, b1, b2, b3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreasureBlock {
    pub addr: u16,
    pub bytes: [u8; 4],
}

impl Serialize for TreasureBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(5))?;
        seq.serialize_element(&self.addr)?;
        for byte in &self.bytes {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }
}

/// Locate a treasure's attribute block. An entry whose first byte has the
/// high bit set indirects through a pointer at its second byte; the sub-id
/// then indexes 4-byte records from whichever base resulted.
pub fn treasure_block(rom: &Rom, id: u8, subid: u8) -> Result<TreasureBlock> {
    let (bank, base) = TREASURE_PTR_TABLE;

    let mut addr = base.wrapping_add(id as u16 * 4);
    if rom.read_byte(bank, addr)? & 0x80 != 0 {
        addr = rom.read_ptr(bank, addr.wrapping_add(1))?;
    }
    addr = addr.wrapping_add(subid as u16 * 4);

    Ok(TreasureBlock {
        addr,
        bytes: [
            rom.read_byte(bank, addr)?,
            rom.read_byte(bank, addr.wrapping_add(1))?,
            rom.read_byte(bank, addr.wrapping_add(2))?,
            rom.read_byte(bank, addr.wrapping_add(3))?,
        ],
    })
}
