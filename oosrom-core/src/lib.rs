use thiserror::Error;

mod chest;
mod interaction;
mod names;
mod patch;
mod room;
mod rom;
mod search;
mod treasure;

pub use chest::{chest_for_room, chests_in_group, Chest, GroupChest};
pub use interaction::{read_stream, Address, Interaction, InteractionKind, Variety};
pub use patch::keesanity;
pub use room::{read_music, read_objects, room_data, Music, RoomData};
pub use rom::{
    full_addr, Rom, BANK_SIZE, CHEST_PTR_TABLE, MUSIC_PTR_TABLE, OBJECT_PTR_TABLE,
    TREASURE_PTR_TABLE,
};
pub use search::{search_objects, SearchHit};
pub use treasure::{treasure_block, TreasureBlock};

#[derive(Debug, Error)]
pub enum RomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("address {bank:#04x}:{addr:#06x} (absolute {abs:#x}) is outside the ROM image")]
    AddressOutOfRange { bank: u8, addr: u16, abs: usize },

    #[error("interaction pointer chain at {bank:#04x}:{addr:#06x} nests deeper than {max} levels")]
    ChainTooDeep { bank: u8, addr: u16, max: usize },
}

pub type Result<T> = std::result::Result<T, RomError>;

#[cfg(test)]
pub(crate) mod testutil {
    use crate::rom::Rom;

    /// A zeroed image large enough to cover every fixed table location.
    pub fn blank_rom() -> Rom {
        Rom::from_bytes(vec![0; 0x100000])
    }

    pub fn poke(rom: &mut Rom, bank: u8, addr: u16, bytes: &[u8]) {
        rom.write(bank, addr, bytes).unwrap();
    }

    pub fn poke_ptr(rom: &mut Rom, bank: u8, addr: u16, value: u16) {
        poke(rom, bank, addr, &value.to_le_bytes());
    }
}
