use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::names::{self, NameEntry};
use crate::rom::Rom;
use crate::{Result, RomError};

// Pointer-chain records may nest; real room data uses a single level.
const MAX_CHAIN_DEPTH: usize = 8;

/// A bank-relative address, stored by every decoded record so later passes
/// (the keesanity patch) can overwrite the exact bytes it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub bank: u8,
    pub offset: u16,
}

impl Address {
    pub fn new(bank: u8, offset: u16) -> Address {
        Address { bank, offset }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.bank)?;
        seq.serialize_element(&self.offset)?;
        seq.end()
    }
}

/// An (id, sub-id) pair, optionally resolved to display names. Serializes
/// as a 2-, 3-, or 4-element sequence depending on what resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variety {
    pub id: u8,
    pub subid: u8,
    name: Option<&'static str>,
    sub_name: Option<&'static str>,
}

impl Variety {
    pub(crate) fn raw(id: u8, subid: u8) -> Variety {
        Variety {
            id,
            subid,
            name: None,
            sub_name: None,
        }
    }

    pub(crate) fn lookup(table: &'static [NameEntry], id: u8, subid: u8) -> Variety {
        match names::find(table, id) {
            Some(entry) => Variety {
                id,
                subid,
                name: Some(entry.name),
                sub_name: entry
                    .subs
                    .iter()
                    .find(|(sub, _)| *sub == subid)
                    .map(|(_, name)| *name),
            },
            None => Variety::raw(id, subid),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl Serialize for Variety {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(&self.id)?;
        seq.serialize_element(&self.subid)?;
        if let Some(name) = self.name {
            seq.serialize_element(name)?;
            if let Some(sub_name) = self.sub_name {
                seq.serialize_element(sub_name)?;
            }
        }
        seq.end()
    }
}

/// The decoded shape selected by an interaction record's mode byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    /// 0xf1: an (id, sub-id) pair with no coordinates.
    NoValue { variety: Variety },
    /// 0xf2: an (id, sub-id) pair plus an (x, y) position.
    DoubleValue { variety: Variety, coords: (u8, u8) },
    /// 0xf6: a batch of identical entities placed at random positions.
    RandomEntities {
        count: u8,
        param: u8,
        variety: Variety,
    },
    /// 0xf7: one entity placed at an explicit (x, y) position.
    SpecificEntity {
        param: u8,
        variety: Variety,
        coords: (u8, u8),
    },
    /// 0xf8: a static part with a packed single-byte position.
    Part { variety: Variety, coords: (u8, u8) },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub address: Address,
    pub kind: InteractionKind,
}

impl Interaction {
    /// The mode byte that selected this record's shape.
    pub fn mode(&self) -> u8 {
        match self.kind {
            InteractionKind::NoValue { .. } => 0xf1,
            InteractionKind::DoubleValue { .. } => 0xf2,
            InteractionKind::RandomEntities { .. } => 0xf6,
            InteractionKind::SpecificEntity { .. } => 0xf7,
            InteractionKind::Part { .. } => 0xf8,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self.kind {
            InteractionKind::NoValue { .. } => "NV interaction",
            InteractionKind::DoubleValue { .. } => "DV interaction",
            InteractionKind::RandomEntities { .. } => "random entities",
            InteractionKind::SpecificEntity { .. } => "specific entity",
            InteractionKind::Part { .. } => "part",
        }
    }

    pub fn variety(&self) -> &Variety {
        match &self.kind {
            InteractionKind::NoValue { variety }
            | InteractionKind::DoubleValue { variety, .. }
            | InteractionKind::RandomEntities { variety, .. }
            | InteractionKind::SpecificEntity { variety, .. }
            | InteractionKind::Part { variety, .. } => variety,
        }
    }

    /// Fill in display names on a record that was decoded in raw mode.
    pub fn resolve_names(&mut self) {
        let table = self.name_table();
        let variety = match &mut self.kind {
            InteractionKind::NoValue { variety }
            | InteractionKind::DoubleValue { variety, .. }
            | InteractionKind::RandomEntities { variety, .. }
            | InteractionKind::SpecificEntity { variety, .. }
            | InteractionKind::Part { variety, .. } => variety,
        };
        *variety = Variety::lookup(table, variety.id, variety.subid);
    }

    fn name_table(&self) -> &'static [NameEntry] {
        match self.kind {
            InteractionKind::NoValue { .. } => names::NV_INTERACTIONS,
            InteractionKind::DoubleValue { .. } => names::DV_INTERACTIONS,
            InteractionKind::RandomEntities { .. } | InteractionKind::SpecificEntity { .. } => {
                names::ENTITIES
            }
            InteractionKind::Part { .. } => names::PARTS,
        }
    }

    /// Emit this record's key/value fields into an open map, so search hits
    /// can flatten them next to their own annotations.
    pub(crate) fn serialize_fields<M>(&self, map: &mut M) -> std::result::Result<(), M::Error>
    where
        M: SerializeMap,
    {
        map.serialize_entry("address", &self.address)?;
        map.serialize_entry("mode", self.mode_name())?;
        match &self.kind {
            InteractionKind::NoValue { variety } => {
                map.serialize_entry("variety", variety)?;
            }
            InteractionKind::DoubleValue { variety, coords } => {
                map.serialize_entry("variety", variety)?;
                map.serialize_entry("coords", coords)?;
            }
            InteractionKind::RandomEntities {
                count,
                param,
                variety,
            } => {
                map.serialize_entry("count", count)?;
                map.serialize_entry("param", param)?;
                map.serialize_entry("variety", variety)?;
            }
            InteractionKind::SpecificEntity {
                param,
                variety,
                coords,
            } => {
                map.serialize_entry("param", param)?;
                map.serialize_entry("variety", variety)?;
                map.serialize_entry("coords", coords)?;
            }
            InteractionKind::Part { variety, coords } => {
                map.serialize_entry("variety", variety)?;
                map.serialize_entry("coords", coords)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Interaction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_fields(&mut map)?;
        map.end()
    }
}

enum Step {
    /// Keep reading at this offset.
    Next(u16),
    /// Undocumented mode byte: the rest of this stream level is unusable.
    Abort,
}

/// Decode interaction records starting at `addr` until the 0xff stream
/// terminator. An undocumented mode byte ends decoding early, keeping the
/// records accumulated so far.
pub fn read_stream(rom: &Rom, bank: u8, addr: u16, named: bool) -> Result<Vec<Interaction>> {
    let mut objects = Vec::new();
    let mut addr = addr;
    while rom.read_byte(bank, addr)? != 0xff {
        match read_interaction(rom, bank, addr, named, 0, &mut objects)? {
            Step::Next(next) => addr = next,
            Step::Abort => break,
        }
    }
    Ok(objects)
}

/// Decode records at a pointer target until a 0xfe or 0xff terminator. The
/// terminator is left unconsumed; it only closes this nested level.
fn read_chain_target(
    rom: &Rom,
    bank: u8,
    addr: u16,
    named: bool,
    depth: usize,
    out: &mut Vec<Interaction>,
) -> Result<()> {
    let mut addr = addr;
    loop {
        let next = rom.read_byte(bank, addr)?;
        if next == 0xfe || next == 0xff {
            return Ok(());
        }
        match read_interaction(rom, bank, addr, named, depth, out)? {
            Step::Next(n) => addr = n,
            Step::Abort => return Ok(()),
        }
    }
}

fn read_interaction(
    rom: &Rom,
    bank: u8,
    addr: u16,
    named: bool,
    depth: usize,
    out: &mut Vec<Interaction>,
) -> Result<Step> {
    let (mode, mut addr) = rom.read_byte_step(bank, addr, 1)?;

    match mode {
        // Record shapes nobody has decoded yet; skip their payload bytes.
        0xf0 | 0xf9 | 0xfa => {
            log::warn!(
                "skipped interaction type {:#04x} at {:#04x}:{:#06x}",
                mode,
                bank,
                addr.wrapping_sub(1)
            );
            while rom.read_byte(bank, addr)? < 0xf0 {
                addr = addr.wrapping_add(1);
            }
            Ok(Step::Next(addr))
        }
        // no-value interactions
        0xf1 => {
            while rom.read_byte(bank, addr)? < 0xf0 {
                let id = rom.read_byte(bank, addr)?;
                let subid = rom.read_byte(bank, addr.wrapping_add(1))?;
                addr = addr.wrapping_add(2);

                out.push(Interaction {
                    address: Address::new(bank, addr.wrapping_sub(2)),
                    kind: InteractionKind::NoValue {
                        variety: make_variety(names::NV_INTERACTIONS, id, subid, named),
                    },
                });
            }
            Ok(Step::Next(addr))
        }
        // double-value interactions
        0xf2 => {
            while rom.read_byte(bank, addr)? < 0xf0 {
                let id = rom.read_byte(bank, addr)?;
                let subid = rom.read_byte(bank, addr.wrapping_add(1))?;
                addr = addr.wrapping_add(2);
                let (x, next) = rom.read_byte_step(bank, addr, 1)?;
                let (y, next) = rom.read_byte_step(bank, next, 1)?;
                addr = next;

                out.push(Interaction {
                    address: Address::new(bank, addr.wrapping_sub(4)),
                    kind: InteractionKind::DoubleValue {
                        variety: make_variety(names::DV_INTERACTIONS, id, subid, named),
                        coords: (x, y),
                    },
                });
            }
            Ok(Step::Next(addr))
        }
        // pointer to more records in the same bank
        0xf3 | 0xf4 | 0xf5 => {
            let ptr = rom.read_ptr(bank, addr)?;
            addr = addr.wrapping_add(2);
            if depth >= MAX_CHAIN_DEPTH {
                return Err(RomError::ChainTooDeep {
                    bank,
                    addr: ptr,
                    max: MAX_CHAIN_DEPTH,
                });
            }
            read_chain_target(rom, bank, ptr, named, depth + 1, out)?;
            Ok(Step::Next(addr))
        }
        // randomly placed entities: one packed count/param byte, then the
        // entity variety
        0xf6 => {
            let packed = rom.read_byte(bank, addr)?;
            let count = packed >> 5;
            let param = packed & 0x0f;
            addr = addr.wrapping_add(1);

            let id = rom.read_byte(bank, addr)?;
            let subid = rom.read_byte(bank, addr.wrapping_add(1))?;
            addr = addr.wrapping_add(2);

            out.push(Interaction {
                address: Address::new(bank, addr.wrapping_sub(3)),
                kind: InteractionKind::RandomEntities {
                    count,
                    param,
                    variety: make_variety(names::ENTITIES, id, subid, named),
                },
            });
            Ok(Step::Next(addr))
        }
        // specifically placed entities: one shared param byte, then one
        // placement per loop iteration
        0xf7 => {
            let (param, next) = rom.read_byte_step(bank, addr, 1)?;
            addr = next;

            while rom.read_byte(bank, addr)? < 0xf0 {
                let id = rom.read_byte(bank, addr)?;
                let subid = rom.read_byte(bank, addr.wrapping_add(1))?;
                addr = addr.wrapping_add(2);
                let (x, next) = rom.read_byte_step(bank, addr, 1)?;
                let (y, next) = rom.read_byte_step(bank, next, 1)?;
                addr = next;

                out.push(Interaction {
                    address: Address::new(bank, addr.wrapping_sub(4)),
                    kind: InteractionKind::SpecificEntity {
                        param,
                        variety: make_variety(names::ENTITIES, id, subid, named),
                        coords: (x, y),
                    },
                });
            }
            Ok(Step::Next(addr))
        }
        // parts: both coordinates packed into one byte, on a 16-pixel grid
        // with an 8-pixel bias
        0xf8 => {
            while rom.read_byte(bank, addr)? < 0xf0 {
                let id = rom.read_byte(bank, addr)?;
                let subid = rom.read_byte(bank, addr.wrapping_add(1))?;
                addr = addr.wrapping_add(2);
                let (xy, next) = rom.read_byte_step(bank, addr, 1)?;
                addr = next;

                out.push(Interaction {
                    address: Address::new(bank, addr.wrapping_sub(3)),
                    kind: InteractionKind::Part {
                        variety: make_variety(names::PARTS, id, subid, named),
                        coords: (
                            (xy & 0x0f) * 0x10 + 0x08,
                            ((xy >> 4) & 0x0f) * 0x10 + 0x08,
                        ),
                    },
                });
            }
            Ok(Step::Next(addr))
        }
        // stream terminators carry no payload
        0xfe | 0xff => Ok(Step::Next(addr)),
        _ => {
            log::warn!(
                "unknown interaction type {:#04x} at {:#04x}:{:#06x}",
                mode,
                bank,
                addr.wrapping_sub(1)
            );
            Ok(Step::Abort)
        }
    }
}

fn make_variety(table: &'static [NameEntry], id: u8, subid: u8, named: bool) -> Variety {
    if named {
        Variety::lookup(table, id, subid)
    } else {
        Variety::raw(id, subid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{blank_rom, poke, poke_ptr};

    const BANK: u8 = 0x09;
    const START: u16 = 0x5000;

    #[test]
    fn decodes_one_record_of_each_kind() {
        let mut rom = blank_rom();
        #[rustfmt::skip]
        let stream = [
            0xf1, 0x05, 0x06,
            0xf2, 0x12, 0x00, 0x18, 0x28,
            0xf6, 0x20, 0x09, 0x00,
            0xf7, 0x01, 0x32, 0x00, 0x10, 0x20,
            0xf8, 0x02, 0x03, 0x57,
            0xff,
        ];
        poke(&mut rom, BANK, START, &stream);

        let objects = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(objects.len(), 5);

        assert_eq!(objects[0].address, Address::new(BANK, START + 1));
        assert_eq!(
            objects[0].kind,
            InteractionKind::NoValue {
                variety: Variety::raw(0x05, 0x06),
            }
        );

        assert_eq!(objects[1].address, Address::new(BANK, START + 4));
        assert_eq!(
            objects[1].kind,
            InteractionKind::DoubleValue {
                variety: Variety::raw(0x12, 0x00),
                coords: (0x18, 0x28),
            }
        );

        assert_eq!(objects[2].address, Address::new(BANK, START + 9));
        assert_eq!(
            objects[2].kind,
            InteractionKind::RandomEntities {
                count: 1,
                param: 0,
                variety: Variety::raw(0x09, 0x00),
            }
        );

        assert_eq!(objects[3].address, Address::new(BANK, START + 14));
        assert_eq!(
            objects[3].kind,
            InteractionKind::SpecificEntity {
                param: 0x01,
                variety: Variety::raw(0x32, 0x00),
                coords: (0x10, 0x20),
            }
        );

        assert_eq!(objects[4].address, Address::new(BANK, START + 19));
        assert_eq!(
            objects[4].kind,
            InteractionKind::Part {
                variety: Variety::raw(0x02, 0x03),
                coords: (0x78, 0x58),
            }
        );
    }

    #[test]
    fn random_entity_record_fields() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf6, 0x20, 0x09, 0x00, 0xff]);

        let objects = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].mode(), 0xf6);
        assert_eq!(objects[0].address, Address::new(BANK, START + 1));
        assert_eq!(
            objects[0].kind,
            InteractionKind::RandomEntities {
                count: 0x20 >> 5,
                param: 0x20 & 0x0f,
                variety: Variety::raw(0x09, 0x00),
            }
        );
    }

    #[test]
    fn one_mode_byte_covers_consecutive_records() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf1, 0x01, 0x02, 0x03, 0x04, 0xff]);

        let objects = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].variety(), &Variety::raw(0x01, 0x02));
        assert_eq!(objects[0].address, Address::new(BANK, START + 1));
        assert_eq!(objects[1].variety(), &Variety::raw(0x03, 0x04));
        assert_eq!(objects[1].address, Address::new(BANK, START + 3));
    }

    #[test]
    fn pointer_record_resumes_after_its_pointer() {
        let mut rom = blank_rom();
        let nested: u16 = 0x6800;

        poke(&mut rom, BANK, START, &[0xf3]);
        poke_ptr(&mut rom, BANK, START + 1, nested);
        poke(&mut rom, BANK, START + 3, &[0xf6, 0x20, 0x32, 0x00, 0xff]);
        poke(&mut rom, BANK, nested, &[0xf1, 0x0a, 0x0b, 0xfe]);

        let objects = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(objects.len(), 2);

        // nested record first, then the record after the pointer
        assert_eq!(objects[0].address, Address::new(BANK, nested + 1));
        assert_eq!(objects[0].mode(), 0xf1);
        assert_eq!(objects[1].address, Address::new(BANK, START + 4));
        assert_eq!(objects[1].mode(), 0xf6);
    }

    #[test]
    fn self_referential_pointer_chain_errors() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf3]);
        poke_ptr(&mut rom, BANK, START + 1, START);

        match read_stream(&rom, BANK, START, false) {
            Err(RomError::ChainTooDeep { bank, .. }) => assert_eq!(bank, BANK),
            other => panic!("expected chain-depth error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_mode_keeps_earlier_records() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf6, 0x20, 0x09, 0x00, 0x42, 0xff]);

        let objects = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].mode(), 0xf6);
    }

    #[test]
    fn unimplemented_modes_skip_their_payload() {
        for mode in [0xf0u8, 0xf9, 0xfa] {
            let mut rom = blank_rom();
            poke(
                &mut rom,
                BANK,
                START,
                &[mode, 0x23, 0x45, 0xf1, 0x07, 0x08, 0xff],
            );

            let objects = read_stream(&rom, BANK, START, false).unwrap();
            assert_eq!(objects.len(), 1);
            assert_eq!(objects[0].variety(), &Variety::raw(0x07, 0x08));
        }
    }

    #[test]
    fn named_decoding_resolves_varieties() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf6, 0x20, 0x32, 0x00, 0xff]);

        let objects = read_stream(&rom, BANK, START, true).unwrap();
        assert_eq!(objects[0].variety().name(), Some("keese"));

        let raw = read_stream(&rom, BANK, START, false).unwrap();
        assert_eq!(raw[0].variety().name(), None);
    }

    #[test]
    fn resolve_names_matches_named_decoding() {
        let mut rom = blank_rom();
        poke(&mut rom, BANK, START, &[0xf2, 0x12, 0x01, 0x18, 0x28, 0xff]);

        let named = read_stream(&rom, BANK, START, true).unwrap();
        let mut raw = read_stream(&rom, BANK, START, false).unwrap();
        raw[0].resolve_names();
        assert_eq!(raw, named);
    }
}
