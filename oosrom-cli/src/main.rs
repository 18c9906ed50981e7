use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use oosrom_core::{
    chests_in_group, keesanity, room_data, search_objects, treasure_block, GroupChest, Rom,
};

mod emit;

#[derive(Debug, Parser)]
#[command(name = "oosrom", version, about = "read data from an oracle of seasons rom")]
struct Args {
    /// file path of rom to read
    romfile: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// print the music, objects, and chest of one room
    Getroom {
        #[arg(value_parser = parse_hex_u8)]
        group: u8,
        #[arg(value_parser = parse_hex_u8)]
        room: u8,
    },

    /// list chests in all groups, one group, or one group filtered by music id
    Searchchests {
        #[arg(value_parser = parse_hex_u8)]
        group: Option<u8>,
        #[arg(value_parser = parse_hex_u8)]
        music: Option<u8>,
    },

    /// find every object with a given interaction mode and id across the rom
    Searchobjects {
        #[arg(value_parser = parse_hex_u8)]
        mode: u8,
        #[arg(value_parser = parse_hex_u8)]
        id: u8,
        #[arg(value_parser = parse_hex_u8)]
        subid: Option<u8>,
    },

    /// dump the raw attribute block of one treasure
    Treasure {
        #[arg(value_parser = parse_hex_u8)]
        id: u8,
        #[arg(value_parser = parse_hex_u8)]
        subid: u8,
    },

    /// write a copy of the rom with every enemy replaced by keese
    Keesanity { output: PathBuf },
}

/// Numeric CLI arguments are hex strings, with or without a 0x prefix.
fn parse_hex_u8(token: &str) -> Result<u8, String> {
    let t = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u8::from_str_radix(t, 16).map_err(|e| format!("invalid hex value '{token}': {e}"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let rom = Rom::load(&args.romfile)?;

    match args.action {
        Action::Getroom { group, room } => {
            let data = room_data(&rom, group, room)?;
            print!("{}", emit::render(&serde_json::to_value(&data)?));
        }

        Action::Searchchests { group, music } => {
            let mut chests: Vec<GroupChest> = Vec::new();
            match group {
                None => {
                    for group in 0..8 {
                        chests.extend(chests_in_group(&rom, group)?);
                    }
                }
                Some(group) => chests = chests_in_group(&rom, group)?,
            }
            if let Some(music) = music {
                chests.retain(|chest| chest.music == music);
            }
            print!("{}", emit::render(&serde_json::to_value(&chests)?));
        }

        Action::Searchobjects { mode, id, subid } => {
            let mut hits = search_objects(&rom, mode, Some(id), subid)?;
            for hit in &mut hits {
                hit.interaction.resolve_names();
            }
            print!("{}", emit::render(&serde_json::to_value(&hits)?));
        }

        Action::Treasure { id, subid } => {
            let block = treasure_block(&rom, id, subid)?;
            print!("{}", emit::render(&serde_json::to_value(block)?));
        }

        Action::Keesanity { output } => {
            let patched = keesanity(&rom)?;
            fs::write(&output, patched.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_hex_u8;

    #[test]
    fn hex_arguments_parse_with_and_without_prefix() {
        assert_eq!(parse_hex_u8("44"), Ok(0x44));
        assert_eq!(parse_hex_u8("0x44"), Ok(0x44));
        assert_eq!(parse_hex_u8("f6"), Ok(0xf6));
        assert!(parse_hex_u8("wug").is_err());
        assert!(parse_hex_u8("100").is_err());
    }
}
