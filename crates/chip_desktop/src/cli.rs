use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use thiserror::Error;

use chip_core::globals::DEFAULT_CPU_FREQUENCY;

/// pitch of the sound timer tone, Hz
const DEFAULT_TONE_FREQUENCY: f64 = 264.0;

#[derive(Parser, Debug)]
#[command(version, about = "CHIP-8 virtual machine", long_about = None)]
pub struct Args {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions per second
    #[arg(long, default_value_t = DEFAULT_CPU_FREQUENCY, value_parser = clap::value_parser!(u32).range(1..))]
    pub freq: u32,

    /// Pitch of the sound timer tone in Hz
    #[arg(long, default_value_t = DEFAULT_TONE_FREQUENCY, value_parser = parse_tone)]
    pub sound: f64,

    /// Background colour, #RRGGBB
    #[arg(long, default_value = "#000000")]
    pub bg: Color,

    /// Foreground colour, #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    pub fg: Color,

    /// Window pixels per CHIP-8 pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Shift instructions copy Vy into Vx first (COSMAC VIP behaviour)
    #[arg(long)]
    pub legacy_shift: bool,
}

fn parse_tone(s: &str) -> Result<f64, String> {
    let hz: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !hz.is_finite() || hz <= 0.0 {
        return Err(format!("tone frequency must be positive, got {s}"));
    }
    Ok(hz)
}

#[derive(Debug, Error, PartialEq)]
#[error("expected a #RRGGBB colour, got `{0}`")]
pub struct ParseColorError(String);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    /// 0RGB, as softbuffer expects
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
