pub const RAM_SIZE: usize = 4096;
pub const STACK_SIZE: usize = 16;
pub const REG_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// first address available to programs
pub const PROGRAM_START: u16 = 0x200;
pub const MAX_ROM_SIZE: usize = RAM_SIZE - PROGRAM_START as usize;

pub const FONT_ADDR: u16 = 0x0;
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

pub const TIMER_FREQUENCY: f64 = 60.0;
pub const DEFAULT_CPU_FREQUENCY: u32 = 700;
