//! CHIP-8 virtual machine core: machine state, instruction decoder and the
//! clock that drives it. Frontends own a `Cpu` and a `Scheduler`, feed
//! wall-clock time into `Scheduler::advance` and read back the display,
//! keypad and sound timer.
#![no_std]
mod cpu;
mod display;
mod errors;
mod font;
pub mod globals;
mod keypad;
mod scheduler;
mod timers;
mod utils;

pub use cpu::{Cpu, Quirks};
pub use display::{Display, Pixels};
pub use errors::ChipError;
pub use keypad::Keypad;
pub use scheduler::{Scheduler, Tick};
pub use timers::Timers;
