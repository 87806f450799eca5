use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("illegal instruction {0:#06X}")]
    IllegalInst(u16),
    #[error("address {0:#06X} is outside of memory")]
    IllegalAddr(u16),
    #[error("address {0:#06X} is read only")]
    ReadOnlyAddr(u16),
    #[error("stack overflow")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("rom of {0} bytes does not fit into memory")]
    RomTooLarge(usize),
    #[error("invalid cpu frequency")]
    InvalidFrequency,
}
