use crate::globals::KEY_COUNT;

/// Snapshot of the hex keypad, written by the host and read by the cpu
#[derive(Clone, Copy, Default)]
pub struct Keypad {
    keys: [bool; KEY_COUNT]
}
impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }
    /// out of range keys are ignored
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(k) = self.keys.get_mut(key as usize) {
            *k = pressed;
        }
    }
    /// out of range keys read as released
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }
    /// lowest pressed key, if any
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|k| *k).map(|k| k as u8)
    }
    pub fn release_all(&mut self) {
        self.keys = [false; KEY_COUNT];
    }
}
