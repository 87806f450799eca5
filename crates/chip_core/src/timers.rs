/// Delay and sound countdown registers, decremented at 60Hz
#[derive(Clone, Copy, Default)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8
}
impl Timers {
    /// one 60Hz tick, both timers stop at 0
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}
