use winit::keyboard::KeyCode;

/// Physical keys for CHIP-8 keys 0-F, left-hand side of a qwerty keyboard:
///
/// ```text
/// 1 2 3 C      1 2 3 4
/// 4 5 6 D      Q W E R
/// 7 8 9 E      A S D F
/// A 0 B F      Z X C V
/// ```
const KEYMAP: [KeyCode; 16] = [
    KeyCode::KeyX,   // 0
    KeyCode::Digit1, // 1
    KeyCode::Digit2, // 2
    KeyCode::Digit3, // 3
    KeyCode::KeyQ,   // 4
    KeyCode::KeyW,   // 5
    KeyCode::KeyE,   // 6
    KeyCode::KeyA,   // 7
    KeyCode::KeyS,   // 8
    KeyCode::KeyD,   // 9
    KeyCode::KeyZ,   // A
    KeyCode::KeyC,   // B
    KeyCode::Digit4, // C
    KeyCode::KeyR,   // D
    KeyCode::KeyF,   // E
    KeyCode::KeyV,   // F
];

pub const QUIT_KEY: KeyCode = KeyCode::Escape;

pub fn chip_key(code: KeyCode) -> Option<u8> {
    KEYMAP.iter().position(|k| *k == code).map(|k| k as u8)
}
