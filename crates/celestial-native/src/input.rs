use winit::keyboard::KeyCode;

/// Font size change per arrow key press, in pixels.
pub const FONT_SIZE_STEP: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    CycleMode,
    AdjustFontSize(f32),
    Quit,
}

/// Map the pointer's horizontal position to a rotation input in [-1, 1].
#[inline]
pub fn rotation_from_pointer(x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    ((x / width) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

#[inline]
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Space | KeyCode::Enter => Some(Action::CycleMode),
        KeyCode::ArrowUp => Some(Action::AdjustFontSize(FONT_SIZE_STEP)),
        KeyCode::ArrowDown => Some(Action::AdjustFontSize(-FONT_SIZE_STEP)),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Shells make typing a real newline awkward, so accept a literal `\n` too.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
