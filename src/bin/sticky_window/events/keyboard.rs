//! 键盘事件处理

use sticky_timer::event::KeyInput;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Ctrl（macOS 上为 Cmd）是否按下
pub fn is_command(modifiers: ModifiersState) -> bool {
    modifiers.contains(ModifiersState::CONTROL) || modifiers.contains(ModifiersState::SUPER)
}

/// 把物理按键转换为输入框的编辑操作，粘贴时从剪贴板取文本
pub fn map_key(
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
    clipboard: &mut Option<arboard::Clipboard>,
) -> Option<KeyInput> {
    let ctrl = is_command(modifiers);
    let shift = modifiers.contains(ModifiersState::SHIFT);

    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    match code {
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::ArrowLeft if shift => Some(KeyInput::ShiftLeft),
        KeyCode::ArrowRight if shift => Some(KeyInput::ShiftRight),
        KeyCode::ArrowLeft => Some(KeyInput::Left),
        KeyCode::ArrowRight => Some(KeyInput::Right),
        KeyCode::Home if shift => Some(KeyInput::ShiftHome),
        KeyCode::End if shift => Some(KeyInput::ShiftEnd),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(KeyInput::Enter),
        KeyCode::Escape => Some(KeyInput::Escape),
        KeyCode::KeyA if ctrl => Some(KeyInput::SelectAll),
        KeyCode::KeyC if ctrl => Some(KeyInput::Copy),
        KeyCode::KeyX if ctrl => Some(KeyInput::Cut),
        KeyCode::KeyV if ctrl => {
            let text = clipboard.as_mut()
                .and_then(|cb| cb.get_text().ok())
                .unwrap_or_default();
            Some(KeyInput::Paste(text))
        }
        _ => None,
    }
}
