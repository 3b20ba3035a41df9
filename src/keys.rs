/// Keyboard events the core dispatches on. The host maps its platform key
/// codes to these before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Escape,
    Enter,
}
