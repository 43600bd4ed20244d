//! Discrete input events dispatched into the core by the external event
//! loop.

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Input events the browser core reacts to.
///
/// Coordinates are window pixels. The event loop owns the window; the core
/// only ever sees this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to `(x, y)`.
    PointerMove { x: i32, y: i32 },
    /// A button went down at `(x, y)`.
    PointerDown { button: PointerButton, x: i32, y: i32 },
    /// A button was released.
    PointerUp { button: PointerButton },
    /// The window was asked to close.
    Quit,
}
