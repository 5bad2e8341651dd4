/// All possible actions in the application (command pattern)
#[derive(Clone, Debug)]
pub enum Action {
    // Navigation
    Back,
    Quit,

    // UI toggles
    ToggleHelp,

    // Activity log scrolling
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // Render request
    Render,
}
