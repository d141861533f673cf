//! Test helpers - render components to plain strings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::prelude::Frame;
use ratatui::Terminal;

/// Renders into an off-screen buffer and exposes it as text.
///
/// ```
/// use cy_weather::testing::RenderHarness;
///
/// let mut render = RenderHarness::new(20, 4);
/// let output = render.render_to_string_plain(|_frame| {
///     // render a component into the frame's area
/// });
/// assert!(output.ends_with('\n'));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test backend terminal");
        Self { terminal }
    }

    /// Render one frame and return the buffer contents, styles stripped,
    /// one line per terminal row.
    pub fn render_to_string_plain(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw frame");

        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut output = String::with_capacity((area.width as usize + 1) * area.height as usize);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }
}

/// A plain key press, for feeding `Component::handle_event` in tests
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}
