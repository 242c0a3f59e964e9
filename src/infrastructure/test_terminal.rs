use color_eyre::eyre::Result;
use ratatui::{backend::TestBackend, Terminal};

/// Headless terminal for render assertions.
pub struct TestTerminal {
    term: Terminal<TestBackend>,
    pub draws: usize,
}

impl TestTerminal {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self { term, draws: 0 })
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame<'_>),
    {
        self.term.draw(f)?;
        self.draws += 1;
        Ok(())
    }

    /// Rendered buffer contents as one string, rows joined by newlines.
    pub fn contents(&self) -> String {
        let buffer = self.term.backend().buffer();
        let width = buffer.area.width as usize;
        let mut out = String::new();
        for (i, cell) in buffer.content().iter().enumerate() {
            out.push_str(cell.symbol());
            if width > 0 && (i + 1) % width == 0 {
                out.push('\n');
            }
        }
        out
    }

    pub fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }
}
