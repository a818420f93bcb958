use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// The kinds of line `check` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Database path and section titles
    Heading,
    /// The database is usable
    Ready,
    /// A missing table or other failure
    Problem,
    /// Usable, but lookups will come back empty
    Caution,
}

impl Tone {
    /// Problems and cautions go to stderr, the report to stdout
    pub fn on_stderr(self) -> bool {
        matches!(self, Tone::Problem | Tone::Caution)
    }

    fn colored(self) -> Style {
        match self {
            Tone::Heading => Style::new().cyan().bold(),
            Tone::Ready => Style::new().green().bold(),
            Tone::Problem => Style::new().red().bold(),
            Tone::Caution => Style::new().yellow().bold(),
        }
    }
}

/// Whether each output stream gets colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    stdout: bool,
    stderr: bool,
}

impl Theme {
    pub fn detect() -> Self {
        Self {
            stdout: console::Term::stdout().is_term(),
            stderr: console::Term::stderr().is_term(),
        }
    }

    pub fn colored() -> Self {
        Self { stdout: true, stderr: true }
    }

    pub fn plain() -> Self {
        Self { stdout: false, stderr: false }
    }

    pub fn style(&self, tone: Tone) -> Style {
        let colored = if tone.on_stderr() { self.stderr } else { self.stdout };
        if colored { tone.colored() } else { Style::new() }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
