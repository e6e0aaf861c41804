//! Headless page model - injected element handles for the demo page.
//!
//! The host owns the real widgets and the event loop; it mirrors element
//! state from a `Page` after each call. Every lookup is optional and a
//! missing element silently no-ops, so a partial page stays usable.

use secrecy::{ExposeSecret, SecretString};

use crate::chart::{ChartBackend, ChartSurface, render_attempts_chart};
use crate::evaluator::evaluate_strength;

/// Tab selected when the page-level data attribute is absent.
pub const DEFAULT_TAB: &str = "search";

/// A navigation link, keyed `{tab}-link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub active: bool,
}

/// A content panel, keyed `{tab}-content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPanel {
    pub id: String,
    pub visible: bool,
}

/// The password field feeding the strength display.
#[derive(Debug)]
pub struct PasswordInput {
    pub value: SecretString,
}

/// The progress bar fill; width and color are applied verbatim from the
/// evaluator result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressFill {
    pub width: String,
    pub background_color: String,
}

/// The strength caption next to the progress bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthText {
    pub text: String,
}

/// Element handles for one page instance. All stateless between calls;
/// every operation recomputes from current element state.
#[derive(Debug, Default)]
pub struct Page {
    /// Page-level data attribute naming the starting tab.
    pub initial_tab: Option<String>,
    pub nav_links: Vec<NavLink>,
    pub panels: Vec<ContentPanel>,
    pub password_input: Option<PasswordInput>,
    pub progress_fill: Option<ProgressFill>,
    pub strength_text: Option<StrengthText>,
    pub chart_surface: Option<ChartSurface>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the link/panel pair for a tab, both inactive.
    pub fn add_tab(&mut self, tab_id: &str) {
        self.nav_links.push(NavLink {
            id: format!("{}-link", tab_id),
            active: false,
        });
        self.panels.push(ContentPanel {
            id: format!("{}-content", tab_id),
            visible: false,
        });
    }

    /// Shows one tab. Deactivates every link and hides every panel, then
    /// activates only the pair derived from `tab_id`; either half missing
    /// is skipped without error.
    pub fn select_tab(&mut self, tab_id: &str) {
        for link in &mut self.nav_links {
            link.active = false;
        }
        for panel in &mut self.panels {
            panel.visible = false;
        }

        let link_id = format!("{}-link", tab_id);
        if let Some(link) = self.nav_links.iter_mut().find(|l| l.id == link_id) {
            link.active = true;
        }

        let panel_id = format!("{}-content", tab_id);
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == panel_id) {
            panel.visible = true;
        }
    }

    /// Host-side mirror of typing: stores the field value. No-op when the
    /// page has no password input.
    pub fn set_password(&mut self, value: SecretString) {
        if let Some(input) = &mut self.password_input {
            input.value = value;
        }
    }

    /// The input-event listener body. Reads the current field value; an
    /// empty field collapses the progress bar to 0% and clears the
    /// caption, anything else applies the evaluator's width, color and
    /// `Strength: {classification}` text.
    pub fn on_password_input(&mut self) {
        let (is_empty, result) = match &self.password_input {
            None => return,
            Some(input) => (
                input.value.expose_secret().is_empty(),
                evaluate_strength(&input.value),
            ),
        };

        if is_empty {
            if let Some(fill) = &mut self.progress_fill {
                fill.width = "0%".to_string();
            }
            if let Some(caption) = &mut self.strength_text {
                caption.text.clear();
            }
            return;
        }

        if let Some(fill) = &mut self.progress_fill {
            fill.width = result.width.to_string();
            fill.background_color = result.color.to_string();
        }
        if let Some(caption) = &mut self.strength_text {
            caption.text = format!("Strength: {}", result.strength);
        }
    }

    /// One-shot page startup: selects the starting tab (data attribute,
    /// defaulting to [`DEFAULT_TAB`]) and, when that tab is the search tab
    /// and a chart surface exists, renders the attempts chart from the
    /// surface's data attributes. The password listener is the host's to
    /// wire: call [`Page::on_password_input`] on every input event.
    pub fn init(&mut self, backend: &mut dyn ChartBackend) {
        let initial = self
            .initial_tab
            .clone()
            .unwrap_or_else(|| DEFAULT_TAB.to_string());

        #[cfg(feature = "tracing")]
        tracing::info!("Page initialized with tab {:?}", initial);

        self.select_tab(&initial);

        if initial == DEFAULT_TAB {
            if let Some(surface) = &self.chart_surface {
                let (linear, binary) = surface.attempt_counts();
                render_attempts_chart(Some(surface), linear, binary, backend);
            }
        }
    }
}
