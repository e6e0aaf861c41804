//! Attempts chart - shapes the declarative config handed to the charting
//! collaborator. Nothing here draws; the backend owns the pixels.

use serde::Serialize;

/// Bar color for the linear-search category.
pub const LINEAR_COLOR: &str = "#ff5f75";
/// Bar color for the binary-search category.
pub const BINARY_COLOR: &str = "#00c0e7";

/// Declarative chart configuration, serialized with the collaborator's
/// key names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u64>,
    pub background_color: Vec<&'static str>,
    pub border_color: Vec<&'static str>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

/// The external charting collaborator. Receives the surface's element id
/// and the fully shaped config.
pub trait ChartBackend {
    fn draw(&mut self, surface_id: &str, config: ChartConfig);
}

/// The drawable region the chart lands on, with its embedded attempt
/// counts.
#[derive(Debug, Clone, Default)]
pub struct ChartSurface {
    pub id: String,
    /// Raw `linear` data attribute, if present.
    pub data_linear: Option<String>,
    /// Raw `binary` data attribute, if present.
    pub data_binary: Option<String>,
}

impl ChartSurface {
    /// Attempt counts from the data attributes, each coerced to 0 when
    /// absent or non-numeric.
    pub fn attempt_counts(&self) -> (u64, u64) {
        let parse = |attr: &Option<String>| {
            attr.as_deref()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0)
        };
        (parse(&self.data_linear), parse(&self.data_binary))
    }
}

/// Builds the two-bar comparison config for the given attempt counts.
pub fn attempts_chart_config(linear: u64, binary: u64) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: vec!["Linear Search", "Binary Search"],
            datasets: vec![Dataset {
                label: "Attempts",
                data: vec![linear, binary],
                background_color: vec![LINEAR_COLOR, BINARY_COLOR],
                border_color: vec![LINEAR_COLOR, BINARY_COLOR],
                border_width: 1,
            }],
        },
        options: ChartOptions {
            scales: Scales {
                y: Axis {
                    begin_at_zero: true,
                },
            },
        },
    }
}

/// Renders the attempts comparison onto the surface, or silently no-ops
/// when the surface is absent.
pub fn render_attempts_chart(
    surface: Option<&ChartSurface>,
    linear: u64,
    binary: u64,
    backend: &mut dyn ChartBackend,
) {
    let Some(surface) = surface else {
        return;
    };
    backend.draw(&surface.id, attempts_chart_config(linear, binary));
}
