//! Terminal timeline rendering.
//!
//! Draws a Gantt-style view of a completed schedule: one lane per
//! machine scaled to a fixed column budget, cells keyed by duration
//! class, and a per-machine utilization summary. Rendering is pure
//! presentation: it reads a [`Schedule`] and its [`ScheduleKpi`] and
//! produces a `String`, so it never feeds anything back into
//! scheduling and is directly unit-testable.
//!
//! Cells carry the class's initial letter; with color enabled the
//! letters are painted with the class's configured hex color via ANSI
//! truecolor sequences.

use owo_colors::OwoColorize;

use crate::config::DurationClass;
use crate::models::{ms_to_hours, Schedule};
use crate::scheduler::ScheduleKpi;

type Rgb = (u8, u8, u8);

/// Fill colors for classes without a configured color.
const FALLBACK_COLORS: [Rgb; 6] = [
    (0x10, 0xb9, 0x81),
    (0xf5, 0x9e, 0x0b),
    (0xef, 0x44, 0x44),
    (0x3b, 0x82, 0xf6),
    (0x8b, 0x5c, 0xf6),
    (0x06, 0xb6, 0xd4),
];

/// Timeline rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Columns available for the time axis.
    pub width: usize,
    /// Emit ANSI truecolor sequences.
    pub color: bool,
    /// Class name → fill color, in display order.
    pub palette: Vec<(String, Rgb)>,
}

impl RenderOptions {
    /// Creates options with a 64-column axis, color on, empty palette.
    pub fn new() -> Self {
        Self {
            width: 64,
            color: true,
            palette: Vec::new(),
        }
    }

    /// Sets the axis width in columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Enables or disables ANSI color.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builds the palette from duration classes, parsing their hex
    /// colors and falling back to a fixed cycle where absent or invalid.
    pub fn with_classes(mut self, classes: &[DurationClass]) -> Self {
        for class in classes {
            let rgb = class
                .color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(FALLBACK_COLORS[self.palette.len() % FALLBACK_COLORS.len()]);
            self.palette.push((class.name.clone(), rgb));
        }
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the machine-lane timeline.
///
/// One lane per machine, idle time shown as `·`, each task filling the
/// columns its interval covers (at least one). The caption under the
/// axis shows the horizon start and the makespan end as calendar
/// timestamps.
pub fn render_timeline(schedule: &Schedule, kpi: &ScheduleKpi, opts: &RenderOptions) -> String {
    if schedule.task_count() == 0 {
        return format!(
            "start {}\n(no scheduled orders)\n",
            schedule.horizon_start.to_rfc3339()
        );
    }

    let makespan = schedule.makespan_ms();
    let width = opts.width;
    let label_width = format!("M{}", schedule.machines.saturating_sub(1)).len();

    // Classes in palette order, then schedule appearance order.
    let mut classes: Vec<(String, Rgb)> = opts.palette.clone();
    for task in &schedule.tasks {
        if !classes.iter().any(|(name, _)| name == &task.class) {
            let rgb = FALLBACK_COLORS[classes.len() % FALLBACK_COLORS.len()];
            classes.push((task.class.clone(), rgb));
        }
    }
    let initials: Vec<String> = classes
        .iter()
        .map(|(name, _)| name.chars().next().unwrap_or('?').to_string())
        .collect();

    let mut out = format!(
        "start {} │ makespan {:.1} h │ avg utilization {:.1}%\n",
        schedule.horizon_start.to_rfc3339(),
        kpi.makespan_hours(),
        kpi.average_utilization() * 100.0
    );

    for machine in 0..schedule.machines {
        let mut cells: Vec<Option<usize>> = vec![None; width];
        for task in schedule.tasks_for_machine(machine) {
            let class_idx = classes
                .iter()
                .position(|(name, _)| name == &task.class)
                .unwrap_or(0);
            let start = (task.start_ms * width as i64 / makespan) as usize;
            let end = ((task.end_ms * width as i64 / makespan) as usize)
                .max(start + 1)
                .min(width);
            for cell in &mut cells[start.min(width)..end] {
                *cell = Some(class_idx);
            }
        }

        let utilization = kpi
            .machines
            .get(machine)
            .map(|k| k.utilization)
            .unwrap_or(0.0);

        out.push_str(&format!(
            "{:<label_width$} │",
            format!("M{machine}")
        ));
        for cell in cells {
            match cell {
                Some(idx) => out.push_str(&paint(&initials[idx], classes[idx].1, opts.color)),
                None => out.push('·'),
            }
        }
        out.push_str(&format!("│ {:>5.1}%\n", utilization * 100.0));
    }

    let indent = " ".repeat(label_width + 1);
    out.push_str(&format!("{indent}└{}┘\n", "─".repeat(width)));
    out.push_str(&format!(
        "{indent} {} → {}\n",
        schedule.horizon_start.to_rfc3339(),
        schedule.makespan_end().to_rfc3339()
    ));

    if opts.color {
        let legend: Vec<String> = classes
            .iter()
            .map(|(name, rgb)| format!("{} {}", paint("██", *rgb, true), name))
            .collect();
        out.push_str(&format!("{indent} {}\n", legend.join("  ")));
    }

    out
}

/// Renders the per-machine KPI table with a makespan footer.
pub fn render_summary(kpi: &ScheduleKpi) -> String {
    let mut out = format!(
        "{:<8} {:>7} {:>10} {:>10} {:>9}\n",
        "machine", "orders", "busy (h)", "span (h)", "util"
    );
    for machine in &kpi.machines {
        out.push_str(&format!(
            "{:<8} {:>7} {:>10.1} {:>10.1} {:>8.1}%\n",
            format!("M{}", machine.machine),
            machine.order_count,
            ms_to_hours(machine.busy_ms),
            ms_to_hours(machine.span_ms),
            machine.utilization * 100.0
        ));
    }
    out.push_str(&format!(
        "makespan {:.1} h │ total busy {:.1} h │ avg utilization {:.1}%\n",
        kpi.makespan_hours(),
        ms_to_hours(kpi.total_busy_ms),
        kpi.average_utilization() * 100.0
    ));
    out
}

fn paint(text: &str, rgb: Rgb, enabled: bool) -> String {
    if enabled {
        text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        text.to_string()
    }
}

fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
