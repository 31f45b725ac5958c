use embassy_time::Duration;

use crate::marquee::PanelFont;

/// Number of 32x16 P10 panels placed side by side.
pub const DISPLAYS_ACROSS: usize = 1;
/// Number of 32x16 P10 panels stacked vertically.
pub const DISPLAYS_DOWN: usize = 1;

/// Visible width of the display in pixels.
pub const FRAME_COLS: usize = 32 * DISPLAYS_ACROSS;
/// Visible height of the display in pixels.
pub const FRAME_ROWS: usize = 16 * DISPLAYS_DOWN;
/// Bytes per packed frame row.
pub const FRAME_COL_BYTES: usize = FRAME_COLS / 8;

/// P10 panels are 1/4-scan: each latch drives every fourth row.
pub const SCAN_PHASES: usize = 4;

/// Period between RTC samples.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(100);
/// Period between marquee scroll steps.
pub const STEP_PERIOD: Duration = Duration::from_millis(100);
/// Period between hardware refresh phases.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(1);

/// Fixed banner shown before the time, date, and temperature segments.
pub const BANNER: &str = "Welcome to 300L Electrical/Electronics Engineering Class";

/// Capacity of the formatted display message, sized to the worst-case
/// template expansion plus margin.
pub const MESSAGE_CAPACITY: usize = 150;

/// Font used for the scrolling message.
pub const PANEL_FONT: PanelFont = PanelFont::Font9x15Bold;
