// src/font_config.rs

// Font styles used when drawing frames. Kept in one place so the axis titles and
// tick labels stay consistent between the x and y axes.

use crate::constants::{FONT_SIZE_AXIS_TITLE, FONT_SIZE_TICK_LABEL};

/// Font family name for default system fonts
/// When plotters renders with "sans-serif", it uses system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_AXIS_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_TITLE);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);
