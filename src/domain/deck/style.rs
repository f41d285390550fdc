//! Style Table
//!
//! Literal geometry, color, and typography constants used by the assembly
//! engine. Colors are linear 0..1 RGB; alpha is carried separately on fills.

use super::ops::{DashStyle, Dimensions, Fill, OutlineStyle, Rgb, Transform};

/// Object id of the default placeholder slide the renderer pre-creates
pub const DEFAULT_PLACEHOLDER_ID: &str = "p";

pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

/// Full-bleed illustrations are scaled slightly past the slide edge
pub const IMAGE_TRANSFORM: Transform = Transform::scaled(1.05);

// Title slide

pub const TITLE_BOX_SIZE: Dimensions = Dimensions::new(720.0, 405.64);

pub const TITLE_BOX_FILL: Fill = Fill {
    color: Rgb::grey(0.37),
    alpha: 0.5,
};

pub const TITLE_FONT_FAMILY: &str = "Pacifico";
pub const TITLE_FONT_SIZE_PT: f64 = 80.0;

// Page slides

pub const PAGE_BOX_SIZE: Dimensions = Dimensions::new(269.0, 360.0);
pub const PAGE_BOX_TRANSFORM: Transform = Transform::new(1.0, 1.0, 15.0, 15.0);

pub const PAGE_BOX_FILL: Fill = Fill {
    color: Rgb::grey(0.37),
    alpha: 0.69,
};

pub const PAGE_BOX_OUTLINE: OutlineStyle = OutlineStyle {
    color: Rgb::grey(0.35),
    weight_pt: 1.0,
    dash: DashStyle::Solid,
};

pub const PAGE_FONT_SIZE_PT: f64 = 13.0;

// Closing slide

pub const ACCENT_FONT_FAMILY: &str = "Changa One";

pub const MADE_WITH_SIZE: Dimensions = Dimensions::new(163.44, 38.16);
pub const MADE_WITH_TRANSFORM: Transform = Transform::new(1.0, 1.0, 23.75, 20.88);
pub const MADE_WITH_FONT_SIZE_PT: f64 = 19.0;

pub const PRODUCT_NAME_SIZE: Dimensions = Dimensions::new(543.6, 130.32);
pub const PRODUCT_NAME_TRANSFORM: Transform = Transform::new(1.0, 1.0, 0.0, 41.01);

pub const BUTTON_SIZE: Dimensions = Dimensions::new(223.2, 44.64);
pub const BUTTON_TRANSLATE_X_PT: f64 = 23.76;
pub const BUTTON_TRANSLATE_Y_PTS: [f64; 3] = [171.36, 225.36, 279.36];

pub const BUTTON_FILL: Fill = Fill {
    color: Rgb::grey(0.93),
    alpha: 0.85,
};

pub const BUTTON_FONT_SIZE_PT: f64 = 14.0;
