//! Pre-defined page sizes, in portrait orientation.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// ISO A4 (converted from mm to points); every page of the manuscript uses it
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
