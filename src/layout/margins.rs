use crate::units::Pt;

/// Margins shrink a page's content box. Nothing prevents objects from
/// overflowing the margins; they are guidelines for the layout functions,
/// and they determine the `ArtBox` attribute of each generated page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
