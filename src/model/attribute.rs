//! Text attribute bit-set.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Style flags applied uniformly to an inline run.
    ///
    /// Only membership matters; the empty set is a valid style of its own
    /// meaning "no styling", not an alias for any default font.
    ///
    /// Serializes in the bitflags text form, e.g. `"BOLD | ITALIC"`, with the
    /// empty string for no attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TextAttribute: u8 {
        /// Heavier font weight
        const BOLD = 0b0000_0001;
        /// Slanted font
        const ITALIC = 0b0000_0010;
        /// Larger, title-sized font
        const HEADING = 0b0000_0100;
    }
}

impl TextAttribute {
    /// Order in which attributes are applied to a fragment.
    pub const APPLY_ORDER: [TextAttribute; 3] = [Self::BOLD, Self::ITALIC, Self::HEADING];

    /// Iterate over the single attributes present, in [`Self::APPLY_ORDER`].
    pub fn applied(self) -> impl Iterator<Item = TextAttribute> {
        Self::APPLY_ORDER
            .into_iter()
            .filter(move |attr| self.contains(*attr))
    }
}

impl Default for TextAttribute {
    fn default() -> Self {
        Self::empty()
    }
}
