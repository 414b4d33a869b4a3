// Shared layout constants so the grid math and the card renderers agree.

/// Default Library card width in logical pixels.
pub const CARD_WIDTH: f32 = 340.0;

/// Gap between cards in the grid.
pub const CARD_GAP: f32 = 16.0;

/// How many topic badges a Library card shows before collapsing into "+N more".
pub const TOPIC_PREVIEW_COUNT: usize = 4;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 10.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Rounding of badges and tinted methodology columns
    pub const BADGE_ROUNDING: f32 = 6.0;
}
