// Color palette
//
// Terminal rendition of the site's violet/gold brand colors.

use ratatui::style::Color;

/// Primary brand color - borders, section headers, titles
/// RGB: (118, 75, 162), the site's #764ba2
pub const BRAND_VIOLET: Color = Color::Rgb(118, 75, 162);

/// Secondary brand color - number cells, accents
/// RGB: (102, 126, 234), the site's #667eea
pub const BRAND_INDIGO: Color = Color::Rgb(102, 126, 234);

/// Highlight for winners and the super section
/// RGB: (255, 215, 0)
pub const GOLD: Color = Color::Rgb(255, 215, 0);

/// Non-numeric tokens (zodiac signs, multipliers)
/// RGB: (240, 147, 251)
pub const SIGN_PINK: Color = Color::Rgb(240, 147, 251);

/// Errors and failure banners
/// RGB: (245, 87, 108)
pub const ERROR_CORAL: Color = Color::Rgb(245, 87, 108);

/// Fresh-data and "live" indicators
/// RGB: (0, 255, 136)
pub const LIVE_MINT: Color = Color::Rgb(0, 255, 136);

/// Muted text - captions, pending placeholders
/// RGB: (169, 177, 214)
pub const MUTED: Color = Color::Rgb(169, 177, 214);

/// Confetti palette, matching the site's particle colors
pub const CONFETTI_COLORS: [Color; 6] = [
    BRAND_INDIGO,
    BRAND_VIOLET,
    SIGN_PINK,
    ERROR_CORAL,
    GOLD,
    LIVE_MINT,
];
