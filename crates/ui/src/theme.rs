use ratatui::prelude::Color;
use reader_core::settings::ThemeName;

// Midnight is the Tokyonight palette.
const TN_BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
const TN_BG_ALT: Color = Color::Rgb(31, 35, 53); // #1f2335
const TN_BG_STRONG: Color = Color::Rgb(65, 72, 104); // #414868
const TN_FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
const TN_MUTED: Color = Color::Rgb(86, 95, 137); // #565f89
const TN_BLUE: Color = Color::Rgb(122, 162, 247); // #7aa2f7
const TN_RED: Color = Color::Rgb(247, 118, 142); // #f7768e

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub pivot: Color,
    pub accent: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Theme {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Rgb(36, 41, 47),
                muted: Color::Rgb(140, 149, 159),
                pivot: Color::Rgb(207, 34, 46),
                accent: Color::Rgb(9, 105, 218),
                header_bg: Color::Rgb(234, 238, 242),
                header_fg: Color::Rgb(36, 41, 47),
                footer_bg: Color::Rgb(234, 238, 242),
                footer_fg: Color::Rgb(9, 105, 218),
            },
            ThemeName::Dark => Theme {
                bg: TN_BG,
                fg: TN_FG,
                muted: TN_MUTED,
                pivot: TN_RED,
                accent: TN_BLUE,
                header_bg: TN_BG_ALT,
                header_fg: TN_FG,
                footer_bg: TN_BG_STRONG,
                footer_fg: TN_BLUE,
            },
            ThemeName::Sepia => Theme {
                bg: Color::Rgb(244, 236, 216),
                fg: Color::Rgb(91, 70, 54),
                muted: Color::Rgb(165, 145, 120),
                pivot: Color::Rgb(176, 58, 46),
                accent: Color::Rgb(133, 94, 66),
                header_bg: Color::Rgb(232, 220, 192),
                header_fg: Color::Rgb(91, 70, 54),
                footer_bg: Color::Rgb(232, 220, 192),
                footer_fg: Color::Rgb(133, 94, 66),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_name(ThemeName::default())
    }
}
