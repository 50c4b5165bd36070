use crate::state::ThemeMode;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_detail: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Palette for the given mode.
    ///
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light palette (Rose Pine Dawn).
    ///
    pub fn light() -> Self {
        Theme {
            name: "light",
            primary: ColorSpec::rgb(144, 122, 169),        // Iris
            secondary: ColorSpec::rgb(40, 105, 131),       // Pine
            accent: ColorSpec::rgb(180, 99, 122),          // Love
            banner: ColorSpec::rgb(180, 99, 122),          // Love
            text: ColorSpec::rgb(87, 82, 121),             // Text
            text_secondary: ColorSpec::rgb(121, 117, 147), // Subtle
            text_muted: ColorSpec::rgb(152, 147, 165),     // Muted
            background: ColorSpec::rgb(250, 244, 237),     // Base
            surface: ColorSpec::rgb(255, 250, 243),        // Surface
            success: ColorSpec::rgb(40, 105, 131),         // Pine
            warning: ColorSpec::rgb(234, 157, 52),         // Gold
            error: ColorSpec::rgb(180, 99, 122),           // Love
            info: ColorSpec::rgb(86, 148, 159),            // Foam
            border_active: ColorSpec::rgb(144, 122, 169),  // Iris
            border_normal: ColorSpec::rgb(152, 147, 165),  // Muted
            highlight_bg: ColorSpec::rgb(223, 218, 217),   // Highlight med
            highlight_fg: ColorSpec::rgb(87, 82, 121),     // Text
            footer_search: ColorSpec::rgb(86, 148, 159),   // Foam
            footer_detail: ColorSpec::rgb(144, 122, 169),  // Iris
            footer_normal: ColorSpec::rgb(215, 130, 126),  // Rose
        }
    }

    /// Dark palette (Rose Pine).
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark",
            primary: ColorSpec::rgb(196, 167, 231),        // Iris
            secondary: ColorSpec::rgb(49, 116, 143),       // Pine
            accent: ColorSpec::rgb(235, 111, 146),         // Love
            banner: ColorSpec::rgb(235, 111, 146),         // Love
            text: ColorSpec::rgb(224, 222, 244),           // Text
            text_secondary: ColorSpec::rgb(144, 140, 170), // Subtle
            text_muted: ColorSpec::rgb(110, 106, 134),     // Muted
            background: ColorSpec::rgb(25, 23, 36),        // Base
            surface: ColorSpec::rgb(31, 29, 46),           // Surface
            success: ColorSpec::rgb(49, 116, 143),         // Pine
            warning: ColorSpec::rgb(246, 193, 119),        // Gold
            error: ColorSpec::rgb(235, 111, 146),          // Love
            info: ColorSpec::rgb(156, 207, 216),           // Foam
            border_active: ColorSpec::rgb(196, 167, 231),  // Iris
            border_normal: ColorSpec::rgb(144, 140, 170),  // Subtle
            highlight_bg: ColorSpec::rgb(64, 61, 82),      // Highlight med
            highlight_fg: ColorSpec::rgb(224, 222, 244),   // Text
            footer_search: ColorSpec::rgb(156, 207, 216),  // Foam
            footer_detail: ColorSpec::rgb(196, 167, 231),  // Iris
            footer_normal: ColorSpec::rgb(235, 188, 186),  // Rose
        }
    }
}
