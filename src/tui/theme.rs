use ratatui::style::Color;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, `t` in `0.0..=1.0`. Channels are truncated.
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }

    pub fn to_tui(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    pub fn to_term(self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

/// A named color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub light_grey: Rgb,
    pub dark_grey: Rgb,
    pub white: Rgb,
    pub ghost_purple: Rgb,
    pub haunted_green: Rgb,
    pub shadow_blue: Rgb,
    pub yellow: Rgb,
    pub red: Rgb,
    pub cyan_faint: Rgb,
    pub banner_start: Rgb,
    pub banner_end: Rgb,
}

/// Built-in themes, in menu order
pub static THEMES: [Theme; 3] = [
    Theme {
        name: "Ghosty Classic",
        light_grey: Rgb(180, 180, 190),
        dark_grey: Rgb(120, 120, 130),
        white: Rgb(245, 245, 245),
        ghost_purple: Rgb(140, 120, 170),
        haunted_green: Rgb(140, 200, 170),
        shadow_blue: Rgb(120, 160, 200),
        yellow: Rgb(230, 200, 120),
        red: Rgb(220, 80, 80),
        cyan_faint: Rgb(150, 220, 220),
        banner_start: Rgb(110, 110, 115),
        banner_end: Rgb(240, 240, 245),
    },
    Theme {
        name: "Dracula",
        light_grey: Rgb(189, 147, 249),
        dark_grey: Rgb(139, 233, 253),
        white: Rgb(248, 248, 242),
        ghost_purple: Rgb(189, 147, 249),
        haunted_green: Rgb(80, 250, 123),
        shadow_blue: Rgb(139, 233, 253),
        yellow: Rgb(241, 250, 140),
        red: Rgb(255, 85, 85),
        cyan_faint: Rgb(139, 233, 253),
        banner_start: Rgb(68, 71, 90),
        banner_end: Rgb(189, 147, 249),
    },
    Theme {
        name: "Tokyo Dark",
        light_grey: Rgb(148, 162, 199),
        dark_grey: Rgb(105, 118, 155),
        white: Rgb(141, 152, 182),
        ghost_purple: Rgb(255, 204, 100),
        haunted_green: Rgb(126, 193, 95),
        shadow_blue: Rgb(113, 90, 255),
        yellow: Rgb(107, 72, 153),
        red: Rgb(255, 72, 65),
        cyan_faint: Rgb(86, 93, 139),
        banner_start: Rgb(169, 175, 214),
        banner_end: Rgb(107, 116, 182),
    },
];

impl Default for Theme {
    fn default() -> Self {
        THEMES[0].clone()
    }
}

impl Theme {
    /// Look a theme up by name, falling back to the default theme
    pub fn by_name(name: &str) -> &'static Theme {
        THEMES
            .iter()
            .find(|t| t.name == name)
            .unwrap_or(&THEMES[0])
    }

    /// Theme name at a 1-based menu position
    pub fn name_at(position: usize) -> Option<&'static str> {
        position
            .checked_sub(1)
            .and_then(|i| THEMES.get(i))
            .map(|t| t.name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|t| t.name)
    }

    /// Per-column colors for a banner line `width` cells wide
    pub fn banner_gradient(&self, width: usize) -> Vec<Rgb> {
        (0..width)
            .map(|i| {
                let t = if width > 1 {
                    i as f32 / (width - 1) as f32
                } else {
                    0.0
                };
                self.banner_start.lerp(self.banner_end, t)
            })
            .collect()
    }
}
