use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $(#[$meta])*
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant
            ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(PillShape {
    Round => "Round",
    Oval => "Oval",
    Capsule => "Capsule",
    Square => "Square",
    Unknown => "Unknown",
});

str_enum!(PillColor {
    White => "White",
    Black => "Black",
    Gray => "Gray",
    Red => "Red",
    Orange => "Orange",
    Yellow => "Yellow",
    Green => "Green",
    Blue => "Blue",
    Purple => "Purple",
    Pink => "Pink",
});

str_enum!(
    /// UI language. Unknown codes fall back to English via [`Locale::from_code`].
    Locale {
        En => "en",
        Ru => "ru",
        Uz => "uz",
    }
);

str_enum!(ThemeMode {
    Light => "light",
    Dark => "dark",
    System => "system",
});

impl Default for PillShape {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::System
    }
}

impl Locale {
    /// Resolve a language code such as `ru` or `uz-Latn-UZ`.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        primary.parse().unwrap_or_default()
    }
}

// ═══════════════════════════════════════════════════════════
// ColorLabel
// ═══════════════════════════════════════════════════════════

/// A pill color as printed on packaging: one color, or a two-tone
/// capsule such as `White/Blue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorLabel {
    primary: PillColor,
    secondary: Option<PillColor>,
}

impl ColorLabel {
    pub const fn solid(color: PillColor) -> Self {
        Self {
            primary: color,
            secondary: None,
        }
    }

    pub const fn two_tone(primary: PillColor, secondary: PillColor) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    pub fn primary(&self) -> PillColor {
        self.primary
    }

    pub fn secondary(&self) -> Option<PillColor> {
        self.secondary
    }

    pub fn components(&self) -> impl Iterator<Item = PillColor> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn contains(&self, color: PillColor) -> bool {
        self.components().any(|c| c == color)
    }

    /// True when the labels are equal or one is contained in the other
    /// (`White` matches `White/Blue`, `Blue` matches `White/Blue`).
    pub fn overlaps(&self, other: &ColorLabel) -> bool {
        self.components().all(|c| other.contains(c))
            || other.components().all(|c| self.contains(c))
    }
}

impl From<PillColor> for ColorLabel {
    fn from(color: PillColor) -> Self {
        Self::solid(color)
    }
}

impl std::fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => f.write_str(self.primary.as_str()),
        }
    }
}

impl std::str::FromStr for ColorLabel {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/').map(str::trim);
        let primary = parts.next().unwrap_or_default().parse()?;
        let secondary = parts.next().map(str::parse).transpose()?;
        if parts.next().is_some() {
            return Err(InvalidEnum {
                field: "ColorLabel".into(),
                value: s.into(),
            });
        }
        Ok(Self { primary, secondary })
    }
}

impl Serialize for ColorLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_round_trips_through_str() {
        for shape in PillShape::ALL {
            assert_eq!(shape.as_str().parse::<PillShape>().unwrap(), *shape);
        }
    }

    #[test]
    fn unknown_shape_string_rejected() {
        let err = "Triangle".parse::<PillShape>().unwrap_err();
        assert_eq!(err.field, "PillShape");
        assert_eq!(err.value, "Triangle");
    }

    #[test]
    fn locale_from_region_code() {
        assert_eq!(Locale::from_code("ru-RU"), Locale::Ru);
        assert_eq!(Locale::from_code("uz_Latn"), Locale::Uz);
        assert_eq!(Locale::from_code("EN"), Locale::En);
    }

    #[test]
    fn locale_unknown_code_falls_back_to_english() {
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Uz).unwrap(), "\"uz\"");
        assert_eq!(
            serde_json::from_str::<ThemeMode>("\"dark\"").unwrap(),
            ThemeMode::Dark
        );
    }

    #[test]
    fn color_label_display_and_parse() {
        let label = ColorLabel::two_tone(PillColor::White, PillColor::Blue);
        assert_eq!(label.to_string(), "White/Blue");
        assert_eq!("White/Blue".parse::<ColorLabel>().unwrap(), label);
        assert_eq!("Pink".parse::<ColorLabel>().unwrap(), ColorLabel::solid(PillColor::Pink));
        assert!("White/Blue/Red".parse::<ColorLabel>().is_err());
        assert!("Teal".parse::<ColorLabel>().is_err());
    }

    #[test]
    fn color_label_overlap_is_containment_either_way() {
        let white = ColorLabel::solid(PillColor::White);
        let blue = ColorLabel::solid(PillColor::Blue);
        let white_blue = ColorLabel::two_tone(PillColor::White, PillColor::Blue);
        let blue_white = ColorLabel::two_tone(PillColor::Blue, PillColor::White);

        assert!(white.overlaps(&white));
        assert!(white.overlaps(&white_blue));
        assert!(white_blue.overlaps(&blue));
        assert!(white_blue.overlaps(&blue_white));
        assert!(!white.overlaps(&blue));
        assert!(!ColorLabel::two_tone(PillColor::Red, PillColor::Yellow).overlaps(&white_blue));
    }

    #[test]
    fn color_label_json_is_plain_string() {
        let label = ColorLabel::two_tone(PillColor::Yellow, PillColor::Red);
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"Yellow/Red\"");
        let back: ColorLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }
}
