use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

pub const FALLBACK_COLOR: Rgb = Rgb(0x9C, 0x89, 0x75);
pub const FALLBACK_LABEL: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchFamily {
    Fastball,
    Offspeed,
    Slider,
    Curveball,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownPitch {
    FourSeam,
    Fastball,
    Sinker,
    Cutter,
    Changeup,
    Splitter,
    Screwball,
    Forkball,
    Slider,
    Sweeper,
    Slurve,
    KnuckleCurve,
    Curveball,
    SlowCurve,
    Eephus,
    Knuckleball,
    PitchOut,
    Unknown,
}

impl KnownPitch {
    pub const ALL: [KnownPitch; 18] = [
        KnownPitch::FourSeam,
        KnownPitch::Fastball,
        KnownPitch::Sinker,
        KnownPitch::Cutter,
        KnownPitch::Changeup,
        KnownPitch::Splitter,
        KnownPitch::Screwball,
        KnownPitch::Forkball,
        KnownPitch::Slider,
        KnownPitch::Sweeper,
        KnownPitch::Slurve,
        KnownPitch::KnuckleCurve,
        KnownPitch::Curveball,
        KnownPitch::SlowCurve,
        KnownPitch::Eephus,
        KnownPitch::Knuckleball,
        KnownPitch::PitchOut,
        KnownPitch::Unknown,
    ];

    /// Codes are matched exactly, as they appear in the `pitch_type` column.
    pub fn from_code(code: &str) -> Option<Self> {
        let pitch = match code {
            "FF" => Self::FourSeam,
            "FA" => Self::Fastball,
            "SI" => Self::Sinker,
            "FC" => Self::Cutter,
            "CH" => Self::Changeup,
            "FS" => Self::Splitter,
            "SC" => Self::Screwball,
            "FO" => Self::Forkball,
            "SL" => Self::Slider,
            "ST" => Self::Sweeper,
            "SV" => Self::Slurve,
            "KC" => Self::KnuckleCurve,
            "CU" => Self::Curveball,
            "CS" => Self::SlowCurve,
            "EP" => Self::Eephus,
            "KN" => Self::Knuckleball,
            "PO" => Self::PitchOut,
            "UN" => Self::Unknown,
            _ => return None,
        };
        Some(pitch)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::FourSeam => "FF",
            Self::Fastball => "FA",
            Self::Sinker => "SI",
            Self::Cutter => "FC",
            Self::Changeup => "CH",
            Self::Splitter => "FS",
            Self::Screwball => "SC",
            Self::Forkball => "FO",
            Self::Slider => "SL",
            Self::Sweeper => "ST",
            Self::Slurve => "SV",
            Self::KnuckleCurve => "KC",
            Self::Curveball => "CU",
            Self::SlowCurve => "CS",
            Self::Eephus => "EP",
            Self::Knuckleball => "KN",
            Self::PitchOut => "PO",
            Self::Unknown => "UN",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FourSeam => "4-Seam Fastball",
            Self::Fastball => "Fastball",
            Self::Sinker => "Sinker",
            Self::Cutter => "Cutter",
            Self::Changeup => "Changeup",
            Self::Splitter => "Splitter",
            Self::Screwball => "Screwball",
            Self::Forkball => "Forkball",
            Self::Slider => "Slider",
            Self::Sweeper => "Sweeper",
            Self::Slurve => "Slurve",
            Self::KnuckleCurve => "Knuckle Curve",
            Self::Curveball => "Curveball",
            Self::SlowCurve => "Slow Curve",
            Self::Eephus => "Eephus",
            Self::Knuckleball => "Knuckleball",
            Self::PitchOut => "Pitch Out",
            Self::Unknown => "Unknown",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::FourSeam | Self::Fastball => Rgb(0xFF, 0x00, 0x7D),
            Self::Sinker => Rgb(0x98, 0x16, 0x5D),
            Self::Cutter => Rgb(0xBE, 0x5F, 0xA0),
            Self::Changeup => Rgb(0xF7, 0x9E, 0x70),
            Self::Splitter => Rgb(0xFE, 0x61, 0x00),
            Self::Screwball => Rgb(0xF0, 0x82, 0x23),
            Self::Forkball => Rgb(0xFF, 0xB0, 0x00),
            Self::Slider => Rgb(0x67, 0xE1, 0x8D),
            Self::Sweeper => Rgb(0x1B, 0xB9, 0x99),
            Self::Slurve => Rgb(0x37, 0x67, 0x48),
            Self::KnuckleCurve => Rgb(0x31, 0x1D, 0x8B),
            Self::Curveball => Rgb(0x30, 0x25, 0xCE),
            Self::SlowCurve => Rgb(0x27, 0x4B, 0xFC),
            Self::Eephus => Rgb(0x64, 0x8F, 0xFF),
            Self::Knuckleball => Rgb(0x86, 0x7A, 0x08),
            Self::PitchOut => Rgb(0x47, 0x2C, 0x30),
            Self::Unknown => FALLBACK_COLOR,
        }
    }

    pub fn family(self) -> PitchFamily {
        match self {
            Self::FourSeam | Self::Fastball | Self::Sinker | Self::Cutter => PitchFamily::Fastball,
            Self::Changeup | Self::Splitter | Self::Screwball | Self::Forkball => {
                PitchFamily::Offspeed
            }
            Self::Slider | Self::Sweeper | Self::Slurve => PitchFamily::Slider,
            Self::KnuckleCurve | Self::Curveball | Self::SlowCurve | Self::Eephus => {
                PitchFamily::Curveball
            }
            Self::Knuckleball | Self::PitchOut | Self::Unknown => PitchFamily::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PitchClass {
    Known(KnownPitch),
    Unrecognized(String),
}

impl PitchClass {
    pub fn classify(code: &str) -> Self {
        match KnownPitch::from_code(code) {
            Some(pitch) => Self::Known(pitch),
            None => Self::Unrecognized(code.to_string()),
        }
    }

    pub fn style(&self) -> PitchStyle {
        match self {
            Self::Known(pitch) => PitchStyle {
                color: pitch.color(),
                name: Cow::Borrowed(pitch.name()),
            },
            Self::Unrecognized(code) => {
                let trimmed = code.trim();
                let name = if trimmed.is_empty() {
                    Cow::Borrowed(FALLBACK_LABEL)
                } else {
                    Cow::Owned(trimmed.to_string())
                };
                PitchStyle {
                    color: FALLBACK_COLOR,
                    name,
                }
            }
        }
    }

    pub fn known(&self) -> Option<KnownPitch> {
        match self {
            Self::Known(pitch) => Some(*pitch),
            Self::Unrecognized(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PitchStyle {
    pub color: Rgb,
    pub name: Cow<'static, str>,
}

/// Never fails: unrecognized codes get the fallback colour and their own code as label.
pub fn lookup(code: &str) -> PitchStyle {
    PitchClass::classify(code).style()
}
