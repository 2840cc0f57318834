//! Hindustani shrutis and their just-intonation ratios.
//!
//! Twenty-two microtones are spread over the twelve chromatic degrees of an
//! octave. Sa and Pa are fixed; every other degree offers two shrutis. Picking
//! one shruti per degree yields a [`RatioTable`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tuning::{RatioTable, DEGREES};

/// One of the 22 shrutis.
///
/// Serialized as its conventional symbol (`"S"`, `"r1"`, `"R2"`, `"m1"`, ...),
/// where lower case marks the komal or teevra side of the swara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shruti {
    #[serde(rename = "S")]
    Shadja,
    #[serde(rename = "r1")]
    AtikomalRishabh,
    #[serde(rename = "r2")]
    KomalRishabh,
    #[serde(rename = "R1")]
    ShuddhaRishabh,
    #[serde(rename = "R2")]
    TeevraRishabh,
    #[serde(rename = "g1")]
    AtikomalGandhar,
    #[serde(rename = "g2")]
    KomalGandhar,
    #[serde(rename = "G1")]
    ShuddhaGandhar,
    #[serde(rename = "G2")]
    TeevraGandhar,
    #[serde(rename = "M1")]
    ShuddhaMadhyam,
    #[serde(rename = "M2")]
    EkashrutiMadhyam,
    #[serde(rename = "m1")]
    TeevraMadhyam,
    #[serde(rename = "m2")]
    TeevratamaMadhyam,
    #[serde(rename = "P")]
    Pancham,
    #[serde(rename = "d1")]
    AtikomalDhaivat,
    #[serde(rename = "d2")]
    KomalDhaivat,
    #[serde(rename = "D1")]
    ShuddhaDhaivat,
    #[serde(rename = "D2")]
    TeevraDhaivat,
    #[serde(rename = "n1")]
    AtikomalNishad,
    #[serde(rename = "n2")]
    KomalNishad,
    #[serde(rename = "N1")]
    ShuddhaNishad,
    #[serde(rename = "N2")]
    TeevraNishad,
}

impl Shruti {
    /// All shrutis in ascending pitch order.
    pub const ALL: [Shruti; 22] = [
        Shruti::Shadja,
        Shruti::AtikomalRishabh,
        Shruti::KomalRishabh,
        Shruti::ShuddhaRishabh,
        Shruti::TeevraRishabh,
        Shruti::AtikomalGandhar,
        Shruti::KomalGandhar,
        Shruti::ShuddhaGandhar,
        Shruti::TeevraGandhar,
        Shruti::ShuddhaMadhyam,
        Shruti::EkashrutiMadhyam,
        Shruti::TeevraMadhyam,
        Shruti::TeevratamaMadhyam,
        Shruti::Pancham,
        Shruti::AtikomalDhaivat,
        Shruti::KomalDhaivat,
        Shruti::ShuddhaDhaivat,
        Shruti::TeevraDhaivat,
        Shruti::AtikomalNishad,
        Shruti::KomalNishad,
        Shruti::ShuddhaNishad,
        Shruti::TeevraNishad,
    ];

    /// The default selection, one shruti per chromatic degree.
    pub const DEFAULTS: [Shruti; DEGREES] = [
        Shruti::Shadja,
        Shruti::KomalRishabh,
        Shruti::ShuddhaRishabh,
        Shruti::KomalGandhar,
        Shruti::ShuddhaGandhar,
        Shruti::ShuddhaMadhyam,
        Shruti::TeevraMadhyam,
        Shruti::Pancham,
        Shruti::KomalDhaivat,
        Shruti::ShuddhaDhaivat,
        Shruti::KomalNishad,
        Shruti::ShuddhaNishad,
    ];

    /// The ratio as an exact fraction `(numerator, denominator)`.
    pub fn fraction(self) -> (u32, u32) {
        match self {
            Shruti::Shadja => (1, 1),
            Shruti::AtikomalRishabh => (256, 243),
            Shruti::KomalRishabh => (16, 15),
            Shruti::ShuddhaRishabh => (10, 9),
            Shruti::TeevraRishabh => (9, 8),
            Shruti::AtikomalGandhar => (32, 27),
            Shruti::KomalGandhar => (6, 5),
            Shruti::ShuddhaGandhar => (5, 4),
            Shruti::TeevraGandhar => (81, 64),
            Shruti::ShuddhaMadhyam => (4, 3),
            Shruti::EkashrutiMadhyam => (27, 20),
            Shruti::TeevraMadhyam => (45, 32),
            Shruti::TeevratamaMadhyam => (729, 512),
            Shruti::Pancham => (3, 2),
            Shruti::AtikomalDhaivat => (128, 81),
            Shruti::KomalDhaivat => (8, 5),
            Shruti::ShuddhaDhaivat => (5, 3),
            Shruti::TeevraDhaivat => (27, 16),
            Shruti::AtikomalNishad => (16, 9),
            Shruti::KomalNishad => (9, 5),
            Shruti::ShuddhaNishad => (15, 8),
            Shruti::TeevraNishad => (243, 128),
        }
    }

    /// The frequency multiplier relative to Sa.
    pub fn ratio(self) -> f64 {
        let (num, den) = self.fraction();
        num as f64 / den as f64
    }

    /// The conventional symbol, e.g. `"r2"` or `"P"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Shruti::Shadja => "S",
            Shruti::AtikomalRishabh => "r1",
            Shruti::KomalRishabh => "r2",
            Shruti::ShuddhaRishabh => "R1",
            Shruti::TeevraRishabh => "R2",
            Shruti::AtikomalGandhar => "g1",
            Shruti::KomalGandhar => "g2",
            Shruti::ShuddhaGandhar => "G1",
            Shruti::TeevraGandhar => "G2",
            Shruti::ShuddhaMadhyam => "M1",
            Shruti::EkashrutiMadhyam => "M2",
            Shruti::TeevraMadhyam => "m1",
            Shruti::TeevratamaMadhyam => "m2",
            Shruti::Pancham => "P",
            Shruti::AtikomalDhaivat => "d1",
            Shruti::KomalDhaivat => "d2",
            Shruti::ShuddhaDhaivat => "D1",
            Shruti::TeevraDhaivat => "D2",
            Shruti::AtikomalNishad => "n1",
            Shruti::KomalNishad => "n2",
            Shruti::ShuddhaNishad => "N1",
            Shruti::TeevraNishad => "N2",
        }
    }

    /// The swara (scale degree) this shruti belongs to.
    pub fn swara(self) -> &'static str {
        match self.degree() {
            0 => "Shadja",
            1 | 2 => "Rishabh",
            3 | 4 => "Gandhar",
            5 | 6 => "Madhyam",
            7 => "Pancham",
            8 | 9 => "Dhaivat",
            _ => "Nishad",
        }
    }

    /// The shruti name qualifying the swara; Sa and Pa have none.
    pub fn variant(self) -> Option<&'static str> {
        match self {
            Shruti::Shadja | Shruti::Pancham => None,
            Shruti::AtikomalRishabh
            | Shruti::AtikomalGandhar
            | Shruti::AtikomalDhaivat
            | Shruti::AtikomalNishad => Some("Atikomal"),
            Shruti::KomalRishabh
            | Shruti::KomalGandhar
            | Shruti::KomalDhaivat
            | Shruti::KomalNishad => Some("Komal"),
            Shruti::ShuddhaRishabh
            | Shruti::ShuddhaGandhar
            | Shruti::ShuddhaMadhyam
            | Shruti::ShuddhaDhaivat
            | Shruti::ShuddhaNishad => Some("Shuddha"),
            Shruti::TeevraRishabh
            | Shruti::TeevraGandhar
            | Shruti::TeevraMadhyam
            | Shruti::TeevraDhaivat
            | Shruti::TeevraNishad => Some("Teevra"),
            Shruti::EkashrutiMadhyam => Some("Ekashruti"),
            Shruti::TeevratamaMadhyam => Some("Teevratama"),
        }
    }

    /// The chromatic degree (0..12) at which this shruti may be chosen.
    pub fn degree(self) -> usize {
        match self {
            Shruti::Shadja => 0,
            Shruti::AtikomalRishabh | Shruti::KomalRishabh => 1,
            Shruti::ShuddhaRishabh | Shruti::TeevraRishabh => 2,
            Shruti::AtikomalGandhar | Shruti::KomalGandhar => 3,
            Shruti::ShuddhaGandhar | Shruti::TeevraGandhar => 4,
            Shruti::ShuddhaMadhyam | Shruti::EkashrutiMadhyam => 5,
            Shruti::TeevraMadhyam | Shruti::TeevratamaMadhyam => 6,
            Shruti::Pancham => 7,
            Shruti::AtikomalDhaivat | Shruti::KomalDhaivat => 8,
            Shruti::ShuddhaDhaivat | Shruti::TeevraDhaivat => 9,
            Shruti::AtikomalNishad | Shruti::KomalNishad => 10,
            Shruti::ShuddhaNishad | Shruti::TeevraNishad => 11,
        }
    }

    /// The shrutis that may be chosen for a chromatic degree.
    pub fn choices(degree: usize) -> Vec<Shruti> {
        Self::ALL
            .iter()
            .copied()
            .filter(|s| s.degree() == degree)
            .collect()
    }
}

impl fmt::Display for Shruti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Shruti {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|shruti| shruti.symbol() == s)
            .ok_or_else(|| format!("unknown shruti '{}'", s))
    }
}

impl RatioTable {
    /// Builds a ratio table from one shruti per chromatic degree.
    ///
    /// The shrutis are used in the order given; the first must be Sa for the
    /// table to pass validation.
    pub fn from_shrutis(shrutis: &[Shruti]) -> Result<Self, crate::tuning::TuningError> {
        Self::new(shrutis.iter().map(|s| s.ratio()).collect())
    }

    /// The ratio table of [`Shruti::DEFAULTS`].
    pub fn default_shrutis() -> Self {
        let mut ratios = [1.0; DEGREES];
        for (slot, shruti) in ratios.iter_mut().zip(Shruti::DEFAULTS) {
            *slot = shruti.ratio();
        }
        // Sa comes first and every entry is a positive fraction.
        RatioTable { ratios }
    }
}
