//! Zodiac wheel mapping.
//!
//! The circle is split into twelve consecutive 30° bands starting at Aries.
//! A degree maps to the band it falls in plus its offset inside that band.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::round_degree;
use crate::constants::{FULL_CIRCLE, SIGN_COUNT, SIGN_SPAN};

/// One of the twelve zodiac signs, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in wheel order.
    pub const ALL: [ZodiacSign; SIGN_COUNT] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Sign at position `index` on the wheel, wrapping past Pisces.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SIGN_COUNT]
    }

    /// Position of this sign on the wheel (0 = Aries).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph for the sign.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Aries => '\u{2648}',
            Self::Taurus => '\u{2649}',
            Self::Gemini => '\u{264A}',
            Self::Cancer => '\u{264B}',
            Self::Leo => '\u{264C}',
            Self::Virgo => '\u{264D}',
            Self::Libra => '\u{264E}',
            Self::Scorpio => '\u{264F}',
            Self::Sagittarius => '\u{2650}',
            Self::Capricorn => '\u{2651}',
            Self::Aquarius => '\u{2652}',
            Self::Pisces => '\u{2653}',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sign plus the offset inside its 30° band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Offset inside the band, in `[0, 30)`, two decimals.
    pub sub_degree: f64,
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}\u{b0}",
            self.sign.symbol(),
            self.sign.name(),
            self.sub_degree
        )
    }
}

/// Map a degree to its zodiac sign and sub-degree.
///
/// Any real degree is accepted; it is first normalized onto `[0, 360)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zodiac_position(degree: f64) -> ZodiacPosition {
    let on_wheel = degree.rem_euclid(FULL_CIRCLE);
    let index = ((on_wheel / SIGN_SPAN).floor() as usize).min(SIGN_COUNT - 1);
    let sub_degree = round_degree(on_wheel.rem_euclid(SIGN_SPAN));
    // 29.995.. rounds to 30.00; it still belongs to the same band
    let sub_degree = if sub_degree >= SIGN_SPAN {
        SIGN_SPAN - 0.01
    } else {
        sub_degree
    };
    ZodiacPosition {
        sign: ZodiacSign::from_index(index),
        sub_degree,
    }
}
