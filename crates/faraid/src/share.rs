//! Heir and share types returned by the engine.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Tolerance used when comparing summed fractions against one.
pub const FRACTION_EPSILON: f64 = 1e-9;

/// A line-item recipient in a distribution.
///
/// The father may appear twice: once with his fixed sixth and once as a
/// residuary heir when only daughters survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Heir {
    Husband,
    Wife,
    Mother,
    /// Father's fixed 1/6, only when a child survives.
    FatherFard,
    /// Daughters as one combined line, with their count.
    Daughters(u32),
    /// Sons as one combined line, with their count.
    Sons(u32),
    /// Father as sole residuary heir (no children).
    FatherResidual,
    /// Father taking the residue after daughters' fixed share.
    FatherSurplus,
    /// Unclaimed residue returned to the public treasury.
    BaitulMal,
}

impl Heir {
    /// Indonesian line label.
    pub fn label(self) -> String {
        match self {
            Self::Husband => "Suami".to_string(),
            Self::Wife => "Istri".to_string(),
            Self::Mother => "Ibu".to_string(),
            Self::FatherFard => "Ayah (Fardh)".to_string(),
            Self::Daughters(n) => format!("Anak Perempuan ({n})"),
            Self::Sons(n) => format!("Anak Laki-laki ({n})"),
            Self::FatherResidual => "Ayah (Ashabah)".to_string(),
            Self::FatherSurplus => "Ayah (Sisa)".to_string(),
            Self::BaitulMal => "Sisa (Baitul Mal)".to_string(),
        }
    }

    /// Number of people sharing this line.
    pub fn headcount(self) -> u32 {
        match self {
            Self::Daughters(n) | Self::Sons(n) => n,
            Self::BaitulMal => 0,
            _ => 1,
        }
    }
}

impl Display for Heir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Heir> for String {
    fn from(h: Heir) -> Self {
        h.label()
    }
}

/// Legal basis of a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ShareBasis {
    Half,
    Quarter,
    Eighth,
    Third,
    Sixth,
    TwoThirds,
    /// Residue split two units per son, one per daughter.
    TwoToOne,
    /// Whole residue to a residuary heir.
    Residue,
    /// Residue with no residuary heir.
    Unclaimed,
}

impl ShareBasis {
    /// Label shown next to the heir, e.g. `"1/4"` or `"Ashabah (2:1)"`.
    pub fn fraction_label(self) -> &'static str {
        match self {
            Self::Half => "1/2",
            Self::Quarter => "1/4",
            Self::Eighth => "1/8",
            Self::Third => "1/3",
            Self::Sixth => "1/6",
            Self::TwoThirds => "2/3",
            Self::TwoToOne => "Ashabah (2:1)",
            Self::Residue => "Sisa Harta",
            Self::Unclaimed => "Sisa",
        }
    }

    /// Fixed fraction for Fard bases, `None` for residuary ones.
    pub fn fixed_fraction(self) -> Option<f64> {
        match self {
            Self::Half => Some(1.0 / 2.0),
            Self::Quarter => Some(1.0 / 4.0),
            Self::Eighth => Some(1.0 / 8.0),
            Self::Third => Some(1.0 / 3.0),
            Self::Sixth => Some(1.0 / 6.0),
            Self::TwoThirds => Some(2.0 / 3.0),
            Self::TwoToOne | Self::Residue | Self::Unclaimed => None,
        }
    }

    pub fn is_fard(self) -> bool {
        self.fixed_fraction().is_some()
    }
}

impl Display for ShareBasis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fraction_label())
    }
}

impl From<ShareBasis> for String {
    fn from(b: ShareBasis) -> Self {
        b.fraction_label().to_string()
    }
}

/// One line of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeirShare {
    pub heir: Heir,
    pub basis: ShareBasis,
    /// Fraction of the whole estate, 0..1.
    pub fraction: f64,
    /// `fraction * estate`.
    pub amount: f64,
}

impl HeirShare {
    pub(crate) fn new(heir: Heir, basis: ShareBasis, fraction: f64, estate: f64) -> Self {
        Self {
            heir,
            basis,
            fraction,
            amount: fraction * estate,
        }
    }

    /// Amount received by each person on a combined line.
    ///
    /// Returns the full amount for single-person lines and for Baitul Mal.
    pub fn amount_per_person(&self) -> f64 {
        match self.heir.headcount() {
            0 | 1 => self.amount,
            n => self.amount / f64::from(n),
        }
    }

    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Itemized result of dividing one estate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub estate: f64,
    /// Lines in emission order: fixed shares first, then residue.
    pub shares: Vec<HeirShare>,
    /// Sum of the fixed (Fard) fractions before residue handling.
    pub fard_total: f64,
}

impl Distribution {
    /// Sum of all line fractions.
    pub fn total_fraction(&self) -> f64 {
        self.shares.iter().map(|s| s.fraction).sum()
    }

    pub fn total_amount(&self) -> f64 {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Fixed shares exceed the estate, the situation 'Awl would correct.
    pub fn is_oversubscribed(&self) -> bool {
        self.fard_total > 1.0 + FRACTION_EPSILON
    }

    /// First line for the given heir.
    pub fn share_of(&self, heir: Heir) -> Option<&HeirShare> {
        self.shares.iter().find(|s| s.heir == heir)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl Display for Distribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for s in &self.shares {
            writeln!(
                f,
                "{:<22} {:<14} {:>7.2}% {:>18.2}",
                s.heir.label(),
                s.basis.fraction_label(),
                s.percent(),
                s.amount
            )?;
        }
        write!(
            f,
            "{:<22} {:<14} {:>7.2}% {:>18.2}",
            "Total",
            "",
            self.total_fraction() * 100.0,
            self.total_amount()
        )
    }
}
