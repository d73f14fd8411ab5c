//! Share computation: fixed shares first, then the residue.
//!
//! Residue handling is a decision table over three facts about the
//! family: whether a son survives, whether any child survives, and
//! whether the father survives. Each row is a [`ResidualCase`].

use crate::composition::FamilyComposition;
use crate::error::FaraidError;
use crate::share::{Distribution, Heir, HeirShare, ShareBasis};

/// Residue fractions at or below this are treated as nothing left.
const RESIDUE_EPSILON: f64 = 1e-12;

/// Who takes the residue after fixed shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidualCase {
    /// Sons present: sons and daughters split 2:1.
    ChildrenTwoToOne,
    /// No children, father alive: father takes all of it.
    FatherSole,
    /// Daughters only, father alive: father takes it on top of his 1/6.
    FatherAfterDaughters,
    /// No residuary heir: residue goes to the Baitul Mal.
    BaitulMal,
}

impl ResidualCase {
    /// Decision table over `(son present, any child present, father alive)`.
    pub fn classify(has_son: bool, has_child: bool, father_alive: bool) -> Self {
        match (has_son, has_child, father_alive) {
            (true, _, _) => Self::ChildrenTwoToOne,
            (false, false, true) => Self::FatherSole,
            (false, true, true) => Self::FatherAfterDaughters,
            (false, _, false) => Self::BaitulMal,
        }
    }

    pub fn for_family(c: &FamilyComposition) -> Self {
        Self::classify(c.has_son(), c.has_child(), c.father_alive)
    }
}

/// Fixed (Fard) shares in emission order.
///
/// Rules are independent of each other; only the presence of any child
/// and of a son gate them.
pub fn fard_shares(c: &FamilyComposition) -> Vec<HeirShare> {
    let child = c.has_child();
    let mut shares = Vec::with_capacity(5);
    let mut push = |heir: Heir, basis: ShareBasis| {
        if let Some(frac) = basis.fixed_fraction() {
            shares.push(HeirShare::new(heir, basis, frac, c.estate));
        }
    };

    if c.husband_alive {
        push(Heir::Husband, if child { ShareBasis::Quarter } else { ShareBasis::Half });
    }
    if c.wife_alive {
        push(Heir::Wife, if child { ShareBasis::Eighth } else { ShareBasis::Quarter });
    }
    if c.mother_alive {
        push(Heir::Mother, if child { ShareBasis::Sixth } else { ShareBasis::Third });
    }
    if c.father_alive && child {
        push(Heir::FatherFard, ShareBasis::Sixth);
    }
    if c.daughters > 0 && !c.has_son() {
        let basis = if c.daughters == 1 {
            ShareBasis::Half
        } else {
            ShareBasis::TwoThirds
        };
        push(Heir::Daughters(c.daughters), basis);
    }
    shares
}

fn residual_shares(
    case: ResidualCase,
    c: &FamilyComposition,
    residue: f64,
) -> Vec<HeirShare> {
    let has_residue = residue > RESIDUE_EPSILON;
    match case {
        ResidualCase::ChildrenTwoToOne => {
            let units = f64::from(c.sons) * 2.0 + f64::from(c.daughters);
            let unit = residue / units;
            let mut out = vec![HeirShare::new(
                Heir::Sons(c.sons),
                ShareBasis::TwoToOne,
                unit * 2.0 * f64::from(c.sons),
                c.estate,
            )];
            if c.daughters > 0 {
                out.push(HeirShare::new(
                    Heir::Daughters(c.daughters),
                    ShareBasis::TwoToOne,
                    unit * f64::from(c.daughters),
                    c.estate,
                ));
            }
            out
        }
        ResidualCase::FatherSole if has_residue => vec![HeirShare::new(
            Heir::FatherResidual,
            ShareBasis::Residue,
            residue,
            c.estate,
        )],
        ResidualCase::FatherAfterDaughters if has_residue => vec![HeirShare::new(
            Heir::FatherSurplus,
            ShareBasis::Residue,
            residue,
            c.estate,
        )],
        ResidualCase::BaitulMal if has_residue => vec![HeirShare::new(
            Heir::BaitulMal,
            ShareBasis::Unclaimed,
            residue,
            c.estate,
        )],
        _ => Vec::new(),
    }
}

/// Divide the estate among the surviving heirs.
///
/// Spouse exclusivity is not checked here; see
/// [`FamilyComposition::check_spouses`].
///
/// # Errors
/// Returns [`FaraidError::InvalidEstate`] for a non-finite or
/// non-positive estate.
pub fn distribute(c: &FamilyComposition) -> Result<Distribution, FaraidError> {
    c.check_estate()?;

    let mut shares = fard_shares(c);
    let fard_total: f64 = shares.iter().map(|s| s.fraction).sum();
    let residue = (1.0 - fard_total).max(0.0);
    let case = ResidualCase::for_family(c);
    tracing::debug!(?case, fard_total, residue, "inheritance residue case");

    shares.extend(residual_shares(case, c, residue));
    Ok(Distribution {
        estate: c.estate,
        shares,
        fard_total,
    })
}
