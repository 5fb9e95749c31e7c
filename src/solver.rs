//! Basis completion seam for key generation.
//!
//! Key generation needs the auxiliary pair (F, G) that completes the
//! sampled noise pair (f, g) into a 2x2 secret basis. A production
//! implementation derives (F, G) by solving the NTRU equation; this crate
//! ships a constant stand-in instead and keeps the solver behind a trait
//! so a real implementation can be substituted without touching the
//! encoders.

use crate::error::Result;
use crate::keygen::Seed;
use crate::poly::unit_poly;

/// A completed 2x2 secret basis.
///
/// Only the four polynomials are materialized; no matrix type exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basis {
    /// Secret noise polynomial f.
    pub f: Vec<i64>,
    /// Secret noise polynomial g.
    pub g: Vec<i64>,
    /// Auxiliary polynomial F.
    pub big_f: Vec<i64>,
    /// Auxiliary polynomial G.
    pub big_g: Vec<i64>,
}

/// Completes a sampled noise pair into a full secret basis.
///
/// Implementations may replace the sampled pair outright; the stand-in
/// does so for the zero seed.
pub trait BasisSolver {
    /// Produces the basis for the given seed and sampled noise pair.
    ///
    /// All four returned polynomials must have the same length as the
    /// sampled pair.
    fn solve(&self, seed: &Seed, f: Vec<i64>, g: Vec<i64>) -> Result<Basis>;
}

/// The default solver: a fixed constant basis.
///
/// No NTRU equation is solved. For the zero seed the sampled pair is
/// discarded and the basis is (x^0, 0, 0, x^0); for any other seed the
/// sampled pair is kept and completed with the constant pair
/// (F, G) = (0, x^0).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandInSolver;

impl BasisSolver for StandInSolver {
    fn solve(&self, seed: &Seed, f: Vec<i64>, g: Vec<i64>) -> Result<Basis> {
        let n = f.len();
        if seed.is_zero() {
            Ok(Basis {
                f: unit_poly(n),
                g: vec![0; n],
                big_f: vec![0; n],
                big_g: unit_poly(n),
            })
        } else {
            Ok(Basis {
                f,
                g,
                big_f: vec![0; n],
                big_g: unit_poly(n),
            })
        }
    }
}
