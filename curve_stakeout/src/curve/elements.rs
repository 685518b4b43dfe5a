//! Composite elements of a symmetric spiral-circular-spiral curve.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Scalar geometry of one spiral-circular-spiral curve.
///
/// Built once by [`CurveElements::compute`] and only read afterwards.
/// `x0`/`y0` locate the spiral end relative to the tangent point, measured
/// along and across the tangent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveElements {
    /// Circular radius R (m).
    pub radius: f64,
    /// Spiral length Ls (m).
    pub transition_length: f64,
    /// Absolute deflection angle α (rad).
    pub alpha: f64,
    /// Spiral deflection β0 = Ls / 2R.
    pub beta0: f64,
    /// Shift of the circle towards the tangent.
    pub p: f64,
    /// Tangent increment.
    pub q: f64,
    /// Tangent length T.
    pub tangent: f64,
    /// Circular arc length Ly.
    pub arc_length: f64,
    /// Total curve length L = 2Ls + Ly.
    pub total_length: f64,
    /// External distance E.
    pub external: f64,
    /// Tangent deficit D = 2T - L.
    pub deficit: f64,
    pub x0: f64,
    pub y0: f64,
}

impl CurveElements {
    /// Validates the design values and derives every curve element.
    ///
    /// `deflection_angle` may be signed; only its magnitude enters the
    /// geometry. A zero `transition_length` gives a plain circular curve.
    /// The spirals may use up the whole arc (`Ls <= R·α`) but not more.
    pub fn compute(
        deflection_angle: f64,
        radius: f64,
        transition_length: f64,
    ) -> Result<Self, CurveError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CurveError::curve_parameter(format!(
                "radius must be a finite positive number, got {radius}"
            )));
        }
        if !transition_length.is_finite() || transition_length < 0.0 {
            return Err(CurveError::curve_parameter(format!(
                "transition length must be finite and not negative, got {transition_length}"
            )));
        }
        let alpha = deflection_angle.abs();
        if !alpha.is_finite() || alpha == 0.0 {
            return Err(CurveError::curve_parameter(format!(
                "deflection angle must be finite and nonzero, got {deflection_angle}"
            )));
        }
        if alpha >= PI {
            return Err(CurveError::curve_parameter(format!(
                "deflection angle must stay below 180 degrees, got {:.6} rad",
                alpha
            )));
        }
        let limit = radius * alpha;
        if transition_length > limit {
            return Err(CurveError::curve_parameter(format!(
                "transition length {transition_length} exceeds R*alpha = {limit:.3}; \
                 spirals would overlap"
            )));
        }

        let r = radius;
        let ls = transition_length;
        let beta0 = ls / (2.0 * r);
        let p = ls * ls / (24.0 * r);
        let q = ls / 2.0 - ls.powi(3) / (240.0 * r * r);
        let half = alpha / 2.0;
        let tangent = q + (r + p) * half.tan();
        let arc_length = r * (alpha - 2.0 * beta0);
        let total_length = 2.0 * ls + arc_length;
        let external = (r + p) / half.cos() - r;
        let deficit = 2.0 * tangent - total_length;
        let x0 = ls - ls.powi(3) / (40.0 * r * r);
        let y0 = ls * ls / (6.0 * r) - ls.powi(4) / (336.0 * r.powi(3));

        let elements = Self {
            radius: r,
            transition_length: ls,
            alpha,
            beta0,
            p,
            q,
            tangent,
            arc_length,
            total_length,
            external,
            deficit,
            x0,
            y0,
        };
        let bad = elements.non_finite_fields();
        if !bad.is_empty() {
            return Err(CurveError::CurveComputation { fields: bad });
        }
        log::debug!(
            "curve elements: R={r} Ls={ls} alpha={alpha:.6} T={tangent:.4} \
             L={total_length:.4} E={external:.4}"
        );
        Ok(elements)
    }

    /// Every element paired with its name, in computation order.
    pub fn named_values(&self) -> [(&'static str, f64); 13] {
        [
            ("R", self.radius),
            ("Ls", self.transition_length),
            ("alpha", self.alpha),
            ("beta0", self.beta0),
            ("p", self.p),
            ("q", self.q),
            ("T", self.tangent),
            ("Ly", self.arc_length),
            ("L", self.total_length),
            ("E", self.external),
            ("D", self.deficit),
            ("x0", self.x0),
            ("y0", self.y0),
        ]
    }

    /// Names of elements that are NaN or infinite.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.named_values()
            .iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Checks elements that may have been assembled by hand.
    pub fn check_complete(&self) -> Result<(), CurveError> {
        let bad = self.non_finite_fields();
        if bad.is_empty() {
            Ok(())
        } else {
            Err(CurveError::IncompleteCurveElements { fields: bad })
        }
    }
}
