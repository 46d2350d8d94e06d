//! Embedded cubature rules for adaptive integration.
//!
//! ## Purpose
//!
//! Each rule integrates a function over a single axis-aligned region and
//! returns an estimate, an error estimate and the axis along which the region
//! should be bisected if it needs refinement.
//!
//! ## Design notes
//!
//! * **One dimension**: 15-point Gauss-Kronrod with the embedded 7-point
//!   Gauss rule, using the QUADPACK error heuristic.
//! * **Two or more dimensions**: Genz-Malik degree-7 rule with an embedded
//!   degree-5 rule. The split axis is the one with the largest fourth
//!   divided difference; ties go to the widest axis.
//! * **Interior nodes**: No rule evaluates the region boundary, so integrands
//!   with integrable endpoint singularities are never sampled at the endpoint.
//!
//! ## Invariants
//!
//! * Regions are described by centre and half-width; volume is `prod(2 h_i)`.
//! * The error estimate is non-negative (or NaN when the integrand is).

// ============================================================================
// Rule Output
// ============================================================================

/// Integral estimate over one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleEstimate {
    /// Higher-order estimate of the integral.
    pub value: f64,

    /// Error estimate.
    pub error: f64,

    /// Axis to bisect when refining.
    pub split_axis: usize,
}

// ============================================================================
// Gauss-Kronrod 7-15
// ============================================================================

/// Kronrod abscissae on [0, 1); odd indices are the Gauss nodes.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for XGK[1], XGK[3], XGK[5] and the centre.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Integrand evaluations per Gauss-Kronrod region.
pub const KRONROD_POINTS: usize = 15;

/// Apply the 15-point Gauss-Kronrod rule on `[center - halfwidth, center + halfwidth]`.
pub fn gauss_kronrod<F>(mut f: F, center: f64, halfwidth: f64) -> RuleEstimate
where
    F: FnMut(f64) -> f64,
{
    let abs_halfwidth = halfwidth.abs();
    let mut fv1 = [0.0; 7];
    let mut fv2 = [0.0; 7];

    let fc = f(center);
    let mut resg = fc * WG[3];
    let mut resk = fc * WGK[7];
    let mut resabs = resk.abs();

    for j in 0..7 {
        let absc = halfwidth * XGK[j];
        let f1 = f(center - absc);
        let f2 = f(center + absc);
        fv1[j] = f1;
        fv2[j] = f2;
        let fsum = f1 + f2;
        resk += WGK[j] * fsum;
        resabs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            resg += WG[j / 2] * fsum;
        }
    }

    let reskh = resk * 0.5;
    let mut resasc = WGK[7] * (fc - reskh).abs();
    for j in 0..7 {
        resasc += WGK[j] * ((fv1[j] - reskh).abs() + (fv2[j] - reskh).abs());
    }

    let value = resk * halfwidth;
    resabs *= abs_halfwidth;
    resasc *= abs_halfwidth;
    let mut error = ((resk - resg) * halfwidth).abs();

    if resasc != 0.0 && error != 0.0 {
        error = resasc * (200.0 * error / resasc).powf(1.5).min(1.0);
    }
    if resabs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * resabs);
    }

    RuleEstimate {
        value,
        error,
        split_axis: 0,
    }
}

// ============================================================================
// Genz-Malik 7-5
// ============================================================================

/// sqrt(9/70)
const LAMBDA2: f64 = 0.358_568_582_800_318_091_990_645_153_907_937_495_454_1;

/// sqrt(9/10)
const LAMBDA4: f64 = 0.948_683_298_050_513_799_599_668_063_329_815_560_116_0;

/// sqrt(9/19)
const LAMBDA5: f64 = 0.688_247_201_611_685_297_721_628_734_293_623_525_126_9;

/// Ratio used by the fourth-difference split heuristic.
const DIFF_RATIO: f64 = (LAMBDA2 * LAMBDA2) / (LAMBDA4 * LAMBDA4);

/// Relative window inside which two fourth differences count as tied.
const DIFF_TIE: f64 = 1e-12;

/// Integrand evaluations per Genz-Malik region in `dim` dimensions.
pub const fn genz_malik_points(dim: usize) -> usize {
    1 + 4 * dim + 2 * dim * dim.saturating_sub(1) + (1 << dim)
}

/// Apply the Genz-Malik rule on the box `center +- halfwidth` (`D >= 2`).
pub fn genz_malik<const D: usize, F>(f: &F, center: &[f64; D], halfwidth: &[f64; D]) -> RuleEstimate
where
    F: Fn(&[f64; D]) -> f64,
{
    let n = D as f64;
    let weight1 = (12824.0 - 9120.0 * n + 400.0 * n * n) / 19683.0;
    let weight2 = 980.0 / 6561.0;
    let weight3 = (1820.0 - 400.0 * n) / 19683.0;
    let weight4 = 200.0 / 19683.0;
    let weight5 = 6859.0 / 19683.0 / (1u64 << D) as f64;
    let weight_e1 = (729.0 - 950.0 * n + 50.0 * n * n) / 729.0;
    let weight_e2 = 245.0 / 486.0;
    let weight_e3 = (265.0 - 100.0 * n) / 1458.0;
    let weight_e4 = 25.0 / 729.0;

    let mut p = *center;
    let f0 = f(&p);

    // Axis points at lambda2 and lambda4.
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    let mut diff = [0.0; D];
    for i in 0..D {
        let c = center[i];
        p[i] = c - LAMBDA2 * halfwidth[i];
        let f1 = f(&p);
        p[i] = c + LAMBDA2 * halfwidth[i];
        let f2 = f(&p);
        p[i] = c - LAMBDA4 * halfwidth[i];
        let f3 = f(&p);
        p[i] = c + LAMBDA4 * halfwidth[i];
        let f4 = f(&p);
        p[i] = c;

        sum2 += f1 + f2;
        sum3 += f3 + f4;
        diff[i] = (f1 + f2 - 2.0 * f0 - DIFF_RATIO * (f3 + f4 - 2.0 * f0)).abs();
    }

    // Pairs of axes at (+-lambda4, +-lambda4).
    let mut sum4 = 0.0;
    for i in 0..D {
        for j in (i + 1)..D {
            let (ci, cj) = (center[i], center[j]);
            let (di, dj) = (LAMBDA4 * halfwidth[i], LAMBDA4 * halfwidth[j]);
            for (si, sj) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
                p[i] = ci + si * di;
                p[j] = cj + sj * dj;
                sum4 += f(&p);
            }
            p[i] = ci;
            p[j] = cj;
        }
    }

    // Corners at lambda5.
    let mut sum5 = 0.0;
    for mask in 0..(1usize << D) {
        for i in 0..D {
            let sign = if mask & (1 << i) == 0 { -1.0 } else { 1.0 };
            p[i] = center[i] + sign * LAMBDA5 * halfwidth[i];
        }
        sum5 += f(&p);
    }

    let volume: f64 = halfwidth.iter().map(|h| 2.0 * h).product();
    let value = volume
        * (weight1 * f0 + weight2 * sum2 + weight3 * sum3 + weight4 * sum4 + weight5 * sum5);
    let lower_order = volume * (weight_e1 * f0 + weight_e2 * sum2 + weight_e3 * sum3 + weight_e4 * sum4);

    let mut split_axis = 0;
    for i in 1..D {
        let (di, da) = (diff[i], diff[split_axis]);
        let tied = (di - da).abs() <= da * DIFF_TIE;
        if (di > da && !tied) || (tied && halfwidth[i].abs() > halfwidth[split_axis].abs()) {
            split_axis = i;
        }
    }

    RuleEstimate {
        value,
        error: (value - lower_order).abs(),
        split_axis,
    }
}
