//! Inverse standard-normal CDF (probit function).
//!
//! Uses Acklam's rational approximation: a three-branch piecewise rational
//! polynomial with maximum relative error about 1.15e-9 over (0, 1). That is
//! several orders of magnitude tighter than the 1e-4 tolerance the Wilson
//! reference values are checked against, so no refinement step is applied.

// Coefficients for the central region rational approximation.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Coefficients for the tail regions.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

// Breakpoints between the tail and central branches.
const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Inverse of the standard normal CDF.
///
/// Callers must guarantee `p` lies in the open interval (0, 1); the scoring
/// layer validates confidence levels before reaching this function.
pub fn probit(p: f64) -> f64 {
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probit_matches_reference_quantiles() {
        // Reference values from scipy.stats.norm.ppf
        assert!((probit(0.975) - 1.959_963_985).abs() < 1e-7);
        assert!((probit(0.95) - 1.644_853_627).abs() < 1e-7);
        assert!((probit(0.995) - 2.575_829_304).abs() < 1e-7);
        assert!((probit(0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_probit_is_antisymmetric_about_half() {
        for p in [0.01, 0.1, 0.25, 0.4, 0.45] {
            assert!((probit(p) + probit(1.0 - p)).abs() < 1e-8);
        }
    }

    #[test]
    fn test_probit_tail_branches() {
        // Below and above the 0.02425 breakpoint
        assert!((probit(0.001) + 3.090_232_306).abs() < 1e-6);
        assert!((probit(0.999) - 3.090_232_306).abs() < 1e-6);
    }

    #[test]
    fn test_probit_is_monotonic() {
        let mut last = f64::NEG_INFINITY;
        for i in 1..200 {
            let p = i as f64 / 200.0;
            let z = probit(p);
            assert!(z > last, "probit not increasing at p={p}");
            last = z;
        }
    }
}
