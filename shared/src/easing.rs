use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Easing curves used by the spin and the pointer kick.
///
/// Names follow the tweening conventions the wheel was tuned with:
/// `quad.out`..`quint.out` (and the `power1.out`..`power4.out` aliases) and
/// `elastic.out(amplitude, period)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^n`
    PowerOut(i32),
    ElasticOut { amplitude: f64, period: f64 },
}

pub const QUAD_OUT: Easing = Easing::PowerOut(2);
pub const QUART_OUT: Easing = Easing::PowerOut(4);
pub const KICK_RETURN: Easing = Easing::ElasticOut { amplitude: 1.0, period: 0.5 };

impl Default for Easing {
    fn default() -> Self {
        QUART_OUT
    }
}

impl Easing {
    /// Maps progress `t` (clamped to `[0, 1]`) onto eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(n),
            Easing::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let p = period / amplitude.min(1.0);
                let phase = p / TAU * (1.0 / a).asin();
                a * 2f64.powf(-10.0 * t) * ((t - phase) * TAU / p).sin() + 1.0
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::PowerOut(2) => write!(f, "quad.out"),
            Easing::PowerOut(3) => write!(f, "cubic.out"),
            Easing::PowerOut(4) => write!(f, "quart.out"),
            Easing::PowerOut(5) => write!(f, "quint.out"),
            Easing::PowerOut(n) => write!(f, "pow{}.out", n),
            Easing::ElasticOut { amplitude, period } => write!(f, "elastic.out({}, {})", amplitude, period),
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(rest) = name.strip_prefix("elastic.out") {
            return parse_elastic(rest).ok_or_else(|| format!("Bad elastic parameters in '{}'", s));
        }

        match name.as_str() {
            "linear" | "none" => Ok(Easing::Linear),
            "quad.out" | "power1.out" => Ok(Easing::PowerOut(2)),
            "cubic.out" | "power2.out" => Ok(Easing::PowerOut(3)),
            "quart.out" | "power3.out" => Ok(Easing::PowerOut(4)),
            "quint.out" | "power4.out" => Ok(Easing::PowerOut(5)),
            other => other
                .strip_prefix("pow")
                .and_then(|n| n.strip_suffix(".out"))
                .and_then(|n| n.parse::<i32>().ok())
                .filter(|n| *n >= 1)
                .map(Easing::PowerOut)
                .ok_or_else(|| format!("Unknown easing '{}'", s)),
        }
    }
}

fn parse_elastic(args: &str) -> Option<Easing> {
    let args = args.trim();
    if args.is_empty() {
        return Some(Easing::ElasticOut { amplitude: 1.0, period: 0.3 });
    }

    let inner = args.strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<f64>());
    let amplitude = parts.next()?.ok()?;
    let period = match parts.next() {
        Some(p) => p.ok()?,
        None => 0.3,
    };
    if parts.next().is_some() || amplitude <= 0.0 || period <= 0.0 {
        return None;
    }
    Some(Easing::ElasticOut { amplitude, period })
}

impl TryFrom<String> for Easing {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, QUAD_OUT, QUART_OUT, KICK_RETURN] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_quart_out_matches_formula() {
        assert!((QUART_OUT.apply(0.5) - 0.9375).abs() < 1e-12);
        assert!((QUAD_OUT.apply(0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_power_out_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=1000 {
            let v = QUART_OUT.apply(i as f64 / 1000.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_elastic_overshoots_then_settles() {
        let samples: Vec<f64> = (1..100).map(|i| KICK_RETURN.apply(i as f64 / 100.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!((samples[98] - 1.0).abs() < 0.01);
        assert!(samples.iter().all(|v| (*v - 1.0).abs() <= 1.0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("power4.out".parse::<Easing>(), Ok(Easing::PowerOut(5)));
        assert_eq!("quart.out".parse::<Easing>(), Ok(QUART_OUT));
        assert_eq!("power1.out".parse::<Easing>(), Ok(QUAD_OUT));
        assert_eq!("elastic.out(1, 0.5)".parse::<Easing>(), Ok(KICK_RETURN));
        assert_eq!(
            "elastic.out".parse::<Easing>(),
            Ok(Easing::ElasticOut { amplitude: 1.0, period: 0.3 })
        );
        assert!("bounce.in".parse::<Easing>().is_err());
        assert!("elastic.out(0, 1)".parse::<Easing>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&QUART_OUT).unwrap();
        assert_eq!(json, "\"quart.out\"");
        let back: Easing = serde_json::from_str("\"elastic.out(1, 0.5)\"").unwrap();
        assert_eq!(back, KICK_RETURN);
    }
}
