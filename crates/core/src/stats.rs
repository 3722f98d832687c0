//! Aggregates and display classifications computed from fixture records.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Score at or above which a result is excellent.
pub const EXCELLENT_SCORE: u8 = 90;

/// Score at or above which a result is good.
pub const GOOD_SCORE: u8 = 75;

/// Mean of `scores`, rounded half away from zero. `None` when empty.
pub fn average_score<I>(scores: I) -> Option<u32>
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), s| (sum + u64::from(s), count + 1));
    if count == 0 {
        return None;
    }
    Some((sum as f64 / count as f64).round() as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

pub fn score_band(score: u8) -> ScoreBand {
    if score >= EXCELLENT_SCORE {
        ScoreBand::Excellent
    } else if score >= GOOD_SCORE {
        ScoreBand::Good
    } else {
        ScoreBand::NeedsWork
    }
}

/// Whole-number percentage of `correct` out of `total`; 0 when `total` is 0.
pub fn accuracy_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(correct) / f64::from(total)) * 100.0).round() as u32
}

// ---------------------------------------------------------------------------
// Trending
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendingTier {
    Hot,
    Rising,
    Climbing,
}

pub fn trending_tier(score: u8) -> TrendingTier {
    match score {
        90.. => TrendingTier::Hot,
        80..=89 => TrendingTier::Rising,
        _ => TrendingTier::Climbing,
    }
}

/// Period selector on the trending view.
///
/// The fixtures carry no per-period data, so the period never narrows the
/// result; it is carried through to the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    Day,
    #[default]
    Week,
    Month,
    All,
}

impl TrendingPeriod {
    pub const ALL_PERIODS: [TrendingPeriod; 4] = [
        TrendingPeriod::Day,
        TrendingPeriod::Week,
        TrendingPeriod::Month,
        TrendingPeriod::All,
    ];

    /// Parse a query value (`day`, `week`, `month`, `all`). Blank input
    /// selects the default period.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim().to_lowercase().as_str() {
            "" => Ok(Self::default()),
            "day" => Ok(TrendingPeriod::Day),
            "week" => Ok(TrendingPeriod::Week),
            "month" => Ok(TrendingPeriod::Month),
            "all" => Ok(TrendingPeriod::All),
            other => Err(CoreError::Validation(format!(
                "Unknown trending period '{other}'"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendingPeriod::Day => "Today",
            TrendingPeriod::Week => "This Week",
            TrendingPeriod::Month => "This Month",
            TrendingPeriod::All => "All Time",
        }
    }
}

// ---------------------------------------------------------------------------
// Community
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReputationBadge {
    Expert,
    Advanced,
    Contributor,
}

pub fn reputation_badge(reputation: u32) -> ReputationBadge {
    if reputation >= 1000 {
        ReputationBadge::Expert
    } else if reputation >= 500 {
        ReputationBadge::Advanced
    } else {
        ReputationBadge::Contributor
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Compact display of a count: `950`, `2.8K`, `89K`, `1.2M`.
///
/// One decimal is shown below 10 of a unit and dropped when it is zero.
pub fn compact_count(value: u64) -> String {
    const UNITS: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "K")];

    for (index, (size, suffix)) in UNITS.iter().enumerate() {
        if value < *size {
            continue;
        }
        let scaled = value as f64 / *size as f64;
        let rounded = if scaled < 10.0 {
            (scaled * 10.0).round() / 10.0
        } else {
            scaled.round()
        };
        // 999_999 rounds to 1000K; show it in the next unit up.
        if rounded >= 1000.0 && index > 0 {
            let (_, larger) = UNITS[index - 1];
            return format!("1{larger}");
        }
        if rounded.fract() == 0.0 {
            return format!("{}{suffix}", rounded as u64);
        }
        return format!("{rounded:.1}{suffix}");
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(average_score([85, 92, 78, 88, 76]), Some(84));
        assert_eq!(average_score([1, 2]), Some(2));
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_score(Vec::<u8>::new()), None);
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(score_band(90), ScoreBand::Excellent);
        assert_eq!(score_band(89), ScoreBand::Good);
        assert_eq!(score_band(75), ScoreBand::Good);
        assert_eq!(score_band(74), ScoreBand::NeedsWork);
    }

    #[test]
    fn accuracy_handles_zero_total() {
        assert_eq!(accuracy_percent(13, 15), 87);
        assert_eq!(accuracy_percent(0, 0), 0);
    }

    #[test]
    fn trending_tier_thresholds() {
        assert_eq!(trending_tier(95), TrendingTier::Hot);
        assert_eq!(trending_tier(90), TrendingTier::Hot);
        assert_eq!(trending_tier(85), TrendingTier::Rising);
        assert_eq!(trending_tier(78), TrendingTier::Climbing);
    }

    #[test]
    fn reputation_thresholds() {
        assert_eq!(reputation_badge(1250), ReputationBadge::Expert);
        assert_eq!(reputation_badge(890), ReputationBadge::Advanced);
        assert_eq!(reputation_badge(420), ReputationBadge::Contributor);
    }

    #[test]
    fn compact_count_formats() {
        assert_eq!(compact_count(950), "950");
        assert_eq!(compact_count(2779), "2.8K");
        assert_eq!(compact_count(1000), "1K");
        assert_eq!(compact_count(89_000), "89K");
        assert_eq!(compact_count(1_250_000), "1.3M");
    }

    #[test]
    fn compact_count_promotes_at_unit_boundary() {
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(999_499), "999K");
        assert_eq!(compact_count(999_500), "1M");
        assert_eq!(compact_count(999_999), "1M");
        assert_eq!(compact_count(9_960), "10K");
    }

    #[test]
    fn default_period_is_week() {
        assert_eq!(TrendingPeriod::default(), TrendingPeriod::Week);
    }

    #[test]
    fn period_parse_accepts_known_values() {
        assert_eq!(TrendingPeriod::parse("Month").unwrap(), TrendingPeriod::Month);
        assert_eq!(TrendingPeriod::parse(" ").unwrap(), TrendingPeriod::Week);
        assert!(matches!(
            TrendingPeriod::parse("decade"),
            Err(CoreError::Validation(msg)) if msg == "Unknown trending period 'decade'"
        ));
    }
}
