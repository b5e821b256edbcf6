use crate::core::RadarError;

/// Tunable constants of the relevance engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Maximum number of opportunities returned.
    pub top_n: usize,
    /// Characters kept from an article summary for a reference snippet.
    pub snippet_chars: usize,
    /// Industry hit count at which an article gets cited for a ticker.
    pub citation_min_hits: u32,
    /// Added per symbol token.
    pub direct_weight: f64,
    /// Added per article naming the company.
    pub company_weight: f64,
    /// Multiplied by an article's industry hit count.
    pub industry_weight: f64,
    /// Industry relevance must exceed this for a ticker to count as relevant.
    pub relevance_threshold: f64,
    /// Raw score given to fallback picks.
    pub fallback_seed_score: f64,
    /// Industry relevance given to industry-fallback picks.
    pub fallback_industry_relevance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            snippet_chars: 150,
            citation_min_hits: 2,
            direct_weight: 3.0,
            company_weight: 2.0,
            industry_weight: 0.5,
            relevance_threshold: 2.0,
            fallback_seed_score: 1.0,
            fallback_industry_relevance: 5.0,
        }
    }
}

impl AnalysisConfig {
    /// Rejects weights that could make a raw score negative or non-finite.
    pub(crate) fn validate(&self) -> Result<(), RadarError> {
        let weights = [
            ("direct_weight", self.direct_weight),
            ("company_weight", self.company_weight),
            ("industry_weight", self.industry_weight),
            ("relevance_threshold", self.relevance_threshold),
            ("fallback_seed_score", self.fallback_seed_score),
            ("fallback_industry_relevance", self.fallback_industry_relevance),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(RadarError::Config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
