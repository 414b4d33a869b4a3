use crate::standards::Similarity;
use crate::views::filters::EnumWithAlternativeNames;

/// Which of the two screens the central panel shows. Also persisted as the
/// startup view in settings.
#[derive(
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Library,
    Compare,
}

/// Three-way topic filter for the Compare view.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum CompareFilter {
    #[default]
    All,
    Similarities,
    Differences,
}

impl CompareFilter {
    /// Whether a topic with the given similarity passes this filter.
    /// Medium is admitted by `All` only.
    pub fn admits(self, similarity: Similarity) -> bool {
        match self {
            CompareFilter::All => true,
            CompareFilter::Similarities => similarity == Similarity::High,
            CompareFilter::Differences => similarity == Similarity::Low,
        }
    }
}

impl std::fmt::Display for CompareFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompareFilter::All => "Show All",
            CompareFilter::Similarities => "Similarities Only",
            CompareFilter::Differences => "Differences Only",
        };
        f.write_str(s)
    }
}

impl EnumWithAlternativeNames for CompareFilter {
    fn alternative_name(&self) -> &'static str {
        match self {
            CompareFilter::All => "ALL",
            CompareFilter::Similarities => "SIMILARITIES",
            CompareFilter::Differences => "DIFFERENCES",
        }
    }
}
