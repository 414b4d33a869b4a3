use serde::Deserialize;

/// One of the three methodology records shown as a Library card.
#[derive(Deserialize, Debug, Clone)]
pub struct Standard {
    pub id: String,
    pub name: String,
    pub full_name: String,
    /// Accent tag ("pmbok" / "prince2" / "iso") mapped to a color by the views.
    pub color: String,
    pub description: String,
    pub key_points: Vec<String>,
    pub topics: Vec<String>,
}

impl Standard {
    /// Case-insensitive substring match over name, full name, description and
    /// every topic string. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.full_name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.topics.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// How one methodology treats a comparison topic.
#[derive(Deserialize, Debug, Clone)]
pub struct MethodologyNotes {
    pub approach: String,
    pub emphasis: String,
}

/// Precomputed judgment of how closely the three standards align on a topic.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Similarity {
    High,
    Medium,
    Low,
}

impl Similarity {
    pub fn label(self) -> &'static str {
        match self {
            Similarity::High => "High Similarity",
            Similarity::Medium => "Moderate Similarity",
            Similarity::Low => "Different Approaches",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Similarity::High => "✔",
            Similarity::Medium => "●",
            Similarity::Low => "✖",
        }
    }
}

/// One row of the Compare view: the three methodology entries for a topic.
#[derive(Deserialize, Debug, Clone)]
pub struct ComparisonTopic {
    pub name: String,
    pub pmbok: MethodologyNotes,
    pub prince2: MethodologyNotes,
    pub iso: MethodologyNotes,
    pub similarity: Similarity,
}
