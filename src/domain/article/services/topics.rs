use rand::{Rng, seq::IndexedRandom};

pub const DEFAULT_TOPICS: &[&str] = &[
    "Artificial Intelligence",
    "Web Development",
    "Cloud Computing",
    "Data Science",
    "Cybersecurity",
    "Mobile Development",
    "DevOps Practices",
    "Software Architecture",
    "Machine Learning",
    "Blockchain Technology",
    "Internet of Things",
    "Quantum Computing",
    "User Experience Design",
    "Agile Methodologies",
    "Database Management",
];

/// Picks the subject of the next article.
#[derive(Debug, Clone)]
pub struct TopicSelector {
    candidates: Vec<String>,
}

impl Default for TopicSelector {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_TOPICS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl TopicSelector {
    /// Returns `None` when `candidates` is empty.
    pub fn with_candidates(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self { candidates })
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn select(&self, explicit: Option<&str>) -> String {
        self.select_with(explicit, &mut rand::rng())
    }

    pub fn select_with<R: Rng + ?Sized>(&self, explicit: Option<&str>, rng: &mut R) -> String {
        match explicit {
            Some(topic) if !topic.is_empty() => topic.to_string(),
            _ => self
                .candidates
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| DEFAULT_TOPICS[0].to_string()),
        }
    }
}
