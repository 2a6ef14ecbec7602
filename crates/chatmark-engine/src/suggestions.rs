//! Suggestion chips for the empty chat state.
//!
//! Selection is a pure function of the pool, the set of queries already shown
//! and a caller-owned RNG; there is no module-level memory of past picks.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub icon: String,
    pub label: String,
    pub description: String,
    /// Sent as the user message when the chip is clicked. Identifies the chip.
    pub query: String,
}

impl Chip {
    fn new(icon: &str, label: &str, description: &str, query: &str) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            description: description.into(),
            query: query.into(),
        }
    }
}

/// The widget's built-in chip pool.
pub fn default_pool() -> Vec<Chip> {
    vec![
        Chip::new(
            "🎯",
            "About HaiIntel",
            "Learn about our mission",
            "What is HaiIntel?",
        ),
        Chip::new(
            "💼",
            "Our Services",
            "Explore what we offer",
            "What services do you offer?",
        ),
        Chip::new(
            "🏢",
            "Vibrant Capital",
            "Our parent company",
            "Tell me about Vibrant Capital",
        ),
        Chip::new(
            "💻",
            "Tech Stack",
            "Technologies we use",
            "What is your tech stack?",
        ),
        Chip::new(
            "🚀",
            "Get Started",
            "Quick start guide",
            "How do I get started with HaiIntel?",
        ),
        Chip::new(
            "💡",
            "Use Cases",
            "Real-world examples",
            "What are HaiIntel's use cases?",
        ),
        Chip::new(
            "📊",
            "Analytics",
            "Track conversations",
            "Tell me about HaiIntel analytics features",
        ),
        Chip::new(
            "🔧",
            "Integration",
            "Setup instructions",
            "How do I integrate HaiIntel?",
        ),
        Chip::new(
            "💰",
            "Pricing",
            "View pricing plans",
            "What are HaiIntel's pricing plans?",
        ),
        Chip::new(
            "🎨",
            "Customization",
            "Personalize your chat",
            "Can I customize HaiIntel chat widget?",
        ),
        Chip::new(
            "🔒",
            "Security",
            "Enterprise-grade protection",
            "How secure is HaiIntel?",
        ),
        Chip::new(
            "📱",
            "Mobile Support",
            "Works on all devices",
            "Does HaiIntel work on mobile?",
        ),
        Chip::new(
            "🤖",
            "AI Capabilities",
            "Intelligent features",
            "What AI capabilities does HaiIntel have?",
        ),
        Chip::new(
            "🌐",
            "Industries",
            "Sectors we serve",
            "What industries does HaiIntel serve?",
        ),
        Chip::new(
            "⚡",
            "Performance",
            "Speed and reliability",
            "How fast is HaiIntel?",
        ),
        Chip::new(
            "💬",
            "Support",
            "Get help anytime",
            "What kind of support does HaiIntel offer?",
        ),
    ]
}

/// Picks up to `count` random chips not yet shown.
///
/// When fewer than `count` unshown chips remain the shown set starts over
/// and the whole pool is eligible again. Returns the picks and the new shown
/// set (the possibly reset set plus the picked queries).
pub fn select_suggestions<R: Rng + ?Sized>(
    pool: &[Chip],
    already_shown: &BTreeSet<String>,
    count: usize,
    rng: &mut R,
) -> (Vec<Chip>, BTreeSet<String>) {
    let mut shown = already_shown.clone();
    let mut candidates: Vec<&Chip> = pool.iter().filter(|c| !shown.contains(&c.query)).collect();

    if candidates.len() < count {
        log::debug!("suggestion pool exhausted, starting over");
        shown.clear();
        candidates = pool.iter().collect();
    }

    candidates.shuffle(rng);
    let selected: Vec<Chip> = candidates.into_iter().take(count).cloned().collect();
    shown.extend(selected.iter().map(|c| c.query.clone()));
    (selected, shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_requested_count_of_distinct_chips() {
        let mut rng = StdRng::seed_from_u64(7);
        let (picked, shown) = select_suggestions(&default_pool(), &BTreeSet::new(), 3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert_eq!(shown.len(), 3);
        for chip in &picked {
            assert!(shown.contains(&chip.query));
        }
    }

    #[test]
    fn avoids_already_shown() {
        let pool = default_pool();
        let mut rng = StdRng::seed_from_u64(1);
        let (first, shown) = select_suggestions(&pool, &BTreeSet::new(), 4, &mut rng);
        let (second, shown) = select_suggestions(&pool, &shown, 4, &mut rng);

        assert!(second.iter().all(|c| !first.contains(c)));
        assert_eq!(shown.len(), 8);
    }

    #[test]
    fn resets_when_pool_runs_dry() {
        let pool = default_pool();
        let everything: BTreeSet<String> = pool.iter().map(|c| c.query.clone()).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let (picked, shown) = select_suggestions(&pool, &everything, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn small_pool_returns_what_it_has() {
        let pool = &default_pool()[..2];
        let mut rng = StdRng::seed_from_u64(9);
        let (picked, _) = select_suggestions(pool, &BTreeSet::new(), 5, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn input_set_is_untouched() {
        let before: BTreeSet<String> = ["What is HaiIntel?".to_string()].into();
        let mut rng = StdRng::seed_from_u64(5);
        let _ = select_suggestions(&default_pool(), &before, 3, &mut rng);
        assert_eq!(before.len(), 1);
    }
}
