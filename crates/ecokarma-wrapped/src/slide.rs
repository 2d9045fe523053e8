//! The fixed eight-stage slide sequence.
//!
//! Rendering dispatches over this closed enum, one handler per variant;
//! there is no dynamic slide registry.

use serde::{Deserialize, Serialize};

/// One stage of the presentation, in fixed forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slide {
    Intro,
    Culprit,
    ForestLoss,
    RealityCheck,
    Verdict,
    Redemption,
    ActionAwakening,
    ShareRedemption,
}

impl Slide {
    /// Total number of slides.
    pub const COUNT: usize = 8;

    /// All slides in presentation order.
    pub const ALL: [Slide; Slide::COUNT] = [
        Slide::Intro,
        Slide::Culprit,
        Slide::ForestLoss,
        Slide::RealityCheck,
        Slide::Verdict,
        Slide::Redemption,
        Slide::ActionAwakening,
        Slide::ShareRedemption,
    ];

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Slide> {
        Slide::ALL.get(index).copied()
    }

    /// The following slide, or `None` from the terminal stage.
    pub fn next(self) -> Option<Slide> {
        Slide::from_index(self.index() + 1)
    }

    /// The share slide ends the walk; only reset leaves it.
    pub fn is_terminal(self) -> bool {
        matches!(self, Slide::ShareRedemption)
    }

    /// Headline copy for the stage. Empty where the stage opens with
    /// dynamic content instead.
    pub fn headline(self) -> &'static str {
        match self {
            Slide::Intro => "We analyzed your year.",
            Slide::Culprit => "Your Carbon Heavyweight",
            Slide::ForestLoss => "Witness the impact of your year.",
            Slide::RealityCheck => "If everyone lived like you…",
            Slide::Verdict => "The Ancient Verdict",
            Slide::Redemption => "",
            Slide::ActionAwakening => "Action Awakening",
            Slide::ShareRedemption => "Share Your Redemption",
        }
    }

    /// Secondary copy, where the stage has any.
    pub fn tagline(self) -> &'static str {
        match self {
            Slide::Intro => "It's time to see the cost.",
            Slide::Verdict => {
                "\"He who enjoys nature's gifts without giving back is certainly a thief.\" \
                 — Bhagavad Gita 3.12"
            }
            Slide::Redemption => "Nature does not take IOUs. Balance the scale now.",
            Slide::ActionAwakening => "Nature waits for your hands, not your apologies.",
            Slide::ShareRedemption => "Inspire others to calculate their ecological footprint",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_stable() {
        for (i, slide) in Slide::ALL.iter().enumerate() {
            assert_eq!(slide.index(), i);
            assert_eq!(Slide::from_index(i), Some(*slide));
        }
        assert_eq!(Slide::from_index(8), None);
    }

    #[test]
    fn next_walks_forward_only() {
        assert_eq!(Slide::Intro.next(), Some(Slide::Culprit));
        assert_eq!(Slide::ActionAwakening.next(), Some(Slide::ShareRedemption));
        assert_eq!(Slide::ShareRedemption.next(), None);
    }

    #[test]
    fn only_share_is_terminal() {
        let terminals: Vec<_> = Slide::ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminals, vec![&Slide::ShareRedemption]);
    }

    #[test]
    fn verdict_quote_is_attributed() {
        assert!(Slide::Verdict.tagline().contains("Bhagavad Gita"));
    }
}
