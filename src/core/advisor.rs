//! Motivational message for a predicted session length

/// Message category, ordered by predicted hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advice {
    /// No prediction available (fewer than two sessions)
    NotEnoughData,
    /// Below 1 hour
    StartSmall,
    /// 1 hour up to, not including, 3
    GoodStart,
    /// 3 hours up to, not including, 5
    GreatJob,
    /// 5 hours or more
    Excellent,
}

impl Advice {
    pub(crate) fn for_prediction(predicted: Option<f64>) -> Self {
        match predicted {
            None => Advice::NotEnoughData,
            Some(v) if v < 1.0 => Advice::StartSmall,
            Some(v) if v < 3.0 => Advice::GoodStart,
            Some(v) if v < 5.0 => Advice::GreatJob,
            Some(_) => Advice::Excellent,
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Advice::NotEnoughData => "Keep adding more sessions to get predictions!",
            Advice::StartSmall => "Don't give up! Start with small steps.",
            Advice::GoodStart => "Good start! Try to increase your study hours gradually.",
            Advice::GreatJob => "Great job! Keep the momentum going.",
            Advice::Excellent => "Excellent work! You're on track to achieve your goals.",
        }
    }

    /// Stable identifier used in JSON output
    pub(crate) fn category(self) -> &'static str {
        match self {
            Advice::NotEnoughData => "not_enough_data",
            Advice::StartSmall => "start_small",
            Advice::GoodStart => "good_start",
            Advice::GreatJob => "great_job",
            Advice::Excellent => "excellent",
        }
    }
}
