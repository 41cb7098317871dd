/// Predicted-vs-competitor pair driving the chart and the verdict message.
///
/// Transient: computed per request, discarded after rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceComparison {
    pub predicted: f64,
    pub competitor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceVerdict {
    HigherThanCompetitor,
    LowerThanCompetitor,
    Aligned,
}

impl PriceComparison {
    pub fn new(predicted: f64, competitor: f64) -> Self {
        Self {
            predicted,
            competitor,
        }
    }

    /// Signed difference, predicted minus competitor.
    pub fn diff(&self) -> f64 {
        self.predicted - self.competitor
    }

    pub fn verdict(&self) -> PriceVerdict {
        let diff = self.diff();
        if diff > 0.0 {
            PriceVerdict::HigherThanCompetitor
        } else if diff < 0.0 {
            PriceVerdict::LowerThanCompetitor
        } else {
            PriceVerdict::Aligned
        }
    }

    /// Interpretive message shown under the chart.
    pub fn message(&self) -> String {
        match self.verdict() {
            PriceVerdict::HigherThanCompetitor => format!(
                "Your price is ₹{} higher than competitor. Consider adjusting for competitiveness.",
                group_thousands(self.diff().round() as i64)
            ),
            PriceVerdict::LowerThanCompetitor => format!(
                "Your price is ₹{} lower than competitor. Might help boost bookings!",
                group_thousands((-self.diff()).round() as i64)
            ),
            PriceVerdict::Aligned => "Price is aligned with competitors.".to_string(),
        }
    }
}

/// Formats an integer amount with comma separators, e.g. 12500 -> "12,500".
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
