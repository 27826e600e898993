use crate::input::ScoringInput;

/// A trait for scoring rules.
///
/// Rules are stateless and thread-safe. Each rule inspects the parsed
/// receipt independently and returns the points it contributes; the total
/// score is the sum over all registered rules, so evaluation order never
/// affects the result.
pub trait ScoringRule: Send + Sync {
    /// The name of the rule, used in logs and score breakdowns.
    fn name(&self) -> &str;

    /// Points this rule contributes for the given receipt.
    fn points(&self, input: &ScoringInput) -> u64;
}
