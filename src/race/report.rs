use super::RaceOutcome;

/// Primes of the final pass joined by `", "`.
#[must_use]
pub fn prime_listing(outcome: &RaceOutcome) -> String {
    outcome
        .sieve
        .primes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn summary_line(outcome: &RaceOutcome) -> String {
    format!(
        "Passes: {}, Time: {}, Avg: {}, Limit: {}, Count: {}, Valid: {}",
        outcome.passes,
        outcome.elapsed.as_secs_f64(),
        outcome.average().as_secs_f64(),
        outcome.sieve.limit(),
        outcome.sieve.count(),
        outcome.validity(),
    )
}

/// `tag;passes;seconds;threads;labels`
#[must_use]
pub fn race_line(outcome: &RaceOutcome, tag: &str) -> String {
    format!(
        "{tag};{};{};1;algorithm=base,faithful=yes,bits=1",
        outcome.passes,
        outcome.elapsed.as_secs_f64(),
    )
}

/// Full report: optional listing, summary, blank line, drag-race line.
#[must_use]
pub fn render(outcome: &RaceOutcome, tag: &str, show: bool) -> String {
    let mut report = String::new();

    if show {
        report.push_str(&prime_listing(outcome));
        report.push('\n');
    }

    report.push_str(&summary_line(outcome));
    report.push_str("\n\n");
    report.push_str(&race_line(outcome, tag));
    report.push('\n');

    report
}
