//! Property-based tests for the filter engine using proptest.

use data_loader::{Candidate, Position, Status};
use pipeline::{FilterSpec, filter_candidates};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        any::<u32>(),
        "[A-Za-z]{1,8} [A-Za-z]{1,8}",
        prop::sample::select(Position::ALL.to_vec()),
        prop::sample::select(Status::ALL.to_vec()),
        0u32..15,
    )
        .prop_map(|(id, name, position, status, experience)| {
            let email = format!("{}@test.com", name.replace(' ', ".").to_lowercase());
            Candidate::new(id, name, email, position.label(), status.label(), experience)
        })
}

fn roster_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_strategy(), 0..40)
}

fn label_or_empty(labels: Vec<&'static str>) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(labels).prop_map(str::to_string),
    ]
}

fn spec_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        prop_oneof![Just(String::new()), " ?[A-Za-z]{0,3} ?"],
        label_or_empty(Position::ALL.iter().map(|p| p.label()).collect()),
        label_or_empty(Status::ALL.iter().map(|s| s.label()).collect()),
        prop_oneof![Just(String::new()), "[0-9]{1,2}", "[a-z0-9.]{1,3}"],
    )
        .prop_map(|(name, position, status, experience)| FilterSpec {
            name,
            position,
            status,
            experience,
        })
}

/// Is `sub` an order-preserving subsequence of `full`?
fn is_subsequence(sub: &[Candidate], full: &[Candidate]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|c| c == wanted))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The empty spec is the identity.
    #[test]
    fn empty_spec_returns_everything(roster in roster_strategy()) {
        prop_assert_eq!(filter_candidates(&roster, &FilterSpec::new()), roster);
    }

    /// Filtering the result again changes nothing.
    #[test]
    fn filtering_is_idempotent(roster in roster_strategy(), spec in spec_strategy()) {
        let once = filter_candidates(&roster, &spec);
        let twice = filter_candidates(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// Same inputs, same output.
    #[test]
    fn filtering_is_deterministic(roster in roster_strategy(), spec in spec_strategy()) {
        prop_assert_eq!(filter_candidates(&roster, &spec), filter_candidates(&roster, &spec));
    }

    /// Output is an order-preserving subsequence of the input.
    #[test]
    fn output_preserves_input_order(roster in roster_strategy(), spec in spec_strategy()) {
        let result = filter_candidates(&roster, &spec);
        prop_assert!(result.len() <= roster.len());
        prop_assert!(is_subsequence(&result, &roster));
    }

    /// Applying fields one at a time equals applying them together.
    #[test]
    fn fields_combine_with_and(roster in roster_strategy(), spec in spec_strategy()) {
        let combined = filter_candidates(&roster, &spec);

        let by_name = filter_candidates(&roster, &FilterSpec::new().with_name(spec.name.clone()));
        let by_position = filter_candidates(&by_name, &FilterSpec::new().with_position(spec.position.clone()));
        let by_status = filter_candidates(&by_position, &FilterSpec::new().with_status(spec.status.clone()));
        let staged = filter_candidates(&by_status, &FilterSpec::new().with_experience(spec.experience.clone()));

        prop_assert_eq!(combined, staged);
    }

    /// Name matching ignores case.
    #[test]
    fn name_query_ignores_case(roster in roster_strategy(), query in "[A-Za-z]{1,3}") {
        let upper = filter_candidates(&roster, &FilterSpec::new().with_name(query.to_uppercase()));
        let lower = filter_candidates(&roster, &FilterSpec::new().with_name(query.to_lowercase()));
        prop_assert_eq!(upper, lower);
    }

    /// Experience text with a letter in it never narrows the list.
    #[test]
    fn malformed_experience_is_ignored(roster in roster_strategy(), junk in "[0-9]{0,2}[a-z][0-9a-z]{0,2}") {
        let result = filter_candidates(&roster, &FilterSpec::new().with_experience(junk));
        prop_assert_eq!(result, roster);
    }

    /// Every survivor actually satisfies each active field.
    #[test]
    fn survivors_satisfy_every_field(roster in roster_strategy(), spec in spec_strategy()) {
        let query = spec.name.trim().to_lowercase();
        let years = spec.experience.trim().parse::<i64>().ok();

        for candidate in filter_candidates(&roster, &spec) {
            prop_assert!(candidate.name.to_lowercase().contains(&query));
            prop_assert!(spec.position.is_empty() || candidate.position == spec.position);
            prop_assert!(spec.status.is_empty() || candidate.status == spec.status);
            prop_assert!(years.is_none_or(|y| i64::from(candidate.experience) == y));
        }
    }
}
