//! Scoring Analyzer - dominance and indistinct-domain detection.
//!
//! These observations accompany the results screen. They never change the
//! ranking; they help the user judge how solid the top choice is.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{DecisionOption, Domain};

/// An option that another option beats or matches on every domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatedOption {
    pub option_name: String,
    pub dominated_by: String,
    pub explanation: String,
}

/// A domain on which every option carries the same rating.
///
/// Such a domain adds the same amount to every total and cannot change
/// the ranking, whatever its importance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndistinctDomain {
    pub domain_name: String,
    /// The shared rating; 0 when no option has rated the domain.
    pub uniform_rating: u8,
}

/// Everything the analyzer found for one set of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInsights {
    pub dominated: Vec<DominatedOption>,
    pub indistinct_domains: Vec<IndistinctDomain>,
}

/// Stateless analysis over the session's domains and options.
pub struct ScoringAnalyzer;

impl ScoringAnalyzer {
    /// Runs every analysis.
    pub fn analyze(domains: &[Domain], options: &[DecisionOption]) -> ScoringInsights {
        ScoringInsights {
            dominated: Self::find_dominated(domains, options),
            indistinct_domains: Self::find_indistinct_domains(domains, options),
        }
    }

    /// Finds all dominated options.
    ///
    /// Option A dominates option B if A is rated at least as high as B on
    /// every domain and strictly higher on at least one. Each dominated
    /// option is reported once, against the first dominator in insertion order.
    ///
    /// # Edge Cases
    /// - Fewer than two options: empty
    /// - Identical ratings: neither dominates
    pub fn find_dominated(domains: &[Domain], options: &[DecisionOption]) -> Vec<DominatedOption> {
        let mut dominated = Vec::new();

        if options.len() < 2 {
            return dominated;
        }

        for (i, candidate) in options.iter().enumerate() {
            let dominator = options
                .iter()
                .enumerate()
                .find(|(j, other)| *j != i && Self::dominates(domains, other, candidate));

            if let Some((_, dominator)) = dominator {
                dominated.push(DominatedOption {
                    option_name: candidate.name().to_string(),
                    dominated_by: dominator.name().to_string(),
                    explanation: Self::explain_dominance(domains, dominator, candidate),
                });
            }
        }

        dominated
    }

    /// Finds domains that do not distinguish between options.
    ///
    /// # Edge Cases
    /// - Fewer than two options: empty (no comparison possible)
    /// - Missing ratings count as 0
    pub fn find_indistinct_domains(
        domains: &[Domain],
        options: &[DecisionOption],
    ) -> Vec<IndistinctDomain> {
        if options.len() < 2 {
            return Vec::new();
        }

        domains
            .iter()
            .filter_map(|domain| {
                let first = Self::rating(&options[0], domain);
                options
                    .iter()
                    .all(|o| Self::rating(o, domain) == first)
                    .then(|| IndistinctDomain {
                        domain_name: domain.name().to_string(),
                        uniform_rating: first,
                    })
            })
            .collect()
    }

    fn rating(option: &DecisionOption, domain: &Domain) -> u8 {
        option
            .rating_for(domain.name())
            .map(|r| r.value())
            .unwrap_or(0)
    }

    fn dominates(domains: &[Domain], a: &DecisionOption, b: &DecisionOption) -> bool {
        let mut strictly_better_on_one = false;

        for domain in domains {
            let (ra, rb) = (Self::rating(a, domain), Self::rating(b, domain));
            if ra < rb {
                return false;
            }
            if ra > rb {
                strictly_better_on_one = true;
            }
        }

        strictly_better_on_one
    }

    fn explain_dominance(domains: &[Domain], a: &DecisionOption, b: &DecisionOption) -> String {
        let better_on: Vec<&str> = domains
            .iter()
            .filter(|d| Self::rating(a, d) > Self::rating(b, d))
            .map(|d| d.name())
            .collect();

        format!(
            "{} is rated at least as high on every domain and higher on: {}",
            a.name(),
            better_on.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Importance, Rating};

    fn domains() -> Vec<Domain> {
        vec![
            Domain::new("Salary", Importance::clamped(8)).unwrap(),
            Domain::new("Growth", Importance::clamped(6)).unwrap(),
        ]
    }

    fn option(name: &str, domains: &[Domain], ratings: &[i64]) -> DecisionOption {
        let mut option = DecisionOption::new(name, domains, Rating::MIDPOINT).unwrap();
        for (d, r) in domains.iter().zip(ratings) {
            option.set_rating(d.name(), Rating::clamped(*r));
        }
        option
    }

    #[test]
    fn find_dominated_single_option() {
        let d = domains();
        assert!(ScoringAnalyzer::find_dominated(&d, &[option("A", &d, &[9, 9])]).is_empty());
    }

    #[test]
    fn find_dominated_clear_dominance() {
        let d = domains();
        let options = vec![option("A", &d, &[9, 6]), option("B", &d, &[7, 6])];

        let dominated = ScoringAnalyzer::find_dominated(&d, &options);
        assert_eq!(dominated.len(), 1);
        assert_eq!(dominated[0].option_name, "B");
        assert_eq!(dominated[0].dominated_by, "A");
        assert!(dominated[0].explanation.ends_with("higher on: Salary"));
    }

    #[test]
    fn find_dominated_tradeoff_is_not_dominance() {
        let d = domains();
        let options = vec![option("A", &d, &[9, 3]), option("B", &d, &[4, 8])];
        assert!(ScoringAnalyzer::find_dominated(&d, &options).is_empty());
    }

    #[test]
    fn find_dominated_identical_options_do_not_dominate() {
        let d = domains();
        let options = vec![option("A", &d, &[5, 5]), option("B", &d, &[5, 5])];
        assert!(ScoringAnalyzer::find_dominated(&d, &options).is_empty());
    }

    #[test]
    fn indistinct_domain_detected() {
        let d = domains();
        let options = vec![option("A", &d, &[7, 2]), option("B", &d, &[7, 9])];

        let indistinct = ScoringAnalyzer::find_indistinct_domains(&d, &options);
        assert_eq!(
            indistinct,
            vec![IndistinctDomain {
                domain_name: "Salary".to_string(),
                uniform_rating: 7
            }]
        );
    }

    #[test]
    fn indistinct_domain_with_missing_ratings() {
        let early = vec![Domain::with_default_importance("Salary").unwrap()];
        let options = vec![option("A", &early, &[3]), option("B", &early, &[8])];

        let mut later = early.clone();
        later.push(Domain::with_default_importance("Commute").unwrap());

        let indistinct = ScoringAnalyzer::find_indistinct_domains(&later, &options);
        assert_eq!(indistinct.len(), 1);
        assert_eq!(indistinct[0].domain_name, "Commute");
        assert_eq!(indistinct[0].uniform_rating, 0);
    }

    #[test]
    fn analyze_combines_findings() {
        let d = domains();
        let options = vec![option("A", &d, &[9, 4]), option("B", &d, &[6, 4])];

        let insights = ScoringAnalyzer::analyze(&d, &options);
        assert_eq!(insights.dominated.len(), 1);
        assert_eq!(insights.indistinct_domains.len(), 1);
        assert_eq!(insights.indistinct_domains[0].domain_name, "Growth");
    }
}
