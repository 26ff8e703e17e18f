//! Rule-based scheme recommender, the offline path used when no model call is made.
//!
//! Deterministic, no I/O. The catalog is validated once at construction, which is
//! what makes `recommend` total.

pub mod catalog;
pub mod handlers;

use crate::models::profile::CitizenProfile;
use crate::models::scheme::SchemeRecommendation;

use self::catalog::{CatalogError, RuleCatalog, SchemeTemplate, RECOMMENDATION_COUNT};

#[derive(Debug, Clone)]
pub struct ProfileRuleEngine {
    catalog: RuleCatalog,
}

impl ProfileRuleEngine {
    pub fn new(catalog: RuleCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Returns exactly three recommendations for `profile`.
    ///
    /// Matching rules fill slots in declaration order (extra matches are dropped);
    /// remaining slots take generic entries in their fixed order.
    pub fn recommend(&self, profile: &CitizenProfile) -> [SchemeRecommendation; 3] {
        let matched = self
            .catalog
            .rules
            .iter()
            .filter(|rule| rule.matches(profile))
            .map(|rule| &rule.template);

        let picked: Vec<SchemeRecommendation> = matched
            .chain(self.catalog.generic.iter())
            .take(RECOMMENDATION_COUNT)
            .map(|template| render(template, profile))
            .collect();

        // validate() guarantees at least three generic entries.
        picked.try_into().unwrap_or_else(|v: Vec<SchemeRecommendation>| {
            unreachable!("validated catalog produced {} recommendations", v.len())
        })
    }
}

fn render(template: &SchemeTemplate, profile: &CitizenProfile) -> SchemeRecommendation {
    let language = profile.language();
    SchemeRecommendation {
        id: template.id.clone(),
        name: template.name.get(language).to_string(),
        benefit: template.benefit.get(language).to_string(),
        qualification_reason: fill_reason(template.reason.get(language), profile),
        required_documents: template.documents.clone(),
    }
}

/// Substitutes profile values (display labels) into a reason template.
pub fn fill_reason(template: &str, profile: &CitizenProfile) -> String {
    template
        .replace("{age}", &profile.age().to_string())
        .replace("{gender}", profile.gender().label())
        .replace("{state}", profile.state().label())
        .replace("{occupation}", profile.occupation().label())
        .replace("{income}", profile.income().label())
        .replace("{category}", profile.category().label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        Category, Gender, IncomeBracket, IndianState, Language, Occupation,
    };
    use crate::models::scheme::consolidated_documents;

    fn engine() -> ProfileRuleEngine {
        ProfileRuleEngine::new(RuleCatalog::builtin()).unwrap()
    }

    #[allow(clippy::too_many_arguments)]
    fn profile(
        age: u16,
        gender: Gender,
        state: IndianState,
        occupation: Occupation,
        income: IncomeBracket,
        category: Category,
        language: Language,
    ) -> CitizenProfile {
        CitizenProfile::new(age, gender, state, occupation, income, category, language).unwrap()
    }

    fn ids(recs: &[SchemeRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_student_profile_gets_scholarship_first() {
        let recs = engine().recommend(&profile(
            20,
            Gender::Male,
            IndianState::Other,
            Occupation::Student,
            IncomeBracket::Below1Lakh,
            Category::General,
            Language::English,
        ));

        assert_eq!(recs[0].id, "national_scholarship");
        assert_eq!(
            recs[0].name,
            "National Scholarship Portal (NSP) Scholarships"
        );
        assert!(recs[0].qualification_reason.contains("20"));
        assert!(recs[0].qualification_reason.contains("Student"));
    }

    #[test]
    fn test_unmatched_profile_gets_generic_catalog_in_order() {
        let recs = engine().recommend(&profile(
            30,
            Gender::Male,
            IndianState::Other,
            Occupation::SalariedEmployee,
            IncomeBracket::From3To8Lakh,
            Category::General,
            Language::English,
        ));

        assert_eq!(
            ids(&recs),
            vec!["pm_jan_dhan", "pm_suraksha_bima", "atal_pension"]
        );
    }

    #[test]
    fn test_specific_rules_take_precedence_over_generic() {
        // Farmer in Maharashtra on low income: three specific rules match.
        let recs = engine().recommend(&profile(
            50,
            Gender::Male,
            IndianState::Maharashtra,
            Occupation::Farmer,
            IncomeBracket::Below1Lakh,
            Category::General,
            Language::English,
        ));

        assert_eq!(
            ids(&recs),
            vec!["namo_shetkari", "pm_kisan", "ayushman_bharat"]
        );
    }

    #[test]
    fn test_single_match_is_padded_with_generic() {
        let recs = engine().recommend(&profile(
            38,
            Gender::Male,
            IndianState::Karnataka,
            Occupation::SmallBusinessOwner,
            IncomeBracket::Above8Lakh,
            Category::General,
            Language::English,
        ));

        assert_eq!(ids(&recs), vec!["pm_mudra", "pm_jan_dhan", "pm_suraksha_bima"]);
    }

    #[test]
    fn test_extra_matches_are_truncated_first_matched_first_kept() {
        // Student, low income, SC/ST, female: four rules match.
        let recs = engine().recommend(&profile(
            19,
            Gender::Female,
            IndianState::TamilNadu,
            Occupation::Student,
            IncomeBracket::Below1Lakh,
            Category::ScSt,
            Language::English,
        ));

        assert_eq!(
            ids(&recs),
            vec!["national_scholarship", "pm_awas_yojana", "mahila_samman"]
        );
    }

    #[test]
    fn test_unemployed_outside_age_band_skips_skill_scheme() {
        let recs = engine().recommend(&profile(
            60,
            Gender::Male,
            IndianState::Delhi,
            Occupation::Unemployed,
            IncomeBracket::From1To3Lakh,
            Category::General,
            Language::English,
        ));
        assert!(!ids(&recs).contains(&"pm_kaushal_vikas"));
    }

    #[test]
    fn test_output_is_localized() {
        let recs = engine().recommend(&profile(
            20,
            Gender::Male,
            IndianState::Other,
            Occupation::Student,
            IncomeBracket::Below1Lakh,
            Category::General,
            Language::Hindi,
        ));

        assert_eq!(recs[0].name, "राष्ट्रीय छात्रवृत्ति पोर्टल (NSP) छात्रवृत्तियाँ");
        assert!(recs[0].qualification_reason.contains("20"));
        assert!(recs[0].qualification_reason.contains("Student"));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let p = profile(
            27,
            Gender::Other,
            IndianState::UttarPradesh,
            Occupation::Unemployed,
            IncomeBracket::From1To3Lakh,
            Category::Obc,
            Language::Telugu,
        );
        let engine = engine();
        assert_eq!(engine.recommend(&p), engine.recommend(&p));
    }

    #[test]
    fn test_reason_placeholders_are_all_filled() {
        let p = profile(
            33,
            Gender::Female,
            IndianState::Delhi,
            Occupation::Unemployed,
            IncomeBracket::Below1Lakh,
            Category::Minority,
            Language::Kannada,
        );
        for rec in engine().recommend(&p) {
            assert!(
                !rec.qualification_reason.contains('{'),
                "unfilled placeholder in {}: {}",
                rec.id,
                rec.qualification_reason
            );
        }
    }

    /// Every profile yields three complete, profile-specific recommendations.
    #[test]
    fn test_every_profile_gets_three_complete_recommendations() {
        let engine = engine();
        for age in [0u16, 17, 18, 35, 36, 45, 100] {
            for gender in Gender::ALL {
                for state in IndianState::ALL {
                    for occupation in Occupation::ALL {
                        for income in IncomeBracket::ALL {
                            for category in Category::ALL {
                                for language in Language::ALL {
                                    let p = profile(
                                        age, gender, state, occupation, income, category,
                                        language,
                                    );
                                    let recs = engine.recommend(&p);
                                    let age_str = age.to_string();
                                    for rec in &recs {
                                        assert!(!rec.name.is_empty());
                                        assert!(!rec.benefit.is_empty());
                                        assert!(rec.qualification_reason.contains(&age_str));
                                        assert!(!rec.required_documents.is_empty());
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_consolidated_documents_across_recommendations() {
        let recs = engine().recommend(&profile(
            50,
            Gender::Male,
            IndianState::Maharashtra,
            Occupation::Farmer,
            IncomeBracket::Below1Lakh,
            Category::General,
            Language::English,
        ));
        let documents = consolidated_documents(&recs);

        assert_eq!(
            documents.iter().filter(|d| *d == "Aadhaar Card").count(),
            1,
            "Aadhaar Card is shared by all three schemes but listed once"
        );
        let mut sorted = documents.clone();
        sorted.sort();
        assert_eq!(documents, sorted);
        assert!(documents.contains(&"Ration Card".to_string()));
        assert!(documents.contains(&"Land Ownership Records".to_string()));
    }

    #[test]
    fn test_new_rejects_invalid_catalog() {
        let mut catalog = RuleCatalog::builtin();
        catalog.generic.clear();
        assert!(matches!(
            ProfileRuleEngine::new(catalog),
            Err(CatalogError::TooFewGeneric(0))
        ));
    }

    #[test]
    fn test_swapped_catalog_changes_output() {
        let mut catalog = RuleCatalog::builtin();
        catalog.rules.clear();
        catalog.generic.reverse();
        let engine = ProfileRuleEngine::new(catalog).unwrap();

        let recs = engine.recommend(&profile(
            20,
            Gender::Male,
            IndianState::Other,
            Occupation::Student,
            IncomeBracket::Below1Lakh,
            Category::General,
            Language::English,
        ));
        assert_eq!(
            ids(&recs),
            vec!["atal_pension", "pm_suraksha_bima", "pm_jan_dhan"]
        );
    }
}
