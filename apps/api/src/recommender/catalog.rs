//! Scheme catalog: the swappable table of candidate rules and generic fallbacks.
//!
//! The builtin catalog is illustrative sample data, not sourced from policy
//! documents. Deployments can replace it with a JSON file of the same shape
//! (`SCHEME_CATALOG_PATH`).

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::locale::LocalizedText;
use crate::models::profile::{
    Category, CitizenProfile, Gender, IncomeBracket, IndianState, Language, Occupation,
};

/// Number of recommendations the engine always returns.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Placeholders a reason template may reference. `{age}` is mandatory.
pub const PLACEHOLDERS: [&str; 6] = [
    "{age}",
    "{gender}",
    "{state}",
    "{occupation}",
    "{income}",
    "{category}",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog needs at least 3 generic schemes, found {0}")]
    TooFewGeneric(usize),

    #[error("duplicate scheme id '{0}'")]
    DuplicateId(String),

    #[error("scheme '{id}' has an empty {field} in {language:?}")]
    EmptyField {
        id: String,
        field: &'static str,
        language: Language,
    },

    #[error("scheme '{id}' reason in {language:?} must cite {{age}} and at least one other profile field")]
    ReasonNotProfileSpecific { id: String, language: Language },

    #[error("scheme '{0}' lists no required documents")]
    NoDocuments(String),

    #[error("scheme id must not be empty")]
    EmptyId,

    #[error("scheme '{0}' lists a blank required document")]
    BlankDocument(String),
}

/// A single predicate over profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    AgeAtMost { max: u8 },
    AgeBetween { min: u8, max: u8 },
    GenderIn { values: Vec<Gender> },
    StateIn { values: Vec<IndianState> },
    OccupationIn { values: Vec<Occupation> },
    IncomeIn { values: Vec<IncomeBracket> },
    CategoryIn { values: Vec<Category> },
}

impl Condition {
    pub fn holds(&self, profile: &CitizenProfile) -> bool {
        match self {
            Condition::AgeAtMost { max } => profile.age() <= *max,
            Condition::AgeBetween { min, max } => (*min..=*max).contains(&profile.age()),
            Condition::GenderIn { values } => values.contains(&profile.gender()),
            Condition::StateIn { values } => values.contains(&profile.state()),
            Condition::OccupationIn { values } => values.contains(&profile.occupation()),
            Condition::IncomeIn { values } => values.contains(&profile.income()),
            Condition::CategoryIn { values } => values.contains(&profile.category()),
        }
    }
}

/// Localized content of one scheme. `reason` is a template over `PLACEHOLDERS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTemplate {
    pub id: String,
    pub name: LocalizedText,
    pub benefit: LocalizedText,
    pub reason: LocalizedText,
    pub documents: Vec<String>,
}

/// A catalog rule: the template applies when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRule {
    #[serde(flatten)]
    pub template: SchemeTemplate,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl SchemeRule {
    pub fn matches(&self, profile: &CitizenProfile) -> bool {
        self.conditions.iter().all(|c| c.holds(profile))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Evaluated in declaration order; earlier rules win slots.
    pub rules: Vec<SchemeRule>,
    /// Fixed-order padding used when fewer than three rules match.
    pub generic: Vec<SchemeTemplate>,
}

impl RuleCatalog {
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scheme catalog at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Scheme catalog at {} is not valid JSON", path.display()))
    }

    /// Checks the invariants the engine relies on to stay total.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.generic.len() < RECOMMENDATION_COUNT {
            return Err(CatalogError::TooFewGeneric(self.generic.len()));
        }

        let mut seen = HashSet::new();
        let templates = self
            .rules
            .iter()
            .map(|r| &r.template)
            .chain(self.generic.iter());

        for template in templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }
            validate_template(template)?;
        }

        Ok(())
    }

    /// Illustrative sample catalog shipped with the service.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            generic: builtin_generic(),
        }
    }
}

fn validate_template(template: &SchemeTemplate) -> Result<(), CatalogError> {
    if template.id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }

    let fields = [
        ("name", &template.name),
        ("benefit", &template.benefit),
        ("reason", &template.reason),
    ];
    for (field, text) in fields {
        if let Some((language, _)) = text.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(CatalogError::EmptyField {
                id: template.id.clone(),
                field,
                language,
            });
        }
    }

    for (language, reason) in template.reason.iter() {
        let cites_age = reason.contains("{age}");
        let cites_other = PLACEHOLDERS[1..].iter().any(|p| reason.contains(p));
        if !(cites_age && cites_other) {
            return Err(CatalogError::ReasonNotProfileSpecific {
                id: template.id.clone(),
                language,
            });
        }
    }

    if template.documents.is_empty() {
        return Err(CatalogError::NoDocuments(template.id.clone()));
    }
    if template.documents.iter().any(|d| d.trim().is_empty()) {
        return Err(CatalogError::BlankDocument(template.id.clone()));
    }

    Ok(())
}

fn t(english: &str, hindi: &str, tamil: &str, telugu: &str, kannada: &str) -> LocalizedText {
    LocalizedText::new(english, hindi, tamil, telugu, kannada)
}

fn docs(items: &[&str]) -> Vec<String> {
    items.iter().map(|d| d.to_string()).collect()
}

fn builtin_rules() -> Vec<SchemeRule> {
    vec![
        SchemeRule {
            template: SchemeTemplate {
                id: "national_scholarship".to_string(),
                name: t(
                    "National Scholarship Portal (NSP) Scholarships",
                    "राष्ट्रीय छात्रवृत्ति पोर्टल (NSP) छात्रवृत्तियाँ",
                    "தேசிய கல்வி உதவித்தொகை இணையதளம் (NSP) உதவித்தொகைகள்",
                    "జాతీయ స్కాలర్‌షిప్ పోర్టల్ (NSP) స్కాలర్‌షిప్‌లు",
                    "ರಾಷ್ಟ್ರೀಯ ವಿದ್ಯಾರ್ಥಿವೇತನ ಪೋರ್ಟಲ್ (NSP) ವಿದ್ಯಾರ್ಥಿವೇತನಗಳು",
                ),
                benefit: t(
                    "Scholarships of up to ₹50,000 per year towards tuition and maintenance",
                    "शिक्षण शुल्क और रखरखाव के लिए प्रति वर्ष ₹50,000 तक की छात्रवृत्ति",
                    "கல்விக் கட்டணம் மற்றும் பராமரிப்புக்காக ஆண்டுக்கு ₹50,000 வரை உதவித்தொகை",
                    "ట్యూషన్ మరియు నిర్వహణ కోసం సంవత్సరానికి ₹50,000 వరకు స్కాలర్‌షిప్",
                    "ಶುಲ್ಕ ಮತ್ತು ನಿರ್ವಹಣೆಗಾಗಿ ವರ್ಷಕ್ಕೆ ₹50,000 ವರೆಗೆ ವಿದ್ಯಾರ್ಥಿವೇತನ",
                ),
                reason: t(
                    "You qualify because you are {age} years old and a {occupation}, and your family income of {income} falls within the scholarship limits.",
                    "आप पात्र हैं क्योंकि आपकी आयु {age} वर्ष है, आप {occupation} हैं, और आपकी पारिवारिक आय {income} छात्रवृत्ति की सीमा में आती है।",
                    "நீங்கள் {age} வயதுடைய {occupation} என்பதாலும், உங்கள் குடும்ப வருமானம் {income} உதவித்தொகை வரம்பிற்குள் இருப்பதாலும் நீங்கள் தகுதியானவர்.",
                    "మీ వయస్సు {age} సంవత్సరాలు, మీరు {occupation}, మరియు మీ కుటుంబ ఆదాయం {income} స్కాలర్‌షిప్ పరిమితిలో ఉంది కాబట్టి మీరు అర్హులు.",
                    "ನಿಮ್ಮ ವಯಸ್ಸು {age} ವರ್ಷ, ನೀವು {occupation}, ಮತ್ತು ನಿಮ್ಮ ಕುಟುಂಬದ ಆದಾಯ {income} ವಿದ್ಯಾರ್ಥಿವೇತನದ ಮಿತಿಯೊಳಗಿರುವುದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&[
                    "Aadhaar Card",
                    "Income Certificate",
                    "Previous Year Marksheet",
                    "Bonafide Student Certificate",
                    "Bank Passbook",
                ]),
            },
            conditions: vec![
                Condition::AgeAtMost { max: 35 },
                Condition::OccupationIn {
                    values: vec![Occupation::Student],
                },
            ],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "pm_awas_yojana".to_string(),
                name: t(
                    "Pradhan Mantri Awas Yojana (PMAY)",
                    "प्रधानमंत्री आवास योजना (PMAY)",
                    "பிரதம மந்திரி ஆவாஸ் யோஜனா (PMAY)",
                    "ప్రధాన మంత్రి ఆవాస్ యోజన (PMAY)",
                    "ಪ್ರಧಾನ ಮಂತ್ರಿ ಆವಾಸ್ ಯೋಜನೆ (PMAY)",
                ),
                benefit: t(
                    "Financial assistance of up to ₹2.5 lakh to build or buy a pucca house",
                    "पक्का घर बनाने या खरीदने के लिए ₹2.5 लाख तक की वित्तीय सहायता",
                    "நிரந்தர வீடு கட்ட அல்லது வாங்க ₹2.5 லட்சம் வரை நிதி உதவி",
                    "పక్కా ఇల్లు కట్టుకోవడానికి లేదా కొనడానికి ₹2.5 లక్షల వరకు ఆర్థిక సహాయం",
                    "ಪಕ್ಕಾ ಮನೆ ಕಟ್ಟಲು ಅಥವಾ ಖರೀದಿಸಲು ₹2.5 ಲಕ್ಷದವರೆಗೆ ಆರ್ಥಿಕ ನೆರವು",
                ),
                reason: t(
                    "You qualify because you belong to the {category} category, your family income is {income}, and at {age} you can apply as the head of your household.",
                    "आप पात्र हैं क्योंकि आप {category} वर्ग से हैं, आपकी पारिवारिक आय {income} है, और {age} वर्ष की आयु में आप परिवार के मुखिया के रूप में आवेदन कर सकते हैं।",
                    "நீங்கள் {category} பிரிவைச் சேர்ந்தவர், உங்கள் குடும்ப வருமானம் {income}, மேலும் {age} வயதில் குடும்பத் தலைவராக விண்ணப்பிக்கலாம் என்பதால் நீங்கள் தகுதியானவர்.",
                    "మీరు {category} వర్గానికి చెందినవారు, మీ కుటుంబ ఆదాయం {income}, మరియు {age} సంవత్సరాల వయస్సులో కుటుంబ పెద్దగా దరఖాస్తు చేయవచ్చు కాబట్టి మీరు అర్హులు.",
                    "ನೀವು {category} ವರ್ಗಕ್ಕೆ ಸೇರಿದವರು, ನಿಮ್ಮ ಕುಟುಂಬದ ಆದಾಯ {income}, ಮತ್ತು {age} ವಯಸ್ಸಿನಲ್ಲಿ ಕುಟುಂಬದ ಮುಖ್ಯಸ್ಥರಾಗಿ ಅರ್ಜಿ ಸಲ್ಲಿಸಬಹುದಾದ್ದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&[
                    "Aadhaar Card",
                    "Income Certificate",
                    "Caste Certificate",
                    "Bank Passbook",
                ]),
            },
            conditions: vec![
                Condition::IncomeIn {
                    values: vec![IncomeBracket::Below1Lakh, IncomeBracket::From1To3Lakh],
                },
                Condition::CategoryIn {
                    values: vec![Category::ScSt, Category::Obc],
                },
            ],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "namo_shetkari".to_string(),
                name: t(
                    "Namo Shetkari Maha Samman Nidhi",
                    "नमो शेतकरी महा सम्मान निधि",
                    "நமோ ஷேத்காரி மகா சம்மான் நிதி",
                    "నమో శెత్కరీ మహా సమ్మాన్ నిధి",
                    "ನಮೋ ಶೇತ್ಕರಿ ಮಹಾ ಸಮ್ಮಾನ್ ನಿಧಿ",
                ),
                benefit: t(
                    "An additional ₹6,000 per year from the Maharashtra government on top of PM-KISAN",
                    "PM-KISAN के अतिरिक्त महाराष्ट्र सरकार से प्रति वर्ष ₹6,000",
                    "PM-KISAN உடன் கூடுதலாக மகாராஷ்டிர அரசிடமிருந்து ஆண்டுக்கு ₹6,000",
                    "PM-KISAN కు అదనంగా మహారాష్ట్ర ప్రభుత్వం నుండి సంవత్సరానికి ₹6,000",
                    "PM-KISAN ಜೊತೆಗೆ ಮಹಾರಾಷ್ಟ್ರ ಸರ್ಕಾರದಿಂದ ವರ್ಷಕ್ಕೆ ಹೆಚ್ಚುವರಿ ₹6,000",
                ),
                reason: t(
                    "You qualify because you are a {occupation} in {state}, and at {age} you can register your landholding with the state agriculture department.",
                    "आप पात्र हैं क्योंकि आप {state} में {occupation} हैं, और {age} वर्ष की आयु में आप राज्य कृषि विभाग में अपनी भूमि पंजीकृत कर सकते हैं।",
                    "நீங்கள் {state} மாநிலத்தில் {occupation} என்பதாலும், {age} வயதில் மாநில வேளாண் துறையில் உங்கள் நிலத்தைப் பதிவு செய்யலாம் என்பதாலும் நீங்கள் தகுதியானவர்.",
                    "మీరు {state}లో {occupation}, మరియు {age} సంవత్సరాల వయస్సులో రాష్ట్ర వ్యవసాయ శాఖలో మీ భూమిని నమోదు చేసుకోవచ్చు కాబట్టి మీరు అర్హులు.",
                    "ನೀವು {state}ದಲ್ಲಿ {occupation}, ಮತ್ತು {age} ವಯಸ್ಸಿನಲ್ಲಿ ರಾಜ್ಯ ಕೃಷಿ ಇಲಾಖೆಯಲ್ಲಿ ನಿಮ್ಮ ಜಮೀನನ್ನು ನೋಂದಾಯಿಸಬಹುದಾದ್ದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&[
                    "Aadhaar Card",
                    "Land Ownership Records",
                    "Maharashtra Domicile Certificate",
                    "Bank Passbook",
                ]),
            },
            conditions: vec![
                Condition::StateIn {
                    values: vec![IndianState::Maharashtra],
                },
                Condition::OccupationIn {
                    values: vec![Occupation::Farmer],
                },
            ],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "pm_kisan".to_string(),
                name: t(
                    "PM-KISAN Samman Nidhi",
                    "पीएम-किसान सम्मान निधि",
                    "பிஎம்-கிசான் சம்மான் நிதி",
                    "పీఎం-కిసాన్ సమ్మాన్ నిధి",
                    "ಪಿಎಂ-ಕಿಸಾನ್ ಸಮ್ಮಾನ್ ನಿಧಿ",
                ),
                benefit: t(
                    "₹6,000 per year paid in three instalments directly to your bank account",
                    "प्रति वर्ष ₹6,000, तीन किस्तों में सीधे आपके बैंक खाते में",
                    "ஆண்டுக்கு ₹6,000, மூன்று தவணைகளாக நேரடியாக உங்கள் வங்கிக் கணக்கில்",
                    "సంవత్సరానికి ₹6,000, మూడు విడతల్లో నేరుగా మీ బ్యాంక్ ఖాతాలోకి",
                    "ವರ್ಷಕ್ಕೆ ₹6,000, ಮೂರು ಕಂತುಗಳಲ್ಲಿ ನೇರವಾಗಿ ನಿಮ್ಮ ಬ್ಯಾಂಕ್ ಖಾತೆಗೆ",
                ),
                reason: t(
                    "You qualify because you are a {occupation} aged {age} in {state}, and PM-KISAN supports every landholding farmer family.",
                    "आप पात्र हैं क्योंकि आप {state} में {age} वर्ष के {occupation} हैं, और पीएम-किसान हर भूमिधारक किसान परिवार की सहायता करता है।",
                    "நீங்கள் {state} மாநிலத்தில் {age} வயதுடைய {occupation} என்பதாலும், பிஎம்-கிசான் நிலம் வைத்திருக்கும் ஒவ்வொரு விவசாயக் குடும்பத்திற்கும் உதவுவதாலும் நீங்கள் தகுதியானவர்.",
                    "మీరు {state}లో {age} సంవత్సరాల {occupation}, మరియు పీఎం-కిసాన్ భూమి ఉన్న ప్రతి రైతు కుటుంబానికి సహాయం చేస్తుంది కాబట్టి మీరు అర్హులు.",
                    "ನೀವು {state}ದಲ್ಲಿ {age} ವಯಸ್ಸಿನ {occupation}, ಮತ್ತು ಪಿಎಂ-ಕಿಸಾನ್ ಜಮೀನು ಹೊಂದಿರುವ ಪ್ರತಿಯೊಂದು ರೈತ ಕುಟುಂಬಕ್ಕೆ ನೆರವಾಗುವುದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&["Aadhaar Card", "Land Ownership Records", "Bank Passbook"]),
            },
            conditions: vec![Condition::OccupationIn {
                values: vec![Occupation::Farmer],
            }],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "pm_mudra".to_string(),
                name: t(
                    "Pradhan Mantri MUDRA Yojana",
                    "प्रधानमंत्री मुद्रा योजना",
                    "பிரதம மந்திரி முத்ரா யோஜனா",
                    "ప్రధాన మంత్రి ముద్ర యోజన",
                    "ಪ್ರಧಾನ ಮಂತ್ರಿ ಮುದ್ರಾ ಯೋಜನೆ",
                ),
                benefit: t(
                    "Collateral-free business loans of up to ₹10 lakh",
                    "₹10 लाख तक का बिना गारंटी व्यवसाय ऋण",
                    "₹10 லட்சம் வரை அடமானம் இல்லாத தொழில் கடன்",
                    "₹10 లక్షల వరకు పూచీకత్తు లేని వ్యాపార రుణం",
                    "₹10 ಲಕ್ಷದವರೆಗೆ ಅಡಮಾನ ರಹಿತ ವ್ಯಾಪಾರ ಸಾಲ",
                ),
                reason: t(
                    "You qualify because you are a {occupation} aged {age} in {state}, and MUDRA loans are meant for non-farm micro enterprises like yours.",
                    "आप पात्र हैं क्योंकि आप {state} में {age} वर्ष के {occupation} हैं, और मुद्रा ऋण आपके जैसे गैर-कृषि सूक्ष्म उद्यमों के लिए हैं।",
                    "நீங்கள் {state} மாநிலத்தில் {age} வயதுடைய {occupation} என்பதாலும், முத்ரா கடன்கள் உங்களைப் போன்ற விவசாயம் சாரா குறு நிறுவனங்களுக்கானவை என்பதாலும் நீங்கள் தகுதியானவர்.",
                    "మీరు {state}లో {age} సంవత్సరాల {occupation}, మరియు ముద్ర రుణాలు మీలాంటి వ్యవసాయేతర సూక్ష్మ సంస్థల కోసం ఉద్దేశించినవి కాబట్టి మీరు అర్హులు.",
                    "ನೀವು {state}ದಲ್ಲಿ {age} ವಯಸ್ಸಿನ {occupation}, ಮತ್ತು ಮುದ್ರಾ ಸಾಲಗಳು ನಿಮ್ಮಂತಹ ಕೃಷಿಯೇತರ ಸೂಕ್ಷ್ಮ ಉದ್ಯಮಗಳಿಗಾಗಿ ಇರುವುದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&[
                    "Aadhaar Card",
                    "PAN Card",
                    "Business Plan",
                    "Proof of Business Address",
                    "Bank Statement (6 months)",
                ]),
            },
            conditions: vec![Condition::OccupationIn {
                values: vec![Occupation::SmallBusinessOwner],
            }],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "pm_kaushal_vikas".to_string(),
                name: t(
                    "Pradhan Mantri Kaushal Vikas Yojana (PMKVY)",
                    "प्रधानमंत्री कौशल विकास योजना (PMKVY)",
                    "பிரதம மந்திரி கௌஷல் விகாஸ் யோஜனா (PMKVY)",
                    "ప్రధాన మంత్రి కౌశల్ వికాస్ యోజన (PMKVY)",
                    "ಪ್ರಧಾನ ಮಂತ್ರಿ ಕೌಶಲ್ ವಿಕಾಸ್ ಯೋಜನೆ (PMKVY)",
                ),
                benefit: t(
                    "Free skill training and certification with placement support",
                    "प्लेसमेंट सहायता के साथ मुफ्त कौशल प्रशिक्षण और प्रमाणन",
                    "வேலைவாய்ப்பு உதவியுடன் இலவச திறன் பயிற்சி மற்றும் சான்றிதழ்",
                    "ఉద్యోగ సహాయంతో ఉచిత నైపుణ్య శిక్షణ మరియు ధృవీకరణ",
                    "ಉದ್ಯೋಗ ನೆರವಿನೊಂದಿಗೆ ಉಚಿತ ಕೌಶಲ್ಯ ತರಬೇತಿ ಮತ್ತು ಪ್ರಮಾಣೀಕರಣ",
                ),
                reason: t(
                    "You qualify because you are {age} years old and currently {occupation}, which is the group PMKVY training centres enrol first.",
                    "आप पात्र हैं क्योंकि आपकी आयु {age} वर्ष है और आप वर्तमान में {occupation} हैं, और PMKVY प्रशिक्षण केंद्र इसी वर्ग को पहले नामांकित करते हैं।",
                    "உங்கள் வயது {age} மற்றும் தற்போது நீங்கள் {occupation} என்பதால் நீங்கள் தகுதியானவர்; PMKVY பயிற்சி மையங்கள் இந்தப் பிரிவினரை முதலில் சேர்க்கின்றன.",
                    "మీ వయస్సు {age} సంవత్సరాలు మరియు ప్రస్తుతం మీరు {occupation} కాబట్టి మీరు అర్హులు; PMKVY శిక్షణ కేంద్రాలు ఈ వర్గాన్ని ముందుగా చేర్చుకుంటాయి.",
                    "ನಿಮ್ಮ ವಯಸ್ಸು {age} ವರ್ಷ ಮತ್ತು ಪ್ರಸ್ತುತ ನೀವು {occupation} ಆಗಿರುವುದರಿಂದ ನೀವು ಅರ್ಹರು; PMKVY ತರಬೇತಿ ಕೇಂದ್ರಗಳು ಈ ವರ್ಗವನ್ನು ಮೊದಲು ದಾಖಲಿಸುತ್ತವೆ.",
                ),
                documents: docs(&["Aadhaar Card", "Educational Certificates", "Bank Passbook"]),
            },
            conditions: vec![
                Condition::AgeBetween { min: 18, max: 45 },
                Condition::OccupationIn {
                    values: vec![Occupation::Unemployed],
                },
            ],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "mahila_samman".to_string(),
                name: t(
                    "Mahila Samman Savings Certificate",
                    "महिला सम्मान बचत पत्र",
                    "மகிளா சம்மான் சேமிப்புச் சான்றிதழ்",
                    "మహిళా సమ్మాన్ పొదుపు సర్టిఫికేట్",
                    "ಮಹಿಳಾ ಸಮ್ಮಾನ್ ಉಳಿತಾಯ ಪ್ರಮಾಣಪತ್ರ",
                ),
                benefit: t(
                    "7.5% fixed interest on deposits of up to ₹2 lakh for two years",
                    "दो वर्षों के लिए ₹2 लाख तक की जमा राशि पर 7.5% निश्चित ब्याज",
                    "இரண்டு ஆண்டுகளுக்கு ₹2 லட்சம் வரையிலான வைப்புக்கு 7.5% நிலையான வட்டி",
                    "రెండేళ్ల పాటు ₹2 లక్షల వరకు డిపాజిట్లపై 7.5% స్థిర వడ్డీ",
                    "ಎರಡು ವರ್ಷಗಳವರೆಗೆ ₹2 ಲಕ್ಷದವರೆಗಿನ ಠೇವಣಿಗೆ 7.5% ನಿಗದಿತ ಬಡ್ಡಿ",
                ),
                reason: t(
                    "You qualify because the certificate is reserved for women and you are a {gender} applicant aged {age} from {state}.",
                    "आप पात्र हैं क्योंकि यह पत्र महिलाओं के लिए आरक्षित है और आप {state} की {age} वर्षीय {gender} आवेदक हैं।",
                    "இந்தச் சான்றிதழ் பெண்களுக்கு ஒதுக்கப்பட்டது, நீங்கள் {state} மாநிலத்தைச் சேர்ந்த {age} வயதுடைய {gender} விண்ணப்பதாரர் என்பதால் நீங்கள் தகுதியானவர்.",
                    "ఈ సర్టిఫికేట్ మహిళల కోసం కేటాయించబడింది మరియు మీరు {state}కు చెందిన {age} సంవత్సరాల {gender} దరఖాస్తుదారు కాబట్టి మీరు అర్హులు.",
                    "ಈ ಪ್ರಮಾಣಪತ್ರ ಮಹಿಳೆಯರಿಗೆ ಮೀಸಲಾಗಿದೆ ಮತ್ತು ನೀವು {state}ದ {age} ವಯಸ್ಸಿನ {gender} ಅರ್ಜಿದಾರರಾಗಿರುವುದರಿಂದ ನೀವು ಅರ್ಹರು.",
                ),
                documents: docs(&["Aadhaar Card", "PAN Card", "Passport Size Photograph"]),
            },
            conditions: vec![Condition::GenderIn {
                values: vec![Gender::Female],
            }],
        },
        SchemeRule {
            template: SchemeTemplate {
                id: "ayushman_bharat".to_string(),
                name: t(
                    "Ayushman Bharat PM-JAY",
                    "आयुष्मान भारत पीएम-जय",
                    "ஆயுஷ்மான் பாரத் பிஎம்-ஜெய்",
                    "ఆయుష్మాన్ భారత్ పీఎం-జయ్",
                    "ಆಯುಷ್ಮಾನ್ ಭಾರತ್ ಪಿಎಂ-ಜಯ್",
                ),
                benefit: t(
                    "Free hospital treatment of up to ₹5 lakh per family per year",
                    "प्रति परिवार प्रति वर्ष ₹5 लाख तक का मुफ्त अस्पताल उपचार",
                    "ஒரு குடும்பத்திற்கு ஆண்டுக்கு ₹5 லட்சம் வரை இலவச மருத்துவமனை சிகிச்சை",
                    "ఒక్కో కుటుంబానికి సంవత్సరానికి ₹5 లక్షల వరకు ఉచిత ఆసుపత్రి చికిత్స",
                    "ಪ್ರತಿ ಕುಟುಂಬಕ್ಕೆ ವರ್ಷಕ್ಕೆ ₹5 ಲಕ್ಷದವರೆಗೆ ಉಚಿತ ಆಸ್ಪತ್ರೆ ಚಿಕಿತ್ಸೆ",
                ),
                reason: t(
                    "You qualify because your family income is {income}, and at {age} you and every member of your household are covered.",
                    "आप पात्र हैं क्योंकि आपकी पारिवारिक आय {income} है, और {age} वर्ष की आयु में आप और आपके परिवार के सभी सदस्य कवर होते हैं।",
                    "உங்கள் குடும்ப வருமானம் {income} என்பதாலும், {age} வயதில் நீங்களும் உங்கள் குடும்ப உறுப்பினர்கள் அனைவரும் காப்பீடு பெறுவதாலும் நீங்கள் தகுதியானவர்.",
                    "మీ కుటుంబ ఆదాయం {income} కాబట్టి మీరు అర్హులు, మరియు {age} సంవత్సరాల వయస్సులో మీరు మరియు మీ కుటుంబ సభ్యులందరూ కవర్ అవుతారు.",
                    "ನಿಮ್ಮ ಕುಟುಂಬದ ಆದಾಯ {income} ಆಗಿರುವುದರಿಂದ ನೀವು ಅರ್ಹರು, ಮತ್ತು {age} ವಯಸ್ಸಿನಲ್ಲಿ ನೀವು ಹಾಗೂ ನಿಮ್ಮ ಕುಟುಂಬದ ಎಲ್ಲಾ ಸದಸ್ಯರು ಒಳಗೊಳ್ಳುತ್ತೀರಿ.",
                ),
                documents: docs(&["Aadhaar Card", "Ration Card", "Income Certificate"]),
            },
            conditions: vec![Condition::IncomeIn {
                values: vec![IncomeBracket::Below1Lakh],
            }],
        },
    ]
}

fn builtin_generic() -> Vec<SchemeTemplate> {
    vec![
        SchemeTemplate {
            id: "pm_jan_dhan".to_string(),
            name: t(
                "Pradhan Mantri Jan Dhan Yojana (PMJDY)",
                "प्रधानमंत्री जन धन योजना (PMJDY)",
                "பிரதம மந்திரி ஜன் தன் யோஜனா (PMJDY)",
                "ప్రధాన మంత్రి జన్ ధన్ యోజన (PMJDY)",
                "ಪ್ರಧಾನ ಮಂತ್ರಿ ಜನ್ ಧನ್ ಯೋಜನೆ (PMJDY)",
            ),
            benefit: t(
                "Zero-balance bank account with a RuPay card and ₹2 lakh accident cover",
                "RuPay कार्ड और ₹2 लाख दुर्घटना बीमा के साथ शून्य-शेष बैंक खाता",
                "RuPay அட்டை மற்றும் ₹2 லட்சம் விபத்துக் காப்பீட்டுடன் பூஜ்ஜிய இருப்பு வங்கிக் கணக்கு",
                "RuPay కార్డ్ మరియు ₹2 లక్షల ప్రమాద బీమాతో జీరో బ్యాలెన్స్ బ్యాంక్ ఖాతా",
                "RuPay ಕಾರ್ಡ್ ಮತ್ತು ₹2 ಲಕ್ಷ ಅಪಘಾತ ವಿಮೆಯೊಂದಿಗೆ ಶೂನ್ಯ ಬಾಕಿ ಬ್ಯಾಂಕ್ ಖಾತೆ",
            ),
            reason: t(
                "As a {occupation} aged {age} in {state}, you can open a Jan Dhan account at any bank branch with just your Aadhaar.",
                "{state} में {age} वर्ष के {occupation} के रूप में, आप केवल आधार के साथ किसी भी बैंक शाखा में जन धन खाता खोल सकते हैं।",
                "{state} மாநிலத்தில் {age} வயதுடைய {occupation} என்ற முறையில், ஆதார் மட்டும் கொண்டு எந்த வங்கிக் கிளையிலும் ஜன் தன் கணக்கைத் தொடங்கலாம்.",
                "{state}లో {age} సంవత్సరాల {occupation}గా, కేవలం ఆధార్‌తో ఏ బ్యాంక్ శాఖలోనైనా జన్ ధన్ ఖాతా తెరవవచ్చు.",
                "{state}ದಲ್ಲಿ {age} ವಯಸ್ಸಿನ {occupation} ಆಗಿ, ಕೇವಲ ಆಧಾರ್‌ನೊಂದಿಗೆ ಯಾವುದೇ ಬ್ಯಾಂಕ್ ಶಾಖೆಯಲ್ಲಿ ಜನ್ ಧನ್ ಖಾತೆ ತೆರೆಯಬಹುದು.",
            ),
            documents: docs(&["Aadhaar Card", "Passport Size Photograph"]),
        },
        SchemeTemplate {
            id: "pm_suraksha_bima".to_string(),
            name: t(
                "Pradhan Mantri Suraksha Bima Yojana (PMSBY)",
                "प्रधानमंत्री सुरक्षा बीमा योजना (PMSBY)",
                "பிரதம மந்திரி சுரக்ஷா பீமா யோஜனா (PMSBY)",
                "ప్రధాన మంత్రి సురక్ష బీమా యోజన (PMSBY)",
                "ಪ್ರಧಾನ ಮಂತ್ರಿ ಸುರಕ್ಷಾ ಬಿಮಾ ಯೋಜನೆ (PMSBY)",
            ),
            benefit: t(
                "₹2 lakh accident insurance for a premium of ₹20 per year",
                "₹20 प्रति वर्ष के प्रीमियम पर ₹2 लाख का दुर्घटना बीमा",
                "ஆண்டுக்கு ₹20 பிரீமியத்தில் ₹2 லட்சம் விபத்துக் காப்பீடு",
                "సంవత్సరానికి ₹20 ప్రీమియంతో ₹2 లక్షల ప్రమాద బీమా",
                "ವರ್ಷಕ್ಕೆ ₹20 ಪ್ರೀಮಿಯಂನಲ್ಲಿ ₹2 ಲಕ್ಷ ಅಪಘಾತ ವಿಮೆ",
            ),
            reason: t(
                "At {age} years with a family income of {income}, you can enrol through your savings account for a very low annual premium.",
                "{age} वर्ष की आयु और {income} की पारिवारिक आय के साथ, आप बहुत कम वार्षिक प्रीमियम पर अपने बचत खाते से नामांकन कर सकते हैं।",
                "{age} வயது மற்றும் {income} குடும்ப வருமானத்துடன், மிகக் குறைந்த ஆண்டுப் பிரீமியத்தில் உங்கள் சேமிப்புக் கணக்கின் மூலம் சேரலாம்.",
                "{age} సంవత్సరాల వయస్సు మరియు {income} కుటుంబ ఆదాయంతో, చాలా తక్కువ వార్షిక ప్రీమియంతో మీ పొదుపు ఖాతా ద్వారా నమోదు చేసుకోవచ్చు.",
                "{age} ವಯಸ್ಸು ಮತ್ತು {income} ಕುಟುಂಬದ ಆದಾಯದೊಂದಿಗೆ, ಅತಿ ಕಡಿಮೆ ವಾರ್ಷಿಕ ಪ್ರೀಮಿಯಂನಲ್ಲಿ ನಿಮ್ಮ ಉಳಿತಾಯ ಖಾತೆಯ ಮೂಲಕ ನೋಂದಾಯಿಸಬಹುದು.",
            ),
            documents: docs(&["Aadhaar Card", "Bank Passbook"]),
        },
        SchemeTemplate {
            id: "atal_pension".to_string(),
            name: t(
                "Atal Pension Yojana (APY)",
                "अटल पेंशन योजना (APY)",
                "அடல் ஓய்வூதியத் திட்டம் (APY)",
                "అటల్ పెన్షన్ యోజన (APY)",
                "ಅಟಲ್ ಪಿಂಚಣಿ ಯೋಜನೆ (APY)",
            ),
            benefit: t(
                "Guaranteed pension of ₹1,000 to ₹5,000 per month after age 60",
                "60 वर्ष की आयु के बाद ₹1,000 से ₹5,000 प्रति माह की गारंटीकृत पेंशन",
                "60 வயதுக்குப் பிறகு மாதம் ₹1,000 முதல் ₹5,000 வரை உத்தரவாத ஓய்வூதியம்",
                "60 ఏళ్ల తర్వాత నెలకు ₹1,000 నుండి ₹5,000 వరకు హామీ పెన్షన్",
                "60 ವರ್ಷದ ನಂತರ ತಿಂಗಳಿಗೆ ₹1,000 ರಿಂದ ₹5,000 ವರೆಗೆ ಖಾತರಿ ಪಿಂಚಣಿ",
            ),
            reason: t(
                "As a {gender} {occupation} aged {age} in the {category} category, you can start small monthly contributions now and lock in a pension.",
                "{category} वर्ग के {age} वर्षीय {gender} {occupation} के रूप में, आप अभी छोटे मासिक योगदान शुरू करके पेंशन सुनिश्चित कर सकते हैं।",
                "{category} பிரிவைச் சேர்ந்த {age} வயதுடைய {gender} {occupation} என்ற முறையில், இப்போதே சிறிய மாதாந்திரப் பங்களிப்புகளைத் தொடங்கி ஓய்வூதியத்தை உறுதி செய்யலாம்.",
                "{category} వర్గానికి చెందిన {age} సంవత్సరాల {gender} {occupation}గా, ఇప్పుడే చిన్న నెలవారీ చందాలు ప్రారంభించి పెన్షన్‌ను ఖాయం చేసుకోవచ్చు.",
                "{category} ವರ್ಗದ {age} ವಯಸ್ಸಿನ {gender} {occupation} ಆಗಿ, ಈಗಲೇ ಸಣ್ಣ ಮಾಸಿಕ ಕೊಡುಗೆಗಳನ್ನು ಪ್ರಾರಂಭಿಸಿ ಪಿಂಚಣಿಯನ್ನು ಖಚಿತಪಡಿಸಿಕೊಳ್ಳಬಹುದು.",
            ),
            documents: docs(&["Aadhaar Card", "Bank Passbook", "Mobile Number linked to Aadhaar"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile(age: u16, occupation: Occupation, state: IndianState) -> CitizenProfile {
        CitizenProfile::new(
            age,
            Gender::Male,
            state,
            occupation,
            IncomeBracket::From3To8Lakh,
            Category::General,
            Language::English,
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        RuleCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_age_between_is_inclusive() {
        let cond = Condition::AgeBetween { min: 18, max: 45 };
        assert!(cond.holds(&profile(18, Occupation::Unemployed, IndianState::Other)));
        assert!(cond.holds(&profile(45, Occupation::Unemployed, IndianState::Other)));
        assert!(!cond.holds(&profile(46, Occupation::Unemployed, IndianState::Other)));
    }

    #[test]
    fn test_rule_requires_every_condition() {
        let catalog = RuleCatalog::builtin();
        let namo = catalog
            .rules
            .iter()
            .find(|r| r.template.id == "namo_shetkari")
            .unwrap();

        assert!(namo.matches(&profile(40, Occupation::Farmer, IndianState::Maharashtra)));
        assert!(!namo.matches(&profile(40, Occupation::Farmer, IndianState::Karnataka)));
        assert!(!namo.matches(&profile(40, Occupation::Student, IndianState::Maharashtra)));
    }

    #[test]
    fn test_validate_rejects_too_few_generic() {
        let mut catalog = RuleCatalog::builtin();
        catalog.generic.truncate(2);
        assert_eq!(catalog.validate(), Err(CatalogError::TooFewGeneric(2)));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = RuleCatalog::builtin();
        let mut dup = catalog.generic[0].clone();
        dup.id = catalog.rules[0].template.id.clone();
        catalog.generic.push(dup);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("national_scholarship".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_generic_reason() {
        let mut catalog = RuleCatalog::builtin();
        catalog.generic[1].reason.tamil = "நீங்கள் தகுதியானவர்.".to_string();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::ReasonNotProfileSpecific {
                id: "pm_suraksha_bima".to_string(),
                language: Language::Tamil,
            })
        );
    }

    #[test]
    fn test_validate_rejects_age_only_reason() {
        let mut catalog = RuleCatalog::builtin();
        catalog.rules[0].template.reason.english = "You are {age}.".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ReasonNotProfileSpecific { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_documents() {
        let mut catalog = RuleCatalog::builtin();
        catalog.generic[2].documents.clear();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::NoDocuments("atal_pension".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_blank_document_among_real_ones() {
        let mut catalog = RuleCatalog::builtin();
        catalog.generic[0].documents.push("   ".to_string());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::BlankDocument("pm_jan_dhan".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut catalog = RuleCatalog::builtin();
        catalog.rules[0].template.id = " ".to_string();
        assert_eq!(catalog.validate(), Err(CatalogError::EmptyId));
    }

    #[test]
    fn test_from_json_file_round_trips_builtin() {
        let builtin = RuleCatalog::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&builtin).unwrap().as_bytes())
            .unwrap();

        let loaded = RuleCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, builtin);
    }

    #[test]
    fn test_from_json_file_reads_tagged_conditions() {
        let json = r#"{
            "rules": [{
                "id": "delhi_students",
                "name": {"english": "A", "hindi": "A", "tamil": "A", "telugu": "A", "kannada": "A"},
                "benefit": {"english": "B", "hindi": "B", "tamil": "B", "telugu": "B", "kannada": "B"},
                "reason": {"english": "{age} {state}", "hindi": "{age} {state}", "tamil": "{age} {state}", "telugu": "{age} {state}", "kannada": "{age} {state}"},
                "documents": ["Aadhaar Card"],
                "conditions": [
                    {"type": "state_in", "values": ["delhi"]},
                    {"type": "age_at_most", "max": 25}
                ]
            }],
            "generic": []
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = RuleCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(
            loaded.rules[0].conditions,
            vec![
                Condition::StateIn {
                    values: vec![IndianState::Delhi]
                },
                Condition::AgeAtMost { max: 25 },
            ]
        );
        assert!(loaded.rules[0].matches(&profile(20, Occupation::Student, IndianState::Delhi)));
    }

    #[test]
    fn test_from_json_file_reports_missing_file() {
        let err = RuleCatalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read scheme catalog"));
    }
}
