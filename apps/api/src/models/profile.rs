//! Citizen profile: the six demographic fields plus the requested output language.
//!
//! A `CitizenProfile` can only be obtained through `CitizenProfile::new` (or serde,
//! which routes through it), so every profile in the system is fully populated and
//! in range.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_AGE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("age must be between 0 and 100, got {0}")]
    AgeOutOfRange(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// States and territories offered by the form. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndianState {
    TamilNadu,
    Karnataka,
    Maharashtra,
    Delhi,
    UttarPradesh,
    Other,
}

impl IndianState {
    pub const ALL: [IndianState; 6] = [
        IndianState::TamilNadu,
        IndianState::Karnataka,
        IndianState::Maharashtra,
        IndianState::Delhi,
        IndianState::UttarPradesh,
        IndianState::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::Karnataka => "Karnataka",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::Delhi => "Delhi",
            IndianState::UttarPradesh => "Uttar Pradesh",
            IndianState::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Student,
    Farmer,
    SmallBusinessOwner,
    Unemployed,
    SalariedEmployee,
}

impl Occupation {
    pub const ALL: [Occupation; 5] = [
        Occupation::Student,
        Occupation::Farmer,
        Occupation::SmallBusinessOwner,
        Occupation::Unemployed,
        Occupation::SalariedEmployee,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Occupation::Student => "Student",
            Occupation::Farmer => "Farmer",
            Occupation::SmallBusinessOwner => "Small Business Owner",
            Occupation::Unemployed => "Unemployed",
            Occupation::SalariedEmployee => "Salaried Employee",
        }
    }
}

/// Annual family income. Variants are declared lowest first, so `Ord` follows
/// the bracket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "below_1_lakh")]
    Below1Lakh,
    #[serde(rename = "1_to_3_lakh")]
    From1To3Lakh,
    #[serde(rename = "3_to_8_lakh")]
    From3To8Lakh,
    #[serde(rename = "above_8_lakh")]
    Above8Lakh,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 4] = [
        IncomeBracket::Below1Lakh,
        IncomeBracket::From1To3Lakh,
        IncomeBracket::From3To8Lakh,
        IncomeBracket::Above8Lakh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeBracket::Below1Lakh => "< ₹1 Lakh",
            IncomeBracket::From1To3Lakh => "₹1 Lakh - ₹3 Lakhs",
            IncomeBracket::From3To8Lakh => "₹3 Lakhs - ₹8 Lakhs",
            IncomeBracket::Above8Lakh => "> ₹8 Lakhs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Obc,
    ScSt,
    Minority,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Obc,
        Category::ScSt,
        Category::Minority,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::ScSt => "SC/ST",
            Category::Minority => "Minority",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi (हिंदी)",
            Language::Tamil => "Tamil (தமிழ்)",
            Language::Telugu => "Telugu (తెలుగు)",
            Language::Kannada => "Kannada (ಕನ್ನಡ)",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })+
    };
}

display_via_label!(Gender, IndianState, Occupation, IncomeBracket, Category, Language);

/// Wire shape of a profile before validation.
#[derive(Debug, Deserialize)]
struct RawProfile {
    age: u16,
    gender: Gender,
    state: IndianState,
    occupation: Occupation,
    income: IncomeBracket,
    category: Category,
    language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct CitizenProfile {
    age: u8,
    gender: Gender,
    state: IndianState,
    occupation: Occupation,
    income: IncomeBracket,
    category: Category,
    language: Language,
}

impl CitizenProfile {
    pub fn new(
        age: u16,
        gender: Gender,
        state: IndianState,
        occupation: Occupation,
        income: IncomeBracket,
        category: Category,
        language: Language,
    ) -> Result<Self, ProfileError> {
        let age = u8::try_from(age)
            .ok()
            .filter(|a| *a <= MAX_AGE)
            .ok_or(ProfileError::AgeOutOfRange(age))?;

        Ok(Self {
            age,
            gender,
            state,
            occupation,
            income,
            category,
            language,
        })
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn state(&self) -> IndianState {
        self.state
    }

    pub fn occupation(&self) -> Occupation {
        self.occupation
    }

    pub fn income(&self) -> IncomeBracket {
        self.income
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl TryFrom<RawProfile> for CitizenProfile {
    type Error = ProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        CitizenProfile::new(
            raw.age,
            raw.gender,
            raw.state,
            raw.occupation,
            raw.income,
            raw.category,
            raw.language,
        )
    }
}
