//! Remote advisor. Asks the text-generation backend to explain which schemes a
//! citizen may qualify for, in the citizen's chosen language.
//!
//! Flow: credential shape check → prompt → model cascade (llm_client) →
//! finish-reason handling → `Advice`.
//!
//! The advisor never falls back to the rule engine itself; callers decide.

pub mod handlers;
pub mod prompts;
pub mod status;

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{AdvisorCredential, AdvisorError, FinishReason, GeminiClient};
use crate::models::profile::CitizenProfile;

use self::prompts::{blocked_notice, truncation_notice, ADVISOR_PROMPT_TEMPLATE};

/// Model-written advice. `text` is what the presentation layer displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub model: String,
    pub text: String,
    pub finish_reason: FinishReason,
    pub truncated: bool,
}

#[derive(Clone)]
pub struct RemoteAdvisorClient {
    llm: GeminiClient,
}

impl RemoteAdvisorClient {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &GeminiClient {
        &self.llm
    }

    /// Shape-checks `raw_key` before any network I/O, then calls `generate`.
    pub async fn generate_for_key(
        &self,
        raw_key: &str,
        profile: &CitizenProfile,
    ) -> Result<Advice, AdvisorError> {
        let credential = AdvisorCredential::parse(raw_key)?;
        self.generate(&credential, profile).await
    }

    pub async fn generate(
        &self,
        credential: &AdvisorCredential,
        profile: &CitizenProfile,
    ) -> Result<Advice, AdvisorError> {
        let language = profile.language();
        let prompt = build_advisor_prompt(profile);

        let generation = match self.llm.generate(credential, &prompt).await {
            Ok(generation) => generation,
            Err(AdvisorError::ResponseBlocked(detail)) => {
                warn!("Advisor response blocked: {detail}");
                return Err(AdvisorError::ResponseBlocked(
                    blocked_notice().get(language).to_string(),
                ));
            }
            Err(e) => return Err(e),
        };

        let truncated = generation.finish_reason == FinishReason::MaxTokens;
        let text = if truncated {
            format!(
                "{}\n\n---\n{}",
                generation.text.trim_end(),
                truncation_notice().get(language)
            )
        } else {
            generation.text
        };

        info!(
            model = %generation.model,
            truncated,
            "Advisor generated {} chars in {:?}",
            text.chars().count(),
            language
        );

        Ok(Advice {
            model: generation.model,
            text,
            finish_reason: generation.finish_reason,
            truncated,
        })
    }
}

/// Fills the advisor template with every profile field and the target language.
pub fn build_advisor_prompt(profile: &CitizenProfile) -> String {
    ADVISOR_PROMPT_TEMPLATE
        .replace("{age}", &profile.age().to_string())
        .replace("{gender}", profile.gender().label())
        .replace("{state}", profile.state().label())
        .replace("{occupation}", profile.occupation().label())
        .replace("{income}", profile.income().label())
        .replace("{category}", profile.category().label())
        .replace("{language}", profile.language().label())
}
