//! Instruction text for the analysis request.
//!
//! The instruction enforces the output contract: a bare JSON object with
//! a fixed field set, every natural-language field written in the target
//! language, clinical vocabulary replaced with plain lay terms. Building
//! it is pure; the same language always yields byte-identical text.

use triage_core::LanguageDescriptor;

/// Lay-term substitutions the model must apply so output is
/// understandable without medical training.
const PLAIN_LANGUAGE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("hemorrhage", "heavy bleeding"),
    ("laceration", "deep cut"),
    ("fracture", "broken bone"),
    ("contusion", "bruise"),
    ("dyspnea", "trouble breathing"),
    ("cardiac arrest", "heart has stopped"),
    ("myocardial infarction", "heart attack"),
    ("anaphylaxis", "severe allergic reaction"),
    ("hypoglycemia", "dangerously low blood sugar"),
    ("syncope", "fainting"),
];

/// Signals the model must weigh when inferring urgency.
const DANGER_SIGNALS: &[&str] = &[
    "pain",
    "bleeding",
    "trapped",
    "help",
    "emergency",
    "insulin",
    "allergic reaction",
    "chest pain",
    "trouble breathing",
    "unconscious",
];

/// Build the instruction text for one analysis request. Deterministic:
/// the same target language produces byte-identical output.
pub fn build_instruction(target: &LanguageDescriptor) -> String {
    let substitutions = PLAIN_LANGUAGE_SUBSTITUTIONS
        .iter()
        .map(|(clinical, plain)| format!("- say \"{plain}\" instead of \"{clinical}\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a crisis response translator helping emergency responders. Analyze this image and respond with ONLY a valid JSON object (no markdown fencing, no extra text before or after):

{{
  "detectedText": "exact text visible in the image, in its original language",
  "detectedLanguage": "name of the detected language",
  "translation": "translation of the content into {language}",
  "urgencyLevel": "low/medium/high/critical",
  "medicalKeywords": ["keyword1", "keyword2"],
  "predictedConditions": [
    {{"condition": "name of a possible condition", "probability": "low/medium/high", "reasoning": "why this is suspected"}}
  ],
  "context": "brief situation context",
  "suggestedResponse": "culturally appropriate response a responder could give",
  "additionalNotes": "important notes for first responders"
}}

Write every natural-language field in {language}, phrased the way a native speaker would phrase it for a layperson - never a word-by-word rendering.

Use plain, non-technical wording a person without medical training understands:
{substitutions}

Analyze for: handwritten signs, medical forms, emergency messages, injury descriptions. Assess urgencyLevel from danger signals such as: {signals}."#,
        language = target.display_name,
        substitutions = substitutions,
        signals = DANGER_SIGNALS.join(", "),
    )
}
