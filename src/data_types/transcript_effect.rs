
use serde::Serialize;

use crate::data_types::effect_type::EffectType;

/// The result of effect prediction for one (variant, transcript) pair
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TranscriptEffect {
    /// the transcript the effect was predicted against, if any
    transcript_id: Option<String>,
    /// codon index within the coding sequence; negative means "not applicable"
    codon_number: i64,
    /// the predicted kind of effect
    effect_type: EffectType,
    /// amino acid change such as "R12C", when the predictor provides one
    amino_acid_change: Option<String>
}

impl TranscriptEffect {
    /// Basic constructor. A negative `codon_number` marks an effect that does not land on a codon.
    pub fn new(transcript_id: Option<String>, codon_number: i64, effect_type: EffectType, amino_acid_change: Option<String>) -> TranscriptEffect {
        TranscriptEffect {
            transcript_id,
            codon_number,
            effect_type,
            amino_acid_change
        }
    }

    pub fn transcript_id(&self) -> Option<&str> {
        self.transcript_id.as_deref()
    }

    pub fn codon_number(&self) -> i64 {
        self.codon_number
    }

    pub fn effect_type(&self) -> EffectType {
        self.effect_type
    }

    pub fn amino_acid_change(&self) -> Option<&str> {
        self.amino_acid_change.as_deref()
    }

    /// Composite "{transcript}:{codon}" key grouping every effect that lands on the same codon
    /// of the same transcript. None if the effect has no transcript or no codon.
    pub fn tr_codon_key(&self) -> Option<String> {
        match self.transcript_id.as_deref() {
            Some(transcript_id) if self.codon_number >= 0 => Some(format!("{}:{}", transcript_id, self.codon_number)),
            _ => None
        }
    }
}
