
use serde::Serialize;
use std::fmt;

use crate::data_types::transcript_effect::TranscriptEffect;
use crate::data_types::variant_record::VariantRecord;

/// An immutable association of one variant record with one predicted transcript effect,
/// keyed by the transcript codon the effect lands on
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct HaplotypeTuple {
    /// the underlying variant record
    record: VariantRecord,
    /// the predicted effect tying the record to a transcript codon
    effect: TranscriptEffect,
    /// cached "{transcript}:{codon}" grouping key
    tr_codon_key: String
}

impl HaplotypeTuple {
    /// Builds the tuple, deriving the grouping key from the effect.
    /// Returns None when the effect does not resolve to a transcript codon.
    pub fn new(record: VariantRecord, effect: TranscriptEffect) -> Option<HaplotypeTuple> {
        let tr_codon_key = effect.tr_codon_key()?;
        Some(HaplotypeTuple {
            record,
            effect,
            tr_codon_key
        })
    }

    pub fn record(&self) -> &VariantRecord {
        &self.record
    }

    pub fn effect(&self) -> &TranscriptEffect {
        &self.effect
    }

    pub fn tr_codon_key(&self) -> &str {
        &self.tr_codon_key
    }
}

impl fmt::Display for HaplotypeTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.record.variant_name(), self.tr_codon_key, self.effect.effect_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data_types::effect_type::EffectType;

    #[test]
    fn test_tuple_key_and_display() {
        let record = VariantRecord::new(
            "chr1".to_string(), 100, "A".to_string(), "C".to_string(), vec![]
        ).unwrap();
        let effect = TranscriptEffect::new(
            Some("ENST0001".to_string()), 5, EffectType::StopGained, Some("Q5*".to_string())
        );
        let tuple = HaplotypeTuple::new(record, effect).unwrap();
        assert_eq!(tuple.tr_codon_key(), "ENST0001:5");
        assert_eq!(tuple.to_string(), "chr1:100A>C ENST0001:5 STOP_GAINED");
    }

    #[test]
    fn test_tuple_requires_codon() {
        let record = VariantRecord::new(
            "chr1".to_string(), 100, "A".to_string(), "C".to_string(), vec![]
        ).unwrap();
        let effect = TranscriptEffect::new(None, -1, EffectType::Intergenic, None);
        assert!(HaplotypeTuple::new(record, effect).is_none());
    }
}
