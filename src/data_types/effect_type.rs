
use lazy_static::lazy_static;
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

/// The universe of effect kinds an upstream effect predictor can attach to a (variant, transcript) pair.
/// Display, parsing, and serde all use the classic annotation vocabulary (e.g. "NON_SYNONYMOUS_CODING")
/// so report writers see the familiar labels.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, strum_macros::Display, strum_macros::EnumIter, strum_macros::EnumString)]
pub enum EffectType {
    /// Chromosome scale event
    #[strum(to_string = "CHROMOSOME")]
    #[serde(rename = "CHROMOSOME")]
    Chromosome,
    /// One or more codons are changed in place
    #[strum(to_string = "CODON_CHANGE")]
    #[serde(rename = "CODON_CHANGE")]
    CodonChange,
    /// A codon is changed and one or more codons are deleted
    #[strum(to_string = "CODON_CHANGE_PLUS_CODON_DELETION")]
    #[serde(rename = "CODON_CHANGE_PLUS_CODON_DELETION")]
    CodonChangePlusCodonDeletion,
    /// A codon is changed and one or more codons are inserted
    #[strum(to_string = "CODON_CHANGE_PLUS_CODON_INSERTION")]
    #[serde(rename = "CODON_CHANGE_PLUS_CODON_INSERTION")]
    CodonChangePlusCodonInsertion,
    /// One or more codons are deleted in frame
    #[strum(to_string = "CODON_DELETION")]
    #[serde(rename = "CODON_DELETION")]
    CodonDeletion,
    /// One or more codons are inserted in frame
    #[strum(to_string = "CODON_INSERTION")]
    #[serde(rename = "CODON_INSERTION")]
    CodonInsertion,
    /// Downstream of a gene
    #[strum(to_string = "DOWNSTREAM")]
    #[serde(rename = "DOWNSTREAM")]
    Downstream,
    /// Hits an exon with no finer classification
    #[strum(to_string = "EXON")]
    #[serde(rename = "EXON")]
    Exon,
    /// Insertion or deletion that is not a multiple of three, shifting the reading frame
    #[strum(to_string = "FRAME_SHIFT")]
    #[serde(rename = "FRAME_SHIFT")]
    FrameShift,
    /// Hits a gene with no finer classification
    #[strum(to_string = "GENE")]
    #[serde(rename = "GENE")]
    Gene,
    #[strum(to_string = "INTERGENIC")]
    #[serde(rename = "INTERGENIC")]
    Intergenic,
    #[strum(to_string = "INTRAGENIC")]
    #[serde(rename = "INTRAGENIC")]
    Intragenic,
    #[strum(to_string = "INTRON")]
    #[serde(rename = "INTRON")]
    Intron,
    /// Codon substitution that changes the amino acid
    #[strum(to_string = "NON_SYNONYMOUS_CODING")]
    #[serde(rename = "NON_SYNONYMOUS_CODING")]
    NonSynonymousCoding,
    /// Substitution in the start codon that still codes for a start
    #[strum(to_string = "NON_SYNONYMOUS_START")]
    #[serde(rename = "NON_SYNONYMOUS_START")]
    NonSynonymousStart,
    /// Substitution in the stop codon that still codes for a stop
    #[strum(to_string = "NON_SYNONYMOUS_STOP")]
    #[serde(rename = "NON_SYNONYMOUS_STOP")]
    NonSynonymousStop,
    /// Two bases before an exon start
    #[strum(to_string = "SPLICE_SITE_ACCEPTOR")]
    #[serde(rename = "SPLICE_SITE_ACCEPTOR")]
    SpliceSiteAcceptor,
    /// Two bases after an exon end
    #[strum(to_string = "SPLICE_SITE_DONOR")]
    #[serde(rename = "SPLICE_SITE_DONOR")]
    SpliceSiteDonor,
    #[strum(to_string = "SPLICE_SITE_REGION")]
    #[serde(rename = "SPLICE_SITE_REGION")]
    SpliceSiteRegion,
    /// A new start codon is created in the 5' UTR
    #[strum(to_string = "START_GAINED")]
    #[serde(rename = "START_GAINED")]
    StartGained,
    /// The start codon is destroyed
    #[strum(to_string = "START_LOST")]
    #[serde(rename = "START_LOST")]
    StartLost,
    /// A premature stop codon is created
    #[strum(to_string = "STOP_GAINED")]
    #[serde(rename = "STOP_GAINED")]
    StopGained,
    /// The stop codon is destroyed
    #[strum(to_string = "STOP_LOST")]
    #[serde(rename = "STOP_LOST")]
    StopLost,
    /// Codon substitution that keeps the amino acid
    #[strum(to_string = "SYNONYMOUS_CODING")]
    #[serde(rename = "SYNONYMOUS_CODING")]
    SynonymousCoding,
    /// Substitution in the start codon that keeps the start
    #[strum(to_string = "SYNONYMOUS_START")]
    #[serde(rename = "SYNONYMOUS_START")]
    SynonymousStart,
    /// Substitution in the stop codon that keeps the stop
    #[strum(to_string = "SYNONYMOUS_STOP")]
    #[serde(rename = "SYNONYMOUS_STOP")]
    SynonymousStop,
    /// Hits a transcript with no finer classification
    #[strum(to_string = "TRANSCRIPT")]
    #[serde(rename = "TRANSCRIPT")]
    Transcript,
    /// Upstream of a gene
    #[strum(to_string = "UPSTREAM")]
    #[serde(rename = "UPSTREAM")]
    Upstream,
    #[strum(to_string = "UTR_3_PRIME")]
    #[serde(rename = "UTR_3_PRIME")]
    Utr3Prime,
    #[strum(to_string = "UTR_5_PRIME")]
    #[serde(rename = "UTR_5_PRIME")]
    Utr5Prime
}

/// The effect kinds whose change is scoped to a codon of a coding transcript.
/// Only these can participate in a same-codon group.
pub const CODON_AFFECTING_EFFECTS: [EffectType; 15] = [
    EffectType::CodonChange,
    EffectType::CodonChangePlusCodonDeletion,
    EffectType::CodonChangePlusCodonInsertion,
    EffectType::CodonDeletion,
    EffectType::CodonInsertion,
    EffectType::FrameShift,
    EffectType::NonSynonymousCoding,
    EffectType::NonSynonymousStart,
    EffectType::NonSynonymousStop,
    EffectType::StartLost,
    EffectType::StopGained,
    EffectType::StopLost,
    EffectType::SynonymousCoding,
    EffectType::SynonymousStart,
    EffectType::SynonymousStop
];

lazy_static! {
    /// Read-only lookup set backing `is_codon_affecting`, built once from the table above.
    static ref CODON_AFFECTING_SET: HashSet<EffectType> = CODON_AFFECTING_EFFECTS.iter().copied().collect();
}

impl EffectType {
    /// Returns true if this effect kind alters one or more codons of a coding transcript,
    /// meaning it can combine with another call on the same codon into a multi-nucleotide effect.
    pub fn is_codon_affecting(&self) -> bool {
        CODON_AFFECTING_SET.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_codon_affecting_partition() {
        // every entry of the table answers true, and nothing else does
        for effect_type in CODON_AFFECTING_EFFECTS.iter() {
            assert!(effect_type.is_codon_affecting());
        }
        let supported_count = EffectType::iter()
            .filter(|et| et.is_codon_affecting())
            .count();
        assert_eq!(supported_count, CODON_AFFECTING_EFFECTS.len());
    }

    #[test]
    fn test_non_codon_effects() {
        assert!(!EffectType::Intron.is_codon_affecting());
        assert!(!EffectType::Upstream.is_codon_affecting());
        assert!(!EffectType::Utr5Prime.is_codon_affecting());
        assert!(!EffectType::SpliceSiteAcceptor.is_codon_affecting());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EffectType::NonSynonymousCoding.to_string(), "NON_SYNONYMOUS_CODING");
        assert_eq!(EffectType::CodonChangePlusCodonInsertion.to_string(), "CODON_CHANGE_PLUS_CODON_INSERTION");
        assert_eq!(EffectType::Utr3Prime.to_string(), "UTR_3_PRIME");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("STOP_GAINED".parse::<EffectType>().unwrap(), EffectType::StopGained);
        assert_eq!("FRAME_SHIFT".parse::<EffectType>().unwrap(), EffectType::FrameShift);
        assert!("NOT_AN_EFFECT".parse::<EffectType>().is_err());
    }

    #[test]
    fn test_serialized_names() {
        // serde output has to match the Display labels, report writers rely on it
        let serialized = serde_json::to_string(&EffectType::SynonymousCoding).unwrap();
        assert_eq!(serialized, "\"SYNONYMOUS_CODING\"");
        let serialized = serde_json::to_string(&EffectType::Utr5Prime).unwrap();
        assert_eq!(serialized, "\"UTR_5_PRIME\"");
    }
}
