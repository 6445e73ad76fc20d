
/// Contains the enumerated effect kinds and the codon-affecting subset
pub mod effect_type;
/// Contains per-sample genotype calls and their VCF-style parsing
pub mod genotype;
/// Contains the record/effect association tracked by the haplotyper
pub mod haplotype_tuple;
/// Contains the per-transcript results of effect prediction
pub mod transcript_effect;
/// Contains the variant record consumed from the upstream variant stream
pub mod variant_record;
