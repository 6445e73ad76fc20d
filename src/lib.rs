
/// Contains any specialized data types that are consumed from the annotation pipeline
pub mod data_types;
/// Contains the registry detecting variant calls that hit the same codon of the same transcript
pub mod haplotyper;
/// Contains the phasing decision logic over genotype calls
pub mod phasing;
