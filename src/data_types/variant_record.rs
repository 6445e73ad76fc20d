
use serde::Serialize;
use simple_error::bail;

use crate::data_types::genotype::GenotypeCall;

/// A single variant call consumed from the upstream variant stream.
/// The derived ordering (chromosome, then position, then alleles) is the total order
/// used to visit each record pair exactly once during cluster scans.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct VariantRecord {
    /// chromosome of the variant
    chrom: String,
    /// 0-based position of the variant
    position: usize,
    /// ref allele
    reference: String,
    /// alt allele
    alternate: String,
    /// one genotype call per sample, in the sample order of the stream
    genotypes: Vec<GenotypeCall>
}

impl VariantRecord {
    /// Creates a new VariantRecord and performs some checks along the way
    /// # Arguments
    /// * `chrom` - the chromosome the variant is positioned on
    /// * `position` - the 0-based coordinate of the variant
    /// * `reference` - the reference allele
    /// * `alternate` - the alternate allele
    /// * `genotypes` - the per-sample genotype calls, in sample order
    /// # Errors
    /// * if the reference or alternate allele is empty or contains non-ACGT symbols
    pub fn new(chrom: String, position: usize, reference: String, alternate: String, genotypes: Vec<GenotypeCall>)
        -> Result<VariantRecord, Box<dyn std::error::Error>> {
        if reference.is_empty() {
            bail!("reference allele cannot be empty");
        }
        if alternate.is_empty() {
            bail!("alternate allele cannot be empty");
        }

        // check reference and alternate for ACGT only
        let allowed_symbols = ['A', 'C', 'G', 'T'];
        if !reference.chars().all(|c| allowed_symbols.contains(&c)) {
            bail!("Reference sequence contains non-ACGT symbols: {reference}");
        }
        if !alternate.chars().all(|c| allowed_symbols.contains(&c)) {
            bail!("Alternate sequence contains non-ACGT symbols: {alternate}");
        }

        Ok(VariantRecord {
            chrom,
            position,
            reference,
            alternate,
            genotypes
        })
    }

    // getters
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    pub fn genotypes(&self) -> &[GenotypeCall] {
        &self.genotypes
    }

    pub fn variant_name(&self) -> String {
        format!("{}:{}{}>{}", self.chrom, self.position, self.reference, self.alternate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_record() {
        let gt: GenotypeCall = "0|1".parse().unwrap();
        let record = VariantRecord::new(
            "chr1".to_string(), 100, "A".to_string(), "C".to_string(), vec![gt.clone()]
        ).unwrap();
        assert_eq!(record.chrom(), "chr1");
        assert_eq!(record.position(), 100);
        assert_eq!(record.genotypes(), &[gt]);
        assert_eq!(record.variant_name(), "chr1:100A>C");
    }

    #[test]
    fn test_bad_alleles() {
        let bad_ref = VariantRecord::new(
            "chr1".to_string(), 100, "N".to_string(), "C".to_string(), vec![]
        );
        assert!(bad_ref.is_err());

        let empty_alt = VariantRecord::new(
            "chr1".to_string(), 100, "A".to_string(), "".to_string(), vec![]
        );
        assert!(empty_alt.is_err());
    }

    #[test]
    fn test_record_ordering() {
        // position is the dominant key within a chromosome, alleles break ties
        let early = VariantRecord::new("chr1".to_string(), 100, "A".to_string(), "C".to_string(), vec![]).unwrap();
        let late = VariantRecord::new("chr1".to_string(), 200, "A".to_string(), "C".to_string(), vec![]).unwrap();
        let other_alt = VariantRecord::new("chr1".to_string(), 100, "A".to_string(), "G".to_string(), vec![]).unwrap();
        let other_chrom = VariantRecord::new("chr2".to_string(), 50, "A".to_string(), "C".to_string(), vec![]).unwrap();

        assert!(early < late);
        assert!(early < other_alt);
        assert!(late < other_chrom);
        assert_eq!(early.cmp(&early), std::cmp::Ordering::Equal);
    }
}
