
use crate::data_types::genotype::GenotypeCall;
use crate::data_types::variant_record::VariantRecord;

/// Returns true if this call carries any usable phase information:
/// either the upstream caller explicitly phased it, or it is homozygous for an alternate allele,
/// in which case both chromosome copies are unambiguously alternate (implicit phasing).
pub fn has_phase_signal(gt: &GenotypeCall) -> bool {
    gt.is_phased() || gt.is_homozygous_alt()
}

/// Returns true if these two calls are linked on the same chromosome copy.
/// Both calls must carry a phase signal and both must be non-reference at the same
/// copy index (maternal / paternal). Copies beyond the shorter ploidy are ignored.
pub fn are_phased(gt1: &GenotypeCall, gt2: &GenotypeCall) -> bool {
    if !has_phase_signal(gt1) || !has_phase_signal(gt2) {
        return false;
    }

    // check that both are ALT at the same chromosome copy
    gt1.alleles().iter()
        .zip(gt2.alleles().iter())
        .any(|(&a1, &a2)| a1 > 0 && a2 > 0)
}

/// Returns true if any sample on this record has a phase signal, explicit or implicit
pub fn has_any_phase(record: &VariantRecord) -> bool {
    record.genotypes().iter().any(has_phase_signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gt(s: &str) -> GenotypeCall {
        s.parse().unwrap()
    }

    #[test]
    fn test_phase_signal() {
        // explicitly phased
        assert!(has_phase_signal(&gt("1|0")));
        // implicit via homozygous alternate
        assert!(has_phase_signal(&gt("1/1")));
        // heterozygous unphased carries no signal
        assert!(!has_phase_signal(&gt("0/1")));
        // the explicit flag counts even when the call is all-reference
        assert!(has_phase_signal(&gt("0|0")));
        assert!(!has_phase_signal(&gt("0/0")));
    }

    #[test]
    fn test_are_phased_shared_copy() {
        // both ALT on the first copy
        assert!(are_phased(&gt("1|0"), &gt("1|0")));
        // both ALT on the second copy
        assert!(are_phased(&gt("0|1"), &gt("0|2")));
        // homozygous alternate links with either copy
        assert!(are_phased(&gt("1/1"), &gt("0|1")));
    }

    #[test]
    fn test_are_phased_disjoint_copies() {
        // ALT alleles on opposite copies never link
        assert!(!are_phased(&gt("1|0"), &gt("0|1")));
    }

    #[test]
    fn test_are_phased_requires_signal_on_both() {
        assert!(!are_phased(&gt("1|0"), &gt("0/1")));
        assert!(!are_phased(&gt("0/1"), &gt("1|0")));
    }

    #[test]
    fn test_are_phased_ploidy_mismatch() {
        // only the shared copy indices are compared
        assert!(are_phased(&gt("1"), &gt("1|0")));
        assert!(!are_phased(&gt("1"), &gt("0|1")));
    }

    #[test]
    fn test_has_any_phase() {
        let phased = gt("1|0");
        let unphased = gt("0/1");
        let hom_alt = gt("1/1");

        let record = |gts: Vec<GenotypeCall>| {
            VariantRecord::new("chr1".to_string(), 100, "A".to_string(), "C".to_string(), gts).unwrap()
        };

        // a single informative sample anywhere is enough
        assert!(has_any_phase(&record(vec![unphased.clone(), phased])));
        assert!(has_any_phase(&record(vec![unphased.clone(), hom_alt])));
        assert!(!has_any_phase(&record(vec![unphased.clone(), unphased])));
        assert!(!has_any_phase(&record(vec![])));
    }
}
