
use itertools::Itertools;
use log::{debug, trace};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::cmp::Ordering;
use std::fmt;

use crate::data_types::haplotype_tuple::HaplotypeTuple;
use crate::data_types::transcript_effect::TranscriptEffect;
use crate::data_types::variant_record::VariantRecord;
use crate::phasing;

/// Detects variant records that affect the same codon of the same transcript while being
/// phased onto the same chromosome copy, a prerequisite for reporting a combined
/// multi-nucleotide effect instead of two independent single-nucleotide effects.
/// Registered (record, effect) tuples live in two coupled indices that are always
/// mutated together through a single insertion path.
#[derive(Debug, Default)]
pub struct SameCodonHaplotyper {
    /// all registered tuples grouped by their "{transcript}:{codon}" key
    tuples_by_tr_codon: HashMap<String, HashSet<HaplotypeTuple>>,
    /// all registered tuples grouped by their underlying record
    tuples_by_record: HashMap<VariantRecord, HashSet<HaplotypeTuple>>
}

impl SameCodonHaplotyper {
    /// Creates an empty registry
    pub fn new() -> SameCodonHaplotyper {
        Default::default()
    }

    /// Registers one (record, effect) pair.
    /// Pairs that can never participate in a same-codon group are silently skipped:
    /// effects that do not resolve to a transcript codon, effect kinds that are not
    /// codon-affecting, and records without a phase signal on any sample.
    pub fn add(&mut self, record: &VariantRecord, effect: &TranscriptEffect) {
        // the effect has to land on a codon of some transcript
        if effect.tr_codon_key().is_none() {
            return;
        }

        // only codon-scoped effect kinds can combine into a multi-nucleotide effect
        if !effect.effect_type().is_codon_affecting() {
            return;
        }

        // without a phase signal somewhere, no linkage claim could ever be substantiated
        if !phasing::has_any_phase(record) {
            return;
        }

        // the tuple is always Some here, the key was checked above
        if let Some(tuple) = HaplotypeTuple::new(record.clone(), effect.clone()) {
            self.insert(tuple);
        }
    }

    /// The single insertion path; both indices always grow together
    fn insert(&mut self, tuple: HaplotypeTuple) {
        trace!("Registering tuple: {tuple}");
        self.tuples_by_tr_codon
            .entry(tuple.tr_codon_key().to_string())
            .or_default()
            .insert(tuple.clone());
        self.tuples_by_record
            .entry(tuple.record().clone())
            .or_default()
            .insert(tuple);
    }

    /// Drops every tuple registered for `record`; unknown records are a no-op.
    /// Codon buckets that become empty are deleted, so shared buckets never dangle.
    pub fn remove(&mut self, record: &VariantRecord) {
        let tuple_set = match self.tuples_by_record.remove(record) {
            Some(ts) => ts,
            None => return
        };

        debug!("Removing {} tuple(s) for record {}", tuple_set.len(), record.variant_name());
        for tuple in tuple_set.iter() {
            if let Some(codon_bucket) = self.tuples_by_tr_codon.get_mut(tuple.tr_codon_key()) {
                codon_bucket.remove(tuple);
                if codon_bucket.is_empty() {
                    self.tuples_by_tr_codon.remove(tuple.tr_codon_key());
                }
            }
        }
    }

    /// Returns true if some transcript codon hit by `record` is also hit by another record
    /// phased onto the same chromosome copy for at least one sample.
    /// Unknown records return false.
    pub fn has_same_codon(&self, record: &VariantRecord) -> bool {
        let tuple_set = match self.tuples_by_record.get(record) {
            Some(ts) => ts,
            None => return false
        };

        // check every codon this record lands on, there can be one per overlapping transcript
        for tuple in tuple_set.iter() {
            if let Some(codon_bucket) = self.tuples_by_tr_codon.get(tuple.tr_codon_key()) {
                if Self::bucket_has_phased_pair(codon_bucket) {
                    return true;
                }
            }
        }

        false
    }

    /// All-pairs scan of one codon bucket. Each unordered pair is visited exactly once:
    /// a pair is only tested when the record total order puts the first strictly after the
    /// second. The direction only avoids duplicate work, it does not change the result.
    /// Quadratic in bucket size, but buckets hold at most a handful of overlapping variants.
    fn bucket_has_phased_pair(bucket: &HashSet<HaplotypeTuple>) -> bool {
        if bucket.len() <= 1 {
            return false;
        }

        for tuple1 in bucket.iter() {
            for tuple2 in bucket.iter() {
                if tuple1.record().cmp(tuple2.record()) != Ordering::Greater {
                    continue;
                }
                if Self::tuples_on_same_strand(tuple1, tuple2) {
                    return true;
                }
            }
        }

        false
    }

    /// Tests whether the two tuples' records are phased together for some sample.
    /// Samples are matched by index; trailing samples of the longer record are ignored.
    fn tuples_on_same_strand(tuple1: &HaplotypeTuple, tuple2: &HaplotypeTuple) -> bool {
        trace!("Comparing {tuple1} against {tuple2}");
        tuple1.record().genotypes().iter()
            .zip(tuple2.record().genotypes().iter())
            .any(|(gt1, gt2)| phasing::are_phased(gt1, gt2))
    }

    /// Clears both indices, leaving the registry exactly as freshly constructed
    pub fn reset(&mut self) {
        self.tuples_by_tr_codon = Default::default();
        self.tuples_by_record = Default::default();
    }
}

/// Deterministic dump of both indices for debugging; keys, records, and tuples are
/// emitted in sorted order so two equal registries always render identically.
impl fmt::Display for SameCodonHaplotyper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SameCodonHaplotyper:")?;

        writeln!(f, "\ttuples_by_tr_codon.len: {}", self.tuples_by_tr_codon.len())?;
        for key in self.tuples_by_tr_codon.keys().sorted() {
            write!(f, "\t\t'{key}': [")?;
            for tuple in self.tuples_by_tr_codon[key].iter().sorted() {
                write!(f, " '{tuple}'")?;
            }
            writeln!(f, " ]")?;
        }

        writeln!(f, "\ttuples_by_record.len: {}", self.tuples_by_record.len())?;
        for record in self.tuples_by_record.keys().sorted() {
            write!(f, "\t\t{}: [", record.variant_name())?;
            for tuple in self.tuples_by_record[record].iter().sorted() {
                write!(f, " '{tuple}'")?;
            }
            writeln!(f, " ]")?;
        }

        Ok(())
    }
}
