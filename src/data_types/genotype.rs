
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// This matches VCF-style GT strings: allele fields separated by '|' or '/', e.g. "0|1" or "1/2/2".
    static ref GT_REGEX: Regex = Regex::new(r"^[0-9.]+(?:[/|][0-9.]+)*$").unwrap();
}

/// Errors that can be produced while building or parsing a genotype call
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GenotypeError {
    #[error("genotype call must have at least one allele")]
    EmptyCall,
    #[error("genotype contains a no-call allele: {genotype:?}")]
    MissingAllele { genotype: String },
    #[error("unrecognized genotype string: {genotype:?}")]
    Unparsed { genotype: String }
}

/// One sample's genotype call on one variant record
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GenotypeCall {
    /// true if the upstream caller explicitly phased this call
    phased: bool,
    /// one allele index per chromosome copy; 0 = reference, >0 = an alternate
    alleles: Vec<usize>
}

impl GenotypeCall {
    /// Basic constructor
    /// # Arguments
    /// * `phased` - true if the upstream caller marked this call as phased
    /// * `alleles` - one allele index per chromosome copy, in copy order
    /// # Errors
    /// * if `alleles` is empty
    pub fn new(phased: bool, alleles: Vec<usize>) -> Result<GenotypeCall, GenotypeError> {
        if alleles.is_empty() {
            return Err(GenotypeError::EmptyCall);
        }
        Ok(GenotypeCall {
            phased,
            alleles
        })
    }

    pub fn is_phased(&self) -> bool {
        self.phased
    }

    pub fn alleles(&self) -> &[usize] {
        &self.alleles
    }

    /// Returns true if every chromosome copy carries the same allele
    pub fn is_homozygous(&self) -> bool {
        self.alleles.iter().all(|&a| a == self.alleles[0])
    }

    /// Returns true if every chromosome copy carries the same non-reference allele.
    /// A heterozygous non-reference call like "1/2" does not qualify.
    pub fn is_homozygous_alt(&self) -> bool {
        self.is_homozygous() && self.alleles[0] > 0
    }
}

impl FromStr for GenotypeCall {
    type Err = GenotypeError;

    /// Parses a VCF-style GT string such as "0|1", "1/1", or "0/1/2".
    /// The call is phased iff the string uses the '|' separator.
    /// No-call alleles (".") are rejected; callers are expected to drop no-call samples.
    fn from_str(s: &str) -> Result<GenotypeCall, GenotypeError> {
        if !GT_REGEX.is_match(s) {
            return Err(GenotypeError::Unparsed { genotype: s.to_string() });
        }

        let mut alleles: Vec<usize> = vec![];
        for field in s.split(['/', '|']) {
            if field == "." {
                return Err(GenotypeError::MissingAllele { genotype: s.to_string() });
            }
            let allele: usize = field.parse()
                .map_err(|_| GenotypeError::Unparsed { genotype: s.to_string() })?;
            alleles.push(allele);
        }

        GenotypeCall::new(s.contains('|'), alleles)
    }
}

impl fmt::Display for GenotypeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.phased { "|" } else { "/" };
        let gt: String = self.alleles.iter().map(|a| a.to_string()).join(separator);
        write!(f, "{gt}")
    }
}
