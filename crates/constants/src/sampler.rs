use indexmap::IndexMap;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use tracing::debug;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Range, SampleError};

/// One draw: a value for every declared argument name, in declaration order.
pub type Sample = IndexMap<String, f64>;

/// Which ranges govern the keyword entries of a [`Sample`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum KeywordRanges {
    /// Keyword entries are drawn from the positional ranges, under the
    /// positional names, after the positional draws and replacing them.
    /// Declared keyword ranges are not consulted.
    #[default]
    Positional,
    /// Keyword entries are drawn from the declared keyword ranges.
    Declared,
}

/// Draws named values uniformly from declared ranges.
///
/// Each [`Sample`] combines the positional and keyword entries into one
/// mapping. With [`KeywordRanges::Declared`], a keyword sharing a positional
/// name replaces the positional value but keeps its place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct RangeSampler {
    arg_ranges: IndexMap<String, Range>,
    #[cfg_attr(feature = "serde-derive", serde(default))]
    kwarg_ranges: IndexMap<String, Range>,
    #[cfg_attr(feature = "serde-derive", serde(default))]
    keyword_ranges: KeywordRanges,
}

impl RangeSampler {
    /// Creates a sampler from `(name, (low, high))` declarations.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] for the first declaration whose
    /// bounds do not form a range.
    pub fn new<A, K>(
        arg_ranges: impl IntoIterator<Item = (A, (f64, f64))>,
        kwarg_ranges: impl IntoIterator<Item = (K, (f64, f64))>,
    ) -> Result<Self, SampleError>
    where
        A: Into<String>,
        K: Into<String>,
    {
        Ok(Self {
            arg_ranges: collect_ranges(arg_ranges)?,
            kwarg_ranges: collect_ranges(kwarg_ranges)?,
            keyword_ranges: KeywordRanges::default(),
        })
    }

    /// Selects which ranges govern keyword entries.
    #[must_use]
    pub fn with_keyword_ranges(mut self, keyword_ranges: KeywordRanges) -> Self {
        self.keyword_ranges = keyword_ranges;
        self
    }

    #[must_use]
    pub fn arg_ranges(&self) -> &IndexMap<String, Range> {
        &self.arg_ranges
    }

    #[must_use]
    pub fn kwarg_ranges(&self) -> &IndexMap<String, Range> {
        &self.kwarg_ranges
    }

    #[must_use]
    pub fn keyword_ranges(&self) -> KeywordRanges {
        self.keyword_ranges
    }

    /// Draws `n` samples.
    ///
    /// Uses `rng` when given, otherwise a [`StdRng`] seeded from `seed`.
    /// All samples of one call share the random source.
    pub fn sample(&self, rng: Option<&mut dyn RngCore>, n: usize, seed: u64) -> Vec<Sample> {
        match rng {
            Some(rng) => self.sample_with(rng, n),
            None => self.sample_with(&mut StdRng::seed_from_u64(seed), n),
        }
    }

    /// Draws `n` samples from the given random source.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Sample> {
        debug!(
            n,
            args = self.arg_ranges.len(),
            kwargs = self.kwarg_ranges.len(),
            keyword_ranges = ?self.keyword_ranges,
            "sampling ranges"
        );
        (0..n).map(|_| self.draw(rng)).collect()
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        let mut sample: Sample = self
            .arg_ranges
            .iter()
            .map(|(name, range)| (name.clone(), range.draw(rng)))
            .collect();

        let keyword_ranges = match self.keyword_ranges {
            KeywordRanges::Positional => &self.arg_ranges,
            KeywordRanges::Declared => &self.kwarg_ranges,
        };
        for (name, range) in keyword_ranges {
            sample.insert(name.clone(), range.draw(rng));
        }

        sample
    }
}

fn collect_ranges<N: Into<String>>(
    ranges: impl IntoIterator<Item = (N, (f64, f64))>,
) -> Result<IndexMap<String, Range>, SampleError> {
    ranges
        .into_iter()
        .map(|(name, bounds)| Ok((name.into(), Range::try_from(bounds)?)))
        .collect()
}
