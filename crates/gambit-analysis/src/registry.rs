//! Registries: the materialized, read-only list of analyses and groups of one vocabulary.

use std::collections::HashSet;

use tracing::debug;

use crate::error::AnalysisError;
use crate::group::AnalysisGroup;
use crate::tag::{GroupTag, Legality, Tag};

/// One registered analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis<T: Tag> {
    tag: T,
    id: u8,
    mask: u64,
    name: &'static str,
    description: &'static str,
    legality: Legality,
    quick: bool,
}

impl<T: Tag> Analysis<T> {
    fn of(tag: T) -> Self {
        Analysis {
            tag,
            id: tag.id(),
            mask: tag.mask(),
            name: tag.name(),
            description: tag.description(),
            legality: tag.legality(),
            quick: tag.is_quick(),
        }
    }

    pub fn tag(&self) -> T {
        self.tag
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// `1 << id`.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn legality(&self) -> Legality {
        self.legality
    }

    pub fn is_legal(&self) -> bool {
        self.legality.is_legal()
    }

    pub fn is_pseudo_legal(&self) -> bool {
        self.legality.is_pseudo_legal()
    }

    pub fn is_quick(&self) -> bool {
        self.quick
    }
}

/// All analyses and groups of one vocabulary, built once and never mutated.
#[derive(Debug, Clone)]
pub struct Registry<T: Tag> {
    analyses: Vec<Analysis<T>>,
    groups: Vec<AnalysisGroup<T>>,
    illegal_mask: u64,
    not_pseudo_legal_mask: u64,
}

impl<T: Tag> Registry<T> {
    /// Materialize `T::ALL` and `T::Group::ALL`, checking ids, names and group contents.
    pub fn build() -> Result<Registry<T>, AnalysisError> {
        if T::ALL.len() > 64 {
            return Err(AnalysisError::TooManyAnalyses { count: T::ALL.len() });
        }

        let mut names = HashSet::new();
        let mut analyses = Vec::with_capacity(T::ALL.len());
        for (expected, &tag) in T::ALL.iter().enumerate() {
            if tag.id() as usize != expected {
                return Err(AnalysisError::NonContiguousId { expected, found: tag.id() });
            }
            if !names.insert(tag.name()) {
                return Err(AnalysisError::DuplicateName { name: tag.name().to_string() });
            }
            analyses.push(Analysis::of(tag));
        }

        let mut group_names = HashSet::new();
        let mut groups = Vec::with_capacity(T::Group::ALL.len());
        for (expected, &group) in T::Group::ALL.iter().enumerate() {
            debug_assert_eq!(group.index(), expected);
            if !group_names.insert(group.name()) {
                return Err(AnalysisError::DuplicateName { name: group.name().to_string() });
            }
            groups.push(AnalysisGroup::new(group.name(), group.description(), group.members())?);
        }

        let illegal_mask = analyses
            .iter()
            .filter(|a| !a.is_legal())
            .fold(0u64, |acc, a| acc | a.mask);
        let not_pseudo_legal_mask = analyses
            .iter()
            .filter(|a| !a.is_pseudo_legal())
            .fold(0u64, |acc, a| acc | a.mask);

        debug!(
            domain = T::DOMAIN,
            analyses = analyses.len(),
            groups = groups.len(),
            "analysis registry built"
        );
        Ok(Registry { analyses, groups, illegal_mask, not_pseudo_legal_mask })
    }

    /// Every analysis, in id order.
    pub fn analyses(&self) -> &[Analysis<T>] {
        &self.analyses
    }

    /// The registered record of `tag`.
    pub fn analysis(&self, tag: T) -> &Analysis<T> {
        &self.analyses[tag.id() as usize]
    }

    /// Look up an analysis by name.
    pub fn find(&self, name: &str) -> Option<&Analysis<T>> {
        self.analyses.iter().find(|a| a.name == name)
    }

    /// Every group, in registration order.
    pub fn groups(&self) -> &[AnalysisGroup<T>] {
        &self.groups
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&AnalysisGroup<T>> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Union of every analysis that is not legal.
    pub fn illegal_mask(&self) -> u64 {
        self.illegal_mask
    }

    /// Union of every analysis that is not even pseudo-legal.
    pub fn not_pseudo_legal_mask(&self) -> u64 {
        self.not_pseudo_legal_mask
    }
}
