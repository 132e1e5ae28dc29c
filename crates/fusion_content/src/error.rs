//! Error types for fusion_content

use std::path::PathBuf;

use thiserror::Error;

/// A data-integrity problem found in otherwise well-formed content
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentIssue {
    #[error("token allocations sum to {total}%, expected 100%")]
    AllocationSum { total: u64 },

    #[error("allocation {name:?} is {percentage}%, more than the whole supply")]
    AllocationOutOfRange { name: String, percentage: u32 },

    #[error("no token allocations defined")]
    NoAllocations,

    #[error("token address {0:?} is not a 0x-prefixed 20-byte hex address")]
    MalformedAddress(String),

    #[error("token chain id is zero")]
    ZeroChainId,

    #[error("DEX link {name:?} has no {{address}} placeholder")]
    DexTemplateMissingAddress { name: String },

    #[error("link {label:?} points at {href:?}, which is not a page section")]
    UnresolvedNavHref { label: String, href: String },

    #[error("roadmap quarter {0:?} appears more than once")]
    DuplicateQuarter(String),

    #[error("staking tier {tier:?} has non-positive multiplier {multiplier}")]
    InvalidMultiplier { tier: String, multiplier: f32 },
}

/// Errors that can occur while loading content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Content failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<ContentIssue>),
}

impl ContentError {
    /// Validation issues, if this is a validation failure
    pub fn issues(&self) -> &[ContentIssue] {
        match self {
            ContentError::Invalid(issues) => issues,
            _ => &[],
        }
    }
}

/// Result type for fusion_content operations
pub type Result<T> = std::result::Result<T, ContentError>;
