//! Content integrity checks
//!
//! Validation collects every issue instead of stopping at the first, so a
//! broken content file can be fixed in one pass.

use std::collections::HashSet;

use crate::error::ContentIssue;
use crate::model::SiteContent;

/// Check `content` and return every issue found
pub fn validate(content: &SiteContent) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let tokenomics = &content.tokenomics;
    if tokenomics.allocations.is_empty() {
        issues.push(ContentIssue::NoAllocations);
    } else {
        for allocation in &tokenomics.allocations {
            if allocation.percentage > 100 {
                issues.push(ContentIssue::AllocationOutOfRange {
                    name: allocation.name.clone(),
                    percentage: allocation.percentage,
                });
            }
        }
        let total = tokenomics.allocation_total();
        if total != 100 {
            issues.push(ContentIssue::AllocationSum { total });
        }
    }

    for tier in &tokenomics.staking_tiers {
        if tier.multiplier.is_nan() || tier.multiplier <= 0.0 {
            issues.push(ContentIssue::InvalidMultiplier {
                tier: tier.tier.clone(),
                multiplier: tier.multiplier,
            });
        }
    }

    if !content.token.has_valid_address() {
        issues.push(ContentIssue::MalformedAddress(content.token.address.clone()));
    }
    if content.token.chain_id == 0 {
        issues.push(ContentIssue::ZeroChainId);
    }

    for dex in &content.buy.dex_links {
        if !dex.url_template.contains("{address}") {
            issues.push(ContentIssue::DexTemplateMissingAddress {
                name: dex.name.clone(),
            });
        }
    }

    for item in &content.nav {
        if item.section().is_none() {
            issues.push(ContentIssue::UnresolvedNavHref {
                label: item.label.clone(),
                href: item.href.clone(),
            });
        }
    }

    // In-page footer anchors must resolve too; other hrefs are left alone
    for link in content.footer.columns.iter().flat_map(|c| &c.links) {
        if link.href.starts_with('#') && link.section().is_none() {
            issues.push(ContentIssue::UnresolvedNavHref {
                label: link.label.clone(),
                href: link.href.clone(),
            });
        }
    }

    let mut quarters = HashSet::new();
    for phase in &content.roadmap.phases {
        if !quarters.insert(phase.quarter.as_str()) {
            issues.push(ContentIssue::DuplicateQuarter(phase.quarter.clone()));
        }
    }

    for issue in &issues {
        tracing::warn!(%issue, "content issue");
    }
    issues
}
