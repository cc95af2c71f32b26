//! Named persisted domains.

use std::fmt;

/// One named persisted collection, isolated from the others in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Domain {
    FundingSources,
    FundingSourceLists,
    Cards,
    Transactions,
    ProjectBranding,
}

impl Domain {
    /// File name of the domain blob inside the cache directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Domain::FundingSources => "funding_sources.json",
            Domain::FundingSourceLists => "funding_source_lists.json",
            Domain::Cards => "cards.json",
            Domain::Transactions => "transactions.json",
            Domain::ProjectBranding => "project_branding.json",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
