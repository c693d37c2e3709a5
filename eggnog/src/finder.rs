use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use log::debug;

use crate::catalog::LevelCatalog;
use crate::error::{ArgumentError, LevelError, Result};
use crate::level::{Level, TaxonId};

/// Find the smallest level whose members include all of `members`.
///
/// Every level in the catalog is checked, there is no ancestor walk. When several
/// enclosing levels share the smallest declared size, the one defined first in the
/// levels table wins.
pub fn smallest_group(members: &[TaxonId], catalog: &LevelCatalog) -> Result<TaxonId> {
    let required: HashSet<TaxonId> = members.iter().copied().collect();
    debug!("Looking for the smallest group containing {:?}", members);

    let mut best: Option<&Level> = None;

    for level in catalog.iter() {
        if !level.encloses(&required) {
            continue;
        }

        debug!("All are in {} ({})", level.name, level.id);
        if best.is_none_or(|b| level.size < b.size) {
            debug!("Updated size to {} and best group to {}", level.size, level.id);
            best = Some(level);
        }
    }

    best.map(|level| level.id)
        .ok_or_else(|| LevelError::NoEnclosingGroup {
            members: required.into_iter().collect::<BTreeSet<_>>().into_iter().collect(),
        })
}

/// Smallest level that includes `query_org` and either all members of `search_level`
/// or all of `search_orgs`. Exactly one of the two must be given; an empty organism
/// list counts as not given.
pub fn find_level_in(
    catalog: &LevelCatalog,
    query_org: TaxonId,
    search_level: Option<TaxonId>,
    search_orgs: Option<&[TaxonId]>,
) -> Result<TaxonId> {
    let search_orgs = search_orgs.filter(|orgs| !orgs.is_empty());

    let mut members = match (search_level, search_orgs) {
        (Some(_), Some(_)) => return Err(ArgumentError::BothSpecified.into()),
        (None, None) => return Err(ArgumentError::NeitherSpecified.into()),
        (Some(level), None) => catalog.members(level)?.to_vec(),
        (None, Some(orgs)) => orgs.to_vec(),
    };

    members.push(query_org);
    smallest_group(&members, catalog)
}

/// Same as [`find_level_in`], reading the levels table from `levels_file` first
pub fn find_level(
    query_org: TaxonId,
    search_level: Option<TaxonId>,
    search_orgs: Option<&[TaxonId]>,
    levels_file: &Path,
) -> Result<TaxonId> {
    let catalog = LevelCatalog::load(levels_file)?;
    find_level_in(&catalog, query_org, search_level, search_orgs)
}
