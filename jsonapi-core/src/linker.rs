//! Full-linkage verification of compound documents
//!
//! Every included resource must be reachable from primary data through a
//! chain of relationships. Reachability is computed over the graph whose
//! nodes are included resources (keyed by `(type, id)`) and whose edges are
//! the primary data of each included resource's relationship documents.

use crate::error::{JsonApiError, PartialLinkageError};
use crate::types::{Document, ResourceIdentity, ResourceObject};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Outcome of a reachability pass over a compound document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkageReport {
    /// Reachable included resources and their position in `included`
    reachable: BTreeMap<ResourceIdentity, usize>,

    /// Included resources not reachable from primary data
    pub orphans: BTreeSet<ResourceIdentity>,

    /// Relationship targets reached during traversal that are not included
    pub external: BTreeSet<ResourceIdentity>,

    /// Number of distinct included identities
    included: usize,
}

/// Linkage statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageStats {
    /// Distinct included resources
    pub included: usize,

    /// Included resources reachable from primary data
    pub reachable: usize,

    /// Included resources not reachable from primary data
    pub orphans: usize,

    /// Relationship targets outside the compound document
    pub external: usize,
}

impl LinkageReport {
    /// Whether every included resource is reachable
    pub fn is_fully_linked(&self) -> bool {
        self.orphans.is_empty()
    }

    /// Whether the given included resource is reachable
    pub fn is_reachable(&self, identity: &ResourceIdentity) -> bool {
        self.reachable.contains_key(identity)
    }

    /// Identities of reachable included resources
    pub fn reachable(&self) -> impl Iterator<Item = &ResourceIdentity> {
        self.reachable.keys()
    }

    /// Get statistics about this report
    pub fn stats(&self) -> LinkageStats {
        LinkageStats {
            included: self.included,
            reachable: self.reachable.len(),
            orphans: self.orphans.len(),
            external: self.external.len(),
        }
    }

    /// Convert into a partial-linkage error when orphans exist
    pub fn into_result(self) -> Result<(), JsonApiError> {
        if self.orphans.is_empty() {
            Ok(())
        } else {
            Err(PartialLinkageError {
                resources: self.orphans,
            }
            .into())
        }
    }
}

/// An included resource in the linkage graph
struct IncludeNode {
    position: usize,
    related: Vec<ResourceIdentity>,
    visited: bool,
}

/// Identities named by the primary data of all of a resource's relationships
fn related_identities(resource: &ResourceObject) -> impl Iterator<Item = ResourceIdentity> + '_ {
    resource
        .relationships
        .values()
        .flat_map(|relationship| relationship.primary_resources().iter().map(ResourceObject::identity))
}

/// Compute which included resources are reachable from primary data
///
/// This function:
/// 1. Builds a lookup of identity -> included node with its related identities
/// 2. Seeds a worklist with the relationship targets of primary data
/// 3. Marks each reached node visited, expanding its neighbours only on first visit
/// 4. Reports unvisited nodes as orphans
///
/// The document is not modified. Cycles terminate because a visited node is
/// never expanded twice.
pub fn analyze_linkage(document: &Document) -> LinkageReport {
    if document.included.is_empty() {
        return LinkageReport::default();
    }

    #[cfg(feature = "logging")]
    debug!(
        "Analyzing linkage of {} included resources",
        document.included.len()
    );

    // Later duplicates of an identity replace earlier ones
    let mut graph: HashMap<ResourceIdentity, IncludeNode> = HashMap::new();
    for (position, included) in document.included.iter().enumerate() {
        graph.insert(
            included.identity(),
            IncludeNode {
                position,
                related: related_identities(included).collect(),
                visited: false,
            },
        );
    }

    let mut worklist: Vec<ResourceIdentity> = document
        .primary_resources()
        .iter()
        .flat_map(related_identities)
        .collect();
    worklist.reverse();

    let mut external = BTreeSet::new();

    while let Some(identity) = worklist.pop() {
        let Some(node) = graph.get_mut(&identity) else {
            external.insert(identity);
            continue;
        };

        if node.visited {
            continue;
        }

        node.visited = true;
        worklist.extend(node.related.iter().rev().cloned());
    }

    let included = graph.len();
    let mut reachable = BTreeMap::new();
    let mut orphans = BTreeSet::new();
    for (identity, node) in graph {
        if node.visited {
            reachable.insert(identity, node.position);
        } else {
            orphans.insert(identity);
        }
    }

    #[cfg(feature = "logging")]
    {
        if orphans.is_empty() {
            debug!("All {} included resources are linked", included);
        } else {
            warn!(
                "{} of {} included resources are not linked to primary data",
                orphans.len(),
                included
            );
        }
    }

    LinkageReport {
        reachable,
        orphans,
        external,
        included,
    }
}

/// Verify that every included resource is reachable from primary data
///
/// A document without included resources is trivially fully linked.
pub fn verify_full_linkage(document: &Document) -> Result<(), JsonApiError> {
    analyze_linkage(document).into_result()
}

/// Replace relationship placeholders with the bodies of included resources
///
/// Every placeholder the traversal in `report` reached (relationships of
/// primary data, and of reachable included resources) is overwritten with
/// the included resource it names. Substituted bodies are themselves
/// aliased along the traversal, so `a -> b -> c` is filled in at every
/// depth. A placeholder that closes a cycle receives the body as it was
/// before this call, which cuts the recursion. Returns the number of
/// placeholders replaced in primary data and in `included`.
pub fn alias_relationships(document: &mut Document, report: &LinkageReport) -> usize {
    let originals: HashMap<ResourceIdentity, ResourceObject> = report
        .reachable
        .iter()
        .filter_map(|(identity, &position)| {
            document
                .included
                .get(position)
                .filter(|resource| resource.identity() == *identity)
                .map(|resource| (identity.clone(), resource.clone()))
        })
        .collect();

    if originals.is_empty() {
        return 0;
    }

    let mut aliaser = Aliaser {
        originals,
        resolved: HashMap::new(),
        in_progress: HashSet::new(),
    };

    let mut replaced = 0;
    for resource in document.data.resources_mut() {
        replaced += aliaser.alias_placeholders(resource);
    }
    for &position in report.reachable.values() {
        if let Some(resource) = document.included.get_mut(position) {
            replaced += aliaser.alias_placeholders(resource);
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Aliased {} relationship placeholders ({} distinct bodies)",
        replaced,
        aliaser.resolved.len()
    );

    replaced
}

/// Memoized substitution of included bodies into placeholders
struct Aliaser {
    /// Reachable included resources as they were before aliasing
    originals: HashMap<ResourceIdentity, ResourceObject>,

    /// Fully aliased bodies, by identity
    resolved: HashMap<ResourceIdentity, ResourceObject>,

    /// Identities whose body is currently being aliased
    in_progress: HashSet<ResourceIdentity>,
}

impl Aliaser {
    /// The aliased body for `identity`, or `None` if it is not a reachable include
    fn resolve(&mut self, identity: &ResourceIdentity) -> Option<ResourceObject> {
        if let Some(body) = self.resolved.get(identity) {
            return Some(body.clone());
        }

        let mut body = self.originals.get(identity)?.clone();

        // Revisit while still being expanded: a cycle
        if !self.in_progress.insert(identity.clone()) {
            return Some(body);
        }

        self.alias_placeholders(&mut body);
        self.in_progress.remove(identity);
        self.resolved.insert(identity.clone(), body.clone());
        Some(body)
    }

    fn alias_placeholders(&mut self, resource: &mut ResourceObject) -> usize {
        let mut replaced = 0;
        for relationship in resource.relationships.values_mut() {
            for placeholder in relationship.data.resources_mut() {
                if let Some(body) = self.resolve(&placeholder.identity()) {
                    *placeholder = body;
                    replaced += 1;
                }
            }
        }
        replaced
    }
}

impl Document {
    /// Verify full linkage, optionally aliasing included bodies into
    /// relationship placeholders
    ///
    /// Aliasing only happens when verification succeeds. On a
    /// [`JsonApiError::PartialLinkage`] error the document is left exactly as
    /// it was, including placeholders that were reachable from primary data.
    pub fn verify_full_linkage(&mut self, alias: bool) -> Result<(), JsonApiError> {
        let report = analyze_linkage(self);
        if !report.is_fully_linked() {
            return report.into_result();
        }

        if alias {
            alias_relationships(self, &report);
        }

        Ok(())
    }
}
