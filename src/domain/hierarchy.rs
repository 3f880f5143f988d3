// ============================================================
// Layer 3 - Type Hierarchy
// ============================================================
// The DBpedia ontology as a tree of classes. Each class has a
// parent and a depth; the root (owl:Thing) is not listed itself,
// so every path stops just below it.
//
//   dbo:Agent          depth 1  parent owl:Thing
//   dbo:Person         depth 2  parent dbo:Agent
//   dbo:Athlete        depth 3  parent dbo:Person
//
//   path(dbo:Athlete) = [dbo:Athlete, dbo:Person, dbo:Agent]
//
// Paths are computed once when the hierarchy is built.

use std::collections::{BTreeSet, HashMap, HashSet};

/// A single class in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub parent: String,
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    types: HashMap<String, TypeEntry>,
    paths: HashMap<String, Vec<String>>,
    max_depth: usize,
}

impl TypeHierarchy {
    /// Build a hierarchy from `(type, depth, parent)` rows.
    /// A repeated type overwrites the earlier row.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, usize, S)>,
        S: Into<String>,
    {
        let mut types: HashMap<String, TypeEntry> = HashMap::new();
        let mut max_depth = 0;

        for (name, depth, parent) in rows {
            types.insert(
                name.into(),
                TypeEntry {
                    parent: parent.into(),
                    depth,
                },
            );
            max_depth = max_depth.max(depth);
        }

        let paths = types
            .keys()
            .map(|name| (name.clone(), walk_path(name, &types)))
            .collect();

        Self {
            types,
            paths,
            max_depth,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// The type followed by all of its ancestors, most specific first.
    /// Unknown types have an empty path.
    pub fn path(&self, name: &str) -> &[String] {
        self.paths.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of steps between two types on the same branch, `None` when
    /// neither is an ancestor of the other.
    pub fn distance(&self, a: &str, b: &str) -> Option<usize> {
        let down = self.path(b).iter().position(|t| t == a);
        let up = self.path(a).iter().position(|t| t == b);
        match (down, up) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, y) => x.or(y),
        }
    }

    /// Removes every type that is a strict supertype of another input type.
    pub fn most_specific<S: AsRef<str>>(&self, types: &[S]) -> BTreeSet<String> {
        let mut filtered: BTreeSet<String> =
            types.iter().map(|t| t.as_ref().to_string()).collect();

        for t in types {
            for supertype in self.path(t.as_ref()).iter().skip(1) {
                filtered.remove(supertype);
            }
        }

        filtered
    }

    /// All supertypes and all subtypes of the input types, the inputs
    /// themselves included when they are known.
    pub fn expanded<'a, I>(&self, types: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut expanded = BTreeSet::new();

        for t in types {
            expanded.extend(self.path(t).iter().cloned());

            let Some(entry) = self.types.get(t) else {
                continue;
            };

            for (other, other_entry) in &self.types {
                if other_entry.depth <= entry.depth {
                    continue;
                }
                let other_path = self.path(other);
                if other_path.iter().any(|p| p == t) {
                    expanded.extend(other_path.iter().cloned());
                }
            }
        }

        expanded
    }
}

/// Follows parent links while they stay inside the hierarchy.
fn walk_path(start: &str, types: &HashMap<String, TypeEntry>) -> Vec<String> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = start;

    while let Some(entry) = types.get(current) {
        if !seen.insert(current) {
            tracing::warn!("Cycle in type hierarchy at '{}'", current);
            break;
        }
        path.push(current.to_string());
        current = &entry.parent;
    }

    path
}
