//! Graph validation logic.

use td_core::ComponentKey;

use crate::error::{GraphError, GraphResult};
use crate::graph::ComponentGraph;

/// Check that every internal dependency names a component in the graph.
pub fn validate_references(graph: &ComponentGraph) -> GraphResult<()> {
    for comp in graph.iter() {
        for dep in &comp.internal_dependencies {
            if !graph.contains(dep.as_str()) {
                return Err(GraphError::DanglingReference {
                    component: comp.key.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Check that internal dependencies form a DAG.
///
/// Edges to keys missing from the graph are ignored here.
pub fn validate_acyclic(graph: &ComponentGraph) -> GraphResult<()> {
    topological_order(graph).map(|_| ())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Order keys so that every component follows all of its internal dependencies.
///
/// Depth-first from each component in insertion order, visiting dependencies in
/// declared order, so the result is deterministic. Dangling edges are skipped.
/// Fails with `Cycle` on the first back edge found.
pub fn topological_order(graph: &ComponentGraph) -> GraphResult<Vec<&ComponentKey>> {
    let n = graph.len();
    let mut marks = vec![Mark::Unvisited; n];
    let mut order = Vec::with_capacity(n);
    // (component position, index of next dependency to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (pos, next) = *frame;
            let comp = graph.at(pos);

            let Some(dep) = comp.internal_dependencies.get(next) else {
                marks[pos] = Mark::Done;
                order.push(&comp.key);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let Some(dep_pos) = graph.position(dep.as_str()) else {
                continue;
            };
            match marks[dep_pos] {
                Mark::Unvisited => {
                    marks[dep_pos] = Mark::InProgress;
                    stack.push((dep_pos, 0));
                }
                Mark::InProgress => {
                    let start = stack
                        .iter()
                        .position(|&(p, _)| p == dep_pos)
                        .unwrap_or(0);
                    let mut path: Vec<ComponentKey> = stack[start..]
                        .iter()
                        .map(|&(p, _)| graph.at(p).key.clone())
                        .collect();
                    path.push(dep.clone());
                    return Err(GraphError::Cycle { path });
                }
                Mark::Done => {}
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Component;

    fn graph_of(defs: &[(&str, Vec<&str>)]) -> ComponentGraph {
        let mut graph = ComponentGraph::new();
        for (key, deps) in defs {
            graph
                .register(Component::library(key, deps.as_slice(), &[]).unwrap())
                .unwrap();
        }
        graph
    }

    fn keys(order: Vec<&ComponentKey>) -> Vec<&str> {
        order.into_iter().map(ComponentKey::as_str).collect()
    }

    #[test]
    fn validate_empty_graph() {
        let graph = ComponentGraph::new();
        assert!(validate_references(&graph).is_ok());
        assert!(validate_acyclic(&graph).is_ok());
        assert!(topological_order(&graph).unwrap().is_empty());
    }

    #[test]
    fn dangling_reference_is_reported() {
        let graph = graph_of(&[("tdutils", vec![]), ("tddb", vec!["tdutils", "tdsqlite"])]);
        let err = validate_references(&graph).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingReference {
                component: ComponentKey::new("tddb").unwrap(),
                dependency: ComponentKey::new("tdsqlite").unwrap(),
            }
        );
        // Dangling edges do not make a cycle.
        assert!(validate_acyclic(&graph).is_ok());
    }

    #[test]
    fn dependencies_come_first() {
        // Declared before its dependencies on purpose.
        let graph = graph_of(&[
            ("tdnet", vec!["tdutils", "tdactor"]),
            ("tdactor", vec!["tdutils"]),
            ("tdutils", vec![]),
        ]);
        let order = keys(topological_order(&graph).unwrap());
        assert_eq!(order, vec!["tdutils", "tdactor", "tdnet"]);
    }

    #[test]
    fn cycle_path_is_reported() {
        let graph = graph_of(&[("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        match validate_acyclic(&graph).unwrap_err() {
            GraphError::Cycle { path } => {
                let path: Vec<_> = path.iter().map(ComponentKey::as_str).collect();
                assert_eq!(path, vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = graph_of(&[("solo", vec!["solo"])]);
        assert!(matches!(
            validate_acyclic(&graph),
            Err(GraphError::Cycle { .. })
        ));
    }
}
