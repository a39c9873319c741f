use kubegraph_types::{ClusterSnapshot, GraphElement, ResourceKind};

/// Build the ordered graph element sequence for a cluster snapshot
///
/// Emission strictly follows input iteration order with no sorting,
/// deduplication, or validation: one vertex per cluster node, then per pod
/// a vertex and an edge from its hosting node, then per service a vertex
/// and one edge to every pod in the snapshot. Vertices referenced by an
/// edge are emitted before the edge itself, per source kind.
///
/// A pod whose hosting node matches no fetched node still gets its edge,
/// pointing at the dangling id. Empty input lists yield empty
/// subsequences.
pub fn build_elements(snapshot: &ClusterSnapshot) -> Vec<GraphElement> {
    let mut elements = Vec::new();

    for node in &snapshot.nodes {
        elements.push(GraphElement::vertex(node.clone(), ResourceKind::ClusterNode));
    }

    for pod in &snapshot.pods {
        elements.push(GraphElement::vertex(pod.name.clone(), ResourceKind::Pod));
        // An unscheduled pod keeps its edge, with an empty source id
        elements.push(GraphElement::edge(
            pod.node_name.clone().unwrap_or_default(),
            pod.name.clone(),
        ));
    }

    for service in &snapshot.services {
        elements.push(GraphElement::vertex(
            service.clone(),
            ResourceKind::Service,
        ));
        // Every service is drawn as routing to every pod in the snapshot,
        // an approximation of label-selector membership
        for pod in &snapshot.pods {
            elements.push(GraphElement::edge(service.clone(), pod.name.clone()));
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubegraph_types::PodPlacement;

    fn snapshot(
        nodes: &[&str],
        pods: &[(&str, Option<&str>)],
        services: &[&str],
    ) -> ClusterSnapshot {
        ClusterSnapshot::new(
            nodes.iter().map(|n| n.to_string()).collect(),
            pods.iter()
                .map(|(name, node)| {
                    PodPlacement::new(name.to_string(), node.map(str::to_string))
                })
                .collect(),
            services.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_concrete_scenario_order() {
        let snap = snapshot(&["n1"], &[("p1", Some("n1"))], &["svc1"]);
        let elements = build_elements(&snap);

        assert_eq!(
            elements,
            vec![
                GraphElement::vertex("n1".to_string(), ResourceKind::ClusterNode),
                GraphElement::vertex("p1".to_string(), ResourceKind::Pod),
                GraphElement::edge("n1".to_string(), "p1".to_string()),
                GraphElement::vertex("svc1".to_string(), ResourceKind::Service),
                GraphElement::edge("svc1".to_string(), "p1".to_string()),
            ]
        );
    }

    #[test]
    fn test_element_counts() {
        // N + M + S vertices, M + S * M edges
        let snap = snapshot(
            &["n1", "n2"],
            &[("p1", Some("n1")), ("p2", Some("n2")), ("p3", Some("n1"))],
            &["svc1", "svc2"],
        );
        let elements = build_elements(&snap);

        let vertices = elements.iter().filter(|e| e.is_vertex()).count();
        let edges = elements.iter().filter(|e| e.is_edge()).count();
        assert_eq!(vertices, 2 + 3 + 2);
        assert_eq!(edges, 3 + 2 * 3);
    }

    #[test]
    fn test_empty_cluster() {
        let snap = snapshot(&[], &[], &[]);
        assert!(build_elements(&snap).is_empty());
    }

    #[test]
    fn test_single_node() {
        let snap = snapshot(&["n1"], &[], &[]);
        let elements = build_elements(&snap);
        assert_eq!(
            elements,
            vec![GraphElement::vertex(
                "n1".to_string(),
                ResourceKind::ClusterNode
            )]
        );
    }

    #[test]
    fn test_ghost_node_edge_passes_through() {
        // The pod's hosting node was never fetched; the edge still points
        // at the dangling id and nothing is filtered.
        let snap = snapshot(&[], &[("p1", Some("ghost-node"))], &[]);
        let elements = build_elements(&snap);

        assert_eq!(
            elements,
            vec![
                GraphElement::vertex("p1".to_string(), ResourceKind::Pod),
                GraphElement::edge("ghost-node".to_string(), "p1".to_string()),
            ]
        );
    }

    #[test]
    fn test_unscheduled_pod_gets_empty_edge_source() {
        let snap = snapshot(&[], &[("p1", None)], &[]);
        let elements = build_elements(&snap);

        assert_eq!(
            elements,
            vec![
                GraphElement::vertex("p1".to_string(), ResourceKind::Pod),
                GraphElement::edge(String::new(), "p1".to_string()),
            ]
        );
    }

    #[test]
    fn test_service_connects_to_every_pod() {
        let snap = snapshot(&[], &[("p1", None), ("p2", None)], &["svc1"]);
        let elements = build_elements(&snap);

        let service_edges: Vec<_> = elements
            .iter()
            .skip_while(|e| *e != &GraphElement::vertex("svc1".to_string(), ResourceKind::Service))
            .skip(1)
            .collect();
        assert_eq!(
            service_edges,
            vec![
                &GraphElement::edge("svc1".to_string(), "p1".to_string()),
                &GraphElement::edge("svc1".to_string(), "p2".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_are_not_deduplicated() {
        let snap = snapshot(&["n1", "n1"], &[], &[]);
        let elements = build_elements(&snap);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0], elements[1]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let snap = snapshot(
            &["n1"],
            &[("p1", Some("n1")), ("p2", None)],
            &["svc1", "svc2"],
        );
        assert_eq!(build_elements(&snap), build_elements(&snap));
    }
}
