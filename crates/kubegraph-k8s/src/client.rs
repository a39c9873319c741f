//! Kubernetes client wrapper

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::{Node, Pod, Service};
use kube::Api;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use kubegraph_types::{ClusterSnapshot, ContextInfo, PodPlacement};

/// Kubernetes client wrapper
pub struct KubeClient {
    kubeconfig: Kubeconfig,
    current_context: Option<String>,
}

impl KubeClient {
    /// Create a new KubeClient by loading the kubeconfig
    pub fn new() -> Result<Self> {
        let kubeconfig =
            Kubeconfig::read().context("Failed to read kubeconfig. Is kubectl configured?")?;

        let current_context = kubeconfig.current_context.clone();

        Ok(Self {
            kubeconfig,
            current_context,
        })
    }

    /// Get all available contexts from kubeconfig
    pub fn contexts(&self) -> Vec<ContextInfo> {
        self.kubeconfig
            .contexts
            .iter()
            .map(|ctx| {
                let cluster = ctx
                    .context
                    .as_ref()
                    .map(|c| c.cluster.clone())
                    .unwrap_or_default();
                ContextInfo::new(
                    ctx.name.clone(),
                    cluster,
                    Some(&ctx.name) == self.current_context.as_ref(),
                )
            })
            .collect()
    }

    /// Get the current context name
    pub fn current_context(&self) -> Option<&str> {
        self.current_context.as_deref()
    }

    /// Create a kube::Client for a specific context, or for the kubeconfig's
    /// current context when none is given
    pub async fn client_for_context(&self, context_name: Option<&str>) -> Result<kube::Client> {
        let display = context_name
            .or(self.current_context.as_deref())
            .unwrap_or("default");

        let config = kube::Config::from_custom_kubeconfig(
            self.kubeconfig.clone(),
            &KubeConfigOptions {
                context: context_name.map(str::to_string),
                ..Default::default()
            },
        )
        .await
        .context(format!("Failed to create config for context: {}", display))?;

        let client = kube::Client::try_from(config)
            .context(format!("Failed to create client for context: {}", display))?;

        Ok(client)
    }

    /// Take a one-shot snapshot of the cluster topology
    ///
    /// Issues three independent list calls (nodes cluster-wide, pods and
    /// services across all namespaces) and projects each result down to the
    /// names the graph needs. The calls run one after the other with no
    /// merged view across them, so each list may observe a slightly
    /// different instant of cluster state.
    pub async fn fetch_snapshot(&self, client: &kube::Client) -> Result<ClusterSnapshot> {
        let nodes: Api<Node> = Api::all(client.clone());
        let node_list = nodes
            .list(&ListParams::default())
            .await
            .context("Failed to list cluster nodes")?;
        debug!(count = node_list.items.len(), "listed cluster nodes");

        let pods: Api<Pod> = Api::all(client.clone());
        let pod_list = pods
            .list(&ListParams::default())
            .await
            .context("Failed to list pods across all namespaces")?;
        debug!(count = pod_list.items.len(), "listed pods");

        let services: Api<Service> = Api::all(client.clone());
        let service_list = services
            .list(&ListParams::default())
            .await
            .context("Failed to list services across all namespaces")?;
        debug!(count = service_list.items.len(), "listed services");

        Ok(ClusterSnapshot::new(
            node_list.items.into_iter().map(node_name).collect(),
            pod_list.items.into_iter().map(pod_placement).collect(),
            service_list.items.into_iter().map(service_name).collect(),
        ))
    }
}

/// Project a node down to its name
fn node_name(node: Node) -> String {
    node.metadata.name.unwrap_or_default()
}

/// Project a pod down to its name and the node it is scheduled on
fn pod_placement(pod: Pod) -> PodPlacement {
    let name = pod.metadata.name.unwrap_or_default();
    let node_name = pod.spec.and_then(|spec| spec.node_name);
    PodPlacement::new(name, node_name)
}

/// Project a service down to its name
fn service_name(service: Service) -> String {
    service.metadata.name.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::PodSpec;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn named(name: &str) -> ObjectMeta {
        ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_pod_projection() {
        let pod = Pod {
            metadata: named("p1"),
            spec: Some(PodSpec {
                node_name: Some("n1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            pod_placement(pod),
            PodPlacement::new("p1".to_string(), Some("n1".to_string()))
        );
    }

    #[test]
    fn test_unscheduled_pod_projection() {
        let pod = Pod {
            metadata: named("p1"),
            ..Default::default()
        };
        assert_eq!(pod_placement(pod), PodPlacement::new("p1".to_string(), None));
    }

    #[test]
    fn test_nameless_resources_project_to_empty_names() {
        // Listed objects always carry a name in practice; a missing one
        // degrades to an empty string rather than failing the snapshot.
        assert_eq!(node_name(Node::default()), "");
        assert_eq!(service_name(Service::default()), "");
        assert_eq!(pod_placement(Pod::default()).name, "");
    }
}
