use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use kubegraph_graph::build_elements;
use kubegraph_k8s::KubeClient;
use kubegraph_types::{GraphElement, GraphLayout};
use kubegraph_web::{DashboardConfig, DashboardServer, DashboardState, SnapshotSummary};

/// Kubegraph - a web dashboard for visualizing Kubernetes cluster topology
#[derive(Parser, Debug)]
#[command(name = "kubegraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Kubernetes context name (defaults to the kubeconfig's current context)
    #[arg(value_name = "CONTEXT")]
    context: Option<String>,

    /// Path to a dashboard config file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to bind the dashboard to
    #[arg(long)]
    bind: Option<String>,

    /// Port to serve the dashboard on
    #[arg(long)]
    port: Option<u16>,

    /// Initial graph layout (grid, circle, breadthfirst, random)
    #[arg(long)]
    layout: Option<GraphLayout>,

    /// Dashboard title
    #[arg(long)]
    title: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run_app(args).await;

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

async fn run_app(args: Args) -> Result<()> {
    let config = dashboard_config(&args)?;
    let (summary, elements) = initialize(&args).await?;

    let state = DashboardState::new(
        config.title.clone(),
        config.default_layout,
        summary,
        elements,
    );

    DashboardServer::new(config, state).serve().await
}

/// Fetch the cluster snapshot and build the graph elements
///
/// Runs exactly once, before the dashboard is presented; the fetched data
/// is immutable for the rest of the process lifetime. Any failure here
/// aborts startup.
async fn initialize(args: &Args) -> Result<(SnapshotSummary, Vec<GraphElement>)> {
    let kube_client = KubeClient::new()?;

    if let Some(context_name) = &args.context {
        let contexts = kube_client.contexts();
        if !contexts.iter().any(|c| &c.name == context_name) {
            let known: Vec<_> = contexts.iter().map(|c| c.name.as_str()).collect();
            anyhow::bail!(
                "Context '{}' not found in kubeconfig (known contexts: {})",
                context_name,
                known.join(", ")
            );
        }
    }

    let client = kube_client
        .client_for_context(args.context.as_deref())
        .await?;
    let snapshot = kube_client.fetch_snapshot(&client).await?;

    info!(
        nodes = snapshot.nodes.len(),
        pods = snapshot.pods.len(),
        services = snapshot.services.len(),
        "cluster snapshot ready"
    );

    Ok((SnapshotSummary::of(&snapshot), build_elements(&snapshot)))
}

/// Resolve the dashboard configuration: file values, then CLI overrides
fn dashboard_config(args: &Args) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(layout) = args.layout {
        config.default_layout = layout;
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }

    Ok(config)
}
