use clap::{Args, Parser, Subcommand};
use layout::{LayoutNode, LayoutRequest, RouteData};
use xmc_site::components::ComponentKind;
use xmc_site::config::{ConfigError, SiteConfig};
use xmc_site::layout_service::{GraphQlLayoutService, LayoutService, LayoutServiceError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("layout service: {0}")]
    Layout(#[from] LayoutServiceError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Health(u16),
    #[error("route not found: {0}")]
    RouteNotFound(String),
    #[error("{0} component instance(s) have no renderer")]
    UnknownComponents(usize),
}

#[derive(Parser, Debug)]
#[command(name = "layout-check", about = "Inspect layouts and the running site")]
struct Cli {
    #[arg(long, env = "SITE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the running site's health endpoint.
    Ping,
    /// List the component names this site can render.
    Components,
    /// Fetch a route's layout and flag components with no renderer.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Route path, e.g. `/about`.
    #[arg(default_value = "/")]
    route: String,
    #[arg(long)]
    language: Option<String>,
    #[arg(long)]
    site: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Components => {
            for kind in ComponentKind::ALL {
                println!("{}", kind.name());
            }
            Ok(())
        }
        Command::Check(args) => run_check(args).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let status = reqwest::get(url).await?.status();
    if !status.is_success() {
        return Err(CliError::Health(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let config = SiteConfig::from_env()?;
    let service = GraphQlLayoutService::new(config.graphql_endpoint.clone(), config.auth.clone(), config.timeouts)?;

    let route_path = if args.route.starts_with('/') { args.route } else { format!("/{}", args.route) };
    let request = LayoutRequest {
        route_path,
        language: args.language.unwrap_or_else(|| config.default_language.clone()),
        site: args.site.unwrap_or_else(|| config.site_name.clone()),
    };

    let layout = service
        .fetch_layout(&request)
        .await?
        .ok_or_else(|| CliError::RouteNotFound(request.route_path.clone()))?;
    let Some(route) = layout.route() else {
        return Err(CliError::RouteNotFound(request.route_path));
    };

    let findings = audit(route);
    for finding in &findings {
        let marker = if finding.known { "ok     " } else { "UNKNOWN" };
        println!("{marker} {} uid={}", finding.component, finding.uid);
    }

    let unknown = findings.iter().filter(|f| !f.known).count();
    if unknown > 0 {
        return Err(CliError::UnknownComponents(unknown));
    }
    println!("{} component instance(s), all renderable", findings.len());
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
struct Finding {
    component: String,
    uid: String,
    known: bool,
}

/// Every component instance of `route` in page order, depth first, with whether it has a renderer.
fn audit(route: &RouteData) -> Vec<Finding> {
    route
        .nodes()
        .into_iter()
        .map(|node: &LayoutNode| Finding {
            component: node.component_name.clone(),
            uid: node.uid.clone(),
            known: ComponentKind::from_name(&node.component_name).is_some(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_flags_unknown_components_depth_first() {
        let mut container = LayoutNode::named("Container")
            .with_placeholder("container-1", vec![LayoutNode::named("PromoCard"), LayoutNode::named("Reviews")]);
        container.uid = "c1".into();
        let mut route = RouteData::default();
        route.placeholders.insert("headless-main".into(), vec![container, LayoutNode::named("Footer")]);

        let findings = audit(&route);
        let names: Vec<(&str, bool)> = findings.iter().map(|f| (f.component.as_str(), f.known)).collect();
        assert_eq!(
            names,
            vec![("Container", true), ("PromoCard", false), ("Reviews", true), ("Footer", true)]
        );
        assert_eq!(findings[0].uid, "c1");
    }

    #[test]
    fn audit_lists_root_placeholders_in_page_order() {
        let mut route = RouteData::default();
        route.placeholders.insert("headless-footer".into(), vec![LayoutNode::named("Footer")]);
        route.placeholders.insert("headless-main".into(), vec![LayoutNode::named("HeroBanner")]);
        route.placeholders.insert("headless-header".into(), vec![LayoutNode::named("Header")]);

        let names: Vec<String> = audit(&route).into_iter().map(|f| f.component).collect();
        assert_eq!(names, ["Header", "HeroBanner", "Footer"]);
    }

    #[test]
    fn audit_of_empty_route_is_empty() {
        assert!(audit(&RouteData::default()).is_empty());
    }
}
