use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use marks_advisor::config::AppConfig;
use marks_advisor::error::AppError;
use marks_advisor::telemetry;
use marks_advisor::workflows::counseling::{
    counseling_router, CombinedVerdict, CounselingService, Mark, MarkRecommendation,
    MemoryDraftRepository, VerdictStatus,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Counseling Marks Advisor",
    about = "Check counseling statement language against assigned marks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a worksheet's statements against their marks
    Check(CheckArgs),
    /// Suggest a mark range for a single statement
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Proficiency statement text
    #[arg(long, default_value = "")]
    proficiency: String,
    /// Proficiency mark (0.0-5.0)
    #[arg(long, default_value = "4.0")]
    proficiency_mark: String,
    /// Conduct statement text
    #[arg(long, default_value = "")]
    conduct: String,
    /// Conduct mark (0.0-5.0)
    #[arg(long, default_value = "4.0")]
    conduct_mark: String,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Statement text to rate
    statement: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Check(args) => {
            run_check(args);
            Ok(())
        }
        Command::Recommend(args) => {
            run_recommend(args);
            Ok(())
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let repository = Arc::new(MemoryDraftRepository::default());
    let service = Arc::new(CounselingService::new(repository));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(counseling_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, theme = config.default_theme.label(), "counseling marks advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_check(args: CheckArgs) {
    let service = CounselingService::new(Arc::new(MemoryDraftRepository::default()));
    let combined = service.engine().evaluate_worksheet(
        &args.proficiency,
        &Mark::parse(args.proficiency_mark),
        &args.conduct,
        &Mark::parse(args.conduct_mark),
    );
    print!("{}", format_check(&combined));
}

fn run_recommend(args: RecommendArgs) {
    let service = CounselingService::new(Arc::new(MemoryDraftRepository::default()));
    let recommendation = service.recommend(&args.statement);
    print!("{}", format_recommendation(&recommendation));
}

fn format_check(combined: &CombinedVerdict) -> String {
    let mut out = String::new();

    for (label, verdict) in [
        ("Proficiency", &combined.proficiency),
        ("Conduct", &combined.conduct),
    ] {
        let message = if verdict.message.is_empty() {
            "(statement too short to judge)"
        } else {
            verdict.message.as_str()
        };
        out.push_str(&format!(
            "{label}: [{}] {message}\n",
            verdict.status.label()
        ));
    }

    out.push_str(&format!("Overall: {}\n", combined.status.label()));
    if combined.status == VerdictStatus::Warning {
        for message in &combined.messages {
            out.push_str(&format!("- {message}\n"));
        }
    }
    out
}

fn format_recommendation(recommendation: &MarkRecommendation) -> String {
    format!(
        "Suggested mark: {:.1} (range {:.1}-{:.1})\n",
        recommendation.suggested, recommendation.min, recommendation.max
    )
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
