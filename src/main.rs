use clap::Parser;
use textvec::cli::commands::{Cli, Commands};
use textvec::config::Config;
use textvec::domain::entities::ranked_result::RankedResult;
use textvec::domain::values::metric::Metric;
use textvec::TextVec;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Download { model } => {
            let model_id = model.unwrap_or_else(|| config.model_id.clone());
            std::process::exit(run_download(&config, &model_id).await);
        }
        Commands::Ingest { texts } => {
            let tv = connect_or_exit(&config).await;
            match tv.ingest(&texts).await {
                Ok(count) => println!("Inserted {count} vector rows"),
                Err(e) => fail(e),
            }
        }
        Commands::Search { query, k, metric, json } => {
            let tv = connect_or_exit(&config).await;
            let metrics = match metric {
                Some(m) => match m.parse::<Metric>() {
                    Ok(metric) => vec![metric],
                    Err(e) => fail(e),
                },
                None => vec![Metric::Euclidean, Metric::Cosine],
            };
            for metric in metrics {
                match tv.search(&query, metric, k).await {
                    Ok(results) => print_results(metric, k, &results, json),
                    Err(e) => fail(e),
                }
            }
        }
    }
}

async fn connect_or_exit(config: &Config) -> TextVec {
    match TextVec::connect(config).await {
        Ok(tv) => tv,
        Err(e) => {
            eprintln!("Error initializing textvec: {e}");
            std::process::exit(1);
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

async fn run_download(config: &Config, model_id: &str) -> i32 {
    let acquirer = textvec::acquirer(config);

    if !acquirer.ensure_available().await {
        eprintln!("Model hub is unreachable; downloads cannot proceed.");
        eprintln!("Check network access or point TEXTVEC_HUB_URL at a reachable mirror.");
        return 2;
    }

    match acquirer.download(model_id).await {
        Ok(path) => {
            println!("Model downloaded to {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("Download failed: {e}");
            1
        }
    }
}

fn print_results(metric: Metric, k: usize, results: &[RankedResult], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(results).unwrap_or_default());
        return;
    }
    match metric {
        Metric::Euclidean => {
            println!("Top-{k} results (L2 distance):");
            for r in results {
                println!("  id={}, dist={:.6}, text={}", r.item_id, r.distance, r.text);
            }
        }
        Metric::Cosine => {
            println!("Top-{k} results (cosine):");
            for r in results {
                println!("  id={}, cos_sim={:.6}, text={}", r.item_id, r.similarity(), r.text);
            }
        }
    }
}
