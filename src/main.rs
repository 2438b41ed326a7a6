use clap::Parser;
use thankunext::Scanner;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting route discovery for: {}", args.url);
    let start_time = std::time::Instant::now();

    // Every outcome is reported on stdout and exits normally
    match Scanner::new(&args.url).run().await {
        Ok(report) => {
            if !report.routes.is_empty() {
                println!("{}", report.render());
            }
            ::log::info!(
                "Discovered {} routes in {:.2} seconds",
                report.routes.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::debug!("Scan stopped: {:?}", e);
            println!("{}", e);
        }
    }
}
