use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "thankunext")]
#[command(
    about = "Easily gather all routes related to a NextJs application through parsing of _buildManifest.js"
)]
pub struct Args {
    /// URL to scan e.g. thankunext example.com
    pub url: String,
}
