use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = sthelper::cli::Cli::parse();
    let exit_code = sthelper::run(cli).await;
    std::process::exit(exit_code);
}
