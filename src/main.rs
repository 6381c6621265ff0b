use anyhow::Context;
use clap::Parser;
use cloudinary_upload::{cli, config, store, uploader};
use cli::Cli;
use config::Config;
use uploader::CurlClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::default();

    if cli.verbose {
        println!("アップロード先: {}", config.endpoint());
        println!("プリセット: {}", config.upload_preset);
    }

    println!("Starting uploads...");
    let client = CurlClient::new(&config, cli.verbose);
    let report = uploader::upload_all(&config.entries, &client, cli.verbose).await;

    // 結果保存（成功0件でも {} を書き出す）
    store::save_results(&report.results, &config.output_path)
        .with_context(|| format!("結果の保存に失敗: {}", config.output_path.display()))?;

    if cli.verbose {
        println!(
            "✔ {}/{}件成功 → {}",
            report.success_count(),
            config.entries.len(),
            config.output_path.display()
        );
    }

    println!("Finished uploads.");
    Ok(())
}
