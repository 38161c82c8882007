use clap::Parser;

use course_etl::core::render::render;
use course_etl::utils::{logger, validation::Validate};
use course_etl::{CliConfig, CoursePipeline, EtlEngine, LocalStorage, NckuCrawler, ParseFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let format: ParseFormat = match config.format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 建立爬蟲、存儲和管道
    let crawler = NckuCrawler::with_endpoints(config.current_url.as_str(), config.query_url.as_str());
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CoursePipeline::new(crawler, storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) if !summary.available => {
            // 查無課程：預期結果，正常結束
            println!("查無課程資訊 (no course available)");
        }
        Ok(summary) => {
            println!("{}", render(&summary.records, format)?);
            if let Some(path) = &summary.output_path {
                println!("📁 Exported to {}", path);
            }
        }
        Err(e) => {
            tracing::error!("Course ETL failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
