use clap::Parser;
use small_cart::utils::{format::format_price, logger, validation::Validate};
use small_cart::{
    build_http_client, Cart, CartCommand, CartEngine, CliConfig, ConfigProvider,
    HttpCatalogGateway, HttpStockGateway, LocalStore,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-cart CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建網關和存儲
    let client = build_http_client(Duration::from_secs(config.timeout_secs()))
        .map_err(|e| anyhow::anyhow!("could not build HTTP client: {}", e))?;
    let stock = HttpStockGateway::new(client.clone(), config.api_endpoint().to_string());
    let catalog = HttpCatalogGateway::new(client, config.api_endpoint().to_string());
    let store = LocalStore::new(config.data_path().to_string());

    // 載入購物車引擎並執行操作
    let engine = CartEngine::load(stock, catalog, store).await;

    let result = match &config.command {
        CartCommand::Add { product_id } => engine.add_product(*product_id).await,
        CartCommand::Remove { product_id } => engine.remove_product(*product_id).await,
        CartCommand::Update { product_id, amount } => {
            engine.update_product_amount(*product_id, *amount).await
        }
        CartCommand::Show => Ok(()),
    };

    match result {
        Ok(()) => {
            render_cart(&engine.cart().await);
            if !matches!(config.command, CartCommand::Show) {
                tracing::info!("✅ Cart updated successfully");
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Cart operation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                // 拒絕與暫時性錯誤：重新觸發即可
                small_cart::utils::error::ErrorSeverity::Low
                | small_cart::utils::error::ErrorSeverity::Medium => 2,
                small_cart::utils::error::ErrorSeverity::High => 1,
                small_cart::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn render_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 Cart contents:");
    println!("{:<6} {:<30} {:>6} {:>10} {:>10}", "ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL");
    for line in cart.lines() {
        println!(
            "{:<6} {:<30} {:>6} {:>10} {:>10}",
            line.product.id,
            line.product.title,
            line.amount,
            format_price(line.product.price),
            format_price(line.subtotal()),
        );
    }
    println!("{:>64} {:>10}", "TOTAL", format_price(cart.total()));
}
