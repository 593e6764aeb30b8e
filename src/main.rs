use anyhow::{Context, Result};

use tabulist::column::{CellValue, ColumnDescriptor, SortType};
use tabulist::config::{Config, LoggingConfig};
use tabulist::source::http::HttpSource;
use tabulist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    if config.logging.enabled {
        init_logging(&config.logging)?;
    }
    log::info!("starting tabulist against {}", config.source.base_url);

    let source = HttpSource::new(&config.source.base_url, &config.source.endpoint)
        .context("Failed to build data source")?;

    ui::run_app(&config, product_columns(), source).await
}

/// Column layout for the bundled product table.
fn product_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("title", "Name").sortable(SortType::Text),
        ColumnDescriptor::new("quantity", "Quantity").sortable(SortType::Number),
        ColumnDescriptor::new("price", "Price")
            .sortable(SortType::Number)
            .with_render_cell(|value: &CellValue| match value {
                CellValue::Null => String::new(),
                value => format!("${}", value.to_display()),
            }),
        ColumnDescriptor::new("sales", "Sales").sortable(SortType::Number),
    ]
}

/// The TUI owns the terminal, so log output goes to a file.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&config.file).context("Failed to open log file")?)
        .apply()
        .context("Failed to initialize logging")?;
    Ok(())
}
