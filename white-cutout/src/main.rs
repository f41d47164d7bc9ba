use anyhow::Result;
use transparency_filter::{TransparencyConfig, make_white_transparent};

fn main() -> Result<()> {
    init_logger();

    let config = TransparencyConfig::default();
    make_white_transparent(&config)?;

    println!("Saved transparent image to {}", config.output);

    Ok(())
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
