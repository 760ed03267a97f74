use glyphsheet::{sheet, OUTPUT_FILE};

fn run() -> anyhow::Result<()> {
    sheet::write_sheet(OUTPUT_FILE)?;
    println!("{}", sheet::summary());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("glyphsheet failed: {}", e);
        std::process::exit(1);
    }
}
