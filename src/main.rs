use fundament_pdf::{compose, fontdir, ComposeError, Manifest};

fn main() {
    // progress and skip notices should show without RUST_LOG being set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(error) = run() {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ComposeError> {
    let base_dir = std::env::current_dir()?;
    let manifest = Manifest::fundament_der_natur(&base_dir);
    let font_dirs = fontdir::candidate_dirs(&manifest.base_dir);

    let document = compose(&manifest, &font_dirs)?;
    let pages = document.page_count();

    let mut out = std::fs::File::create(&manifest.output_file)?;
    document.write(&mut out)?;

    println!(
        "PDF saved: {} ({pages} pages)",
        manifest.output_file.display()
    );
    Ok(())
}
