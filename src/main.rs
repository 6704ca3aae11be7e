fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = escape_field::ExplorerConfig::default();
    let output_path = config.output_path.clone();
    let presenter = escape_field::PpmFilePresenter::new();
    let mut controller = escape_field::CliRenderController::new(presenter, config);

    controller.generate()?;
    controller.write(output_path)?;

    Ok(())
}
