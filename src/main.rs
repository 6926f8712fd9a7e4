use std::path::Path;

fn run(output: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let mut controller = mandelbrot_explorer::CliRenderController::new(presenter);

    controller.generate()?;
    controller.write(output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run("output/mandelbrot.ppm")
}
