mod scene;

use std::{fs, io, process::ExitCode};

use render::{RenderContext, RenderError, Renderer, SoftwareRenderer};
use settings::Settings;

pub fn main() -> ExitCode {
    // Register a custom panic handler
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!(
            "The renderer has panicked. This is a bug. Please open an issue at {}, including the debug information below. Thanks!\n",
            env!("CARGO_PKG_REPOSITORY")
        );
        default_hook(info);
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::init();

    match run(&settings) {
        Ok(()) => {
            log::info!("Wrote {:?} to {}", settings.scene, settings.output.display());
            ExitCode::SUCCESS
        },
        Err(error) => {
            log::error!("Failed to render {:?}: {error}", settings.scene);
            if let Some(source) = std::error::Error::source(&error) {
                log::error!("Caused by: {source}");
            }
            ExitCode::FAILURE
        },
    }
}

fn run(settings: &Settings) -> Result<(), RenderError> {
    let context = RenderContext::new(settings.width, settings.height);
    let mut renderer = SoftwareRenderer::new(settings.width, settings.height);
    renderer.clear(context.clear_color);

    scene::draw(settings, &mut renderer, &context)?;

    let file = fs::File::create(&settings.output)?;
    renderer
        .texture()
        .write_ppm(io::BufWriter::new(file))?;
    Ok(())
}
