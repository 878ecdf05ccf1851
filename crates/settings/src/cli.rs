use std::path::PathBuf;

use crate::{Feather, Scene, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "strokes", version, about = "Render antialiased strokes to an image", long_about = None)]
pub struct Arguments {
    /// Scene to render
    #[arg(value_enum, default_value_t = Scene::Joins)]
    scene: Scene,

    /// File to write the rendered image to (binary PPM)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Width of the image in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Height of the image in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Stroke width, defaults to a width suitable for the scene
    #[arg(long, value_parser = parse_positive)]
    line_width: Option<f32>,

    /// Hide the seams between joined segments
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    seam_correction: bool,

    /// How circular strokes fade out at their edges
    #[arg(long, value_enum)]
    feather: Option<Feather>,

    /// Bevel overly long miter joins instead of failing
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    clamp_joins: bool,

    /// Maximum miter length, relative to half the stroke width (at least 1)
    #[arg(long, value_parser = parse_miter_limit)]
    miter_limit: Option<f32>,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        settings.scene = self.scene;
        settings.seam_correction = self.seam_correction;
        settings.clamp_joins = self.clamp_joins;

        if let Some(output) = self.output {
            settings.output = output;
        }

        if let Some(width) = self.width {
            settings.width = width;
        }

        if let Some(height) = self.height {
            settings.height = height;
        }

        if let Some(line_width) = self.line_width {
            settings.line_width = Some(line_width);
        }

        if let Some(feather) = self.feather {
            settings.feather = feather;
        }

        if let Some(miter_limit) = self.miter_limit {
            settings.miter_limit = miter_limit;
        }
    }
}

fn parse_positive(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e: std::num::ParseFloatError| format!("{e}"))?;

    if value > 0. && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is not a positive number"))
    }
}

fn parse_miter_limit(s: &str) -> Result<f32, String> {
    let value = parse_positive(s)?;

    if value >= 1. {
        Ok(value)
    } else {
        Err(format!("a miter limit of {value} is shorter than half the stroke width"))
    }
}
