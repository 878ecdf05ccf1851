//! Command line configuration for the stroke renderer

mod cli;

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

/// The demo scenes that can be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Scene {
    /// A single straight segment
    Line,

    /// Two segments connected by a miter join
    Joins,

    /// A quarter circle
    Arc,

    /// A full circle
    Circle,
}

impl Scene {
    /// Stroke width used when none is given on the command line
    #[must_use]
    pub fn default_line_width(self) -> f32 {
        match self {
            Self::Line | Self::Joins => 4.,
            Self::Arc | Self::Circle => 20.,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Feather {
    /// Fade out over one pixel centered on the edge
    #[default]
    Reference,

    /// Fade out over the last pixel inside the edge
    Inset,
}

/// Holds all the configurable information for a single render
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub scene: Scene,

    /// Where to write the image to
    pub output: PathBuf,

    pub width: usize,
    pub height: usize,

    /// Stroke width, `None` means the scene picks one
    pub line_width: Option<f32>,

    pub seam_correction: bool,
    pub feather: Feather,
    pub clamp_joins: bool,
    pub miter_limit: f32,
}

impl Settings {
    pub const DEFAULT_MITER_LIMIT: f32 = 100.;

    /// Read the settings from the process's command line arguments.
    ///
    /// Exits the process with a usage message if the arguments are invalid.
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }

    /// Read the settings from an explicit list of arguments, the first one
    /// being the program name
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Self::default();
        cli::Arguments::try_parse_from(args)?.update_settings(&mut settings);
        Ok(settings)
    }

    /// The stroke width to render with
    #[must_use]
    pub fn line_width(&self) -> f32 {
        self.line_width
            .unwrap_or_else(|| self.scene.default_line_width())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene: Scene::Joins,
            output: PathBuf::from("strokes.ppm"),
            width: 300,
            height: 200,
            line_width: None,
            seam_correction: false,
            feather: Feather::default(),
            clamp_joins: false,
            miter_limit: Self::DEFAULT_MITER_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Feather, Scene, Settings};

    #[test]
    fn defaults() {
        let settings = Settings::try_from_args(["strokes"]).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.line_width(), 4.);
    }

    #[test]
    fn scene_picks_line_width() {
        let settings = Settings::try_from_args(["strokes", "circle"]).unwrap();
        assert_eq!(settings.scene, Scene::Circle);
        assert_eq!(settings.line_width(), 20.);

        let settings =
            Settings::try_from_args(["strokes", "circle", "--line-width", "3.5"]).unwrap();
        assert_eq!(settings.line_width(), 3.5);
    }

    #[test]
    fn all_options() {
        let settings = Settings::try_from_args([
            "strokes",
            "line",
            "-o",
            "out.ppm",
            "--width",
            "640",
            "--height",
            "480",
            "--seam-correction",
            "--feather",
            "inset",
            "--clamp-joins",
            "--miter-limit",
            "8",
        ])
        .unwrap();

        assert_eq!(settings.scene, Scene::Line);
        assert_eq!(settings.output, PathBuf::from("out.ppm"));
        assert_eq!((settings.width, settings.height), (640, 480));
        assert!(settings.seam_correction);
        assert_eq!(settings.feather, Feather::Inset);
        assert!(settings.clamp_joins);
        assert_eq!(settings.miter_limit, 8.);
    }

    #[test]
    fn rejects_invalid_widths() {
        assert!(Settings::try_from_args(["strokes", "--line-width", "0"]).is_err());
        assert!(Settings::try_from_args(["strokes", "--line-width", "-2"]).is_err());
        assert!(Settings::try_from_args(["strokes", "--miter-limit", "nan"]).is_err());
        assert!(Settings::try_from_args(["strokes", "--miter-limit", "0.5"]).is_err());
        assert!(Settings::try_from_args(["strokes", "--miter-limit", "1"]).is_ok());
        assert!(Settings::try_from_args(["strokes", "pentagon"]).is_err());
    }
}
