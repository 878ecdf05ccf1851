//! The demo scenes, one primitive each

use math::Vec2D;
use render::{
    coverage::RadialFeather, draw_arc, draw_polyline, draw_segment, RenderContext, Renderer,
};
use settings::{Feather, Scene, Settings};
use tessellate::{Arc, Extrusion, JoinPolicy, Polyline, Quadrant, StrokeError, StrokeStyle};

const ARC_CENTER: Vec2D = Vec2D::new(100., 75.);
const ARC_RADIUS: f32 = 50.;

fn stroke_style(settings: &Settings) -> StrokeStyle {
    let miter_limit = settings.miter_limit;
    let join_policy = if settings.clamp_joins {
        JoinPolicy::Clamp { miter_limit }
    } else {
        JoinPolicy::FailFast { miter_limit }
    };

    StrokeStyle::new(settings.line_width()).with_join_policy(join_policy)
}

fn radial_feather(feather: Feather) -> RadialFeather {
    match feather {
        Feather::Reference => RadialFeather::Reference,
        Feather::Inset => RadialFeather::Inset,
    }
}

pub fn draw<R>(
    settings: &Settings,
    renderer: &mut R,
    context: &RenderContext,
) -> Result<(), R::Error>
where
    R: Renderer,
    R::Error: From<StrokeError>,
{
    let style = stroke_style(settings);
    log::debug!("Drawing {:?} with {style:?}", settings.scene);

    match settings.scene {
        Scene::Line => {
            // The vertex stage extrudes the segment, like a GPU would
            let style = style.with_extrusion(Extrusion::Deferred);
            draw_segment(
                renderer,
                Vec2D::new(10., 10.),
                Vec2D::new(100., 190.),
                &style,
                context,
            )
        },
        Scene::Joins => {
            log::debug!(
                "Joins may turn by at most {:.2} degrees",
                style.join_policy.max_turn_angle().degrees()
            );
            let polyline = Polyline::new(vec![
                Vec2D::new(50., 20.),
                Vec2D::new(120., 190.),
                Vec2D::new(200., 20.),
            ])?;
            draw_polyline(
                renderer,
                &polyline,
                &style,
                settings.seam_correction,
                context,
            )
        },
        Scene::Arc => {
            let arc = Arc::new(ARC_CENTER, ARC_RADIUS, Quadrant::UpperRight, 1)?;
            draw_arc(
                renderer,
                &arc,
                &style,
                radial_feather(settings.feather),
                context,
            )
        },
        Scene::Circle => draw_arc(
            renderer,
            &Arc::circle(ARC_CENTER, ARC_RADIUS),
            &style,
            radial_feather(settings.feather),
            context,
        ),
    }
}
