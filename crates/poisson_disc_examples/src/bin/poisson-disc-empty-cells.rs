use glam::Vec2;
use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_points_to_png, DotStyle, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Small k leaves visible gaps for the cell fill to highlight.
    let config = SamplerConfig::new(710.0, 400.0, 15.0).with_sample_limit(3);
    let bounds = config.bounds();
    let sampler = PoissonDiscSampler::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(7);
    let run = sampler.run(&mut rng);

    let centers = fill_empty_cells(&run.grid, bounds, CellFill::Center, &mut rng);
    let jittered = fill_empty_cells(&run.grid, bounds, CellFill::Random, &mut rng);
    info!(
        "{} points, {} of {} cells empty.",
        run.points.len(),
        centers.len(),
        run.grid.len()
    );

    let render = RenderConfig::new((1420, 800), Vec2::new(710.0, 400.0));
    render_points_to_png(
        &[
            (centers.as_slice(), DotStyle::new([100, 100, 100], 6.0)),
            (jittered.as_slice(), DotStyle::new([200, 80, 60], 2.0)),
            (run.points.as_slice(), DotStyle::new([11, 72, 107], 7.0)),
        ],
        &render,
        "poisson-disc-empty-cells.png",
    )?;
    Ok(())
}
