use glam::Vec2;
use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_points_to_png, DotStyle, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SamplerConfig::new(710.0, 400.0, 15.0).with_sample_limit(30);
    let sampler = PoissonDiscSampler::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(42);
    let points = sampler.generate(&mut rng);

    let render = RenderConfig::new((710, 400), Vec2::new(710.0, 400.0));
    render_points_to_png(
        &[(points.as_slice(), DotStyle::new([11, 72, 107], 3.5))],
        &render,
        "poisson-disc-canvas.png",
    )?;
    Ok(())
}
