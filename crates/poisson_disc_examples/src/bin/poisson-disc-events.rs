use poisson_disc::prelude::*;
use poisson_disc_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SamplerConfig::new(200.0, 200.0, 10.0);
    let sampler = PoissonDiscSampler::try_new(config)?;

    let mut max_attempts = 0;
    let mut sink = FnSink::new(|event| {
        if let SamplerEvent::CandidateAccepted { attempts, .. } = event {
            max_attempts = max_attempts.max(attempts);
        }
    });
    let run = sampler.run_with_events(&mut StdRng::seed_from_u64(3), &mut sink);

    // Same seed, so the same run; this time keep only the retirements.
    let mut retirements = VecSink::only([SamplerEventKind::BaseRetired]);
    sampler.run_with_events(&mut StdRng::seed_from_u64(3), &mut retirements);
    let peak_frontier = retirements
        .into_inner()
        .into_iter()
        .filter_map(|event| match event {
            SamplerEvent::BaseRetired { remaining, .. } => Some(remaining + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    info!(
        "{} points; slowest acceptance took {} attempts; frontier peaked at {} when retiring; {:?}.",
        run.points.len(),
        max_attempts,
        peak_frontier,
        run.stats
    );
    Ok(())
}
