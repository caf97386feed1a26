use {
    super::parser::*,
    serde_json::Value,
    std::{num::*, fs::File, io::BufWriter},
    crate::*,
    crate::sir_model::*,
    crate::stats_methods::*,
    rand_pcg::Pcg64,
    rand::SeedableRng,
    rayon::prelude::*,
};

pub fn run_time_series(
    param: TimeSeriesParams,
    json: Value,
    num_threads: Option<NonZeroUsize>
)
{
    let k = num_threads.unwrap_or(misc_types::ONE);
    // limit number of threads to k
    rayon::ThreadPoolBuilder::new().num_threads(k.get()).build_global().unwrap();

    let mut master_rng = Pcg64::seed_from_u64(param.sir_seed);
    let parameters = param.build_parameters(&mut master_rng);
    let n = parameters.node_count();

    // every sample gets its own stream drawn from the master
    let rngs: Vec<_> = (0..param.samples.get())
        .map(|_| Pcg64::from_rng(&mut master_rng).unwrap())
        .collect();

    let bar = indication_bar(param.samples.get() as u64);

    let results: Vec<_> = rngs.into_par_iter()
        .map(
            |rng|
            {
                let mut engine = EpidemicEngine::new(
                    param.graph_type,
                    parameters.clone(),
                    param.npi,
                    rng
                ).expect("invalid simulation parameters");

                engine.run(param.max_days)
                    .expect("simulation aborted");

                let daily = engine.daily_cases().to_vec();
                let cumulative = engine.cumulative_cases();
                let final_counts = [
                    engine.nodes_by_status(Status::Susceptible).len(),
                    engine.nodes_by_status(Status::Infected).len(),
                    engine.nodes_by_status(Status::Recovered).len(),
                ];
                bar.inc(1);
                (daily, cumulative, final_counts, engine.into_rng())
            }
        ).collect();
    bar.finish_with_message("Done");

    let frac = if param.fraction{
        Some(n as f64)
    }else{
        None
    };

    let max_days = param.max_days as usize;
    let daily_stats: Vec<_> = (0..max_days)
        .map(
            |day|
            {
                let slice: Vec<usize> = results.iter()
                    .map(|(daily, _, _, _)| daily[day])
                    .collect();
                MyVariance::from_slice(&slice, frac)
            }
        ).collect();
    let cumulative_stats: Vec<_> = (0..max_days)
        .map(
            |day|
            {
                let slice: Vec<usize> = results.iter()
                    .map(|(_, cumulative, _, _)| cumulative[day])
                    .collect();
                MyVariance::from_slice(&slice, frac)
            }
        ).collect();

    let name = param.quick_name(n, num_threads);
    println!("creating {name}");

    let mut writer = CaseWriter::new(&name)
        .expect("unable to create output file");
    writer.write_header(&[json])
        .expect("unable to write header");
    for day in 0..max_days{
        writer.write_day(day + 1, &daily_stats[day], &cumulative_stats[day])
            .expect("unable to write curve");
    }

    let [s, i, r] = results[0].2;
    println!("first sample ended with {s} susceptible, {i} infected, {r} recovered of {n}");

    // post-run generator state of the first sample, so the stream can be
    // picked up again in a later run
    let rng_name = format!("{name}.rng");
    let buf = BufWriter::new(
        File::create(&rng_name)
            .expect("unable to create rng state file")
    );
    bincode::serialize_into(buf, &results[0].3)
        .expect("unable to serialize rng state");
    println!("saved post-run rng state to {rng_name}");
}
