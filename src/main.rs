use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod error;
pub mod json_parsing;
pub mod misc_types;
pub mod network;
pub mod sir_model;
pub mod stats_methods;
pub mod time_series;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::TimeSeries(o) => o.execute(),
    }
    println!("Execution took {}", humantime::format_duration(start_time.elapsed()))
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "SIR simulations on synthetic contact networks with NPIs!")]
pub enum CmdOption
{
    TimeSeries(time_series::TimeSeries),
}
