use{
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fs::File,
        io::BufReader,
        process::exit
    },
};

/// Reads the parameter json for a subcommand. Without a file the default
/// parameter set is printed as a template and the program exits, so
/// `subcommand > params.json` bootstraps a config.
pub fn parse<T>(json: Option<&String>) -> (T, Value)
where T: Default + Serialize + DeserializeOwned
{
    match json{
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(
                std::io::stdout(),
                &example
            ).expect("unable to write example json");
            println!();
            eprintln!("no json file given - example written to stdout");
            exit(0)
        },
        Some(file) => {
            let f = File::open(file)
                .expect("unable to open json file");
            let buf = BufReader::new(f);

            let json_value: Value = serde_json::from_reader(buf)
                .expect("invalid json");
            let opt: T = serde_json::from_value(json_value.clone())
                .expect("json does not match the expected parameters");
            (opt, json_value)
        }
    }
}
