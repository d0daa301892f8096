use std::fs;
use std::path::PathBuf;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use env_logger::Env;
use log::{error, info};
use nbtjson::{gzip, json, Variant};
use nbtjson_tools::{check_input, check_output, default_output};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn paths(args: &ArgMatches, extension: &str) -> Result<(PathBuf, PathBuf)> {
    let input = check_input(args.value_of("input").unwrap_or_default())?;
    let output = match args.value_of("output") {
        Some(out) => check_output(out)?,
        None => default_output(&input, extension)?,
    };
    Ok((input, output))
}

fn variant(args: &ArgMatches) -> Result<Variant> {
    Ok(args.value_of("proto").unwrap_or_default().parse()?)
}

fn to_json(args: &ArgMatches) -> Result<()> {
    let (input, output) = paths(args, "json")?;
    let variant = variant(args)?;

    let data = fs::read(&input)?;
    let data = gzip::decompress_if_gzip(&data)?;
    let doc = nbtjson::from_bytes(&data, variant)?;
    info!("read {} as {} nbt", input.display(), variant);

    fs::write(&output, json::to_string_pretty(&doc)?)?;
    info!("json serialized: {}", output.display());
    Ok(())
}

fn to_nbt(args: &ArgMatches) -> Result<()> {
    let (input, output) = paths(args, "nbt")?;
    let variant = variant(args)?;

    let text = fs::read_to_string(&input)?;
    let doc = json::from_str(&text)?;

    let mut data = nbtjson::to_bytes(&doc, variant)?;
    if args.is_present("zip") {
        data = gzip::compress(&data)?;
    }

    fs::write(&output, data)?;
    info!("{} nbt written: {}", variant, output.display());
    Ok(())
}

fn io_args<'a, 'b>(cmd: App<'a, 'b>, input: &'b str, output: &'b str) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("input")
            .short("i")
            .long("input")
            .value_name("FILE")
            .help(input)
            .takes_value(true)
            .required(true),
    )
    .arg(
        Arg::with_name("output")
            .short("o")
            .long("output")
            .value_name("FILE")
            .help(output)
            .takes_value(true)
            .required(false),
    )
    .arg(
        Arg::with_name("proto")
            .short("p")
            .long("proto")
            .help("The nbt wire variant")
            .takes_value(true)
            .possible_values(&["big", "little", "littleVariant"])
            .default_value("big"),
    )
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbtjson")
        .about("Converts between binary NBT and JSON")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(io_args(
            SubCommand::with_name("tojson").about("Converts NBT to JSON"),
            "The nbt file to read, gzipped or not",
            "The file to write json text to",
        ))
        .subcommand(
            io_args(
                SubCommand::with_name("tonbt").about("Converts JSON to NBT"),
                "The json file to read",
                "The file to write nbt data to",
            )
            .arg(
                Arg::with_name("zip")
                    .short("z")
                    .long("zip")
                    .help("Gzip the nbt data")
                    .takes_value(false),
            ),
        )
        .get_matches();

    let res = match matches.subcommand() {
        ("tojson", Some(args)) => to_json(args),
        ("tonbt", Some(args)) => to_nbt(args),
        _ => Err(matches.usage().into()),
    };

    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
