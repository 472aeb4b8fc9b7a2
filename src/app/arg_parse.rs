use std::{
    ffi::{OsStr, OsString},
    iter::once,
    path::PathBuf,
};

use image::Rgb;

use crate::{
    app::*,
    library::{definitions::*, CompositeCfg, InputCfg},
};

const BIN_NAME: &str = "hline_concat";

pub fn parse_args() -> Result<AppCfg, AppError> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<AppCfg, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let file_paths = "Input image paths";
    let show = "Show output";
    let disable_write = "Disable write";
    let output = "Output path";
    let number = "Number of lines";
    let interval = "Interval";
    let interval_rgb = "Interval colour";
    let line_rgb = "Line colour";
    let line_width = "Line width";
    let json_output = "Json output";
    let quiet = "Quiet";
    let verbose = "Verbose";
    let args_file = "Args file";
    let generate_completions = "Generate completions";

    let default_number_string = format!("{}", DEFAULT_LINE_COUNT);
    let default_interval_string = format!("{}", DEFAULT_INTERVAL);
    let default_line_width_string = format!("{}", DEFAULT_LINE_WIDTH);

    //args are not added through method chaining because this appears to break rustfmt.
    let mut clap_app = clap::App::new("Horizontal line concatenator")
        .version("0.1")
        .about("Plot horizontal lines through a single image or 2 concatenated images.");

    clap_app = clap_app.arg(
        clap::Arg::with_name(file_paths)
            .short("f")
            .long("file")
            .required_unless_one(&[args_file, generate_completions])
            .multiple(true)
            .min_values(1)
            .takes_value(true)
            .help("One or two images. Two images are placed side by side, the first on the left.")
            .display_order(1),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(show)
            .short("s")
            .long("show")
            .help("Show the output image in the system image viewer.")
            .display_order(2),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(disable_write)
            .long("disable-write")
            .alias("disable_write")
            .help("Do not save the output image (by default it is saved).")
            .display_order(3),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(output)
            .short("o")
            .long("output")
            .takes_value(true)
            .help("Output file path [default: concatenated.jpg]. This option implies enabling write.")
            .display_order(4),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(number)
            .short("n")
            .long("number")
            .takes_value(true)
            .default_value(&default_number_string)
            .help("The number of lines plotted along the y-axis."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(interval)
            .short("i")
            .long("interval")
            .takes_value(true)
            .default_value(&default_interval_string)
            .help("Only used with 2 images: the number of padding pixels between the images."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(interval_rgb)
            .long("interval-rgb")
            .alias("interval_rgb")
            .number_of_values(3)
            .value_names(&["R", "G", "B"])
            .help("The padding colour between the images [default: 0 0 0]."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(line_rgb)
            .long("line-rgb")
            .alias("line_rgb")
            .number_of_values(3)
            .value_names(&["R", "G", "B"])
            .help("The colour of the horizontal lines [default: 0 0 0]."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(line_width)
            .long("line-width")
            .alias("line_width")
            .takes_value(true)
            .default_value(&default_line_width_string)
            .help("The thickness of the horizontal lines in pixels."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(json_output)
            .long("json-output")
            .help("Print a summary of the composite (size, line positions) in json format"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(quiet)
            .long("quiet")
            .help("Quiet verbosity: Only print errors, warnings and output")
            .conflicts_with(verbose),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(verbose)
            .long("verbose")
            .help("Print debugging information and the full cause of any error"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(args_file)
            .long("args-file")
            .takes_value(true)
            .help("Read command line arguments from a file")
            .conflicts_with(file_paths),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(generate_completions)
            .long("generate-completions")
            .takes_value(true)
            .possible_values(&clap::Shell::variants())
            .help("Print a shell completion script to stdout and exit"),
    );

    let mut completions_app = clap_app.clone();

    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
    let mut matches = clap_app.clone().get_matches_from(args.iter().cloned());

    //first check if a Args file is present. If so, then read it and use the arguments from within.
    if let Some(args_fname) = matches.value_of_os(args_file) {
        let file_args = read_args_file(args_fname)?;

        //slight bodge: need to prepend program name to as this is what would be seen in a direct shell invocation.
        let program_name = args
            .get(0)
            .cloned()
            .unwrap_or_else(|| OsString::from(BIN_NAME));
        let file_args = once(program_name).chain(file_args.into_iter().map(OsString::from));

        matches = clap_app.get_matches_from(file_args);
    }

    if let Some(shell) = matches.value_of(generate_completions) {
        //possible_values has already restricted this to a known shell.
        if let Ok(shell) = shell.parse::<clap::Shell>() {
            completions_app.gen_completions_to(BIN_NAME, shell, &mut std::io::stdout());
        }
        std::process::exit(0);
    }

    let image_paths: Vec<PathBuf> = match matches.values_of_os(file_paths) {
        Some(paths) => paths.map(PathBuf::from).collect(),
        None => vec![],
    };
    if image_paths.is_empty() || image_paths.len() > MAX_INPUT_IMAGES {
        return Err(AppError::InputCount(image_paths.len()));
    }

    let line_width = parse_u32(&matches, line_width, "--line-width")?;
    if line_width == 0 {
        return Err(AppError::ZeroLineWidth);
    }

    let composite_cfg = CompositeCfg {
        line_count: parse_u32(&matches, number, "--number")?,
        line_width,
        line_rgb: parse_rgb(&matches, line_rgb, "--line-rgb", DEFAULT_LINE_RGB)?,
        interval: parse_u32(&matches, interval, "--interval")?,
        interval_rgb: parse_rgb(&matches, interval_rgb, "--interval-rgb", DEFAULT_INTERVAL_RGB)?,
    };

    //an explicit --output re-enables writing.
    let output_path = match matches.value_of_os(output) {
        Some(path) => Some(PathBuf::from(path)),
        None if matches.is_present(disable_write) => None,
        None => Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
    };

    let verbosity = if matches.is_present(quiet) {
        ReportVerbosity::Quiet
    } else if matches.is_present(verbose) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    let output_cfg = OutputCfg {
        output_path,
        show: matches.is_present(show),
        json_output: matches.is_present(json_output),
        verbosity,
    };

    let ret = AppCfg {
        input_cfg: InputCfg { image_paths },
        composite_cfg,
        output_cfg,
    };

    Ok(ret)
}

//The arguments file needs to be split into args in the same way as the shell would do it,
//after stripping comments.
fn read_args_file(args_fname: &OsStr) -> Result<Vec<String>, AppError> {
    let args_path = PathBuf::from(args_fname);

    let args = match std::fs::read_to_string(&args_path) {
        Ok(args) => args,
        Err(e) => return Err(AppError::ArgsFileNotFound(args_path, e)),
    };

    let args_file_contents = match comment::shell::strip(args) {
        Ok(args_file_contents) => args_file_contents,
        Err(e) => return Err(AppError::ArgsFileParse(args_path, e.to_string())),
    };

    match shell_words::split(&args_file_contents) {
        Ok(args) => Ok(args),
        Err(e) => Err(AppError::ArgsFileParse(args_path, e.to_string())),
    }
}

fn parse_u32(matches: &clap::ArgMatches, name: &str, flag: &'static str) -> Result<u32, AppError> {
    let value = matches.value_of(name).unwrap_or_else(|| unreachable!());
    value
        .parse()
        .map_err(|_e| AppError::ParseNumber(flag, value.to_string()))
}

fn parse_rgb(
    matches: &clap::ArgMatches,
    name: &str,
    flag: &'static str,
    default: Rgb<u8>,
) -> Result<Rgb<u8>, AppError> {
    let values = match matches.values_of(name) {
        Some(values) => values.collect::<Vec<_>>(),
        None => return Ok(default),
    };

    let channels = values
        .iter()
        .map(|v| v.parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_e| AppError::ParseColor(flag, values.join(" ")))?;

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgb([r, g, b])),
        _ => Err(AppError::ParseColor(flag, values.join(" "))),
    }
}
