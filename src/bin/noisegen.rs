// noisegen - Batch gaussian noise for rendered images
//
// Reads every .png/.jpg/.jpeg in the input folder, adds per-pixel
// gaussian noise to the color channels (alpha preserved), and writes
// noisy_<name> files into the output folder.
//
// Usage: noisegen <input_dir> <output_dir> [--mean N] [--std N]

use std::env;
use std::path::PathBuf;

use cellsynth::noise;

#[derive(Debug)]
struct Options {
    input: PathBuf,
    output: PathBuf,
    mean: f64,
    std_dev: f64,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    if args.len() < 3 {
        return Err(format!(
            "Usage: {} <input_dir> <output_dir> [--mean N] [--std N]",
            args.first().map(String::as_str).unwrap_or("noisegen")
        ));
    }

    let mut options = Options {
        input: PathBuf::from(&args[1]),
        output: PathBuf::from(&args[2]),
        mean: 0.0,
        std_dev: 25.0,
    };

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--mean" => {
                options.mean = parse_value(args.get(i + 1), "--mean")?;
                i += 2;
            }
            "--std" => {
                options.std_dev = parse_value(args.get(i + 1), "--std")?;
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(options)
}

// A typo must not silently run with the default parameters.
fn parse_value(arg: Option<&String>, flag: &str) -> Result<f64, String> {
    arg.and_then(|s| s.parse().ok())
        .ok_or_else(|| format!("invalid value for {flag} (expected a number)"))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    println!(
        "Adding noise (mean {}, std {}) to images in {}...",
        options.mean,
        options.std_dev,
        options.input.display()
    );

    match noise::process_folder(&options.input, &options.output, options.mean, options.std_dev) {
        Ok(count) => println!("Done! {count} files written to {}", options.output.display()),
        Err(err) => {
            eprintln!("noisegen: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_apply_without_flags() {
        let options = parse_args(&args(&["noisegen", "in", "out"])).unwrap();
        assert_eq!(options.input, PathBuf::from("in"));
        assert_eq!(options.output, PathBuf::from("out"));
        assert_eq!(options.mean, 0.0);
        assert_eq!(options.std_dev, 25.0);
    }

    #[test]
    fn flags_override_defaults() {
        let options =
            parse_args(&args(&["noisegen", "in", "out", "--mean", "5", "--std", "12.5"])).unwrap();
        assert_eq!(options.mean, 5.0);
        assert_eq!(options.std_dev, 12.5);
    }

    #[test]
    fn malformed_flag_value_is_an_error() {
        let err = parse_args(&args(&["noisegen", "in", "out", "--std", "abc"])).unwrap_err();
        assert!(err.contains("--std"));

        let err = parse_args(&args(&["noisegen", "in", "out", "--mean"])).unwrap_err();
        assert!(err.contains("--mean"));
    }

    #[test]
    fn missing_directories_print_usage() {
        let err = parse_args(&args(&["noisegen", "in"])).unwrap_err();
        assert!(err.starts_with("Usage:"));
    }
}
