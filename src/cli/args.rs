//! CLI argument parsing

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Paths to query, in argument order
    pub paths: Vec<String>,
    pub apparent: bool,
    pub bytes: bool,
    pub total: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--apparent" => {
                cli.apparent = true;
            }
            "--bytes" => {
                cli.bytes = true;
            }
            "--total" => {
                cli.total = true;
            }
            "--json" => {
                cli.json = true;
            }
            "--quiet" => {
                cli.quiet = true;
            }
            a if !a.starts_with("--") => {
                // Paths are taken verbatim, including relative and odd ones
                cli.paths.push(a.to_string());
            }
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    if cli.paths.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(cli)
}
